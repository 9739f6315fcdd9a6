mod act_on_toast;
mod dismiss_toast;
mod get_toast;
mod subscribers;

use act_on_toast::act_on_toast_controller;
use actix_web::web;
use dismiss_toast::dismiss_toast_controller;
use get_toast::get_toast_controller;

pub use act_on_toast::ActOnToastUseCase;
pub use dismiss_toast::DismissToastUseCase;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/toast", web::get().to(get_toast_controller));
    cfg.route("/toast", web::delete().to(dismiss_toast_controller));
    cfg.route("/toast/action", web::post().to(act_on_toast_controller));
}
