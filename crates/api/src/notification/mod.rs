pub mod add_notification;
mod clear_notifications;
mod get_notifications;
mod mark_all_notifications_read;
mod mark_notification_read;
mod remove_notification;
mod subscribers;

use actix_web::web;
use add_notification::add_notification_controller;
use clear_notifications::clear_notifications_controller;
use get_notifications::{get_notifications_controller, get_unread_count_controller};
use mark_all_notifications_read::mark_all_notifications_read_controller;
use mark_notification_read::mark_notification_read_controller;
use remove_notification::remove_notification_controller;

pub use clear_notifications::ClearNotificationsUseCase;
pub use get_notifications::GetNotificationsUseCase;
pub use mark_all_notifications_read::MarkAllNotificationsReadUseCase;
pub use mark_notification_read::MarkNotificationReadUseCase;
pub use remove_notification::RemoveNotificationUseCase;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/notifications",
        web::post().to(add_notification_controller),
    );
    cfg.route(
        "/notifications",
        web::get().to(get_notifications_controller),
    );
    cfg.route(
        "/notifications",
        web::delete().to(clear_notifications_controller),
    );
    cfg.route(
        "/notifications/unread",
        web::get().to(get_unread_count_controller),
    );
    cfg.route(
        "/notifications/read",
        web::put().to(mark_all_notifications_read_controller),
    );
    cfg.route(
        "/notifications/{notification_id}/read",
        web::put().to(mark_notification_read_controller),
    );
    cfg.route(
        "/notifications/{notification_id}",
        web::delete().to(remove_notification_controller),
    );
}
