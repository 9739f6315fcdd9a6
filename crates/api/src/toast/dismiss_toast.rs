use crate::error::NotifierError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use medtrack_notifier_api_structs::dismiss_toast::APIResponse;
use medtrack_notifier_domain::ToastState;
use medtrack_notifier_infra::NotifierContext;

pub async fn dismiss_toast_controller(
    ctx: web::Data<NotifierContext>,
) -> Result<HttpResponse, NotifierError> {
    let usecase = DismissToastUseCase {};

    execute(usecase, &ctx)
        .await
        .map(|toast| HttpResponse::Ok().json(APIResponse::new(toast)))
        .map_err(NotifierError::from)
}

/// Hides the toast and cancels its pending auto dismiss. The entry stays in
/// the list.
#[derive(Debug)]
pub struct DismissToastUseCase {}

#[derive(Debug)]
pub enum UseCaseError {}

impl From<UseCaseError> for NotifierError {
    fn from(e: UseCaseError) -> Self {
        match e {}
    }
}

#[async_trait::async_trait]
impl UseCase for DismissToastUseCase {
    type Response = ToastState;

    type Error = UseCaseError;

    const NAME: &'static str = "DismissToast";

    async fn execute(&mut self, ctx: &NotifierContext) -> Result<Self::Response, Self::Error> {
        ctx.store.dismiss_toast();
        Ok(ctx.store.toast())
    }
}
