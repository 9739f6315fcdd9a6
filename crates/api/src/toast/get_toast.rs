use crate::error::NotifierError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use medtrack_notifier_api_structs::get_toast::APIResponse;
use medtrack_notifier_domain::ToastState;
use medtrack_notifier_infra::NotifierContext;

pub async fn get_toast_controller(
    ctx: web::Data<NotifierContext>,
) -> Result<HttpResponse, NotifierError> {
    let usecase = GetToastUseCase {};

    execute(usecase, &ctx)
        .await
        .map(|toast| HttpResponse::Ok().json(APIResponse::new(toast)))
        .map_err(NotifierError::from)
}

#[derive(Debug)]
pub struct GetToastUseCase {}

#[derive(Debug)]
pub enum UseCaseError {}

impl From<UseCaseError> for NotifierError {
    fn from(e: UseCaseError) -> Self {
        match e {}
    }
}

#[async_trait::async_trait]
impl UseCase for GetToastUseCase {
    type Response = ToastState;

    type Error = UseCaseError;

    const NAME: &'static str = "GetToast";

    async fn execute(&mut self, ctx: &NotifierContext) -> Result<Self::Response, Self::Error> {
        Ok(ctx.store.toast())
    }
}
