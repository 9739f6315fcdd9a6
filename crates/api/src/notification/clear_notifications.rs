use crate::error::NotifierError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use medtrack_notifier_api_structs::clear_notifications::APIResponse;
use medtrack_notifier_infra::NotifierContext;

pub async fn clear_notifications_controller(
    ctx: web::Data<NotifierContext>,
) -> Result<HttpResponse, NotifierError> {
    let usecase = ClearNotificationsUseCase {};

    execute(usecase, &ctx)
        .await
        .map(|removed| HttpResponse::Ok().json(APIResponse { removed }))
        .map_err(NotifierError::from)
}

#[derive(Debug)]
pub struct ClearNotificationsUseCase {}

#[derive(Debug)]
pub enum UseCaseError {}

impl From<UseCaseError> for NotifierError {
    fn from(e: UseCaseError) -> Self {
        match e {}
    }
}

#[async_trait::async_trait]
impl UseCase for ClearNotificationsUseCase {
    /// Number of removed entries
    type Response = usize;

    type Error = UseCaseError;

    const NAME: &'static str = "ClearNotifications";

    async fn execute(&mut self, ctx: &NotifierContext) -> Result<Self::Response, Self::Error> {
        Ok(ctx.store.clear_all())
    }
}
