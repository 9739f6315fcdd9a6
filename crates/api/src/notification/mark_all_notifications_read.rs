use crate::error::NotifierError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use medtrack_notifier_api_structs::mark_all_notifications_read::APIResponse;
use medtrack_notifier_infra::NotifierContext;

pub async fn mark_all_notifications_read_controller(
    ctx: web::Data<NotifierContext>,
) -> Result<HttpResponse, NotifierError> {
    let usecase = MarkAllNotificationsReadUseCase {};

    execute(usecase, &ctx)
        .await
        .map(|unread| HttpResponse::Ok().json(APIResponse::new(unread)))
        .map_err(NotifierError::from)
}

#[derive(Debug)]
pub struct MarkAllNotificationsReadUseCase {}

#[derive(Debug)]
pub enum UseCaseError {}

impl From<UseCaseError> for NotifierError {
    fn from(e: UseCaseError) -> Self {
        match e {}
    }
}

#[async_trait::async_trait]
impl UseCase for MarkAllNotificationsReadUseCase {
    type Response = usize;

    type Error = UseCaseError;

    const NAME: &'static str = "MarkAllNotificationsRead";

    async fn execute(&mut self, ctx: &NotifierContext) -> Result<Self::Response, Self::Error> {
        ctx.store.mark_all_as_read();
        Ok(ctx.store.unread_count())
    }
}
