use crate::error::NotifierError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use medtrack_notifier_api_structs::{get_notifications, get_unread_count};
use medtrack_notifier_domain::NotificationEntry;
use medtrack_notifier_infra::NotifierContext;

pub async fn get_notifications_controller(
    ctx: web::Data<NotifierContext>,
) -> Result<HttpResponse, NotifierError> {
    let usecase = GetNotificationsUseCase {};

    execute(usecase, &ctx)
        .await
        .map(|(entries, unread)| {
            HttpResponse::Ok().json(get_notifications::APIResponse::new(entries, unread))
        })
        .map_err(NotifierError::from)
}

pub async fn get_unread_count_controller(
    ctx: web::Data<NotifierContext>,
) -> Result<HttpResponse, NotifierError> {
    let usecase = GetNotificationsUseCase {};

    execute(usecase, &ctx)
        .await
        .map(|(_, unread)| HttpResponse::Ok().json(get_unread_count::APIResponse::new(unread)))
        .map_err(NotifierError::from)
}

#[derive(Debug)]
pub struct GetNotificationsUseCase {}

#[derive(Debug)]
pub enum UseCaseError {}

impl From<UseCaseError> for NotifierError {
    fn from(e: UseCaseError) -> Self {
        match e {}
    }
}

#[async_trait::async_trait]
impl UseCase for GetNotificationsUseCase {
    /// Entries newest first together with the number of unread ones
    type Response = (Vec<NotificationEntry>, usize);

    type Error = UseCaseError;

    const NAME: &'static str = "GetNotifications";

    async fn execute(&mut self, ctx: &NotifierContext) -> Result<Self::Response, Self::Error> {
        Ok(ctx.store.snapshot())
    }
}
