use crate::error::NotifierError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use medtrack_notifier_api_structs::remove_notification::{APIResponse, PathParams};
use medtrack_notifier_domain::{EntryId, NotificationEntry};
use medtrack_notifier_infra::NotifierContext;

pub async fn remove_notification_controller(
    ctx: web::Data<NotifierContext>,
    path: web::Path<PathParams>,
) -> Result<HttpResponse, NotifierError> {
    let usecase = RemoveNotificationUseCase {
        notification_id: path.into_inner().notification_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|entry| HttpResponse::Ok().json(APIResponse::new(entry)))
        .map_err(NotifierError::from)
}

/// Deletes an entry from the list. The toast keeps its own copy and is not
/// affected.
#[derive(Debug)]
pub struct RemoveNotificationUseCase {
    pub notification_id: EntryId,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(EntryId),
}

impl From<UseCaseError> for NotifierError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(id) => {
                Self::NotFound(format!("The notification with id: {}, was not found.", id))
            }
        }
    }
}

#[async_trait::async_trait]
impl UseCase for RemoveNotificationUseCase {
    type Response = NotificationEntry;

    type Error = UseCaseError;

    const NAME: &'static str = "RemoveNotification";

    async fn execute(&mut self, ctx: &NotifierContext) -> Result<Self::Response, Self::Error> {
        ctx.store
            .remove(&self.notification_id)
            .ok_or_else(|| UseCaseError::NotFound(self.notification_id.clone()))
    }
}
