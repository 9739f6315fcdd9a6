use crate::error::NotifierError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use medtrack_notifier_api_structs::mark_notification_read::{APIResponse, PathParams};
use medtrack_notifier_domain::EntryId;
use medtrack_notifier_infra::NotifierContext;

pub async fn mark_notification_read_controller(
    ctx: web::Data<NotifierContext>,
    path: web::Path<PathParams>,
) -> Result<HttpResponse, NotifierError> {
    let usecase = MarkNotificationReadUseCase {
        notification_id: path.into_inner().notification_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|unread| HttpResponse::Ok().json(APIResponse::new(unread)))
        .map_err(NotifierError::from)
}

/// Marks one entry as read. Leaves the toast as it is, even when it shows
/// this entry.
#[derive(Debug)]
pub struct MarkNotificationReadUseCase {
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
impl UseCase for MarkNotificationReadUseCase {
    /// Unread count after the update
    type Response = usize;

    type Error = UseCaseError;

    const NAME: &'static str = "MarkNotificationRead";

    async fn execute(&mut self, ctx: &NotifierContext) -> Result<Self::Response, Self::Error> {
        if !ctx.store.mark_as_read(&self.notification_id) {
            return Err(UseCaseError::NotFound(self.notification_id.clone()));
        }
        Ok(ctx.store.unread_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::add_notification::AddNotificationUseCase;
    use crate::shared::testing::setup_context;
    use medtrack_notifier_domain::{NewNotification, NotificationKind};

    #[tokio::test]
    async fn it_marks_entry_read_without_hiding_toast() {
        let test = setup_context();
        let ctx = &test.ctx;
        let mut usecase = AddNotificationUseCase {
            notification: NewNotification::new(NotificationKind::Info, "Saved", ""),
        };
        let entry = match usecase.execute(ctx).await {
            Ok(entry) => entry,
            Err(e) => match e {},
        };

        let mut usecase = MarkNotificationReadUseCase {
            notification_id: entry.id.clone(),
        };
        assert_eq!(usecase.execute(ctx).await, Ok(0));
        assert!(ctx.store.find(&entry.id).unwrap().is_read());
        assert!(ctx.store.toast().visible);
    }

    #[tokio::test]
    async fn it_rejects_unknown_entry() {
        let test = setup_context();
        let mut usecase = MarkNotificationReadUseCase {
            notification_id: "missing".into(),
        };
        assert_eq!(
            usecase.execute(&test.ctx).await,
            Err(UseCaseError::NotFound("missing".into()))
        );
        assert_eq!(test.ctx.store.unread_count(), 0);
    }
}
