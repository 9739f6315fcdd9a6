use super::subscribers::NavigateToActionTargetSubscriber;
use crate::error::NotifierError;
use crate::shared::usecase::{execute, Subscriber, UseCase};
use actix_web::{web, HttpResponse};
use medtrack_notifier_api_structs::act_on_toast::APIResponse;
use medtrack_notifier_domain::NotificationEntry;
use medtrack_notifier_infra::NotifierContext;

pub async fn act_on_toast_controller(
    ctx: web::Data<NotifierContext>,
) -> Result<HttpResponse, NotifierError> {
    let usecase = ActOnToastUseCase {};

    execute(usecase, &ctx)
        .await
        .map(|entry| HttpResponse::Ok().json(APIResponse::new(entry)))
        .map_err(NotifierError::from)
}

/// The user followed the action of the visible toast: its entry is marked
/// read, the toast is hidden and the action target is forwarded for
/// navigation.
#[derive(Debug)]
pub struct ActOnToastUseCase {}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NoVisibleToast,
}

impl From<UseCaseError> for NotifierError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NoVisibleToast => Self::NotFound("There is no visible toast.".into()),
        }
    }
}

#[async_trait::async_trait]
impl UseCase for ActOnToastUseCase {
    type Response = NotificationEntry;

    type Error = UseCaseError;

    const NAME: &'static str = "ActOnToast";

    async fn execute(&mut self, ctx: &NotifierContext) -> Result<Self::Response, Self::Error> {
        ctx.store.act_on_toast().ok_or(UseCaseError::NoVisibleToast)
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(NavigateToActionTargetSubscriber)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::add_notification::AddNotificationUseCase;
    use crate::shared::testing::setup_context;
    use medtrack_notifier_domain::{NewNotification, NotificationKind, REMINDERS_VIEW};

    #[tokio::test]
    async fn it_marks_read_hides_toast_and_navigates() {
        let test = setup_context();
        let ctx = &test.ctx;
        let usecase = AddNotificationUseCase {
            notification: NewNotification::new(NotificationKind::Reminder, "Take", "now")
                .with_action(REMINDERS_VIEW, None),
        };
        let entry = match execute(usecase, ctx).await {
            Ok(entry) => entry,
            Err(e) => match e {},
        };

        let acted = execute(ActOnToastUseCase {}, ctx).await.unwrap();
        assert_eq!(acted.id, entry.id);
        assert!(!ctx.store.toast().visible);
        assert_eq!(ctx.store.unread_count(), 0);
        assert_eq!(*test.navigator.targets.lock(), vec![REMINDERS_VIEW.to_string()]);

        assert_eq!(
            execute(ActOnToastUseCase {}, ctx).await.unwrap_err(),
            UseCaseError::NoVisibleToast
        );
        assert_eq!(test.navigator.targets.lock().len(), 1);
    }

    #[tokio::test]
    async fn it_does_not_navigate_without_target() {
        let test = setup_context();
        let ctx = &test.ctx;
        let usecase = AddNotificationUseCase {
            notification: NewNotification::new(NotificationKind::Success, "Saved", ""),
        };
        execute(usecase, ctx).await.unwrap();

        assert!(execute(ActOnToastUseCase {}, ctx).await.is_ok());
        assert!(test.navigator.targets.lock().is_empty());
    }
}
