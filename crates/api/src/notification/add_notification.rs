use super::subscribers::PlayReminderCueSubscriber;
use crate::error::NotifierError;
use crate::shared::usecase::{execute, Subscriber, UseCase};
use actix_web::{web, HttpResponse};
use medtrack_notifier_api_structs::add_notification::{APIResponse, RequestBody};
use medtrack_notifier_domain::{EntryId, NewNotification, NotificationEntry, NotificationKind};
use medtrack_notifier_infra::NotifierContext;

pub async fn add_notification_controller(
    ctx: web::Data<NotifierContext>,
    body: web::Json<RequestBody>,
) -> Result<HttpResponse, NotifierError> {
    let body = body.into_inner();
    let kind = body
        .kind
        .parse::<NotificationKind>()
        .map_err(|e| NotifierError::BadClientData(e.to_string()))?;

    let notification = NewNotification {
        kind,
        title: body.title,
        body: body.body,
        action_target: body.action_target,
        action_label: body.action_label,
        medication_id: body.medication_id,
        reminder_id: body.reminder_id,
    };
    let usecase = AddNotificationUseCase { notification };

    execute(usecase, &ctx)
        .await
        .map(|entry| HttpResponse::Created().json(APIResponse::new(entry)))
        .map_err(NotifierError::from)
}

/// Creates a `NotificationEntry`, puts it first in the list and surfaces it
/// as the toast
#[derive(Debug)]
pub struct AddNotificationUseCase {
    pub notification: NewNotification,
}

#[derive(Debug)]
pub enum UseCaseError {}

impl From<UseCaseError> for NotifierError {
    fn from(e: UseCaseError) -> Self {
        match e {}
    }
}

#[async_trait::async_trait]
impl UseCase for AddNotificationUseCase {
    type Response = NotificationEntry;

    type Error = UseCaseError;

    const NAME: &'static str = "AddNotification";

    async fn execute(&mut self, ctx: &NotifierContext) -> Result<Self::Response, Self::Error> {
        let now = ctx.sys.get_timestamp_millis();
        let entry = NotificationEntry::new(
            EntryId::generate(now),
            now,
            self.notification.clone(),
        );
        ctx.store.add(entry.clone(), ctx.toast_timeout());

        Ok(entry)
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(PlayReminderCueSubscriber)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::testing::{
        setup_context, setup_context_with, RecordingAudioCue, RecordingNativeNotifier, NOW,
    };

    async fn add(ctx: &NotifierContext, kind: NotificationKind, title: &str) -> NotificationEntry {
        let usecase = AddNotificationUseCase {
            notification: NewNotification::new(kind, title, "body"),
        };
        match execute(usecase, ctx).await {
            Ok(entry) => entry,
            Err(e) => match e {},
        }
    }

    #[tokio::test]
    async fn it_adds_notification_as_first_unread_entry_and_toast() {
        let test = setup_context();
        let ctx = &test.ctx;

        let first = add(ctx, NotificationKind::Success, "first").await;
        let second = add(ctx, NotificationKind::Warning, "second").await;

        assert_eq!(first.created, NOW);
        assert!(!second.is_read());
        assert_ne!(first.id, second.id);
        assert_eq!(ctx.store.unread_count(), 2);

        let entries = ctx.store.notifications();
        assert_eq!(entries[0].id, second.id);
        assert_eq!(entries[1].id, first.id);

        let toast = ctx.store.toast();
        assert!(toast.visible);
        assert_eq!(toast.entry.map(|e| e.id), Some(second.id));
    }

    #[tokio::test]
    async fn it_passes_empty_strings_through() {
        let test = setup_context();
        let entry = add(&test.ctx, NotificationKind::Info, "").await;
        assert_eq!(entry.title, "");
        assert_eq!(entry.body, "body");
    }

    #[tokio::test]
    async fn it_plays_audio_cue_only_for_reminders() {
        let test = setup_context();
        let ctx = &test.ctx;

        for kind in [
            NotificationKind::Success,
            NotificationKind::Warning,
            NotificationKind::Error,
            NotificationKind::Info,
        ] {
            add(ctx, kind, "no sound").await;
        }
        assert_eq!(*test.audio.played.lock(), 0);

        add(ctx, NotificationKind::Reminder, "sound").await;
        assert_eq!(*test.audio.played.lock(), 1);
    }

    #[tokio::test]
    async fn audio_failure_is_ignored() {
        let audio = RecordingAudioCue {
            failing: true,
            ..Default::default()
        };
        let test = setup_context_with(audio, RecordingNativeNotifier::default());

        let entry = add(&test.ctx, NotificationKind::Reminder, "sound").await;
        assert_eq!(*test.audio.played.lock(), 1);
        assert_eq!(test.ctx.store.find(&entry.id), Some(entry));
    }
}
