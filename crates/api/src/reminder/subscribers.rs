use super::check_due_reminders::CheckDueRemindersUseCase;
use crate::shared::usecase::Subscriber;
use medtrack_notifier_domain::NotificationEntry;
use medtrack_notifier_infra::{NativeNotification, NativePermission, NotifierContext};
use tracing::debug;

/// Mirrors every reminder notification of a poll as a native OS notification.
/// Only done when permission was granted, failures are dropped.
pub struct ShowNativeNotificationsSubscriber;

#[async_trait::async_trait]
impl Subscriber<CheckDueRemindersUseCase> for ShowNativeNotificationsSubscriber {
    async fn notify(&self, created: &Vec<NotificationEntry>, ctx: &NotifierContext) {
        if created.is_empty() || ctx.store.native_permission() != NativePermission::Granted {
            return;
        }

        for entry in created {
            let notification = NativeNotification {
                title: entry.title.clone(),
                body: entry.body.clone(),
                tag: entry
                    .reminder_id
                    .clone()
                    .unwrap_or_else(|| entry.id.to_string()),
            };
            if let Err(e) = ctx.native.show(&notification).await {
                debug!("Unable to show native notification: {:?}", e);
            }
        }
    }
}
