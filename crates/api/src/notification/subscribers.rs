use super::add_notification::AddNotificationUseCase;
use crate::shared::usecase::Subscriber;
use medtrack_notifier_domain::NotificationEntry;
use medtrack_notifier_infra::NotifierContext;
use tracing::debug;

/// Audible cue for newly created reminder notifications. Playing it is best
/// effort, failures are dropped.
pub struct PlayReminderCueSubscriber;

#[async_trait::async_trait]
impl Subscriber<AddNotificationUseCase> for PlayReminderCueSubscriber {
    async fn notify(&self, entry: &NotificationEntry, ctx: &NotifierContext) {
        if !entry.is_reminder() {
            return;
        }
        if let Err(e) = ctx.audio.play_reminder_cue() {
            debug!("Unable to play reminder cue: {:?}", e);
        }
    }
}
