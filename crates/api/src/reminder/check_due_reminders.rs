use super::subscribers::ShowNativeNotificationsSubscriber;
use crate::notification::add_notification::AddNotificationUseCase;
use crate::shared::usecase::{execute, Subscriber, UseCase};
use medtrack_notifier_domain::NotificationEntry;
use medtrack_notifier_infra::NotifierContext;
use tracing::info;

/// One tick of the reminder polling job.
///
/// Fetches today's reminders and turns every pending reminder whose notify
/// time falls within the next qualification window into a reminder
/// notification. Each reminder produces at most one notification for the
/// lifetime of the store.
#[derive(Debug)]
pub struct CheckDueRemindersUseCase {}

#[derive(Debug)]
pub enum UseCaseError {
    ReminderSourceUnavailable(String),
}

#[async_trait::async_trait]
impl UseCase for CheckDueRemindersUseCase {
    /// The notifications created during this tick
    type Response = Vec<NotificationEntry>;

    type Error = UseCaseError;

    const NAME: &'static str = "CheckDueReminders";

    async fn execute(&mut self, ctx: &NotifierContext) -> Result<Self::Response, Self::Error> {
        let reminders = ctx
            .reminders
            .get_todays_reminders()
            .await
            .map_err(|e| UseCaseError::ReminderSourceUnavailable(format!("{:#}", e)))?;

        let now = ctx.sys.get_timestamp_millis();
        let window = ctx.config.qualification_window_millis();

        let mut created = Vec::new();
        for reminder in reminders.iter().filter(|r| r.is_due(now, window)) {
            if !ctx.store.mark_reminder_seen(&reminder.id) {
                continue;
            }

            let usecase = AddNotificationUseCase {
                notification: reminder.to_notification(),
            };
            match execute(usecase, ctx).await {
                Ok(entry) => created.push(entry),
                Err(e) => match e {},
            }
        }

        if !created.is_empty() {
            info!("Created {} reminder notification(s)", created.len());
        }
        Ok(created)
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(ShowNativeNotificationsSubscriber)]
    }
}
