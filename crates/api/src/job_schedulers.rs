use crate::{reminder::CheckDueRemindersUseCase, shared::usecase::execute};
use medtrack_notifier_infra::NotifierContext;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::info;

/// Polls the reminder backend once right away and then every poll interval.
///
/// A tick runs to completion before the next one is awaited, so a slow
/// backend delays the following ticks instead of overlapping them. Failed
/// ticks are logged by `execute` and the loop carries on.
pub fn start_due_reminders_job(ctx: NotifierContext) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut poll_interval = interval(ctx.poll_interval());
        poll_interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            poll_interval.tick().await;
            if ctx.store.is_disposed() {
                info!("Notification store disposed, stopping due reminders job");
                break;
            }

            let usecase = CheckDueRemindersUseCase {};
            let _ = execute(usecase, &ctx).await;
        }
    })
}
