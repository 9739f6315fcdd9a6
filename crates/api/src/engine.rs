use crate::job_schedulers::start_due_reminders_job;
use crate::notification::{
    add_notification::AddNotificationUseCase, ClearNotificationsUseCase,
    MarkAllNotificationsReadUseCase, MarkNotificationReadUseCase, RemoveNotificationUseCase,
};
use crate::reminder::CheckDueRemindersUseCase;
use crate::shared::usecase::execute;
use crate::toast::{ActOnToastUseCase, DismissToastUseCase};
use medtrack_notifier_domain::{EntryId, NewNotification, NotificationEntry, ToastState};
use medtrack_notifier_infra::NotifierContext;
use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tracing::info;

/// Owns the notification state of the process together with the reminder
/// polling job.
///
/// Constructed once at startup, `start` begins polling and `dispose` stops
/// every timer. The operations are the same use cases the HTTP controllers
/// execute.
pub struct NotificationEngine {
    ctx: NotifierContext,
    poll_job: Mutex<Option<JoinHandle<()>>>,
}

impl NotificationEngine {
    pub fn new(ctx: NotifierContext) -> Self {
        Self {
            ctx,
            poll_job: Mutex::new(None),
        }
    }

    pub fn context(&self) -> &NotifierContext {
        &self.ctx
    }

    /// Asks for native notification permission and starts polling the
    /// reminder backend. Calling it again while running has no effect.
    pub async fn start(&self) {
        if self.ctx.store.is_disposed() || self.poll_job.lock().is_some() {
            return;
        }

        let permission = self.ctx.native.request_permission().await;
        info!("Native notification permission: {:?}", permission);
        self.ctx.store.set_native_permission(permission);

        let mut poll_job = self.poll_job.lock();
        if poll_job.is_none() && !self.ctx.store.is_disposed() {
            *poll_job = Some(start_due_reminders_job(self.ctx.clone()));
        }
    }

    pub fn is_running(&self) -> bool {
        self.poll_job.lock().is_some()
    }

    pub async fn add_notification(&self, notification: NewNotification) -> EntryId {
        let usecase = AddNotificationUseCase { notification };
        match execute(usecase, &self.ctx).await {
            Ok(entry) => entry.id,
            Err(e) => match e {},
        }
    }

    /// No-op returning false if there is no entry with the given id
    pub async fn mark_as_read(&self, id: &EntryId) -> bool {
        if self.ctx.store.find(id).is_none() {
            return false;
        }
        let usecase = MarkNotificationReadUseCase {
            notification_id: id.clone(),
        };
        execute(usecase, &self.ctx).await.is_ok()
    }

    pub async fn mark_all_as_read(&self) {
        let _ = execute(MarkAllNotificationsReadUseCase {}, &self.ctx).await;
    }

    /// No-op returning false if there is no entry with the given id
    pub async fn remove_notification(&self, id: &EntryId) -> bool {
        if self.ctx.store.find(id).is_none() {
            return false;
        }
        let usecase = RemoveNotificationUseCase {
            notification_id: id.clone(),
        };
        execute(usecase, &self.ctx).await.is_ok()
    }

    pub async fn clear_all(&self) {
        let _ = execute(ClearNotificationsUseCase {}, &self.ctx).await;
    }

    pub async fn dismiss_toast(&self) {
        let _ = execute(DismissToastUseCase {}, &self.ctx).await;
    }

    /// Acts on the visible toast and returns its action target, if any
    pub async fn act_on_toast(&self) -> Option<String> {
        execute(ActOnToastUseCase {}, &self.ctx)
            .await
            .ok()
            .and_then(|entry| entry.action_target)
    }

    /// Runs one polling tick outside of the schedule
    pub async fn check_due_reminders(&self) -> Vec<NotificationEntry> {
        execute(CheckDueRemindersUseCase {}, &self.ctx)
            .await
            .unwrap_or_default()
    }

    /// Newest first
    pub fn notifications(&self) -> Vec<NotificationEntry> {
        self.ctx.store.notifications()
    }

    pub fn unread_count(&self) -> usize {
        self.ctx.store.unread_count()
    }

    pub fn toast(&self) -> ToastState {
        self.ctx.store.toast()
    }

    /// Stops the polling job and the toast timer. Safe to call more than once.
    pub fn dispose(&self) {
        if let Some(job) = self.poll_job.lock().take() {
            job.abort();
            info!("Stopped due reminders job");
        }
        self.ctx.store.dispose();
    }
}

impl Drop for NotificationEngine {
    fn drop(&mut self) {
        self.dispose();
    }
}
