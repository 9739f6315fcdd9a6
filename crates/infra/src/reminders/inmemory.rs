use super::IReminderSource;
use medtrack_notifier_domain::DueReminder;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Reminder source backed by a plain list. Used for testing and local runs
/// without a backend.
pub struct InMemoryReminderSource {
    reminders: Mutex<Vec<DueReminder>>,
    failing: AtomicBool,
    fetches: AtomicUsize,
}

impl InMemoryReminderSource {
    pub fn new() -> Self {
        Self::with_reminders(Vec::new())
    }

    pub fn with_reminders(reminders: Vec<DueReminder>) -> Self {
        Self {
            reminders: Mutex::new(reminders),
            failing: AtomicBool::new(false),
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn set_reminders(&self, reminders: Vec<DueReminder>) {
        *self.reminders.lock() = reminders;
    }

    /// Makes every following fetch fail until reset
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of fetches attempted so far, failed ones included
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl Default for InMemoryReminderSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IReminderSource for InMemoryReminderSource {
    async fn get_todays_reminders(&self) -> anyhow::Result<Vec<DueReminder>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            anyhow::bail!("Reminder backend unavailable");
        }
        Ok(self.reminders.lock().clone())
    }
}
