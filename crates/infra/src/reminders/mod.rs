mod http;
mod inmemory;

pub use http::HttpReminderSource;
pub use inmemory::InMemoryReminderSource;
use medtrack_notifier_domain::DueReminder;

/// Read only view of the reminders owned by the backend
#[async_trait::async_trait]
pub trait IReminderSource: Send + Sync {
    /// All reminders scheduled for today, whatever their status
    async fn get_todays_reminders(&self) -> anyhow::Result<Vec<DueReminder>>;
}
