mod check_due_reminders;
mod subscribers;

pub use check_due_reminders::CheckDueRemindersUseCase;
