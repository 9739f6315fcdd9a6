mod notification;
mod reminder;
mod shared;
mod toast;

pub use notification::{InvalidKindError, NewNotification, NotificationEntry, NotificationKind};
pub use reminder::{DueReminder, ReminderStatus, REMINDERS_VIEW};
pub use shared::entity::{Entity, EntryId};
pub use toast::ToastState;
