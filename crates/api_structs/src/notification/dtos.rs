use medtrack_notifier_domain::{EntryId, NotificationEntry, NotificationKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationDTO {
    pub id: EntryId,
    pub kind: NotificationKind,
    pub title: String,
    pub body: String,
    pub created: i64,
    pub read: bool,
    pub action_target: Option<String>,
    pub action_label: Option<String>,
    pub medication_id: Option<String>,
    pub reminder_id: Option<String>,
}

impl NotificationDTO {
    pub fn new(entry: NotificationEntry) -> Self {
        Self {
            read: entry.is_read(),
            id: entry.id,
            kind: entry.kind,
            title: entry.title,
            body: entry.body,
            created: entry.created,
            action_target: entry.action_target,
            action_label: entry.action_label,
            medication_id: entry.medication_id,
            reminder_id: entry.reminder_id,
        }
    }
}
