use crate::shared::entity::{Entity, EntryId};
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

/// The kind decides how an entry is rendered, and a `Reminder` additionally
/// triggers the audio cue when it is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Reminder,
    Success,
    Warning,
    Error,
    Info,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reminder => "reminder",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}

impl Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum InvalidKindError {
    #[error("Notification kind: `{0}` is not one of reminder, success, warning, error or info")]
    Unknown(String),
}

impl FromStr for NotificationKind {
    type Err = InvalidKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reminder" => Ok(Self::Reminder),
            "success" => Ok(Self::Success),
            "warning" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            "info" => Ok(Self::Info),
            _ => Err(InvalidKindError::Unknown(s.to_string())),
        }
    }
}

/// Everything the caller supplies when creating a notification.
/// The id, creation time and read flag are assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewNotification {
    pub kind: NotificationKind,
    pub title: String,
    pub body: String,
    pub action_target: Option<String>,
    pub action_label: Option<String>,
    pub medication_id: Option<String>,
    pub reminder_id: Option<String>,
}

impl NewNotification {
    pub fn new<T: Into<String>, B: Into<String>>(kind: NotificationKind, title: T, body: B) -> Self {
        Self {
            kind,
            title: title.into(),
            body: body.into(),
            action_target: None,
            action_label: None,
            medication_id: None,
            reminder_id: None,
        }
    }

    pub fn with_action<T: Into<String>>(mut self, target: T, label: Option<String>) -> Self {
        self.action_target = Some(target.into());
        self.action_label = label;
        self
    }

    pub fn with_source(mut self, medication_id: Option<String>, reminder_id: Option<String>) -> Self {
        self.medication_id = medication_id;
        self.reminder_id = reminder_id;
        self
    }
}

/// One user visible alert.
///
/// Everything except `read` is fixed at creation, and `read` only ever goes
/// from `false` to `true`.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationEntry {
    pub id: EntryId,
    pub kind: NotificationKind,
    pub title: String,
    pub body: String,
    /// Millis timestamp of creation
    pub created: i64,
    read: bool,
    /// Route the UI navigates to when the user acts on this entry
    pub action_target: Option<String>,
    pub action_label: Option<String>,
    /// Correlates the entry with the external medication / reminder that produced it
    pub medication_id: Option<String>,
    pub reminder_id: Option<String>,
}

impl Entity for NotificationEntry {
    fn id(&self) -> &EntryId {
        &self.id
    }
}

impl NotificationEntry {
    pub fn new(id: EntryId, created: i64, input: NewNotification) -> Self {
        Self {
            id,
            kind: input.kind,
            title: input.title,
            body: input.body,
            created,
            read: false,
            action_target: input.action_target,
            action_label: input.action_label,
            medication_id: input.medication_id,
            reminder_id: input.reminder_id,
        }
    }

    pub fn is_read(&self) -> bool {
        self.read
    }

    /// Returns true if the entry was unread before this call
    pub fn mark_read(&mut self) -> bool {
        let was_unread = !self.read;
        self.read = true;
        was_unread
    }

    pub fn is_reminder(&self) -> bool {
        self.kind == NotificationKind::Reminder
    }
}
