use crate::dtos::NotificationDTO;
use medtrack_notifier_domain::{EntryId, NotificationEntry};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationResponse {
    pub notification: NotificationDTO,
}

impl NotificationResponse {
    pub fn new(entry: NotificationEntry) -> Self {
        Self {
            notification: NotificationDTO::new(entry),
        }
    }
}

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnreadCountResponse {
    pub unread_count: usize,
}

impl UnreadCountResponse {
    pub fn new(unread_count: usize) -> Self {
        Self { unread_count }
    }
}

#[derive(Serialize, Deserialize)]
pub struct NotificationPathParams {
    pub notification_id: EntryId,
}

pub mod add_notification {
    use super::*;

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        /// Validated by the server, see `NotificationKind`
        pub kind: String,
        pub title: String,
        pub body: String,
        #[serde(default)]
        pub action_target: Option<String>,
        #[serde(default)]
        pub action_label: Option<String>,
        #[serde(default)]
        pub medication_id: Option<String>,
        #[serde(default)]
        pub reminder_id: Option<String>,
    }

    pub type APIResponse = NotificationResponse;
}

pub mod get_notifications {
    use super::*;

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub notifications: Vec<NotificationDTO>,
        pub unread_count: usize,
    }

    impl APIResponse {
        pub fn new(notifications: Vec<NotificationEntry>, unread_count: usize) -> Self {
            Self {
                notifications: notifications
                    .into_iter()
                    .map(NotificationDTO::new)
                    .collect(),
                unread_count,
            }
        }
    }
}

pub mod get_unread_count {
    use super::*;

    pub type APIResponse = UnreadCountResponse;
}

pub mod mark_notification_read {
    use super::*;

    pub type PathParams = NotificationPathParams;
    pub type APIResponse = UnreadCountResponse;
}

pub mod mark_all_notifications_read {
    use super::*;

    pub type APIResponse = UnreadCountResponse;
}

pub mod remove_notification {
    use super::*;

    pub type PathParams = NotificationPathParams;
    pub type APIResponse = NotificationResponse;
}

pub mod clear_notifications {
    use super::*;

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub removed: usize,
    }
}
