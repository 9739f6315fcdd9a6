use crate::dtos::{NotificationDTO, ToastDTO};
use medtrack_notifier_domain::{NotificationEntry, ToastState};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToastResponse {
    pub toast: ToastDTO,
}

impl ToastResponse {
    pub fn new(toast: ToastState) -> Self {
        Self {
            toast: ToastDTO::new(toast),
        }
    }
}

pub mod get_toast {
    use super::*;

    pub type APIResponse = ToastResponse;
}

pub mod dismiss_toast {
    use super::*;

    pub type APIResponse = ToastResponse;
}

pub mod act_on_toast {
    use super::*;

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub notification: NotificationDTO,
        /// Where the client should navigate to, if the notification has a target
        pub action_target: Option<String>,
    }

    impl APIResponse {
        pub fn new(entry: NotificationEntry) -> Self {
            Self {
                action_target: entry.action_target.clone(),
                notification: NotificationDTO::new(entry),
            }
        }
    }
}
