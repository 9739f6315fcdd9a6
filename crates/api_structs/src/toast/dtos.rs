use crate::dtos::NotificationDTO;
use medtrack_notifier_domain::ToastState;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ToastDTO {
    pub visible: bool,
    /// Last surfaced entry, also present after the toast was hidden
    pub notification: Option<NotificationDTO>,
}

impl ToastDTO {
    pub fn new(toast: ToastState) -> Self {
        Self {
            visible: toast.visible,
            notification: toast.entry.map(NotificationDTO::new),
        }
    }
}
