mod base;
mod notification;
mod status;
mod toast;

pub(crate) use base::BaseClient;
pub use base::{APIError, APIResponse};
pub use medtrack_notifier_api_structs::dtos::*;
pub use medtrack_notifier_domain::{EntryId, NotificationKind};
use notification::NotificationClient;
pub use notification::AddNotificationInput;
use status::StatusClient;
use std::sync::Arc;
use toast::ToastClient;

/// MedTrack Notifier SDK
///
/// The SDK contains methods for interacting with the notifier HTTP API.
#[derive(Clone)]
pub struct NotifierSDK {
    pub notification: NotificationClient,
    pub status: StatusClient,
    pub toast: ToastClient,
}

impl NotifierSDK {
    /// `address` is the server root, e.g. `http://localhost:5000`
    pub fn new<T: Into<String>>(address: T) -> Self {
        let base = Arc::new(BaseClient::new(format!("{}/api/v1", address.into())));
        let notification = NotificationClient::new(base.clone());
        let status = StatusClient::new(base.clone());
        let toast = ToastClient::new(base);

        Self {
            notification,
            status,
            toast,
        }
    }
}
