use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NativePermission {
    /// Permission has not been requested yet
    Default,
    Granted,
    Denied,
}

impl Default for NativePermission {
    fn default() -> Self {
        Self::Default
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NativeNotification {
    pub title: String,
    pub body: String,
    /// Notifications sharing a tag replace each other on the host platform
    pub tag: String,
}

#[async_trait::async_trait]
pub trait INativeNotifier: Send + Sync {
    async fn request_permission(&self) -> NativePermission;
    async fn show(&self, notification: &NativeNotification) -> anyhow::Result<()>;
}

/// Used when native notifications are turned off or unsupported
pub struct DisabledNativeNotifier {}

#[async_trait::async_trait]
impl INativeNotifier for DisabledNativeNotifier {
    async fn request_permission(&self) -> NativePermission {
        NativePermission::Denied
    }

    async fn show(&self, _notification: &NativeNotification) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Desktop notifications through the session notification daemon
#[cfg(feature = "desktop-notifications")]
pub struct DesktopNativeNotifier {
    app_name: String,
}

#[cfg(feature = "desktop-notifications")]
impl DesktopNativeNotifier {
    pub fn new<T: Into<String>>(app_name: T) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }
}

#[cfg(feature = "desktop-notifications")]
#[async_trait::async_trait]
impl INativeNotifier for DesktopNativeNotifier {
    async fn request_permission(&self) -> NativePermission {
        // Desktop daemons do not ask the user, being able to build a
        // notification is all the permission there is.
        NativePermission::Granted
    }

    async fn show(&self, notification: &NativeNotification) -> anyhow::Result<()> {
        let app_name = self.app_name.clone();
        let notification = notification.clone();
        // The notification daemon is reached over a blocking D-Bus call
        tokio::task::spawn_blocking(move || {
            notify_rust::Notification::new()
                .appname(&app_name)
                .summary(&notification.title)
                .body(&notification.body)
                .id(replace_id(&notification.tag))
                .show()
                .map(|_| ())
                .map_err(|e| anyhow::anyhow!("Notification daemon error: {}", e))
        })
        .await??;
        Ok(())
    }
}

/// Notifications carrying the same tag map onto the same daemon id, so a
/// repeated tag replaces the earlier notification instead of stacking.
#[cfg(feature = "desktop-notifications")]
fn replace_id(tag: &str) -> u32 {
    // FNV-1a, stable across builds and processes
    let hash = tag.bytes().fold(0x811c9dc5u32, |hash, byte| {
        (hash ^ byte as u32).wrapping_mul(0x01000193)
    });
    // Id 0 asks the daemon to allocate a fresh id
    hash.max(1)
}
