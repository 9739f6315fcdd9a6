use tracing::info;

/// Receives the opaque "go to this view" instruction of a notification.
/// Targets are forwarded as is, never resolved or validated.
pub trait INavigator: Send + Sync {
    fn navigate(&self, target: &str);
}

pub struct LogNavigator {}

impl INavigator for LogNavigator {
    fn navigate(&self, target: &str) {
        info!("Navigating to: {}", target);
    }
}
