mod capabilities;
mod config;
mod reminders;
mod store;
mod system;

pub use capabilities::*;
pub use config::Config;
pub use reminders::{HttpReminderSource, IReminderSource, InMemoryReminderSource};
pub use store::NotificationStore;
pub use system::{ISys, ManualSys, RealSys};

use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Everything the notification engine operates on. Cheap to clone, all
/// clones share the same store.
#[derive(Clone)]
pub struct NotifierContext {
    pub store: Arc<NotificationStore>,
    pub reminders: Arc<dyn IReminderSource>,
    pub native: Arc<dyn INativeNotifier>,
    pub audio: Arc<dyn IAudioCue>,
    pub navigator: Arc<dyn INavigator>,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
}

impl NotifierContext {
    fn create(config: Config) -> Self {
        let reminders = Arc::new(HttpReminderSource::new(
            &config.reminder_api_url,
            config.reminder_api_token.clone(),
        ));
        let native = native_notifier(&config);
        let audio: Arc<dyn IAudioCue> = if config.audio_cue {
            Arc::new(TerminalBellAudioCue {})
        } else {
            Arc::new(SilentAudioCue {})
        };

        Self {
            store: Arc::new(NotificationStore::new()),
            reminders,
            native,
            audio,
            navigator: Arc::new(LogNavigator {}),
            config,
            sys: Arc::new(RealSys {}),
        }
    }

    /// Context without any external side effects, reading reminders from the
    /// given in memory source
    pub fn create_inmemory(config: Config, reminders: Arc<InMemoryReminderSource>) -> Self {
        Self {
            store: Arc::new(NotificationStore::new()),
            reminders,
            native: Arc::new(DisabledNativeNotifier {}),
            audio: Arc::new(SilentAudioCue {}),
            navigator: Arc::new(LogNavigator {}),
            config,
            sys: Arc::new(RealSys {}),
        }
    }

    pub fn toast_timeout(&self) -> Duration {
        Duration::from_millis(self.config.toast_timeout_millis)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.config.poll_interval_millis)
    }
}

#[cfg(feature = "desktop-notifications")]
fn native_notifier(config: &Config) -> Arc<dyn INativeNotifier> {
    if config.native_notifications {
        Arc::new(DesktopNativeNotifier::new("MedTrack"))
    } else {
        Arc::new(DisabledNativeNotifier {})
    }
}

#[cfg(not(feature = "desktop-notifications"))]
fn native_notifier(config: &Config) -> Arc<dyn INativeNotifier> {
    if config.native_notifications {
        info!("Built without desktop notification support, native notifications are disabled");
    }
    Arc::new(DisabledNativeNotifier {})
}

/// Will setup the infrastructure context given the environment
pub fn setup_context() -> NotifierContext {
    let config = Config::new();
    info!(
        "Polling reminders from {} every {} ms",
        config.reminder_api_url, config.poll_interval_millis
    );
    NotifierContext::create(config)
}
