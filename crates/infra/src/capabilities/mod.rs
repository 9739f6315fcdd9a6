//! Best effort side effects of the notification engine. Each capability is a
//! trait so that tests and headless deployments can plug in no-op or
//! recording implementations.

mod audio;
mod native;
mod navigation;

pub use audio::{IAudioCue, SilentAudioCue, TerminalBellAudioCue};
#[cfg(feature = "desktop-notifications")]
pub use native::DesktopNativeNotifier;
pub use native::{DisabledNativeNotifier, INativeNotifier, NativeNotification, NativePermission};
pub use navigation::{INavigator, LogNavigator};
