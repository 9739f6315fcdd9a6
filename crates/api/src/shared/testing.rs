use medtrack_notifier_infra::{
    Config, IAudioCue, INativeNotifier, INavigator, InMemoryReminderSource, ManualSys,
    NativeNotification, NativePermission, NotifierContext,
};
use parking_lot::Mutex;
use std::sync::Arc;

// Sun Feb 21 2021 00:00:00 GMT+0100 (Central European Standard Time)
pub const NOW: i64 = 1613862000000;

#[derive(Default)]
pub struct RecordingAudioCue {
    pub played: Mutex<usize>,
    pub failing: bool,
}

impl IAudioCue for RecordingAudioCue {
    fn play_reminder_cue(&self) -> anyhow::Result<()> {
        *self.played.lock() += 1;
        if self.failing {
            anyhow::bail!("No audio output available");
        }
        Ok(())
    }
}

pub struct RecordingNativeNotifier {
    pub permission: NativePermission,
    pub shown: Mutex<Vec<NativeNotification>>,
    pub failing: bool,
}

impl Default for RecordingNativeNotifier {
    fn default() -> Self {
        Self {
            permission: NativePermission::Granted,
            shown: Default::default(),
            failing: false,
        }
    }
}

#[async_trait::async_trait]
impl INativeNotifier for RecordingNativeNotifier {
    async fn request_permission(&self) -> NativePermission {
        self.permission
    }

    async fn show(&self, notification: &NativeNotification) -> anyhow::Result<()> {
        if self.failing {
            anyhow::bail!("Native notifications unsupported");
        }
        self.shown.lock().push(notification.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    pub targets: Mutex<Vec<String>>,
}

impl INavigator for RecordingNavigator {
    fn navigate(&self, target: &str) {
        self.targets.lock().push(target.to_string());
    }
}

pub struct TestContext {
    pub ctx: NotifierContext,
    pub reminders: Arc<InMemoryReminderSource>,
    pub sys: Arc<ManualSys>,
    pub audio: Arc<RecordingAudioCue>,
    pub native: Arc<RecordingNativeNotifier>,
    pub navigator: Arc<RecordingNavigator>,
}

pub fn setup_context() -> TestContext {
    setup_context_with(RecordingAudioCue::default(), RecordingNativeNotifier::default())
}

pub fn setup_context_with(audio: RecordingAudioCue, native: RecordingNativeNotifier) -> TestContext {
    let reminders = Arc::new(InMemoryReminderSource::new());
    let sys = Arc::new(ManualSys::new(NOW));
    let audio = Arc::new(audio);
    let native = Arc::new(native);
    let navigator = Arc::new(RecordingNavigator::default());

    let mut config = Config::new();
    config.poll_interval_millis = 60 * 1000;
    config.toast_timeout_millis = 5 * 1000;

    let mut ctx = NotifierContext::create_inmemory(config, reminders.clone());
    ctx.sys = sys.clone();
    ctx.audio = audio.clone();
    ctx.native = native.clone();
    ctx.navigator = navigator.clone();

    TestContext {
        ctx,
        reminders,
        sys,
        audio,
        native,
        navigator,
    }
}
