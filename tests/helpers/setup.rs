use medtrack_notifier_api::{Application, NotificationEngine};
use medtrack_notifier_domain::DueReminder;
use medtrack_notifier_infra::{Config, InMemoryReminderSource, NotifierContext};
use medtrack_notifier_sdk::NotifierSDK;
use std::sync::Arc;

pub struct TestApp {
    pub config: Config,
    pub reminders: Arc<InMemoryReminderSource>,
    pub engine: Arc<NotificationEngine>,
}

// Launch the application as a background task
pub async fn spawn_app() -> (TestApp, NotifierSDK, String) {
    spawn_app_with_reminders(Vec::new()).await
}

pub async fn spawn_app_with_reminders(
    reminders: Vec<DueReminder>,
) -> (TestApp, NotifierSDK, String) {
    let mut config = Config::new();
    config.port = 0; // Random port

    let reminders = Arc::new(InMemoryReminderSource::with_reminders(reminders));
    let ctx = NotifierContext::create_inmemory(config.clone(), reminders.clone());
    let application = Application::new(ctx)
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}", application.port());
    let engine = application.engine();
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let app = TestApp {
        config,
        reminders,
        engine,
    };
    let sdk = NotifierSDK::new(address.clone());
    (app, sdk, address)
}
