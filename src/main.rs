mod telemetry;

use medtrack_notifier_api::Application;
use medtrack_notifier_infra::setup_context;
use telemetry::{get_subscriber, init_subscriber};
use tracing::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    openssl_probe::init_ssl_cert_env_vars();

    let subscriber = get_subscriber("medtrack_notifier".into(), "info".into());
    init_subscriber(subscriber);

    let context = setup_context();

    let app = Application::new(context).await?;
    info!("MedTrack notifier listening on port {}", app.port());
    app.start().await?;
    info!("MedTrack notifier stopped");
    Ok(())
}
