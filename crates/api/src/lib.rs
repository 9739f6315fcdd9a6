mod engine;
mod error;
mod job_schedulers;
mod notification;
mod reminder;
mod shared;
mod status;
mod toast;

use actix_cors::Cors;
use actix_web::{dev::Server, middleware, web, App, HttpServer};
use medtrack_notifier_infra::NotifierContext;
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

pub use engine::NotificationEngine;

pub fn configure_server_api(cfg: &mut web::ServiceConfig) {
    notification::configure_routes(cfg);
    status::configure_routes(cfg);
    toast::configure_routes(cfg);
}

pub struct Application {
    server: Server,
    port: u16,
    engine: Arc<NotificationEngine>,
}

impl Application {
    pub async fn new(context: NotifierContext) -> Result<Self, std::io::Error> {
        let (server, port) = Application::configure_server(context.clone())?;
        let engine = Arc::new(NotificationEngine::new(context));
        engine.start().await;

        Ok(Self {
            server,
            port,
            engine,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn engine(&self) -> Arc<NotificationEngine> {
        self.engine.clone()
    }

    fn configure_server(context: NotifierContext) -> Result<(Server, u16), std::io::Error> {
        let port = context.config.port;
        let address = format!("0.0.0.0:{}", port);
        let listener = TcpListener::bind(&address)?;
        let port = listener.local_addr()?.port();

        let server = HttpServer::new(move || {
            let ctx = context.clone();

            App::new()
                .wrap(Cors::permissive())
                .wrap(middleware::Compress::default())
                .wrap(TracingLogger::default())
                .app_data(web::Data::new(ctx))
                .service(web::scope("/api/v1").configure(configure_server_api))
        })
        .listen(listener)?
        .workers(4)
        .run();

        Ok((server, port))
    }

    /// Serves until the server is stopped, then stops all engine timers
    pub async fn start(self) -> Result<(), std::io::Error> {
        let res = self.server.await;
        self.engine.dispose();
        res
    }
}
