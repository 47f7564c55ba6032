use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::web;
use actix_web::App;
use actix_web::HttpServer;
use tracing_actix_web::TracingLogger;

use crate::capture_error::CaptureError;
use crate::configuration::ContactsSettings;
use crate::configuration::Settings;
use crate::contacts_client::ContactsClient;
use crate::routes::health_check;
use crate::routes::join_waitlist;
use crate::routes::submit_feedback;

/// Wrapper for actix's `Server` with access to the bound port. Not to be
/// confused with actix's `App`!
pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    /// Bind the configured address (port 0 picks a random one) and build the
    /// server. Nothing is served until `run_until_stopped` is awaited.
    pub async fn build(cfg: Settings) -> Result<Self, anyhow::Error> {
        let addr = format!("{}:{}", cfg.application.host, cfg.application.port);
        let listener = TcpListener::bind(addr)?;
        let port = listener.local_addr()?.port();

        if cfg.contacts.api_key.is_none() {
            // not fatal; every capture request will answer 500 until it is set
            tracing::warn!("no contacts API key configured");
        }

        let client = cfg.contacts.clone().client();
        let server = run(listener, client, cfg.contacts)?;

        Ok(Self { port, server })
    }

    pub fn get_port(&self) -> u16 { self.port }

    /// Because this consumes `self`, this should be the final function call (or
    /// passed to `tokio::spawn`)
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> { self.server.await }
}

/// Declares all API endpoints. The listener must already be bound.
pub fn run(
    listener: TcpListener,
    client: ContactsClient,
    contacts_cfg: ContactsSettings,
) -> Result<Server, anyhow::Error> {
    // `Data` is an `Arc`; one copy per worker
    let client = web::Data::new(client);
    let contacts_cfg = web::Data::new(contacts_cfg);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/health_check", web::get().to(health_check))
            .service(
                web::scope("/api")
                    .route("/waitlist", web::post().to(join_waitlist))
                    .route("/feedback", web::post().to(submit_feedback)),
            )
            // malformed bodies get the same `{"error": ..}` shape as everything else
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                CaptureError::Validation(err.to_string()).into()
            }))
            .app_data(client.clone())
            .app_data(contacts_cfg.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
