use capture_gateway::configuration::get_configuration;
use capture_gateway::startup::Application;
use capture_gateway::telemetry::get_subscriber;
use capture_gateway::telemetry::init_subscriber;

/// Initialise telemetry, load config, and start the server
#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let subscriber = get_subscriber("capture-gateway", "info", std::io::stdout);
    init_subscriber(subscriber)?;

    let cfg = get_configuration()?;
    let app = Application::build(cfg).await?;
    tracing::info!(port = app.get_port(), "listening");
    app.run_until_stopped().await?;
    Ok(())
}
