use anyhow::Context;
use atelier_rs::{
    configuration::{get_configuration, Settings},
    startup::run,
    telemetry::{get_subscriber, init_subscriber},
};
use std::net::TcpListener;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config_file: &str = "configuration";
    let configuration: Settings = get_configuration(config_file)
        .with_context(|| format!("Failed to read configuration file \"{}\"", config_file))?;
    let log_level = configuration
        .application
        .log_level
        .clone()
        .unwrap_or_else(|| "info".to_owned());
    let subscriber = get_subscriber(env!("CARGO_PKG_NAME").to_owned(), log_level, std::io::stdout);
    init_subscriber(subscriber)?;
    let bind_address: (&str, u16) = (
        configuration.application.host.as_str(),
        configuration.application.port,
    );
    // Raises if failed to bind address
    let listener = TcpListener::bind(bind_address)
        .with_context(|| format!("Failed to bind {}:{}", bind_address.0, bind_address.1))?;
    tracing::info!(
        host = %configuration.application.host,
        port = configuration.application.port,
        "Listening for contact inquiries"
    );
    // Run server on TcpListener
    run(listener, configuration.contact)?.await?;
    Ok(())
}
