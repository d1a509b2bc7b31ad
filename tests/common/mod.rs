use atelier_rs::configuration::{get_configuration, ContactSettings};
use atelier_rs::telemetry::{get_subscriber, init_subscriber};
use std::io::{sink, stdout};
use std::net::TcpListener;
use std::sync::Once;

static TRACING: Once = Once::new();

fn init_tracing() {
    TRACING.call_once(|| {
        let filter_level = "debug".to_owned();
        let subscriber_name = "test".to_owned();
        if std::env::var("TEST_LOG").is_ok() {
            let subscriber = get_subscriber(subscriber_name, filter_level, stdout);
            init_subscriber(subscriber).expect("Failed to initialize subscriber to stdout");
        } else {
            let subscriber = get_subscriber(subscriber_name, filter_level, sink);
            init_subscriber(subscriber).expect("Failed to initialize subscriber");
        }
    });
}

// Launch an instance for our HTTP server in the background
pub fn launch_http_server() -> String {
    init_tracing();
    let config_file: &str = "configuration";
    let configuration = get_configuration(config_file).unwrap_or_else(|error| {
        panic!(
            "ERROR: Failed to read configuration file '{}': {}",
            &config_file, error
        )
    });
    let contact_settings = ContactSettings {
        submission_delay_ms: 10,
        ..configuration.contact
    };
    let local_addr = "127.0.0.1";
    let address: (&str, u16) = (local_addr, 0);
    let listener = TcpListener::bind(address).expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let server = atelier_rs::run(listener, contact_settings).expect("Failed to listen on address");
    let _ = tokio::spawn(server);
    format!("http://{}:{}", local_addr, port)
}
