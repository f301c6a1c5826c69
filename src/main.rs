//! # HTTP Static Server - Entry Point
//! src/main.rs
//!
//! Punto de entrada: configura logging, lee la configuración del CLI y
//! arranca el servidor.

use http_static_server::config::Config;
use http_static_server::server::Server;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "http_static_server=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::new();

    if let Err(e) = config.validate() {
        tracing::error!(error = %e, "Invalid configuration");
        std::process::exit(2);
    }

    tracing::info!(
        address = %config.address(),
        directory = %config.directory,
        index = %config.index,
        max_request_bytes = config.max_request_bytes,
        read_timeout_ms = config.read_timeout_ms,
        "Configuration loaded"
    );

    let server = Server::new(config);

    // Iniciar el servidor (esto bloqueará el thread)
    if let Err(e) = server.run() {
        tracing::error!(error = %e, "Fatal server error");
        std::process::exit(1);
    }
}
