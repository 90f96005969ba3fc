//! Vitals: a standalone HTTP liveness probe service.
//!
//! This is the application entry point. It parses command line arguments,
//! loads configuration from an optional TOML file, initializes tracing,
//! sets up the Axum router, and starts the HTTP server.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vitals::config::{AppConfig, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER};
use vitals::http::start_server;
use vitals::routes::create_router;

/// Vitals: a standalone HTTP liveness probe service
#[derive(Parser, Debug)]
#[command(name = "vitals", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Bind host (overrides the config file)
    #[arg(long)]
    host: Option<String>,

    /// Bind port (overrides the config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Log level filter (e.g., "vitals=debug")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration; the default config file is optional
    let mut config = AppConfig::load_or_default(&args.config)?;

    // Bind address priority: CLI > config file > built-in default
    if let Some(host) = args.host {
        config.http.host = host;
    }
    if let Some(port) = args.port {
        config.http.port = port;
    }

    // Initialize tracing with filter priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    match config.logging.format.as_str() {
        "json" => tracing_subscriber::registry()
            .with(tracing_subscriber::EnvFilter::new(&log_filter))
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        _ => tracing_subscriber::registry()
            .with(tracing_subscriber::EnvFilter::new(&log_filter))
            .with(tracing_subscriber::fmt::layer())
            .init(),
    }

    tracing::info!("Loaded configuration");

    // Create router
    let app = create_router();

    // Start server; a bind failure propagates and exits non-zero
    start_server(app, &config).await?;

    Ok(())
}
