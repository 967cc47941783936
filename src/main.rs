//! Prompts API Entry Point
//!
//! Initializes logging, loads configuration, and serves the API over HTTP.

use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use prompts_api::core::config::LoggingConfig;
use prompts_api::core::{ApiServer, Config, HttpTransport};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging first so configuration warnings are visible
    init_logging(&LoggingConfig::from_env().level);

    // Load configuration from environment
    let config = Config::from_env();

    info!("Starting {} v{}", config.server.name, config.server.version);

    let transport = HttpTransport::new(config.http.clone());
    let server = ApiServer::new(config);

    info!("Server initialized");

    transport.run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Configures tracing with the specified log level and format.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
