//! Portfolio server entry point
//!
//! Run with:
//! ```bash
//! ADMIN_USER=admin ADMIN_PASS=secret cargo run -p portfolio-api
//! ```
//!
//! Configuration is loaded from environment variables or a `.env` file.

use portfolio_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Tracing depends on APP_ENV, so configuration comes first
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = try_init_tracing_with_config(tracing_config(&config)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    if let Err(e) = run(config).await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}

fn tracing_config(config: &AppConfig) -> TracingConfig {
    TracingConfig::for_environment(config.app.env)
}

async fn run(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    info!(
        name = %config.app.name,
        env = ?config.app.env,
        address = %config.server.address(),
        database = %config.database.path,
        "Starting portfolio server..."
    );

    portfolio_api::run(config).await?;

    Ok(())
}
