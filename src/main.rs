use anyhow::Result;
use predictimmo::{config, logging, server};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Logging depends on the configured level, so config comes first
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let directives = logging::directives(&config);
    let filter = match logging::env_filter(&directives) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    logging::init(filter);

    info!("Starting Predictimmo with log filter: {}", directives);

    if let Err(e) = server::run(config).await {
        error!("Server stopped: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
