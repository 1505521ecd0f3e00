mod types;

pub use types::*;

use crate::Result;
use std::{env, path::Path};
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

pub async fn load() -> Result<Config> {
    load_or_default(env::var("CONFIG_PATH").ok().as_deref(), DEFAULT_CONFIG_PATH).await
}

/// Loads `config_path` when given, otherwise `default_path` if it exists, otherwise defaults.
pub async fn load_or_default(config_path: Option<&str>, default_path: &str) -> Result<Config> {
    match config_path {
        Some(config_path) => load_from(config_path).await,
        None if !Path::new(default_path).exists() => {
            debug!("No {} found, using default configuration", default_path);
            Ok(Config::default())
        }
        None => load_from(default_path).await,
    }
}

pub async fn load_from(config_path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(config_path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}
