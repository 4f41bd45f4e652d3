mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads configuration from `CONFIG_PATH` (or `config.yaml`) and applies
/// environment overrides.
///
/// An explicitly named file must exist; the default file is optional.
pub async fn load() -> Result<Config> {
    let explicit_path = env::var("CONFIG_PATH").ok();
    let config_path = explicit_path
        .clone()
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    let config = if explicit_path.is_some() || Path::new(&config_path).exists() {
        debug!("Loading configuration from: {}", config_path);
        load_from_path(&config_path).await?
    } else {
        debug!("No configuration file found, using defaults");
        Config::default()
    };

    apply_env_overrides(
        config,
        env::var("OPENAI_API_KEY").ok(),
        env::var("PORT").ok(),
    )
}

pub async fn load_from_path(path: &str) -> Result<Config> {
    let config_str = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| Error::config(format!("Failed to read {}: {}", path, e)))?;
    parse(&config_str)
}

pub fn parse(config_str: &str) -> Result<Config> {
    // An empty document deserializes to unit, not to an empty mapping.
    if config_str.trim().is_empty() {
        return Ok(Config::default());
    }
    Ok(serde_yaml::from_str(config_str)?)
}

/// Environment values win over the file. Empty values are ignored.
pub fn apply_env_overrides(
    mut config: Config,
    api_key: Option<String>,
    port: Option<String>,
) -> Result<Config> {
    if let Some(key) = api_key.filter(|k| !k.trim().is_empty()) {
        config.llm.api_key = Some(key);
    }

    if let Some(port) = port.filter(|p| !p.trim().is_empty()) {
        config.server.port = port
            .trim()
            .parse()
            .map_err(|_| Error::config(format!("Invalid PORT value: '{}'", port)))?;
    }

    Ok(config)
}
