mod types;

pub use types::*;

use crate::{Error, Result, chat::USER_INPUT_PLACEHOLDER};
use std::{env, path::Path};
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads the configuration file (if any) and applies environment overrides.
pub async fn load() -> Result<Config> {
    load_with(|key| env::var(key).ok()).await
}

/// Like [`load`], reading variables through `lookup`.
///
/// `CONFIG_PATH` names the file explicitly, in which case it must exist.
/// Without it, `config.yaml` is read when present and defaults are used
/// otherwise.
pub async fn load_with<F>(lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match lookup("CONFIG_PATH") {
        Some(path) => from_file(&path).await?,
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            from_file(DEFAULT_CONFIG_PATH).await?
        }
        None => {
            debug!("No configuration file found, using defaults");
            Config::default()
        }
    };

    config.apply_env_overrides(lookup)?;
    config.validate()?;

    Ok(config)
}

pub async fn from_file(path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", path);

    let config_str = tokio::fs::read_to_string(path).await?;
    from_yaml(&config_str)
}

pub fn from_yaml(yaml: &str) -> Result<Config> {
    // An empty document deserializes to unit, not to a defaulted struct.
    if yaml.trim().is_empty() {
        return Ok(Config::default());
    }
    Ok(serde_yaml::from_str(yaml)?)
}

impl Config {
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(api_key) = lookup("HF_API_KEY") {
            self.inference.api_key = api_key;
        }
        if let Some(api_url) = lookup("HF_API_URL") {
            self.inference.api_url = api_url;
        }
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| Error::config(format!("Invalid PORT value: '{}'", port)))?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if !self
            .inference
            .prompt_template
            .contains(USER_INPUT_PLACEHOLDER)
        {
            return Err(Error::config(format!(
                "prompt_template must contain the {} placeholder",
                USER_INPUT_PLACEHOLDER
            )));
        }
        if self.inference.timeout_ms == 0 {
            return Err(Error::config("timeout_ms must be greater than zero"));
        }
        if self.inference.api_url.is_empty() {
            return Err(Error::config("api_url must not be empty"));
        }
        Ok(())
    }
}
