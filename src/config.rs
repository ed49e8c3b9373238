use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::nws::DEFAULT_ENDPOINT_BASE;

pub const CONFIG_PATH: &str = "config.toml";

pub const DEFAULT_USER_AGENT: &str = concat!("state-alerts/", env!("CARGO_PKG_VERSION"));

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub endpoint_base: String,
    pub user_agent: String
}

impl Default for Config {
    fn default() -> Self {
        Config {
            endpoint_base: DEFAULT_ENDPOINT_BASE.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string()
        }
    }
}

/// Reads the config at `path`, falling back to defaults when the file is absent.
pub fn load_config_from(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();

    let config_content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Config::default()),
        Err(source) => return Err(ConfigError::Read { path: path.display().to_string(), source })
    };

    toml::from_str(config_content.as_str())
        .map_err(|source| ConfigError::Parse { path: path.display().to_string(), source })
}
