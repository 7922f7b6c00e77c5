use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{common::types::AnyResult, configs::*};

const CONFIG_CANDIDATES: [&str; 2] = ["config.toml", "config.default.toml"];

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub media: MediaConfig,
    pub logging: Option<LoggingConfig>,
}

impl Config {
    pub fn load() -> AnyResult<Self> {
        let config_path = CONFIG_CANDIDATES
            .into_iter()
            .find(|p| Path::new(p).exists())
            .ok_or("config.toml or config.default.toml not found")?;

        Self::load_from(config_path)
    }

    pub fn load_from(path: impl AsRef<Path>) -> AnyResult<Self> {
        let path = path.as_ref();
        crate::log_println!("Loading configuration from: {}", path.display());

        let config_str = std::fs::read_to_string(path)?;
        if config_str.trim().is_empty() {
            return Err(format!("{} is empty", path.display()).into());
        }

        Self::from_toml_str(&config_str)
    }

    pub fn from_toml_str(s: &str) -> AnyResult<Self> {
        Ok(toml::from_str(s)?)
    }
}
