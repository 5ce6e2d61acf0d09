use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeConfig {
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,
    /// Extra W3C capabilities sent when the session is created.
    #[serde(default)]
    pub capabilities: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            webdriver_url: default_webdriver_url(),
            capabilities: serde_json::Map::new(),
            output: OutputConfig::default(),
        }
    }
}

fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub pretty: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load from default locations:
    /// 1. ./strand.yaml
    /// 2. ~/.strand/config.yaml
    /// 3. Default configuration
    pub async fn load_default() -> Result<ProbeConfig, ConfigError> {
        let local_config = PathBuf::from("./strand.yaml");
        if local_config.exists() {
            return Self::load_from(&local_config).await;
        }

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".strand").join("config.yaml");
            if home_config.exists() {
                return Self::load_from(&home_config).await;
            }
        }

        Ok(ProbeConfig::default())
    }

    /// Load exactly `path`, skipping the default search order. Keys missing
    /// from the file take their defaults.
    pub async fn load_from(path: &Path) -> Result<ProbeConfig, ConfigError> {
        let content = tokio::fs::read_to_string(path).await?;
        let config: ProbeConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}
