use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{EmoteCatalogError, Result};
use crate::platform::Platform;

const CONFIG_FILE: &str = "config.toml";
const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default config template with rich comments
const DEFAULT_CONFIG_TEMPLATE: &str = r#"# emote-catalog configuration file
# Location: ~/.emote-catalog/config.toml

[sources]
# Directory holding provider payloads (7tv/, ffz/, bttv/, badges.json)
# Relative paths are resolved against the config directory
# Default: "data"
data_dir = "data"

# Platform passed to channel-scoped providers when none is given
# Values: "twitch", "youtube"
platform = "twitch"

[log]
# Filter used when RUST_LOG is not set
# Example: level = "emote_catalog_core=debug,info"
level = "info"
"#;

/// Global configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub sources: SourcesConfig,

    #[serde(default)]
    pub log: LogConfig,
}

/// Where source payloads come from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourcesConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default)]
    pub platform: Platform,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            platform: Platform::default(),
        }
    }
}

/// Logging defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Load config from base directory
    pub fn load(base_dir: &Path) -> Result<Self> {
        let path = base_dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config =
            toml::from_str(&content).map_err(|e| EmoteCatalogError::ConfigParse {
                path: path.clone(),
                message: e.to_string(),
            })?;

        Ok(config)
    }

    /// Save config to base directory
    pub fn save(&self, base_dir: &Path) -> Result<()> {
        let path = base_dir.join(CONFIG_FILE);
        fs::create_dir_all(base_dir)?;

        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    /// Get config file path
    pub fn path(base_dir: &Path) -> PathBuf {
        base_dir.join(CONFIG_FILE)
    }

    /// Initialize config with default template (rich comments)
    pub fn init(base_dir: &Path) -> Result<PathBuf> {
        let path = base_dir.join(CONFIG_FILE);
        fs::create_dir_all(base_dir)?;

        if !path.exists() {
            fs::write(&path, DEFAULT_CONFIG_TEMPLATE)?;
        }

        Ok(path)
    }

    /// Data directory with relative paths resolved against `base_dir`
    pub fn data_dir(&self, base_dir: &Path) -> PathBuf {
        if self.sources.data_dir.is_absolute() {
            self.sources.data_dir.clone()
        } else {
            base_dir.join(&self.sources.data_dir)
        }
    }

    /// Get a config value by dot-notation key
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "sources.data_dir" => Some(self.sources.data_dir.display().to_string()),
            "sources.platform" => Some(self.sources.platform.id().to_string()),
            "log.level" => Some(self.log.level.clone()),
            _ => None,
        }
    }

    /// Set a config value by dot-notation key
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        match key {
            "sources.data_dir" => {
                if value.is_empty() {
                    return Err(EmoteCatalogError::InvalidConfigValue {
                        key: key.to_string(),
                        message: "path cannot be empty".to_string(),
                    });
                }
                self.sources.data_dir = PathBuf::from(value);
                Ok(())
            }
            "sources.platform" => {
                let platform = value.parse::<Platform>().map_err(|e| {
                    EmoteCatalogError::InvalidConfigValue {
                        key: key.to_string(),
                        message: e.to_string(),
                    }
                })?;
                self.sources.platform = platform;
                Ok(())
            }
            "log.level" => {
                if value.is_empty() {
                    return Err(EmoteCatalogError::InvalidConfigValue {
                        key: key.to_string(),
                        message: "level cannot be empty".to_string(),
                    });
                }
                self.log.level = value.to_string();
                Ok(())
            }
            _ => Err(EmoteCatalogError::ConfigKeyNotFound {
                key: key.to_string(),
            }),
        }
    }

    /// List all config keys with their current values
    pub fn list(&self) -> Vec<(String, String)> {
        ["sources.data_dir", "sources.platform", "log.level"]
            .iter()
            .filter_map(|key| self.get(key).map(|value| (key.to_string(), value)))
            .collect()
    }
}
