use std::path::PathBuf;
use thiserror::Error;

use crate::emote::Provider;

#[derive(Debug, Error)]
pub enum EmoteCatalogError {
    #[error("Invalid channel: channel id cannot be empty")]
    InvalidChannel,

    #[error("No emotes available for channel '{channel}' (perhaps the providers are down?)")]
    NoEmotesAvailable { channel: String },

    #[error("{provider} source failed: {message}")]
    Source { provider: Provider, message: String },

    #[error("Badges are already loaded")]
    BadgesAlreadyLoaded,

    #[error("Failed to fetch badges: {message}")]
    BadgeFetch { message: String },

    #[error("Unknown platform: {value}")]
    UnknownPlatform { value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("Failed to parse config {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Unknown config key: {key}")]
    ConfigKeyNotFound { key: String },

    #[error("Invalid value for {key}: {message}")]
    InvalidConfigValue { key: String, message: String },

    #[error("Home directory not found")]
    HomeNotFound,
}

pub type Result<T> = std::result::Result<T, EmoteCatalogError>;

impl EmoteCatalogError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidChannel => 2,
            Self::NoEmotesAvailable { .. } => 3,
            Self::BadgeFetch { .. } | Self::BadgesAlreadyLoaded => 4,
            Self::ConfigKeyNotFound { .. } | Self::InvalidConfigValue { .. } => 5,
            Self::UnknownPlatform { .. } => 6,
            _ => 1,
        }
    }

    /// Build a source-level failure for `provider`.
    pub fn source(provider: Provider, message: impl Into<String>) -> Self {
        Self::Source {
            provider,
            message: message.into(),
        }
    }
}
