//! Streaming platform a channel lives on
//!
//! Channel-scoped providers key their data by platform:
//! - Twitch (numeric channel ids)
//! - YouTube (channel handles)

use serde::{Deserialize, Serialize};

use crate::error::EmoteCatalogError;

/// Platform a channel id belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Platform {
    /// twitch.tv
    #[default]
    Twitch,
    /// youtube.com live chat
    #[serde(rename = "youtube")]
    YouTube,
}

impl Platform {
    /// Get platform name for display
    pub fn name(&self) -> &'static str {
        match self {
            Self::Twitch => "Twitch",
            Self::YouTube => "YouTube",
        }
    }

    /// Get short identifier
    pub fn id(&self) -> &'static str {
        match self {
            Self::Twitch => "twitch",
            Self::YouTube => "youtube",
        }
    }

    /// Get all supported platforms
    pub fn all() -> &'static [Platform] {
        &[Platform::Twitch, Platform::YouTube]
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Platform {
    type Err = EmoteCatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "twitch" | "ttv" => Ok(Self::Twitch),
            "youtube" | "yt" => Ok(Self::YouTube),
            _ => Err(EmoteCatalogError::UnknownPlatform {
                value: s.to_string(),
            }),
        }
    }
}
