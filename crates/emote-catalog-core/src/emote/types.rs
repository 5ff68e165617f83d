//! Emote type definitions
//!
//! # Providers
//! ```text
//! 7TV           (global + per-channel)
//! FrankerFaceZ  (global + per-channel, platform aware)
//! BetterTTV     (global + per-channel, platform aware)
//! ```

use serde::{Deserialize, Serialize};

use crate::platform::Platform;

/// An independent upstream emote provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Provider {
    #[serde(rename = "7tv")]
    SevenTv,
    #[serde(rename = "ffz")]
    FrankerFaceZ,
    Bttv,
}

impl Provider {
    /// Short stable slug, also used as the payload directory name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SevenTv => "7tv",
            Self::FrankerFaceZ => "ffz",
            Self::Bttv => "bttv",
        }
    }

    /// All providers in aggregation order
    pub fn all() -> &'static [Provider] {
        &[Provider::SevenTv, Provider::FrankerFaceZ, Provider::Bttv]
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What a single source call asks a provider for
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Emotes available everywhere
    Global,
    /// Emotes owned by one channel
    Channel {
        id: String,
        platform: Option<Platform>,
    },
}

impl Scope {
    pub fn channel(id: impl Into<String>, platform: Option<Platform>) -> Self {
        Self::Channel {
            id: id.into(),
            platform,
        }
    }

    pub fn is_global(&self) -> bool {
        matches!(self, Self::Global)
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Global => write!(f, "global"),
            Self::Channel {
                id,
                platform: Some(p),
            } => write!(f, "{}:{}", p.id(), id),
            Self::Channel { id, platform: None } => write!(f, "channel:{}", id),
        }
    }
}

/// One rendition of an emote image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmoteUrl {
    /// Scale label, e.g. "1x"
    pub scale: String,
    pub url: String,
}

/// A single emote as delivered by a provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Emote {
    /// Provider-assigned id
    pub id: String,
    /// Chat token; not unique across providers
    pub name: String,
    /// Display ordering, ascending
    #[serde(default)]
    pub weight: i32,
    pub provider: Provider,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub urls: Vec<EmoteUrl>,
}

impl Emote {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        weight: i32,
        provider: Provider,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            weight,
            provider,
            owner: None,
            urls: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_serde_uses_slug() {
        for provider in Provider::all() {
            let json = serde_json::to_string(provider).unwrap();
            assert_eq!(json, format!("\"{}\"", provider.as_str()));
        }
    }

    #[test]
    fn emote_deserialize_defaults() {
        let emote: Emote =
            serde_json::from_str(r#"{"id":"1","name":"Kappa","provider":"7tv"}"#).unwrap();
        assert_eq!(emote.weight, 0);
        assert!(emote.owner.is_none());
        assert!(emote.urls.is_empty());
    }

    #[test]
    fn scope_display() {
        assert_eq!(Scope::Global.to_string(), "global");
        assert_eq!(Scope::channel("42", None).to_string(), "channel:42");
        assert_eq!(
            Scope::channel("42", Some(Platform::YouTube)).to_string(),
            "youtube:42"
        );
    }
}
