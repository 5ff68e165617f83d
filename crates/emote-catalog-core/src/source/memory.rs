//! In-memory source with fixed per-scope lists

use std::collections::HashMap;

use async_trait::async_trait;

use crate::emote::{Emote, Provider, Scope};
use crate::error::{EmoteCatalogError, Result};

use super::EmoteSource;

/// Source answering from preloaded lists
///
/// Channel lookups ignore the platform. Unknown channels yield an empty list.
#[derive(Debug, Clone)]
pub struct StaticSource {
    provider: Provider,
    global: Vec<Emote>,
    channels: HashMap<String, Vec<Emote>>,
    fail: bool,
}

impl StaticSource {
    pub fn new(provider: Provider) -> Self {
        Self {
            provider,
            global: Vec::new(),
            channels: HashMap::new(),
            fail: false,
        }
    }

    /// A source whose every call fails
    pub fn failing(provider: Provider) -> Self {
        Self {
            fail: true,
            ..Self::new(provider)
        }
    }

    /// Set global emotes
    pub fn with_global(mut self, emotes: Vec<Emote>) -> Self {
        self.global = emotes;
        self
    }

    /// Set emotes for one channel
    pub fn with_channel(mut self, channel_id: impl Into<String>, emotes: Vec<Emote>) -> Self {
        self.channels.insert(channel_id.into(), emotes);
        self
    }
}

#[async_trait]
impl EmoteSource for StaticSource {
    fn provider(&self) -> Provider {
        self.provider
    }

    async fn fetch(&self, scope: &Scope) -> Result<Vec<Emote>> {
        if self.fail {
            return Err(EmoteCatalogError::source(self.provider, "unavailable"));
        }

        Ok(match scope {
            Scope::Global => self.global.clone(),
            Scope::Channel { id, .. } => self.channels.get(id).cloned().unwrap_or_default(),
        })
    }
}
