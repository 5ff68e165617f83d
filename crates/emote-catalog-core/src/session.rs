//! Session: channel switching, emote index and badges
//!
//! A [`Session`] owns all mutable catalog state for one viewer session. Methods take
//! `&self`, so several switches may be in flight at once on the same task; catalog
//! mutation happens only between await points, and whichever switch resolves last
//! determines the final state.

use std::sync::Arc;

use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use tracing::{info, warn};

use crate::badge::{Badge, BadgeIndex, BadgeSource, Identity};
use crate::emote::{all_emotes, Emote, EmoteIndex, EmoteStore, IndexCache};
use crate::error::{EmoteCatalogError, Result};
use crate::platform::Platform;
use crate::source::Aggregator;

/// Parameters of one channel switch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SwitchRequest {
    pub channel_id: String,
    pub platform: Option<Platform>,
    /// Display name, informational only
    pub channel_name: Option<String>,
    /// Identity the viewer is watching "as"; its set is disabled too
    pub as_channel: Option<String>,
}

impl SwitchRequest {
    pub fn new(channel_id: impl Into<String>) -> Self {
        Self {
            channel_id: channel_id.into(),
            ..Self::default()
        }
    }

    /// Set platform
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self
    }

    /// Set channel display name
    pub fn with_channel_name(mut self, name: impl Into<String>) -> Self {
        self.channel_name = Some(name.into());
        self
    }

    /// Set alias channel
    pub fn with_alias(mut self, as_channel: impl Into<String>) -> Self {
        self.as_channel = Some(as_channel.into());
        self
    }
}

#[derive(Debug, Default)]
struct CatalogState {
    store: EmoteStore,
    index: IndexCache,
    /// Empty when no channel is active
    current_channel: String,
}

/// Owned catalog context for one viewer session
#[derive(Debug)]
pub struct Session {
    aggregator: Aggregator,
    state: Mutex<CatalogState>,
    badges: OnceCell<BadgeIndex>,
}

impl Session {
    pub fn new(aggregator: Aggregator) -> Self {
        Self {
            aggregator,
            state: Mutex::new(CatalogState::default()),
            badges: OnceCell::new(),
        }
    }

    // ========== Channel Switching ==========

    /// Switch the active channel
    ///
    /// Disables the current channel's set (and the alias set, if any), aggregates all
    /// providers for the new channel and enables the result under its id. On an
    /// aggregate failure the previous channel stays disabled; nothing is rolled back.
    pub async fn switch_channel(&self, request: SwitchRequest) -> Result<Vec<Emote>> {
        if request.channel_id.is_empty() {
            return Err(EmoteCatalogError::InvalidChannel);
        }

        let previous = {
            let mut state = self.state.lock();
            let previous = state.current_channel.clone();
            state.store.disable_set(&previous);
            if let Some(alias) = request.as_channel.as_deref().filter(|a| !a.is_empty()) {
                state.store.disable_set(alias);
            }
            previous
        };

        info!(
            channel = %request.channel_id,
            name = request.channel_name.as_deref().unwrap_or(""),
            previous = %previous,
            "switching channel"
        );

        let merged = match self
            .aggregator
            .aggregate(&request.channel_id, request.platform)
            .await
        {
            Ok(merged) => merged,
            Err(e) => {
                warn!(
                    channel = %request.channel_id,
                    previous = %previous,
                    error = %e,
                    "channel switch failed, previous channel left disabled"
                );
                return Err(e);
            }
        };

        let mut state = self.state.lock();
        let set = state.store.enable_set(&request.channel_id, merged);
        state.index.invalidate();
        state.current_channel = request.channel_id;

        Ok(set.into_emotes())
    }

    /// Currently active channel id, if any
    pub fn current_channel(&self) -> Option<String> {
        let state = self.state.lock();
        if state.current_channel.is_empty() {
            None
        } else {
            Some(state.current_channel.clone())
        }
    }

    /// Snapshot of the emote store
    pub fn store(&self) -> EmoteStore {
        self.state.lock().store.clone()
    }

    // ========== Emote Index ==========

    /// Name-keyed index over the enabled sets, rebuilt only after invalidation
    pub fn emote_index(&self) -> Arc<EmoteIndex> {
        let mut state = self.state.lock();
        let CatalogState { store, index, .. } = &mut *state;
        index.get_or_build(store)
    }

    /// Look up one emote by name through the index
    pub fn emote(&self, name: &str) -> Option<Emote> {
        self.emote_index().get(name).cloned()
    }

    /// Emotes of all enabled sets, weight-sorted per set
    pub fn all_emotes(&self) -> Vec<Emote> {
        all_emotes(&self.state.lock().store)
    }

    /// Drop the cached index
    pub fn invalidate_index(&self) {
        self.state.lock().index.invalidate();
    }

    // ========== Badges ==========

    /// Fetch and index the badge list; only the first call does any work
    pub async fn load_badges(&self, source: &dyn BadgeSource) -> Result<&BadgeIndex> {
        if self.badges.get().is_some() {
            return Err(EmoteCatalogError::BadgesAlreadyLoaded);
        }

        let index = BadgeIndex::build(source.fetch_badges().await?);
        let count = index.len();

        match self.badges.try_insert(index) {
            Ok(index) => {
                info!(badges = count, identities = index.identity_count(), "loaded badges");
                Ok(index)
            }
            Err(_) => Err(EmoteCatalogError::BadgesAlreadyLoaded),
        }
    }

    /// Badge index, once loaded
    pub fn badge_index(&self) -> Option<&BadgeIndex> {
        self.badges.get()
    }

    /// Badge positions for `identity`; empty when unseen or not loaded yet
    pub fn badge_positions(&self, identity: &Identity) -> Vec<usize> {
        self.badges
            .get()
            .map(|index| index.lookup(identity).to_vec())
            .unwrap_or_default()
    }

    /// Badges worn by a raw id or handle
    pub fn badges_for(&self, raw: &str) -> Vec<&Badge> {
        self.badges
            .get()
            .map(|index| index.badges_for(&Identity::parse(raw)))
            .unwrap_or_default()
    }
}
