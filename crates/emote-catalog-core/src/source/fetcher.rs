//! Single source invocation with failure isolation

use std::sync::Arc;

use tracing::{debug, warn};

use crate::emote::{Emote, Provider, Scope};

use super::EmoteSource;

/// One provider call for one scope
///
/// Never fails: any error from the source is logged and replaced by an empty list,
/// so one broken provider cannot take the others down with it. No retries.
#[derive(Clone)]
pub struct SourceFetcher {
    source: Arc<dyn EmoteSource>,
    scope: Scope,
}

impl SourceFetcher {
    pub fn new(source: Arc<dyn EmoteSource>, scope: Scope) -> Self {
        Self { source, scope }
    }

    pub fn provider(&self) -> Provider {
        self.source.provider()
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// Run the call, downgrading any failure to an empty contribution
    pub async fn fetch_or_empty(&self) -> Vec<Emote> {
        match self.source.fetch(&self.scope).await {
            Ok(emotes) => {
                debug!(
                    provider = %self.provider(),
                    scope = %self.scope,
                    count = emotes.len(),
                    "source fetched"
                );
                emotes
            }
            Err(e) => {
                warn!(
                    provider = %self.provider(),
                    scope = %self.scope,
                    error = %e,
                    "source failed, contributing no emotes"
                );
                Vec::new()
            }
        }
    }
}

impl std::fmt::Debug for SourceFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFetcher")
            .field("provider", &self.provider())
            .field("scope", &self.scope)
            .finish()
    }
}
