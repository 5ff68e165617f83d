//! Concurrent fetch-and-merge across all providers

use std::path::Path;
use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, info};

use crate::emote::{Emote, Provider, Scope};
use crate::error::{EmoteCatalogError, Result};
use crate::platform::Platform;

use super::{EmoteSource, FileSource, SourceFetcher};

/// Runs the six provider calls for a channel switch and merges them
#[derive(Clone)]
pub struct Aggregator {
    seven_tv: Arc<dyn EmoteSource>,
    ffz: Arc<dyn EmoteSource>,
    bttv: Arc<dyn EmoteSource>,
}

impl Aggregator {
    pub fn new(
        seven_tv: Arc<dyn EmoteSource>,
        ffz: Arc<dyn EmoteSource>,
        bttv: Arc<dyn EmoteSource>,
    ) -> Self {
        Self {
            seven_tv,
            ffz,
            bttv,
        }
    }

    /// Aggregator over file-backed sources rooted at `data_dir`
    pub fn from_data_dir(data_dir: &Path) -> Self {
        Self::new(
            Arc::new(FileSource::new(data_dir, Provider::SevenTv)),
            Arc::new(FileSource::new(data_dir, Provider::FrankerFaceZ)),
            Arc::new(FileSource::new(data_dir, Provider::Bttv)),
        )
    }

    /// The fixed invocation list: three global calls, then three channel calls
    ///
    /// 7TV channel lookups are platform independent; FFZ and BTTV take the platform.
    pub fn fetchers(&self, channel_id: &str, platform: Option<Platform>) -> Vec<SourceFetcher> {
        vec![
            SourceFetcher::new(Arc::clone(&self.seven_tv), Scope::Global),
            SourceFetcher::new(Arc::clone(&self.ffz), Scope::Global),
            SourceFetcher::new(Arc::clone(&self.bttv), Scope::Global),
            SourceFetcher::new(Arc::clone(&self.seven_tv), Scope::channel(channel_id, None)),
            SourceFetcher::new(Arc::clone(&self.ffz), Scope::channel(channel_id, platform)),
            SourceFetcher::new(Arc::clone(&self.bttv), Scope::channel(channel_id, platform)),
        ]
    }

    /// Fetch everything for `channel_id` and concatenate
    ///
    /// All calls run concurrently and are awaited to completion. Contributions are
    /// concatenated in invocation order, each keeping its own internal order.
    /// Fails only when every contribution is empty.
    pub async fn aggregate(
        &self,
        channel_id: &str,
        platform: Option<Platform>,
    ) -> Result<Vec<Emote>> {
        let fetchers = self.fetchers(channel_id, platform);
        let results = join_all(fetchers.iter().map(|f| f.fetch_or_empty())).await;

        for (fetcher, emotes) in fetchers.iter().zip(&results) {
            debug!(
                provider = %fetcher.provider(),
                scope = %fetcher.scope(),
                count = emotes.len(),
                "source contribution"
            );
        }

        let merged: Vec<Emote> = results.into_iter().flatten().collect();
        if merged.is_empty() {
            return Err(EmoteCatalogError::NoEmotesAvailable {
                channel: channel_id.to_string(),
            });
        }

        info!(channel = channel_id, emotes = merged.len(), "aggregated emotes");
        Ok(merged)
    }
}

impl std::fmt::Debug for Aggregator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Aggregator").finish_non_exhaustive()
    }
}
