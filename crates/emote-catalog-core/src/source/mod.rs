//! Emote sources and aggregation
//!
//! # Hierarchy
//!
//! ```text
//! Aggregator
//! ├── SourceFetcher(7tv,  global)      ┐
//! ├── SourceFetcher(ffz,  global)      │ run concurrently,
//! ├── SourceFetcher(bttv, global)      │ failures become []
//! ├── SourceFetcher(7tv,  channel)     │
//! ├── SourceFetcher(ffz,  channel)     │
//! └── SourceFetcher(bttv, channel)     ┘
//!          │
//!          ▼ concatenated; empty total is an error
//! ```

mod aggregator;
mod fetcher;
mod file;
mod memory;

use async_trait::async_trait;

use crate::emote::{Emote, Provider, Scope};
use crate::error::Result;

pub use aggregator::Aggregator;
pub use fetcher::SourceFetcher;
pub use file::FileSource;
pub use memory::StaticSource;

/// Transport boundary for one provider
#[async_trait]
pub trait EmoteSource: Send + Sync {
    /// Provider this source talks to
    fn provider(&self) -> Provider;

    /// Fetch the emotes for `scope`
    async fn fetch(&self, scope: &Scope) -> Result<Vec<Emote>>;
}
