//! Emote catalog
//!
//! # Concepts
//!
//! - **Emote**: a named image token delivered by one provider
//! - **EmoteSet**: the emotes of one channel (or the global scope), enabled or disabled
//! - **EmoteStore**: all sets a session has seen, keyed by channel id
//! - **Index**: name -> emote view over the enabled sets, rebuilt lazily
//!
//! ```text
//! EmoteStore
//! ├── "global-alias"  (disabled, retained)
//! ├── "71092938"      (enabled)
//! └── ...
//!         │
//!         ▼ enabled sets, weight-sorted per set
//! IndexCache ── HashMap<name, Emote>
//! ```

mod index;
mod store;
mod types;

pub use index::{all_emotes, build_index, EmoteIndex, IndexCache};
pub use store::{EmoteSet, EmoteStore};
pub use types::{Emote, EmoteUrl, Provider, Scope};
