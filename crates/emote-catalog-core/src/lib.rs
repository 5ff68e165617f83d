pub mod badge;
pub mod config;
pub mod emote;
pub mod error;
pub mod platform;
pub mod session;
pub mod source;

pub use badge::{Badge, BadgeIndex, BadgeSource, FileBadgeSource, Identity, StaticBadgeSource};
pub use config::Config;
pub use emote::{
    all_emotes, build_index, Emote, EmoteIndex, EmoteSet, EmoteStore, EmoteUrl, IndexCache,
    Provider, Scope,
};
pub use error::{EmoteCatalogError, Result};
pub use platform::Platform;
pub use session::{Session, SwitchRequest};
pub use source::{Aggregator, EmoteSource, FileSource, SourceFetcher, StaticSource};
