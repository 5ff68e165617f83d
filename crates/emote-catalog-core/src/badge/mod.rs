//! Badges
//!
//! The full badge list is fetched once at startup and indexed by wearer.
//! There is no incremental update path.

mod index;
mod source;
mod types;

pub use index::BadgeIndex;
pub use source::{BadgeSource, FileBadgeSource, StaticBadgeSource};
pub use types::{Badge, Identity};
