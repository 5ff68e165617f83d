//! Name-keyed emote index
//!
//! Derived from the enabled sets of an [`EmoteStore`] and cached until explicitly
//! invalidated. Reads never check the store for changes on their own.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use super::store::EmoteStore;
use super::types::Emote;

/// Emote name -> emote
pub type EmoteIndex = HashMap<String, Emote>;

/// Every emote of every enabled set, weight-sorted within each set, sets in store order
pub fn all_emotes(store: &EmoteStore) -> Vec<Emote> {
    store
        .enabled_sets()
        .flat_map(|set| set.sorted_emotes())
        .collect()
}

/// Fold emotes into an index; later names overwrite earlier ones
pub fn build_index(emotes: Vec<Emote>) -> EmoteIndex {
    let mut index = EmoteIndex::with_capacity(emotes.len());
    for emote in emotes {
        index.insert(emote.name.clone(), emote);
    }
    index
}

/// Lazily built, explicitly invalidated index cache
#[derive(Debug, Default)]
pub struct IndexCache {
    cached: Option<Arc<EmoteIndex>>,
}

impl IndexCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached index, rebuilding from `store` if there is none
    pub fn get_or_build(&mut self, store: &EmoteStore) -> Arc<EmoteIndex> {
        if let Some(index) = &self.cached {
            return Arc::clone(index);
        }

        let index = Arc::new(build_index(all_emotes(store)));
        debug!(entries = index.len(), "rebuilt emote index");
        self.cached = Some(Arc::clone(&index));
        index
    }

    /// Drop the cached index; the next read rebuilds
    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    pub fn is_cached(&self) -> bool {
        self.cached.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emote::Provider;

    fn emote(id: &str, name: &str, weight: i32, provider: Provider) -> Emote {
        Emote::new(id, name, weight, provider)
    }

    #[test]
    fn all_emotes_sorts_within_sets_only() {
        let mut store = EmoteStore::new();
        store.enable_set(
            "global",
            vec![
                emote("1", "b", 10, Provider::SevenTv),
                emote("2", "a", 1, Provider::SevenTv),
            ],
        );
        store.enable_set("chan", vec![emote("3", "c", 0, Provider::Bttv)]);

        let names: Vec<_> = all_emotes(&store).into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn disabled_sets_are_excluded() {
        let mut store = EmoteStore::new();
        store.enable_set("a", vec![emote("1", "Kappa", 0, Provider::SevenTv)]);
        store.enable_set("b", vec![emote("2", "Pog", 0, Provider::SevenTv)]);
        store.disable_set("a");

        let mut cache = IndexCache::new();
        let index = cache.get_or_build(&store);
        assert_eq!(index.len(), 1);
        assert!(index.contains_key("Pog"));
    }

    #[test]
    fn name_collision_last_set_wins() {
        let mut store = EmoteStore::new();
        store.enable_set("first", vec![emote("ffz-1", "Kappa", 1, Provider::FrankerFaceZ)]);
        store.enable_set("second", vec![emote("7tv-1", "Kappa", 50, Provider::SevenTv)]);

        let mut cache = IndexCache::new();
        let index = cache.get_or_build(&store);
        assert_eq!(index.len(), 1);
        assert_eq!(index["Kappa"].id, "7tv-1");
    }

    #[test]
    fn name_collision_within_set_follows_weight_order() {
        let mut store = EmoteStore::new();
        store.enable_set(
            "chan",
            vec![
                emote("heavy", "Kappa", 9, Provider::Bttv),
                emote("light", "Kappa", 1, Provider::SevenTv),
            ],
        );

        let index = IndexCache::new().get_or_build(&store);
        assert_eq!(index["Kappa"].id, "heavy");
    }

    #[test]
    fn cached_index_is_reused_until_invalidated() {
        let mut store = EmoteStore::new();
        store.enable_set("a", vec![emote("1", "Kappa", 0, Provider::SevenTv)]);

        let mut cache = IndexCache::new();
        let first = cache.get_or_build(&store);
        let second = cache.get_or_build(&store);
        assert!(Arc::ptr_eq(&first, &second));

        // store changes are invisible until invalidation
        store.enable_set("b", vec![emote("2", "Pog", 0, Provider::SevenTv)]);
        assert_eq!(cache.get_or_build(&store).len(), 1);

        cache.invalidate();
        assert!(!cache.is_cached());
        let rebuilt = cache.get_or_build(&store);
        assert!(!Arc::ptr_eq(&first, &rebuilt));
        assert_eq!(rebuilt.len(), 2);
    }

    #[test]
    fn empty_store_builds_empty_index() {
        let store = EmoteStore::new();
        let mut cache = IndexCache::new();
        assert!(cache.get_or_build(&store).is_empty());
        assert!(cache.is_cached());
    }
}
