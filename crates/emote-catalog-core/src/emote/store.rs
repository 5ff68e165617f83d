//! Emote Store
//!
//! Named emote sets keyed by channel id, each independently enabled or disabled.
//! Disabled sets are kept around and only excluded from index rebuilds.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use super::types::Emote;

/// A channel's (or the global scope's) emotes, frozen at creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmoteSet {
    /// Unique per creation; a replaced set gets a new id
    pub id: Uuid,
    /// Channel id this set is registered under
    pub name: String,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
    emotes: Vec<Emote>,
}

impl EmoteSet {
    pub fn new(name: impl Into<String>, emotes: Vec<Emote>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            enabled: true,
            created_at: Utc::now(),
            emotes,
        }
    }

    /// Emotes in provider order
    pub fn emotes(&self) -> &[Emote] {
        &self.emotes
    }

    /// Consume the set, keeping its emotes in provider order
    pub fn into_emotes(self) -> Vec<Emote> {
        self.emotes
    }

    /// Emotes ordered by ascending weight; ties keep provider order
    pub fn sorted_emotes(&self) -> Vec<Emote> {
        let mut emotes = self.emotes.clone();
        emotes.sort_by_key(|e| e.weight);
        emotes
    }

    pub fn len(&self) -> usize {
        self.emotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emotes.is_empty()
    }
}

/// All emote sets known to a session
#[derive(Debug, Clone, Default)]
pub struct EmoteStore {
    sets: IndexMap<String, EmoteSet>,
}

impl EmoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create or replace the set for `name` and enable it
    ///
    /// A replaced set keeps its position in iteration order but none of its emotes.
    pub fn enable_set(&mut self, name: &str, emotes: Vec<Emote>) -> EmoteSet {
        let set = EmoteSet::new(name, emotes);
        debug!(set = name, emotes = set.len(), "enabling emote set");
        self.sets.insert(name.to_string(), set.clone());
        set
    }

    /// Disable the set for `name`; unknown names are ignored
    pub fn disable_set(&mut self, name: &str) {
        if let Some(set) = self.sets.get_mut(name) {
            debug!(set = name, "disabling emote set");
            set.enabled = false;
        }
    }

    pub fn get(&self, name: &str) -> Option<&EmoteSet> {
        self.sets.get(name)
    }

    /// All sets in iteration order
    pub fn sets(&self) -> impl Iterator<Item = &EmoteSet> {
        self.sets.values()
    }

    /// Enabled sets in iteration order
    pub fn enabled_sets(&self) -> impl Iterator<Item = &EmoteSet> {
        self.sets.values().filter(|s| s.enabled)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.sets.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emote::Provider;

    fn emote(name: &str, weight: i32) -> Emote {
        Emote::new(name, name, weight, Provider::SevenTv)
    }

    #[test]
    fn enable_replaces_previous_set() {
        let mut store = EmoteStore::new();
        let first = store.enable_set("chan", vec![emote("a", 1), emote("b", 2)]);
        let second = store.enable_set("chan", vec![emote("c", 3)]);

        assert_ne!(first.id, second.id);
        assert_eq!(store.len(), 1);
        let set = store.get("chan").unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.emotes()[0].name, "c");
        assert!(set.enabled);
    }

    #[test]
    fn disable_keeps_data() {
        let mut store = EmoteStore::new();
        store.enable_set("chan", vec![emote("a", 1)]);
        store.disable_set("chan");

        let set = store.get("chan").unwrap();
        assert!(!set.enabled);
        assert_eq!(set.len(), 1);
        assert_eq!(store.enabled_sets().count(), 0);
        assert_eq!(store.sets().count(), 1);
    }

    #[test]
    fn disable_unknown_is_noop() {
        let mut store = EmoteStore::new();
        store.disable_set("missing");
        store.disable_set("");
        assert!(store.is_empty());
    }

    #[test]
    fn into_emotes_keeps_provider_order() {
        let set = EmoteSet::new("chan", vec![emote("heavy", 9), emote("light", 1)]);
        let names: Vec<_> = set.into_emotes().into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["heavy", "light"]);
    }

    #[test]
    fn set_serializes_with_emotes() {
        let mut store = EmoteStore::new();
        store.enable_set("chan", vec![emote("a", 1)]);
        store.disable_set("chan");

        let json = serde_json::to_value(store.get("chan").unwrap()).unwrap();
        assert_eq!(json["name"], "chan");
        assert_eq!(json["enabled"], false);
        assert_eq!(json["emotes"][0]["name"], "a");

        let back: EmoteSet = serde_json::from_value(json).unwrap();
        assert_eq!(back.id, store.get("chan").unwrap().id);
        assert_eq!(back.len(), 1);
    }

    #[test]
    fn replaced_set_keeps_iteration_position() {
        let mut store = EmoteStore::new();
        store.enable_set("first", vec![emote("a", 1)]);
        store.enable_set("second", vec![emote("b", 1)]);
        store.enable_set("first", vec![emote("c", 1)]);

        let names: Vec<_> = store.sets().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[test]
    fn sorted_emotes_is_stable() {
        let set = EmoteSet::new(
            "chan",
            vec![emote("x", 5), emote("y", 1), emote("z", 5), emote("w", 0)],
        );
        let names: Vec<_> = set.sorted_emotes().into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["w", "y", "x", "z"]);
        // provider order untouched
        assert_eq!(set.emotes()[0].name, "x");
    }
}
