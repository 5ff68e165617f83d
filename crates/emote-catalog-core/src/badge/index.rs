//! Identity -> badge positions, built once

use std::collections::HashMap;

use super::types::{Badge, Identity};

/// Immutable badge lookup table
#[derive(Debug, Clone, Default)]
pub struct BadgeIndex {
    badges: Vec<Badge>,
    by_identity: HashMap<Identity, Vec<usize>>,
}

impl BadgeIndex {
    /// Index every wearer of every badge
    ///
    /// Positions are appended in encounter order, so an identity wearing several
    /// badges lists them in badge-list order.
    pub fn build(badges: Vec<Badge>) -> Self {
        let mut by_identity: HashMap<Identity, Vec<usize>> = HashMap::new();

        for (position, badge) in badges.iter().enumerate() {
            for user in &badge.users {
                by_identity
                    .entry(Identity::parse(user))
                    .or_default()
                    .push(position);
            }
        }

        Self {
            badges,
            by_identity,
        }
    }

    /// Badge positions for `identity`; empty when unseen
    pub fn lookup(&self, identity: &Identity) -> &[usize] {
        self.by_identity
            .get(identity)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Same as [`lookup`](Self::lookup) for a raw id or handle
    pub fn lookup_raw(&self, raw: &str) -> &[usize] {
        self.lookup(&Identity::parse(raw))
    }

    /// Badges worn by `identity`, in position order
    pub fn badges_for(&self, identity: &Identity) -> Vec<&Badge> {
        self.lookup(identity)
            .iter()
            .filter_map(|&i| self.badges.get(i))
            .collect()
    }

    pub fn badges(&self) -> &[Badge] {
        &self.badges
    }

    /// Number of distinct identities
    pub fn identity_count(&self) -> usize {
        self.by_identity.len()
    }

    pub fn len(&self) -> usize {
        self.badges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.badges.is_empty()
    }
}
