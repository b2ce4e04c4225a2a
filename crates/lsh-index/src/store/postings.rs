use std::collections::{BTreeMap, BTreeSet, HashSet};

use lsh_core::hash::hash_normalized;
use lsh_core::{Item, ItemId};
use rayon::prelude::*;
use tracing::debug;

/// Token-hash signature space: every distinct token key mapped to the items holding it,
/// ordered by key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenPostings {
    buckets: BTreeMap<u64, BTreeSet<ItemId>>,
    vocabulary: usize,
    num_items: usize,
}

impl TokenPostings {
    /// Invert the item collection into key -> item-set postings.
    ///
    /// Tokens whose keys collide share one posting list.
    pub fn from_items(items: &[Item], parallel: bool) -> Self {
        let mut by_token: BTreeMap<&str, Vec<ItemId>> = BTreeMap::new();
        let mut ids: HashSet<ItemId> = HashSet::with_capacity(items.len());
        for item in items {
            ids.insert(item.id());
            for token in item.tokens() {
                by_token.entry(token.as_str()).or_default().push(item.id());
            }
        }

        let vocabulary = by_token.len();
        let entries: Vec<(&str, Vec<ItemId>)> = by_token.into_iter().collect();
        let hashed: Vec<(u64, Vec<ItemId>)> = if parallel {
            entries.into_par_iter().map(|(t, members)| (hash_normalized(t), members)).collect()
        } else {
            entries.into_iter().map(|(t, members)| (hash_normalized(t), members)).collect()
        };

        let mut buckets: BTreeMap<u64, BTreeSet<ItemId>> = BTreeMap::new();
        for (key, members) in hashed {
            buckets.entry(key).or_default().extend(members);
        }
        if buckets.len() < vocabulary {
            debug!(collisions = vocabulary - buckets.len(), "token keys collided");
        }

        Self { buckets, vocabulary, num_items: ids.len() }
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Number of distinct normalized tokens.
    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary
    }

    /// Number of distinct item ids seen.
    pub fn num_items(&self) -> usize {
        self.num_items
    }

    pub fn get(&self, key: u64) -> Option<&BTreeSet<ItemId>> {
        self.buckets.get(&key)
    }

    /// Keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = u64> + '_ {
        self.buckets.keys().copied()
    }

    pub(crate) fn into_buckets(self) -> BTreeMap<u64, BTreeSet<ItemId>> {
        self.buckets
    }
}
