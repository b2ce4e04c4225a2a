//! A swappable handle for re-indexing while readers keep querying.

use std::collections::HashSet;
use std::sync::Arc;

use lsh_core::ItemId;
use parking_lot::RwLock;
use tracing::info;

use crate::index::{CandidateIndex, LshIndex};

/// Holds the currently published index. Readers take a snapshot and query it
/// without holding the lock; [`SharedIndex::replace`] publishes a rebuilt index.
pub struct SharedIndex {
    current: RwLock<Arc<LshIndex>>,
}

impl SharedIndex {
    pub fn new(index: LshIndex) -> Self {
        Self { current: RwLock::new(Arc::new(index)) }
    }

    /// The published index at the time of the call.
    pub fn current(&self) -> Arc<LshIndex> {
        self.current.read().clone()
    }

    /// Publish `index` and return the one it replaces.
    pub fn replace(&self, index: LshIndex) -> Arc<LshIndex> {
        let next = Arc::new(index);
        info!(items = next.stats().num_items, bands = next.stats().num_bands, "publishing rebuilt LSH index");
        std::mem::replace(&mut *self.current.write(), next)
    }
}

impl From<LshIndex> for SharedIndex {
    fn from(index: LshIndex) -> Self {
        Self::new(index)
    }
}

impl CandidateIndex for SharedIndex {
    fn lookup_by_token(&self, word: &str) -> HashSet<ItemId> {
        self.current().lookup_by_token(word)
    }

    fn lookup_by_id(&self, id: ItemId) -> HashSet<ItemId> {
        self.current().lookup_by_id(id)
    }

    fn len(&self) -> usize {
        self.current().len()
    }

    fn num_bands(&self) -> usize {
        self.current().num_bands()
    }
}
