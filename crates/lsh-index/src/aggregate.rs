use std::collections::HashSet;

use lsh_core::ItemId;

/// Unions bucket members into a deduplicated candidate set, optionally leaving
/// out the query item.
#[derive(Debug, Default)]
pub struct CandidateAggregator {
    candidates: HashSet<ItemId>,
    exclude: Option<ItemId>,
}

impl CandidateAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Aggregator for an id query: `id` never appears in the result.
    pub fn excluding(id: ItemId) -> Self {
        Self { candidates: HashSet::new(), exclude: Some(id) }
    }

    pub fn extend<I: IntoIterator<Item = ItemId>>(&mut self, members: I) {
        self.candidates.extend(members);
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn finish(mut self) -> HashSet<ItemId> {
        if let Some(id) = self.exclude {
            self.candidates.remove(&id);
        }
        self.candidates
    }
}
