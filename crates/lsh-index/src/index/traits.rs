use std::collections::HashSet;

use lsh_core::ItemId;

/// Read-only candidate retrieval over a built index.
pub trait CandidateIndex: Send + Sync {
    /// Items sharing a band with the token's key. Empty for blank tokens.
    fn lookup_by_token(&self, word: &str) -> HashSet<ItemId>;

    /// Items sharing a bucket with `id` in any band, never `id` itself.
    fn lookup_by_id(&self, id: ItemId) -> HashSet<ItemId>;

    /// Number of distinct items indexed.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn num_bands(&self) -> usize;
}
