use std::collections::{BTreeMap, BTreeSet};

use lsh_core::ItemId;

use crate::store::TokenPostings;

/// A contiguous range of token keys and the postings whose key falls in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowBand {
    min_hash: u64,
    max_hash: u64,
    buckets: BTreeMap<u64, BTreeSet<ItemId>>,
}

impl WindowBand {
    fn open(min_hash: u64, width: u64) -> Self {
        Self {
            min_hash,
            max_hash: min_hash.saturating_add(width),
            buckets: BTreeMap::new(),
        }
    }

    pub fn min_hash(&self) -> u64 {
        self.min_hash
    }

    pub fn max_hash(&self) -> u64 {
        self.max_hash
    }

    pub fn covers(&self, hash: u64) -> bool {
        self.min_hash <= hash && hash <= self.max_hash
    }

    /// Buckets keyed by token hash, in key order.
    pub fn buckets(&self) -> &BTreeMap<u64, BTreeSet<ItemId>> {
        &self.buckets
    }

    pub fn num_buckets(&self) -> usize {
        self.buckets.len()
    }

    /// Members of the lowest-keyed bucket holding `id`.
    pub fn bucket_of(&self, id: ItemId) -> Option<&BTreeSet<ItemId>> {
        self.buckets.values().find(|members| members.contains(&id))
    }

    /// Every item in every bucket of the band.
    pub fn members(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.buckets.values().flat_map(|m| m.iter().copied())
    }
}

/// Greedy single pass over the ordered keys: each unconsumed key opens a band
/// `[k, k + 2 * offset]` that absorbs every key inside it.
pub fn build_windowed(postings: TokenPostings, offset: u64) -> Vec<WindowBand> {
    let width = offset.saturating_mul(2);
    let mut bands = Vec::new();
    let mut current: Option<WindowBand> = None;

    for (key, members) in postings.into_buckets() {
        if current.as_ref().map_or(true, |band| key > band.max_hash) {
            bands.extend(current.replace(WindowBand::open(key, width)));
        }
        if let Some(band) = current.as_mut() {
            band.buckets.insert(key, members);
        }
    }
    bands.extend(current);
    bands
}

#[cfg(test)]
mod tests {
    use super::*;
    use lsh_core::Item;

    fn postings() -> TokenPostings {
        TokenPostings::from_items(
            &[
                Item::from_text(1, "the cat sat"),
                Item::from_text(2, "the cat ran"),
                Item::from_text(3, "a dog barked"),
            ],
            false,
        )
    }

    #[test]
    fn test_zero_offset_one_key_per_band() {
        let p = postings();
        let n = p.len();
        let bands = build_windowed(p, 0);
        assert_eq!(bands.len(), n);
        assert!(bands.iter().all(|b| b.num_buckets() == 1 && b.min_hash() == b.max_hash()));
    }

    #[test]
    fn test_huge_offset_single_band() {
        let bands = build_windowed(postings(), u64::MAX);
        assert_eq!(bands.len(), 1);
        assert_eq!(bands[0].max_hash(), u64::MAX);
        assert_eq!(bands[0].num_buckets(), 7);
    }

    #[test]
    fn test_bands_partition_keys() {
        let p = postings();
        let keys: Vec<u64> = p.keys().collect();
        let offset = 1 << 60;
        let bands = build_windowed(p, offset);

        let banded: Vec<u64> = bands.iter().flat_map(|b| b.buckets().keys().copied()).collect();
        assert_eq!(banded, keys);
        for pair in bands.windows(2) {
            assert!(pair[0].max_hash() < pair[1].min_hash());
        }
        for band in &bands {
            assert_eq!(band.max_hash(), band.min_hash().saturating_add(2 * offset));
            assert!(band.buckets().keys().all(|&k| band.covers(k)));
            assert_eq!(band.buckets().keys().next(), Some(&band.min_hash()));
        }
    }

    #[test]
    fn test_bucket_of_takes_lowest_key() {
        let bands = build_windowed(postings(), u64::MAX);
        let first = bands[0]
            .buckets()
            .values()
            .find(|m| m.contains(&1))
            .unwrap();
        assert_eq!(bands[0].bucket_of(1), Some(first));
        assert_eq!(bands[0].bucket_of(99), None);
    }

    #[test]
    fn test_empty_postings() {
        assert!(build_windowed(TokenPostings::default(), 10).is_empty());
    }
}
