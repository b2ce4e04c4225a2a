//! Read-only lookups over a [`BucketIndex`].

use std::collections::HashSet;

use lsh_core::hash::hash_normalized;
use lsh_core::text::normalize_token;
use lsh_core::ItemId;

use crate::aggregate::CandidateAggregator;
use crate::band::WindowBand;
use crate::index::BucketIndex;

#[derive(Debug, Clone, Copy)]
pub struct QueryEngine<'a> {
    index: &'a BucketIndex,
}

impl<'a> QueryEngine<'a> {
    pub fn new(index: &'a BucketIndex) -> Self {
        Self { index }
    }

    /// Union of every bucket in every band covering the token's key.
    ///
    /// The word is normalized exactly like indexed tokens. Signature-row indexes
    /// carry no token space and always answer empty.
    pub fn lookup_by_token(&self, word: &str) -> HashSet<ItemId> {
        let mut agg = CandidateAggregator::new();
        let BucketIndex::Windowed(bands) = self.index else {
            return agg.finish();
        };
        let token = normalize_token(word);
        if token.is_empty() {
            return agg.finish();
        }
        for band in covering_bands(bands, hash_normalized(&token)) {
            agg.extend(band.members());
        }
        agg.finish()
    }

    /// Per band, the one bucket holding `id` (the first by key for token windows),
    /// unioned across all bands, minus `id`.
    pub fn lookup_by_id(&self, id: ItemId) -> HashSet<ItemId> {
        let mut agg = CandidateAggregator::excluding(id);
        match self.index {
            BucketIndex::Windowed(bands) => {
                for members in bands.iter().filter_map(|band| band.bucket_of(id)) {
                    agg.extend(members.iter().copied());
                }
            }
            BucketIndex::Banded(bands) => {
                for members in bands.iter().filter_map(|band| band.bucket_of(id)) {
                    agg.extend(members.iter().copied());
                }
            }
        }
        agg.finish()
    }
}

/// Bands are ordered and disjoint, so at most one covers `hash`.
fn covering_bands(bands: &[WindowBand], hash: u64) -> impl Iterator<Item = &WindowBand> {
    let end = bands.partition_point(|b| b.min_hash() <= hash);
    bands[..end].last().filter(|b| b.covers(hash)).into_iter()
}
