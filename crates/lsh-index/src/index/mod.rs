//! The built, immutable index and its statistics.

mod traits;

use std::collections::HashSet;

use lsh_core::hash::HASH_VERSION;
use lsh_core::{ItemId, LshConfig};
use serde::{Deserialize, Serialize};

use crate::band::{RowBand, WindowBand};
use crate::query::QueryEngine;

pub use traits::CandidateIndex;

/// Bands produced by one of the two banding strategies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BucketIndex {
    Windowed(Vec<WindowBand>),
    Banded(Vec<RowBand>),
}

impl BucketIndex {
    pub fn num_bands(&self) -> usize {
        match self {
            Self::Windowed(bands) => bands.len(),
            Self::Banded(bands) => bands.len(),
        }
    }

    pub fn num_buckets(&self) -> usize {
        match self {
            Self::Windowed(bands) => bands.iter().map(WindowBand::num_buckets).sum(),
            Self::Banded(bands) => bands.iter().map(RowBand::num_buckets).sum(),
        }
    }

    pub fn largest_bucket(&self) -> usize {
        match self {
            Self::Windowed(bands) => bands
                .iter()
                .flat_map(|b| b.buckets().values().map(|m| m.len()))
                .max()
                .unwrap_or(0),
            Self::Banded(bands) => bands
                .iter()
                .flat_map(|b| b.buckets().values().map(Vec::len))
                .max()
                .unwrap_or(0),
        }
    }
}

/// Summary of a build, logged once the index is published.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    pub strategy: String,
    pub hash_version: u32,
    pub num_items: usize,
    pub num_bands: usize,
    pub num_buckets: usize,
    pub largest_bucket: usize,
    /// Distinct tokens (token window strategy only).
    pub vocabulary: usize,
    /// Trailing signature columns not covered by any band (signature rows strategy only).
    pub unused_columns: usize,
}

/// An immutable LSH index. Safe to query from any number of threads.
#[derive(Debug, Clone)]
pub struct LshIndex {
    config: LshConfig,
    buckets: BucketIndex,
    stats: IndexStats,
}

impl LshIndex {
    pub(crate) fn new(config: LshConfig, buckets: BucketIndex, num_items: usize, vocabulary: usize, unused_columns: usize) -> Self {
        let stats = IndexStats {
            strategy: config.strategy.name().to_string(),
            hash_version: HASH_VERSION,
            num_items,
            num_bands: buckets.num_bands(),
            num_buckets: buckets.num_buckets(),
            largest_bucket: buckets.largest_bucket(),
            vocabulary,
            unused_columns,
        };
        Self { config, buckets, stats }
    }

    pub fn config(&self) -> &LshConfig {
        &self.config
    }

    pub fn stats(&self) -> &IndexStats {
        &self.stats
    }

    pub fn buckets(&self) -> &BucketIndex {
        &self.buckets
    }

    /// Token window bands, empty for a signature-rows index.
    pub fn window_bands(&self) -> &[WindowBand] {
        match &self.buckets {
            BucketIndex::Windowed(bands) => bands,
            BucketIndex::Banded(_) => &[],
        }
    }

    /// Signature row bands, empty for a token-window index.
    pub fn row_bands(&self) -> &[RowBand] {
        match &self.buckets {
            BucketIndex::Banded(bands) => bands,
            BucketIndex::Windowed(_) => &[],
        }
    }

    pub fn query(&self) -> QueryEngine<'_> {
        QueryEngine::new(&self.buckets)
    }
}

impl CandidateIndex for LshIndex {
    fn lookup_by_token(&self, word: &str) -> HashSet<ItemId> {
        self.query().lookup_by_token(word)
    }

    fn lookup_by_id(&self, id: ItemId) -> HashSet<ItemId> {
        self.query().lookup_by_id(id)
    }

    fn len(&self) -> usize {
        self.stats.num_items
    }

    fn num_bands(&self) -> usize {
        self.stats.num_bands
    }
}
