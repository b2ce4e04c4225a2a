//! One-shot index construction.

use lsh_core::{BandingStrategy, Item, LshConfig, LshError, Result};
use tracing::{debug, info, warn};

use crate::band::{build_fixed, build_windowed, num_bands};
use crate::index::{BucketIndex, LshIndex};
use crate::store::{SignatureMatrix, TokenPostings};

#[derive(Debug, Clone)]
enum BuildInput {
    Items(Vec<Item>),
    Signatures(SignatureMatrix),
}

impl BuildInput {
    fn kind(&self) -> &'static str {
        match self {
            Self::Items(_) => "items",
            Self::Signatures(_) => "signatures",
        }
    }
}

/// Collects a config and exactly one input, then builds an [`LshIndex`].
#[derive(Debug, Clone)]
pub struct LshIndexBuilder {
    config: LshConfig,
    input: Option<BuildInput>,
}

impl LshIndexBuilder {
    pub fn new(config: LshConfig) -> Self {
        Self { config, input: None }
    }

    /// Tokenized items, for the token window strategy.
    pub fn items(mut self, items: Vec<Item>) -> Self {
        self.input = Some(BuildInput::Items(items));
        self
    }

    /// A signature matrix, for the signature rows strategy.
    pub fn signatures(mut self, matrix: SignatureMatrix) -> Self {
        self.input = Some(BuildInput::Signatures(matrix));
        self
    }

    /// Build the index. Fails without publishing anything when no input was
    /// supplied, the input does not fit the strategy, or the config is invalid.
    pub fn build(self) -> Result<LshIndex> {
        self.config.validate()?;
        let input = self
            .input
            .ok_or_else(|| LshError::invalid("no items or signature matrix supplied"))?;

        let index = match (self.config.strategy, input) {
            (BandingStrategy::TokenWindow { offset }, BuildInput::Items(items)) => {
                let postings = TokenPostings::from_items(&items, self.config.parallel);
                debug!(keys = postings.len(), vocabulary = postings.vocabulary_len(), "token postings built");
                let num_items = postings.num_items();
                let vocabulary = postings.vocabulary_len();
                let bands = build_windowed(postings, offset);
                LshIndex::new(self.config, BucketIndex::Windowed(bands), num_items, vocabulary, 0)
            }
            (BandingStrategy::SignatureRows { rows_per_band }, BuildInput::Signatures(matrix)) => {
                let columns = matrix.num_hash_functions();
                let bands = num_bands(columns, rows_per_band);
                let unused_columns = columns - bands * rows_per_band;
                if bands == 0 && !matrix.is_empty() {
                    warn!(columns, rows_per_band, "rows_per_band exceeds signature length, index has no bands");
                } else if unused_columns > 0 {
                    debug!(unused_columns, "trailing signature columns left out of banding");
                }
                let row_bands = build_fixed(&matrix, rows_per_band, self.config.parallel);
                LshIndex::new(self.config, BucketIndex::Banded(row_bands), matrix.num_items(), 0, unused_columns)
            }
            (strategy, input) => {
                return Err(LshError::invalid(format!(
                    "{} strategy cannot be built from {}",
                    strategy.name(),
                    input.kind()
                )));
            }
        };

        let stats = index.stats();
        info!(
            strategy = %stats.strategy,
            items = stats.num_items,
            bands = stats.num_bands,
            buckets = stats.num_buckets,
            largest_bucket = stats.largest_bucket,
            "LSH index built"
        );
        Ok(index)
    }
}

impl LshIndex {
    pub fn builder(config: LshConfig) -> LshIndexBuilder {
        LshIndexBuilder::new(config)
    }

    /// Token window index over `items` with the given band half-width.
    pub fn from_items(items: Vec<Item>, offset: u64) -> Result<Self> {
        LshIndexBuilder::new(LshConfig::token_window(offset)).items(items).build()
    }

    /// Signature rows index over `matrix`.
    pub fn from_signatures(matrix: SignatureMatrix, rows_per_band: usize) -> Result<Self> {
        LshIndexBuilder::new(LshConfig::signature_rows(rows_per_band)).signatures(matrix).build()
    }
}
