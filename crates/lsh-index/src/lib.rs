//! LSH banding-and-bucketing index.
//!
//! Builds an immutable index from either tokenized items (token-key windows) or a
//! MinHash signature matrix (fixed row bands) and answers candidate lookups by
//! token or by item id.

pub mod aggregate;
pub mod band;
pub mod builder;
pub mod index;
pub mod query;
pub mod shared;
pub mod store;

pub use aggregate::CandidateAggregator;
pub use builder::LshIndexBuilder;
pub use index::{BucketIndex, CandidateIndex, IndexStats, LshIndex};
pub use query::QueryEngine;
pub use shared::SharedIndex;
pub use store::{SignatureMatrix, TokenPostings};

pub use lsh_core::{BandingStrategy, Item, ItemId, LshConfig, LshError, Result};
