//! Shared building blocks for the LSH banding engine.
//!
//! - `hash`: stable token and band-slice hashing
//! - `text`: token normalization shared by index build and query
//! - `types`: item identifiers and tokenized items
//! - `config`: banding strategy selection
//! - `error`: crate-wide error type

pub mod config;
pub mod error;
pub mod hash;
pub mod text;
pub mod types;

pub use config::{BandingStrategy, LshConfig};
pub use error::{LshError, Result};
pub use types::{Item, ItemId};
