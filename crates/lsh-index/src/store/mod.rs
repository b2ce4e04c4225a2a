//! Signature stores: the inputs the band builders cut into bands.

mod matrix;
mod postings;

pub use matrix::SignatureMatrix;
pub use postings::TokenPostings;
