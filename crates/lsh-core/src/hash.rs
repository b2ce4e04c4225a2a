//! Stable hashing for token keys and band slices.
//!
//! Both functions are pure and seed-fixed, so an index built in one process
//! produces the same keys in any other.

use xxhash_rust::xxh3::xxh3_64_with_seed;

use crate::text;

/// Bumped whenever either hash function changes output.
pub const HASH_VERSION: u32 = 1;

pub const TOKEN_HASH_SEED: u64 = 0x4c53_485f_544f_4b31;

/// Odd multiplier of the band rolling hash.
pub const BAND_HASH_MULTIPLIER: u64 = 0x0000_0100_0000_01b3;

pub const BAND_HASH_INIT: u64 = 0xcbf2_9ce4_8422_2325;

/// Hash a token after normalizing it.
pub fn hash_token(token: &str) -> u64 {
    hash_normalized(&text::normalize_token(token))
}

/// Hash a token that is already normalized.
pub fn hash_normalized(token: &str) -> u64 {
    xxh3_64_with_seed(token.as_bytes(), TOKEN_HASH_SEED)
}

/// Combine a band slice with `acc = acc * K + value`, wrapping on overflow.
pub fn hash_band(values: &[u64]) -> u64 {
    values.iter().fold(BAND_HASH_INIT, |acc, &v| {
        acc.wrapping_mul(BAND_HASH_MULTIPLIER).wrapping_add(v)
    })
}
