//! Token normalization.
//!
//! Index build and query both go through [`normalize_token`], so a query word
//! always hashes to the same key as the indexed token it names.

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

static RE_PUNCTUATION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\p{P}").unwrap());

/// Remove Unicode punctuation.
pub fn strip_punctuation(text: &str) -> String {
    RE_PUNCTUATION.replace_all(text, "").into_owned()
}

/// Lower-case a single token and drop its punctuation and surrounding whitespace.
pub fn normalize_token(token: &str) -> String {
    strip_punctuation(token.trim()).to_lowercase()
}

/// Split text into its distinct normalized tokens.
pub fn tokenize(text: &str) -> BTreeSet<String> {
    strip_punctuation(text)
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
