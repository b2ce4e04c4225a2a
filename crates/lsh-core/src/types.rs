use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::text;

/// Opaque item identifier. Row `i` of a signature matrix is item `i`.
pub type ItemId = u64;

/// An indexed item: its id and its normalized token set, fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    tokens: BTreeSet<String>,
}

impl Item {
    /// Tokenize raw text (punctuation stripped, lower-cased, whitespace split).
    pub fn from_text(id: ItemId, text: &str) -> Self {
        Self { id, tokens: text::tokenize(text) }
    }

    /// Use tokens supplied by an external tokenizer. Each token is normalized;
    /// tokens that normalize to nothing are dropped.
    pub fn from_tokens<I, S>(id: ItemId, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokens = tokens
            .into_iter()
            .map(|t| text::normalize_token(t.as_ref()))
            .filter(|t| !t.is_empty())
            .collect();
        Self { id, tokens }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn tokens(&self) -> &BTreeSet<String> {
        &self.tokens
    }

    /// Whether the item holds `token` after normalization.
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(&text::normalize_token(token))
    }
}
