use serde::{Deserialize, Serialize};

use crate::error::{LshError, Result};

/// Half-width of a token window band. A band opened at key `k` covers `[k, k + 2 * offset]`.
pub const DEFAULT_HASH_OFFSET: u64 = 1 << 40;

/// Consecutive signature columns hashed together per band.
pub const DEFAULT_ROWS_PER_BAND: usize = 4;

/// How the signature space is cut into bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BandingStrategy {
    /// Greedy windows over the ordered token-hash keys.
    TokenWindow { offset: u64 },
    /// Fixed slices of `rows_per_band` MinHash columns.
    SignatureRows { rows_per_band: usize },
}

impl BandingStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            Self::TokenWindow { .. } => "token_window",
            Self::SignatureRows { .. } => "signature_rows",
        }
    }
}

impl Default for BandingStrategy {
    fn default() -> Self {
        Self::TokenWindow { offset: DEFAULT_HASH_OFFSET }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LshConfig {
    pub strategy: BandingStrategy,
    /// Run per-token hashing and per-band bucketing on the rayon pool.
    pub parallel: bool,
}

impl Default for LshConfig {
    fn default() -> Self {
        Self {
            strategy: BandingStrategy::default(),
            parallel: true,
        }
    }
}

impl LshConfig {
    pub fn token_window(offset: u64) -> Self {
        Self {
            strategy: BandingStrategy::TokenWindow { offset },
            ..Self::default()
        }
    }

    pub fn signature_rows(rows_per_band: usize) -> Self {
        Self {
            strategy: BandingStrategy::SignatureRows { rows_per_band },
            ..Self::default()
        }
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Parse and validate a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        match self.strategy {
            BandingStrategy::SignatureRows { rows_per_band: 0 } => {
                Err(LshError::invalid("rows_per_band must be at least 1"))
            }
            _ => Ok(()),
        }
    }
}
