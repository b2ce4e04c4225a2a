use lsh_core::{ItemId, LshError, Result};

/// Caller-supplied MinHash signatures, one row per item, one column per hash function.
///
/// Row `i` belongs to item `i`. Values are taken as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignatureMatrix {
    rows: Vec<Vec<u64>>,
    num_hash_functions: usize,
}

impl SignatureMatrix {
    /// Accept rows of equal length. A ragged matrix is rejected.
    pub fn from_rows(rows: Vec<Vec<u64>>) -> Result<Self> {
        let num_hash_functions = rows.first().map_or(0, Vec::len);
        if let Some((row, bad)) = rows.iter().enumerate().find(|(_, r)| r.len() != num_hash_functions) {
            return Err(LshError::invalid(format!(
                "signature row {row} has {} values, expected {num_hash_functions}",
                bad.len()
            )));
        }
        Ok(Self { rows, num_hash_functions })
    }

    /// Build from row-major values.
    pub fn from_flat(values: &[u64], num_hash_functions: usize) -> Result<Self> {
        if num_hash_functions == 0 {
            if values.is_empty() {
                return Ok(Self::default());
            }
            return Err(LshError::invalid("num_hash_functions must be positive for a non-empty matrix"));
        }
        if values.len() % num_hash_functions != 0 {
            return Err(LshError::invalid(format!(
                "{} values do not divide into rows of {num_hash_functions}",
                values.len()
            )));
        }
        let rows = values.chunks(num_hash_functions).map(<[u64]>::to_vec).collect();
        Ok(Self { rows, num_hash_functions })
    }

    pub fn num_items(&self) -> usize {
        self.rows.len()
    }

    pub fn num_hash_functions(&self) -> usize {
        self.num_hash_functions
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, item: ItemId) -> Option<&[u64]> {
        usize::try_from(item).ok().and_then(|i| self.rows.get(i)).map(Vec::as_slice)
    }

    /// `(item, row)` pairs in row order.
    pub fn rows(&self) -> impl Iterator<Item = (ItemId, &[u64])> + '_ {
        self.rows.iter().enumerate().map(|(i, r)| (i as ItemId, r.as_slice()))
    }
}
