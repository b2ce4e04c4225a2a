use std::collections::HashMap;
use std::ops::Range;

use lsh_core::hash::hash_band;
use lsh_core::ItemId;
use rayon::prelude::*;

use crate::store::SignatureMatrix;

/// One slice of signature columns and the buckets that collided on it.
///
/// Only buckets with two or more members are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowBand {
    columns: Range<usize>,
    buckets: HashMap<u64, Vec<ItemId>>,
    /// Item -> key of the retained bucket holding it.
    membership: HashMap<ItemId, u64>,
}

impl RowBand {
    fn build(matrix: &SignatureMatrix, columns: Range<usize>) -> Self {
        let mut grouped: HashMap<u64, Vec<ItemId>> = HashMap::new();
        for (id, row) in matrix.rows() {
            grouped.entry(hash_band(&row[columns.clone()])).or_default().push(id);
        }
        grouped.retain(|_, members| members.len() > 1);

        let membership = grouped
            .iter()
            .flat_map(|(&key, members)| members.iter().map(move |&id| (id, key)))
            .collect();

        Self { columns, buckets: grouped, membership }
    }

    /// Signature columns hashed by this band.
    pub fn columns(&self) -> Range<usize> {
        self.columns.clone()
    }

    pub fn buckets(&self) -> &HashMap<u64, Vec<ItemId>> {
        &self.buckets
    }

    pub fn num_buckets(&self) -> usize {
        self.buckets.len()
    }

    /// Members of the bucket holding `id`, if it collided with anything in this band.
    pub fn bucket_of(&self, id: ItemId) -> Option<&[ItemId]> {
        self.membership
            .get(&id)
            .and_then(|key| self.buckets.get(key))
            .map(Vec::as_slice)
    }
}

/// `num_hash_functions / rows_per_band`; trailing columns are left out. Zero rows per band
/// gives zero bands.
pub fn num_bands(num_hash_functions: usize, rows_per_band: usize) -> usize {
    num_hash_functions.checked_div(rows_per_band).unwrap_or(0)
}

/// Cut the matrix into disjoint slices of `rows_per_band` columns and bucket every item per slice.
pub fn build_fixed(matrix: &SignatureMatrix, rows_per_band: usize, parallel: bool) -> Vec<RowBand> {
    let bands = num_bands(matrix.num_hash_functions(), rows_per_band);
    let build = |band: usize| {
        let start = band * rows_per_band;
        RowBand::build(matrix, start..start + rows_per_band)
    };
    if parallel {
        (0..bands).into_par_iter().map(build).collect()
    } else {
        (0..bands).map(build).collect()
    }
}
