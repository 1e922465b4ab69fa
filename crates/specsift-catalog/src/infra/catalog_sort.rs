//! Catalog sort operations
//!
//! This module provides functions for sorting and deduplicating catalog
//! records prior to saving.

use crate::domain::record::Record;
use rayon::prelude::*;

/// Sort catalog records using a parallel sort
///
/// Orders by (name, color tag, size tag), giving a deterministic total
/// order even among records sharing a name.
pub fn sort_catalog_parallel(records: &mut [Record]) {
    if records.is_empty() {
        return;
    }

    records.par_sort_unstable_by(|a, b| a.sort_key().cmp(&b.sort_key()));
}

/// Deduplicate a sorted catalog by name
///
/// Keeps only the first record among those sharing a name. Records must
/// already be sorted by name.
pub fn deduplicate_catalog(records: &mut Vec<Record>) {
    records.dedup_by(|a, b| a.name == b.name);
}
