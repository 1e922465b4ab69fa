//! Record filtering
//!
//! This module provides the core filter over record collections, plus an
//! optional position index for faster leaf-spec lookups on large catalogs.

use crate::domain::record::Record;
use crate::domain::spec::Spec;

#[cfg(feature = "indexed-search")]
use crate::domain::record::{Color, Size};
#[cfg(feature = "indexed-search")]
use rustc_hash::FxHashMap;

/// Filter records by a specification
///
/// Returns the subsequence of `records` satisfying `spec`, preserving
/// input order. The input is not mutated; an empty input yields an
/// empty output.
pub fn filter<'a>(records: &'a [Record], spec: &Spec) -> Vec<&'a Record> {
    records.iter().filter(|r| spec.is_satisfied(r)).collect()
}

/// Filter records by a specification, returning positions
///
/// Positions are ascending, matching the order guarantee of [`filter`].
pub fn filter_indices(records: &[Record], spec: &Spec) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| spec.is_satisfied(r))
        .map(|(i, _)| i)
        .collect()
}

// =============================================================================
// Position index (indexed-search feature)
// =============================================================================

/// Position index over a record collection
///
/// Maps each color and size tag to the ascending list of positions carrying
/// it. Leaf specs become a single map lookup; conjunctions become sorted
/// intersections, so results stay in input order.
///
/// The index is only valid for the collection it was built from.
#[cfg(feature = "indexed-search")]
#[derive(Clone, Debug, Default)]
pub struct CatalogIndex {
    by_color: FxHashMap<Color, Vec<u32>>,
    by_size: FxHashMap<Size, Vec<u32>>,
}

#[cfg(feature = "indexed-search")]
impl CatalogIndex {
    /// Build an index over a record collection in a single pass
    pub fn build(records: &[Record]) -> Self {
        let mut by_color: FxHashMap<Color, Vec<u32>> = FxHashMap::default();
        let mut by_size: FxHashMap<Size, Vec<u32>> = FxHashMap::default();

        for (i, record) in records.iter().enumerate() {
            by_color.entry(record.color).or_default().push(i as u32);
            by_size.entry(record.size).or_default().push(i as u32);
        }

        Self { by_color, by_size }
    }

    /// Resolve a specification to the ascending positions satisfying it
    pub fn lookup(&self, spec: &Spec) -> Vec<u32> {
        match spec {
            Spec::ColorIs(color) => self.by_color.get(color).cloned().unwrap_or_default(),
            Spec::SizeIs(size) => self.by_size.get(size).cloned().unwrap_or_default(),
            Spec::And(left, right) => intersect_sorted(&self.lookup(left), &self.lookup(right)),
        }
    }
}

/// Intersect two ascending position lists
#[cfg(feature = "indexed-search")]
fn intersect_sorted(left: &[u32], right: &[u32]) -> Vec<u32> {
    let mut out = Vec::with_capacity(left.len().min(right.len()));
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        match left[i].cmp(&right[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                out.push(left[i]);
                i += 1;
                j += 1;
            }
        }
    }

    out
}

/// Filter records through a pre-built index
///
/// Must agree exactly with [`filter`] over the collection the index was
/// built from.
#[cfg(feature = "indexed-search")]
pub fn filter_with_index<'a>(
    records: &'a [Record],
    index: &CatalogIndex,
    spec: &Spec,
) -> Vec<&'a Record> {
    index
        .lookup(spec)
        .into_iter()
        .map(|i| &records[i as usize])
        .collect()
}
