//! Bundle counting workflow
//!
//! This module combines filtering and the binomial coefficient to answer
//! "how many distinct k-item bundles can be assembled from the records
//! matching a specification".

use crate::domain::binomial::{BinomialError, binomial};
use crate::domain::filter::filter;
use crate::domain::record::Record;
use crate::domain::spec::Spec;

/// Count the distinct `bundle_size`-item bundles formable from the
/// records matching `spec`
///
/// Bundles are unordered sets of distinct matching records, so the count
/// is C(matching, bundle_size).
///
/// # Errors
///
/// Propagates the binomial contract: a bundle size larger than the match
/// count is [`BinomialError::InvalidArguments`], and a count outside the
/// u128 range is [`BinomialError::Overflow`].
pub fn count_bundles(
    records: &[Record],
    spec: &Spec,
    bundle_size: u64,
) -> Result<u128, BinomialError> {
    let matching = filter(records, spec).len() as u64;
    binomial(matching, bundle_size)
}
