//! Binomial coefficient computation
//!
//! This module computes C(n, k) with a single-row dynamic program over
//! Pascal's triangle, with explicit precondition and overflow errors.

use thiserror::Error;

/// Binomial computation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BinomialError {
    /// k exceeds n; C(n, k) is not defined here
    #[error("invalid arguments: k must not exceed n in C({n}, {k})")]
    InvalidArguments { n: u64, k: u64 },
    /// The coefficient does not fit in u128
    #[error("overflow: C({n}, {k}) exceeds the u128 range")]
    Overflow { n: u64, k: u64 },
}

/// Compute the binomial coefficient C(n, k)
///
/// Counts the k-element subsets of an n-element set. Maintains one row of
/// Pascal's triangle of length min(k, n - k) + 1, updating slots from the
/// row end down to 1 on each of the n passes. The descending order is
/// required: an ascending pass would fold already-updated slots back into
/// the same row and break the recurrence.
///
/// Accumulation is in u128 with checked addition; a coefficient outside
/// the u128 range fails with [`BinomialError::Overflow`] instead of
/// wrapping.
///
/// # Errors
///
/// Returns [`BinomialError::InvalidArguments`] if k > n.
pub fn binomial(n: u64, k: u64) -> Result<u128, BinomialError> {
    if k > n {
        return Err(BinomialError::InvalidArguments { n, k });
    }

    // C(n, k) == C(n, n - k); the shorter row keeps every intermediate
    // value bounded by the result, so Overflow fires only when the
    // coefficient itself is out of range.
    let width = k.min(n - k);

    let mut row = vec![0u128; width as usize + 1];
    row[0] = 1;

    for i in 1..=n {
        let upper = i.min(width) as usize;
        for j in (1..=upper).rev() {
            row[j] = row[j]
                .checked_add(row[j - 1])
                .ok_or(BinomialError::Overflow { n, k })?;
        }
    }

    Ok(row[width as usize])
}
