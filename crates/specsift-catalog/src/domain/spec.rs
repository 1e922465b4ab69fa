//! Composable record specifications
//!
//! A specification answers true/false for a given record. The variant set
//! is closed: equality on one color, equality on one size, and the AND
//! combinator over two sub-specifications.

use crate::domain::record::{Color, Record, Size};
use std::fmt;

/// A composable specification over records
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Spec {
    /// Matches records with exactly this color
    ColorIs(Color),
    /// Matches records with exactly this size
    SizeIs(Size),
    /// Matches records satisfying both sub-specifications
    And(Box<Spec>, Box<Spec>),
}

impl Spec {
    /// Evaluate this specification against a record
    ///
    /// `And` short-circuits on the first false branch.
    pub fn is_satisfied(&self, record: &Record) -> bool {
        match self {
            Self::ColorIs(color) => record.color == *color,
            Self::SizeIs(size) => record.size == *size,
            Self::And(left, right) => left.is_satisfied(record) && right.is_satisfied(record),
        }
    }

    /// Combine two specifications into their conjunction
    pub fn and(self, other: Self) -> Self {
        Self::And(Box::new(self), Box::new(other))
    }
}

impl fmt::Display for Spec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColorIs(color) => write!(f, "color={}", color),
            Self::SizeIs(size) => write!(f, "size={}", size),
            Self::And(left, right) => write!(f, "{} AND {}", left, right),
        }
    }
}

/// Fold a sequence of specifications into a single conjunction
///
/// Returns `None` for an empty sequence; there is no match-all variant.
pub fn conjoin(specs: impl IntoIterator<Item = Spec>) -> Option<Spec> {
    specs.into_iter().reduce(Spec::and)
}
