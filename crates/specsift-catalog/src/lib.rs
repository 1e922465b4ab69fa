//! specsift-catalog - Specification filtering for tagged product catalogs
//!
//! This crate provides functionality to:
//! - Filter catalogs of tagged records by composable specifications
//! - Count the distinct k-item bundles formable from a selection
//! - Read and write catalog files in binary and text listing formats

pub mod constants;
pub mod domain;
pub mod infra;
pub mod app;

// Re-export commonly used types
pub use constants::*;
pub use domain::binomial::{BinomialError, binomial};
pub use domain::catalog_format::{CatalogFormatError, CatalogHeader, ValidationOptions};
pub use domain::filter::filter;
pub use domain::record::{Color, Record, Size};
pub use domain::spec::Spec;

#[cfg(feature = "mmap")]
pub use infra::catalog_io::MappedCatalog;
