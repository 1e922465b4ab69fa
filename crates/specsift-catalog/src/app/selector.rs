//! Selection workflow implementation
//!
//! This module provides the filtering entry points used by callers that
//! hold a loaded catalog: a rayon-parallel filter for large collections
//! and a validating variant that checks the catalog header first.

use crate::domain::catalog_format::{
    CatalogFormatError, CatalogHeader, ValidationOptions, validate_header,
};
use crate::domain::filter::filter;
use crate::domain::record::Record;
use crate::domain::spec::Spec;
use rayon::prelude::*;

/// Filter records by a specification in parallel
///
/// Rayon preserves the input order when collecting a filtered parallel
/// iterator, so results match [`filter`] exactly.
pub fn filter_parallel<'a>(records: &'a [Record], spec: &Spec) -> Vec<&'a Record> {
    records.par_iter().filter(|r| spec.is_satisfied(r)).collect()
}

/// Filter records with catalog header validation
///
/// Validates the header against [`ValidationOptions::for_filter`] before
/// touching the records.
pub fn filter_with_validation<'a>(
    header: &CatalogHeader,
    records: &'a [Record],
    spec: &Spec,
) -> Result<Vec<&'a Record>, CatalogFormatError> {
    let options = ValidationOptions::for_filter();
    validate_header(header, &options)?;
    Ok(filter(records, spec))
}
