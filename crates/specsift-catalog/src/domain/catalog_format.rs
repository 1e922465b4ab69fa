//! Catalog file format definitions
//!
//! This module defines the binary catalog format header, validation
//! options, and the format error set.

use crate::constants::{
    CATALOG_MAGIC, FILE_FORMAT_VERSION, FILE_HEADER_SIZE, FLAG_DEDUPED, FLAG_SORTED,
    MAX_CATALOG_RECORDS,
};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// Catalog file header metadata
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CatalogHeader {
    /// File format version
    pub version: u16,
    /// Number of records in the file
    pub record_count: u32,
    /// Flags (sorted, deduped)
    pub flags: u32,
    /// Creation timestamp (Unix epoch seconds)
    pub created_at: u64,
}

impl CatalogHeader {
    /// Create a new header for a catalog of `record_count` records
    pub fn new(record_count: u32, flags: u32) -> Self {
        let created_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);

        Self {
            version: FILE_FORMAT_VERSION,
            record_count,
            flags,
            created_at,
        }
    }

    /// Check if the catalog is sorted by (name, color, size)
    pub fn is_sorted(&self) -> bool {
        self.flags & FLAG_SORTED != 0
    }

    /// Check if the catalog is deduplicated by name
    pub fn is_deduped(&self) -> bool {
        self.flags & FLAG_DEDUPED != 0
    }

    /// Set the sorted flag
    pub fn set_sorted(&mut self, sorted: bool) {
        if sorted {
            self.flags |= FLAG_SORTED;
        } else {
            self.flags &= !FLAG_SORTED;
        }
    }

    /// Serialize header to bytes (32 bytes)
    pub fn to_bytes(&self) -> [u8; FILE_HEADER_SIZE] {
        let mut buf = [0u8; FILE_HEADER_SIZE];

        buf[0..8].copy_from_slice(&CATALOG_MAGIC);
        buf[8..10].copy_from_slice(&self.version.to_le_bytes());
        // 10..12 reserved
        buf[12..16].copy_from_slice(&self.record_count.to_le_bytes());
        buf[16..20].copy_from_slice(&self.flags.to_le_bytes());
        buf[20..28].copy_from_slice(&self.created_at.to_le_bytes());
        // 28..32 reserved

        buf
    }

    /// Deserialize header from bytes
    pub fn from_bytes(buf: &[u8; FILE_HEADER_SIZE]) -> Result<Self, CatalogFormatError> {
        if buf[0..8] != CATALOG_MAGIC {
            return Err(CatalogFormatError::InvalidMagic);
        }

        let version = u16::from_le_bytes([buf[8], buf[9]]);
        if version != FILE_FORMAT_VERSION {
            return Err(CatalogFormatError::UnsupportedVersion(version));
        }

        Ok(Self {
            version,
            record_count: u32::from_le_bytes([buf[12], buf[13], buf[14], buf[15]]),
            flags: u32::from_le_bytes([buf[16], buf[17], buf[18], buf[19]]),
            created_at: u64::from_le_bytes([
                buf[20], buf[21], buf[22], buf[23], buf[24], buf[25], buf[26], buf[27],
            ]),
        })
    }
}

/// Validation options for catalog loading
#[derive(Clone, Debug, Default)]
pub struct ValidationOptions {
    /// Maximum accepted record count (None = skip validation)
    pub max_records: Option<u32>,
    /// Require a sorted catalog
    pub require_sorted: bool,
}

impl ValidationOptions {
    /// Create options for filtering (bounds the record count)
    pub fn for_filter() -> Self {
        Self {
            max_records: Some(MAX_CATALOG_RECORDS),
            require_sorted: false,
        }
    }

    /// Create options for catalog building (no validation)
    pub fn for_build() -> Self {
        Self::default()
    }
}

/// Catalog format errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogFormatError {
    /// Invalid magic number (not a valid catalog file)
    #[error("invalid file format: not a valid catalog file")]
    InvalidMagic,
    /// Unsupported format version
    #[error("unsupported format version: {0}")]
    UnsupportedVersion(u16),
    /// Header declares more records than allowed
    #[error("record count {count} exceeds the maximum of {max}")]
    RecordCountExceeded { count: u32, max: u32 },
    /// Catalog is not sorted (required by the caller)
    #[error("catalog is not sorted")]
    CatalogNotSorted,
    /// Record name exceeds the encodable length
    #[error("record name is {len} bytes, maximum is {max}")]
    NameTooLong { len: usize, max: usize },
    /// Record name is not valid UTF-8
    #[error("record name is not valid UTF-8")]
    InvalidNameEncoding,
    /// Unknown color tag byte
    #[error("invalid color tag: {0}")]
    InvalidColorTag(u8),
    /// Unknown size tag byte
    #[error("invalid size tag: {0}")]
    InvalidSizeTag(u8),
    /// File is smaller than the fixed header
    #[error("file too small for a catalog header: {found} bytes")]
    TruncatedHeader { found: u64 },
    /// Record stream ends before the declared count
    #[error("catalog truncated at record {index}")]
    TruncatedRecord { index: u32 },
    /// Bytes remain after the declared record count
    #[error("unexpected trailing data after the last record")]
    TrailingData,
    /// I/O error
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for CatalogFormatError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

/// Validate header against options
pub fn validate_header(
    header: &CatalogHeader,
    options: &ValidationOptions,
) -> Result<(), CatalogFormatError> {
    if let Some(max) = options.max_records
        && header.record_count > max
    {
        return Err(CatalogFormatError::RecordCountExceeded {
            count: header.record_count,
            max,
        });
    }

    if options.require_sorted && !header.is_sorted() {
        return Err(CatalogFormatError::CatalogNotSorted);
    }

    Ok(())
}
