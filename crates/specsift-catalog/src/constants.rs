//! Catalog file format constants
//!
//! Note: the wire layout of individual records is defined in
//! infra/catalog_io.rs next to the encode/decode functions.

// =============================================================================
// Catalog file format
// =============================================================================

/// Magic bytes at the start of every catalog file
pub const CATALOG_MAGIC: [u8; 8] = *b"SIFTCAT\0";

/// Current file format version
pub const FILE_FORMAT_VERSION: u16 = 1;

/// Byte size of the fixed catalog header
pub const FILE_HEADER_SIZE: usize = 32;

/// Header flag: records are sorted by (name, color, size)
pub const FLAG_SORTED: u32 = 1;

/// Header flag: records are deduplicated by name
pub const FLAG_DEDUPED: u32 = 1 << 1;

// =============================================================================
// Record limits
// =============================================================================

/// Maximum encoded length of a record name in bytes (length prefix is u16)
pub const MAX_NAME_LEN: usize = 1024;

/// Maximum number of records a catalog file may declare
///
/// A header claiming more than this is rejected before any allocation
/// is sized from it.
pub const MAX_CATALOG_RECORDS: u32 = 1 << 24; // 16,777,216

// =============================================================================
// File naming
// =============================================================================

/// Extension for binary catalog files
pub const CATALOG_FILE_EXTENSION: &str = "cat";
