//! Catalog file I/O operations
//!
//! This module provides functions for reading and writing binary catalog
//! files: a fixed 32-byte header followed by a stream of length-prefixed
//! records.
//!
//! Record wire layout (little-endian): u16 name length, UTF-8 name bytes,
//! u8 color tag, u8 size tag.

use crate::constants::{CATALOG_FILE_EXTENSION, FILE_HEADER_SIZE, MAX_NAME_LEN};
use crate::domain::catalog_format::{
    CatalogFormatError, CatalogHeader, ValidationOptions, validate_header,
};
use crate::domain::record::{Color, Record, Size};
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::fs::{self, File};
use std::io::{BufWriter, Read, Write};
use std::path::Path;

#[cfg(feature = "mmap")]
use memmap2::Mmap;

fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    Ok(())
}

/// Get the expected file path for a catalog stem (unsorted)
pub fn get_catalog_path(stem: &str) -> String {
    format!("{}.{}", stem, CATALOG_FILE_EXTENSION)
}

/// Get the expected file path for a sorted catalog stem
pub fn get_sorted_catalog_path(stem: &str) -> String {
    format!("{}.sorted.{}", stem, CATALOG_FILE_EXTENSION)
}

fn write_record<W: Write>(writer: &mut W, record: &Record) -> Result<(), CatalogFormatError> {
    let name = record.name.as_bytes();
    if name.len() > MAX_NAME_LEN {
        return Err(CatalogFormatError::NameTooLong {
            len: name.len(),
            max: MAX_NAME_LEN,
        });
    }

    writer.write_u16::<LittleEndian>(name.len() as u16)?;
    writer.write_all(name)?;
    writer.write_u8(record.color.tag())?;
    writer.write_u8(record.size.tag())?;
    Ok(())
}

fn read_record<R: Read>(reader: &mut R) -> Result<Record, CatalogFormatError> {
    let name_len = reader.read_u16::<LittleEndian>()? as usize;
    if name_len > MAX_NAME_LEN {
        return Err(CatalogFormatError::NameTooLong {
            len: name_len,
            max: MAX_NAME_LEN,
        });
    }

    let mut name_buf = vec![0u8; name_len];
    reader.read_exact(&mut name_buf)?;
    let name =
        String::from_utf8(name_buf).map_err(|_| CatalogFormatError::InvalidNameEncoding)?;

    let color_tag = reader.read_u8()?;
    let color =
        Color::from_tag(color_tag).ok_or(CatalogFormatError::InvalidColorTag(color_tag))?;
    let size_tag = reader.read_u8()?;
    let size = Size::from_tag(size_tag).ok_or(CatalogFormatError::InvalidSizeTag(size_tag))?;

    Ok(Record { name, color, size })
}

/// Save a catalog to file
///
/// Writes a header built from `records.len()` and `flags`, followed by
/// the record stream.
pub fn save_catalog(
    path: impl AsRef<Path>,
    records: &[Record],
    flags: u32,
) -> Result<(), CatalogFormatError> {
    ensure_parent_dir(path.as_ref())?;
    let header = CatalogHeader::new(records.len() as u32, flags);

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writer.write_all(&header.to_bytes())?;

    for record in records {
        write_record(&mut writer, record)?;
    }

    writer.flush()?;
    Ok(())
}

/// Load a catalog from file with validation
///
/// Decodes exactly the number of records the header declares and rejects
/// files with bytes left over after the last record.
pub fn load_catalog(
    path: impl AsRef<Path>,
    options: &ValidationOptions,
) -> Result<(CatalogHeader, Vec<Record>), CatalogFormatError> {
    let buf = fs::read(path)?;
    if buf.len() < FILE_HEADER_SIZE {
        return Err(CatalogFormatError::TruncatedHeader {
            found: buf.len() as u64,
        });
    }

    let mut header_buf = [0u8; FILE_HEADER_SIZE];
    header_buf.copy_from_slice(&buf[..FILE_HEADER_SIZE]);
    let header = CatalogHeader::from_bytes(&header_buf)?;
    validate_header(&header, options)?;

    let mut body = &buf[FILE_HEADER_SIZE..];

    // A record is at least 4 bytes, so the body bounds how many the
    // declared count can really hold.
    let capacity = (header.record_count as usize).min(body.len() / 4 + 1);
    let mut records = Vec::with_capacity(capacity);

    for index in 0..header.record_count {
        // The body is an in-memory slice, so a read failure here can only
        // mean the stream ended early.
        let record = read_record(&mut body).map_err(|e| match e {
            CatalogFormatError::Io(_) => CatalogFormatError::TruncatedRecord { index },
            other => other,
        })?;
        records.push(record);
    }

    if !body.is_empty() {
        return Err(CatalogFormatError::TrailingData);
    }

    Ok((header, records))
}

// =============================================================================
// Memory-mapped catalog (mmap feature)
// =============================================================================

/// Memory-mapped catalog
///
/// Provides read-only access to catalog files without loading the record
/// stream into owned memory. Records are variable-length, so a position
/// index over the mapping is built by a single validating scan at open
/// time; `get` then decodes one record on demand.
#[cfg(feature = "mmap")]
pub struct MappedCatalog {
    mmap: Mmap,
    header: CatalogHeader,
    offsets: Vec<usize>,
}

#[cfg(feature = "mmap")]
impl MappedCatalog {
    /// Open a catalog file as memory-mapped, with validation
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or mapped, if the
    /// header fails validation, or if the record stream is malformed.
    pub fn open(
        path: impl AsRef<Path>,
        options: &ValidationOptions,
    ) -> Result<Self, CatalogFormatError> {
        let file = File::open(path)?;
        let mmap = unsafe { Mmap::map(&file)? };

        if mmap.len() < FILE_HEADER_SIZE {
            return Err(CatalogFormatError::TruncatedHeader {
                found: mmap.len() as u64,
            });
        }

        let mut header_buf = [0u8; FILE_HEADER_SIZE];
        header_buf.copy_from_slice(&mmap[..FILE_HEADER_SIZE]);
        let header = CatalogHeader::from_bytes(&header_buf)?;
        validate_header(&header, options)?;

        let body_len = mmap.len() - FILE_HEADER_SIZE;
        let capacity = (header.record_count as usize).min(body_len / 4 + 1);
        let mut offsets = Vec::with_capacity(capacity);
        let mut pos = FILE_HEADER_SIZE;

        for index in 0..header.record_count {
            if pos + 2 > mmap.len() {
                return Err(CatalogFormatError::TruncatedRecord { index });
            }
            let name_len = u16::from_le_bytes([mmap[pos], mmap[pos + 1]]) as usize;
            if name_len > MAX_NAME_LEN {
                return Err(CatalogFormatError::NameTooLong {
                    len: name_len,
                    max: MAX_NAME_LEN,
                });
            }

            let entry_size = 2 + name_len + 2;
            if pos + entry_size > mmap.len() {
                return Err(CatalogFormatError::TruncatedRecord { index });
            }

            offsets.push(pos);
            pos += entry_size;
        }

        if pos != mmap.len() {
            return Err(CatalogFormatError::TrailingData);
        }

        Ok(Self {
            mmap,
            header,
            offsets,
        })
    }

    /// Get the catalog header
    pub fn header(&self) -> &CatalogHeader {
        &self.header
    }

    /// Get the number of records
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Decode a record by position
    ///
    /// Returns `None` if the position is out of bounds. Decoding cannot
    /// fail for in-bounds positions; the stream was validated at open.
    pub fn get(&self, index: usize) -> Option<Record> {
        let offset = *self.offsets.get(index)?;
        read_record(&mut &self.mmap[offset..]).ok()
    }

    /// Return an iterator over decoded records
    pub fn iter(&self) -> impl Iterator<Item = Record> + '_ {
        (0..self.len()).filter_map(move |i| self.get(i))
    }
}
