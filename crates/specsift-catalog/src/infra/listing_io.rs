//! Text listing I/O operations
//!
//! This module reads and writes human-editable catalog listings: one
//! record per line as `name,color,size`, with `#` comments and blank
//! lines ignored.

use crate::constants::MAX_NAME_LEN;
use crate::domain::record::Record;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;

/// Listing parse and I/O errors
///
/// Line numbers are 1-based positions in the source file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListingError {
    /// Line does not have the three `name,color,size` fields
    #[error("line {line}: expected 'name,color,size'")]
    MissingField { line: usize },
    /// Record name is empty
    #[error("line {line}: empty record name")]
    EmptyName { line: usize },
    /// Record name exceeds the encodable length
    #[error("line {line}: record name is {len} bytes, maximum is {max}")]
    NameTooLong { line: usize, len: usize, max: usize },
    /// Color field is not a known color
    #[error("line {line}: unknown color '{value}'")]
    UnknownColor { line: usize, value: String },
    /// Size field is not a known size
    #[error("line {line}: unknown size '{value}'")]
    UnknownSize { line: usize, value: String },
    /// Name cannot be represented in the listing format
    #[error("record name '{name}' contains a comma and cannot be written to a listing")]
    UnencodableName { name: String },
    /// I/O error
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ListingError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

fn parse_line(line: &str, line_no: usize) -> Result<Record, ListingError> {
    let fields: Vec<&str> = line.split(',').collect();
    let [name, color, size] = fields.as_slice() else {
        return Err(ListingError::MissingField { line: line_no });
    };

    let name = name.trim();
    let color = color.trim();
    let size = size.trim();

    if name.is_empty() {
        return Err(ListingError::EmptyName { line: line_no });
    }
    if name.len() > MAX_NAME_LEN {
        return Err(ListingError::NameTooLong {
            line: line_no,
            len: name.len(),
            max: MAX_NAME_LEN,
        });
    }

    let color = color.parse().map_err(|_| ListingError::UnknownColor {
        line: line_no,
        value: color.to_string(),
    })?;
    let size = size.parse().map_err(|_| ListingError::UnknownSize {
        line: line_no,
        value: size.to_string(),
    })?;

    Ok(Record::new(name, color, size))
}

/// Load records from a text listing
///
/// Record order follows the file. Blank lines and lines starting with
/// `#` are skipped.
pub fn load_listing(path: impl AsRef<Path>) -> Result<Vec<Record>, ListingError> {
    let content = fs::read_to_string(path)?;
    let mut records = Vec::new();

    for (i, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        records.push(parse_line(trimmed, i + 1)?);
    }

    Ok(records)
}

/// Save records as a text listing
///
/// Names containing commas cannot be represented in this format and are
/// rejected; the binary catalog format has no such restriction.
pub fn save_listing(path: impl AsRef<Path>, records: &[Record]) -> Result<(), ListingError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    for record in records {
        if record.name.contains(',') {
            return Err(ListingError::UnencodableName {
                name: record.name.clone(),
            });
        }
        writeln!(writer, "{},{},{}", record.name, record.color, record.size)?;
    }

    writer.flush()?;
    Ok(())
}
