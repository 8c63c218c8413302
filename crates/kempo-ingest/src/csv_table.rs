//! Whole-file CSV loading into an in-memory row list.
//!
//! Premium tables are small (a few dozen rows) and every validation and
//! extraction pass needs random access by row and column, so the file is
//! read once and kept as plain strings.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;

use crate::error::{IngestError, Result};

/// Rows of a CSV file, cells exactly as read apart from a leading BOM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTable {
    source: PathBuf,
    rows: Vec<Vec<String>>,
}

fn normalize_cell(raw: &str) -> String {
    raw.strip_prefix('\u{feff}').unwrap_or(raw).to_string()
}

impl RawTable {
    /// Builds a table from already-split rows (cells are normalized).
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        let rows = rows
            .into_iter()
            .map(|row| row.iter().map(|cell| normalize_cell(cell)).collect())
            .collect();
        Self {
            source: PathBuf::from("<memory>"),
            rows,
        }
    }

    /// Reads every record from `reader`.
    ///
    /// `source` is only used to label errors.
    pub fn from_reader<R: Read>(reader: R, source: impl Into<PathBuf>) -> Result<Self> {
        let source = source.into();
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);
        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| IngestError::CsvParse {
                path: source.clone(),
                source: e,
            })?;
            rows.push(record.iter().map(normalize_cell).collect());
        }
        if rows.is_empty() {
            return Err(IngestError::EmptyCsv { path: source });
        }
        tracing::trace!(path = %source.display(), rows = rows.len(), "read csv records");
        Ok(Self { source, rows })
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Widest row, in cells.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Returns a non-blank cell, or `None` when the row is too short or the
    /// cell is empty.
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Cells of one column across all rows, top to bottom.
    pub fn column(&self, column: usize) -> impl Iterator<Item = Option<&str>> + '_ {
        (0..self.rows.len()).map(move |row| self.cell(row, column))
    }
}

/// Detect encoding and validate it's supported (UTF-8 only).
///
/// Checks for UTF-16 BOM markers which are not supported.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| IngestError::open(path, e))?;

    let mut buffer = [0u8; 2];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read == 2 {
        if buffer == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    // UTF-8 BOM is acceptable (stripped from cells)
    Ok(())
}

/// Reads a premium table CSV into memory.
pub fn read_raw_table(path: &Path) -> Result<RawTable> {
    validate_encoding(path)?;
    let file = File::open(path).map_err(|e| IngestError::open(path, e))?;
    RawTable::from_reader(file, path)
}
