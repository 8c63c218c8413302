//! Premium table ingestion utilities.
//!
//! This crate loads premium rate CSV files into memory and provides the
//! lenient cell coercions shared by validation and extraction.
//!
//! # Features
//!
//! - **CSV Loading**: Read a whole table into a [`RawTable`] (UTF-8 only)
//! - **File Discovery**: Find the CSV tables in a directory
//! - **Cell Coercion**: Leading-integer/decimal parsing and rank-cell splitting
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use kempo_ingest::{list_csv_files, read_raw_table};
//!
//! for path in list_csv_files(Path::new("tables"))? {
//!     let table = read_raw_table(&path)?;
//!     println!("{}: {} rows", path.display(), table.len());
//! }
//! ```

mod csv_table;
mod discovery;
mod error;
mod numeric;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv_table::{RawTable, read_raw_table, validate_encoding};

// === File Discovery ===
pub use discovery::{area_name, list_csv_files};

// === Cell Coercion ===
pub use numeric::{integer_runs, leading_decimal, leading_integer, starts_with_nonzero_digit};
