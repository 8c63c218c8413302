//! Structural validation for premium rate tables.
//!
//! Confirms a CSV matches the expected fixed column layout before any of
//! its values are extracted. All failures are fatal for the table.

mod error;
mod structure;

pub use error::{Result, ValidationError};
pub use structure::{
    RankIndexCounts, SalaryRate, SeparatorScan, StructureReport, StructureValidator,
};
