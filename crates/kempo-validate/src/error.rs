//! Structural validation errors.

use rust_decimal::Decimal;
use thiserror::Error;

/// Reasons a CSV does not match the expected premium table layout.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// The lower-bound column is not immediately left of the range separator.
    #[error("rank_min column {expected} is not left of the range separator ({})", describe_separator(.separator))]
    RankMin {
        expected: usize,
        separator: Option<usize>,
    },

    /// The upper-bound column is not immediately right of the range separator.
    #[error("rank_max column {expected} is not right of the range separator (found at column {separator})")]
    RankMax { expected: usize, separator: usize },

    /// Too few well-formed rank cells.
    #[error(
        "rank column holds {positive} numeric and {well_formed} short cells, {required} of each required"
    )]
    RankIndex {
        positive: usize,
        well_formed: usize,
        required: usize,
    },

    /// Totals are not twice the salary share, usually a column misalignment.
    #[error("salary rate check failed for {pair} (columns {total}/{salary}): {}", describe_mean(.mean, .tolerance))]
    SalaryRate {
        pair: &'static str,
        total: usize,
        salary: usize,
        mean: Option<Decimal>,
        tolerance: Decimal,
    },
}

fn describe_separator(separator: &Option<usize>) -> String {
    match separator {
        Some(column) => format!("found at column {column}"),
        None => "no separator found".to_string(),
    }
}

fn describe_mean(mean: &Option<Decimal>, tolerance: &Decimal) -> String {
    match mean {
        Some(mean) => format!("mean discrepancy {} exceeds {tolerance}", mean.round_dp(4)),
        None => "no positive totals to compare".to_string(),
    }
}

impl ValidationError {
    /// Stable name of the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            Self::RankMin { .. } => "RankMinError",
            Self::RankMax { .. } => "RankMaxError",
            Self::RankIndex { .. } => "RankIndexError",
            Self::SalaryRate { .. } => "SalaryRateError",
        }
    }
}

/// Result type for validation.
pub type Result<T> = std::result::Result<T, ValidationError>;
