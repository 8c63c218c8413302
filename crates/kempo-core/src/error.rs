//! Errors raised while building a premium table.

use thiserror::Error;

use kempo_ingest::IngestError;
use kempo_validate::ValidationError;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error("table structure is invalid: {0}")]
    Validation(#[from] ValidationError),

    /// The rank column never holds the first or last rank exactly.
    #[error("no row with rank cell \"{rank}\" found before the end of the table")]
    MissingRankRow { rank: String },

    #[error("record {record}: rank cell \"{value}\" has no usable rank number")]
    InvalidRank { record: usize, value: String },

    #[error("record {record}, column {column}: \"{value}\" is not a decimal number")]
    InvalidDecimal {
        record: usize,
        column: usize,
        value: String,
        #[source]
        source: rust_decimal::Error,
    },

    #[error("expected {expected} rank rows, found {found}")]
    RankCount { expected: u32, found: usize },

    #[error("record {record}: expected rank {expected}, found {found}")]
    RankSequence {
        record: usize,
        expected: u32,
        found: u32,
    },

    /// A pension field has no observed value to fill gaps from.
    #[error("no {field} value found in any row")]
    MissingPensionData { field: &'static str },

    #[error("failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to serialize YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl CoreError {
    /// Stable name of the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Ingest(_) => "IngestError",
            Self::Validation(err) => err.code(),
            Self::MissingRankRow { .. } => "RowRangeError",
            Self::InvalidRank { .. } => "InvalidRankError",
            Self::InvalidDecimal { .. } => "InvalidDecimalError",
            Self::RankCount { .. } | Self::RankSequence { .. } => "RankSequenceError",
            Self::MissingPensionData { .. } => "MissingPensionDataError",
            Self::Json(_) | Self::Yaml(_) => "SerializeError",
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
