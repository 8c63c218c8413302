//! Data model for converted premium rate tables.
//!
//! A [`PremiumTable`] is the normalized form of one area's premium rate
//! schedule. [`TableLayout`] describes where each figure lives in the
//! source CSV and the limits used while validating it.

pub mod layout;
pub mod premium;

pub use layout::{SalaryPair, TableLayout};
pub use premium::{PremiumTable, RankEntry};
