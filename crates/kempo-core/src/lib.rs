//! Premium rate table parser.
//!
//! Turns one prefecture's health insurance and pension premium CSV into a
//! [`PremiumTable`]:
//!
//! 1. Structure validation ([`kempo_validate::StructureValidator`])
//! 2. Data-row location ([`locate_rows`])
//! 3. Row extraction ([`RowExtractor`])
//! 4. Pension backfill ([`backfill_pensions`])
//! 5. JSON / YAML serialization ([`OutputFormat`])
//!
//! [`KempoTable`] runs the whole pipeline.
//!
//! # Example
//!
//! ```ignore
//! use kempo_core::KempoTable;
//!
//! let table = KempoTable::new("tables/tokyo.csv", Some("2024.4"))?;
//! std::fs::write("tokyo-2024-04-01.json", table.to_json()?)?;
//! ```

mod backfill;
mod date;
mod error;
mod extract;
mod normalize;
mod output;
mod range;
mod table;

pub use backfill::backfill_pensions;
pub use date::parse_effective_date;
pub use error::{CoreError, Result};
pub use extract::{RowExtractor, parse_rank};
pub use normalize::{fix_decimal, positive_decimal};
pub use output::{OutputFormat, from_json, from_yaml, to_json, to_json_pretty, to_yaml};
pub use range::{RowRange, locate_rows};
pub use table::KempoTable;

pub use kempo_model::{PremiumTable, RankEntry, TableLayout};
pub use kempo_validate::StructureReport;
