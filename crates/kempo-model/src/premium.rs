//! Normalized premium table records.

use serde::{Deserialize, Serialize};

/// One area's premium rate schedule.
///
/// Field order is the serialization order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PremiumTable {
    /// Area name, taken from the source file stem.
    pub area: String,
    /// First day of the effective month (`YYYY-MM-01`).
    pub effective_date: Option<String>,
    /// One entry per insurance rank, in source row order.
    pub fee: Vec<RankEntry>,
}

impl PremiumTable {
    pub fn new(area: impl Into<String>) -> Self {
        Self {
            area: area.into(),
            effective_date: None,
            fee: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_effective_date(mut self, effective_date: Option<String>) -> Self {
        self.effective_date = effective_date;
        self
    }

    /// Number of rank entries.
    pub fn len(&self) -> usize {
        self.fee.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fee.is_empty()
    }

    /// Looks up an entry by insurance rank.
    pub fn rank(&self, rank: u32) -> Option<&RankEntry> {
        self.fee.iter().find(|entry| entry.rank == rank)
    }
}

/// A single income bracket and its premiums.
///
/// Monetary figures are kept as decimal strings so that the rounding applied
/// during extraction survives serialization unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankEntry {
    /// Health insurance rank, 1-based.
    pub rank: u32,
    /// Pension rank; coarser than `rank` and may differ from it.
    pub pension_rank: Option<u32>,
    /// Human-readable bracket description; `None` for a blank cell.
    pub label: Option<String>,
    /// Lower bound of the monthly remuneration bracket.
    pub rank_min: i64,
    /// Upper bound of the monthly remuneration bracket.
    pub rank_max: i64,
    pub insurance_younger_total: Option<String>,
    pub insurance_younger_salary: Option<String>,
    pub insurance_elder_total: Option<String>,
    pub insurance_elder_salary: Option<String>,
    pub pension_total: Option<String>,
    pub pension_salary: Option<String>,
}

impl RankEntry {
    /// True once every pension field has a value.
    pub fn is_complete(&self) -> bool {
        self.pension_rank.is_some() && self.pension_total.is_some() && self.pension_salary.is_some()
    }
}
