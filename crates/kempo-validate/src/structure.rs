//! Layout checks run before any cell is trusted as data.
//!
//! Premium tables arrive as loosely structured spreadsheets exported to CSV.
//! A shifted column still produces plausible-looking numbers, so the layout
//! is confirmed from the data itself:
//!
//! - **Range separator**: the bound columns must sit either side of the
//!   column holding the most `～` markers
//! - **Rank index**: the rank column must hold at least one short, numeric
//!   cell per rank
//! - **Salary rate**: each total must be about twice its salary share

use rust_decimal::Decimal;
use tracing::debug;

use kempo_ingest::{RawTable, leading_decimal, starts_with_nonzero_digit};
use kempo_model::{SalaryPair, TableLayout};

use crate::error::{Result, ValidationError};

/// Column holding the most range-separator markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeparatorScan {
    pub column: usize,
    pub count: usize,
}

/// Rank-column cell counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankIndexCounts {
    /// Cells starting with 1-9.
    pub positive: usize,
    /// Non-blank cells no wider than the layout's rank width.
    pub well_formed: usize,
}

/// Mean discrepancy observed for one salary pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalaryRate {
    pub pair: &'static str,
    pub samples: usize,
    pub mean: Decimal,
}

/// Evidence gathered by a successful validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructureReport {
    pub separator: SeparatorScan,
    pub rank_index: RankIndexCounts,
    pub salary_rates: Vec<SalaryRate>,
}

/// Validates a raw table against a [`TableLayout`].
pub struct StructureValidator<'a> {
    layout: &'a TableLayout,
}

impl<'a> StructureValidator<'a> {
    pub fn new(layout: &'a TableLayout) -> Self {
        Self { layout }
    }

    /// Runs every check in order, stopping at the first failure.
    pub fn validate(&self, table: &RawTable) -> Result<StructureReport> {
        let separator = self.check_range_separator(table)?;
        let rank_index = self.check_rank_index(table)?;
        let salary_rates = self
            .layout
            .salary_pairs()
            .into_iter()
            .map(|pair| self.check_salary_rate(table, pair))
            .collect::<Result<Vec<_>>>()?;
        Ok(StructureReport {
            separator,
            rank_index,
            salary_rates,
        })
    }

    /// Locates the range-separator column and checks the bound columns
    /// flank it.
    pub fn check_range_separator(&self, table: &RawTable) -> Result<SeparatorScan> {
        let mut counts: Vec<usize> = Vec::new();
        for row in table.rows() {
            for (column, cell) in row.iter().enumerate() {
                if !self.is_range_marker(cell) {
                    continue;
                }
                if counts.len() <= column {
                    counts.resize(column + 1, 0);
                }
                counts[column] += 1;
            }
        }

        // First column wins ties.
        let mut best: Option<SeparatorScan> = None;
        for (column, &count) in counts.iter().enumerate() {
            if count > best.map_or(0, |scan| scan.count) {
                best = Some(SeparatorScan { column, count });
            }
        }
        let Some(scan) = best else {
            return Err(ValidationError::RankMin {
                expected: self.layout.rank_min,
                separator: None,
            });
        };
        debug!(
            column = scan.column,
            count = scan.count,
            "range separator found"
        );

        if self.layout.rank_min + 1 != scan.column {
            return Err(ValidationError::RankMin {
                expected: self.layout.rank_min,
                separator: Some(scan.column),
            });
        }
        if self.layout.rank_max != scan.column + 1 {
            return Err(ValidationError::RankMax {
                expected: self.layout.rank_max,
                separator: scan.column,
            });
        }
        debug!("rank range columns validated");
        Ok(scan)
    }

    /// Checks the rank column has enough well-formed rank cells.
    pub fn check_rank_index(&self, table: &RawTable) -> Result<RankIndexCounts> {
        let mut counts = RankIndexCounts {
            positive: 0,
            well_formed: 0,
        };
        for cell in table.column(self.layout.rank).flatten() {
            if starts_with_nonzero_digit(cell) {
                counts.positive += 1;
            }
            if cell.chars().count() <= self.layout.max_rank_width {
                counts.well_formed += 1;
            }
        }

        let required = self.layout.rank_count as usize;
        if counts.positive < required || counts.well_formed < required {
            return Err(ValidationError::RankIndex {
                positive: counts.positive,
                well_formed: counts.well_formed,
                required,
            });
        }
        debug!(
            positive = counts.positive,
            well_formed = counts.well_formed,
            "rank index validated"
        );
        Ok(counts)
    }

    /// Checks the mean of `|total - 2 * salary| / total` over rows with a
    /// positive total stays within tolerance.
    pub fn check_salary_rate(&self, table: &RawTable, pair: SalaryPair) -> Result<SalaryRate> {
        let mut sum = Decimal::ZERO;
        let mut samples = 0usize;
        for row in 0..table.len() {
            let Some(total) = table
                .cell(row, pair.total)
                .filter(|cell| starts_with_nonzero_digit(cell))
            else {
                continue;
            };
            let salary = table.cell(row, pair.salary).unwrap_or_default();
            sum = sum.saturating_add(discrepancy(
                leading_decimal(total),
                leading_decimal(salary),
            ));
            samples += 1;
        }

        let tolerance = self.layout.salary_rate_tolerance;
        let mean = (samples > 0)
            .then(|| sum.checked_div(Decimal::from(samples)).unwrap_or(Decimal::MAX));
        match mean {
            Some(mean) if mean <= tolerance => {
                debug!(pair = pair.name, samples, mean = %mean.round_dp(4), "salary rate validated");
                Ok(SalaryRate {
                    pair: pair.name,
                    samples,
                    mean,
                })
            }
            mean => Err(ValidationError::SalaryRate {
                pair: pair.name,
                total: pair.total,
                salary: pair.salary,
                mean,
                tolerance,
            }),
        }
    }

    fn is_range_marker(&self, cell: &str) -> bool {
        cell.chars()
            .find(|&ch| ch != '(' && ch != ')')
            .is_some_and(|ch| self.layout.is_range_separator(ch))
    }
}

/// Relative gap between a total and twice its salary share.
fn discrepancy(total: Decimal, salary: Decimal) -> Decimal {
    let gap = total.saturating_sub(salary.saturating_mul(Decimal::TWO)).abs();
    gap.checked_div(total).unwrap_or(Decimal::MAX)
}
