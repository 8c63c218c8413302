//! Row extraction into [`RankEntry`] records.

use kempo_ingest::{RawTable, integer_runs, leading_integer};
use kempo_model::{RankEntry, TableLayout};

use crate::error::{CoreError, Result};
use crate::normalize::{fix_decimal, positive_decimal};
use crate::range::RowRange;

/// Splits a rank cell into insurance rank and optional pension rank.
///
/// The first digit run is the insurance rank; the next digit run, if any,
/// is the pension rank (`"4(1)"` → `(4, Some(1))`).
pub fn parse_rank(cell: &str) -> Option<(u32, Option<u32>)> {
    let (rank, pension) = integer_runs(cell)?;
    let rank = rank.parse().ok()?;
    let pension = pension.map(str::parse).transpose().ok()?;
    Some((rank, pension))
}

/// Converts in-range rows into rank entries.
pub struct RowExtractor<'a> {
    layout: &'a TableLayout,
}

impl<'a> RowExtractor<'a> {
    pub fn new(layout: &'a TableLayout) -> Self {
        Self { layout }
    }

    /// Extracts every row of `range` and checks the ranks run `1..=rank_count`
    /// in order.
    pub fn extract(&self, table: &RawTable, range: RowRange) -> Result<Vec<RankEntry>> {
        let entries = (range.start..=range.end)
            .map(|row| self.extract_row(table, row))
            .collect::<Result<Vec<_>>>()?;
        self.check_sequence(&entries, range)?;
        Ok(entries)
    }

    /// Extracts a single row. Pension fields may be left empty for
    /// [`backfill_pensions`](crate::backfill_pensions) to fill.
    pub fn extract_row(&self, table: &RawTable, row: usize) -> Result<RankEntry> {
        let layout = self.layout;
        let rank_cell = table.cell(row, layout.rank).unwrap_or_default();
        let (rank, pension_rank) = parse_rank(rank_cell).ok_or_else(|| CoreError::InvalidRank {
            record: row + 1,
            value: rank_cell.to_string(),
        })?;

        let insurance = |column: usize| -> Result<Option<String>> {
            table
                .cell(row, column)
                .map(|value| fix_decimal(value).map_err(|e| invalid_decimal(row, column, value, e)))
                .transpose()
        };
        let pension = |column: usize| -> Result<Option<String>> {
            match table.cell(row, column) {
                Some(value) => positive_decimal(value)
                    .map_err(|e| invalid_decimal(row, column, value, e)),
                None => Ok(None),
            }
        };

        Ok(RankEntry {
            rank,
            pension_rank,
            label: table.cell(row, layout.label).map(str::to_string),
            rank_min: table.cell(row, layout.rank_min).map_or(0, leading_integer),
            rank_max: table.cell(row, layout.rank_max).map_or(0, leading_integer),
            insurance_younger_total: insurance(layout.insurance_younger_total)?,
            insurance_younger_salary: insurance(layout.insurance_younger_salary)?,
            insurance_elder_total: insurance(layout.insurance_elder_total)?,
            insurance_elder_salary: insurance(layout.insurance_elder_salary)?,
            pension_total: pension(layout.pension_total)?,
            pension_salary: pension(layout.pension_salary)?,
        })
    }

    fn check_sequence(&self, entries: &[RankEntry], range: RowRange) -> Result<()> {
        let expected_count = self.layout.rank_count;
        if entries.len() != expected_count as usize {
            return Err(CoreError::RankCount {
                expected: expected_count,
                found: entries.len(),
            });
        }
        for ((expected, entry), row) in (1..=expected_count).zip(entries).zip(range.start..) {
            if entry.rank != expected {
                return Err(CoreError::RankSequence {
                    record: row + 1,
                    expected,
                    found: entry.rank,
                });
            }
        }
        Ok(())
    }
}

fn invalid_decimal(row: usize, column: usize, value: &str, source: rust_decimal::Error) -> CoreError {
    CoreError::InvalidDecimal {
        record: row + 1,
        column,
        value: value.to_string(),
        source,
    }
}
