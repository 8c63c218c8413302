//! Building a [`PremiumTable`] from a source CSV.

use std::path::Path;

use tracing::{debug_span, info, warn};

use kempo_ingest::{RawTable, area_name, read_raw_table};
use kempo_model::{PremiumTable, TableLayout};
use kempo_validate::{StructureReport, StructureValidator};

use crate::backfill::backfill_pensions;
use crate::date::parse_effective_date;
use crate::error::Result;
use crate::extract::RowExtractor;
use crate::output;
use crate::range::{RowRange, locate_rows};

/// A validated, fully populated premium table.
///
/// Construction runs structure validation, data-row location, row
/// extraction and pension backfill, in that order; any failure aborts the
/// whole table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KempoTable {
    table: PremiumTable,
    report: StructureReport,
    rows: RowRange,
}

impl KempoTable {
    /// Reads and converts the CSV at `path` using the default layout.
    pub fn new(path: impl AsRef<Path>, effective_date: Option<&str>) -> Result<Self> {
        Self::with_layout(path, effective_date, &TableLayout::default())
    }

    pub fn with_layout(
        path: impl AsRef<Path>,
        effective_date: Option<&str>,
        layout: &TableLayout,
    ) -> Result<Self> {
        let path = path.as_ref();
        let raw = read_raw_table(path)?;
        Self::from_raw(area_name(path), effective_date, &raw, layout)
    }

    /// Converts rows that are already in memory.
    pub fn from_raw(
        area: impl Into<String>,
        effective_date: Option<&str>,
        raw: &RawTable,
        layout: &TableLayout,
    ) -> Result<Self> {
        let area = area.into();
        let span = debug_span!("table", area = %area);
        let _guard = span.enter();

        let report = StructureValidator::new(layout).validate(raw)?;
        let rows = locate_rows(raw, layout)?;
        let mut fee = RowExtractor::new(layout).extract(raw, rows)?;
        backfill_pensions(&mut fee)?;

        let parsed_date = effective_date.and_then(parse_effective_date);
        if let (Some(input), None) = (effective_date, &parsed_date) {
            warn!(input, "effective date not recognized, omitting it");
        }

        info!(
            area = %area,
            effective_date = parsed_date.as_deref().unwrap_or("-"),
            ranks = fee.len(),
            "premium table parsed"
        );
        let mut table = PremiumTable::new(area).with_effective_date(parsed_date);
        table.fee = fee;
        Ok(Self {
            table,
            report,
            rows,
        })
    }

    pub fn premium_table(&self) -> &PremiumTable {
        &self.table
    }

    pub fn into_premium_table(self) -> PremiumTable {
        self.table
    }

    /// Evidence collected while validating the source layout.
    pub fn structure_report(&self) -> &StructureReport {
        &self.report
    }

    /// Source rows the entries were extracted from.
    pub fn data_rows(&self) -> RowRange {
        self.rows
    }

    pub fn to_json(&self) -> Result<String> {
        output::to_json(&self.table)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        output::to_json_pretty(&self.table)
    }

    pub fn to_yaml(&self) -> Result<String> {
        output::to_yaml(&self.table)
    }
}
