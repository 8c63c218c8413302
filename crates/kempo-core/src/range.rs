//! Locating the data rows between the header and footer notes.

use kempo_ingest::RawTable;
use kempo_model::TableLayout;

use crate::error::{CoreError, Result};

/// Inclusive span of rows holding rank data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowRange {
    pub start: usize,
    pub end: usize,
}

impl RowRange {
    pub fn contains(&self, row: usize) -> bool {
        (self.start..=self.end).contains(&row)
    }

    /// Number of rows in the span.
    pub fn row_count(&self) -> usize {
        self.end - self.start + 1
    }
}

/// Finds the rows whose rank cell reads exactly `"1"` and exactly the last
/// rank.
///
/// Scanning stops at the last rank; a repeated `"1"` before it moves the
/// start down to the later occurrence.
pub fn locate_rows(table: &RawTable, layout: &TableLayout) -> Result<RowRange> {
    let first = layout.first_rank_label();
    let last = layout.last_rank_label();

    let mut start = None;
    for (row, cell) in table.column(layout.rank).enumerate() {
        if cell == Some(first.as_str()) {
            start = Some(row);
        }
        if cell == Some(last.as_str()) {
            let Some(start) = start else {
                return Err(CoreError::MissingRankRow { rank: first });
            };
            tracing::debug!(start, end = row, "located data rows");
            return Ok(RowRange { start, end: row });
        }
    }
    Err(CoreError::MissingRankRow { rank: last })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranks(cells: &[&str]) -> RawTable {
        RawTable::from_rows(cells.iter().map(|cell| vec![(*cell).to_string()]).collect())
    }

    fn short_layout() -> TableLayout {
        TableLayout {
            rank_count: 3,
            ..TableLayout::default()
        }
    }

    #[test]
    fn finds_span_between_headers_and_notes() {
        let table = ranks(&["等級", "", "1", "2(1)", "3", "※注", "3"]);
        let range = locate_rows(&table, &short_layout()).unwrap();
        assert_eq!(range, RowRange { start: 2, end: 4 });
        assert_eq!(range.row_count(), 3);
        assert!(range.contains(3));
        assert!(!range.contains(5));
    }

    #[test]
    fn later_first_rank_wins() {
        let table = ranks(&["1", "x", "1", "2", "3"]);
        let range = locate_rows(&table, &short_layout()).unwrap();
        assert_eq!(range.start, 2);
    }

    #[test]
    fn first_rank_after_last_is_ignored() {
        let table = ranks(&["3", "1", "2", "3"]);
        let err = locate_rows(&table, &short_layout()).unwrap_err();
        assert!(matches!(err, CoreError::MissingRankRow { rank } if rank == "1"));
    }

    #[test]
    fn padded_rank_cells_do_not_match() {
        let table = ranks(&["1\u{3000}", " 1", "2", "3"]);
        let err = locate_rows(&table, &short_layout()).unwrap_err();
        assert!(matches!(err, CoreError::MissingRankRow { rank } if rank == "1"));

        let table = ranks(&["1", "2", "3 "]);
        let err = locate_rows(&table, &short_layout()).unwrap_err();
        assert!(matches!(err, CoreError::MissingRankRow { rank } if rank == "3"));
    }

    #[test]
    fn missing_last_rank_fails() {
        let table = ranks(&["1", "2", "3(1)"]);
        let err = locate_rows(&table, &short_layout()).unwrap_err();
        assert!(matches!(err, CoreError::MissingRankRow { rank } if rank == "3"));
    }
}
