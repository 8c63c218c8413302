//! Structural checks against the bundled prefecture table.

use std::path::PathBuf;

use kempo_ingest::{RawTable, read_raw_table};
use kempo_model::TableLayout;
use kempo_validate::{StructureValidator, ValidationError};

fn fixture() -> RawTable {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../kempo-core/tests/data/tokyo.csv");
    read_raw_table(&path).expect("read fixture")
}

fn edit_rows(table: &RawTable, edit: impl Fn(&mut Vec<String>)) -> RawTable {
    let mut rows = table.rows().to_vec();
    for row in &mut rows {
        edit(row);
    }
    RawTable::from_rows(rows)
}

#[test]
fn fixture_passes_every_check() {
    let layout = TableLayout::default();
    let report = StructureValidator::new(&layout)
        .validate(&fixture())
        .expect("valid table");

    assert_eq!(report.separator.column, 3);
    assert_eq!(report.separator.count, 50);
    assert_eq!(report.rank_index.positive, 50);
    assert_eq!(report.salary_rates.len(), 3);
    assert_eq!(report.salary_rates[0].samples, 50);
    assert_eq!(report.salary_rates[2].pair, "pension");
    assert_eq!(report.salary_rates[2].samples, 32);
}

#[test]
fn swapped_insurance_columns_fail_salary_rate() {
    let layout = TableLayout::default();
    let swapped = edit_rows(&fixture(), |row| {
        if row.len() > 6 {
            row.swap(5, 6);
        }
    });
    let err = StructureValidator::new(&layout)
        .validate(&swapped)
        .expect_err("swapped columns must fail");
    assert!(matches!(
        err,
        ValidationError::SalaryRate {
            pair: "insurance_younger",
            ..
        }
    ));
}

#[test]
fn inserted_column_fails_rank_min() {
    let layout = TableLayout::default();
    let shifted = edit_rows(&fixture(), |row| row.insert(2, String::new()));
    let err = StructureValidator::new(&layout)
        .validate(&shifted)
        .expect_err("shifted columns must fail");
    assert_eq!(
        err,
        ValidationError::RankMin {
            expected: 2,
            separator: Some(4)
        }
    );
}

#[test]
fn truncated_table_fails_rank_index() {
    let layout = TableLayout::default();
    let mut rows = fixture().rows().to_vec();
    rows.truncate(40);
    let err = StructureValidator::new(&layout)
        .validate(&RawTable::from_rows(rows))
        .expect_err("missing ranks must fail");
    assert_eq!(err.code(), "RankIndexError");
}
