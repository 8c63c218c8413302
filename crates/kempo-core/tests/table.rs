//! End-to-end conversion of the bundled prefecture table.

use std::path::PathBuf;

use kempo_core::{
    CoreError, KempoTable, RowExtractor, RowRange, TableLayout, from_json, from_yaml, locate_rows,
};
use kempo_ingest::{RawTable, read_raw_table};
use kempo_validate::ValidationError;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/tokyo.csv")
}

fn fixture() -> KempoTable {
    KempoTable::new(fixture_path(), Some("2024.4")).expect("convert fixture")
}

/// Fixture rows with `edit` applied; rank `r` sits on row `5 + r`.
fn edited_fixture(edit: impl FnOnce(&mut Vec<Vec<String>>)) -> RawTable {
    let mut rows = read_raw_table(&fixture_path()).unwrap().rows().to_vec();
    edit(&mut rows);
    RawTable::from_rows(rows)
}

#[test]
fn converts_all_fifty_ranks() {
    let table = fixture();
    let premiums = table.premium_table();

    assert_eq!(premiums.area, "tokyo");
    assert_eq!(premiums.effective_date.as_deref(), Some("2024-04-01"));
    assert_eq!(premiums.len(), 50);
    assert!(premiums.fee.iter().all(|entry| entry.is_complete()));

    let ranks: Vec<u32> = premiums.fee.iter().map(|entry| entry.rank).collect();
    assert_eq!(ranks, (1..=50).collect::<Vec<_>>());
    assert_eq!(table.data_rows(), RowRange { start: 6, end: 55 });
    assert_eq!(table.structure_report().separator.column, 3);
}

#[test]
fn first_rank_snapshot() {
    let table = fixture();
    insta::assert_json_snapshot!(table.premium_table().fee[0], @r#"
    {
      "rank": 1,
      "pension_rank": 1,
      "label": "58,000",
      "rank_min": 0,
      "rank_max": 63000,
      "insurance_younger_total": "5788.4",
      "insurance_younger_salary": "2894.2",
      "insurance_elder_total": "6716.4",
      "insurance_elder_salary": "3358.2",
      "pension_total": "16104.0",
      "pension_salary": "8052.0"
    }
    "#);
}

#[test]
fn figures_are_rounded_to_one_decimal() {
    let table = fixture();
    let rank6 = table.premium_table().rank(6).expect("rank 6");
    assert_eq!(rank6.pension_rank, Some(3));
    assert_eq!(rank6.insurance_younger_total.as_deref(), Some("10379.2"));
    assert_eq!(rank6.insurance_younger_salary.as_deref(), Some("5189.6"));
    assert_eq!(rank6.rank_min, 101000);
    assert_eq!(rank6.rank_max, 107000);

    let rank25 = table.premium_table().rank(25).expect("rank 25");
    assert_eq!(rank25.pension_rank, Some(22));
    assert_eq!(rank25.pension_total.as_deref(), Some("65880.0"));
}

#[test]
fn pension_gaps_are_backfilled_by_half() {
    let table = fixture();
    let fee = &table.premium_table().fee;

    for entry in &fee[..3] {
        assert_eq!(entry.pension_rank, Some(1));
        assert_eq!(entry.pension_total.as_deref(), Some("16104.0"));
        assert_eq!(entry.pension_salary.as_deref(), Some("8052.0"));
    }
    for entry in &fee[35..] {
        assert_eq!(entry.pension_rank, Some(32));
        assert_eq!(entry.pension_total.as_deref(), Some("118950.0"));
        assert_eq!(entry.pension_salary.as_deref(), Some("59475.0"));
    }

    let last = &fee[49];
    assert_eq!(last.rank_max, 0);
    assert_eq!(last.insurance_younger_total.as_deref(), Some("138722.0"));
    assert_eq!(last.insurance_elder_salary.as_deref(), Some("80481.0"));
}

#[test]
fn json_and_yaml_describe_the_same_table() {
    let table = fixture();
    let from_compact = from_json(&table.to_json().unwrap()).unwrap();
    let from_pretty = from_json(&table.to_json_pretty().unwrap()).unwrap();
    let from_yaml = from_yaml(&table.to_yaml().unwrap()).unwrap();

    assert_eq!(&from_compact, table.premium_table());
    assert_eq!(from_pretty, from_compact);
    assert_eq!(from_yaml, from_compact);
}

#[test]
fn missing_or_unparsable_date_is_null() {
    let undated = KempoTable::new(fixture_path(), None).unwrap();
    assert_eq!(undated.premium_table().effective_date, None);
    assert!(undated.to_json().unwrap().contains(r#""effective_date":null"#));

    let garbled = KempoTable::new(fixture_path(), Some("next april")).unwrap();
    assert_eq!(garbled.premium_table().effective_date, None);
}

#[test]
fn yaml_keeps_effective_date_a_string() {
    let yaml = fixture().to_yaml().unwrap();
    assert!(yaml.contains("effective_date: '2024-04-01'\n"));
    assert!(!yaml.contains("effective_date: 2024"));
}

#[test]
fn non_numeric_pension_cells_are_backfilled_by_half() {
    let raw = edited_fixture(|rows| {
        for (row, marker) in [(7, "-"), (15, "-"), (35, "※"), (50, "※")] {
            rows[row][9] = marker.to_string();
            rows[row][10] = marker.to_string();
        }
    });
    let layout = TableLayout::default();

    let extractor = RowExtractor::new(&layout);
    for row in [7, 15, 35, 50] {
        let entry = extractor.extract_row(&raw, row).unwrap();
        assert_eq!(entry.pension_total, None, "row {row}");
        assert_eq!(entry.pension_salary, None, "row {row}");
    }

    let table = KempoTable::from_raw("tokyo", None, &raw, &layout).unwrap();
    let premiums = table.premium_table();
    for rank in [2, 10] {
        let entry = premiums.rank(rank).unwrap();
        assert_eq!(entry.pension_total.as_deref(), Some("16104.0"), "rank {rank}");
        assert_eq!(entry.pension_salary.as_deref(), Some("8052.0"), "rank {rank}");
    }
    for rank in [30, 45] {
        let entry = premiums.rank(rank).unwrap();
        assert_eq!(entry.pension_total.as_deref(), Some("118950.0"), "rank {rank}");
        assert_eq!(entry.pension_salary.as_deref(), Some("59475.0"), "rank {rank}");
    }
    // the rank cell still carries its own pension rank
    assert_eq!(premiums.rank(10).unwrap().pension_rank, Some(7));
}

#[test]
fn padded_first_rank_is_not_a_start_row() {
    let raw = edited_fixture(|rows| rows[6][0] = "1\u{3000}".to_string());
    let layout = TableLayout::default();

    assert!(locate_rows(&raw, &layout).is_err());
    let err = KempoTable::from_raw("tokyo", None, &raw, &layout).unwrap_err();
    assert_eq!(err.code(), "RowRangeError");
    assert!(matches!(err, CoreError::MissingRankRow { rank } if rank == "1"));
}

#[test]
fn blank_label_serializes_as_null() {
    let raw = edited_fixture(|rows| rows[8][1] = String::new());
    let table = KempoTable::from_raw("tokyo", None, &raw, &TableLayout::default()).unwrap();

    assert_eq!(table.premium_table().rank(3).unwrap().label, None);
    let json = table.to_json().unwrap();
    assert!(json.contains(r#"{"rank":3,"pension_rank":1,"label":null,"#));
}

#[test]
fn swapped_columns_are_rejected() {
    let raw = edited_fixture(|rows| {
        for row in rows.iter_mut() {
            if row.len() > 6 {
                row.swap(5, 6);
            }
        }
    });

    let err = KempoTable::from_raw("osaka", None, &raw, &TableLayout::default()).unwrap_err();
    assert_eq!(err.code(), "SalaryRateError");
    assert!(matches!(
        err,
        CoreError::Validation(ValidationError::SalaryRate {
            pair: "insurance_younger",
            ..
        })
    ));
}

#[test]
fn missing_file_is_an_ingest_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = KempoTable::new(dir.path().join("absent.csv"), None).unwrap_err();
    assert!(matches!(err, CoreError::Ingest(_)));
}
