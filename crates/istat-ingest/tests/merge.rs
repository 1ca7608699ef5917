#![allow(missing_docs)]

use std::fs;

use istat_ingest::{IngestError, SheetPlan, SheetSource, load_supersession_map, load_valid_codes, merge_sheets};

fn plan() -> SheetPlan {
    SheetPlan::new(vec![
        "istat".to_string(),
        "mun_name".to_string(),
        "population".to_string(),
    ])
    .with_skip_rows(2)
    .with_dropped_columns(vec![0])
}

const SHEET_2001: &str = "\
junk preamble line
another junk line
region,istat,mun_name,population
Veneto,028001,Abano Terme,18206
Veneto,028006,Padova,204870
";

const SHEET_2021: &str = "\
junk preamble line
another junk line
region,istat,mun_name,population
Veneto,028006,Padova,210440
";

// Same layout but one column short after the drop.
const SHEET_BAD: &str = "\
junk preamble line
another junk line
region,istat,mun_name
Veneto,028006,Padova
";

#[test]
fn merges_sheets_and_tags_periods() {
    let dir = tempfile::tempdir().unwrap();
    let p2001 = dir.path().join("2001.csv");
    let p2021 = dir.path().join("2021.csv");
    fs::write(&p2001, SHEET_2001).unwrap();
    fs::write(&p2021, SHEET_2021).unwrap();

    let merged = merge_sheets(
        &[
            SheetSource::new("2001", &p2001),
            SheetSource::new("2021", &p2021),
        ],
        &plan(),
    )
    .unwrap();

    assert_eq!(merged.height(), 3);
    let names: Vec<&str> = merged
        .get_column_names()
        .iter()
        .map(|name| name.as_str())
        .collect();
    assert_eq!(names, vec!["istat", "mun_name", "population", "year"]);

    let years = merged.column("year").unwrap();
    let first = years.get(0).unwrap().to_string();
    let last = years.get(2).unwrap().to_string();
    assert!(first.contains("2001"));
    assert!(last.contains("2021"));
}

#[test]
fn wrong_shape_sheet_is_skipped_not_merged() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("2001.csv");
    let bad = dir.path().join("2011.csv");
    fs::write(&good, SHEET_2001).unwrap();
    fs::write(&bad, SHEET_BAD).unwrap();

    let merged = merge_sheets(
        &[
            SheetSource::new("2001", &good),
            SheetSource::new("2011", &bad),
        ],
        &plan(),
    )
    .unwrap();

    // Only the well-shaped sheet contributes rows.
    assert_eq!(merged.height(), 2);
}

#[test]
fn merging_only_bad_sheets_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let bad = dir.path().join("2011.csv");
    fs::write(&bad, SHEET_BAD).unwrap();

    let err = merge_sheets(&[SheetSource::new("2011", &bad)], &plan()).unwrap_err();
    assert!(matches!(err, IngestError::NoValidSheets));
}

#[test]
fn reference_tables_load_into_resolver_inputs() {
    let dir = tempfile::tempdir().unwrap();
    let map_path = dir.path().join("map.csv");
    let valid_path = dir.path().join("valid.csv");
    fs::write(&map_path, "old_code,new_code\n028001,028060\n028060,028006\n\n").unwrap();
    fs::write(&valid_path, "istat\n028006\n028007\n").unwrap();

    let map = load_supersession_map(&map_path).unwrap();
    assert_eq!(map.len(), 2);
    assert_eq!(map.successor_of("028001"), Some("028060"));

    let valid = load_valid_codes(&valid_path).unwrap();
    assert_eq!(valid.len(), 2);
    assert!(valid.contains("028006"));
}

#[test]
fn conflicting_map_rows_fail_loading() {
    let dir = tempfile::tempdir().unwrap();
    let map_path = dir.path().join("map.csv");
    fs::write(&map_path, "old_code,new_code\nA,B\nA,C\n").unwrap();

    let err = load_supersession_map(&map_path).unwrap_err();
    assert!(matches!(err, IngestError::Recon(_)));
}
