#![allow(missing_docs)]

use std::collections::BTreeSet;

use istat_model::{CodeStatus, Resolution, SupersessionMap};
use istat_resolve::resolve;

fn set(codes: &[&str]) -> BTreeSet<String> {
    codes.iter().map(|c| (*c).to_string()).collect()
}

#[test]
fn every_valid_code_resolves_to_itself() {
    let valid = set(&["001001", "028006", "099005"]);
    let map = SupersessionMap::from_pairs([("028001", "028006")]).unwrap();

    let records = resolve(&valid, &map, &valid);
    for code in &valid {
        assert_eq!(records[code], Resolution::valid(code.clone()));
    }
}

#[test]
fn mixed_batch_classifies_each_code_exactly_once() {
    // 028001 was merged into 028006 via an intermediate code; 099999 never
    // existed; 028006 is current.
    let map = SupersessionMap::from_pairs([
        ("028001", "028060"),
        ("028060", "028006"),
    ])
    .unwrap();
    let valid = set(&["028006"]);
    let codes = set(&["028001", "028006", "099999"]);

    let records = resolve(&codes, &map, &valid);
    assert_eq!(records.len(), 3);
    assert_eq!(records["028001"], Resolution::changed("028006"));
    assert_eq!(records["028006"], Resolution::valid("028006"));
    assert_eq!(records["099999"], Resolution::suppressed("099999"));

    for record in records.values() {
        assert!(!(record.changed && record.suppressed));
    }
}

#[test]
fn cycles_terminate_and_suppress() {
    let map = SupersessionMap::from_pairs([("X", "Y"), ("Y", "X")]).unwrap();
    let records = resolve(&set(&["X"]), &map, &BTreeSet::new());
    let record = &records["X"];
    assert!(record.suppressed);
    assert_eq!(record.status(), CodeStatus::Suppressed);
    assert_eq!(record.resolved, "X");
}

#[test]
fn long_chain_is_bounded_by_map_size() {
    // 0 → 1 → ... → 200; every step must be taken once and only once.
    let pairs: Vec<(String, String)> = (0..200)
        .map(|i| (format!("{i:03}"), format!("{:03}", i + 1)))
        .collect();
    let map = SupersessionMap::from_pairs(pairs).unwrap();

    let records = resolve(&set(&["000"]), &map, &set(&["200"]));
    assert_eq!(records["000"], Resolution::changed("200"));
}

#[test]
fn resolution_is_per_distinct_code_not_per_row() {
    // Duplicate occurrences in a dataset column collapse to one lookup; the
    // caller substitutes the same record into every row.
    let map = SupersessionMap::from_pairs([("A", "B")]).unwrap();
    let rows = ["A", "A", "B", "A"];
    let distinct: BTreeSet<String> = rows.iter().map(|c| (*c).to_string()).collect();

    let records = resolve(&distinct, &map, &set(&["B"]));
    assert_eq!(records.len(), 2);

    let applied: Vec<&Resolution> = rows.iter().map(|c| &records[*c]).collect();
    assert_eq!(applied[0], applied[1]);
    assert_eq!(applied[0], applied[3]);
    assert!(applied[2].status() == CodeStatus::Valid);
}
