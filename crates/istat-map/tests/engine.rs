#![allow(missing_docs)]

use istat_map::suggest_matches;
use istat_normalize::canonicalize;

fn names(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

#[test]
fn misspelling_finds_its_counterpart() {
    let suggestions = suggest_matches(&names(&["bolognia"]), &names(&["bologna", "milano"]))
        .unwrap();

    assert_eq!(suggestions.len(), 1);
    let hit = &suggestions[0];
    assert_eq!(hit.source, "bolognia");
    assert_eq!(hit.candidate, "bologna");
    assert!(hit.score > 90.0 && hit.score <= 100.0, "got {}", hit.score);
}

#[test]
fn output_is_sorted_by_descending_score() {
    let source = names(&["bolognia", "torrrino", "qqq"]);
    let target = names(&["bologna", "torino", "milano"]);
    let suggestions = suggest_matches(&source, &target).unwrap();

    assert_eq!(suggestions.len(), 3);
    for pair in suggestions.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn canonicalized_inputs_line_up_before_matching() {
    // The intended pipeline: canonicalize both vintages, then suggest over
    // the canonical keys. Accent-only differences disappear as exact matches
    // and never reach the suggester's output.
    let vintage_2001 = vec![
        canonicalize(Some("Forlì")),
        canonicalize(Some("Città d'Aosta")),
    ];
    let vintage_2021 = vec![
        canonicalize(Some("FORLI")),
        canonicalize(Some("citta daosta")),
    ];

    let suggestions = suggest_matches(&vintage_2001, &vintage_2021).unwrap();
    assert!(suggestions.is_empty(), "got {suggestions:?}");
}
