#![allow(missing_docs)]

use istat_normalize::canonicalize;
use proptest::prelude::*;

proptest! {
    #[test]
    fn canonicalize_is_idempotent(input in ".{0,64}") {
        let once = canonicalize(Some(&input));
        let twice = canonicalize(Some(&once));
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn canonical_keys_are_trimmed_lowercase(input in ".{0,64}") {
        let key = canonicalize(Some(&input));
        prop_assert_eq!(key.trim(), key.as_str());
        prop_assert!(!key.chars().any(|ch| ch.is_ascii_punctuation()));
        prop_assert!(!key.chars().any(|ch| ch.is_ascii_uppercase()));
    }
}

#[test]
fn canonicalize_is_total_on_missing_input() {
    assert_eq!(canonicalize(None), "");
    assert_eq!(canonicalize(Some("")), "");
}
