//! Chain following and classification.

use std::collections::{BTreeMap, BTreeSet};

use istat_model::{Resolution, SupersessionMap};

/// Classifies one code against the valid set and supersession table.
///
/// - in the valid set → valid, returned as-is;
/// - chain makes progress → changed, with the chain terminus as the
///   resolved code. The terminus is deliberately not re-checked against the
///   valid set: the contract is "reached a different code via the chain",
///   and the caller can re-screen the terminus if it wants the stricter
///   reading;
/// - no progress (no entry, or a cycle leading straight back) → suppressed.
pub fn classify(code: &str, map: &SupersessionMap, valid: &BTreeSet<String>) -> Resolution {
    if valid.contains(code) {
        return Resolution::valid(code);
    }
    let terminus = chain_terminus(code, map);
    if terminus != code {
        Resolution::changed(terminus)
    } else {
        Resolution::suppressed(code)
    }
}

/// Resolves every distinct code once and returns the code → record map.
///
/// Applying the records back to a dataset is plain value substitution; all
/// rows sharing a code share one record. Unknown codes are not an error;
/// they come back suppressed.
pub fn resolve(
    codes: &BTreeSet<String>,
    map: &SupersessionMap,
    valid: &BTreeSet<String>,
) -> BTreeMap<String, Resolution> {
    codes
        .iter()
        .map(|code| (code.clone(), classify(code, map, valid)))
        .collect()
}

/// Follows the supersession chain from `code` until it exhausts or revisits
/// a code. Termination is bounded by the map size: every step inserts a new
/// code into the visited set or stops.
fn chain_terminus<'a>(code: &'a str, map: &'a SupersessionMap) -> &'a str {
    let mut visited: BTreeSet<&str> = BTreeSet::new();
    let mut current = code;
    while let Some(next) = map.successor_of(current) {
        if !visited.insert(current) {
            break;
        }
        current = next;
    }
    current
}
