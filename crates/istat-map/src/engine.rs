//! The suggestion engine.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use istat_model::{MatchSuggestion, ReconError, Result};

use crate::score::weighted_ratio;

/// Proposes a best candidate for every source name absent from the target
/// collection.
///
/// Both collections are reduced to unique values first, preserving first-seen
/// order; ties on score go to the earliest candidate in that order, so the
/// output is deterministic for identical inputs. Names present verbatim in
/// the target are excluded entirely; the caller already treats those as
/// linked. Suggestions come back sorted by descending score.
///
/// # Errors
///
/// [`ReconError::EmptyCandidateSet`] when `target_names` holds no values to
/// score against.
pub fn suggest_matches(
    source_names: &[String],
    target_names: &[String],
) -> Result<Vec<MatchSuggestion>> {
    let targets = unique_in_order(target_names);
    if targets.is_empty() {
        return Err(ReconError::EmptyCandidateSet);
    }
    let target_set: BTreeSet<&str> = targets.iter().copied().collect();

    let mut suggestions = Vec::new();
    for source in unique_in_order(source_names) {
        if target_set.contains(source) {
            continue;
        }
        let (candidate, score) = best_candidate(source, &targets);
        suggestions.push(MatchSuggestion {
            source: source.to_string(),
            candidate: candidate.to_string(),
            score,
        });
    }

    // Stable sort: equal scores keep source encounter order.
    suggestions.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    Ok(suggestions)
}

/// Highest-scoring candidate; the first one encountered wins ties.
fn best_candidate<'a>(source: &str, targets: &[&'a str]) -> (&'a str, f64) {
    let mut best = targets[0];
    let mut best_score = weighted_ratio(source, best);
    for candidate in &targets[1..] {
        let score = weighted_ratio(source, candidate);
        if score > best_score {
            best = candidate;
            best_score = score;
        }
    }
    (best, best_score)
}

fn unique_in_order(names: &[String]) -> Vec<&str> {
    let mut seen = BTreeSet::new();
    let mut unique = Vec::new();
    for name in names {
        if seen.insert(name.as_str()) {
            unique.push(name.as_str());
        }
    }
    unique
}
