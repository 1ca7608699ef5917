//! Weighted-ratio similarity scoring.
//!
//! Uses the rapidfuzz indel ratio as the base metric with token-sorted and
//! token-set views layered on top, robust to word reordering and partial
//! overlap between name variants.

use std::collections::BTreeSet;

use rapidfuzz::fuzz;

/// Weight applied to the token-based views, mirroring the conventional
/// weighted-ratio blend: a token rearrangement should never beat an equally
/// close literal match.
const TOKEN_WEIGHT: f64 = 0.95;

/// Indel similarity between two strings, 0–100.
pub fn indel_ratio(a: &str, b: &str) -> f64 {
    fuzz::ratio(a.chars(), b.chars())
}

/// Similarity after sorting whitespace-separated tokens in both strings.
///
/// "vado in santangelo" and "santangelo in vado" compare as identical.
pub fn token_sort_ratio(a: &str, b: &str) -> f64 {
    indel_ratio(&sorted_tokens(a), &sorted_tokens(b))
}

/// Similarity over the shared and distinct token sets.
///
/// The intersection is compared against each side's intersection-plus-
/// remainder string; the best of the three comparisons wins. Generous to
/// names that share a core but differ in qualifiers ("bologna" vs
/// "bologna citta metropolitana").
pub fn token_set_ratio(a: &str, b: &str) -> f64 {
    let tokens_a: BTreeSet<&str> = a.split_whitespace().collect();
    let tokens_b: BTreeSet<&str> = b.split_whitespace().collect();

    let shared = join(tokens_a.intersection(&tokens_b));
    let only_a = join(tokens_a.difference(&tokens_b));
    let only_b = join(tokens_b.difference(&tokens_a));

    let full_a = concat(&shared, &only_a);
    let full_b = concat(&shared, &only_b);

    indel_ratio(&shared, &full_a)
        .max(indel_ratio(&shared, &full_b))
        .max(indel_ratio(&full_a, &full_b))
}

/// Best achievable similarity across the literal, token-sorted, and
/// token-set comparisons, 0–100. Two blank strings score zero: there is
/// nothing to match on.
pub fn weighted_ratio(a: &str, b: &str) -> f64 {
    if a.trim().is_empty() || b.trim().is_empty() {
        return 0.0;
    }
    indel_ratio(a, b)
        .max(TOKEN_WEIGHT * token_sort_ratio(a, b))
        .max(TOKEN_WEIGHT * token_set_ratio(a, b))
}

fn sorted_tokens(s: &str) -> String {
    let mut tokens: Vec<&str> = s.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

fn join<'a>(tokens: impl Iterator<Item = &'a &'a str>) -> String {
    tokens.copied().collect::<Vec<_>>().join(" ")
}

fn concat(head: &str, tail: &str) -> String {
    if head.is_empty() {
        tail.to_string()
    } else if tail.is_empty() {
        head.to_string()
    } else {
        format!("{head} {tail}")
    }
}
