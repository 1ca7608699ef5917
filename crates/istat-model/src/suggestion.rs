use serde::{Deserialize, Serialize};

/// Best-candidate match proposed for a name missing from the target dataset.
///
/// Advisory only: the suggester never merges or mutates anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSuggestion {
    /// Name present in the source dataset but absent from the target.
    pub source: String,
    /// Highest-scoring candidate from the target dataset.
    pub candidate: String,
    /// Weighted-ratio similarity, 0–100.
    pub score: f64,
}
