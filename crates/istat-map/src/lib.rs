//! Fuzzy matching between name collections from different dataset vintages.
//!
//! When two extracts of the same universe disagree on spelling, the suggester
//! proposes, for every source name with no verbatim counterpart, the closest
//! candidate in the target collection together with a 0–100 score. The
//! output is advisory: callers confirm or reject each pair when building
//! their rename maps.
//!
//! Scoring uses a weighted ratio over the indel similarity: the raw strings,
//! a token-sorted view, and a token-set view are each compared and the best
//! score wins. See [`score::weighted_ratio`].

pub mod engine;
pub mod score;

pub use engine::suggest_matches;
pub use score::weighted_ratio;
