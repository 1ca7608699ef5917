//! Shared types for ISTAT administrative-code reconciliation.
//!
//! The reconciliation crates exchange data through the types defined here:
//! resolution records, the supersession reference table, and fuzzy-match
//! suggestions. Keeping them in one leaf crate lets the algorithmic crates
//! stay free of frame and IO dependencies.

pub mod error;
pub mod resolution;
pub mod suggestion;
pub mod supersession;

pub use error::{ReconError, Result};
pub use resolution::{CodeStatus, Resolution};
pub use suggestion::MatchSuggestion;
pub use supersession::SupersessionMap;
