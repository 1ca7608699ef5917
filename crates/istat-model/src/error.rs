use thiserror::Error;

/// Errors surfaced by the reconciliation core.
///
/// Everything else (null names, unknown codes, map entries for keys that are
/// never queried) is absorbed into defined default behaviour rather than
/// raised.
#[derive(Debug, Error)]
pub enum ReconError {
    /// Fuzzy matching was asked to score against an empty candidate set.
    #[error("no candidate names to score against")]
    EmptyCandidateSet,
    /// Resolver inputs could not be constructed from the supplied tables.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, ReconError>;
