//! Name canonicalization.
//!
//! Municipality names are recorded differently across periods: accents come
//! and go, casing varies, and punctuation is inconsistent ("Città d'Aosta!"
//! vs "citta daosta"). [`canonicalize`] collapses every variant to a single
//! comparable key.

pub mod canonical;

pub use canonical::canonicalize;
