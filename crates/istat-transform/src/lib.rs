//! Frame-level application of the reconciliation core.
//!
//! The algorithmic crates work on plain collections; this crate is the glue
//! that lifts them onto Polars frames: re-padding identifier columns,
//! deriving canonical-name columns, and writing resolver output back onto
//! every row.

pub mod data_utils;
pub mod transforms;

pub use data_utils::{column_values, distinct_codes};
pub use transforms::{apply_resolution, canonicalize_column, pad_codes};
