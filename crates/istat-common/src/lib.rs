//! Shared utilities for the istat-recon crates.
//!
//! Polars `AnyValue` conversion helpers and the zero-padding applied to
//! identifier columns.

pub mod codes;
pub mod polars;

pub use codes::pad_code;
pub use polars::{any_to_f64, any_to_string, format_numeric, parse_f64};
