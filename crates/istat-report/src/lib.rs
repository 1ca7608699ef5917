//! Descriptive statistics over merged frames.
//!
//! A quick variability profile of the numeric columns in a merged dataset:
//! mean, median, range, standard deviation, and coefficient of variation per
//! column. Used to sanity-check that stacked periods are on comparable
//! scales before any reconciliation output is trusted.

pub mod variability;

pub use variability::{ColumnStats, variability};
