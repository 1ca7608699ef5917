//! Dataset and reference-table ingestion.
//!
//! Source data arrives as one CSV extract per recording period, each with
//! the same junk preamble and positional layout. [`sheets::merge_sheets`]
//! validates and stacks them into a single frame tagged by period. The
//! resolver's reference tables (the supersession map and the valid-code
//! list) load through [`reference`].

pub mod error;
pub mod reference;
pub mod sheets;

pub use error::IngestError;
pub use reference::{load_supersession_map, load_valid_codes};
pub use sheets::{SheetPlan, SheetSource, merge_sheets, read_frame};
