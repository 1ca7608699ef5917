//! Reference-table loaders for the resolver.
//!
//! The supersession table is a two-column CSV (`old_code,new_code`); the
//! valid-code list is a one-column CSV. Both are small and read eagerly.

use std::collections::BTreeSet;
use std::path::Path;

use csv::{ReaderBuilder, Trim};

use istat_model::SupersessionMap;

use crate::error::Result;

/// Loads the old-code → new-code table from a headered two-column CSV.
///
/// Rows are trimmed; fully blank rows are skipped. A half-blank row or a
/// code with two different successors fails map construction, surfacing as
/// invalid input.
pub fn load_supersession_map(path: &Path) -> Result<SupersessionMap> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_path(path)?;

    let mut pairs = Vec::new();
    for record in reader.records() {
        let record = record?;
        let old = record.get(0).unwrap_or("").to_string();
        let new = record.get(1).unwrap_or("").to_string();
        if old.is_empty() && new.is_empty() {
            continue;
        }
        pairs.push((old, new));
    }
    Ok(SupersessionMap::from_pairs(pairs)?)
}

/// Loads the current valid-code set from the first column of a headered CSV.
pub fn load_valid_codes(path: &Path) -> Result<BTreeSet<String>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_path(path)?;

    let mut codes = BTreeSet::new();
    for record in reader.records() {
        let record = record?;
        if let Some(code) = record.get(0)
            && !code.is_empty()
        {
            codes.insert(code.to_string());
        }
    }
    Ok(codes)
}
