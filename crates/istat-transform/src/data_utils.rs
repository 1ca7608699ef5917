//! Column extraction helpers.

use std::collections::BTreeSet;

use polars::prelude::{AnyValue, Column, DataFrame};

use istat_common::any_to_string;
use istat_model::{ReconError, Result};

/// Looks up a column, reporting a missing one as invalid caller input.
pub(crate) fn frame_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column> {
    df.column(name)
        .map_err(|_| ReconError::InvalidInput(format!("column '{name}' not found in frame")))
}

/// All values of a column as trimmed strings; nulls become empty strings.
pub fn column_values(df: &DataFrame, name: &str) -> Result<Vec<String>> {
    let column = frame_column(df, name)?;
    let mut values = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let value = any_to_string(column.get(idx).unwrap_or(AnyValue::Null));
        values.push(value.trim().to_string());
    }
    Ok(values)
}

/// The distinct non-empty codes of an identifier column, as resolver input.
pub fn distinct_codes(df: &DataFrame, name: &str) -> Result<BTreeSet<String>> {
    let values = column_values(df, name)?;
    Ok(values.into_iter().filter(|v| !v.is_empty()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    #[test]
    fn missing_column_is_invalid_input() {
        let frame = df!("istat" => &["028006"]).unwrap();
        let err = column_values(&frame, "codice").unwrap_err();
        assert!(matches!(err, ReconError::InvalidInput(_)));
    }

    #[test]
    fn distinct_codes_drop_blanks_and_duplicates() {
        let frame = df!("istat" => &["028006", "", "028006", " 028001 "]).unwrap();
        let codes = distinct_codes(&frame, "istat").unwrap();
        assert_eq!(codes.len(), 2);
        assert!(codes.contains("028001"));
    }
}
