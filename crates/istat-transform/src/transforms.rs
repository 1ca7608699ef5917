//! Standalone frame transforms.

use std::collections::BTreeMap;

use polars::prelude::{AnyValue, DataFrame, NamedFrom, Series};

use istat_common::{any_to_string, pad_code};
use istat_model::{ReconError, Resolution, Result};
use istat_normalize::canonicalize;

use crate::data_utils::frame_column;

fn set_column(df: &mut DataFrame, series: Series) -> Result<()> {
    df.with_column(series)
        .map_err(|e| ReconError::InvalidInput(e.to_string()))?;
    Ok(())
}

/// Left-pads every listed identifier column with zeros to `width`.
///
/// Codes that passed through a numeric column type have lost their leading
/// zeros; this restores them in place, leaving the column as strings.
pub fn pad_codes(df: &mut DataFrame, columns: &[&str], width: usize) -> Result<()> {
    for name in columns {
        let column = frame_column(df, name)?;
        let mut padded = Vec::with_capacity(df.height());
        for idx in 0..df.height() {
            let value = any_to_string(column.get(idx).unwrap_or(AnyValue::Null));
            padded.push(pad_code(value.trim(), width));
        }
        set_column(df, Series::new((*name).into(), padded))?;
    }
    Ok(())
}

/// Appends a canonical-key column derived from a name column.
///
/// Null cells canonicalize to the empty string, so the derived column never
/// holds nulls.
pub fn canonicalize_column(df: &mut DataFrame, name_col: &str, key_col: &str) -> Result<()> {
    let column = frame_column(df, name_col)?;
    let mut keys = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let key = match column.get(idx).unwrap_or(AnyValue::Null) {
            AnyValue::Null => canonicalize(None),
            value => canonicalize(Some(any_to_string(value).as_str())),
        };
        keys.push(key);
    }
    set_column(df, Series::new(key_col.into(), keys))
}

/// Writes resolver output back onto a frame.
///
/// Appends `<code_col>_updated`, `changed`, and `suppressed` columns. Every
/// row carrying the same code receives the same record; codes absent from
/// `records` fall back to suppressed, matching how the resolver treats
/// codes it has never seen.
pub fn apply_resolution(
    df: &mut DataFrame,
    code_col: &str,
    records: &BTreeMap<String, Resolution>,
) -> Result<()> {
    let column = frame_column(df, code_col)?;
    let height = df.height();
    let mut updated = Vec::with_capacity(height);
    let mut changed = Vec::with_capacity(height);
    let mut suppressed = Vec::with_capacity(height);

    for idx in 0..height {
        let code = any_to_string(column.get(idx).unwrap_or(AnyValue::Null));
        let code = code.trim();
        let record = records
            .get(code)
            .cloned()
            .unwrap_or_else(|| Resolution::suppressed(code));
        updated.push(record.resolved);
        changed.push(record.changed);
        suppressed.push(record.suppressed);
    }

    set_column(
        df,
        Series::new(format!("{code_col}_updated").into(), updated),
    )?;
    set_column(df, Series::new("changed".into(), changed))?;
    set_column(df, Series::new("suppressed".into(), suppressed))
}
