//! Polars `AnyValue` conversion helpers.
//!
//! Spreadsheet extracts arrive with mixed column types (codes inferred as
//! integers, names as strings, populations as floats). These helpers collapse
//! every cell to the string or numeric form the reconciliation code works on.

use polars::prelude::AnyValue;

/// Converts a Polars `AnyValue` to its `String` representation.
///
/// `Null` becomes the empty string; floats are printed without trailing
/// zeros so `1001.0` read from a numeric column round-trips as `"1001"`.
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use istat_common::any_to_string;
///
/// assert_eq!(any_to_string(AnyValue::Null), "");
/// assert_eq!(any_to_string(AnyValue::Int64(1001)), "1001");
/// assert_eq!(any_to_string(AnyValue::Float64(1001.0)), "1001");
/// assert_eq!(any_to_string(AnyValue::String("Aosta")), "Aosta");
/// ```
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// Formats a float without trailing zeros.
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if !s.contains('.') {
        return s;
    }
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Converts an `AnyValue` to `f64`, returning `None` for nulls and
/// non-numeric cells. Strings are parsed, so text columns holding numbers
/// still contribute to summary statistics.
pub fn any_to_f64(value: AnyValue<'_>) -> Option<f64> {
    match value {
        AnyValue::Null => None,
        AnyValue::Int8(v) => Some(f64::from(v)),
        AnyValue::Int16(v) => Some(f64::from(v)),
        AnyValue::Int32(v) => Some(f64::from(v)),
        AnyValue::Int64(v) => Some(v as f64),
        AnyValue::UInt8(v) => Some(f64::from(v)),
        AnyValue::UInt16(v) => Some(f64::from(v)),
        AnyValue::UInt32(v) => Some(f64::from(v)),
        AnyValue::UInt64(v) => Some(v as f64),
        AnyValue::Float32(v) => Some(f64::from(v)),
        AnyValue::Float64(v) => Some(v),
        AnyValue::String(s) => parse_f64(s),
        AnyValue::StringOwned(s) => parse_f64(&s),
        _ => None,
    }
}

/// Parses a string as `f64`; empty and malformed input yield `None`.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_is_empty_string() {
        assert_eq!(any_to_string(AnyValue::Null), "");
    }

    #[test]
    fn integers_and_floats_print_plainly() {
        assert_eq!(any_to_string(AnyValue::Int32(28006)), "28006");
        assert_eq!(any_to_string(AnyValue::Float64(28006.0)), "28006");
        assert_eq!(any_to_string(AnyValue::Float64(12.50)), "12.5");
    }

    #[test]
    fn format_numeric_trims_trailing_zeros() {
        assert_eq!(format_numeric(1.0), "1");
        assert_eq!(format_numeric(1.5), "1.5");
        assert_eq!(format_numeric(0.0), "0");
    }

    #[test]
    fn any_to_f64_parses_strings() {
        assert_eq!(any_to_f64(AnyValue::String("2.5")), Some(2.5));
        assert_eq!(any_to_f64(AnyValue::String("not a number")), None);
        assert_eq!(any_to_f64(AnyValue::Null), None);
    }

    #[test]
    fn parse_f64_rejects_blank() {
        assert_eq!(parse_f64("  "), None);
        assert_eq!(parse_f64(" 7 "), Some(7.0));
    }
}
