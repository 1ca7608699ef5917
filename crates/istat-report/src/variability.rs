//! Per-column variability measures.

use polars::prelude::{AnyValue, DataFrame};
use serde::{Deserialize, Serialize};

use istat_common::any_to_f64;
use istat_model::{ReconError, Result};

/// Variability measures for one column.
///
/// Measures that are undefined for the observed values (median of nothing,
/// sample deviation of a single value, coefficient of a zero mean) are
/// `None` rather than NaN so they serialize cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnStats {
    pub column: String,
    /// Cells that parsed as numbers.
    pub count: usize,
    pub mean: Option<f64>,
    pub median: Option<f64>,
    pub range: Option<f64>,
    pub std_dev: Option<f64>,
    pub coeff_var: Option<f64>,
}

/// Computes variability measures for each listed column.
///
/// Non-numeric and null cells are ignored; a column that exists but holds
/// no parseable numbers still gets a row, with every measure undefined.
///
/// # Errors
///
/// [`ReconError::InvalidInput`] when a listed column is missing.
pub fn variability(df: &DataFrame, columns: &[&str]) -> Result<Vec<ColumnStats>> {
    columns
        .iter()
        .map(|name| column_stats(df, name))
        .collect()
}

fn column_stats(df: &DataFrame, name: &str) -> Result<ColumnStats> {
    let column = df
        .column(name)
        .map_err(|_| ReconError::InvalidInput(format!("column '{name}' not found in frame")))?;

    let mut values = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        if let Some(v) = any_to_f64(column.get(idx).unwrap_or(AnyValue::Null))
            && v.is_finite()
        {
            values.push(v);
        }
    }
    values.sort_by(f64::total_cmp);

    let count = values.len();
    let mean = (count > 0).then(|| values.iter().sum::<f64>() / count as f64);
    let median = median_of_sorted(&values);
    let range = (count > 0).then(|| values[count - 1] - values[0]);
    let std_dev = sample_std(&values, mean);
    let coeff_var = match (std_dev, mean) {
        (Some(sd), Some(m)) if m != 0.0 => Some(sd / m),
        _ => None,
    };

    Ok(ColumnStats {
        column: name.to_string(),
        count,
        mean,
        median,
        range,
        std_dev,
        coeff_var,
    })
}

fn median_of_sorted(values: &[f64]) -> Option<f64> {
    let n = values.len();
    if n == 0 {
        return None;
    }
    if n % 2 == 1 {
        Some(values[n / 2])
    } else {
        Some((values[n / 2 - 1] + values[n / 2]) / 2.0)
    }
}

/// Sample standard deviation (n − 1 denominator); undefined below two
/// observations.
fn sample_std(values: &[f64], mean: Option<f64>) -> Option<f64> {
    let n = values.len();
    if n < 2 {
        return None;
    }
    let mean = mean?;
    let sum_sq: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    Some((sum_sq / (n - 1) as f64).sqrt())
}
