//! Per-period sheet loading and merging.
//!
//! Each recording period ships as its own CSV extract with a fixed junk
//! preamble and positional column layout. A [`SheetPlan`] describes that
//! layout once; [`merge_sheets`] applies it to every sheet, rejects sheets
//! whose shape drifted, and stacks the survivors into one frame tagged with
//! the period label.

use std::path::PathBuf;

use polars::prelude::{CsvReadOptions, DataFrame, NamedFrom, SerReader, Series};
use tracing::{info, warn};

use crate::error::{IngestError, Result};

/// How every sheet is cleaned before merging.
#[derive(Debug, Clone)]
pub struct SheetPlan {
    /// Preamble lines to skip before the header row.
    pub skip_rows: usize,
    /// Positional indices of columns to drop, counted before renaming.
    pub drop_columns: Vec<usize>,
    /// Clean names assigned after dropping; also the expected column count.
    pub column_names: Vec<String>,
    /// Name of the added period-label column.
    pub period_column: String,
}

impl SheetPlan {
    pub fn new(column_names: Vec<String>) -> Self {
        Self {
            skip_rows: 0,
            drop_columns: Vec::new(),
            column_names,
            period_column: "year".to_string(),
        }
    }

    #[must_use]
    pub fn with_skip_rows(mut self, skip_rows: usize) -> Self {
        self.skip_rows = skip_rows;
        self
    }

    #[must_use]
    pub fn with_dropped_columns(mut self, drop_columns: Vec<usize>) -> Self {
        self.drop_columns = drop_columns;
        self
    }

    #[must_use]
    pub fn with_period_column(mut self, name: impl Into<String>) -> Self {
        self.period_column = name.into();
        self
    }
}

/// One sheet to load: a period label and the file holding that period.
#[derive(Debug, Clone)]
pub struct SheetSource {
    pub label: String,
    pub path: PathBuf,
}

impl SheetSource {
    pub fn new(label: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }
}

/// Loads every sheet, skipping the ones whose column count does not match
/// the plan, and stacks the rest into a single frame.
///
/// All columns are read as strings: identifier columns must not round-trip
/// through numeric inference and lose their leading zeros. A sheet with the
/// wrong shape is logged and skipped, never silently mangled.
///
/// # Errors
///
/// [`IngestError::NoValidSheets`] when nothing survived validation; IO and
/// parse failures propagate as-is.
pub fn merge_sheets(sources: &[SheetSource], plan: &SheetPlan) -> Result<DataFrame> {
    let mut merged: Option<DataFrame> = None;
    let mut kept = 0usize;

    for source in sources {
        let Some(sheet) = load_sheet(source, plan)? else {
            continue;
        };
        kept += 1;
        match merged.as_mut() {
            Some(frame) => {
                frame.vstack_mut(&sheet)?;
            }
            None => merged = Some(sheet),
        }
    }

    match merged {
        Some(frame) => {
            info!(sheets = kept, rows = frame.height(), "merged sheets");
            Ok(frame)
        }
        None => Err(IngestError::NoValidSheets),
    }
}

/// Reads a single headered CSV into a frame, all columns as strings.
///
/// The plain-frame counterpart of [`merge_sheets`] for datasets that arrive
/// already merged.
pub fn read_frame(path: &std::path::Path) -> Result<DataFrame> {
    let frame = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;
    Ok(frame)
}

fn load_sheet(source: &SheetSource, plan: &SheetPlan) -> Result<Option<DataFrame>> {
    if !source.path.exists() {
        return Err(IngestError::SheetNotFound {
            label: source.label.clone(),
            path: source.path.clone(),
        });
    }

    let raw = CsvReadOptions::default()
        .with_has_header(true)
        .with_skip_rows(plan.skip_rows)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(source.path.clone()))?
        .finish()?;

    let names = raw.get_column_names_owned();
    let keep: Vec<_> = names
        .iter()
        .enumerate()
        .filter(|(index, _)| !plan.drop_columns.contains(index))
        .map(|(_, name)| name.clone())
        .collect();
    let mut sheet = raw.select(keep)?;

    if sheet.width() != plan.column_names.len() {
        warn!(
            sheet = %source.label,
            expected = plan.column_names.len(),
            actual = sheet.width(),
            "column count mismatch, skipping sheet"
        );
        return Ok(None);
    }

    sheet.set_column_names(plan.column_names.iter().map(String::as_str))?;
    let labels = vec![source.label.as_str(); sheet.height()];
    sheet.with_column(Series::new(plan.period_column.as_str().into(), labels))?;
    Ok(Some(sheet))
}
