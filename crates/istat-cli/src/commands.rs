//! Subcommand implementations.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use tracing::info;

use istat_ingest::{
    SheetPlan, SheetSource, load_supersession_map, load_valid_codes, merge_sheets, read_frame,
};
use istat_map::suggest_matches;
use istat_model::{CodeStatus, MatchSuggestion};
use istat_normalize::canonicalize;
use istat_report::{ColumnStats, variability};
use istat_resolve::resolve;
use istat_transform::{apply_resolution, column_values, distinct_codes, pad_codes};

use crate::cli::{MergeArgs, ResolveArgs, SuggestArgs, SummaryArgs};

pub struct MergeOutcome {
    pub rows: usize,
    pub out: PathBuf,
}

pub fn run_merge(args: &MergeArgs) -> Result<MergeOutcome> {
    let sources = args
        .sheets
        .iter()
        .map(|raw| parse_sheet_arg(raw))
        .collect::<Result<Vec<_>>>()?;
    let plan = SheetPlan::new(args.columns.clone())
        .with_skip_rows(args.skip_rows)
        .with_dropped_columns(args.drop_cols.clone())
        .with_period_column(args.period_column.as_str());

    let mut merged = merge_sheets(&sources, &plan)?;
    write_frame(&mut merged, &args.out)?;
    info!(rows = merged.height(), out = %args.out.display(), "merge complete");
    Ok(MergeOutcome {
        rows: merged.height(),
        out: args.out.clone(),
    })
}

pub fn run_suggest(args: &SuggestArgs) -> Result<Vec<MatchSuggestion>> {
    let source_frame = read_frame(&args.source)?;
    let target_frame = read_frame(&args.target)?;

    let mut source_names = column_values(&source_frame, &args.column)?;
    let mut target_names = column_values(&target_frame, &args.column)?;
    if args.canonicalize {
        source_names = canonicalize_all(&source_names);
        target_names = canonicalize_all(&target_names);
    }

    Ok(suggest_matches(&source_names, &target_names)?)
}

pub struct ResolveOutcome {
    pub rows: usize,
    pub valid: usize,
    pub changed: usize,
    pub suppressed: usize,
    pub out: PathBuf,
}

pub fn run_resolve(args: &ResolveArgs) -> Result<ResolveOutcome> {
    let mut frame = read_frame(&args.data)?;
    if let Some(width) = args.pad_width {
        pad_codes(&mut frame, &[args.column.as_str()], width)?;
    }

    let map = load_supersession_map(&args.map)
        .with_context(|| format!("load supersession map {}", args.map.display()))?;
    let valid = load_valid_codes(&args.valid)
        .with_context(|| format!("load valid codes {}", args.valid.display()))?;

    let codes = distinct_codes(&frame, &args.column)?;
    let records = resolve(&codes, &map, &valid);
    apply_resolution(&mut frame, &args.column, &records)?;

    let mut outcome = ResolveOutcome {
        rows: frame.height(),
        valid: 0,
        changed: 0,
        suppressed: 0,
        out: args.out.clone(),
    };
    for code in column_values(&frame, &args.column)? {
        let status = records
            .get(&code)
            .map_or(CodeStatus::Suppressed, |record| record.status());
        match status {
            CodeStatus::Valid => outcome.valid += 1,
            CodeStatus::Changed => outcome.changed += 1,
            CodeStatus::Suppressed => outcome.suppressed += 1,
        }
    }

    write_frame(&mut frame, &args.out)?;
    info!(
        valid = outcome.valid,
        changed = outcome.changed,
        suppressed = outcome.suppressed,
        "resolution complete"
    );
    Ok(outcome)
}

pub fn run_summary(args: &SummaryArgs) -> Result<Vec<ColumnStats>> {
    let frame = read_frame(&args.data)?;
    let columns: Vec<&str> = args.columns.iter().map(String::as_str).collect();
    Ok(variability(&frame, &columns)?)
}

fn canonicalize_all(names: &[String]) -> Vec<String> {
    names
        .iter()
        .map(|name| canonicalize(Some(name)))
        .collect()
}

fn parse_sheet_arg(raw: &str) -> Result<SheetSource> {
    match raw.split_once('=') {
        Some((label, path)) if !label.is_empty() && !path.is_empty() => {
            Ok(SheetSource::new(label, path))
        }
        _ => bail!("sheet argument '{raw}' is not in LABEL=PATH form"),
    }
}

fn write_frame(frame: &mut DataFrame, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    CsvWriter::new(file)
        .finish(frame)
        .with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
