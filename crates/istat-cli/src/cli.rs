//! CLI argument definitions for istat-recon.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "istat-recon",
    version,
    about = "Reconcile ISTAT municipality codes and names across dataset vintages",
    long_about = "Reconcile administrative datasets recorded in different periods.\n\n\
                  Merges per-period extracts, suggests matches for renamed\n\
                  municipalities, and resolves stale ISTAT codes against the\n\
                  current valid set."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for humans, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Merge per-period CSV sheets into one dataset.
    Merge(MergeArgs),

    /// Suggest fuzzy matches for names missing from a target dataset.
    Suggest(SuggestArgs),

    /// Resolve stale codes against the valid set and supersession table.
    Resolve(ResolveArgs),

    /// Print variability statistics for numeric columns.
    Summary(SummaryArgs),
}

#[derive(Parser)]
pub struct MergeArgs {
    /// Sheets to merge, each as LABEL=PATH (e.g. 2001=data/2001.csv).
    #[arg(value_name = "LABEL=PATH", required = true)]
    pub sheets: Vec<String>,

    /// Preamble rows to skip before the header in every sheet.
    #[arg(long, default_value_t = 0)]
    pub skip_rows: usize,

    /// Positional column indices to drop, before renaming.
    #[arg(long, value_delimiter = ',')]
    pub drop_cols: Vec<usize>,

    /// Clean column names to assign after dropping.
    #[arg(long, value_delimiter = ',', required = true)]
    pub columns: Vec<String>,

    /// Name of the added period-label column.
    #[arg(long, default_value = "year")]
    pub period_column: String,

    /// Output CSV path.
    #[arg(long, value_name = "PATH")]
    pub out: PathBuf,
}

#[derive(Parser)]
pub struct SuggestArgs {
    /// Dataset whose names need matching.
    #[arg(value_name = "SOURCE_CSV")]
    pub source: PathBuf,

    /// Dataset supplying the candidate names.
    #[arg(value_name = "TARGET_CSV")]
    pub target: PathBuf,

    /// Name column present in both datasets.
    #[arg(long)]
    pub column: String,

    /// Canonicalize names (accents, case, punctuation) before matching.
    #[arg(long)]
    pub canonicalize: bool,
}

#[derive(Parser)]
pub struct ResolveArgs {
    /// Dataset containing the code column to resolve.
    #[arg(value_name = "DATA_CSV")]
    pub data: PathBuf,

    /// Code column to resolve.
    #[arg(long)]
    pub column: String,

    /// Two-column supersession CSV (old_code,new_code).
    #[arg(long, value_name = "PATH")]
    pub map: PathBuf,

    /// One-column CSV of currently valid codes.
    #[arg(long, value_name = "PATH")]
    pub valid: PathBuf,

    /// Zero-pad the code column to this width before resolving.
    #[arg(long)]
    pub pad_width: Option<usize>,

    /// Output CSV path for the annotated dataset.
    #[arg(long, value_name = "PATH")]
    pub out: PathBuf,
}

#[derive(Parser)]
pub struct SummaryArgs {
    /// Dataset to profile.
    #[arg(value_name = "DATA_CSV")]
    pub data: PathBuf,

    /// Numeric columns to summarize.
    #[arg(long, value_delimiter = ',', required = true)]
    pub columns: Vec<String>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
