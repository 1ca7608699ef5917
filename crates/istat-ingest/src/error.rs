use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    /// Every sheet was rejected during validation; there is nothing to merge.
    #[error("no valid sheets were merged")]
    NoValidSheets,
    #[error("sheet '{label}' not found at {path}")]
    SheetNotFound { label: String, path: PathBuf },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("frame error: {0}")]
    Frame(#[from] polars::error::PolarsError),
    #[error(transparent)]
    Recon(#[from] istat_model::ReconError),
}

pub type Result<T> = std::result::Result<T, IngestError>;
