//! Logging setup built on `tracing` and `tracing-subscriber`.
//!
//! The subscriber writes to stderr so command output on stdout stays
//! machine-readable. `RUST_LOG` overrides the verbosity flags when set.

use std::io;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable output with colors.
    #[default]
    Pretty,
    /// Compact single-line output.
    Compact,
    /// JSON lines for machine parsing.
    Json,
}

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level_filter: LevelFilter,
    pub format: LogFormat,
    pub with_ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::WARN,
            format: LogFormat::default(),
            with_ansi: true,
        }
    }
}

/// Initialize the global tracing subscriber.
///
/// # Panics
///
/// Panics if called more than once in a process.
pub fn init_logging(config: &LogConfig) {
    let filter = build_env_filter(config.level_filter);

    match config.format {
        LogFormat::Json => {
            let layer = fmt::layer().json().with_writer(io::stderr);
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .init();
        }
        LogFormat::Compact => {
            let layer = fmt::layer()
                .compact()
                .with_writer(io::stderr)
                .with_ansi(config.with_ansi)
                .without_time();
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .init();
        }
        LogFormat::Pretty => {
            let layer = fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(config.with_ansi)
                .without_time();
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .init();
        }
    }
}

/// Build an `EnvFilter` from the given level, respecting `RUST_LOG`.
fn build_env_filter(level: LevelFilter) -> EnvFilter {
    let level_str = level.to_string().to_lowercase();

    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        // Keep external crates at warn; our crates follow the flag.
        EnvFilter::new(format!(
            "warn,istat_cli={level},istat_ingest={level},istat_map={level},\
             istat_resolve={level},istat_transform={level},istat_report={level}",
            level = level_str
        ))
    })
}
