//! istat-recon CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};

mod cli;
mod commands;
mod logging;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg};
use crate::commands::{run_merge, run_resolve, run_suggest, run_summary};
use crate::logging::{LogConfig, LogFormat, init_logging};
use crate::summary::{print_merge, print_resolution, print_suggestions, print_variability};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    init_logging(&log_config_from_cli(&cli));

    let exit_code = match &cli.command {
        Command::Merge(args) => report(run_merge(args).map(|outcome| print_merge(&outcome))),
        Command::Suggest(args) => {
            report(run_suggest(args).map(|suggestions| print_suggestions(&suggestions)))
        }
        Command::Resolve(args) => {
            report(run_resolve(args).map(|outcome| print_resolution(&outcome)))
        }
        Command::Summary(args) => report(run_summary(args).map(|stats| print_variability(&stats))),
    };
    std::process::exit(exit_code);
}

fn report(result: anyhow::Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        format: match cli.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        },
        with_ansi: match cli.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => io::stderr().is_terminal(),
        },
    }
}
