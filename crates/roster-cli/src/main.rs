//! Roster import cleaner CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};

use roster_cli::logging::{LogConfig, LogFormat, init_logging};
use roster_model::ImportKind;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg};
use crate::commands::run;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    init_logging(&log_config_from_cli(&cli));

    let kind = match cli.command {
        Command::Clients => ImportKind::Client,
        Command::Staff => ImportKind::Staff,
    };
    if let Err(error) = run(kind, &cli.data_dir) {
        eprintln!("error: {error:#}");
        std::process::exit(1);
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
        use_env_filter: !cli.verbosity.is_present(),
    }
}
