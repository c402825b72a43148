//! # Longdiv CLI Application
//!
//! Prints long divisions step by step, exports traces, and runs a Ratatui
//! stepper with autoplay.

use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use clap::Parser;
use longdiv_core::{DivisionInput, Notation, Settings};

mod cli;
mod commands;
mod logging;
mod tui;

use crate::cli::{Cli, Command, LogFormatArg};
use crate::commands::{load_settings, run_export, run_solve};
use crate::logging::{init_logging, LogConfig, LogFormat};

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // The stepper owns the terminal, so it only logs to a file.
    let interactive = matches!(cli.command, Command::Play(_));
    if !interactive || cli.log_file.is_some() {
        init_logging(&log_config_from_cli(&cli)).context("failed to initialize logging")?;
    }

    let settings = load_settings(cli.config.as_deref())?;

    match &cli.command {
        Command::Solve(args) => run_solve(args, &settings, &mut io::stdout().lock()),
        Command::Export(args) => run_export(args, &settings),
        Command::Play(args) => {
            let input = DivisionInput::parse(
                &args.division.dividend,
                &args.division.divisor,
                args.division.mode(&settings),
            )?;
            let settings = Settings {
                autoplay_interval_ms: args.interval_ms.unwrap_or(settings.autoplay_interval_ms),
                ..settings
            };
            let options = tui::PlayOptions {
                notation: args.notation.map(Notation::from).unwrap_or(settings.notation),
                interval: settings.autoplay_interval(),
                autoplay: args.autoplay,
            };
            tui::run(input, options)
        }
    }
}

/// Build logging configuration from CLI flags.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        use_env_filter: !cli.verbosity.is_present(),
        with_timestamps: cli.log_file.is_some(),
        with_ansi: cli.log_file.is_none() && io::stderr().is_terminal(),
        format: match cli.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        },
        log_file: cli.log_file.clone(),
    }
}
