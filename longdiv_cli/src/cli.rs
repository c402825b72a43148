//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use longdiv_core::{DivisionMode, Notation, Settings};

#[derive(Parser)]
#[command(
    name = "longdiv",
    version,
    about = "Long division, one step at a time",
    long_about = "Work a long division step by step: bring down, trial quotient,\n\
                  multiply, subtract. Prints the written layout in US, European\n\
                  or German notation, or steps through it interactively."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Log output format.
    #[arg(long = "log-format", value_enum, default_value = "pretty", global = true)]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Settings file (default: the per-user config directory).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the finished division (or every step).
    Solve(SolveArgs),

    /// Step through the division in the terminal.
    Play(PlayArgs),

    /// Write the full trace to a JSON document.
    Export(ExportArgs),
}

/// Operands and mode shared by every command.
#[derive(Args, Debug, Clone)]
pub struct DivisionArgs {
    /// Number being divided.
    #[arg(value_name = "DIVIDEND", allow_hyphen_values = true)]
    pub dividend: String,

    /// Number to divide by.
    #[arg(value_name = "DIVISOR", allow_hyphen_values = true)]
    pub divisor: String,

    /// Keep dividing past the last digit to get a decimal answer.
    #[arg(long, conflicts_with = "integer")]
    pub decimal: bool,

    /// Stop at the last digit and report a remainder.
    #[arg(long)]
    pub integer: bool,
}

impl DivisionArgs {
    /// Mode from the flags, or from settings when neither flag is given.
    pub fn mode(&self, settings: &Settings) -> DivisionMode {
        if self.decimal {
            DivisionMode::Decimal
        } else if self.integer {
            DivisionMode::Integer
        } else {
            settings.mode
        }
    }
}

#[derive(Args, Debug)]
pub struct SolveArgs {
    #[command(flatten)]
    pub division: DivisionArgs,

    /// Layout to print.
    #[arg(long, value_enum)]
    pub notation: Option<NotationArg>,

    /// Print every step, not just the final board.
    #[arg(long, conflicts_with = "json")]
    pub steps: bool,

    /// Print the trace as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct PlayArgs {
    #[command(flatten)]
    pub division: DivisionArgs,

    /// Layout to start with (cycle with `n`).
    #[arg(long, value_enum)]
    pub notation: Option<NotationArg>,

    /// Delay between autoplay steps.
    #[arg(long = "interval-ms", value_name = "MS")]
    pub interval_ms: Option<u64>,

    /// Start playing immediately.
    #[arg(long)]
    pub autoplay: bool,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub division: DivisionArgs,

    /// Destination file (conventionally `*.ldt.json`).
    #[arg(short, long, value_name = "PATH")]
    pub output: PathBuf,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum NotationArg {
    Us,
    Eu,
    Ger,
}

impl From<NotationArg> for Notation {
    fn from(arg: NotationArg) -> Self {
        match arg {
            NotationArg::Us => Notation::Us,
            NotationArg::Eu => Notation::European,
            NotationArg::Ger => Notation::German,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_solve() {
        let cli = Cli::try_parse_from([
            "longdiv", "solve", "10", "4", "--decimal", "--notation", "eu",
        ])
        .unwrap();
        let Command::Solve(args) = cli.command else {
            panic!("expected solve");
        };
        assert_eq!(args.division.dividend, "10");
        assert_eq!(args.division.mode(&Settings::default()), DivisionMode::Decimal);
        assert_eq!(args.notation.map(Notation::from), Some(Notation::European));
    }

    #[test]
    fn test_mode_falls_back_to_settings() {
        let cli =
            Cli::try_parse_from(["longdiv", "export", "7", "2", "-o", "out.ldt.json"]).unwrap();
        let Command::Export(args) = cli.command else {
            panic!("expected export");
        };
        let settings = Settings {
            mode: DivisionMode::Decimal,
            ..Settings::default()
        };
        assert_eq!(args.division.mode(&settings), DivisionMode::Decimal);
    }

    #[test]
    fn test_decimal_and_integer_conflict() {
        let conflicting = ["longdiv", "solve", "1", "3", "--decimal", "--integer"];
        assert!(Cli::try_parse_from(conflicting).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "longdiv", "play", "1", "3", "--log-format", "json", "-v",
        ])
        .unwrap();
        assert_eq!(cli.log_format, LogFormatArg::Json);
        assert!(cli.verbosity.is_present());
    }
}
