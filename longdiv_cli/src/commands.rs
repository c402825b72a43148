//! Non-interactive commands: `solve` and `export`.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use longdiv_core::division::MAX_DIGIT_POSITIONS;
use longdiv_core::file_io::{load_settings_or_default, save_trace};
use longdiv_core::{solve, DivisionInput, DivisionTrace, Notation, Settings};
use tracing::{debug, info};

use crate::cli::{DivisionArgs, ExportArgs, SolveArgs};

/// Settings from `path`, or from the per-user config file.
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => match Settings::default_path() {
            Some(path) => path,
            None => {
                debug!("no config directory on this platform, using default settings");
                return Ok(Settings::default());
            }
        },
    };
    load_settings_or_default(&path)
        .with_context(|| format!("failed to load settings from {}", path.display()))
}

/// Parse the operands and solve.
pub fn solve_division(args: &DivisionArgs, settings: &Settings) -> Result<DivisionTrace> {
    let input = DivisionInput::parse(&args.dividend, &args.divisor, args.mode(settings))?;
    let trace = solve(&input)?;
    debug!(steps = trace.step_count(), answer = %trace.answer_text(), "solved");
    Ok(trace)
}

pub fn run_solve(args: &SolveArgs, settings: &Settings, out: &mut impl Write) -> Result<()> {
    let trace = solve_division(&args.division, settings)?;

    if args.json {
        let json = serde_json::to_string_pretty(&trace).context("failed to serialize trace")?;
        writeln!(out, "{json}")?;
        return Ok(());
    }

    let notation = args.notation.map(Notation::from).unwrap_or(settings.notation);
    if args.steps || settings.show_all_steps {
        write_all_steps(&trace, notation, out)
    } else {
        write_final(&trace, notation, out)
    }
}

pub fn run_export(args: &ExportArgs, settings: &Settings) -> Result<()> {
    let trace = solve_division(&args.division, settings)?;
    save_trace(&trace, &args.output)
        .with_context(|| format!("failed to export trace to {}", args.output.display()))?;
    info!(path = %args.output.display(), "trace exported");
    println!("Wrote {} steps to {}", trace.step_count(), args.output.display());
    Ok(())
}

fn write_final(trace: &DivisionTrace, notation: Notation, out: &mut impl Write) -> Result<()> {
    if let Some(board) = trace.render(trace.step_count().saturating_sub(1), notation) {
        writeln!(out, "{board}")?;
        writeln!(out)?;
    }
    writeln!(out, "Answer: {}", trace.answer_text())?;
    write_truncation_note(trace, out)
}

fn write_all_steps(trace: &DivisionTrace, notation: Notation, out: &mut impl Write) -> Result<()> {
    let total = trace.step_count();
    for (index, step) in trace.steps.iter().enumerate() {
        writeln!(out, "Step {}/{} - {}", index + 1, total, step.kind.label())?;
        if let Some(board) = trace.render(index, notation) {
            writeln!(out, "{board}")?;
        }
        writeln!(out, "{}", step.explanation)?;
        writeln!(out)?;
    }
    write_truncation_note(trace, out)
}

fn write_truncation_note(trace: &DivisionTrace, out: &mut impl Write) -> Result<()> {
    if trace.truncated {
        writeln!(out, "(stopped after {MAX_DIGIT_POSITIONS} digit positions)")?;
    }
    Ok(())
}
