//! # Long Division
//!
//! This module follows the same shape as every calculation in the crate:
//!
//! - [`DivisionInput`] - Input parameters (JSON-serializable)
//! - [`DivisionTrace`] - Complete result: steps, answer, remainder
//! - [`solve`] - Pure function `&DivisionInput -> DivResult<DivisionTrace>`
//!
//! [`generate`] is the lower-level entry point that returns only the steps.
//!
//! ## Example
//!
//! ```rust
//! use longdiv_core::division::{solve, DivisionInput, DivisionMode};
//!
//! let input = DivisionInput::parse("10", "4", DivisionMode::Integer).unwrap();
//! let trace = solve(&input).unwrap();
//!
//! assert_eq!(trace.quotient, "2");
//! assert_eq!(trace.remainder, Some(2.0));
//! assert_eq!(trace.answer_text(), "2 R 2");
//! ```

pub mod generator;
pub mod step;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{DivError, DivResult};
use crate::notation::{render_step, Board, Notation};
use crate::numeric::format_number;

pub use generator::{generate, MAX_DIGIT_POSITIONS, MAX_FRACTION_DIGITS};
pub use step::{Row, RowKind, Step, StepKind};

/// How the division treats digits beyond the dividend's own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DivisionMode {
    /// Stop at the last dividend digit and report a remainder
    #[default]
    Integer,
    /// Continue with zeros to produce fractional quotient digits
    Decimal,
}

impl DivisionMode {
    pub const ALL: [DivisionMode; 2] = [DivisionMode::Integer, DivisionMode::Decimal];

    pub fn allows_decimal_expansion(&self) -> bool {
        matches!(self, DivisionMode::Decimal)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DivisionMode::Integer => "With remainder",
            DivisionMode::Decimal => "Decimal",
        }
    }
}

impl fmt::Display for DivisionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Input parameters for one long division.
///
/// ## JSON Example
///
/// ```json
/// { "dividend": 10.0, "divisor": 4.0, "mode": "decimal" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DivisionInput {
    pub dividend: f64,
    pub divisor: f64,
    pub mode: DivisionMode,
}

impl DivisionInput {
    pub fn new(dividend: f64, divisor: f64, mode: DivisionMode) -> Self {
        DivisionInput {
            dividend,
            divisor,
            mode,
        }
    }

    /// Parse form text into an input.
    ///
    /// Signs are dropped (the tool always divides magnitudes). A zero divisor
    /// parses fine and is rejected by [`solve`].
    ///
    /// ```rust
    /// use longdiv_core::division::{DivisionInput, DivisionMode};
    ///
    /// let input = DivisionInput::parse(" -12.5 ", "4", DivisionMode::Decimal).unwrap();
    /// assert_eq!(input.dividend, 12.5);
    ///
    /// assert!(DivisionInput::parse("", "4", DivisionMode::Integer).is_err());
    /// assert!(DivisionInput::parse("abc", "4", DivisionMode::Integer).is_err());
    /// ```
    pub fn parse(dividend: &str, divisor: &str, mode: DivisionMode) -> DivResult<Self> {
        Ok(DivisionInput {
            dividend: parse_field("dividend", dividend)?,
            divisor: parse_field("divisor", divisor)?,
            mode,
        })
    }

    /// Check the input without generating anything.
    pub fn validate(&self) -> DivResult<()> {
        generator::validate(self.dividend, self.divisor)
    }
}

fn parse_field(field: &str, text: &str) -> DivResult<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(DivError::missing_field(field));
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| DivError::invalid_input(field, trimmed, "Not a number"))?;
    if !value.is_finite() {
        return Err(DivError::invalid_input(field, trimmed, "Must be a finite number"));
    }
    Ok(value.abs())
}

/// A complete long-division run.
///
/// ## JSON Example
///
/// ```json
/// {
///   "input": { "dividend": 10.0, "divisor": 4.0, "mode": "integer" },
///   "dividend_text": "10",
///   "divisor_text": "4",
///   "steps": [ ... ],
///   "quotient": "2",
///   "remainder": 2.0,
///   "truncated": false
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DivisionTrace {
    pub input: DivisionInput,

    /// Dividend as written on the board
    pub dividend_text: String,

    /// Divisor as written on the board
    pub divisor_text: String,

    /// Every frame, ending with exactly one final step
    pub steps: Vec<Step>,

    /// Answer with leading zeros removed
    pub quotient: String,

    /// Integer-style remainder; `None` once the quotient has a decimal point
    pub remainder: Option<f64>,

    /// Generation stopped at [`MAX_DIGIT_POSITIONS`]
    pub truncated: bool,
}

impl DivisionTrace {
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn step(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn final_step(&self) -> Option<&Step> {
        self.steps.last()
    }

    /// Answer as shown to the user, e.g. `"2 R 2"` or `"2.5"`.
    pub fn answer_text(&self) -> String {
        match self.remainder {
            Some(r) if r > 0.0 => format!("{} R {}", self.quotient, format_number(r)),
            _ => self.quotient.clone(),
        }
    }

    /// Render one step in the given notation.
    pub fn render(&self, index: usize, notation: Notation) -> Option<Board> {
        self.step(index)
            .map(|step| render_step(step, &self.dividend_text, &self.divisor_text, notation))
    }
}

/// Solve a long division and keep the full trace.
///
/// # Returns
///
/// * `Ok(DivisionTrace)` - Trace with the cleaned quotient and remainder
/// * `Err(DivError)` - Zero divisor or invalid input; nothing is generated
pub fn solve(input: &DivisionInput) -> DivResult<DivisionTrace> {
    let generated = generator::generate_trace(
        input.dividend,
        input.divisor,
        input.mode.allows_decimal_expansion(),
    )?;

    Ok(DivisionTrace {
        input: *input,
        dividend_text: format_number(input.dividend),
        divisor_text: format_number(input.divisor),
        steps: generated.steps,
        quotient: generated.quotient,
        remainder: generated.remainder,
        truncated: generated.truncated,
    })
}
