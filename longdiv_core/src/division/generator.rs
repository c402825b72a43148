//! # Long-Division Trace Generator
//!
//! Runs grade-school long division one dividend digit at a time and records
//! every intermediate frame as a [`Step`].
//!
//! ## Algorithm
//!
//! For each digit position `i` (with running remainder `R`, initially 0):
//!
//! 1. `candidate = R·10 + digit[i]` (bring-down step, skipped at `i = 0`)
//! 2. `count = ⌊candidate / divisor⌋`, appended to the quotient (trial step)
//! 3. `product = count · divisor` (multiply step, SUBTRACT row)
//! 4. `R = candidate − product` (subtract step, RESULT row)
//!
//! Every value is rounded with [`round_to_precision`] after each operation.
//!
//! Once the natural digits run out, decimal mode keeps going with synthesized
//! zeros until the remainder is zero or [`MAX_FRACTION_DIGITS`] fractional
//! digits have been written. Integer mode stops immediately and reports `R`.
//! No trace ever processes more than [`MAX_DIGIT_POSITIONS`] positions.

use tracing::{debug, debug_span, warn};

use super::step::{Row, RowSnapshot, Step, StepKind};
use crate::errors::{DivError, DivResult};
use crate::numeric::{
    clean_quotient, format_number, fraction_digits, round_to_precision, DigitSequence,
};

/// Fractional quotient digits written in decimal mode before stopping
pub const MAX_FRACTION_DIGITS: usize = 3;

/// Upper bound on digit positions processed by one trace
pub const MAX_DIGIT_POSITIONS: usize = 60;

/// Everything the generator learned while producing a trace.
#[derive(Debug, Clone)]
pub(crate) struct GeneratedSteps {
    pub steps: Vec<Step>,
    /// Cleaned quotient as reported in the final step
    pub quotient: String,
    /// Remainder, present when the quotient has no decimal point
    pub remainder: Option<f64>,
    /// The position ceiling cut the trace short
    pub truncated: bool,
}

/// Generate the step-by-step trace of `dividend ÷ divisor`.
///
/// # Arguments
///
/// * `dividend` - Non-negative, finite number to divide
/// * `divisor` - Positive, finite number to divide by
/// * `allow_decimal_expansion` - Continue past the dividend's digits with
///   synthesized zeros to produce up to three fractional quotient digits
///
/// # Returns
///
/// * `Ok(Vec<Step>)` - Steps in display order; only the last has `is_final`
/// * `Err(DivError::DivisionByZero)` - `divisor == 0`, no steps produced
/// * `Err(DivError::InvalidInput)` - negative or non-finite input, or a
///   divisor so small that a trial count would overflow
///
/// # Example
///
/// ```rust
/// use longdiv_core::division::generate;
///
/// let steps = generate(10.0, 4.0, true).unwrap();
/// let last = steps.last().unwrap();
/// assert!(last.is_final);
/// assert_eq!(last.explanation, "Done! Answer: 2.5.");
///
/// assert!(generate(5.0, 0.0, false).is_err());
/// ```
pub fn generate(
    dividend: f64,
    divisor: f64,
    allow_decimal_expansion: bool,
) -> DivResult<Vec<Step>> {
    generate_trace(dividend, divisor, allow_decimal_expansion).map(|generated| generated.steps)
}

fn push_step(
    steps: &mut Vec<Step>,
    kind: StepKind,
    explanation: String,
    quotient: &str,
    rows: &RowSnapshot,
) {
    steps.push(Step {
        kind,
        explanation,
        quotient_so_far: quotient.to_string(),
        rows: rows.share(),
        is_final: false,
    });
}

pub(crate) fn validate(dividend: f64, divisor: f64) -> DivResult<()> {
    if !dividend.is_finite() {
        return Err(DivError::invalid_input(
            "dividend",
            dividend.to_string(),
            "Dividend must be a finite number",
        ));
    }
    if dividend < 0.0 {
        return Err(DivError::invalid_input(
            "dividend",
            dividend.to_string(),
            "Dividend cannot be negative",
        ));
    }
    if !divisor.is_finite() {
        return Err(DivError::invalid_input(
            "divisor",
            divisor.to_string(),
            "Divisor must be a finite number",
        ));
    }
    if divisor == 0.0 {
        return Err(DivError::division_by_zero(dividend));
    }
    if divisor < 0.0 {
        return Err(DivError::invalid_input(
            "divisor",
            divisor.to_string(),
            "Divisor cannot be negative",
        ));
    }
    // trial counts stay below 10 + 10 / divisor
    if !(10.0 / divisor).is_finite() {
        return Err(DivError::invalid_input(
            "divisor",
            divisor.to_string(),
            "Divisor is too small to divide by",
        ));
    }
    Ok(())
}

pub(crate) fn generate_trace(
    dividend: f64,
    divisor: f64,
    allow_decimal_expansion: bool,
) -> DivResult<GeneratedSteps> {
    validate(dividend, divisor)?;

    let dividend_text = format_number(dividend);
    let divisor_text = format_number(divisor);
    let _span = debug_span!(
        "generate",
        dividend = %dividend_text,
        divisor = %divisor_text,
        decimal = allow_decimal_expansion
    )
    .entered();

    let sequence = DigitSequence::of(dividend);
    let mut digits = sequence.digits;
    let mut steps = Vec::new();
    let mut rows = RowSnapshot::empty();
    let mut quotient = String::new();
    let mut remainder = 0.0_f64;
    let mut decimal_written = false;
    let mut truncated = false;

    push_step(
        &mut steps,
        StepKind::Setup,
        format!("Setup: We will divide {} by {}.", dividend_text, divisor_text),
        &quotient,
        &rows,
    );

    let mut i = 0;
    loop {
        let synthesized = i >= digits.len();
        if synthesized {
            if remainder == 0.0 || !allow_decimal_expansion {
                break;
            }
            if decimal_written && fraction_digits(&quotient) >= MAX_FRACTION_DIGITS {
                break;
            }
        }

        if i >= MAX_DIGIT_POSITIONS {
            warn!(
                positions = MAX_DIGIT_POSITIONS,
                quotient = %quotient,
                "digit position ceiling reached, trace truncated"
            );
            truncated = true;
            break;
        }

        if synthesized {
            digits.push(0);
            if !decimal_written {
                quotient.push('.');
                decimal_written = true;
            }
        }

        if sequence.decimal_position == Some(i) && !decimal_written {
            quotient.push('.');
            decimal_written = true;
        }

        let digit = digits[i];
        let candidate = round_to_precision(remainder * 10.0 + f64::from(digit));

        if i > 0 {
            rows.replace_last(Row::result(candidate, i));
            push_step(
                &mut steps,
                StepKind::BringDown,
                format!("Bring down {}. New target: {}.", digit, format_number(candidate)),
                &quotient,
                &rows,
            );
        }

        let count = round_to_precision(candidate / divisor).floor();
        quotient.push_str(&format_number(count));
        push_step(
            &mut steps,
            StepKind::TrialQuotient,
            format!(
                "{} goes into {} ({}) times.",
                divisor_text,
                format_number(candidate),
                format_number(count)
            ),
            &quotient,
            &rows,
        );

        let product = round_to_precision(count * divisor);
        rows.push(Row::subtract(product, i));
        push_step(
            &mut steps,
            StepKind::Multiply,
            format!(
                "Multiply: {} × {} = {}.",
                format_number(count),
                divisor_text,
                format_number(product)
            ),
            &quotient,
            &rows,
        );

        let next_remainder = round_to_precision(candidate - product);
        rows.push(Row::result(next_remainder, i));
        push_step(
            &mut steps,
            StepKind::Subtract,
            format!(
                "Subtract: {} - {} = {}.",
                format_number(candidate),
                format_number(product),
                format_number(next_remainder)
            ),
            &quotient,
            &rows,
        );

        remainder = next_remainder;
        i += 1;
    }

    let answer = clean_quotient(&quotient);
    let reported_remainder = if decimal_written { None } else { Some(remainder) };
    let explanation = match reported_remainder {
        Some(r) if r > 0.0 => format!("Done! Answer: {} R {}.", answer, format_number(r)),
        _ => format!("Done! Answer: {}.", answer),
    };

    steps.push(Step {
        kind: StepKind::Done,
        explanation,
        quotient_so_far: quotient,
        rows: rows.share(),
        is_final: true,
    });

    debug!(steps = steps.len(), positions = i, quotient = %answer, "trace generated");

    Ok(GeneratedSteps {
        steps,
        quotient: answer,
        remainder: reported_remainder,
        truncated,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn final_step(steps: &[Step]) -> &Step {
        steps.last().expect("trace always has a final step")
    }

    #[test]
    fn test_scenario_exact_integer() {
        // 12 ÷ 4: setup, three steps for "1", four for "2", done
        let generated = generate_trace(12.0, 4.0, false).unwrap();
        assert_eq!(generated.steps.len(), 9);
        assert_eq!(generated.quotient, "3");
        assert_eq!(generated.remainder, Some(0.0));

        let kinds: Vec<StepKind> = generated.steps.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                StepKind::Setup,
                StepKind::TrialQuotient,
                StepKind::Multiply,
                StepKind::Subtract,
                StepKind::BringDown,
                StepKind::TrialQuotient,
                StepKind::Multiply,
                StepKind::Subtract,
                StepKind::Done,
            ]
        );
        assert_eq!(final_step(&generated.steps).explanation, "Done! Answer: 3.");
        assert_eq!(final_step(&generated.steps).quotient_so_far, "03");
    }

    #[test]
    fn test_scenario_integer_with_remainder() {
        let generated = generate_trace(10.0, 4.0, false).unwrap();
        assert_eq!(generated.quotient, "2");
        assert_eq!(generated.remainder, Some(2.0));
        assert_eq!(final_step(&generated.steps).explanation, "Done! Answer: 2 R 2.");
    }

    #[test]
    fn test_scenario_terminating_decimal() {
        let generated = generate_trace(10.0, 4.0, true).unwrap();
        assert_eq!(generated.quotient, "2.5");
        assert_eq!(generated.remainder, None);
        assert!(!generated.truncated);
        assert_eq!(final_step(&generated.steps).quotient_so_far, "02.5");
        assert_eq!(final_step(&generated.steps).explanation, "Done! Answer: 2.5.");
    }

    #[test]
    fn test_scenario_repeating_decimal_is_capped() {
        let generated = generate_trace(1.0, 3.0, true).unwrap();
        assert_eq!(generated.quotient, "0.333");
        assert_eq!(generated.remainder, None);
        assert_eq!(final_step(&generated.steps).explanation, "Done! Answer: 0.333.");
    }

    #[test]
    fn test_scenario_division_by_zero() {
        assert_eq!(generate(5.0, 0.0, false).unwrap_err().error_code(), "DIVISION_BY_ZERO");
        assert_eq!(generate(5.0, 0.0, true).unwrap_err().error_code(), "DIVISION_BY_ZERO");
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        assert_eq!(generate(-5.0, 2.0, false).unwrap_err().error_code(), "INVALID_INPUT");
        assert_eq!(generate(5.0, -2.0, false).unwrap_err().error_code(), "INVALID_INPUT");
        assert_eq!(generate(f64::NAN, 2.0, false).unwrap_err().error_code(), "INVALID_INPUT");
        assert_eq!(generate(5.0, f64::INFINITY, false).unwrap_err().error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_tiny_divisor_rejected() {
        let err = generate(9.0, 5e-324, true).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(err.to_string().contains("too small"));

        let generated = generate_trace(1e-300, 1e-300, false).unwrap();
        assert!(generated.steps.iter().all(|s| !s.quotient_so_far.contains("inf")));
    }

    #[test]
    fn test_explanations_follow_each_operation() {
        let steps = generate(84.0, 4.0, false).unwrap();
        assert_eq!(steps[0].explanation, "Setup: We will divide 84 by 4.");
        assert_eq!(steps[1].explanation, "4 goes into 8 (2) times.");
        assert_eq!(steps[2].explanation, "Multiply: 2 × 4 = 8.");
        assert_eq!(steps[3].explanation, "Subtract: 8 - 8 = 0.");
        assert_eq!(steps[4].explanation, "Bring down 4. New target: 4.");
    }

    #[test]
    fn test_bring_down_replaces_remainder_row() {
        let steps = generate(15.0, 4.0, false).unwrap();
        // after "1": [-0, 1]; bring down 5 turns the remainder row into 15
        assert_eq!(&steps[3].rows[..], &[Row::subtract(0.0, 0), Row::result(1.0, 0)]);
        assert_eq!(steps[4].kind, StepKind::BringDown);
        assert_eq!(&steps[4].rows[..], &[Row::subtract(0.0, 0), Row::result(15.0, 1)]);
    }

    #[test]
    fn test_decimal_point_in_dividend() {
        // 7.5 ÷ 2 in integer mode keeps the natural decimal digit only
        let generated = generate_trace(7.5, 2.0, false).unwrap();
        assert_eq!(generated.quotient, "3.7");
        assert_eq!(generated.remainder, None);

        let generated = generate_trace(7.5, 2.0, true).unwrap();
        assert_eq!(generated.quotient, "3.75");
    }

    #[test]
    fn test_natural_decimal_point_rides_on_bring_down() {
        let steps = generate(7.5, 2.0, false).unwrap();
        let kinds: Vec<StepKind> = steps.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                StepKind::Setup,
                StepKind::TrialQuotient,
                StepKind::Multiply,
                StepKind::Subtract,
                StepKind::BringDown,
                StepKind::TrialQuotient,
                StepKind::Multiply,
                StepKind::Subtract,
                StepKind::Done,
            ]
        );
        assert_eq!(steps[3].quotient_so_far, "3");
        assert_eq!(steps[4].quotient_so_far, "3.");
        assert_eq!(steps[4].explanation, "Bring down 5. New target: 15.");
        assert_eq!(steps[5].quotient_so_far, "3.7");
    }

    #[test]
    fn test_synthesized_decimal_point_rides_on_bring_down() {
        let steps = generate(10.0, 4.0, true).unwrap();
        assert_eq!(steps[7].kind, StepKind::Subtract);
        assert_eq!(steps[7].quotient_so_far, "02");
        assert_eq!(steps[8].kind, StepKind::BringDown);
        assert_eq!(steps[8].quotient_so_far, "02.");
        assert_eq!(steps[8].explanation, "Bring down 0. New target: 20.");
        assert_eq!(steps[9].quotient_so_far, "02.5");
    }

    #[test]
    fn test_quotient_below_one_keeps_leading_zero() {
        let generated = generate_trace(10.0, 30.0, true).unwrap();
        assert_eq!(generated.quotient, "0.333");
        assert_eq!(final_step(&generated.steps).quotient_so_far, "00.333");
    }

    #[test]
    fn test_zero_dividend() {
        let generated = generate_trace(0.0, 7.0, true).unwrap();
        assert_eq!(generated.quotient, "0");
        assert_eq!(generated.remainder, Some(0.0));
        assert_eq!(generated.steps.len(), 5);
    }

    #[test]
    fn test_fractional_divisor() {
        let generated = generate_trace(3.0, 0.5, false).unwrap();
        assert_eq!(generated.quotient, "6");
        assert_eq!(generated.remainder, Some(0.0));
    }

    #[test]
    fn test_ceiling_truncates_long_dividends() {
        let generated = generate_trace(1e70, 7.0, false).unwrap();
        assert!(generated.truncated);
        let positions = generated
            .steps
            .iter()
            .filter(|s| s.kind == StepKind::TrialQuotient)
            .count();
        assert_eq!(positions, MAX_DIGIT_POSITIONS);
        assert!(final_step(&generated.steps).is_final);
    }

    #[test]
    fn test_single_final_step() {
        let steps = generate(1234.0, 7.0, true).unwrap();
        assert_eq!(steps.iter().filter(|s| s.is_final).count(), 1);
        assert!(final_step(&steps).is_final);
    }
}
