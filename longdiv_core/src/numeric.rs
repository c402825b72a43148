//! # Numeric Helpers
//!
//! Rounding and formatting rules shared by the generator and the renderer.
//!
//! - Every intermediate value is rounded to [`ROUNDING_PLACES`] decimal places
//!   so floating-point drift cannot accumulate across digit positions.
//! - Numbers are printed in their shortest round-trip decimal form
//!   (`2`, `2.5`, `0.0000001`), never with a trailing `.0` or an exponent.

/// Decimal places kept after every arithmetic operation
pub const ROUNDING_PLACES: usize = 10;

/// Round `value` to [`ROUNDING_PLACES`] decimal places.
///
/// ```rust
/// use longdiv_core::numeric::round_to_precision;
///
/// assert_eq!(round_to_precision(0.1 + 0.2), 0.3);
/// assert_eq!(round_to_precision(12.0), 12.0);
/// ```
pub fn round_to_precision(value: f64) -> f64 {
    format!("{:.*}", ROUNDING_PLACES, value)
        .parse()
        .unwrap_or(value)
}

/// Format a number the way it is shown in step explanations and on the board.
///
/// ```rust
/// use longdiv_core::numeric::format_number;
///
/// assert_eq!(format_number(2.0), "2");
/// assert_eq!(format_number(2.5), "2.5");
/// assert_eq!(format_number(-0.0), "0");
/// ```
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // -0.0 would otherwise print as "-0"
        return "0".to_string();
    }
    value.to_string()
}

/// Digits of a dividend with the position of its decimal point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitSequence {
    /// Integer digits followed by fractional digits
    pub digits: Vec<u8>,

    /// Number of integer digits, when the dividend has a fractional part
    pub decimal_position: Option<usize>,
}

impl DigitSequence {
    /// Decompose a non-negative number through its decimal text.
    ///
    /// ```rust
    /// use longdiv_core::numeric::DigitSequence;
    ///
    /// let seq = DigitSequence::of(12.5);
    /// assert_eq!(seq.digits, vec![1, 2, 5]);
    /// assert_eq!(seq.decimal_position, Some(2));
    /// ```
    pub fn of(value: f64) -> Self {
        let text = format_number(value);
        let to_digits = |part: &str| -> Vec<u8> {
            part.chars()
                .filter_map(|c| c.to_digit(10))
                .map(|d| d as u8)
                .collect()
        };

        match text.split_once('.') {
            Some((int_part, frac_part)) => {
                let mut digits = to_digits(int_part);
                let decimal_position = digits.len();
                digits.extend(to_digits(frac_part));
                DigitSequence {
                    digits,
                    decimal_position: Some(decimal_position),
                }
            }
            None => DigitSequence {
                digits: to_digits(&text),
                decimal_position: None,
            },
        }
    }
}

/// Number of digits after the decimal point in a quotient string
pub fn fraction_digits(quotient: &str) -> usize {
    quotient
        .split_once('.')
        .map(|(_, frac)| frac.len())
        .unwrap_or(0)
}

/// Strip the leading zeros a digit-by-digit quotient accumulates.
///
/// A single `0` is kept in front of the decimal point for values below one,
/// and an all-zero quotient becomes `"0"`.
///
/// ```rust
/// use longdiv_core::numeric::clean_quotient;
///
/// assert_eq!(clean_quotient("03"), "3");
/// assert_eq!(clean_quotient("02.5"), "2.5");
/// assert_eq!(clean_quotient("00.333"), "0.333");
/// assert_eq!(clean_quotient("000"), "0");
/// ```
pub fn clean_quotient(raw: &str) -> String {
    let trimmed = raw.trim_start_matches('0');
    if trimmed.is_empty() {
        "0".to_string()
    } else if trimmed.starts_with('.') {
        format!("0{}", trimmed)
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounding_removes_drift() {
        // 0.3 - 0.1 is 0.19999999999999998 in binary floating point
        assert_eq!(round_to_precision(0.3 - 0.1), 0.2);
        assert_eq!(round_to_precision(1.23456789012345), 1.2345678901);
        assert_eq!(round_to_precision(0.0), 0.0);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(12.0), "12");
        assert_eq!(format_number(0.25), "0.25");
        assert_eq!(format_number(1e21), "1000000000000000000000");
        assert_eq!(format_number(1e-7), "0.0000001");
    }

    #[test]
    fn test_digit_sequence_integer() {
        let seq = DigitSequence::of(1024.0);
        assert_eq!(seq.digits, vec![1, 0, 2, 4]);
        assert_eq!(seq.decimal_position, None);
    }

    #[test]
    fn test_digit_sequence_below_one() {
        let seq = DigitSequence::of(0.05);
        assert_eq!(seq.digits, vec![0, 0, 5]);
        assert_eq!(seq.decimal_position, Some(1));
    }

    #[test]
    fn test_fraction_digits() {
        assert_eq!(fraction_digits("12"), 0);
        assert_eq!(fraction_digits("0."), 0);
        assert_eq!(fraction_digits("02.50"), 2);
    }

    #[test]
    fn test_clean_quotient_keeps_inner_zeros() {
        assert_eq!(clean_quotient("0105"), "105");
        assert_eq!(clean_quotient("0.05"), "0.05");
        assert_eq!(clean_quotient("3.0"), "3.0");
    }
}
