//! # Work-Area Layout
//!
//! Maps a row's logical `digit_index` onto a character column of the
//! dividend as it is printed on the board.
//!
//! The printed dividend can be wider than the number itself: once decimal
//! expansion brings down synthesized zeros, those zeros (and a decimal point,
//! if the dividend had none) are appended so every row has a digit to sit
//! under.
//!
//! ```text
//!   dividend "10", rows reach digit_index 2  ->  "10.0"
//!   digit_index 2 -> column 3 (the '.' at column 2 is skipped)
//! ```

/// Widen the printed dividend so `max_digit_index` has a column.
///
/// ```rust
/// use longdiv_core::layout::widen_dividend;
///
/// assert_eq!(widen_dividend("10", Some(3)), "10.00");
/// assert_eq!(widen_dividend("1.5", Some(3)), "1.500");
/// assert_eq!(widen_dividend("125", Some(1)), "125");
/// assert_eq!(widen_dividend("125", None), "125");
/// ```
pub fn widen_dividend(dividend_text: &str, max_digit_index: Option<usize>) -> String {
    let mut display = dividend_text.to_string();
    let Some(max_index) = max_digit_index else {
        return display;
    };

    let digit_count = dividend_text.chars().filter(|c| *c != '.').count();
    let extra_zeros = (max_index + 1).saturating_sub(digit_count);
    if extra_zeros > 0 {
        if !display.contains('.') {
            display.push('.');
        }
        display.push_str(&"0".repeat(extra_zeros));
    }
    display
}

/// Column of the digit at logical position `digit_index` in `display`.
///
/// Digits are counted left to right with the decimal point skipped. When the
/// display runs out before `digit_index` is reached, the last column is used.
///
/// ```rust
/// use longdiv_core::layout::anchor_column;
///
/// assert_eq!(anchor_column(0, "12.5"), 0);
/// assert_eq!(anchor_column(2, "12.5"), 3);
/// assert_eq!(anchor_column(9, "12.5"), 3);
/// ```
pub fn anchor_column(digit_index: usize, display: &str) -> usize {
    let mut logical = 0;
    let mut last_column = 0;
    for (column, c) in display.chars().enumerate() {
        last_column = column;
        if c == '.' {
            continue;
        }
        if logical == digit_index {
            return column;
        }
        logical += 1;
    }
    last_column
}

/// Leading spaces that right-align `value_width` characters on the anchor
/// column of `digit_index`, after `left_padding` columns of board prefix.
///
/// ```rust
/// use longdiv_core::layout::row_indent;
///
/// // "4) " prefix, value "12" under digit 1 of "12"
/// assert_eq!(row_indent(2, 1, "12", 3), 3);
/// ```
pub fn row_indent(
    value_width: usize,
    digit_index: usize,
    display: &str,
    left_padding: usize,
) -> usize {
    let end_column = left_padding + anchor_column(digit_index, display);
    (end_column + 1).saturating_sub(value_width)
}
