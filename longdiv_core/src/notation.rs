//! # Notation Rendering
//!
//! Lays out one [`Step`] as a text board in one of three notations.
//!
//! ## US
//!
//! ```text
//!    03
//!    --
//! 4) 12
//!  - 0
//!    -
//!    12
//!  - 12
//!    --
//!     0
//! ```
//!
//! ## European
//!
//! ```text
//! 12 | 4
//!    |---
//!    | 03
//! ```
//!
//! ## German
//!
//! ```text
//! 12 : 4 = 03
//! ```
//!
//! Boards are lists of styled segments so each front-end can colour the
//! divisor, the quotient and the subtracted products its own way.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::division::{Row, RowKind, Step};
use crate::layout::{row_indent, widen_dividend};
use crate::numeric::format_number;

/// Written layout of a long division.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Notation {
    /// Divisor left of a bracket, quotient above the dividend
    #[default]
    #[serde(rename = "us")]
    Us,
    /// Dividend and divisor separated by a bar, quotient below the divisor
    #[serde(rename = "eu")]
    European,
    /// `dividend : divisor = quotient` on one line
    #[serde(rename = "ger")]
    German,
}

impl Notation {
    pub const ALL: [Notation; 3] = [Notation::Us, Notation::European, Notation::German];

    pub fn display_name(&self) -> &'static str {
        match self {
            Notation::Us => "US",
            Notation::European => "European",
            Notation::German => "German",
        }
    }

    /// Next notation in [`Notation::ALL`], wrapping around
    pub fn cycle(&self) -> Notation {
        match self {
            Notation::Us => Notation::European,
            Notation::European => Notation::German,
            Notation::German => Notation::Us,
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Highlight class of a board segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentStyle {
    Plain,
    Divisor,
    Quotient,
    Subtrahend,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub text: String,
    pub style: SegmentStyle,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardLine {
    pub segments: Vec<Segment>,
}

impl BoardLine {
    fn new() -> Self {
        BoardLine::default()
    }

    fn plain(mut self, text: impl Into<String>) -> Self {
        self.push(text, SegmentStyle::Plain);
        self
    }

    fn styled(mut self, text: impl Into<String>, style: SegmentStyle) -> Self {
        self.push(text, style);
        self
    }

    fn push(&mut self, text: impl Into<String>, style: SegmentStyle) {
        let text = text.into();
        if !text.is_empty() {
            self.segments.push(Segment { text, style });
        }
    }

    /// Line text without styling
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

/// A rendered step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub lines: Vec<BoardLine>,
}

impl Board {
    pub fn to_plain_text(&self) -> String {
        self.lines
            .iter()
            .map(BoardLine::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_plain_text())
    }
}

/// Render `step` of `dividend_text ÷ divisor_text` in `notation`.
///
/// ```rust
/// use longdiv_core::division::generate;
/// use longdiv_core::notation::{render_step, Notation};
///
/// let steps = generate(12.0, 4.0, false).unwrap();
/// let board = render_step(steps.last().unwrap(), "12", "4", Notation::German);
/// assert_eq!(board.lines[0].text(), "12 : 4 = 03");
/// ```
pub fn render_step(
    step: &Step,
    dividend_text: &str,
    divisor_text: &str,
    notation: Notation,
) -> Board {
    let display = widen_dividend(dividend_text, step.max_digit_index());
    let quotient = if step.quotient_so_far.is_empty() {
        " ".to_string()
    } else {
        step.quotient_so_far.clone()
    };

    let mut lines = Vec::new();
    let left_padding = match notation {
        Notation::Us => {
            let prefix = divisor_text.chars().count() + 2;
            lines.push(
                BoardLine::new()
                    .plain(" ".repeat(prefix))
                    .styled(quotient, SegmentStyle::Quotient),
            );
            lines.push(BoardLine::new().plain(format!(
                "{}{}",
                " ".repeat(prefix),
                "-".repeat(display.chars().count())
            )));
            lines.push(
                BoardLine::new()
                    .styled(divisor_text, SegmentStyle::Divisor)
                    .plain(format!(") {}", display)),
            );
            prefix
        }
        Notation::European => {
            let spacing = " ".repeat(display.chars().count());
            let rule_width = divisor_text.chars().count().max(quotient.chars().count()) + 1;
            lines.push(
                BoardLine::new()
                    .plain(format!("{} | ", display))
                    .styled(divisor_text, SegmentStyle::Divisor),
            );
            lines.push(BoardLine::new().plain(format!("{} |{}", spacing, "-".repeat(rule_width))));
            lines.push(
                BoardLine::new()
                    .plain(format!("{} | ", spacing))
                    .styled(quotient, SegmentStyle::Quotient),
            );
            0
        }
        Notation::German => {
            lines.push(
                BoardLine::new()
                    .plain(format!("{} : ", display))
                    .styled(divisor_text, SegmentStyle::Divisor)
                    .plain(" = ")
                    .styled(quotient, SegmentStyle::Quotient),
            );
            lines.push(BoardLine::new());
            0
        }
    };

    for row in step.rows.iter() {
        render_row(row, &display, left_padding, &mut lines);
    }

    Board { lines }
}

fn render_row(row: &Row, display: &str, left_padding: usize, lines: &mut Vec<BoardLine>) {
    let value = format_number(row.value);
    let width = value.chars().count();
    let indent = row_indent(width, row.digit_index, display, left_padding);

    match row.kind {
        RowKind::Subtract => {
            let line = if indent >= 2 {
                BoardLine::new()
                    .plain(format!("{}- ", " ".repeat(indent - 2)))
                    .styled(value, SegmentStyle::Subtrahend)
            } else {
                BoardLine::new()
                    .plain(" ".repeat(indent))
                    .styled(value, SegmentStyle::Subtrahend)
            };
            lines.push(line);
            let rule = format!("{}{}", " ".repeat(indent), "-".repeat(width));
            lines.push(BoardLine::new().plain(rule));
        }
        RowKind::Result => {
            lines.push(BoardLine::new().plain(format!("{}{}", " ".repeat(indent), value)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::division::generate;

    fn final_board(dividend: f64, divisor: f64, decimal: bool, notation: Notation) -> Board {
        let steps = generate(dividend, divisor, decimal).unwrap();
        let step = steps.last().unwrap();
        render_step(step, &format_number(dividend), &format_number(divisor), notation)
    }

    #[test]
    fn test_us_layout() {
        let board = final_board(12.0, 4.0, false, Notation::Us);
        let expected = [
            "   03",
            "   --",
            "4) 12",
            " - 0",
            "   -",
            "   12",
            " - 12",
            "   --",
            "    0",
        ]
        .join("\n");
        assert_eq!(board.to_plain_text(), expected);
    }

    #[test]
    fn test_european_layout() {
        let board = final_board(12.0, 4.0, false, Notation::European);
        let expected = [
            "12 | 4", "   |---", "   | 03", "0", "-", "12", "12", "--", " 0",
        ]
        .join("\n");
        assert_eq!(board.to_plain_text(), expected);
    }

    #[test]
    fn test_german_layout() {
        let board = final_board(12.0, 4.0, false, Notation::German);
        let expected = ["12 : 4 = 03", "", "0", "-", "12", "12", "--", " 0"].join("\n");
        assert_eq!(board.to_plain_text(), expected);
    }

    #[test]
    fn test_setup_step_has_blank_quotient() {
        let steps = generate(84.0, 4.0, false).unwrap();
        let board = render_step(&steps[0], "84", "4", Notation::Us);
        assert_eq!(board.lines.len(), 3);
        assert_eq!(board.lines[0].text(), "    ");
        assert_eq!(board.lines[2].text(), "4) 84");
    }

    #[test]
    fn test_decimal_expansion_widens_dividend() {
        let board = final_board(10.0, 4.0, true, Notation::German);
        assert_eq!(board.lines[0].text(), "10.0 : 4 = 02.5");
    }

    #[test]
    fn test_segments_carry_highlights() {
        let board = final_board(12.0, 4.0, false, Notation::Us);
        assert_eq!(
            board.lines[0].segments[1],
            Segment {
                text: "03".to_string(),
                style: SegmentStyle::Quotient
            }
        );
        assert_eq!(board.lines[2].segments[0].style, SegmentStyle::Divisor);
        assert!(board.lines[3]
            .segments
            .iter()
            .any(|s| s.style == SegmentStyle::Subtrahend && s.text == "0"));
    }

    #[test]
    fn test_notation_serialization() {
        assert_eq!(serde_json::to_string(&Notation::European).unwrap(), "\"eu\"");
        let parsed: Notation = serde_json::from_str("\"ger\"").unwrap();
        assert_eq!(parsed, Notation::German);
        assert_eq!(Notation::German.cycle(), Notation::Us);
    }
}
