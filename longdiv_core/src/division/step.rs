//! # Steps and Rows
//!
//! A [`Step`] is one frame of the long-division animation: the explanation
//! shown to the learner, the quotient written so far, and the work-area rows
//! beneath the dividend.
//!
//! Row lists are frozen per step. Steps that leave the work area untouched
//! share the previous step's slice; steps that change it get a fresh copy.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Whether a work-area row holds a running result or a value being subtracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowKind {
    /// Candidate or remainder (printed plain)
    Result,
    /// Product being subtracted (printed with a minus sign and a rule)
    Subtract,
}

/// One line of the work area under the dividend.
///
/// ## JSON Example
///
/// ```json
/// { "value": 12.0, "digit_index": 1, "kind": "subtract" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// Number printed on this row
    pub value: f64,

    /// Logical position (decimal point ignored) of the dividend digit the
    /// value's last character aligns under
    pub digit_index: usize,

    pub kind: RowKind,
}

impl Row {
    pub fn result(value: f64, digit_index: usize) -> Self {
        Row {
            value,
            digit_index,
            kind: RowKind::Result,
        }
    }

    pub fn subtract(value: f64, digit_index: usize) -> Self {
        Row {
            value,
            digit_index,
            kind: RowKind::Subtract,
        }
    }
}

/// Which operation of the algorithm a step shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    /// Opening frame: empty quotient, empty work area
    Setup,
    /// Next digit appended to the remainder
    BringDown,
    /// Quotient digit(s) for the current candidate
    TrialQuotient,
    /// Product of the quotient digit and the divisor
    Multiply,
    /// Candidate minus product
    Subtract,
    /// Final answer
    Done,
}

impl StepKind {
    pub fn label(&self) -> &'static str {
        match self {
            StepKind::Setup => "Setup",
            StepKind::BringDown => "Bring down",
            StepKind::TrialQuotient => "Divide",
            StepKind::Multiply => "Multiply",
            StepKind::Subtract => "Subtract",
            StepKind::Done => "Done",
        }
    }
}

/// One frame of a long-division trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub kind: StepKind,

    /// Human-readable description of what happened in this step
    pub explanation: String,

    /// Quotient digits (and decimal point) written so far, leading zeros kept
    pub quotient_so_far: String,

    /// Work-area rows as they stand after this step
    pub rows: Arc<[Row]>,

    /// True only for the last step of a trace
    pub is_final: bool,
}

impl Step {
    /// Digit index of the right-most column the rows occupy
    pub fn max_digit_index(&self) -> Option<usize> {
        self.rows.iter().map(|row| row.digit_index).max()
    }
}

/// Copy-on-write row list used while a trace is being generated.
#[derive(Debug, Clone)]
pub(crate) struct RowSnapshot {
    current: Arc<[Row]>,
}

impl RowSnapshot {
    pub(crate) fn empty() -> Self {
        RowSnapshot {
            current: Arc::from(Vec::<Row>::new()),
        }
    }

    /// The frozen list to hand to a step
    pub(crate) fn share(&self) -> Arc<[Row]> {
        Arc::clone(&self.current)
    }

    pub(crate) fn push(&mut self, row: Row) {
        let mut rows = self.current.to_vec();
        rows.push(row);
        self.current = Arc::from(rows);
    }

    /// Replace the trailing remainder row with the next candidate.
    pub(crate) fn replace_last(&mut self, row: Row) {
        let mut rows = self.current.to_vec();
        rows.pop();
        rows.push(row);
        self.current = Arc::from(rows);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshots_are_frozen() {
        let mut snapshot = RowSnapshot::empty();
        snapshot.push(Row::subtract(8.0, 0));
        let before = snapshot.share();

        snapshot.push(Row::result(1.0, 0));
        let after = snapshot.share();

        assert_eq!(before.len(), 1);
        assert_eq!(after.len(), 2);
        assert_eq!(after[0], before[0]);
    }

    #[test]
    fn test_unchanged_rows_are_shared() {
        let mut snapshot = RowSnapshot::empty();
        snapshot.push(Row::result(3.0, 0));
        assert!(Arc::ptr_eq(&snapshot.share(), &snapshot.share()));
    }

    #[test]
    fn test_replace_last() {
        let mut snapshot = RowSnapshot::empty();
        snapshot.push(Row::subtract(8.0, 0));
        snapshot.push(Row::result(1.0, 0));
        snapshot.replace_last(Row::result(15.0, 1));

        let rows = snapshot.share();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], Row::result(15.0, 1));
    }

    #[test]
    fn test_row_kind_serialization() {
        let json = serde_json::to_string(&Row::subtract(12.0, 1)).unwrap();
        assert_eq!(json, r#"{"value":12.0,"digit_index":1,"kind":"subtract"}"#);
    }
}
