//! # longdiv_core - Step-by-Step Long Division Engine
//!
//! `longdiv_core` turns a division into the sequence of frames you would
//! write on a classroom board: bring down a digit, find the trial quotient,
//! multiply, subtract, repeat. Every frame is a plain value, so front-ends
//! only render and step through them.
//!
//! ## Design Philosophy
//!
//! - **Stateless generation**: [`solve`] is a pure function from input to trace
//! - **JSON-First**: All data types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Render anywhere**: Boards are styled text, not widgets
//!
//! ## Quick Start
//!
//! ```rust
//! use longdiv_core::{solve, DivisionInput, DivisionMode, Notation};
//!
//! let input = DivisionInput::parse("10", "4", DivisionMode::Decimal).unwrap();
//! let trace = solve(&input).unwrap();
//! assert_eq!(trace.quotient, "2.5");
//!
//! let board = trace.render(trace.step_count() - 1, Notation::German).unwrap();
//! assert_eq!(board.lines[0].text(), "10.0 : 4 = 02.5");
//! ```
//!
//! ## Modules
//!
//! - [`division`] - Trace generator, steps and rows
//! - [`layout`] - Row-to-column mapping for the work area
//! - [`notation`] - US / European / German board rendering
//! - [`session`] - Cursor and autoplay controller for front-ends
//! - [`settings`] - User preferences
//! - [`document`] - Versioned trace document
//! - [`file_io`] - Atomic saves and version-checked loads
//! - [`errors`] - Structured error types
//! - [`numeric`] - Rounding and number formatting helpers

pub mod division;
pub mod document;
pub mod errors;
pub mod file_io;
pub mod layout;
pub mod notation;
pub mod numeric;
pub mod session;
pub mod settings;

// Re-export commonly used types at crate root for convenience
pub use division::{
    generate, solve, DivisionInput, DivisionMode, DivisionTrace, Row, RowKind, Step, StepKind,
};
pub use document::TraceDocument;
pub use errors::{DivError, DivResult};
pub use file_io::{load_trace, save_trace};
pub use notation::{Board, Notation};
pub use session::{Session, SessionState};
pub use settings::Settings;
