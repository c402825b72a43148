//! UI module for the long division stepper
//!
//! # Panel Structure
//! - `toolbar` - Title, notation picker, export
//! - `input_panel` - Left: dividend, divisor, mode, Solve
//! - `board_panel` - Right: rendered board and step explanation
//! - `controls` - Prev / Next / Auto / Reset
//! - `status_bar` - Step position and status messages

pub mod board_panel;
pub mod controls;
pub mod input_panel;
pub mod status_bar;
pub mod toolbar;
