//! # Stepping Session
//!
//! [`Session`] is the controller a front-end keeps for the lifetime of its
//! window: it owns the current trace, the cursor into it, and the autoplay
//! handle.
//!
//! ## States
//!
//! ```text
//! Empty --generate--> At(0) --next--> At(1) ... At(last, final)
//!                        <--prev--
//! any --reset--> Empty
//! ```
//!
//! ## Autoplay
//!
//! The session never owns a thread or a timer. The handle only records the
//! interval and the next deadline; the caller drives the clock, either by
//! calling [`Session::tick`] from its own timer (GUI) or by polling
//! [`Session::poll_autoplay`] with the current instant (TUI).
//!
//! ```rust
//! use std::time::{Duration, Instant};
//! use longdiv_core::division::{DivisionInput, DivisionMode};
//! use longdiv_core::session::Session;
//!
//! let mut session = Session::new();
//! session.generate(&DivisionInput::new(12.0, 4.0, DivisionMode::Integer)).unwrap();
//! assert_eq!(session.cursor(), Some(0));
//!
//! let start = Instant::now();
//! session.start_autoplay(Duration::from_millis(500), start);
//! assert_eq!(session.cursor(), Some(1));
//!
//! session.poll_autoplay(start + Duration::from_millis(500));
//! assert_eq!(session.cursor(), Some(2));
//! ```

use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::division::{solve, DivisionInput, DivisionTrace, Step};
use crate::errors::DivResult;
use crate::notation::{Board, Notation};

/// Where the cursor is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Nothing generated (or reset)
    Empty,
    /// Showing step `index`
    At { index: usize, is_final: bool },
}

/// Active autoplay timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoplayHandle {
    interval: Duration,
    next_due: Instant,
}

impl AutoplayHandle {
    fn new(interval: Duration, now: Instant) -> Self {
        AutoplayHandle {
            interval,
            next_due: now + interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn next_due(&self) -> Instant {
        self.next_due
    }
}

/// Trace, cursor and autoplay state for one front-end.
#[derive(Debug, Clone, Default)]
pub struct Session {
    trace: Option<DivisionTrace>,
    cursor: usize,
    autoplay: Option<AutoplayHandle>,
}

impl Session {
    pub fn new() -> Self {
        Session::default()
    }

    /// Solve `input` and show its first step.
    ///
    /// Autoplay is cancelled. On error the session is left as it was.
    pub fn generate(&mut self, input: &DivisionInput) -> DivResult<&DivisionTrace> {
        let trace = solve(input)?;
        debug!(steps = trace.step_count(), quotient = %trace.quotient, "session loaded new trace");
        self.autoplay = None;
        self.cursor = 0;
        Ok(self.trace.insert(trace))
    }

    /// Clear the trace, the cursor and any autoplay.
    pub fn reset(&mut self) {
        trace!("session reset");
        self.trace = None;
        self.cursor = 0;
        self.autoplay = None;
    }

    pub fn state(&self) -> SessionState {
        match &self.trace {
            None => SessionState::Empty,
            Some(trace) => SessionState::At {
                index: self.cursor,
                is_final: self.cursor + 1 == trace.step_count(),
            },
        }
    }

    pub fn trace(&self) -> Option<&DivisionTrace> {
        self.trace.as_ref()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.trace.as_ref().map(|_| self.cursor)
    }

    pub fn step_count(&self) -> usize {
        self.trace.as_ref().map_or(0, DivisionTrace::step_count)
    }

    pub fn current_step(&self) -> Option<&Step> {
        self.trace.as_ref().and_then(|trace| trace.step(self.cursor))
    }

    /// Render the current step.
    pub fn current_board(&self, notation: Notation) -> Option<Board> {
        self.trace.as_ref().and_then(|trace| trace.render(self.cursor, notation))
    }

    pub fn can_go_back(&self) -> bool {
        self.trace.is_some() && self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.step_count()
    }

    pub fn is_at_final(&self) -> bool {
        matches!(self.state(), SessionState::At { is_final: true, .. })
    }

    /// Advance one step. Returns `false` at the final step or when empty.
    pub fn next(&mut self) -> bool {
        if !self.can_go_forward() {
            return false;
        }
        self.cursor += 1;
        trace!(cursor = self.cursor, "next step");
        true
    }

    /// Go back one step. Returns `false` at the first step or when empty.
    pub fn prev(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        self.cursor -= 1;
        trace!(cursor = self.cursor, "previous step");
        true
    }

    pub fn autoplay(&self) -> Option<&AutoplayHandle> {
        self.autoplay.as_ref()
    }

    pub fn is_autoplaying(&self) -> bool {
        self.autoplay.is_some()
    }

    /// Start autoplay and take the first step right away.
    ///
    /// At the final step the session rewinds to the first step instead.
    /// Returns whether autoplay is running afterwards.
    pub fn start_autoplay(&mut self, interval: Duration, now: Instant) -> bool {
        if self.trace.is_none() {
            return false;
        }
        if self.is_at_final() {
            self.cursor = 0;
        } else {
            self.next();
        }

        if self.is_at_final() {
            self.autoplay = None;
        } else {
            debug!(
                interval_ms = interval.as_millis() as u64,
                cursor = self.cursor,
                "autoplay started"
            );
            self.autoplay = Some(AutoplayHandle::new(interval, now));
        }
        self.autoplay.is_some()
    }

    /// Cancel autoplay. Returns whether it was running.
    pub fn stop_autoplay(&mut self) -> bool {
        let was_running = self.autoplay.take().is_some();
        if was_running {
            debug!(cursor = self.cursor, "autoplay stopped");
        }
        was_running
    }

    /// Start or stop autoplay. Returns whether it is running afterwards.
    pub fn toggle_autoplay(&mut self, interval: Duration, now: Instant) -> bool {
        if self.stop_autoplay() {
            false
        } else {
            self.start_autoplay(interval, now)
        }
    }

    /// One autoplay timer tick: advance, stopping at the final step.
    ///
    /// Returns whether the cursor moved. Does nothing without autoplay.
    pub fn tick(&mut self) -> bool {
        if self.autoplay.is_none() {
            return false;
        }
        let moved = self.next();
        if !moved || self.is_at_final() {
            self.stop_autoplay();
        }
        moved
    }

    /// Advance if the autoplay deadline has passed by `now`.
    pub fn poll_autoplay(&mut self, now: Instant) -> bool {
        match self.autoplay {
            Some(handle) if now >= handle.next_due => {
                if let Some(active) = self.autoplay.as_mut() {
                    active.next_due = now + active.interval;
                }
                self.tick()
            }
            _ => false,
        }
    }

    /// Time left before the next autoplay step, if autoplay is running.
    pub fn time_until_autoplay(&self, now: Instant) -> Option<Duration> {
        self.autoplay
            .map(|handle| handle.next_due.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::division::DivisionMode;

    const INTERVAL: Duration = Duration::from_millis(2000);

    fn loaded(dividend: f64, divisor: f64) -> Session {
        let mut session = Session::new();
        session
            .generate(&DivisionInput::new(dividend, divisor, DivisionMode::Integer))
            .unwrap();
        session
    }

    #[test]
    fn test_empty_session() {
        let mut session = Session::new();
        assert_eq!(session.state(), SessionState::Empty);
        assert_eq!(session.cursor(), None);
        assert!(!session.next());
        assert!(!session.prev());
        assert!(!session.start_autoplay(INTERVAL, Instant::now()));
        assert!(session.current_board(Notation::Us).is_none());
    }

    #[test]
    fn test_generate_moves_to_first_step() {
        let session = loaded(12.0, 4.0);
        assert_eq!(session.state(), SessionState::At { index: 0, is_final: false });
        assert_eq!(session.step_count(), 9);
        assert!(!session.can_go_back());
        assert!(session.can_go_forward());
    }

    #[test]
    fn test_next_and_prev_move_by_one() {
        let mut session = loaded(12.0, 4.0);
        assert!(session.next());
        assert!(session.next());
        assert_eq!(session.cursor(), Some(2));
        assert!(session.prev());
        assert_eq!(session.cursor(), Some(1));
    }

    #[test]
    fn test_next_stops_at_final() {
        let mut session = loaded(12.0, 4.0);
        while session.next() {}
        assert_eq!(session.state(), SessionState::At { index: 8, is_final: true });
        assert!(session.current_step().unwrap().is_final);
        assert!(!session.next());
    }

    #[test]
    fn test_failed_generate_keeps_previous_trace() {
        let mut session = loaded(12.0, 4.0);
        session.next();
        let result = session.generate(&DivisionInput::new(5.0, 0.0, DivisionMode::Integer));
        assert!(result.is_err());
        assert_eq!(session.cursor(), Some(1));
        assert_eq!(session.trace().unwrap().quotient, "3");
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut session = loaded(12.0, 4.0);
        session.start_autoplay(INTERVAL, Instant::now());
        session.reset();
        assert_eq!(session.state(), SessionState::Empty);
        assert!(!session.is_autoplaying());
    }

    #[test]
    fn test_autoplay_ticks_to_final_then_stops() {
        let mut session = loaded(12.0, 4.0);
        assert!(session.start_autoplay(INTERVAL, Instant::now()));
        assert_eq!(session.cursor(), Some(1));

        let mut ticks = 0;
        while session.tick() {
            ticks += 1;
        }
        assert_eq!(ticks, 7);
        assert!(session.is_at_final());
        assert!(!session.is_autoplaying());
    }

    #[test]
    fn test_autoplay_from_final_rewinds() {
        let mut session = loaded(12.0, 4.0);
        while session.next() {}
        assert!(session.start_autoplay(INTERVAL, Instant::now()));
        assert_eq!(session.cursor(), Some(0));
    }

    #[test]
    fn test_toggle_autoplay() {
        let mut session = loaded(12.0, 4.0);
        let now = Instant::now();
        assert!(session.toggle_autoplay(INTERVAL, now));
        assert!(!session.toggle_autoplay(INTERVAL, now));
        assert!(!session.is_autoplaying());
        assert!(!session.tick());
    }

    #[test]
    fn test_poll_respects_deadline() {
        let mut session = loaded(12.0, 4.0);
        let start = Instant::now();
        session.start_autoplay(INTERVAL, start);

        assert!(!session.poll_autoplay(start + Duration::from_millis(1999)));
        assert_eq!(session.cursor(), Some(1));
        assert_eq!(
            session.time_until_autoplay(start + Duration::from_millis(500)),
            Some(Duration::from_millis(1500))
        );

        let due = start + INTERVAL;
        assert!(session.poll_autoplay(due));
        assert_eq!(session.cursor(), Some(2));
        assert_eq!(session.autoplay().unwrap().next_due(), due + INTERVAL);
    }

    #[test]
    fn test_generate_cancels_autoplay() {
        let mut session = loaded(12.0, 4.0);
        session.start_autoplay(INTERVAL, Instant::now());
        session
            .generate(&DivisionInput::new(10.0, 4.0, DivisionMode::Decimal))
            .unwrap();
        assert!(!session.is_autoplaying());
        assert_eq!(session.cursor(), Some(0));
    }

    #[test]
    fn test_current_board_follows_cursor() {
        let mut session = loaded(12.0, 4.0);
        while session.next() {}
        let board = session.current_board(Notation::German).unwrap();
        assert_eq!(board.lines[0].text(), "12 : 4 = 03");
    }
}
