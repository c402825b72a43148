//! Ratatui stepper for `longdiv play`.
//!
//! Keys: ←/h previous, →/l next, space autoplay, r restart, n notation,
//! q/Esc quit. Autoplay is driven by the event-poll timeout, so no extra
//! thread is needed.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use longdiv_core::notation::SegmentStyle;
use longdiv_core::{Board, DivisionInput, Notation, Session};
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use ratatui::{DefaultTerminal, Frame};
use tracing::debug;

/// Poll timeout while nothing is scheduled.
const IDLE_POLL: Duration = Duration::from_millis(250);

const HELP: &str = " ←/h prev  →/l next  space play/pause  r restart  n notation  q quit ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct PlayOptions {
    pub notation: Notation,
    pub interval: Duration,
    pub autoplay: bool,
}

struct PlayApp {
    input: DivisionInput,
    session: Session,
    notation: Notation,
    interval: Duration,
}

/// Solve `input` and step through it until the user quits.
///
/// Input errors are returned before the terminal is touched.
pub fn run(input: DivisionInput, options: PlayOptions) -> Result<()> {
    let mut app = PlayApp::new(input, &options)?;
    if options.autoplay {
        app.session.start_autoplay(app.interval, Instant::now());
    }

    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal);
    ratatui::restore();
    result
}

impl PlayApp {
    fn new(input: DivisionInput, options: &PlayOptions) -> Result<Self> {
        let mut session = Session::new();
        session.generate(&input)?;
        Ok(PlayApp {
            input,
            session,
            notation: options.notation,
            interval: options.interval,
        })
    }

    fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        loop {
            terminal.draw(|frame| self.draw(frame))?;

            let timeout = self
                .session
                .time_until_autoplay(Instant::now())
                .unwrap_or(IDLE_POLL);
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press
                        && self.handle_key(key.code, Instant::now())? == Flow::Quit
                    {
                        break;
                    }
                }
            }
            self.session.poll_autoplay(Instant::now());
        }
        debug!("leaving stepper");
        Ok(())
    }

    fn handle_key(&mut self, code: KeyCode, now: Instant) -> Result<Flow> {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(Flow::Quit),
            KeyCode::Left | KeyCode::Char('h') => {
                self.session.stop_autoplay();
                self.session.prev();
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.session.stop_autoplay();
                self.session.next();
            }
            KeyCode::Char(' ') => {
                self.session.toggle_autoplay(self.interval, now);
            }
            KeyCode::Char('r') => {
                self.session.generate(&self.input)?;
            }
            KeyCode::Char('n') => {
                self.notation = self.notation.cycle();
            }
            _ => {}
        }
        Ok(Flow::Continue)
    }

    fn draw(&self, frame: &mut Frame) {
        let [header_area, board_area, explanation_area, help_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(4),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        frame.render_widget(
            Paragraph::new(self.header_line()).block(Block::bordered()),
            header_area,
        );

        let board_lines = self
            .session
            .current_board(self.notation)
            .map(board_to_lines)
            .unwrap_or_default();
        frame.render_widget(
            Paragraph::new(board_lines)
                .block(Block::bordered().title(format!(" {} ", self.notation))),
            board_area,
        );

        let (explanation, style) = match self.session.current_step() {
            Some(step) if step.is_final => (
                step.explanation.clone(),
                Style::new().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            Some(step) => (step.explanation.clone(), Style::new()),
            None => (String::new(), Style::new()),
        };
        let mut explanation_lines = vec![Line::styled(explanation, style)];
        if self.session.trace().is_some_and(|trace| trace.truncated) {
            explanation_lines.push(Line::styled(
                "(stopped at the digit limit)",
                Style::new().fg(Color::Yellow),
            ));
        }
        frame.render_widget(
            Paragraph::new(explanation_lines)
                .wrap(Wrap { trim: true })
                .block(Block::bordered().title(" Explanation ")),
            explanation_area,
        );

        frame.render_widget(
            Paragraph::new(HELP).style(Style::new().fg(Color::DarkGray)),
            help_area,
        );
    }

    fn header_line(&self) -> Line<'static> {
        let position = match self.session.cursor() {
            Some(index) => format!("step {}/{}", index + 1, self.session.step_count()),
            None => "no steps".to_string(),
        };
        let playing = if self.session.is_autoplaying() { "  ▶ playing" } else { "" };
        let kind = self
            .session
            .current_step()
            .map(|step| step.kind.label())
            .unwrap_or_default();
        Line::from(vec![
            Span::styled(
                format!(" {} ÷ {} ", self.dividend_text(), self.divisor_text()),
                Style::new().add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" {}  {}  {}", self.input.mode, position, kind)),
            Span::styled(playing, Style::new().fg(Color::Cyan)),
        ])
    }

    fn dividend_text(&self) -> &str {
        self.session.trace().map_or("", |trace| trace.dividend_text.as_str())
    }

    fn divisor_text(&self) -> &str {
        self.session.trace().map_or("", |trace| trace.divisor_text.as_str())
    }
}

fn segment_style(style: SegmentStyle) -> Style {
    match style {
        SegmentStyle::Plain => Style::new(),
        SegmentStyle::Divisor => Style::new().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        SegmentStyle::Quotient => Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        SegmentStyle::Subtrahend => Style::new().fg(Color::Red),
    }
}

fn board_to_lines(board: Board) -> Vec<Line<'static>> {
    board
        .lines
        .into_iter()
        .map(|line| {
            Line::from(
                line.segments
                    .into_iter()
                    .map(|segment| Span::styled(segment.text, segment_style(segment.style)))
                    .collect::<Vec<_>>(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use longdiv_core::DivisionMode;

    fn app(dividend: f64, divisor: f64) -> PlayApp {
        let options = PlayOptions {
            notation: Notation::Us,
            interval: Duration::from_millis(2000),
            autoplay: false,
        };
        let input = DivisionInput::new(dividend, divisor, DivisionMode::Integer);
        PlayApp::new(input, &options).unwrap()
    }

    #[test]
    fn test_zero_divisor_fails_before_terminal() {
        let options = PlayOptions {
            notation: Notation::Us,
            interval: Duration::from_millis(2000),
            autoplay: false,
        };
        let input = DivisionInput::new(5.0, 0.0, DivisionMode::Integer);
        assert!(PlayApp::new(input, &options).is_err());
    }

    #[test]
    fn test_arrow_keys_move_cursor() {
        let mut app = app(12.0, 4.0);
        let now = Instant::now();
        app.handle_key(KeyCode::Right, now).unwrap();
        app.handle_key(KeyCode::Char('l'), now).unwrap();
        assert_eq!(app.session.cursor(), Some(2));
        app.handle_key(KeyCode::Left, now).unwrap();
        assert_eq!(app.session.cursor(), Some(1));
    }

    #[test]
    fn test_space_toggles_autoplay_and_arrows_stop_it() {
        let mut app = app(12.0, 4.0);
        let now = Instant::now();
        app.handle_key(KeyCode::Char(' '), now).unwrap();
        assert!(app.session.is_autoplaying());
        app.handle_key(KeyCode::Right, now).unwrap();
        assert!(!app.session.is_autoplaying());
    }

    #[test]
    fn test_restart_and_notation_keys() {
        let mut app = app(12.0, 4.0);
        let now = Instant::now();
        app.handle_key(KeyCode::Right, now).unwrap();
        app.handle_key(KeyCode::Char('r'), now).unwrap();
        assert_eq!(app.session.cursor(), Some(0));

        app.handle_key(KeyCode::Char('n'), now).unwrap();
        assert_eq!(app.notation, Notation::European);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app(12.0, 4.0);
        assert_eq!(app.handle_key(KeyCode::Char('q'), Instant::now()).unwrap(), Flow::Quit);
        assert_eq!(app.handle_key(KeyCode::Esc, Instant::now()).unwrap(), Flow::Quit);
    }

    #[test]
    fn test_board_keeps_segment_styles() {
        let app = app(12.0, 4.0);
        let board = app.session.current_board(Notation::Us).unwrap();
        let lines = board_to_lines(board);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2].spans[0].content, "4");
        assert_eq!(lines[2].spans[0].style, segment_style(SegmentStyle::Divisor));
    }
}
