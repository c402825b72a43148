//! Board Panel (Right)
//!
//! The current step drawn in the selected notation, with the divisor,
//! quotient and subtracted products highlighted, and the step explanation
//! below. The explanation turns green on the final step.

use iced::widget::{column, container, scrollable, text, Column, Row, Space};
use iced::{Color, Element, Font, Length};
use longdiv_core::notation::{BoardLine, SegmentStyle};

use crate::{App, Message};

const BOARD_TEXT_SIZE: u32 = 18;

/// Render the board panel
pub fn view_board_panel(app: &App) -> Element<'_, Message> {
    let content: Column<'_, Message> = match app.session.current_board(app.notation) {
        Some(board) => board
            .lines
            .iter()
            .fold(Column::new(), |col, line| col.push(view_line(line))),
        None => Column::new().push(
            text("Solve a division to see the steps").size(14).color([0.5, 0.5, 0.5]),
        ),
    };

    let board = container(scrollable(content.padding(12)))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(container::bordered_box);

    column![board, Space::new().height(6), view_explanation(app)]
        .width(Length::Fill)
        .into()
}

fn view_line(line: &BoardLine) -> Element<'static, Message> {
    if line.segments.is_empty() {
        return text(" ").size(BOARD_TEXT_SIZE).font(Font::MONOSPACE).into();
    }
    line.segments
        .iter()
        .fold(Row::new(), |row, segment| {
            let mut piece = text(segment.text.clone()).size(BOARD_TEXT_SIZE).font(Font::MONOSPACE);
            if let Some(color) = segment_color(segment.style) {
                piece = piece.color(color);
            }
            row.push(piece)
        })
        .into()
}

fn segment_color(style: SegmentStyle) -> Option<Color> {
    match style {
        SegmentStyle::Plain => None,
        SegmentStyle::Divisor => Some(Color::from_rgb(0.55, 0.2, 0.6)),
        SegmentStyle::Quotient => Some(Color::from_rgb(0.1, 0.4, 0.7)),
        SegmentStyle::Subtrahend => Some(Color::from_rgb(0.8, 0.2, 0.2)),
    }
}

fn view_explanation(app: &App) -> Element<'_, Message> {
    let Some(step) = app.session.current_step() else {
        return Space::new().height(0).into();
    };

    let explanation = if step.is_final {
        text(&step.explanation).size(14).color([0.1, 0.55, 0.2])
    } else {
        text(&step.explanation).size(14)
    };

    let mut body = column![explanation].spacing(4);
    if app.session.trace().is_some_and(|trace| trace.truncated) {
        body = body.push(text("Stopped at the digit limit").size(11).color([0.6, 0.3, 0.0]));
    }

    container(body.padding(8))
        .width(Length::Fill)
        .style(container::bordered_box)
        .into()
}
