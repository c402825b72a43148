//! Input Panel (Left)
//!
//! Dividend and divisor fields, the division mode, and the Solve button.

use iced::widget::{button, column, container, radio, row, text, text_input, Column, Space};
use iced::{Alignment, Element, Length, Padding};
use longdiv_core::DivisionMode;

use crate::{App, Message};

/// Render the input panel
pub fn view_input_panel(app: &App) -> Element<'_, Message> {
    let modes = DivisionMode::ALL.iter().fold(Column::new().spacing(4), |col, mode| {
        col.push(
            radio(mode.display_name(), *mode, Some(app.mode), Message::ModeSelected)
                .size(14)
                .text_size(11),
        )
    });

    let mut panel = column![
        text("Division").size(14),
        Space::new().height(8),
        labeled_input("Dividend:", &app.dividend, Message::DividendChanged),
        labeled_input("Divisor:", &app.divisor, Message::DivisorChanged),
        Space::new().height(8),
        text("Mode").size(12),
        modes,
        Space::new().height(8),
        button(text("Solve").size(12))
            .on_press(Message::Solve)
            .padding(Padding::from([4, 16]))
            .style(button::primary),
    ]
    .spacing(6);

    if let Some(error) = &app.error_message {
        panel = panel.push(text(error).size(11).color([0.8, 0.2, 0.2]));
    }

    container(panel.padding(8))
        .width(Length::Fixed(240.0))
        .height(Length::Fill)
        .style(container::bordered_box)
        .padding(5)
        .into()
}

/// Helper to create a labeled text input
fn labeled_input<'a>(
    label: &'a str,
    value: &'a str,
    on_change: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    row![
        text(label).size(11).width(Length::Fixed(64.0)),
        text_input("", value)
            .on_input(on_change)
            .on_submit(Message::Solve)
            .width(Length::Fill)
            .padding(4)
            .size(11),
    ]
    .align_y(Alignment::Center)
    .into()
}
