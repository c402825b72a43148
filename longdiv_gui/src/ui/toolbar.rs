//! Toolbar component
//!
//! Title on the left, notation picker and trace export on the right.

use iced::widget::{button, pick_list, row, text, Space};
use iced::{Alignment, Element, Length, Padding};
use longdiv_core::Notation;

use crate::Message;

/// Render the toolbar
pub fn view_toolbar(notation: Notation, has_trace: bool) -> Element<'static, Message> {
    let export_button = button(text("Export trace").size(11))
        .on_press_maybe(has_trace.then_some(Message::ExportTrace))
        .padding(Padding::from([4, 8]))
        .style(button::secondary);

    row![
        text("Long Division").size(24),
        Space::new().width(Length::Fill),
        text("Notation:").size(11),
        pick_list(Notation::ALL.to_vec(), Some(notation), Message::NotationSelected)
            .text_size(11)
            .padding(Padding::from([4, 8])),
        export_button,
    ]
    .spacing(8)
    .padding(Padding::from([4, 0]))
    .align_y(Alignment::Center)
    .into()
}
