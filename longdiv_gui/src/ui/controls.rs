//! Step controls
//!
//! Prev / Next / Auto (Pause) / Reset. Buttons that would do nothing are
//! disabled.

use iced::widget::{button, row, text, Space};
use iced::{Alignment, Element, Length, Padding};
use longdiv_core::Session;

use crate::Message;

pub fn view_controls(session: &Session) -> Element<'static, Message> {
    let has_trace = session.trace().is_some();
    let auto_label = if session.is_autoplaying() { "Pause" } else { "Auto" };

    row![
        control_button("◀ Prev", session.can_go_back().then_some(Message::Prev)),
        control_button("Next ▶", session.can_go_forward().then_some(Message::Next)),
        control_button(auto_label, has_trace.then_some(Message::ToggleAutoplay)),
        Space::new().width(Length::Fill),
        control_button("Reset", has_trace.then_some(Message::Reset)),
    ]
    .spacing(4)
    .align_y(Alignment::Center)
    .into()
}

fn control_button(label: &'static str, message: Option<Message>) -> Element<'static, Message> {
    button(text(label).size(11))
        .on_press_maybe(message)
        .padding(Padding::from([4, 12]))
        .style(button::secondary)
        .into()
}
