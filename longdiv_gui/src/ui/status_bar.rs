//! Status Bar (Bottom)
//!
//! Displays:
//! - Step position and kind
//! - Autoplay indicator
//! - Status messages

use iced::widget::{row, text, Space};
use iced::{Element, Length, Padding};
use longdiv_core::Session;

use crate::Message;

/// Render the status bar
pub fn view_status_bar<'a>(session: &Session, status: &'a str) -> Element<'a, Message> {
    let position = match (session.cursor(), session.current_step()) {
        (Some(index), Some(step)) => format!(
            "Step {} of {} · {}",
            index + 1,
            session.step_count(),
            step.kind.label()
        ),
        _ => "No division".to_string(),
    };

    let autoplay = if session.is_autoplaying() { "  ▶ playing" } else { "" };

    row![
        text(position).size(10),
        text(autoplay).size(10).color([0.1, 0.4, 0.7]),
        Space::new().width(Length::Fill),
        text(status).size(10),
    ]
    .padding(Padding::from([4, 0]))
    .into()
}
