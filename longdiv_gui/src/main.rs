//! # Longdiv GUI Application
//!
//! Desktop stepper for long division, built with Iced. Enter a dividend and
//! divisor, pick a mode and notation, then walk through the steps by hand or
//! let autoplay run them.

mod ui;

use std::path::PathBuf;
use std::time::Instant;

use iced::widget::{column, row};
use iced::{time, window, Element, Length, Size, Subscription, Task, Theme};
use longdiv_core::file_io::{load_settings_or_default, save_settings, save_trace};
use longdiv_core::{DivisionInput, DivisionMode, Notation, Session, Settings};
use tracing::{info, warn};

pub fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("Starting longdiv GUI");

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .window(window::Settings {
            size: Size::new(900.0, 640.0),
            min_size: Some(Size::new(640.0, 480.0)),
            ..Default::default()
        })
        .run()
}

/// Application state
pub struct App {
    pub dividend: String,
    pub divisor: String,
    pub mode: DivisionMode,
    pub notation: Notation,
    pub session: Session,
    pub settings: Settings,
    settings_path: Option<PathBuf>,
    pub error_message: Option<String>,
    pub status: String,
}

#[derive(Debug, Clone)]
pub enum Message {
    DividendChanged(String),
    DivisorChanged(String),
    ModeSelected(DivisionMode),
    NotationSelected(Notation),
    Solve,
    Next,
    Prev,
    ToggleAutoplay,
    AutoplayTick,
    Reset,
    ExportTrace,
}

impl App {
    fn new() -> (Self, Task<Message>) {
        let settings_path = Settings::default_path();
        let settings = match settings_path.as_deref().map(load_settings_or_default) {
            Some(Ok(settings)) => settings,
            Some(Err(e)) => {
                warn!(error = %e, "ignoring unreadable settings");
                Settings::default()
            }
            None => Settings::default(),
        };
        (App::with_settings(settings, settings_path), Task::none())
    }

    fn with_settings(settings: Settings, settings_path: Option<PathBuf>) -> Self {
        App {
            dividend: String::new(),
            divisor: String::new(),
            mode: settings.mode,
            notation: settings.notation,
            session: Session::new(),
            settings,
            settings_path,
            error_message: None,
            status: "Enter a dividend and a divisor".to_string(),
        }
    }

    fn title(&self) -> String {
        match self.session.trace() {
            Some(trace) => format!(
                "Long Division - {} ÷ {}",
                trace.dividend_text, trace.divisor_text
            ),
            None => "Long Division".to_string(),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::DividendChanged(value) => self.dividend = value,
            Message::DivisorChanged(value) => self.divisor = value,
            Message::ModeSelected(mode) => {
                self.mode = mode;
                self.settings.mode = mode;
                self.persist_settings();
            }
            Message::NotationSelected(notation) => {
                self.notation = notation;
                self.settings.notation = notation;
                self.persist_settings();
            }
            Message::Solve => self.solve(),
            Message::Next => {
                self.session.stop_autoplay();
                self.session.next();
            }
            Message::Prev => {
                self.session.stop_autoplay();
                self.session.prev();
            }
            Message::ToggleAutoplay => {
                self.session
                    .toggle_autoplay(self.settings.autoplay_interval(), Instant::now());
            }
            Message::AutoplayTick => {
                self.session.tick();
            }
            Message::Reset => {
                self.session.reset();
                self.dividend.clear();
                self.divisor.clear();
                self.error_message = None;
                self.status = "Reset".to_string();
            }
            Message::ExportTrace => self.export_trace(),
        }
        Task::none()
    }

    fn solve(&mut self) {
        let result = DivisionInput::parse(&self.dividend, &self.divisor, self.mode)
            .and_then(|input| self.session.generate(&input).map(|trace| trace.answer_text()));
        match result {
            Ok(answer) => {
                self.error_message = None;
                self.status = format!("{} steps, answer {}", self.session.step_count(), answer);
            }
            Err(e) => {
                self.error_message = Some(e.to_string());
                self.status = "Could not solve".to_string();
            }
        }
    }

    fn export_trace(&mut self) {
        let Some(trace) = self.session.trace() else {
            self.status = "Nothing to export".to_string();
            return;
        };

        let Some(path) = rfd::FileDialog::new()
            .set_file_name("division.ldt.json")
            .add_filter("Long division trace", &["json"])
            .save_file()
        else {
            return;
        };

        self.status = match save_trace(trace, &path) {
            Ok(()) => format!("Exported to {}", path.display()),
            Err(e) => {
                warn!(error = %e, "export failed");
                format!("Export failed: {}", e)
            }
        };
    }

    fn persist_settings(&mut self) {
        let Some(path) = &self.settings_path else {
            return;
        };
        if let Err(e) = save_settings(&self.settings, path) {
            warn!(error = %e, "could not save settings");
            self.status = format!("Settings not saved: {}", e);
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        match self.session.autoplay() {
            Some(handle) => time::every(handle.interval()).map(|_| Message::AutoplayTick),
            None => Subscription::none(),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        column![
            ui::toolbar::view_toolbar(self.notation, self.session.trace().is_some()),
            row![
                ui::input_panel::view_input_panel(self),
                ui::board_panel::view_board_panel(self),
            ]
            .spacing(8)
            .height(Length::Fill),
            ui::controls::view_controls(&self.session),
            ui::status_bar::view_status_bar(&self.session, &self.status),
        ]
        .spacing(6)
        .padding(10)
        .into()
    }
}
