//! Application state and iced wiring.
//!
//! `App` owns the single [`ProgressCounter`] for the lifetime of the
//! process; all counter reads and writes happen inside [`App::update`].
//! Dialogs run as async tasks whose answers come back as messages, and the
//! progress timer is a subscription that is only active while a counter
//! run is in flight.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use iced::widget::{button, column, container, progress_bar, row, text};
use iced::{Alignment, Element, Length, Subscription, Task, Theme};

use alerts_core::alerts::{AlertDay, DrainKind};
use alerts_core::config::ConfigManager;
use alerts_core::progress::{ProgressCounter, COUNTER_MAX, COUNTER_MIN};

use crate::theme;

/// All possible messages the application can receive.
#[derive(Debug, Clone)]
pub enum Message {
    /// A day button was clicked; open the file picker.
    CreateAlerts(AlertDay),
    /// The file picker closed, possibly without a selection.
    SourceSelected(AlertDay, Option<PathBuf>),
    /// The create confirmation dialog closed.
    CreateConfirmed {
        day: AlertDay,
        source: PathBuf,
        accepted: bool,
    },
    /// The Send button was clicked.
    SendAlerts,
    /// The Delete button was clicked.
    DeleteAlerts,
    /// The send/delete confirmation dialog closed.
    DrainConfirmed { kind: DrainKind, accepted: bool },
    /// The progress timer fired.
    Tick,
    /// A fire-and-forget notice was dismissed.
    Noop,
}

/// Main application state.
pub struct App {
    pub config: Arc<Mutex<ConfigManager>>,
    pub counter: ProgressCounter,
    pub tick_interval: Duration,
    pub status_text: String,
}

impl App {
    pub fn new(config: Arc<Mutex<ConfigManager>>) -> (Self, Task<Message>) {
        let tick_interval = {
            let cfg = config.lock().unwrap();
            cfg.settings().timer.tick_interval()
        };

        (
            Self {
                config,
                counter: ProgressCounter::new(),
                tick_interval,
                status_text: "Ready".to_string(),
            },
            Task::none(),
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CreateAlerts(day) => self.browse_alert_source(day),
            Message::SourceSelected(day, path) => self.handle_source_selected(day, path),
            Message::CreateConfirmed {
                day,
                source,
                accepted,
            } => self.handle_create_confirmed(day, source, accepted),
            Message::SendAlerts => self.request_drain(DrainKind::Send),
            Message::DeleteAlerts => self.request_drain(DrainKind::Delete),
            Message::DrainConfirmed { kind, accepted } => {
                self.handle_drain_confirmed(kind, accepted)
            }
            Message::Tick => self.handle_tick(),
            Message::Noop => Task::none(),
        }
    }

    /// Tick while a run is in flight; otherwise stay quiet.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.counter.is_running() {
            iced::time::every(self.tick_interval).map(|_| Message::Tick)
        } else {
            Subscription::none()
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::Light
    }

    pub fn view(&self) -> Element<'_, Message> {
        let header = container(text("Weekly Alerts").size(40))
            .width(Length::Fill)
            .padding(16)
            .align_x(Alignment::Center)
            .style(theme::header);

        let day_buttons = row![
            day_button("Monday", AlertDay::Monday),
            day_button("Friday", AlertDay::Friday),
        ]
        .spacing(theme::spacing::LG);

        let footer = row![
            button(text("Send"))
                .padding(theme::spacing::MD)
                .style(button::secondary)
                .on_press(Message::SendAlerts),
            button(text("Delete"))
                .padding(theme::spacing::MD)
                .style(button::danger)
                .on_press(Message::DeleteAlerts),
            progress_bar(
                f32::from(COUNTER_MIN)..=f32::from(COUNTER_MAX),
                f32::from(self.counter.value()),
            )
            .style(theme::progress),
            text("© 2020 Your Company Name Here").size(14),
        ]
        .spacing(theme::spacing::SM)
        .align_y(Alignment::Center);

        let status = row![text("Status:"), text(&self.status_text)].spacing(theme::spacing::SM);

        column![
            header,
            container(day_buttons)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Alignment::Center)
                .align_y(Alignment::Center),
            footer,
            status,
        ]
        .spacing(theme::spacing::MD)
        .padding(theme::spacing::MD)
        .into()
    }
}

fn day_button(label: &str, day: AlertDay) -> Element<'_, Message> {
    button(text(label).size(24))
        .padding(theme::spacing::LG)
        .style(button::primary)
        .on_press(Message::CreateAlerts(day))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        // The manager is never loaded or saved in these tests; the path is
        // only a placeholder.
        let manager = ConfigManager::new("settings.toml");
        let (app, _task) = App::new(Arc::new(Mutex::new(manager)));
        app
    }

    fn start_create_run(app: &mut App) {
        let _ = app.update(Message::CreateConfirmed {
            day: AlertDay::Monday,
            source: PathBuf::from("alerts.csv"),
            accepted: true,
        });
    }

    #[test]
    fn cancelled_file_dialog_never_starts_counter() {
        let mut app = test_app();
        let _ = app.update(Message::SourceSelected(AlertDay::Monday, None));

        assert!(!app.counter.is_running());
        assert_eq!(app.counter.value(), 0);
    }

    #[test]
    fn declined_create_confirmation_leaves_counter_untouched() {
        let mut app = test_app();
        let _ = app.update(Message::CreateConfirmed {
            day: AlertDay::Friday,
            source: PathBuf::from("alerts.csv"),
            accepted: false,
        });

        assert!(!app.counter.is_running());
        assert_eq!(app.counter.value(), 0);
    }

    #[test]
    fn accepted_create_starts_incrementing_run() {
        let mut app = test_app();
        start_create_run(&mut app);

        assert!(app.counter.is_running());
        assert_eq!(app.counter.value(), 0);
    }

    #[test]
    fn send_and_delete_at_zero_are_no_ops() {
        let mut app = test_app();
        let _ = app.update(Message::SendAlerts);
        let _ = app.update(Message::DeleteAlerts);

        assert!(!app.counter.is_running());
        assert_eq!(app.counter.value(), 0);
    }

    #[test]
    fn declined_drain_confirmation_leaves_counter_untouched() {
        let mut app = test_app();
        start_create_run(&mut app);
        for _ in 0..5 {
            let _ = app.update(Message::Tick);
        }
        app.counter.halt();
        assert_eq!(app.counter.value(), 5);

        let _ = app.update(Message::DrainConfirmed {
            kind: DrainKind::Delete,
            accepted: false,
        });

        assert!(!app.counter.is_running());
        assert_eq!(app.counter.value(), 5);
    }

    #[test]
    fn ticks_advance_and_terminal_tick_halts() {
        let mut app = test_app();
        start_create_run(&mut app);

        for _ in 0..99 {
            let _ = app.update(Message::Tick);
        }
        assert!(app.counter.is_running());
        assert_eq!(app.counter.value(), 99);

        let _ = app.update(Message::Tick);
        assert!(!app.counter.is_running());
        assert_eq!(app.counter.value(), 100);

        // A stale firing after completion changes nothing.
        let _ = app.update(Message::Tick);
        assert_eq!(app.counter.value(), 100);
    }

    #[test]
    fn accepted_drain_starts_decrementing_run() {
        let mut app = test_app();
        start_create_run(&mut app);
        let _ = app.update(Message::Tick);
        app.counter.halt();
        assert_eq!(app.counter.value(), 1);

        let _ = app.update(Message::DrainConfirmed {
            kind: DrainKind::Send,
            accepted: true,
        });
        assert!(app.counter.is_running());

        let _ = app.update(Message::Tick);
        assert!(!app.counter.is_running());
        assert_eq!(app.counter.value(), 0);
    }
}
