//! Progress tick handling.

use iced::Task;

use alerts_core::progress::TickEvent;

use super::dialogs;
use crate::app::{App, Message};

impl App {
    /// Advance the counter on a timer firing.
    pub fn handle_tick(&mut self) -> Task<Message> {
        match self.counter.tick() {
            Some(TickEvent::Advanced(_)) => Task::none(),
            Some(TickEvent::Completed(value)) => {
                tracing::info!(value, "process completed");
                self.status_text = "Ready".to_string();
                dialogs::info_notice(
                    "Complete".to_string(),
                    "The process has completed.".to_string(),
                )
            }
            // Stale firing after the run halted.
            None => Task::none(),
        }
    }
}
