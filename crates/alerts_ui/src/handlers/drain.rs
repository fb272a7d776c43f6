//! Send/delete workflow: gate on created alerts, confirm, drain the counter.

use iced::Task;

use alerts_core::alerts::{check_drain, DrainKind};

use super::dialogs;
use crate::app::{App, Message};

impl App {
    /// Gate a send/delete request and ask for confirmation.
    pub fn request_drain(&mut self, kind: DrainKind) -> Task<Message> {
        if let Err(e) = check_drain(&self.counter, kind) {
            tracing::warn!(%kind, "drain refused: {e}");
            return dialogs::error_notice(
                format!("{kind} Error"),
                format!(
                    "There are no alerts to {verb}. Please create alerts by clicking on the \
                     Friday or Monday buttons before trying to {verb}.",
                    verb = kind.verb()
                ),
            );
        }

        Task::perform(
            async move {
                let result = match kind {
                    DrainKind::Send => {
                        rfd::AsyncMessageDialog::new()
                            .set_level(rfd::MessageLevel::Info)
                            .set_title("Confirm Send")
                            .set_description("Are you sure you want to send all alerts?")
                            .set_buttons(rfd::MessageButtons::YesNo)
                            .show()
                            .await
                    }
                    DrainKind::Delete => {
                        rfd::AsyncMessageDialog::new()
                            .set_level(rfd::MessageLevel::Warning)
                            .set_title("Confirm Delete")
                            .set_description(
                                "IMPORTANT!!!\n\nProceed with Delete?? This process cannot be reversed!!",
                            )
                            .set_buttons(rfd::MessageButtons::YesNo)
                            .show()
                            .await
                    }
                };
                matches!(result, rfd::MessageDialogResult::Yes)
            },
            move |accepted| Message::DrainConfirmed { kind, accepted },
        )
    }

    /// Handle the send/delete confirmation result.
    pub fn handle_drain_confirmed(&mut self, kind: DrainKind, accepted: bool) -> Task<Message> {
        if !accepted {
            tracing::info!(%kind, "drain confirmation declined");
            return dialogs::cancelled_notice(kind.to_string());
        }

        match self.counter.start_decrement() {
            Ok(()) => {
                tracing::info!(%kind, value = self.counter.value(), "draining alerts");
                self.status_text = match kind {
                    DrainKind::Send => "Sending alerts...".to_string(),
                    DrainKind::Delete => "Deleting alerts...".to_string(),
                };
                Task::none()
            }
            Err(e) => {
                tracing::warn!(%kind, "cannot start drain run: {e}");
                dialogs::busy_notice()
            }
        }
    }
}
