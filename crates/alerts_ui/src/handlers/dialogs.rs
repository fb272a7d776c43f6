//! Modal notice helpers built on rfd's async message dialogs.
//!
//! Notices are fire-and-forget: the dialog result is discarded and the
//! task resolves to [`Message::Noop`].

use iced::Task;

use crate::app::Message;

/// Informational notice with an Ok button.
pub fn info_notice(title: String, message: String) -> Task<Message> {
    notice(rfd::MessageLevel::Info, title, message)
}

/// Error notice with an Ok button.
pub fn error_notice(title: String, message: String) -> Task<Message> {
    notice(rfd::MessageLevel::Error, title, message)
}

/// Cancellation notice shared by every gated action, naming the button to
/// click for a retry.
pub fn cancelled_notice(button: String) -> Task<Message> {
    let title = format!("{button} Alert Cancelled");
    let message = format!(
        "Process has been cancelled by user. Please click the \"{button}\" button again to retry."
    );
    info_notice(title, message)
}

/// Notice shown when a start is refused because a run is in flight.
pub fn busy_notice() -> Task<Message> {
    error_notice(
        "Process Running".to_string(),
        "A process is already running. Please wait for it to complete.".to_string(),
    )
}

fn notice(level: rfd::MessageLevel, title: String, message: String) -> Task<Message> {
    Task::perform(
        async move {
            rfd::AsyncMessageDialog::new()
                .set_level(level)
                .set_title(title.as_str())
                .set_description(message.as_str())
                .set_buttons(rfd::MessageButtons::Ok)
                .show()
                .await;
        },
        |_| Message::Noop,
    )
}
