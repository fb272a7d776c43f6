//! Create-alert workflow: pick a source file, confirm, start the counter.

use std::path::{Path, PathBuf};

use iced::Task;

use alerts_core::alerts::AlertDay;
use alerts_core::config::ConfigSection;

use super::dialogs;
use crate::app::{App, Message};

impl App {
    /// Open the file picker for a day button.
    pub fn browse_alert_source(&mut self, day: AlertDay) -> Task<Message> {
        self.status_text = format!("Choosing source file for {day} alerts...");

        let start_dir = {
            let cfg = self.config.lock().unwrap();
            cfg.settings().paths.last_source_folder.clone()
        };

        Task::perform(
            async move {
                let title = format!("Select {day} source data file");
                let mut dialog = rfd::AsyncFileDialog::new().set_title(title.as_str());
                if !start_dir.is_empty() {
                    dialog = dialog.set_directory(&start_dir);
                }
                dialog.pick_file().await.map(|f| f.path().to_path_buf())
            },
            move |path| Message::SourceSelected(day, path),
        )
    }

    /// Handle the file picker result.
    pub fn handle_source_selected(
        &mut self,
        day: AlertDay,
        path: Option<PathBuf>,
    ) -> Task<Message> {
        let Some(source) = path else {
            tracing::info!(%day, "file selection cancelled");
            self.status_text = "Ready".to_string();
            return dialogs::cancelled_notice(day.to_string());
        };

        tracing::info!(%day, source = %source.display(), "source file selected");
        self.remember_source_folder(&source);

        Task::perform(
            async move {
                let message = format!("Continue with file?\n{}", source.display());
                let result = rfd::AsyncMessageDialog::new()
                    .set_level(rfd::MessageLevel::Info)
                    .set_title("Continue")
                    .set_description(message.as_str())
                    .set_buttons(rfd::MessageButtons::OkCancel)
                    .show()
                    .await;
                (source, matches!(result, rfd::MessageDialogResult::Ok))
            },
            move |(source, accepted)| Message::CreateConfirmed {
                day,
                source,
                accepted,
            },
        )
    }

    /// Handle the create confirmation result.
    pub fn handle_create_confirmed(
        &mut self,
        day: AlertDay,
        source: PathBuf,
        accepted: bool,
    ) -> Task<Message> {
        if !accepted {
            tracing::info!(%day, "create confirmation declined");
            self.status_text = "Ready".to_string();
            return dialogs::cancelled_notice(day.to_string());
        }

        match self.counter.start_increment() {
            Ok(()) => {
                tracing::info!(%day, source = %source.display(), "creating alerts");
                self.status_text = format!("Creating {day} alerts...");
                Task::none()
            }
            Err(e) => {
                tracing::warn!(%day, "cannot start create run: {e}");
                dialogs::busy_notice()
            }
        }
    }

    /// Remember the folder of a chosen source file for the next picker.
    fn remember_source_folder(&self, source: &Path) {
        let Some(parent) = source.parent() else {
            return;
        };

        let mut cfg = self.config.lock().unwrap();
        cfg.settings_mut().paths.last_source_folder = parent.to_string_lossy().to_string();
        if let Err(e) = cfg.update_section(ConfigSection::Paths) {
            tracing::warn!("failed to persist last source folder: {e}");
        }
    }
}
