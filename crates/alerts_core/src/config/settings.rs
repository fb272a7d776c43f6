//! Settings struct with TOML-based sections.
//!
//! Settings are organized into logical sections that map to TOML tables.
//! Each section can be updated independently for atomic section-level
//! updates.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::progress::DEFAULT_TICK_INTERVAL;

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Path-related settings.
    #[serde(default)]
    pub paths: PathSettings,

    /// Progress timer settings.
    #[serde(default)]
    pub timer: TimerSettings,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Identifies a settings section for targeted updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSection {
    Paths,
    Timer,
    Logging,
}

impl ConfigSection {
    /// TOML table name for this section.
    pub fn table_name(self) -> &'static str {
        match self {
            ConfigSection::Paths => "paths",
            ConfigSection::Timer => "timer",
            ConfigSection::Logging => "logging",
        }
    }
}

/// Path configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathSettings {
    /// Folder for log files.
    #[serde(default = "default_logs_folder")]
    pub logs_folder: String,

    /// Folder the file picker opens in, remembered across selections.
    #[serde(default)]
    pub last_source_folder: String,
}

fn default_logs_folder() -> String {
    ".logs".to_string()
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            logs_folder: default_logs_folder(),
            last_source_folder: String::new(),
        }
    }
}

/// Progress timer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerSettings {
    /// Delay between progress ticks in milliseconds.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
}

fn default_tick_interval_ms() -> u64 {
    DEFAULT_TICK_INTERVAL.as_millis() as u64
}

/// Floor for the tick interval; anything shorter would saturate the event
/// loop with tick messages.
const MIN_TICK_INTERVAL_MS: u64 = 10;

impl TimerSettings {
    /// Tick interval as a [`Duration`], clamped to the supported floor.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.max(MIN_TICK_INTERVAL_MS))
    }
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Default log level when RUST_LOG is not set.
    #[serde(default = "default_level")]
    pub level: String,

    /// Also write logs to a file under the logs folder.
    #[serde(default = "default_true")]
    pub log_to_file: bool,
}

fn default_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_level(),
            log_to_file: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let settings = Settings::default();
        assert_eq!(settings.paths.logs_folder, ".logs");
        assert_eq!(settings.timer.tick_interval_ms, 100);
        assert_eq!(settings.logging.level, "info");
        assert!(settings.logging.log_to_file);
    }

    #[test]
    fn tick_interval_is_clamped() {
        let timer = TimerSettings { tick_interval_ms: 0 };
        assert_eq!(timer.tick_interval(), Duration::from_millis(10));

        let timer = TimerSettings {
            tick_interval_ms: 250,
        };
        assert_eq!(timer.tick_interval(), Duration::from_millis(250));
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let settings: Settings = toml::from_str("[paths]\nlogs_folder = \"logs\"\n").unwrap();
        assert_eq!(settings.paths.logs_folder, "logs");
        assert_eq!(settings.timer.tick_interval_ms, 100);
    }
}
