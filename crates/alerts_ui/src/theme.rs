//! Theme configuration for Weekly Alerts.
//!
//! Colors are ported from the original application's palette.

use iced::widget::{container, progress_bar};
use iced::{Border, Theme};

/// Application colors.
pub mod colors {
    use iced::Color;

    /// Header banner background (80, 45, 129).
    pub const HEADER_BG: Color = Color::from_rgb(0.314, 0.176, 0.506);

    /// Header banner text.
    pub const HEADER_FG: Color = Color::from_rgb(1.0, 1.0, 1.0);

    /// Progress bar fill (0, 167, 181).
    pub const BAR: Color = Color::from_rgb(0.0, 0.655, 0.710);

    /// Progress bar trough (217, 217, 217).
    pub const TROUGH: Color = Color::from_rgb(0.851, 0.851, 0.851);
}

/// Spacing constants.
pub mod spacing {
    /// Small spacing (8px)
    pub const SM: f32 = 8.0;
    /// Medium spacing (12px)
    pub const MD: f32 = 12.0;
    /// Large spacing (24px)
    pub const LG: f32 = 24.0;
}

/// Style for the header banner.
pub fn header(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(colors::HEADER_BG.into()),
        text_color: Some(colors::HEADER_FG),
        ..container::Style::default()
    }
}

/// Style for the progress bar, matching the original bar colors.
pub fn progress(_theme: &Theme) -> progress_bar::Style {
    progress_bar::Style {
        background: colors::TROUGH.into(),
        bar: colors::BAR.into(),
        border: Border::default(),
    }
}
