//! Color palettes for Ruleset Builder Studio.

use iced::theme::Palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Theme mode for light/dark appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Human-readable label for UI display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }

    /// All available modes for UI picker.
    pub const ALL: [Self; 2] = [Self::Light, Self::Dark];
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Build the application theme for the given mode.
pub fn workbench_theme(mode: ThemeMode) -> Theme {
    let (name, palette) = match mode {
        ThemeMode::Light => ("Workbench Light", light()),
        ThemeMode::Dark => ("Workbench Dark", dark()),
    };
    Theme::custom(name.to_string(), palette)
}

fn light() -> Palette {
    Palette {
        background: Color::from_rgb(0.97, 0.97, 0.98),
        text: Color::from_rgb(0.11, 0.12, 0.14),
        primary: Color::from_rgb(0.10, 0.46, 0.82), // Blue
        success: Color::from_rgb(0.18, 0.63, 0.35), // Green
        warning: Color::from_rgb(0.93, 0.62, 0.07), // Amber
        danger: Color::from_rgb(0.83, 0.22, 0.22),  // Red
    }
}

fn dark() -> Palette {
    Palette {
        background: Color::from_rgb(0.09, 0.10, 0.12),
        text: Color::from_rgb(0.93, 0.94, 0.96),
        primary: Color::from_rgb(0.35, 0.62, 0.95),
        success: Color::from_rgb(0.35, 0.78, 0.52),
        warning: Color::from_rgb(1.0, 0.74, 0.24),
        danger: Color::from_rgb(0.95, 0.42, 0.42),
    }
}
