//! App colors not covered by Iced's `ExtendedPalette`.
//!
//! ```rust,ignore
//! use crate::theme::WorkbenchColors;
//!
//! container(content).style(|theme: &Theme| container::Style {
//!     background: Some(theme.workbench().background_elevated.into()),
//!     ..Default::default()
//! })
//! ```

use iced::{Color, Theme};

/// Derived color set for the active theme.
#[derive(Debug, Clone, Copy)]
pub struct WorkbenchColorSet {
    pub background_elevated: Color,
    pub background_secondary: Color,
    pub background_inset: Color,
    pub border_default: Color,
    pub border_subtle: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_disabled: Color,
    pub text_on_accent: Color,
    pub accent_hover: Color,
    pub accent_disabled: Color,
    pub accent_light: Color,
    pub danger_hover: Color,
    /// Not in Iced's palette; used for info notifications.
    pub info: Color,
    pub shadow: Color,
    pub backdrop: Color,
}

/// Extension trait giving style closures access to [`WorkbenchColorSet`].
pub trait WorkbenchColors {
    fn workbench(&self) -> WorkbenchColorSet;
}

impl WorkbenchColors for Theme {
    fn workbench(&self) -> WorkbenchColorSet {
        let palette = self.extended_palette();
        let is_dark = palette.is_dark;
        let background = palette.background.base.color;
        let text = palette.background.base.text;
        let primary = palette.primary.base.color;
        let danger = palette.danger.base.color;

        WorkbenchColorSet {
            background_elevated: if is_dark {
                blend_color(background, Color::WHITE, 0.06)
            } else {
                Color::WHITE
            },
            background_secondary: blend_color(background, text, 0.04),
            background_inset: blend_color(background, text, 0.08),
            border_default: blend_color(background, text, 0.22),
            border_subtle: blend_color(background, text, 0.12),
            text_secondary: blend_color(text, background, 0.25),
            text_muted: blend_color(text, background, 0.45),
            text_disabled: blend_color(text, background, 0.62),
            text_on_accent: Color::WHITE,
            accent_hover: if is_dark {
                blend_color(primary, Color::WHITE, 0.15)
            } else {
                blend_color(primary, Color::BLACK, 0.12)
            },
            accent_disabled: blend_color(primary, background, 0.6),
            accent_light: if is_dark {
                Color { a: 0.15, ..primary }
            } else {
                blend_color(primary, Color::WHITE, 0.88)
            },
            danger_hover: if is_dark {
                blend_color(danger, Color::WHITE, 0.15)
            } else {
                blend_color(danger, Color::BLACK, 0.12)
            },
            info: if is_dark {
                Color::from_rgb(0.45, 0.70, 0.95)
            } else {
                Color::from_rgb(0.16, 0.50, 0.80)
            },
            shadow: Color::from_rgba(0.0, 0.0, 0.0, if is_dark { 0.4 } else { 0.08 }),
            backdrop: Color::from_rgba(0.0, 0.0, 0.0, 0.45),
        }
    }
}

fn blend_color(base: Color, blend: Color, factor: f32) -> Color {
    Color::from_rgb(
        base.r + (blend.r - base.r) * factor,
        base.g + (blend.g - base.g) * factor,
        base.b + (blend.b - base.b) * factor,
    )
}
