//! Widget style functions.
//!
//! ```rust,ignore
//! button(text("Save Rules")).style(button_success)
//! ```

use iced::widget::{button, container, pick_list, text_input};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

use super::colors::WorkbenchColors;
use super::spacing::{BORDER_RADIUS_LG, BORDER_RADIUS_MD, BORDER_RADIUS_SM, BORDER_WIDTH_THIN};

// =============================================================================
// BUTTON STYLES
// =============================================================================

/// Filled button: `base` at rest, `hover` when hovered or pressed.
fn filled(theme: &Theme, status: button::Status, base: Color, hover: Color) -> button::Style {
    let colors = theme.workbench();
    let (background, text_color) = match status {
        button::Status::Active => (base, colors.text_on_accent),
        button::Status::Hovered | button::Status::Pressed => (hover, colors.text_on_accent),
        button::Status::Disabled => (colors.accent_disabled, colors.text_muted),
    };
    button::Style {
        background: Some(background.into()),
        text_color,
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        shadow: if matches!(status, button::Status::Active | button::Status::Hovered) {
            Shadow {
                color: colors.shadow,
                offset: Vector::new(0.0, 1.0),
                blur_radius: 2.0,
            }
        } else {
            Shadow::default()
        },
        ..Default::default()
    }
}

/// Primary button style - main actions.
pub fn button_primary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    filled(
        theme,
        status,
        palette.primary.base.color,
        theme.workbench().accent_hover,
    )
}

/// Success button style - the save/export action.
pub fn button_success(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    filled(
        theme,
        status,
        palette.success.base.color,
        palette.success.strong.color,
    )
}

/// Danger button style - destructive actions.
pub fn button_danger(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    filled(
        theme,
        status,
        palette.danger.base.color,
        theme.workbench().danger_hover,
    )
}

/// Secondary button style - outlined, for alternative actions.
pub fn button_secondary(theme: &Theme, status: button::Status) -> button::Style {
    let colors = theme.workbench();
    let (background, text_color, border_color) = match status {
        button::Status::Active => (
            colors.background_elevated,
            colors.text_secondary,
            colors.border_default,
        ),
        button::Status::Hovered => (
            colors.background_secondary,
            colors.text_secondary,
            colors.text_disabled,
        ),
        button::Status::Pressed => (
            colors.background_inset,
            colors.text_secondary,
            colors.border_default,
        ),
        button::Status::Disabled => (
            colors.background_secondary,
            colors.text_disabled,
            colors.border_subtle,
        ),
    };
    button::Style {
        background: Some(background.into()),
        text_color,
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: BORDER_WIDTH_THIN,
            color: border_color,
        },
        ..Default::default()
    }
}

/// Ghost button style - icon buttons and inline actions.
pub fn button_ghost(theme: &Theme, status: button::Status) -> button::Style {
    let colors = theme.workbench();
    let (background, text_color) = match status {
        button::Status::Active => (None, colors.text_secondary),
        button::Status::Hovered | button::Status::Pressed => (
            Some(Background::from(colors.accent_light)),
            colors.text_secondary,
        ),
        button::Status::Disabled => (None, colors.text_disabled),
    };
    button::Style {
        background,
        text_color,
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        ..Default::default()
    }
}

// =============================================================================
// CONTAINER STYLES
// =============================================================================

/// Card container style - one per rule.
pub fn container_card(theme: &Theme) -> container::Style {
    let colors = theme.workbench();
    container::Style {
        background: Some(colors.background_elevated.into()),
        border: Border {
            radius: BORDER_RADIUS_MD.into(),
            width: BORDER_WIDTH_THIN,
            color: colors.border_subtle,
        },
        shadow: Shadow {
            color: colors.shadow,
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        ..Default::default()
    }
}

/// Inset container style - one per condition inside a rule card.
pub fn container_inset(theme: &Theme) -> container::Style {
    let colors = theme.workbench();
    container::Style {
        background: Some(colors.background_secondary.into()),
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: BORDER_WIDTH_THIN,
            color: colors.border_subtle,
        },
        ..Default::default()
    }
}

/// Modal dialog box.
pub fn container_modal(theme: &Theme) -> container::Style {
    let colors = theme.workbench();
    container::Style {
        background: Some(colors.background_elevated.into()),
        border: Border {
            radius: BORDER_RADIUS_LG.into(),
            width: BORDER_WIDTH_THIN,
            color: colors.border_default,
        },
        shadow: Shadow {
            color: colors.shadow,
            offset: Vector::new(0.0, 4.0),
            blur_radius: 24.0,
        },
        ..Default::default()
    }
}

// =============================================================================
// INPUT STYLES
// =============================================================================

/// Default text input style.
pub fn text_input_default(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let palette = theme.extended_palette();
    let colors = theme.workbench();

    let (background, border_color, value) = match status {
        text_input::Status::Active => (
            colors.background_elevated,
            colors.border_default,
            palette.background.base.text,
        ),
        text_input::Status::Hovered => (
            colors.background_elevated,
            colors.text_disabled,
            palette.background.base.text,
        ),
        text_input::Status::Focused { .. } => (
            colors.background_elevated,
            palette.primary.base.color,
            palette.background.base.text,
        ),
        text_input::Status::Disabled => (
            colors.background_secondary,
            colors.border_subtle,
            colors.text_muted,
        ),
    };

    text_input::Style {
        background: background.into(),
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: BORDER_WIDTH_THIN,
            color: border_color,
        },
        icon: colors.text_muted,
        placeholder: colors.text_disabled,
        value,
        selection: colors.accent_light,
    }
}

/// Default pick list style.
pub fn pick_list_default(theme: &Theme, status: pick_list::Status) -> pick_list::Style {
    let palette = theme.extended_palette();
    let colors = theme.workbench();
    let border_color = match status {
        pick_list::Status::Active => colors.border_default,
        pick_list::Status::Hovered => colors.text_disabled,
        pick_list::Status::Opened { .. } => palette.primary.base.color,
    };
    pick_list::Style {
        text_color: palette.background.base.text,
        placeholder_color: colors.text_muted,
        handle_color: colors.text_secondary,
        background: colors.background_elevated.into(),
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: BORDER_WIDTH_THIN,
            color: border_color,
        },
    }
}
