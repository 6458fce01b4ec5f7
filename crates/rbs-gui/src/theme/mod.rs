//! Theme module for Ruleset Builder Studio.
//!
//! - `palette` - light and dark palettes plus [`ThemeMode`]
//! - `colors` - [`WorkbenchColors`], app colors derived from the active theme
//! - `spacing` - layout constants
//! - `styles` - widget style functions
//!
//! Style functions receive `&Theme`, so the whole UI follows whichever
//! palette the shell applied through [`workbench_theme`].

pub mod colors;
pub mod palette;
pub mod spacing;
pub mod styles;

pub use colors::WorkbenchColors;
pub use palette::{ThemeMode, workbench_theme};
pub use spacing::{
    BORDER_RADIUS_LG, BORDER_RADIUS_MD, BORDER_RADIUS_SM, BORDER_WIDTH_THIN, CONTENT_MAX_WIDTH,
    MODAL_WIDTH_MD, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XS,
};
pub use styles::{
    button_danger, button_ghost, button_primary, button_secondary, button_success,
    container_card, container_inset, container_modal, pick_list_default, text_input_default,
};
