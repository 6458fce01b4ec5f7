//! Spacing constants for consistent layout. All values are pixels.

pub const SPACING_XS: f32 = 4.0;
pub const SPACING_SM: f32 = 8.0;
pub const SPACING_MD: f32 = 16.0;
pub const SPACING_LG: f32 = 24.0;

/// Buttons, inputs, chips
pub const BORDER_RADIUS_SM: f32 = 4.0;
/// Cards, panels
pub const BORDER_RADIUS_MD: f32 = 6.0;
/// Modals, dialogs
pub const BORDER_RADIUS_LG: f32 = 8.0;

pub const BORDER_WIDTH_THIN: f32 = 1.0;

/// Width of the editing column; wider windows center it.
pub const CONTENT_MAX_WIDTH: f32 = 1100.0;

pub const MODAL_WIDTH_MD: f32 = 440.0;
