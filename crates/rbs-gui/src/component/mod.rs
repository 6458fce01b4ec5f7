//! Reusable UI components.
//!
//! - **Overlays**: `modal`, `confirm_modal`
//! - **Feedback**: `view_notification`
//! - **Form**: `form_field`, `labeled`
//! - **Icons**: use `iced_fonts::lucide::*` directly (see <https://lucide.dev/icons/>)
//!
//! Components are plain functions returning `Element<M>`.

mod form_field;
mod modal;
mod toast;

pub use form_field::{form_field, labeled};
pub use modal::{confirm_modal, modal};
pub use toast::view_notification;
