//! Transient user notification shown in the banner.

use std::time::{Duration, Instant};

/// How long an open notification stays before auto-hiding.
pub const AUTO_HIDE_AFTER: Duration = Duration::from_secs(6);

/// Notification classification. Purely presentational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Success,
    Error,
    Info,
}

/// Banner state.
///
/// Closing only flips `open`; the last message and severity stay so that a
/// repeat of the same notification is still visible as a closed -> open
/// transition.
#[derive(Debug, Clone, Default)]
pub struct Notification {
    pub open: bool,
    pub message: String,
    pub severity: Severity,
    opened_at: Option<Instant>,
}

impl Notification {
    /// Replace the message and open the banner.
    pub fn show(&mut self, severity: Severity, message: impl Into<String>) {
        self.severity = severity;
        self.message = message.into();
        self.open = true;
        self.opened_at = Some(Instant::now());
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.show(Severity::Success, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.show(Severity::Error, message);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.show(Severity::Info, message);
    }

    /// Close the banner, keeping message and severity.
    pub fn dismiss(&mut self) {
        self.open = false;
        self.opened_at = None;
    }

    /// Close the banner if it has been open for [`AUTO_HIDE_AFTER`].
    ///
    /// Returns `true` when this call closed it.
    pub fn expire(&mut self, now: Instant) -> bool {
        match self.opened_at {
            Some(opened) if self.open && now.saturating_duration_since(opened) >= AUTO_HIDE_AFTER => {
                self.dismiss();
                true
            }
            _ => false,
        }
    }
}
