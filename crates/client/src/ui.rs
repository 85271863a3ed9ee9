//! UI-facing capabilities consumed by the flows.
//!
//! The toast presenter, the destructive-action confirm prompt, and
//! navigation are external collaborators; the flows only need these
//! narrow interfaces.

/// Severity level of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
}

/// A leveled notification presenter (toaster).
pub trait Notifier {
    /// Show a message to the user.
    fn notify(&self, level: Level, message: &str);
}

/// A blocking destructive-action confirmation prompt.
pub trait ConfirmPrompt {
    /// Ask the user to confirm; `true` means proceed.
    fn confirm(&self, message: &str) -> bool;
}

/// Full-page navigation, discarding client state.
pub trait Navigator {
    /// Replace the current location with `path`.
    fn replace(&self, path: &str);
}

/// Notifier that writes to the tracing subscriber instead of a UI.
///
/// Useful for headless runs and as a default when no toaster is wired up.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, level: Level, message: &str) {
        match level {
            Level::Info => tracing::info!(message, "notification"),
            Level::Warn => tracing::warn!(message, "notification"),
        }
    }
}
