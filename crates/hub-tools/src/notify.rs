//! Advisory notification contract between the dispatch core and the shell

/// How prominently the shell should surface a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Advisory only; must never block rendering.
    Info,
    Warning,
    Error,
}

/// A user-facing message signaling a recoverable condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notification {
    /// Create an informational notification.
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Info,
        }
    }
}

/// Delivery facility supplied by the shell.
///
/// The dispatch core hands notifications to this trait and moves on; whether
/// they become a toast, a log line, or nothing at all is the collaborator's
/// concern.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: &Notification);
}

/// Notifier that drops everything. Default when no shell is attached.
#[derive(Debug, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _notification: &Notification) {}
}
