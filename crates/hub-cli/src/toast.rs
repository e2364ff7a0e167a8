//! Terminal delivery of advisory notifications

use colored::Colorize;

use hub_tools::{Notification, Notifier, Severity};

/// Notifier that renders notifications as colored lines on stderr.
///
/// Stderr keeps toasts out of tool output, so piping `toolhub open` results
/// stays clean.
#[derive(Debug, Default)]
pub struct TerminalToast;

impl Notifier for TerminalToast {
    fn notify(&self, notification: &Notification) {
        let title = match notification.severity {
            Severity::Info => notification.title.blue().bold(),
            Severity::Warning => notification.title.yellow().bold(),
            Severity::Error => notification.title.red().bold(),
        };
        eprintln!("{}: {}", title, notification.description);
    }
}
