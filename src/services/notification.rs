//! User-facing notifications
//!
//! Services report outcomes as toasts through a `Notifier`. The CLI logs
//! them; tests record them for inspection.

use std::sync::Mutex;

use tracing::{error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

/// A short transient message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }
}

pub trait Notifier: Send + Sync {
    fn notify(&self, toast: Toast);

    fn success(&self, message: &str) {
        self.notify(Toast::new(ToastKind::Success, message));
    }

    fn error(&self, message: &str) {
        self.notify(Toast::new(ToastKind::Error, message));
    }

    fn info(&self, message: &str) {
        self.notify(Toast::new(ToastKind::Info, message));
    }
}

/// Writes every toast to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, toast: Toast) {
        match toast.kind {
            ToastKind::Success => info!(toast = "success", "{}", toast.message),
            ToastKind::Info => info!(toast = "info", "{}", toast.message),
            ToastKind::Error => error!(toast = "error", "{}", toast.message),
        }
    }
}

/// Keeps every toast in memory
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    toasts: Mutex<Vec<Toast>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn messages(&self, kind: ToastKind) -> Vec<String> {
        self.toasts()
            .into_iter()
            .filter(|t| t.kind == kind)
            .map(|t| t.message)
            .collect()
    }

    pub fn successes(&self) -> Vec<String> {
        self.messages(ToastKind::Success)
    }

    pub fn errors(&self) -> Vec<String> {
        self.messages(ToastKind::Error)
    }

    pub fn clear(&self) {
        self.toasts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clear();
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, toast: Toast) {
        self.toasts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(toast);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_notifier_keeps_order_and_kind() {
        let notifier = RecordingNotifier::new();
        notifier.success("saved");
        notifier.error("broken");
        notifier.info("bye");

        assert_eq!(notifier.toasts().len(), 3);
        assert_eq!(notifier.successes(), ["saved"]);
        assert_eq!(notifier.errors(), ["broken"]);

        notifier.clear();
        assert!(notifier.toasts().is_empty());
    }
}
