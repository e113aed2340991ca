//! Observer capability and notice sinks.

use parking_lot::Mutex;

use super::Alert;
use crate::error::Error;

/// Anything that can receive hub broadcasts.
///
/// Handlers run synchronously on the broadcasting thread and return nothing;
/// a panicking handler aborts delivery to the remaining observers.
pub trait AlertObserver: Send + Sync {
    /// Receive the next alert.
    fn on_alert(&self, alert: &Alert);

    /// The hub will send no further alerts.
    fn on_completed(&self) {}

    /// The hub signalled an error.
    fn on_error(&self, _error: &Error) {}
}

/// Destination for human-readable notices.
pub trait NoticeSink: Send + Sync {
    /// Write one notice line.
    fn emit(&self, notice: &str);
}

/// Prints notices to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl NoticeSink for StdoutSink {
    fn emit(&self, notice: &str) {
        println!("{notice}");
    }
}

/// Keeps every notice in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    notices: Mutex<Vec<String>>,
}

impl RecordingSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the notices emitted so far.
    pub fn notices(&self) -> Vec<String> {
        self.notices.lock().clone()
    }

    /// Remove and return the notices emitted so far.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.notices.lock())
    }

    /// Number of notices emitted so far.
    pub fn len(&self) -> usize {
        self.notices.lock().len()
    }

    /// Whether nothing has been emitted.
    pub fn is_empty(&self) -> bool {
        self.notices.lock().is_empty()
    }
}

impl NoticeSink for RecordingSink {
    fn emit(&self, notice: &str) {
        self.notices.lock().push(notice.to_string());
    }
}
