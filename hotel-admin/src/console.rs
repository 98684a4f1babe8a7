//! Notices printed to the terminal

use std::sync::atomic::{AtomicBool, Ordering};

use hotel_client::{Notifier, TracingNotifier};

/// Successes go to stdout, errors to stderr; both are also logged
#[derive(Debug, Default)]
pub struct ConsoleNotifier {
    log: TracingNotifier,
    reported: AtomicBool,
}

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an error was already shown to the user
    pub fn reported_error(&self) -> bool {
        self.reported.load(Ordering::Relaxed)
    }
}

impl Notifier for ConsoleNotifier {
    fn success(&self, message: &str) {
        self.log.success(message);
        println!("{}", message);
    }

    fn error(&self, message: &str) {
        self.log.error(message);
        self.reported.store(true, Ordering::Relaxed);
        eprintln!("error: {}", message);
    }
}
