//! # homeremote-adapter-console
//!
//! Console adapter that implements the `StatusReporter` port by writing one
//! line per device notification.
//!
//! | Notification | Line |
//! |--------------|------|
//! | light on | `Light is ON` |
//! | light off | `Light is OFF` |
//! | thermostat up | `Thermostat temperature increased to {value}` |
//! | thermostat down | `Thermostat temperature decreased to {value}` |
//!
//! ## Dependency rule
//!
//! Depends on `homeremote-app` (port traits) and `homeremote-domain` only.

use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use homeremote_app::ports::StatusReporter;
use homeremote_domain::id::DeviceId;
use homeremote_domain::notification::Notification;

/// Writes status lines to `W` (stdout unless told otherwise).
///
/// Write failures are logged and dropped: a device action never fails
/// because its status line could not be printed.
pub struct ConsoleReporter<W = io::Stdout> {
    out: Mutex<W>,
}

impl ConsoleReporter<io::Stdout> {
    /// Reporter printing to the process standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    /// Reporter printing to an arbitrary writer.
    #[must_use]
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Give back the underlying writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> StatusReporter for ConsoleReporter<W> {
    fn report(&self, device: DeviceId, notification: &Notification) {
        tracing::debug!(%device, %notification, "printing status line");
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(err) = writeln!(out, "{notification}").and_then(|()| out.flush()) {
            tracing::warn!(%err, %device, "failed to write status line");
        }
    }
}
