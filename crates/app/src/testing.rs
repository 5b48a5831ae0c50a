//! Test doubles shared by the unit tests of this crate.

use std::sync::{Arc, Mutex};

use homeremote_domain::id::DeviceId;
use homeremote_domain::notification::Notification;

use crate::command::Command;
use crate::ports::StatusReporter;

/// Reporter that keeps every notification in memory.
#[derive(Default)]
pub struct RecordingReporter {
    reports: Mutex<Vec<(DeviceId, Notification)>>,
}

impl RecordingReporter {
    pub fn reports(&self) -> Vec<(DeviceId, Notification)> {
        self.reports.lock().unwrap().clone()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.reports().into_iter().map(|(_, n)| n).collect()
    }

    pub fn lines(&self) -> Vec<String> {
        self.notifications()
            .iter()
            .map(ToString::to_string)
            .collect()
    }
}

impl StatusReporter for RecordingReporter {
    fn report(&self, device: DeviceId, notification: &Notification) {
        self.reports.lock().unwrap().push((device, *notification));
    }
}

/// Command that appends its label to a shared journal when executed.
pub struct ProbeCommand {
    label: &'static str,
    journal: Arc<Mutex<Vec<&'static str>>>,
}

impl ProbeCommand {
    pub fn new(label: &'static str, journal: &Arc<Mutex<Vec<&'static str>>>) -> Self {
        Self {
            label,
            journal: Arc::clone(journal),
        }
    }
}

impl Command for ProbeCommand {
    fn execute(&self) {
        self.journal.lock().unwrap().push(self.label);
    }

    fn name(&self) -> &'static str {
        self.label
    }
}
