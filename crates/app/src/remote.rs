//! Remote controller — the invoker that triggers whatever command is bound.

use std::sync::Arc;

use crate::command::Command;

/// A single-button remote.
///
/// The button slot is either empty or holds one command, simple or
/// composite. Pressing an empty slot does nothing.
#[derive(Default)]
pub struct RemoteController {
    slot: Option<Arc<dyn Command>>,
}

impl RemoteController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `command` to the button, replacing any previous binding.
    ///
    /// Passing `None` clears the slot.
    pub fn set_command(&mut self, command: Option<Arc<dyn Command>>) {
        if let Some(command) = &command {
            tracing::debug!(command = command.name(), "binding remote button");
        } else {
            tracing::debug!("clearing remote button");
        }
        self.slot = command;
    }

    /// Whether a command is currently bound.
    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.slot.is_some()
    }

    /// Execute the bound command, if any.
    ///
    /// Each press runs the command again; nothing is deduplicated.
    pub fn press_button(&self) {
        if let Some(command) = &self.slot {
            tracing::debug!(command = command.name(), "remote button pressed");
            command.execute();
        } else {
            tracing::debug!("remote button pressed with no command bound");
        }
    }
}
