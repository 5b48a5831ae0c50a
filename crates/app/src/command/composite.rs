//! Composite command — runs an ordered list of commands as a single one.

use std::sync::Arc;

use super::Command;

/// A fixed, ordered batch of commands presented as one [`Command`].
///
/// Members run in list order and every member runs; an empty batch does
/// nothing. Composites may contain other composites.
pub struct CompositeCommand {
    commands: Vec<Arc<dyn Command>>,
}

impl CompositeCommand {
    #[must_use]
    pub fn new(commands: Vec<Arc<dyn Command>>) -> Self {
        Self { commands }
    }

    /// Number of direct members (nested composites count as one).
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Command for CompositeCommand {
    fn execute(&self) {
        for (index, command) in self.commands.iter().enumerate() {
            tracing::trace!(index, command = command.name(), "running composite member");
            command.execute();
        }
    }

    fn name(&self) -> &'static str {
        "composite"
    }
}
