//! Typed device identifier backed by a UUID.

use std::fmt;

/// Unique identifier for a simulated device instance.
///
/// Two devices of the same kind are told apart by their id in status
/// reports and trace output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeviceId(uuid::Uuid);

impl Default for DeviceId {
    fn default() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl DeviceId {
    /// Generate a new random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
