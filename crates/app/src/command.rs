//! Command — an encapsulated, parameterless action bound to one target.
//!
//! Concrete commands capture a device handle at construction and never
//! rebind it. [`CompositeCommand`] groups other commands and runs them as one.

mod composite;
mod light;
mod thermostat;

pub use composite::CompositeCommand;
pub use light::{LightOffCommand, LightOnCommand};
pub use thermostat::{ThermostatDecreaseCommand, ThermostatIncreaseCommand};

/// The capability every command exposes.
///
/// Implementations are shared as `Arc<dyn Command>` so that the same command
/// can be bound to a remote and listed in several composites at once.
pub trait Command: Send + Sync {
    /// Perform the action. Every call performs it again.
    fn execute(&self);

    /// Stable label used in trace output (e.g. `"light_on"`).
    fn name(&self) -> &'static str;
}
