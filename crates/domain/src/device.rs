//! Device — a simulated receiver that commands act upon.
//!
//! Devices hold plain state and never perform IO. Each mutating operation
//! returns the [`Notification`](crate::notification::Notification) that
//! describes its outcome, leaving delivery to the caller.

mod light;
mod thermostat;

pub use light::Light;
pub use thermostat::Thermostat;

use crate::id::DeviceId;

/// Behaviour shared by every simulated device.
pub trait Device {
    /// Identifier of this device instance.
    fn id(&self) -> DeviceId;

    /// Short lowercase label of the device kind (e.g. `"light"`).
    fn kind(&self) -> &'static str;
}
