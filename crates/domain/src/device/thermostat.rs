//! Thermostat — an integer temperature that moves one degree at a time.

use crate::id::DeviceId;
use crate::notification::Notification;

use super::Device;

/// A simulated thermostat starting at zero degrees.
///
/// The temperature is unbounded in both directions; at the limits of `i32`
/// it wraps around instead of panicking.
#[derive(Debug, Default)]
pub struct Thermostat {
    id: DeviceId,
    temperature: i32,
}

impl Thermostat {
    /// Create a thermostat at zero degrees with a fresh id.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise the temperature by one degree.
    pub fn increase_temperature(&mut self) -> Notification {
        self.temperature = self.temperature.wrapping_add(1);
        Notification::TemperatureIncreased(self.temperature)
    }

    /// Lower the temperature by one degree.
    pub fn decrease_temperature(&mut self) -> Notification {
        self.temperature = self.temperature.wrapping_sub(1);
        Notification::TemperatureDecreased(self.temperature)
    }

    #[must_use]
    pub fn temperature(&self) -> i32 {
        self.temperature
    }
}

impl Device for Thermostat {
    fn id(&self) -> DeviceId {
        self.id
    }

    fn kind(&self) -> &'static str {
        "thermostat"
    }
}
