//! Notification — the status message a primitive device action emits.

use std::fmt;

/// Observable outcome of one device action.
///
/// The [`Display`](fmt::Display) form is the exact human-readable line shown
/// to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    /// The light was switched on.
    LightOn,
    /// The light was switched off.
    LightOff,
    /// The thermostat went up by one degree, to the carried value.
    TemperatureIncreased(i32),
    /// The thermostat went down by one degree, to the carried value.
    TemperatureDecreased(i32),
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LightOn => f.write_str("Light is ON"),
            Self::LightOff => f.write_str("Light is OFF"),
            Self::TemperatureIncreased(value) => {
                write!(f, "Thermostat temperature increased to {value}")
            }
            Self::TemperatureDecreased(value) => {
                write!(f, "Thermostat temperature decreased to {value}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_light_messages() {
        assert_eq!(Notification::LightOn.to_string(), "Light is ON");
        assert_eq!(Notification::LightOff.to_string(), "Light is OFF");
    }

    #[test]
    fn should_display_temperature_increase_with_value() {
        assert_eq!(
            Notification::TemperatureIncreased(22).to_string(),
            "Thermostat temperature increased to 22"
        );
    }

    #[test]
    fn should_display_negative_temperature_decrease() {
        assert_eq!(
            Notification::TemperatureDecreased(-3).to_string(),
            "Thermostat temperature decreased to -3"
        );
    }
}
