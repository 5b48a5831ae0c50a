//! Light — a switchable receiver.

use crate::id::DeviceId;
use crate::notification::Notification;

use super::Device;

/// A simulated light, off until switched on.
#[derive(Debug, Default)]
pub struct Light {
    id: DeviceId,
    on: bool,
}

impl Light {
    /// Create a light, switched off, with a fresh id.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch the light on.
    pub fn turn_on(&mut self) -> Notification {
        self.on = true;
        Notification::LightOn
    }

    /// Switch the light off.
    pub fn turn_off(&mut self) -> Notification {
        self.on = false;
        Notification::LightOff
    }

    #[must_use]
    pub fn is_on(&self) -> bool {
        self.on
    }
}

impl Device for Light {
    fn id(&self) -> DeviceId {
        self.id
    }

    fn kind(&self) -> &'static str {
        "light"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_off() {
        assert!(!Light::new().is_on());
    }

    #[test]
    fn should_report_on_after_turn_on() {
        let mut light = Light::new();
        assert_eq!(light.turn_on(), Notification::LightOn);
        assert!(light.is_on());
    }

    #[test]
    fn should_report_off_after_turn_off() {
        let mut light = Light::new();
        light.turn_on();
        assert_eq!(light.turn_off(), Notification::LightOff);
        assert!(!light.is_on());
    }

    #[test]
    fn should_reflect_last_call_for_any_sequence() {
        let sequences: [&[bool]; 5] = [
            &[true],
            &[false],
            &[true, true, false],
            &[false, true],
            &[true, false, false, true, true],
        ];

        for sequence in sequences {
            let mut light = Light::new();
            for &on in sequence {
                if on {
                    light.turn_on();
                } else {
                    light.turn_off();
                }
            }
            assert_eq!(light.is_on(), *sequence.last().unwrap(), "{sequence:?}");
        }
    }

    #[test]
    fn should_keep_distinct_ids_per_instance() {
        assert_ne!(Light::new().id(), Light::new().id());
    }
}
