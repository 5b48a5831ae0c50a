//! Light commands — switch a light on or off.

use crate::device_handle::LightHandle;

use super::Command;

/// Switches the target light on.
pub struct LightOnCommand {
    light: LightHandle,
}

impl LightOnCommand {
    #[must_use]
    pub fn new(light: LightHandle) -> Self {
        Self { light }
    }
}

impl Command for LightOnCommand {
    fn execute(&self) {
        self.light.turn_on();
    }

    fn name(&self) -> &'static str {
        "light_on"
    }
}

/// Switches the target light off.
pub struct LightOffCommand {
    light: LightHandle,
}

impl LightOffCommand {
    #[must_use]
    pub fn new(light: LightHandle) -> Self {
        Self { light }
    }
}

impl Command for LightOffCommand {
    fn execute(&self) {
        self.light.turn_off();
    }

    fn name(&self) -> &'static str {
        "light_off"
    }
}
