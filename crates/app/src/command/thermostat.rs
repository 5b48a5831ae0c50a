//! Thermostat commands — nudge the temperature one degree up or down.

use crate::device_handle::ThermostatHandle;

use super::Command;

/// Raises the target thermostat by one degree.
pub struct ThermostatIncreaseCommand {
    thermostat: ThermostatHandle,
}

impl ThermostatIncreaseCommand {
    #[must_use]
    pub fn new(thermostat: ThermostatHandle) -> Self {
        Self { thermostat }
    }
}

impl Command for ThermostatIncreaseCommand {
    fn execute(&self) {
        self.thermostat.increase_temperature();
    }

    fn name(&self) -> &'static str {
        "thermostat_increase"
    }
}

/// Lowers the target thermostat by one degree.
pub struct ThermostatDecreaseCommand {
    thermostat: ThermostatHandle,
}

impl ThermostatDecreaseCommand {
    #[must_use]
    pub fn new(thermostat: ThermostatHandle) -> Self {
        Self { thermostat }
    }
}

impl Command for ThermostatDecreaseCommand {
    fn execute(&self) {
        self.thermostat.decrease_temperature();
    }

    fn name(&self) -> &'static str {
        "thermostat_decrease"
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use homeremote_domain::device::Thermostat;

    use super::*;
    use crate::ports::StatusReporter;
    use crate::testing::RecordingReporter;

    fn setup() -> (Arc<RecordingReporter>, ThermostatHandle) {
        let reporter = Arc::new(RecordingReporter::default());
        let thermostat = ThermostatHandle::new(
            Thermostat::new(),
            Arc::clone(&reporter) as Arc<dyn StatusReporter>,
        );
        (reporter, thermostat)
    }

    #[test]
    fn should_increase_temperature_when_executed() {
        let (reporter, thermostat) = setup();
        ThermostatIncreaseCommand::new(thermostat.clone()).execute();
        assert_eq!(thermostat.temperature(), 1);
        assert_eq!(reporter.lines(), vec!["Thermostat temperature increased to 1"]);
    }

    #[test]
    fn should_decrease_below_zero_when_executed() {
        let (reporter, thermostat) = setup();
        ThermostatDecreaseCommand::new(thermostat.clone()).execute();
        assert_eq!(thermostat.temperature(), -1);
        assert_eq!(reporter.lines(), vec!["Thermostat temperature decreased to -1"]);
    }

    #[test]
    fn should_reach_net_change_after_repeated_executions() {
        let (_, thermostat) = setup();
        let up = ThermostatIncreaseCommand::new(thermostat.clone());
        let down = ThermostatDecreaseCommand::new(thermostat.clone());

        for _ in 0..5 {
            up.execute();
        }
        for _ in 0..2 {
            down.execute();
        }

        assert_eq!(thermostat.temperature(), 3);
    }

    #[test]
    fn should_expose_stable_names() {
        let (_, thermostat) = setup();
        assert_eq!(
            ThermostatIncreaseCommand::new(thermostat.clone()).name(),
            "thermostat_increase"
        );
        assert_eq!(
            ThermostatDecreaseCommand::new(thermostat).name(),
            "thermostat_decrease"
        );
    }
}
