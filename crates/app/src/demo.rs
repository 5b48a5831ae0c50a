//! Demonstration scenario — the fixed sequence the binary runs.
//!
//! Builds a light and a thermostat, wraps their operations into commands,
//! bundles all four into a composite and drives them through one remote.

use std::sync::Arc;

use homeremote_domain::device::{Light, Thermostat};

use crate::command::{
    Command, CompositeCommand, LightOffCommand, LightOnCommand, ThermostatDecreaseCommand,
    ThermostatIncreaseCommand,
};
use crate::device_handle::{LightHandle, ThermostatHandle};
use crate::ports::StatusReporter;
use crate::remote::RemoteController;

/// Final device state once the scenario has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoOutcome {
    pub light_on: bool,
    pub temperature: i32,
}

/// Run the scenario, delivering every status notification to `reporter`.
///
/// Everything built here is dropped before returning, so the caller gets
/// back sole ownership of the reporter.
pub fn run(reporter: Arc<dyn StatusReporter>) -> DemoOutcome {
    tracing::info!("running remote controller demo");

    let light = LightHandle::new(Light::new(), Arc::clone(&reporter));
    let thermostat = ThermostatHandle::new(Thermostat::new(), reporter);

    let light_on: Arc<dyn Command> = Arc::new(LightOnCommand::new(light.clone()));
    let light_off: Arc<dyn Command> = Arc::new(LightOffCommand::new(light.clone()));
    let thermostat_increase: Arc<dyn Command> =
        Arc::new(ThermostatIncreaseCommand::new(thermostat.clone()));
    let thermostat_decrease: Arc<dyn Command> =
        Arc::new(ThermostatDecreaseCommand::new(thermostat.clone()));

    let all_commands: Arc<dyn Command> = Arc::new(CompositeCommand::new(vec![
        Arc::clone(&light_on),
        light_off,
        Arc::clone(&thermostat_increase),
        thermostat_decrease,
    ]));

    let mut remote = RemoteController::new();

    remote.set_command(Some(light_on));
    remote.press_button();

    remote.set_command(Some(thermostat_increase));
    remote.press_button();

    remote.set_command(Some(all_commands));
    remote.press_button();

    let outcome = DemoOutcome {
        light_on: light.is_on(),
        temperature: thermostat.temperature(),
    };
    tracing::info!(
        light_on = outcome.light_on,
        temperature = outcome.temperature,
        "demo finished"
    );
    outcome
}
