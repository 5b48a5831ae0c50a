//! Shared device handles — how commands reach the devices they target.
//!
//! A handle is cheap to clone; every clone points at the same device state.
//! Several commands can therefore target one device, and the device lives as
//! long as any command (or the client) still holds a handle to it.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use homeremote_domain::device::{Device, Light, Thermostat};
use homeremote_domain::id::DeviceId;
use homeremote_domain::notification::Notification;

use crate::ports::StatusReporter;

/// Shared access to a device plus the reporter its notifications go to.
///
/// Each device is guarded by its own mutex, so concurrent callers are
/// serialized per device. The notification is reported after the lock is
/// released.
pub struct DeviceHandle<D> {
    device: Arc<Mutex<D>>,
    reporter: Arc<dyn StatusReporter>,
}

/// Handle to a shared [`Light`].
pub type LightHandle = DeviceHandle<Light>;

/// Handle to a shared [`Thermostat`].
pub type ThermostatHandle = DeviceHandle<Thermostat>;

impl<D> Clone for DeviceHandle<D> {
    fn clone(&self) -> Self {
        Self {
            device: Arc::clone(&self.device),
            reporter: Arc::clone(&self.reporter),
        }
    }
}

impl<D: Device> DeviceHandle<D> {
    /// Take ownership of `device` and share it behind a new handle.
    #[must_use]
    pub fn new(device: D, reporter: Arc<dyn StatusReporter>) -> Self {
        Self {
            device: Arc::new(Mutex::new(device)),
            reporter,
        }
    }

    #[must_use]
    pub fn id(&self) -> DeviceId {
        self.lock().id()
    }

    fn apply(&self, action: impl FnOnce(&mut D) -> Notification) {
        let (id, kind, notification) = {
            let mut device = self.lock();
            let notification = action(&mut *device);
            (device.id(), device.kind(), notification)
        };
        tracing::debug!(device = %id, kind, %notification, "device state changed");
        self.reporter.report(id, &notification);
    }

    fn lock(&self) -> MutexGuard<'_, D> {
        self.device.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DeviceHandle<Light> {
    /// Switch the light on and report `Light is ON`.
    pub fn turn_on(&self) {
        self.apply(Light::turn_on);
    }

    /// Switch the light off and report `Light is OFF`.
    pub fn turn_off(&self) {
        self.apply(Light::turn_off);
    }

    #[must_use]
    pub fn is_on(&self) -> bool {
        self.lock().is_on()
    }
}

impl DeviceHandle<Thermostat> {
    /// Raise the temperature by one degree and report the new value.
    pub fn increase_temperature(&self) {
        self.apply(Thermostat::increase_temperature);
    }

    /// Lower the temperature by one degree and report the new value.
    pub fn decrease_temperature(&self) {
        self.apply(Thermostat::decrease_temperature);
    }

    #[must_use]
    pub fn temperature(&self) -> i32 {
        self.lock().temperature()
    }
}
