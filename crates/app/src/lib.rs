//! # homeremote-app
//!
//! Application layer — the command pattern and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **outbound port** adapters implement:
//!   - `StatusReporter` — receives every device notification
//! - Share devices between commands through cloneable handles
//! - Define the **Command** capability, its light/thermostat variants and
//!   the `CompositeCommand` that batches them
//! - Provide the `RemoteController` invoker
//! - Assemble the fixed demonstration scenario
//!
//! ## Dependency rule
//! Depends on `homeremote-domain` only (plus `tracing`).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod command;
pub mod demo;
pub mod device_handle;
pub mod ports;
pub mod remote;

#[cfg(test)]
mod testing;
