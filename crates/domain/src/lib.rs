//! # homeremote-domain
//!
//! Pure domain model for the homeremote command demo.
//!
//! ## Responsibilities
//! - Foundational types: typed device identifiers
//! - Define **Devices** (the receivers commands act upon: light, thermostat)
//! - Define **Notifications** (the status message each device action emits)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or IO crates.
//! Delivering notifications is expressed as a port in the `app` crate.

pub mod device;
pub mod id;
pub mod notification;
