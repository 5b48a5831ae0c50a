//! # homeremote — remote controller demo
//!
//! Composition root that wires the console adapter into the application
//! layer and runs the demonstration.
//!
//! ## Responsibilities
//! - Load logging configuration (config file, env vars), falling back to
//!   defaults so a bad setting never stops the demo
//! - Install the tracing subscriber on stderr, keeping stdout for status lines
//! - Construct the console `StatusReporter` adapter
//! - Run the fixed remote controller scenario
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;

use homeremote_adapter_console::ConsoleReporter;
use homeremote_app::demo;

use crate::config::Config;

fn main() {
    let (config, problems) = Config::load();

    tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_ansi(config.logging.ansi)
        .with_writer(std::io::stderr)
        .init();

    for problem in &problems {
        tracing::warn!(error = %problem, "ignoring invalid logging configuration, using defaults");
    }

    let reporter = Arc::new(ConsoleReporter::stdout());
    let outcome = demo::run(reporter);
    tracing::debug!(?outcome, "remote controller demo complete");
}
