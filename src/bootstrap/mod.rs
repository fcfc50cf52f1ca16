//! Process startup: configuration, logging, dependency wiring and the
//! command dispatch that runs on top of them.

pub mod config;
pub mod run;
pub mod tracing;
pub mod wiring;

pub use config::{load_app_config, load_config, ConfigError, Settings};
pub use run::run_command;
pub use wiring::{wire_dependencies, wire_with_clipboard, AppRuntime, WiringError};
