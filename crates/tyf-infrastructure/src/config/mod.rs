//! Configuration
//!
//! Typed configuration for logging and the dependency container, loaded with
//! Figment from defaults, TOML and environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, ContainerConfig, LoggingConfig};
