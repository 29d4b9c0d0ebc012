//! # Infrastructure Layer
//!
//! Technical concerns supporting the typed factory engine: a dependency
//! container that implements the domain ports, plus configuration and
//! logging.
//!
//! ## Module Categories
//!
//! ### Dependency Injection
//! | Module | Description |
//! |--------|-------------|
//! | [`container`] | Runtime-keyed container with eager activation |
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment configuration from defaults, TOML and env |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |

pub mod config;
pub mod constants;
pub mod container;
pub mod error_ext;
pub mod logging;

pub use config::{AppConfig, ConfigLoader, ContainerConfig, LoggingConfig};
pub use container::{Lifetime, ServiceCollection, ServiceProvider};
pub use error_ext::ErrorContext;
