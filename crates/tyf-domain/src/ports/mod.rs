//! Domain Port Interfaces
//!
//! Boundary contracts between the factory engine and its collaborators:
//!
//! - **resolver** - the dependency container as seen by the engine
//! - **installer** - how a finished engine is handed to the container
//! - **invoker** - what a call-interception proxy forwards to
//! - **contract** - what a factory interface must describe about itself

/// Factory contract port
pub mod contract;
/// Provider installation port
pub mod installer;
/// Call interception port
pub mod invoker;
/// Dependency resolution port
pub mod resolver;

pub use contract::FactoryContract;
pub use installer::{Activation, ServiceInstaller};
pub use invoker::FactoryInvoker;
pub use resolver::{resolve, ResolverHandle, ServiceResolver};
