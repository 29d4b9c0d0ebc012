//! Dependency container
//!
//! A small runtime-keyed container: registrations are collected in a
//! [`ServiceCollection`] and frozen into a [`ServiceProvider`] by `build`.
//! It implements the domain's [`ServiceInstaller`](tyf_domain::ServiceInstaller)
//! and [`ServiceResolver`](tyf_domain::ServiceResolver) ports, so typed
//! factories can be registered on it directly.

mod collection;
mod provider;
mod registration;

pub use collection::ServiceCollection;
pub use provider::ServiceProvider;
pub use registration::{FactoryFn, Lifetime};
