//! # tyf application layer
//!
//! The typed factory engine: given a factory contract and the concrete types
//! it should create, this crate builds one binding per concrete type,
//! verifies every factory method against its binding, and answers calls by
//! merging named arguments with container-resolved dependencies.
//!
//! ## Components
//!
//! | Component | Role |
//! |-----------|------|
//! | [`ConcreteTypeBinding`] | Constructor matching, dependency probes, invocation |
//! | [`DispatchMap`] | Return type to binding routing |
//! | [`FactoryEngine`] | Verified call target behind every proxy |
//! | [`RegisterTypedFactory`] | Registration builder over any container |
//!
//! ## Dependencies
//!
//! This crate depends only on `tyf-domain`; containers plug in through the
//! `ServiceResolver` and `ServiceInstaller` ports.

pub mod dispatch;
pub mod engine;
pub mod registration;
pub mod resolver;

pub use dispatch::DispatchMap;
pub use engine::{EngineState, FactoryEngine};
pub use registration::{RegisterTypedFactory, TypedFactoryFlavor, TypedFactoryRegistration};
pub use resolver::ConcreteTypeBinding;
