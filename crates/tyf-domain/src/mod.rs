//! # tyf domain
//!
//! Types shared by every layer of the typed factory system.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Error taxonomy and `Result` alias |
//! | [`metadata`] | Concrete type and constructor descriptors |
//! | [`ports`] | Container, proxy and contract boundaries |
//! | [`value_objects`] | Type keys, parameter and method descriptors |

/// Error handling types
pub mod error;
/// Type metadata
pub mod metadata;
/// Boundary contracts
pub mod ports;
/// Immutable descriptors
pub mod value_objects;

pub use error::{BoxError, Error, MismatchReason, Result};
pub use metadata::{
    ConcreteType, ConcreteTypeBuilder, Constructor, ConstructorDescriptor, Injectable, InvokerFn,
    UpcastFn, Visibility,
};
pub use ports::{
    resolve, Activation, FactoryContract, FactoryInvoker, ResolverHandle, ServiceInstaller,
    ServiceResolver,
};
pub use value_objects::{
    downcast_value, find_duplicate_name, AnyValue, Arguments, FactoryMethodDescriptor,
    ParameterDescriptor, TypeKey,
};
