//! Type metadata
//!
//! Descriptions of concrete types and their constructors, built once and
//! consumed by the factory engine when it creates its bindings.

/// Concrete type descriptors
pub mod concrete;
/// Constructor descriptors and invokers
pub mod constructor;

pub use concrete::{ConcreteType, ConcreteTypeBuilder, Injectable, UpcastFn};
pub use constructor::{Constructor, ConstructorDescriptor, InvokerFn, Visibility};
