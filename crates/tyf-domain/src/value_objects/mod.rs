//! Domain Value Objects
//!
//! Immutable descriptors produced once, when a factory contract or a
//! concrete type is described, and shared read-only afterwards.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`TypeKey`] | Runtime type identity |
//! | [`ParameterDescriptor`] | Name, type and position of a parameter |
//! | [`FactoryMethodDescriptor`] | One method of a factory interface |
//! | [`Arguments`] | Positional argument cursor handed to constructors |

/// Positional argument values
pub mod arguments;
/// Factory method descriptors
pub mod method;
/// Parameter descriptors
pub mod parameter;
/// Runtime type identity
pub mod type_key;

pub use arguments::{downcast_value, AnyValue, Arguments};
pub use method::FactoryMethodDescriptor;
pub use parameter::{find_duplicate_name, ParameterDescriptor};
pub use type_key::TypeKey;
