//! # tyf
//!
//! Typed factories: declare a factory trait, bind it to the concrete types it
//! should create, and let the container synthesize the implementation.
//! Each factory method's parameters are passed to the concrete type's
//! constructor by name; every other constructor parameter is resolved from
//! the container.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use tyf::{ConcreteType, ConstructorDescriptor, Injectable, RegisterTypedFactory};
//! use tyf::ServiceCollection;
//!
//! pub trait Widget: Send {
//!     fn color(&self) -> &str;
//! }
//!
//! tyf::typed_factory! {
//!     pub trait WidgetFactory {
//!         fn create(&self, color: String) -> Box<dyn Widget>;
//!     }
//! }
//!
//! let mut services = ServiceCollection::new();
//! services.add_transient(|_| Ok(Gear::default()));
//! services
//!     .register_typed_factory::<dyn WidgetFactory>()
//!     .for_concrete_type::<PaintedWidget>()?;
//!
//! let provider = services.build()?;
//! let factory: Arc<dyn WidgetFactory> = provider.resolve()?;
//! let widget = factory.create("Red".to_string())?;
//! assert_eq!(widget.color(), "Red");
//! ```
//!
//! ## Architecture
//!
//! - `domain` - descriptors, ports and the error taxonomy
//! - `application` - bindings, dispatch, the factory engine and registration
//! - `infrastructure` - the reference container, configuration and logging

mod macros;

/// Domain layer - descriptors, ports and errors
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use tyf_domain::*;
}

/// Application layer - the typed factory engine
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use tyf_application::*;
}

/// Infrastructure layer - container, config and logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use tyf_infrastructure::*;
}

// Re-export commonly used types at the crate root
pub use domain::*;

pub use application::{
    ConcreteTypeBinding, DispatchMap, EngineState, FactoryEngine, RegisterTypedFactory,
    TypedFactoryFlavor, TypedFactoryRegistration,
};

pub use infrastructure::{
    AppConfig, ConfigLoader, ContainerConfig, Lifetime, LoggingConfig, ServiceCollection,
    ServiceProvider,
};
