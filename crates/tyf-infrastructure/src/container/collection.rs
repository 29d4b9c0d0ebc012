//! Service collection
//!
//! The mutable registration phase of the container. Consumed by
//! [`ServiceCollection::build`], which produces an immutable
//! [`ServiceProvider`].

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use tracing::{debug, info, instrument};
use tyf_domain::error::{Error, Result};
use tyf_domain::{Activation, AnyValue, ResolverHandle, ServiceInstaller, TypeKey};

use super::provider::ServiceProvider;
use super::registration::{FactoryFn, Lifetime, Registration};
use crate::config::ContainerConfig;

/// Builder for a [`ServiceProvider`]
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use tyf_infrastructure::container::ServiceCollection;
///
/// struct Database {
///     url: String,
/// }
///
/// let mut services = ServiceCollection::new();
/// services.add_singleton(|_| {
///     Ok(Arc::new(Database {
///         url: "postgres://localhost".to_string(),
///     }))
/// });
///
/// let provider = services.build().expect("container");
/// let db: Arc<Database> = provider.resolve().expect("database");
/// assert_eq!(db.url, "postgres://localhost");
/// ```
#[derive(Debug, Default)]
pub struct ServiceCollection {
    config: ContainerConfig,
    registrations: Vec<Registration>,
}

impl ServiceCollection {
    /// Create an empty collection with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty collection with explicit settings
    pub fn with_config(config: ContainerConfig) -> Self {
        Self {
            config,
            registrations: Vec::new(),
        }
    }

    /// Register a pre-built value, cloned on every resolve
    pub fn add_instance<T: Clone + Send + Sync + 'static>(&mut self, value: T) -> &mut Self {
        let factory: FactoryFn = Arc::new(move |_: &ResolverHandle| -> Result<AnyValue> {
            Ok(Box::new(value.clone()))
        });
        self.push(TypeKey::of::<T>(), Lifetime::Singleton, Activation::Lazy, factory)
    }

    /// Register a lazily created singleton
    ///
    /// `T` must be `Clone`; use `Arc<T>` for shared services.
    pub fn add_singleton<T, F>(&mut self, factory: F) -> &mut Self
    where
        T: Clone + Send + Sync + 'static,
        F: Fn(&ResolverHandle) -> Result<T> + Send + Sync + 'static,
    {
        self.push_singleton(Activation::Lazy, factory)
    }

    /// Register a factory called on every resolve
    pub fn add_transient<T, F>(&mut self, factory: F) -> &mut Self
    where
        T: Send + 'static,
        F: Fn(&ResolverHandle) -> Result<T> + Send + Sync + 'static,
    {
        let factory: FactoryFn = Arc::new(move |resolver: &ResolverHandle| -> Result<AnyValue> {
            Ok(Box::new(factory(resolver)?))
        });
        self.push(TypeKey::of::<T>(), Lifetime::Transient, Activation::Lazy, factory)
    }

    /// True if `T` has a registration
    pub fn contains<T: ?Sized + 'static>(&self) -> bool {
        let key = TypeKey::of::<T>();
        self.registrations.iter().any(|r| r.key == key)
    }

    /// Number of registrations, duplicates included
    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    /// True if nothing is registered
    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// Build the container and activate eager singletons
    ///
    /// Eager singletons (typed factories among them) are activated in
    /// registration order; the first failure is returned and no provider is
    /// produced.
    #[instrument(skip(self), name = "container_build")]
    pub fn build(self) -> Result<ServiceProvider> {
        info!(registered = self.registrations.len(), "Building container");

        let mut registry: HashMap<TypeKey, Registration> = HashMap::new();
        let mut eager: Vec<TypeKey> = Vec::new();
        for registration in self.registrations {
            let key = registration.key;
            if registry.contains_key(&key) {
                if !self.config.allow_override {
                    return Err(Error::already_registered(key.name()));
                }
                debug!(key = key.name(), "Overriding registration");
                eager.retain(|k| *k != key);
            }
            if registration.activation == Activation::Eager {
                eager.push(key);
            }
            registry.insert(key, registration);
        }

        let provider = ServiceProvider::new(registry, self.config.detect_cycles);
        for key in &eager {
            debug!(key = key.name(), "Activating eager singleton");
            provider.resolve_key(key)?;
        }

        info!(
            services = provider.len(),
            eager = eager.len(),
            "Container built"
        );
        Ok(provider)
    }

    fn push_singleton<T, F>(&mut self, activation: Activation, factory: F) -> &mut Self
    where
        T: Clone + Send + Sync + 'static,
        F: Fn(&ResolverHandle) -> Result<T> + Send + Sync + 'static,
    {
        let cell: OnceCell<T> = OnceCell::new();
        let factory: FactoryFn = Arc::new(move |resolver: &ResolverHandle| -> Result<AnyValue> {
            let value = cell.get_or_try_init(|| factory(resolver))?;
            Ok(Box::new(value.clone()))
        });
        self.push(TypeKey::of::<T>(), Lifetime::Singleton, activation, factory)
    }

    fn push(
        &mut self,
        key: TypeKey,
        lifetime: Lifetime,
        activation: Activation,
        factory: FactoryFn,
    ) -> &mut Self {
        debug!(key = key.name(), %lifetime, "Registered service");
        self.registrations.push(Registration {
            key,
            lifetime,
            activation,
            factory,
        });
        self
    }
}

impl ServiceInstaller for ServiceCollection {
    fn install_singleton<T, F>(&mut self, activation: Activation, factory: F)
    where
        T: Clone + Send + Sync + 'static,
        F: Fn(&ResolverHandle) -> Result<T> + Send + Sync + 'static,
    {
        self.push_singleton(activation, factory);
    }
}
