//! Service provider
//!
//! The immutable, shareable side of the container. Cloning a
//! [`ServiceProvider`] shares the same registrations and singletons.

use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use tracing::trace;
use tyf_domain::error::{Error, Result};
use tyf_domain::{downcast_value, AnyValue, ResolverHandle, ServiceResolver, TypeKey};

use super::registration::Registration;

static NEXT_CONTAINER_ID: AtomicU64 = AtomicU64::new(1);

thread_local! {
    // Keys currently being resolved on this thread, tagged with their container
    static RESOLUTION_STACK: RefCell<Vec<(u64, TypeKey)>> = const { RefCell::new(Vec::new()) };
}

/// Pops its entry from the resolution stack when dropped
struct ResolutionGuard;

impl ResolutionGuard {
    fn enter(container: u64, key: TypeKey) -> Result<Self> {
        RESOLUTION_STACK.with(|stack| {
            let mut stack = stack.borrow_mut();
            if stack.contains(&(container, key)) {
                let mut chain: Vec<String> = stack
                    .iter()
                    .filter(|(id, _)| *id == container)
                    .map(|(_, k)| k.name().to_string())
                    .collect();
                chain.push(key.name().to_string());
                return Err(Error::CircularDependency { chain });
            }
            stack.push((container, key));
            Ok(Self)
        })
    }
}

impl Drop for ResolutionGuard {
    fn drop(&mut self) {
        RESOLUTION_STACK.with(|stack| {
            stack.borrow_mut().pop();
        });
    }
}

pub(crate) struct ProviderInner {
    id: u64,
    registry: HashMap<TypeKey, Registration>,
    detect_cycles: bool,
    handle: ResolverHandle,
}

impl ServiceResolver for ProviderInner {
    fn resolve_key(&self, key: &TypeKey) -> Result<AnyValue> {
        let registration = self
            .registry
            .get(key)
            .ok_or_else(|| Error::not_registered(key.name()))?;

        // Without detection a cyclic singleton blocks on its own cell
        let _guard = if self.detect_cycles {
            Some(ResolutionGuard::enter(self.id, *key)?)
        } else {
            None
        };

        trace!(
            key = key.name(),
            lifetime = %registration.lifetime,
            "Resolving service"
        );
        (registration.factory)(&self.handle)
    }
}

/// Built dependency container
///
/// Produced by [`ServiceCollection::build`](super::ServiceCollection::build).
/// Typed factories resolved from it keep only a weak [`ResolverHandle`];
/// once every clone of the provider is dropped their calls fail with
/// [`Error::ContainerDisposed`].
#[derive(Clone)]
pub struct ServiceProvider {
    inner: Arc<ProviderInner>,
}

impl ServiceProvider {
    pub(crate) fn new(registry: HashMap<TypeKey, Registration>, detect_cycles: bool) -> Self {
        let id = NEXT_CONTAINER_ID.fetch_add(1, Ordering::Relaxed);
        let inner = Arc::new_cyclic(|weak: &Weak<ProviderInner>| {
            let weak: Weak<dyn ServiceResolver> = weak.clone();
            ProviderInner {
                id,
                registry,
                detect_cycles,
                handle: ResolverHandle::new(weak),
            }
        });
        Self { inner }
    }

    /// Resolve a typed instance
    pub fn resolve<T: Any>(&self) -> Result<T> {
        let key = TypeKey::of::<T>();
        let value = self.inner.resolve_key(&key)?;
        downcast_value(value, key.name())
    }

    /// Resolve an instance by runtime key
    pub fn resolve_key(&self, key: &TypeKey) -> Result<AnyValue> {
        self.inner.resolve_key(key)
    }

    /// Weak handle to this container
    pub fn handle(&self) -> ResolverHandle {
        self.inner.handle.clone()
    }

    /// True if `T` has a registration
    pub fn contains<T: ?Sized + 'static>(&self) -> bool {
        self.inner.registry.contains_key(&TypeKey::of::<T>())
    }

    /// Number of distinct registered types
    pub fn len(&self) -> usize {
        self.inner.registry.len()
    }

    /// True if nothing is registered
    pub fn is_empty(&self) -> bool {
        self.inner.registry.is_empty()
    }
}

impl ServiceResolver for ServiceProvider {
    fn resolve_key(&self, key: &TypeKey) -> Result<AnyValue> {
        self.inner.resolve_key(key)
    }
}

impl fmt::Debug for ServiceProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceProvider")
            .field("id", &self.inner.id)
            .field("services", &self.inner.registry.len())
            .field("detect_cycles", &self.inner.detect_cycles)
            .finish()
    }
}
