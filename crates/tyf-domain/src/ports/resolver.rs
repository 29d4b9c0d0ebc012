//! Dependency resolution port

use std::any::Any;
use std::fmt;
use std::sync::{Arc, Weak};

use crate::error::{Error, Result};
use crate::value_objects::{downcast_value, AnyValue, TypeKey};

/// Resolves instances by type
///
/// Implemented by dependency containers. Implementations must be safe to call
/// from several threads at once.
pub trait ServiceResolver: Send + Sync {
    /// Resolve an instance of the type identified by `key`
    fn resolve_key(&self, key: &TypeKey) -> Result<AnyValue>;
}

/// Resolve a typed instance from a resolver
pub fn resolve<T: Any>(resolver: &dyn ServiceResolver) -> Result<T> {
    let key = TypeKey::of::<T>();
    let value = resolver.resolve_key(&key)?;
    downcast_value(value, key.name())
}

/// Weak, cloneable handle to a container
///
/// Engines keep a handle instead of the container itself so that dropping the
/// container tears its factories down with it. Resolving through a handle
/// whose container is gone fails with [`Error::ContainerDisposed`].
#[derive(Clone)]
pub struct ResolverHandle {
    inner: Weak<dyn ServiceResolver>,
}

impl ResolverHandle {
    /// Wrap a weak reference
    pub fn new(inner: Weak<dyn ServiceResolver>) -> Self {
        Self { inner }
    }

    /// Handle to a shared resolver
    pub fn downgrade<R: ServiceResolver + 'static>(resolver: &Arc<R>) -> Self {
        let weak: Weak<R> = Arc::downgrade(resolver);
        let inner: Weak<dyn ServiceResolver> = weak;
        Self { inner }
    }

    /// Strong reference to the container, if it is still alive
    pub fn upgrade(&self) -> Result<Arc<dyn ServiceResolver>> {
        self.inner.upgrade().ok_or(Error::ContainerDisposed)
    }

    /// True once the container has been dropped
    pub fn is_disposed(&self) -> bool {
        self.inner.strong_count() == 0
    }

    /// Resolve an instance of the type identified by `key`
    pub fn resolve_key(&self, key: &TypeKey) -> Result<AnyValue> {
        self.upgrade()?.resolve_key(key)
    }

    /// Resolve a typed instance
    pub fn resolve<T: Any>(&self) -> Result<T> {
        let container = self.upgrade()?;
        resolve(container.as_ref())
    }
}

impl fmt::Debug for ResolverHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolverHandle")
            .field("disposed", &self.is_disposed())
            .finish()
    }
}
