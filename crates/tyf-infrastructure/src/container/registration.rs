//! Container registrations

use std::fmt;
use std::sync::Arc;

use tyf_domain::error::Result;
use tyf_domain::{Activation, AnyValue, ResolverHandle, TypeKey};

/// Type-erased instance factory
///
/// Receives a handle to the finished container so it can resolve its own
/// dependencies or keep the handle for later calls.
pub type FactoryFn = Arc<dyn Fn(&ResolverHandle) -> Result<AnyValue> + Send + Sync>;

/// How long a resolved instance lives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifetime {
    /// Created once per container and cloned out on each resolve
    Singleton,
    /// Created on every resolve
    Transient,
}

impl fmt::Display for Lifetime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Singleton => f.write_str("singleton"),
            Self::Transient => f.write_str("transient"),
        }
    }
}

/// Registration entry for a single service
#[derive(Clone)]
pub(crate) struct Registration {
    pub key: TypeKey,
    pub lifetime: Lifetime,
    pub activation: Activation,
    pub factory: FactoryFn,
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("key", &self.key)
            .field("lifetime", &self.lifetime)
            .field("activation", &self.activation)
            .finish()
    }
}
