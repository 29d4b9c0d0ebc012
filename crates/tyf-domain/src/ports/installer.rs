//! Provider installation port

use super::resolver::ResolverHandle;
use crate::error::Result;

/// When a container creates a singleton
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// On first resolution
    Lazy,
    /// While the container is being built; a failure fails the build
    Eager,
}

/// Accepts singleton providers
///
/// Typed factories install their engine through this port. The factory
/// closure receives a handle to the finished container.
pub trait ServiceInstaller {
    /// Install `factory` as the sole provider of `T`
    fn install_singleton<T, F>(&mut self, activation: Activation, factory: F)
    where
        T: Clone + Send + Sync + 'static,
        F: Fn(&ResolverHandle) -> Result<T> + Send + Sync + 'static;
}
