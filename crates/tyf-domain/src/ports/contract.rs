//! Factory contract port

use std::sync::Arc;

use super::invoker::FactoryInvoker;
use crate::value_objects::FactoryMethodDescriptor;

/// A factory interface that can be synthesized
///
/// Implemented for `dyn Trait` by the `typed_factory!` macro, or by hand
/// when a custom adapter is preferred.
pub trait FactoryContract: Send + Sync + 'static {
    /// Interface name used in messages
    fn contract_name() -> &'static str;

    /// Every method the proxy forwards
    fn methods() -> Vec<FactoryMethodDescriptor>;

    /// Build a proxy forwarding every method to `invoker`
    fn proxy(invoker: Arc<dyn FactoryInvoker>) -> Arc<Self>;
}
