//! Call interception port

use crate::error::Result;
use crate::value_objects::{AnyValue, FactoryMethodDescriptor};

/// Target of an intercepted factory call
///
/// A proxy hands over the called method's descriptor and its positional
/// arguments and returns whatever the invoker produces, errors included.
pub trait FactoryInvoker: Send + Sync {
    /// Produce the return value of `method` for `args`
    fn invoke(&self, method: &FactoryMethodDescriptor, args: Vec<AnyValue>) -> Result<AnyValue>;
}
