//! Constructor descriptors and compiled invokers

use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::value_objects::{AnyValue, ParameterDescriptor};

/// Invoker taking arguments in constructor-parameter order
pub type InvokerFn = Arc<dyn Fn(Vec<AnyValue>) -> Result<AnyValue> + Send + Sync>;

/// Constructor visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Usable by factories
    Public,
    /// Described for completeness, never selected by a binding
    Private,
}

/// Declared shape of a constructor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorDescriptor {
    visibility: Visibility,
    parameters: Vec<ParameterDescriptor>,
}

impl ConstructorDescriptor {
    /// A public constructor without parameters
    pub fn public() -> Self {
        Self {
            visibility: Visibility::Public,
            parameters: Vec::new(),
        }
    }

    /// A private constructor without parameters
    pub fn private() -> Self {
        Self {
            visibility: Visibility::Private,
            parameters: Vec::new(),
        }
    }

    /// Append a parameter of type `T`
    pub fn param<T: ?Sized + 'static>(mut self, name: impl Into<String>) -> Self {
        let ordinal = self.parameters.len();
        self.parameters.push(ParameterDescriptor::of::<T>(name, ordinal));
        self
    }

    /// Constructor visibility
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Declared parameters in declaration order
    pub fn parameters(&self) -> &[ParameterDescriptor] {
        &self.parameters
    }
}

/// A constructor together with its invoker
#[derive(Clone)]
pub struct Constructor {
    descriptor: ConstructorDescriptor,
    invoker: InvokerFn,
}

impl Constructor {
    pub(crate) fn new(descriptor: ConstructorDescriptor, invoker: InvokerFn) -> Self {
        Self {
            descriptor,
            invoker,
        }
    }

    /// Declared shape
    pub fn descriptor(&self) -> &ConstructorDescriptor {
        &self.descriptor
    }

    /// True if factories may use this constructor
    pub fn is_public(&self) -> bool {
        self.descriptor.visibility == Visibility::Public
    }

    /// The invoker built for this constructor
    pub fn invoker(&self) -> &InvokerFn {
        &self.invoker
    }
}

impl fmt::Debug for Constructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constructor")
            .field("descriptor", &self.descriptor)
            .finish_non_exhaustive()
    }
}
