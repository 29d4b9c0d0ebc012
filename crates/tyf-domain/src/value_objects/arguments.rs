//! Positional argument values

use std::any::{type_name, Any};

use super::ParameterDescriptor;
use crate::error::{Error, Result};

/// Type-erased value passed through factories and the container
pub type AnyValue = Box<dyn Any + Send>;

/// Downcast a type-erased value, naming `context` on failure
pub fn downcast_value<T: Any>(value: AnyValue, context: &str) -> Result<T> {
    value
        .downcast::<T>()
        .map(|boxed| *boxed)
        .map_err(|_| Error::ArgumentType {
            parameter: context.to_string(),
            expected: type_name::<T>().to_string(),
        })
}

/// Cursor over constructor arguments in declaration order
///
/// Constructor invokers pull their parameters with [`Arguments::take`] in the
/// same order the parameters were declared.
pub struct Arguments<'a> {
    values: std::vec::IntoIter<AnyValue>,
    parameters: &'a [ParameterDescriptor],
    position: usize,
}

impl<'a> Arguments<'a> {
    /// Wrap values assembled for `parameters`
    pub fn new(values: Vec<AnyValue>, parameters: &'a [ParameterDescriptor]) -> Self {
        Self {
            values: values.into_iter(),
            parameters,
            position: 0,
        }
    }

    /// Take the next argument as a `T`
    pub fn take<T: Any>(&mut self) -> Result<T> {
        let parameter = self
            .parameters
            .get(self.position)
            .map(|p| p.name().to_string())
            .unwrap_or_else(|| format!("#{}", self.position));
        self.position += 1;

        let value = self.values.next().ok_or_else(|| {
            Error::invalid_descriptor(format!(
                "constructor reads argument {parameter} beyond its declared parameters"
            ))
        })?;
        downcast_value(value, &parameter)
    }
}
