//! Factory method descriptors

use super::{find_duplicate_name, ParameterDescriptor, TypeKey};
use crate::error::{Error, Result};

/// Describes one method of a factory interface
///
/// Produced once per contract, when the contract's method table is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactoryMethodDescriptor {
    contract: &'static str,
    name: String,
    parameters: Vec<ParameterDescriptor>,
    return_type: TypeKey,
}

impl FactoryMethodDescriptor {
    /// Create a descriptor without parameters
    pub fn new(contract: &'static str, name: impl Into<String>, return_type: TypeKey) -> Self {
        Self {
            contract,
            name: name.into(),
            parameters: Vec::new(),
            return_type,
        }
    }

    /// Append a parameter of type `T`
    pub fn param<T: ?Sized + 'static>(mut self, name: impl Into<String>) -> Self {
        let ordinal = self.parameters.len();
        self.parameters.push(ParameterDescriptor::of::<T>(name, ordinal));
        self
    }

    /// Append a parameter with an explicit type key
    pub fn with_parameter(mut self, name: impl Into<String>, ty: TypeKey) -> Self {
        let ordinal = self.parameters.len();
        self.parameters.push(ParameterDescriptor::new(name, ty, ordinal));
        self
    }

    /// Name of the factory interface declaring the method
    pub fn contract(&self) -> &'static str {
        self.contract
    }

    /// Method name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// `Contract::method`
    pub fn full_name(&self) -> String {
        format!("{}::{}", self.contract, self.name)
    }

    /// Declared parameters in declaration order
    pub fn parameters(&self) -> &[ParameterDescriptor] {
        &self.parameters
    }

    /// Declared return type
    pub fn return_type(&self) -> TypeKey {
        self.return_type
    }

    /// Reject descriptors declaring the same parameter name twice
    pub fn validate(&self) -> Result<()> {
        match find_duplicate_name(&self.parameters) {
            Some(name) => Err(Error::invalid_descriptor(format!(
                "factory method {} declares parameter {name} more than once",
                self.full_name()
            ))),
            None => Ok(()),
        }
    }
}
