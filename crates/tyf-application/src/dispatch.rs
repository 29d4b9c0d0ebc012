//! Dispatch Map
//!
//! Routes a factory method to the binding that answers it, either one binding
//! for the whole contract or one binding per declared return type.

use std::collections::HashMap;

use tyf_domain::error::{Error, Result};
use tyf_domain::{FactoryMethodDescriptor, TypeKey};

use crate::resolver::ConcreteTypeBinding;

/// Return-type to binding routing owned by one factory engine
#[derive(Debug, Clone)]
pub enum DispatchMap {
    /// One binding serves every method, whatever its return type
    Single(ConcreteTypeBinding),
    /// One binding per declared return type
    Flavors(HashMap<TypeKey, ConcreteTypeBinding>),
}

impl DispatchMap {
    /// Single-binding mode
    pub fn single(binding: ConcreteTypeBinding) -> Self {
        Self::Single(binding)
    }

    /// Flavor mode from `(return type, binding)` pairs
    ///
    /// Every binding must be assignable to its return type and every return
    /// type may appear once.
    pub fn flavors<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (TypeKey, ConcreteTypeBinding)>,
    {
        let mut map = HashMap::new();
        for (return_type, binding) in entries {
            if !binding.is_assignable_to(&return_type) {
                return Err(Error::ReturnTypeMismatch {
                    concrete_type: binding.concrete_type().name().to_string(),
                    method: format!("flavor {}", return_type.name()),
                    return_type: return_type.name().to_string(),
                });
            }
            if map.insert(return_type, binding).is_some() {
                return Err(Error::DuplicateFlavor {
                    return_type: return_type.name().to_string(),
                });
            }
        }
        Ok(Self::Flavors(map))
    }

    /// The binding answering `method`
    pub fn binding_for(&self, method: &FactoryMethodDescriptor) -> Result<&ConcreteTypeBinding> {
        match self {
            Self::Single(binding) => Ok(binding),
            Self::Flavors(map) => {
                map.get(&method.return_type())
                    .ok_or_else(|| Error::UnmappedReturnType {
                        method: method.full_name(),
                        return_type: method.return_type().name().to_string(),
                    })
            }
        }
    }

    /// Number of bindings
    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Flavors(map) => map.len(),
        }
    }

    /// True when no binding is configured
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
