//! Parameter descriptors

use super::TypeKey;

/// One declared parameter of a constructor or factory method
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterDescriptor {
    name: String,
    ty: TypeKey,
    ordinal: usize,
}

impl ParameterDescriptor {
    /// Create a descriptor for a parameter of type `ty`
    pub fn new<S: Into<String>>(name: S, ty: TypeKey, ordinal: usize) -> Self {
        Self {
            name: name.into(),
            ty,
            ordinal,
        }
    }

    /// Create a descriptor for a parameter of type `T`
    pub fn of<T: ?Sized + 'static>(name: impl Into<String>, ordinal: usize) -> Self {
        Self::new(name, TypeKey::of::<T>(), ordinal)
    }

    /// Declared parameter name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared parameter type
    pub fn ty(&self) -> TypeKey {
        self.ty
    }

    /// Zero-based position in the declaration
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }
}

/// Return the first name declared twice, if any
pub fn find_duplicate_name(parameters: &[ParameterDescriptor]) -> Option<&str> {
    parameters.iter().enumerate().find_map(|(i, p)| {
        parameters[..i]
            .iter()
            .any(|earlier| earlier.name == p.name)
            .then_some(p.name.as_str())
    })
}
