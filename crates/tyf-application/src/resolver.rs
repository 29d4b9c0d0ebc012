//! Concrete Type Binding
//!
//! Links one concrete type to its single public constructor. The binding
//! verifies factory method signatures against that constructor and, at call
//! time, merges the caller's named arguments with container-resolved
//! dependencies before invoking it.

use std::collections::HashMap;
use std::fmt;

use tracing::{debug, trace};
use tyf_domain::error::{Error, MismatchReason, Result};
use tyf_domain::{
    find_duplicate_name, AnyValue, ConcreteType, FactoryMethodDescriptor, Injectable, InvokerFn,
    ParameterDescriptor, ResolverHandle, TypeKey,
};

/// Verified, immutable association between a concrete type and its constructor
#[derive(Clone)]
pub struct ConcreteTypeBinding {
    concrete: ConcreteType,
    parameters: Vec<ParameterDescriptor>,
    invoker: InvokerFn,
}

impl ConcreteTypeBinding {
    /// Bind `concrete`, which must have exactly one public constructor
    pub fn new(concrete: ConcreteType) -> Result<Self> {
        let constructor = {
            let mut public = concrete.public_constructors();
            match (public.next(), public.next()) {
                (Some(constructor), None) => constructor.clone(),
                _ => {
                    return Err(Error::constructor_arity(
                        concrete.key().name(),
                        concrete.public_constructor_count(),
                    ));
                }
            }
        };

        let parameters = constructor.descriptor().parameters().to_vec();
        if let Some(name) = find_duplicate_name(&parameters) {
            return Err(Error::invalid_descriptor(format!(
                "constructor of {} declares parameter {name} more than once",
                concrete.key().name()
            )));
        }

        debug!(
            concrete_type = concrete.key().name(),
            parameters = parameters.len(),
            "Created concrete type binding"
        );

        Ok(Self {
            invoker: constructor.invoker().clone(),
            parameters,
            concrete,
        })
    }

    /// Bind an [`Injectable`] type
    pub fn of<T: Injectable>() -> Result<Self> {
        Self::new(T::concrete_type())
    }

    /// The bound concrete type
    pub fn concrete_type(&self) -> TypeKey {
        self.concrete.key()
    }

    /// Constructor parameters in declaration order
    pub fn parameters(&self) -> &[ParameterDescriptor] {
        &self.parameters
    }

    /// True if instances can be returned as `ty`
    pub fn is_assignable_to(&self, ty: &TypeKey) -> bool {
        self.concrete.is_assignable_to(ty)
    }

    /// Check `method` against the constructor and probe every dependency
    ///
    /// The concrete type must be assignable to the method's return type and
    /// every factory parameter must name a constructor parameter of the same
    /// type. Every constructor parameter the method does not supply is
    /// resolved once from the container and discarded, so a missing
    /// registration is reported now rather than on the first call.
    pub fn verify_signature(
        &self,
        method: &FactoryMethodDescriptor,
        resolver: &ResolverHandle,
    ) -> Result<()> {
        method.validate()?;

        if !self.is_assignable_to(&method.return_type()) {
            return Err(self.return_type_mismatch(method));
        }

        for parameter in method.parameters() {
            let constructor_parameter = self
                .parameters
                .iter()
                .find(|p| p.name() == parameter.name())
                .ok_or_else(|| {
                    Error::signature_mismatch(
                        method.full_name(),
                        parameter.name(),
                        self.concrete.key().name(),
                        MismatchReason::MissingParameter,
                    )
                })?;

            if constructor_parameter.ty() != parameter.ty() {
                return Err(Error::signature_mismatch(
                    method.full_name(),
                    parameter.name(),
                    self.concrete.key().name(),
                    MismatchReason::TypeMismatch {
                        expected: constructor_parameter.ty().name().to_string(),
                        actual: parameter.ty().name().to_string(),
                    },
                ));
            }
        }

        self.verify_dependencies(method, resolver)
    }

    fn verify_dependencies(
        &self,
        method: &FactoryMethodDescriptor,
        resolver: &ResolverHandle,
    ) -> Result<()> {
        let injected = self
            .parameters
            .iter()
            .filter(|p| !method.parameters().iter().any(|m| m.name() == p.name()));

        for parameter in injected {
            debug!(
                method = %method.full_name(),
                dependency = parameter.ty().name(),
                "Probing constructor dependency"
            );
            // The probe builds a real instance and drops it.
            resolver.resolve_key(&parameter.ty()).map_err(|source| {
                Error::unresolvable_dependency(
                    parameter.ty().name(),
                    self.concrete.key().name(),
                    source,
                )
            })?;
        }
        Ok(())
    }

    /// Construct a new instance for a call of `method` with `args`
    ///
    /// `args` are positional, in the method's declaration order. Named values
    /// win over the container; every other constructor parameter is resolved
    /// by type. Container errors are returned unchanged.
    pub fn resolve_with_arguments(
        &self,
        method: &FactoryMethodDescriptor,
        args: Vec<AnyValue>,
        resolver: &ResolverHandle,
    ) -> Result<AnyValue> {
        let return_type = method.return_type();
        let upcast = self
            .concrete
            .upcast(&return_type)
            .ok_or_else(|| self.return_type_mismatch(method))?;

        let mut named: HashMap<&str, AnyValue> = method
            .parameters()
            .iter()
            .map(|p| p.name())
            .zip(args)
            .collect();

        let mut values = Vec::with_capacity(self.parameters.len());
        for parameter in &self.parameters {
            match named.remove(parameter.name()) {
                Some(value) => values.push(value),
                None => {
                    trace!(
                        dependency = parameter.ty().name(),
                        "Resolving constructor dependency"
                    );
                    values.push(resolver.resolve_key(&parameter.ty())?);
                }
            }
        }

        let instance = (self.invoker)(values)?;
        upcast(instance)
    }
}

impl ConcreteTypeBinding {
    fn return_type_mismatch(&self, method: &FactoryMethodDescriptor) -> Error {
        Error::ReturnTypeMismatch {
            concrete_type: self.concrete.key().name().to_string(),
            method: method.full_name(),
            return_type: method.return_type().name().to_string(),
        }
    }
}

impl fmt::Debug for ConcreteTypeBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConcreteTypeBinding")
            .field("concrete_type", &self.concrete.key())
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}
