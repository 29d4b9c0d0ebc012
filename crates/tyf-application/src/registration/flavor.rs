//! Flavor registration

use std::marker::PhantomData;
use std::sync::Arc;

use tracing::debug;
use tyf_domain::error::Result;
use tyf_domain::{ConcreteType, FactoryContract, Injectable, ServiceInstaller, TypeKey};

use super::install;
use crate::dispatch::DispatchMap;
use crate::resolver::ConcreteTypeBinding;

/// Chained return-type to concrete-type mapping, committed by [`register`]
///
/// [`register`]: TypedFactoryFlavor::register
pub struct TypedFactoryFlavor<'a, I, C: ?Sized> {
    installer: &'a mut I,
    flavors: Vec<(TypeKey, ConcreteType)>,
    _contract: PhantomData<fn() -> Arc<C>>,
}

impl<'a, I, C> TypedFactoryFlavor<'a, I, C>
where
    I: ServiceInstaller,
    C: FactoryContract + ?Sized,
{
    pub(super) fn new(installer: &'a mut I) -> Self {
        Self {
            installer,
            flavors: Vec::new(),
            _contract: PhantomData,
        }
    }

    /// Methods returning `R` create a `T`
    pub fn flavor<R: ?Sized + 'static, T: Injectable>(self) -> Self {
        self.flavor_with(TypeKey::of::<R>(), T::concrete_type())
    }

    /// Methods returning `return_type` create the described type
    pub fn flavor_with(mut self, return_type: TypeKey, concrete: ConcreteType) -> Self {
        self.flavors.push((return_type, concrete));
        self
    }

    /// Build one binding per flavor and install the factory
    pub fn register(self) -> Result<()> {
        let bindings = self
            .flavors
            .into_iter()
            .map(|(return_type, concrete)| {
                debug!(
                    return_type = return_type.name(),
                    concrete_type = concrete.key().name(),
                    "Adding typed factory flavor"
                );
                Ok((return_type, ConcreteTypeBinding::new(concrete)?))
            })
            .collect::<Result<Vec<_>>>()?;

        let dispatch = DispatchMap::flavors(bindings)?;
        install::<I, C>(self.installer, dispatch);
        Ok(())
    }
}
