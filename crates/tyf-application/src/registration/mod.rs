//! Typed Factory Registration
//!
//! Configuration-time entry point. Bindings are created inside the
//! registration call, so a type without exactly one public constructor is
//! rejected before anything reaches the container. The engine itself is
//! installed as an eagerly activated singleton: the container verifies every
//! factory method while it is being built and refuses to build if any method
//! fails.
//!
//! ```ignore
//! let mut services = ServiceCollection::new();
//! services.add_transient(|_| Ok(Arc::new(Gear::default())));
//!
//! services
//!     .register_typed_factory::<dyn WidgetFactory>()
//!     .for_concrete_type::<PaintedWidget>()?;
//!
//! services
//!     .register_typed_factory::<dyn ShapeFactory>()
//!     .flavor::<Box<dyn Circle>, UnitCircle>()
//!     .flavor::<Box<dyn Square>, UnitSquare>()
//!     .register()?;
//!
//! let provider = services.build()?;
//! ```

mod flavor;

pub use flavor::TypedFactoryFlavor;

use std::marker::PhantomData;
use std::sync::Arc;

use tracing::debug;
use tyf_domain::error::Result;
use tyf_domain::{Activation, ConcreteType, FactoryContract, Injectable, ServiceInstaller};

use crate::dispatch::DispatchMap;
use crate::engine::FactoryEngine;
use crate::resolver::ConcreteTypeBinding;

/// Registers typed factories on any [`ServiceInstaller`]
pub trait RegisterTypedFactory: ServiceInstaller + Sized {
    /// Start registering the factory contract `C`
    fn register_typed_factory<C: FactoryContract + ?Sized>(
        &mut self,
    ) -> TypedFactoryRegistration<'_, Self, C> {
        TypedFactoryRegistration::new(self)
    }

    /// Register contract `C` with a single concrete type `T`
    fn register_typed_factory_for<C, T>(&mut self) -> Result<&mut Self>
    where
        C: FactoryContract + ?Sized,
        T: Injectable,
    {
        self.register_typed_factory::<C>().for_concrete_type::<T>()?;
        Ok(self)
    }
}

impl<I: ServiceInstaller> RegisterTypedFactory for I {}

/// Pending registration of one factory contract
pub struct TypedFactoryRegistration<'a, I, C: ?Sized> {
    installer: &'a mut I,
    _contract: PhantomData<fn() -> Arc<C>>,
}

impl<'a, I, C> TypedFactoryRegistration<'a, I, C>
where
    I: ServiceInstaller,
    C: FactoryContract + ?Sized,
{
    fn new(installer: &'a mut I) -> Self {
        Self {
            installer,
            _contract: PhantomData,
        }
    }

    /// Every method of the contract creates a `T`
    pub fn for_concrete_type<T: Injectable>(self) -> Result<()> {
        self.for_concrete(T::concrete_type())
    }

    /// Every method of the contract creates the described type
    pub fn for_concrete(self, concrete: ConcreteType) -> Result<()> {
        let binding = ConcreteTypeBinding::new(concrete)?;
        install::<I, C>(self.installer, DispatchMap::single(binding));
        Ok(())
    }

    /// Methods returning `R` create a `T`; add more flavors, then `register`
    pub fn flavor<R: ?Sized + 'static, T: Injectable>(self) -> TypedFactoryFlavor<'a, I, C> {
        TypedFactoryFlavor::new(self.installer).flavor::<R, T>()
    }
}

/// Hand the dispatch map to the container as the contract's provider
pub(crate) fn install<I, C>(installer: &mut I, dispatch: DispatchMap)
where
    I: ServiceInstaller,
    C: FactoryContract + ?Sized,
{
    let dispatch = Arc::new(dispatch);
    let methods = C::methods();

    debug!(
        contract = C::contract_name(),
        methods = methods.len(),
        bindings = dispatch.len(),
        "Installing typed factory"
    );

    installer.install_singleton::<Arc<C>, _>(Activation::Eager, move |resolver| {
        let engine =
            FactoryEngine::verify(C::contract_name(), dispatch.clone(), &methods, resolver.clone())?;
        Ok(engine.into_proxy::<C>())
    });
}
