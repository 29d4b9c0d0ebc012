//! Shared test doubles
//!
//! A map-backed resolver, a recording installer, a small set of concrete
//! types and a hand-written factory contract.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use tyf_domain::error::{Error, Result};
use tyf_domain::{
    downcast_value, Activation, AnyValue, ConcreteType, ConstructorDescriptor, FactoryContract,
    FactoryInvoker, FactoryMethodDescriptor, Injectable, ResolverHandle, ServiceInstaller,
    ServiceResolver, TypeKey,
};

// ---------------------------------------------------------------------------
// Domain under test
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Gear {
    pub teeth: u32,
}

pub trait Widget: Send {
    fn color(&self) -> &str;
    fn gear(&self) -> &Gear;
}

pub struct PaintedWidget {
    gear: Gear,
    color: String,
}

impl Widget for PaintedWidget {
    fn color(&self) -> &str {
        &self.color
    }

    fn gear(&self) -> &Gear {
        &self.gear
    }
}

impl Injectable for PaintedWidget {
    fn concrete_type() -> ConcreteType {
        ConcreteType::builder::<Self>()
            .implements(|w| Box::new(w) as Box<dyn Widget>)
            .constructor(
                ConstructorDescriptor::public()
                    .param::<Gear>("gear")
                    .param::<String>("color"),
                |args| {
                    Ok(PaintedWidget {
                        gear: args.take()?,
                        color: args.take()?,
                    })
                },
            )
            .build()
    }
}

pub trait Shape: Send {
    fn name(&self) -> &'static str;
}

pub trait Round: Send {
    fn radius(&self) -> u32;
}

pub struct Circle {
    radius: u32,
}

impl Round for Circle {
    fn radius(&self) -> u32 {
        self.radius
    }
}

impl Injectable for Circle {
    fn concrete_type() -> ConcreteType {
        ConcreteType::builder::<Self>()
            .implements(|c| Box::new(c) as Box<dyn Round>)
            .constructor(
                ConstructorDescriptor::public().param::<u32>("radius"),
                |args| Ok(Circle { radius: args.take()? }),
            )
            .build()
    }
}

pub struct Square;

impl Shape for Square {
    fn name(&self) -> &'static str {
        "square"
    }
}

impl Injectable for Square {
    fn concrete_type() -> ConcreteType {
        ConcreteType::builder::<Self>()
            .implements(|s| Box::new(s) as Box<dyn Shape>)
            .constructor(ConstructorDescriptor::public(), |_| Ok(Square))
            .build()
    }
}

pub struct TwoDoors;

impl Injectable for TwoDoors {
    fn concrete_type() -> ConcreteType {
        ConcreteType::builder::<Self>()
            .constructor(ConstructorDescriptor::public(), |_| Ok(TwoDoors))
            .constructor(
                ConstructorDescriptor::public().param::<String>("name"),
                |_| Ok(TwoDoors),
            )
            .build()
    }
}

// ---------------------------------------------------------------------------
// Resolver
// ---------------------------------------------------------------------------

type Producer = Arc<dyn Fn() -> AnyValue + Send + Sync>;

/// Map-backed resolver counting every successful resolution
#[derive(Default)]
pub struct MapResolver {
    entries: HashMap<TypeKey, Producer>,
    resolutions: AtomicUsize,
}

impl MapResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<T: Clone + Send + Sync + 'static>(mut self, value: T) -> Self {
        self.entries
            .insert(TypeKey::of::<T>(), Arc::new(move || Box::new(value.clone())));
        self
    }

    pub fn resolutions(&self) -> usize {
        self.resolutions.load(Ordering::SeqCst)
    }

    pub fn shared(self) -> (Arc<Self>, ResolverHandle) {
        let resolver = Arc::new(self);
        let handle = ResolverHandle::downgrade(&resolver);
        (resolver, handle)
    }
}

impl ServiceResolver for MapResolver {
    fn resolve_key(&self, key: &TypeKey) -> Result<AnyValue> {
        let producer = self
            .entries
            .get(key)
            .ok_or_else(|| Error::not_registered(key.name()))?;
        self.resolutions.fetch_add(1, Ordering::SeqCst);
        Ok(producer())
    }
}

// ---------------------------------------------------------------------------
// Installer
// ---------------------------------------------------------------------------

type Installed = Arc<dyn Fn(&ResolverHandle) -> Result<AnyValue> + Send + Sync>;

/// Installer recording every provider without activating it
#[derive(Default)]
pub struct RecordingInstaller {
    pub installed: Mutex<Vec<(TypeKey, Activation, Installed)>>,
}

impl RecordingInstaller {
    pub fn len(&self) -> usize {
        self.installed.lock().unwrap().len()
    }

    /// Run provider `index` against `handle`, as a container would
    pub fn activate<T: 'static>(&self, index: usize, handle: &ResolverHandle) -> Result<T> {
        let provider = {
            let installed = self.installed.lock().unwrap();
            installed[index].2.clone()
        };
        downcast_value(provider(handle)?, "installed provider")
    }

    pub fn activation(&self, index: usize) -> Activation {
        self.installed.lock().unwrap()[index].1
    }

    pub fn key(&self, index: usize) -> TypeKey {
        self.installed.lock().unwrap()[index].0
    }
}

impl ServiceInstaller for RecordingInstaller {
    fn install_singleton<T, F>(&mut self, activation: Activation, factory: F)
    where
        T: Clone + Send + Sync + 'static,
        F: Fn(&ResolverHandle) -> Result<T> + Send + Sync + 'static,
    {
        let provider: Installed =
            Arc::new(move |handle: &ResolverHandle| -> Result<AnyValue> {
                Ok(Box::new(factory(handle)?))
            });
        self.installed
            .lock()
            .unwrap()
            .push((TypeKey::of::<T>(), activation, provider));
    }
}

// ---------------------------------------------------------------------------
// Contract
// ---------------------------------------------------------------------------

pub trait WidgetFactory: Send + Sync {
    fn create(&self, color: String) -> Result<Box<dyn Widget>>;
}

struct WidgetFactoryProxy {
    invoker: Arc<dyn FactoryInvoker>,
    create: FactoryMethodDescriptor,
}

impl WidgetFactory for WidgetFactoryProxy {
    fn create(&self, color: String) -> Result<Box<dyn Widget>> {
        let value = self.invoker.invoke(&self.create, vec![Box::new(color) as AnyValue])?;
        downcast_value(value, "create")
    }
}

pub fn create_descriptor() -> FactoryMethodDescriptor {
    FactoryMethodDescriptor::new("WidgetFactory", "create", TypeKey::of::<Box<dyn Widget>>())
        .param::<String>("color")
}

impl FactoryContract for dyn WidgetFactory {
    fn contract_name() -> &'static str {
        "WidgetFactory"
    }

    fn methods() -> Vec<FactoryMethodDescriptor> {
        vec![create_descriptor()]
    }

    fn proxy(invoker: Arc<dyn FactoryInvoker>) -> Arc<Self> {
        Arc::new(WidgetFactoryProxy {
            invoker,
            create: create_descriptor(),
        })
    }
}
