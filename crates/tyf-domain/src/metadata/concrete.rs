//! Concrete type descriptors
//!
//! A [`ConcreteType`] is the binding table a reflection step would produce:
//! the constructors of a type and the set of declared types it can be
//! converted into.

use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use super::constructor::{Constructor, ConstructorDescriptor};
use crate::error::Result;
use crate::value_objects::{downcast_value, AnyValue, Arguments, TypeKey};

/// Converts a concrete instance into one of its declared supertypes
pub type UpcastFn = Arc<dyn Fn(AnyValue) -> Result<AnyValue> + Send + Sync>;

/// Types that can describe themselves to a typed factory
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use tyf_domain::{ConcreteType, ConstructorDescriptor, Injectable};
///
/// pub trait Widget: Send {
///     fn color(&self) -> &str;
/// }
///
/// pub struct Gear;
///
/// pub struct PaintedWidget {
///     gear: Arc<Gear>,
///     color: String,
/// }
///
/// impl Widget for PaintedWidget {
///     fn color(&self) -> &str {
///         &self.color
///     }
/// }
///
/// impl Injectable for PaintedWidget {
///     fn concrete_type() -> ConcreteType {
///         ConcreteType::builder::<Self>()
///             .implements(|w| Box::new(w) as Box<dyn Widget>)
///             .constructor(
///                 ConstructorDescriptor::public()
///                     .param::<Arc<Gear>>("gear")
///                     .param::<String>("color"),
///                 |args| {
///                     Ok(PaintedWidget {
///                         gear: args.take()?,
///                         color: args.take()?,
///                     })
///                 },
///             )
///             .build()
///     }
/// }
///
/// let ty = PaintedWidget::concrete_type();
/// assert_eq!(ty.public_constructor_count(), 1);
/// ```
pub trait Injectable: Send + Sized + 'static {
    /// Describe the type's constructors and supertypes
    fn concrete_type() -> ConcreteType;
}

/// Runtime description of a concrete type
#[derive(Clone)]
pub struct ConcreteType {
    key: TypeKey,
    constructors: Vec<Constructor>,
    supertypes: HashMap<TypeKey, UpcastFn>,
}

impl ConcreteType {
    /// Start describing `T`
    pub fn builder<T: Send + 'static>() -> ConcreteTypeBuilder<T> {
        ConcreteTypeBuilder::new()
    }

    /// The concrete type's key
    pub fn key(&self) -> TypeKey {
        self.key
    }

    /// All described constructors
    pub fn constructors(&self) -> &[Constructor] {
        &self.constructors
    }

    /// Public constructors only
    pub fn public_constructors(&self) -> impl Iterator<Item = &Constructor> {
        self.constructors.iter().filter(|c| c.is_public())
    }

    /// Number of public constructors
    pub fn public_constructor_count(&self) -> usize {
        self.public_constructors().count()
    }

    /// True if an instance can be returned as `ty`
    pub fn is_assignable_to(&self, ty: &TypeKey) -> bool {
        self.supertypes.contains_key(ty)
    }

    /// Conversion into `ty`, if declared
    pub fn upcast(&self, ty: &TypeKey) -> Option<&UpcastFn> {
        self.supertypes.get(ty)
    }

    /// Every type an instance can be returned as, the concrete type included
    pub fn supertypes(&self) -> impl Iterator<Item = &TypeKey> {
        self.supertypes.keys()
    }
}

impl fmt::Debug for ConcreteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConcreteType")
            .field("key", &self.key)
            .field("constructors", &self.constructors)
            .field("supertypes", &self.supertypes.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Typed builder for [`ConcreteType`]
pub struct ConcreteTypeBuilder<T> {
    key: TypeKey,
    constructors: Vec<Constructor>,
    supertypes: HashMap<TypeKey, UpcastFn>,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Send + 'static> ConcreteTypeBuilder<T> {
    fn new() -> Self {
        let key = TypeKey::of::<T>();
        let mut supertypes: HashMap<TypeKey, UpcastFn> = HashMap::new();
        supertypes.insert(key, Arc::new(identity));
        Self {
            key,
            constructors: Vec::new(),
            supertypes,
            _marker: PhantomData,
        }
    }

    /// Declare that an instance can be returned as `R`
    ///
    /// `R` is usually a boxed or shared trait object such as
    /// `Box<dyn Widget>`; the key of `R` is what factory methods declare as
    /// their return type.
    pub fn implements<R, F>(mut self, upcast: F) -> Self
    where
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + 'static,
    {
        let name = self.key.name();
        let convert: UpcastFn = Arc::new(move |value: AnyValue| -> Result<AnyValue> {
            let concrete = downcast_value::<T>(value, name)?;
            Ok(Box::new(upcast(concrete)) as AnyValue)
        });
        self.supertypes.insert(TypeKey::of::<R>(), convert);
        self
    }

    /// Add a constructor; `body` reads the arguments in declaration order
    pub fn constructor<F>(mut self, descriptor: ConstructorDescriptor, body: F) -> Self
    where
        F: Fn(&mut Arguments<'_>) -> Result<T> + Send + Sync + 'static,
    {
        let parameters = descriptor.parameters().to_vec();
        let invoker = Arc::new(move |values: Vec<AnyValue>| -> Result<AnyValue> {
            let mut args = Arguments::new(values, &parameters);
            let instance = body(&mut args)?;
            Ok(Box::new(instance) as AnyValue)
        });
        self.constructors.push(Constructor::new(descriptor, invoker));
        self
    }

    /// Finish the description
    pub fn build(self) -> ConcreteType {
        ConcreteType {
            key: self.key,
            constructors: self.constructors,
            supertypes: self.supertypes,
        }
    }
}

fn identity(value: AnyValue) -> Result<AnyValue> {
    Ok(value)
}
