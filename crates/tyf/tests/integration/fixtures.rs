//! Concrete types and factory contracts shared by the integration tests

use std::sync::{Arc, Mutex};

use tyf::{ConcreteType, ConstructorDescriptor, Injectable};

/// Records every constructor that ran
#[derive(Debug, Clone, Default)]
pub struct Tally(Arc<Mutex<Vec<&'static str>>>);

impl Tally {
    pub fn record(&self, name: &'static str) {
        self.0.lock().unwrap().push(name);
    }

    pub fn entries(&self) -> Vec<&'static str> {
        self.0.lock().unwrap().clone()
    }
}

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

pub struct TwoConstructors;

impl Injectable for TwoConstructors {
    fn concrete_type() -> ConcreteType {
        ConcreteType::builder::<Self>()
            .constructor(ConstructorDescriptor::public(), |_| Ok(TwoConstructors))
            .constructor(
                ConstructorDescriptor::public().param::<String>("color"),
                |_| Ok(TwoConstructors),
            )
            .build()
    }
}

// Flavors sharing a common interface

pub trait Labeled: Send {
    fn label(&self) -> &str;
}

pub trait Alpha: Labeled {}

pub trait Beta: Labeled {}

pub struct AlphaWidget {
    label: String,
}

impl Labeled for AlphaWidget {
    fn label(&self) -> &str {
        &self.label
    }
}

impl Alpha for AlphaWidget {}

impl Injectable for AlphaWidget {
    fn concrete_type() -> ConcreteType {
        ConcreteType::builder::<Self>()
            .implements(|w| Box::new(w) as Box<dyn Alpha>)
            .implements(|w| Box::new(w) as Box<dyn Labeled>)
            .constructor(
                ConstructorDescriptor::public()
                    .param::<Tally>("tally")
                    .param::<String>("label"),
                |args| {
                    let tally: Tally = args.take()?;
                    tally.record("alpha");
                    Ok(AlphaWidget {
                        label: args.take()?,
                    })
                },
            )
            .build()
    }
}

pub struct BetaWidget;

impl Labeled for BetaWidget {
    fn label(&self) -> &str {
        "beta"
    }
}

impl Beta for BetaWidget {}

impl Injectable for BetaWidget {
    fn concrete_type() -> ConcreteType {
        ConcreteType::builder::<Self>()
            .implements(|w| Box::new(w) as Box<dyn Beta>)
            .implements(|w| Box::new(w) as Box<dyn Labeled>)
            .constructor(
                ConstructorDescriptor::public().param::<Tally>("tally"),
                |args| {
                    let tally: Tally = args.take()?;
                    tally.record("beta");
                    Ok(BetaWidget)
                },
            )
            .build()
    }
}

tyf::typed_factory! {
    /// Builds painted widgets
    pub trait WidgetFactory {
        /// Widget of the given color
        fn create(&self, color: String) -> Box<dyn Widget>;
    }
}

tyf::typed_factory! {
    pub trait MisnamedWidgetFactory {
        fn create(&self, bad_name: String) -> Box<dyn Widget>;
    }
}

tyf::typed_factory! {
    pub trait MistypedWidgetFactory {
        fn create(&self, color: i32) -> Box<dyn Widget>;
    }
}

tyf::typed_factory! {
    pub trait DefaultWidgetFactory {
        fn create(&self) -> Box<dyn Widget>;
        fn create_concrete(&self, color: String) -> PaintedWidget;
    }
}

tyf::typed_factory! {
    pub trait LabeledFactory {
        fn create_alpha(&self, label: String) -> Box<dyn Alpha>;
        fn create_beta(&self) -> Box<dyn Beta>;
    }
}

tyf::typed_factory! {
    pub trait MisreturningWidgetFactory {
        fn create(&self, color: String) -> Box<dyn Labeled>;
    }
}

tyf::typed_factory! {
    /// A method whose name matches the proxy's internal field
    pub trait InvokerNamedFactory {
        fn invoker(&self, color: String) -> Box<dyn Widget>;
    }
}
