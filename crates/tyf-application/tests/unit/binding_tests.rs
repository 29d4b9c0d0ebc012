//! Concrete Type Binding Tests

use tyf_application::ConcreteTypeBinding;
use tyf_domain::error::{Error, MismatchReason};
use tyf_domain::{
    downcast_value, AnyValue, ConcreteType, ConstructorDescriptor, FactoryMethodDescriptor,
    Injectable, TypeKey,
};

use crate::fixtures::{create_descriptor, Gear, MapResolver, PaintedWidget, TwoDoors, Widget};

#[test]
fn test_binding_requires_one_public_constructor() {
    match ConcreteTypeBinding::of::<TwoDoors>() {
        Err(Error::ConstructorArity {
            concrete_type,
            count,
        }) => {
            assert!(concrete_type.ends_with("TwoDoors"));
            assert_eq!(count, 2);
        }
        _ => panic!("Expected ConstructorArity error"),
    }
}

#[test]
fn test_binding_without_public_constructor() {
    struct Hidden;
    let ty = ConcreteType::builder::<Hidden>()
        .constructor(ConstructorDescriptor::private(), |_| Ok(Hidden))
        .build();

    match ConcreteTypeBinding::new(ty) {
        Err(Error::ConstructorArity { count, .. }) => assert_eq!(count, 0),
        _ => panic!("Expected ConstructorArity error"),
    }
}

#[test]
fn test_private_constructors_are_ignored() {
    struct Mixed;
    let ty = ConcreteType::builder::<Mixed>()
        .constructor(ConstructorDescriptor::private().param::<u8>("secret"), |_| Ok(Mixed))
        .constructor(ConstructorDescriptor::public().param::<u16>("open"), |_| Ok(Mixed))
        .build();

    let binding = ConcreteTypeBinding::new(ty).unwrap();
    assert_eq!(binding.parameters().len(), 1);
    assert_eq!(binding.parameters()[0].name(), "open");
}

#[test]
fn test_duplicate_constructor_parameter_names_rejected() {
    struct Twice;
    let ty = ConcreteType::builder::<Twice>()
        .constructor(
            ConstructorDescriptor::public()
                .param::<u8>("value")
                .param::<u16>("value"),
            |_| Ok(Twice),
        )
        .build();

    match ConcreteTypeBinding::new(ty) {
        Err(Error::InvalidDescriptor { message }) => assert!(message.contains("value")),
        _ => panic!("Expected InvalidDescriptor error"),
    }
}

#[test]
fn test_verify_accepts_matching_signature() {
    let (resolver, handle) = MapResolver::new().with(Gear { teeth: 12 }).shared();
    let binding = ConcreteTypeBinding::of::<PaintedWidget>().unwrap();

    binding.verify_signature(&create_descriptor(), &handle).unwrap();
    // Gear was probed once
    assert_eq!(resolver.resolutions(), 1);
}

#[test]
fn test_verify_rejects_unknown_parameter_name() {
    let (_resolver, handle) = MapResolver::new().with(Gear { teeth: 12 }).shared();
    let binding = ConcreteTypeBinding::of::<PaintedWidget>().unwrap();
    let method =
        FactoryMethodDescriptor::new("WidgetFactory", "create", TypeKey::of::<Box<dyn Widget>>())
            .param::<String>("badName");

    match binding.verify_signature(&method, &handle) {
        Err(Error::SignatureMismatch {
            method,
            parameter,
            reason,
            ..
        }) => {
            assert_eq!(method, "WidgetFactory::create");
            assert_eq!(parameter, "badName");
            assert_eq!(reason, MismatchReason::MissingParameter);
        }
        _ => panic!("Expected SignatureMismatch error"),
    }
}

#[test]
fn test_verify_rejects_parameter_type_mismatch() {
    let (_resolver, handle) = MapResolver::new().with(Gear { teeth: 12 }).shared();
    let binding = ConcreteTypeBinding::of::<PaintedWidget>().unwrap();
    let method =
        FactoryMethodDescriptor::new("WidgetFactory", "create", TypeKey::of::<Box<dyn Widget>>())
            .param::<i32>("color");

    match binding.verify_signature(&method, &handle) {
        Err(Error::SignatureMismatch {
            reason: MismatchReason::TypeMismatch { expected, actual },
            ..
        }) => {
            assert_eq!(expected, std::any::type_name::<String>());
            assert_eq!(actual, "i32");
        }
        _ => panic!("Expected SignatureMismatch error"),
    }
}

#[test]
fn test_verify_rejects_unassignable_return_type() {
    let (resolver, handle) = MapResolver::new().with(Gear { teeth: 12 }).shared();
    let binding = ConcreteTypeBinding::of::<PaintedWidget>().unwrap();
    let method = FactoryMethodDescriptor::new("WidgetFactory", "count", TypeKey::of::<u64>())
        .param::<String>("color");

    match binding.verify_signature(&method, &handle) {
        Err(Error::ReturnTypeMismatch {
            concrete_type,
            method,
            return_type,
        }) => {
            assert!(concrete_type.ends_with("PaintedWidget"));
            assert_eq!(method, "WidgetFactory::count");
            assert_eq!(return_type, "u64");
        }
        _ => panic!("Expected ReturnTypeMismatch error"),
    }
    assert_eq!(resolver.resolutions(), 0);
}

#[test]
fn test_verify_reports_unresolvable_dependency() {
    let (_resolver, handle) = MapResolver::new().shared();
    let binding = ConcreteTypeBinding::of::<PaintedWidget>().unwrap();

    match binding.verify_signature(&create_descriptor(), &handle) {
        Err(Error::UnresolvableDependency {
            dependency, source, ..
        }) => {
            assert!(dependency.ends_with("Gear"));
            assert!(matches!(*source, Error::NotRegistered { .. }));
        }
        _ => panic!("Expected UnresolvableDependency error"),
    }
}

#[test]
fn test_resolve_merges_named_and_injected() {
    let (_resolver, handle) = MapResolver::new().with(Gear { teeth: 12 }).shared();
    let binding = ConcreteTypeBinding::of::<PaintedWidget>().unwrap();

    let value = binding
        .resolve_with_arguments(
            &create_descriptor(),
            vec![Box::new("Red".to_string()) as AnyValue],
            &handle,
        )
        .unwrap();
    let widget: Box<dyn Widget> = downcast_value(value, "widget").unwrap();
    assert_eq!(widget.color(), "Red");
    assert_eq!(widget.gear().teeth, 12);
}

#[test]
fn test_named_argument_wins_over_container() {
    let (resolver, handle) = MapResolver::new()
        .with(Gear { teeth: 12 })
        .with("FromContainer".to_string())
        .shared();
    let binding = ConcreteTypeBinding::of::<PaintedWidget>().unwrap();

    let value = binding
        .resolve_with_arguments(
            &create_descriptor(),
            vec![Box::new("Blue".to_string()) as AnyValue],
            &handle,
        )
        .unwrap();
    let widget: Box<dyn Widget> = downcast_value(value, "widget").unwrap();
    assert_eq!(widget.color(), "Blue");
    assert_eq!(resolver.resolutions(), 1);
}

#[test]
fn test_resolve_with_injected_parameters_only() {
    let (_resolver, handle) = MapResolver::new()
        .with(Gear { teeth: 40 })
        .with("Green".to_string())
        .shared();
    let binding = ConcreteTypeBinding::of::<PaintedWidget>().unwrap();
    let method =
        FactoryMethodDescriptor::new("WidgetFactory", "make", TypeKey::of::<Box<dyn Widget>>());

    binding.verify_signature(&method, &handle).unwrap();
    let value = binding
        .resolve_with_arguments(&method, Vec::new(), &handle)
        .unwrap();
    let widget: Box<dyn Widget> = downcast_value(value, "widget").unwrap();
    assert_eq!(widget.color(), "Green");
    assert_eq!(widget.gear().teeth, 40);
}

#[test]
fn test_resolve_rejects_unassignable_return_type() {
    let (_resolver, handle) = MapResolver::new().with(Gear { teeth: 1 }).shared();
    let binding = ConcreteTypeBinding::of::<PaintedWidget>().unwrap();
    let method = FactoryMethodDescriptor::new("WidgetFactory", "count", TypeKey::of::<u64>());

    match binding.resolve_with_arguments(&method, Vec::new(), &handle) {
        Err(Error::ReturnTypeMismatch {
            method, return_type, ..
        }) => {
            assert_eq!(method, "WidgetFactory::count");
            assert_eq!(return_type, "u64");
        }
        _ => panic!("Expected ReturnTypeMismatch error"),
    }
}

#[test]
fn test_concrete_return_type_is_accepted() {
    let (_resolver, handle) = MapResolver::new().with(Gear { teeth: 3 }).shared();
    let binding = ConcreteTypeBinding::new(PaintedWidget::concrete_type()).unwrap();
    let method =
        FactoryMethodDescriptor::new("WidgetFactory", "exact", TypeKey::of::<PaintedWidget>())
            .param::<String>("color");

    let value = binding
        .resolve_with_arguments(&method, vec![Box::new("Teal".to_string()) as AnyValue], &handle)
        .unwrap();
    let widget: PaintedWidget = downcast_value(value, "widget").unwrap();
    assert_eq!(widget.color(), "Teal");
}

#[test]
fn test_container_errors_propagate_unchanged() {
    let (resolver, handle) = MapResolver::new().with(Gear { teeth: 3 }).shared();
    let binding = ConcreteTypeBinding::of::<PaintedWidget>().unwrap();
    drop(resolver);

    match binding.resolve_with_arguments(
        &create_descriptor(),
        vec![Box::new("Red".to_string()) as AnyValue],
        &handle,
    ) {
        Err(Error::ContainerDisposed) => {}
        _ => panic!("Expected ContainerDisposed error"),
    }
}
