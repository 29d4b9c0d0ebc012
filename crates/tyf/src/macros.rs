//! Proxy generation

/// Declare a factory trait and synthesize its proxy
///
/// Expands to the trait itself (every method returning
/// [`Result`](crate::Result)), a private proxy struct forwarding each call
/// to a [`FactoryInvoker`](crate::FactoryInvoker), and an implementation of
/// [`FactoryContract`](crate::FactoryContract) for `dyn Trait`.
///
/// Parameter and return types must be `'static`; arguments are moved into
/// the call.
///
/// ```ignore
/// tyf::typed_factory! {
///     pub trait WidgetFactory {
///         fn create(&self, color: String) -> Box<dyn Widget>;
///     }
/// }
/// ```
#[macro_export]
macro_rules! typed_factory {
    (@descriptor $contract:ident, $method:ident, $ret:ty $(, $arg:ident : $arg_ty:ty)*) => {
        $crate::FactoryMethodDescriptor::new(
            ::core::stringify!($contract),
            ::core::stringify!($method),
            $crate::TypeKey::of::<$ret>(),
        )
        $(.param::<$arg_ty>(::core::stringify!($arg)))*
    };

    (
        $(#[$meta:meta])*
        $vis:vis trait $name:ident {
            $(
                $(#[$method_meta:meta])*
                fn $method:ident(&self $(, $arg:ident : $arg_ty:ty)*) -> $ret:ty;
            )*
        }
    ) => {
        $(#[$meta])*
        $vis trait $name: ::core::marker::Send + ::core::marker::Sync {
            $(
                $(#[$method_meta])*
                fn $method(&self $(, $arg: $arg_ty)*) -> $crate::Result<$ret>;
            )*
        }

        const _: () = {
            struct Proxy {
                __tyf_invoker: ::std::sync::Arc<dyn $crate::FactoryInvoker>,
                $($method: $crate::FactoryMethodDescriptor,)*
            }

            impl $name for Proxy {
                $(
                    fn $method(&self $(, $arg: $arg_ty)*) -> $crate::Result<$ret> {
                        let args: ::std::vec::Vec<$crate::AnyValue> =
                            ::std::vec![$(::std::boxed::Box::new($arg) as $crate::AnyValue),*];
                        let value = self.__tyf_invoker.invoke(&self.$method, args)?;
                        $crate::downcast_value::<$ret>(value, self.$method.name())
                    }
                )*
            }

            impl $crate::FactoryContract for dyn $name {
                fn contract_name() -> &'static str {
                    ::core::stringify!($name)
                }

                fn methods() -> ::std::vec::Vec<$crate::FactoryMethodDescriptor> {
                    ::std::vec![
                        $($crate::typed_factory!(@descriptor $name, $method, $ret $(, $arg: $arg_ty)*)),*
                    ]
                }

                fn proxy(
                    invoker: ::std::sync::Arc<dyn $crate::FactoryInvoker>,
                ) -> ::std::sync::Arc<Self> {
                    ::std::sync::Arc::new(Proxy {
                        __tyf_invoker: invoker,
                        $($method: $crate::typed_factory!(@descriptor $name, $method, $ret $(, $arg: $arg_ty)*),)*
                    })
                }
            }
        };
    };
}
