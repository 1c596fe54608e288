//! Public macros for ergonomic service resolution.

/// Resolves an identifier from a container, panicking on failure.
///
/// Use this where a missing or unbuildable dependency is a programming error.
/// For a non-panicking version, call [`Container::get`](crate::Container::get)
/// or [`Container::get_as`](crate::Container::get_as) directly.
///
/// # Panics
///
/// Panics with the container error's message if resolution fails or, in the
/// typed form, if the instance is not of the requested type.
///
/// # Examples
///
/// ```
/// use fibre_reflect::{resolve, ClassDescriptor, Container, TypeRegistry};
/// use std::sync::Arc;
///
/// #[derive(Default)]
/// struct Greeter;
///
/// let types = Arc::new(TypeRegistry::new());
/// types.register(ClassDescriptor::without_constructor::<Greeter>("Greeter"));
/// let container = Container::with_types(types);
///
/// // Typed: returns an `Arc<Greeter>`.
/// let greeter = resolve!(container, "Greeter" => Greeter);
///
/// // Untyped: returns an `Instance`.
/// let instance = resolve!(container, "Greeter");
/// assert!(instance.is::<Greeter>());
/// # let _ = greeter;
/// ```
#[macro_export]
macro_rules! resolve {
    // Arm for resolving and downcasting: resolve!(container, "Id" => MyService)
    ($container:expr, $id:expr => $type:ty) => {{
        let id = $id;
        match $container.get_as::<$type>(id) {
            Ok(service) => service,
            Err(err) => panic!(
                "Failed to resolve required service [{}] as {}: {}",
                id,
                std::any::type_name::<$type>(),
                err
            ),
        }
    }};

    // Arm for resolving an untyped instance: resolve!(container, "Id")
    ($container:expr, $id:expr) => {{
        let id = $id;
        match $container.get(id) {
            Ok(instance) => instance,
            Err(err) => panic!("Failed to resolve required service [{}]: {}", id, err),
        }
    }};
}
