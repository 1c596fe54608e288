//! The process-wide type registry.

use crate::reflect::TypeRegistry;
use once_cell::sync::Lazy;
use std::sync::Arc;

// Created on first access.
static GLOBAL_TYPES: Lazy<Arc<TypeRegistry>> = Lazy::new(|| Arc::new(TypeRegistry::new()));

/// Provides the global type registry.
///
/// Containers created with [`Container::new`](crate::Container::new) introspect
/// types through this registry, so a type registered here once can be
/// constructed by every such container.
///
/// # Examples
///
/// ```
/// use fibre_reflect::{types, ClassDescriptor, Container};
///
/// #[derive(Default)]
/// struct Clock;
///
/// types().register(ClassDescriptor::without_constructor::<Clock>("GlobalClock"));
///
/// let container = Container::new();
/// assert!(container.get_as::<Clock>("GlobalClock").is_ok());
/// ```
pub fn types() -> &'static Arc<TypeRegistry> {
  &GLOBAL_TYPES
}
