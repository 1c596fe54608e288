//! Binding entries and the values they resolve to.

use crate::container::Container;
use crate::error::Result;
use std::any::{type_name, Any};
use std::fmt;
use std::sync::Arc;

/// A resolved, type-erased object produced by a factory or by reflective
/// construction.
///
/// Cloning an `Instance` clones the handle, not the object. The container
/// itself never keeps instances around: every resolution of a class-backed
/// identifier builds a new one.
#[derive(Clone)]
pub struct Instance {
  value: Arc<dyn Any + Send + Sync>,
  type_name: &'static str,
}

impl Instance {
  /// Wraps a freshly built value.
  pub fn new<T: Any + Send + Sync>(value: T) -> Self {
    Self::from_arc(Arc::new(value))
  }

  /// Wraps a value that is already shared.
  pub fn from_arc<T: Any + Send + Sync>(value: Arc<T>) -> Self {
    Self {
      value,
      type_name: type_name::<T>(),
    }
  }

  /// The Rust type name of the wrapped value.
  pub fn type_name(&self) -> &'static str {
    self.type_name
  }

  pub fn is<T: Any>(&self) -> bool {
    self.value.is::<T>()
  }

  /// Returns a typed handle to the wrapped value, or `None` if it is not a `T`.
  pub fn downcast<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
    Arc::clone(&self.value).downcast::<T>().ok()
  }

  /// Returns `true` if both handles point at the same object.
  pub fn ptr_eq(&self, other: &Instance) -> bool {
    Arc::ptr_eq(&self.value, &other.value)
  }
}

impl fmt::Debug for Instance {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Instance({})", self.type_name)
  }
}

/// What a factory hands back to the container.
#[derive(Debug, Clone)]
pub enum Resolved {
  /// A finished object. Returned to the caller as is.
  Instance(Instance),
  /// An identifier. Resolved exactly like an alias entry.
  Alias(String),
}

impl From<Instance> for Resolved {
  fn from(instance: Instance) -> Self {
    Resolved::Instance(instance)
  }
}

impl From<String> for Resolved {
  fn from(id: String) -> Self {
    Resolved::Alias(id)
  }
}

impl From<&str> for Resolved {
  fn from(id: &str) -> Self {
    Resolved::Alias(id.to_owned())
  }
}

/// A factory callable. It receives the container it is bound in, so it can
/// resolve its own dependencies.
pub type Factory = Arc<dyn Fn(&Container) -> Result<Resolved> + Send + Sync>;

/// A binding entry: the stored strategy for producing a value for an identifier.
#[derive(Clone)]
pub enum Binding {
  /// Another identifier to substitute at resolution time.
  Alias(String),
  Factory(Factory),
}

impl Binding {
  pub fn alias(target: impl Into<String>) -> Self {
    Binding::Alias(target.into())
  }

  pub fn factory<F, R>(factory: F) -> Self
  where
    F: Fn(&Container) -> Result<R> + Send + Sync + 'static,
    R: Into<Resolved>,
  {
    Binding::Factory(Arc::new(move |container: &Container| -> Result<Resolved> {
      factory(container).map(Into::into)
    }))
  }
}

impl fmt::Debug for Binding {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Binding::Alias(target) => write!(f, "Alias({})", target),
      Binding::Factory(_) => f.write_str("Factory(..)"),
    }
  }
}
