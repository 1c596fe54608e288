//! The main `Container` struct and its associated methods.

use crate::binding::{Binding, Instance, Resolved};
use crate::config::{ContainerConfig, LookupMode};
use crate::error::{ContainerError, Result};
use crate::global;
use crate::reflect::{Args, ParamType, Parameter, TypeRegistry};
use indexmap::IndexMap;
use std::any::{type_name, Any};
use std::fmt;
use std::sync::Arc;

/// The Inversion of Control (IoC) container.
///
/// Maps identifiers to binding entries and builds object graphs on demand by
/// introspecting constructors through a [`TypeRegistry`].
///
/// Binding requires `&mut self` and resolution `&self`, so a container is
/// wired up first and can then be shared (for example behind an `Arc`).
///
/// There is no cycle detection: an alias chain or a constructor dependency
/// that leads back to itself recurses until the stack overflows.
pub struct Container {
  entries: IndexMap<String, Binding>,
  types: Arc<TypeRegistry>,
  config: ContainerConfig,
}

impl Default for Container {
  fn default() -> Self {
    Self::new()
  }
}

impl Container {
  /// Creates a new, empty `Container` that introspects types through the
  /// global registry.
  pub fn new() -> Self {
    Self::builder().build()
  }

  /// Creates a new, empty `Container` over its own type registry.
  pub fn with_types(types: Arc<TypeRegistry>) -> Self {
    Self::builder().types(types).build()
  }

  pub fn builder() -> ContainerBuilder {
    ContainerBuilder::default()
  }

  pub fn types(&self) -> &Arc<TypeRegistry> {
    &self.types
  }

  pub fn config(&self) -> &ContainerConfig {
    &self.config
  }

  // --- Registration ---

  /// Binds `id` to `concrete`, replacing any previous entry.
  ///
  /// With `None`, `id` is bound to itself: it will be built by reflecting on
  /// its own constructor.
  pub fn bind(&mut self, id: impl Into<String>, concrete: Option<Binding>) {
    let id = id.into();
    self.drop_entry(&id);

    let concrete = concrete.unwrap_or_else(|| Binding::Alias(id.clone()));
    tracing::debug!(id = %id, binding = ?concrete, "binding entry");
    self.set(id, concrete);
  }

  pub fn bind_self(&mut self, id: impl Into<String>) {
    self.bind(id, None);
  }

  pub fn bind_alias(&mut self, id: impl Into<String>, target: impl Into<String>) {
    self.bind(id, Some(Binding::alias(target)));
  }

  /// Binds `id` to a factory. The factory may return a finished [`Instance`]
  /// or another identifier to resolve in its place.
  pub fn bind_factory<F, R>(&mut self, id: impl Into<String>, factory: F)
  where
    F: Fn(&Container) -> Result<R> + Send + Sync + 'static,
    R: Into<Resolved>,
  {
    self.bind(id, Some(Binding::factory(factory)));
  }

  /// Removes the entry for `id`, returning it if there was one.
  pub fn drop_entry(&mut self, id: &str) -> Option<Binding> {
    let dropped = self.entries.shift_remove(id);
    if dropped.is_some() {
      tracing::debug!(id, "dropped stale entry");
    }
    dropped
  }

  fn set(&mut self, id: String, concrete: Binding) {
    self.entries.insert(id, concrete);
  }

  // --- Lookup ---

  /// Returns `true` if an entry exists for `id`.
  ///
  /// This does not mean [`get`](Self::get) will succeed, only that it will
  /// not fail for lack of an entry.
  pub fn has(&self, id: &str) -> bool {
    self.entries.contains_key(id)
  }

  /// The bound identifiers, in insertion order.
  pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
    self.entries.keys().map(String::as_str)
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  // --- Resolution ---

  /// Resolves `id` to an instance.
  ///
  /// A factory entry is invoked with this container and a finished instance
  /// it returns is handed back untouched. An alias entry (or an identifier
  /// returned by a factory) is followed if it is bound itself, and built by
  /// reflection otherwise. Without an entry, `id` itself is built by
  /// reflection, unless the container is in strict lookup mode.
  pub fn get(&self, id: &str) -> Result<Instance> {
    let target = match self.entries.get(id) {
      Some(Binding::Factory(factory)) => {
        tracing::trace!(id, "invoking factory");
        match factory(self)? {
          Resolved::Instance(instance) => return Ok(instance),
          Resolved::Alias(target) => target,
        }
      }
      Some(Binding::Alias(target)) => target.clone(),
      None => {
        if self.config.is_strict() {
          return Err(ContainerError::NotFound { id: id.to_owned() });
        }
        return self.resolve(id);
      }
    };

    if target != id && self.has(&target) {
      tracing::trace!(id, target = %target, "following alias");
      self.get(&target)
    } else {
      self.resolve(&target)
    }
  }

  /// Resolves `id` and downcasts the result to `T`.
  pub fn get_as<T: Any + Send + Sync>(&self, id: &str) -> Result<Arc<T>> {
    let instance = self.get(id)?;
    instance
      .downcast::<T>()
      .ok_or_else(|| ContainerError::TypeMismatch {
        id: id.to_owned(),
        expected: type_name::<T>(),
        found: instance.type_name(),
      })
  }

  /// Builds `id` by introspecting its constructor.
  fn resolve(&self, id: &str) -> Result<Instance> {
    let class = self.types.describe(id)?;

    if !class.is_instantiable() {
      return Err(ContainerError::NotInstantiable { id: id.to_owned() });
    }

    let Some(parameters) = class.constructor() else {
      tracing::trace!(id, "instantiating without constructor");
      return class.new_instance_without_constructor();
    };

    if parameters.is_empty() {
      tracing::trace!(id, "instantiating with empty constructor");
      return class.new_instance();
    }

    let dependencies = parameters
      .iter()
      .map(|parameter| self.resolve_parameter(id, parameter))
      .collect::<Result<Vec<_>>>()?;

    tracing::trace!(id, arguments = dependencies.len(), "instantiating with arguments");
    class.new_instance_args(Args::new(id, dependencies))
  }

  fn resolve_parameter(&self, class: &str, parameter: &Parameter) -> Result<Instance> {
    match &parameter.ty {
      ParamType::Untyped => Err(ContainerError::UndefinedType {
        class: class.to_owned(),
        parameter: parameter.name.clone(),
      }),
      ParamType::Union(types) => Err(ContainerError::UnionType {
        class: class.to_owned(),
        parameter: parameter.name.clone(),
        types: types.clone(),
      }),
      ParamType::Builtin(ty) => Err(ContainerError::BuiltinType {
        class: class.to_owned(),
        parameter: parameter.name.clone(),
        ty: ty.clone(),
      }),
      ParamType::Named(ty) => {
        tracing::trace!(class, parameter = %parameter.name, ty = %ty, "injecting parameter");
        self.get(ty)
      }
    }
  }
}

impl fmt::Debug for Container {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Container")
      .field("entries", &self.entries)
      .field("types", &self.types)
      .field("config", &self.config)
      .finish()
  }
}

/// A builder for [`Container`] instances.
#[derive(Debug, Default)]
pub struct ContainerBuilder {
  types: Option<Arc<TypeRegistry>>,
  config: ContainerConfig,
}

impl ContainerBuilder {
  /// Uses `types` instead of the global registry.
  pub fn types(mut self, types: Arc<TypeRegistry>) -> Self {
    self.types = Some(types);
    self
  }

  pub fn config(mut self, config: ContainerConfig) -> Self {
    self.config = config;
    self
  }

  pub fn lookup(mut self, lookup: LookupMode) -> Self {
    self.config.lookup = lookup;
    self
  }

  pub fn strict(self) -> Self {
    self.lookup(LookupMode::Strict)
  }

  pub fn build(self) -> Container {
    Container {
      entries: IndexMap::new(),
      types: self
        .types
        .unwrap_or_else(|| Arc::clone(global::types())),
      config: self.config,
    }
  }
}
