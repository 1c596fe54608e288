//! The type-introspection facility the resolver is built on.
//!
//! Rust has no runtime reflection, so types that should be constructible by
//! the container describe themselves through a [`TypeDescriptor`]: whether
//! they can be instantiated, which constructor parameters they declare, and
//! how to build them from a positional argument list. Descriptors live in a
//! [`TypeRegistry`] keyed by identifier.

use crate::binding::Instance;
use crate::error::{ContainerError, Result};
use dashmap::DashMap;
use std::any::{type_name, Any};
use std::fmt;
use std::sync::Arc;

/// Type names that denote builtin (scalar or pseudo) types rather than
/// classes or interfaces. The container never synthesizes these.
pub const BUILTIN_TYPES: &[&str] = &[
  "string", "int", "float", "bool", "array", "callable", "iterable", "object", "mixed", "void",
  "null", "never", "false", "true",
];

/// The declared type of a constructor parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamType {
  /// No type was declared.
  Untyped,
  Builtin(String),
  /// A single class or interface identifier.
  Named(String),
  Union(Vec<String>),
}

impl ParamType {
  /// Parses a type declaration such as `"LoggerInterface"`, `"?int"` or
  /// `"A|B"`. An empty declaration means the parameter is untyped.
  ///
  /// `null` members of a union only make it nullable, so `"A|null"` is the
  /// same single type as `"?A"`.
  pub fn parse(decl: &str) -> Self {
    let members: Vec<&str> = decl
      .split('|')
      .map(|t| t.trim())
      .map(|t| t.strip_prefix('?').unwrap_or(t).trim())
      .filter(|t| !t.is_empty())
      .collect();

    let members = if members.len() > 1 {
      members
        .into_iter()
        .filter(|t| !t.eq_ignore_ascii_case("null"))
        .collect()
    } else {
      members
    };

    match members.as_slice() {
      [] => ParamType::Untyped,
      [single] => Self::classify(single),
      _ => ParamType::Union(members.iter().map(|t| t.to_string()).collect()),
    }
  }

  fn classify(name: &str) -> Self {
    if BUILTIN_TYPES.iter().any(|b| b.eq_ignore_ascii_case(name)) {
      ParamType::Builtin(name.to_ascii_lowercase())
    } else {
      ParamType::Named(name.to_owned())
    }
  }
}

impl From<&str> for ParamType {
  fn from(decl: &str) -> Self {
    ParamType::parse(decl)
  }
}

impl fmt::Display for ParamType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ParamType::Untyped => f.write_str("<untyped>"),
      ParamType::Builtin(name) | ParamType::Named(name) => f.write_str(name),
      ParamType::Union(types) => f.write_str(&types.join("|")),
    }
  }
}

/// A declared constructor parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
  pub name: String,
  pub ty: ParamType,
}

impl Parameter {
  pub fn new(name: impl Into<String>, ty: impl Into<ParamType>) -> Self {
    Self {
      name: name.into(),
      ty: ty.into(),
    }
  }
}

/// Resolved constructor arguments, handed out in declaration order.
pub struct Args {
  class: String,
  values: std::vec::IntoIter<Instance>,
  position: usize,
}

impl Args {
  pub fn new(class: impl Into<String>, values: Vec<Instance>) -> Self {
    Self {
      class: class.into(),
      values: values.into_iter(),
      position: 0,
    }
  }

  pub fn empty(class: impl Into<String>) -> Self {
    Self::new(class, Vec::new())
  }

  /// The number of arguments not yet taken.
  pub fn len(&self) -> usize {
    self.values.len()
  }

  pub fn is_empty(&self) -> bool {
    self.values.len() == 0
  }

  /// Takes the next argument without looking at its type.
  pub fn take_instance(&mut self) -> Result<Instance> {
    self.next_value(type_name::<Instance>()).map(|(_, instance)| instance)
  }

  /// Takes the next argument as a `T`.
  pub fn take<T: Any + Send + Sync>(&mut self) -> Result<Arc<T>> {
    let (position, instance) = self.next_value(type_name::<T>())?;
    instance
      .downcast::<T>()
      .ok_or_else(|| self.invalid(position, type_name::<T>()))
  }

  fn next_value(&mut self, expected: &'static str) -> Result<(usize, Instance)> {
    let position = self.position;
    self.position += 1;
    match self.values.next() {
      Some(instance) => Ok((position, instance)),
      None => Err(self.invalid(position, expected)),
    }
  }

  fn invalid(&self, position: usize, expected: &'static str) -> ContainerError {
    ContainerError::InvalidArgument {
      class: self.class.clone(),
      position,
      expected,
    }
  }
}

/// Introspection over a constructible (or deliberately non-constructible) type.
pub trait TypeDescriptor: Send + Sync {
  /// The identifier this descriptor answers to.
  fn name(&self) -> &str;

  fn is_instantiable(&self) -> bool;

  /// The declared constructor parameters, or `None` when the type declares
  /// no constructor at all.
  fn constructor(&self) -> Option<&[Parameter]>;

  /// Builds an instance without running a constructor.
  fn new_instance_without_constructor(&self) -> Result<Instance>;

  /// Builds an instance through the constructor with the given arguments.
  fn new_instance_args(&self, args: Args) -> Result<Instance>;

  /// Builds an instance through a constructor that takes no arguments.
  fn new_instance(&self) -> Result<Instance> {
    self.new_instance_args(Args::empty(self.name()))
  }
}

type Construct = Arc<dyn Fn(Args) -> Result<Instance> + Send + Sync>;

/// A [`TypeDescriptor`] for a concrete (or abstract) class.
///
/// ```
/// use fibre_reflect::{ClassDescriptor, Instance};
/// use std::sync::Arc;
///
/// struct Mailer;
/// struct Signup {
///   mailer: Arc<Mailer>,
/// }
///
/// let signup = ClassDescriptor::new("Signup", |mut args| {
///   Ok(Signup {
///     mailer: args.take::<Mailer>()?,
///   })
/// })
/// .param("mailer", "Mailer");
/// # let _ = signup;
/// ```
#[derive(Clone)]
pub struct ClassDescriptor {
  name: String,
  instantiable: bool,
  constructor: Option<Vec<Parameter>>,
  construct: Construct,
}

impl ClassDescriptor {
  /// Describes a class with a declared constructor. Parameters are added
  /// with [`param`](Self::param); without any the constructor takes none.
  pub fn new<T, F>(name: impl Into<String>, construct: F) -> Self
  where
    T: Any + Send + Sync,
    F: Fn(Args) -> Result<T> + Send + Sync + 'static,
  {
    Self {
      name: name.into(),
      instantiable: true,
      constructor: Some(Vec::new()),
      construct: Arc::new(move |args: Args| construct(args).map(Instance::new)),
    }
  }

  /// Describes a class without a declared constructor, built from its
  /// `Default` value.
  pub fn without_constructor<T>(name: impl Into<String>) -> Self
  where
    T: Any + Send + Sync + Default,
  {
    Self {
      name: name.into(),
      instantiable: true,
      constructor: None,
      construct: Arc::new(|_: Args| -> Result<Instance> { Ok(Instance::new(T::default())) }),
    }
  }

  /// Appends a constructor parameter. `decl` is parsed with [`ParamType::parse`].
  pub fn param(mut self, name: impl Into<String>, decl: impl Into<ParamType>) -> Self {
    self
      .constructor
      .get_or_insert_with(Vec::new)
      .push(Parameter::new(name, decl));
    self
  }

  /// Marks the class as abstract: it keeps its signature but can never be
  /// instantiated directly.
  pub fn non_instantiable(mut self) -> Self {
    self.instantiable = false;
    self
  }

  fn ensure_instantiable(&self) -> Result<()> {
    if self.instantiable {
      Ok(())
    } else {
      Err(ContainerError::NotInstantiable {
        id: self.name.clone(),
      })
    }
  }
}

impl TypeDescriptor for ClassDescriptor {
  fn name(&self) -> &str {
    &self.name
  }

  fn is_instantiable(&self) -> bool {
    self.instantiable
  }

  fn constructor(&self) -> Option<&[Parameter]> {
    self.constructor.as_deref()
  }

  fn new_instance_without_constructor(&self) -> Result<Instance> {
    self.ensure_instantiable()?;
    (self.construct)(Args::empty(&self.name))
  }

  fn new_instance_args(&self, args: Args) -> Result<Instance> {
    self.ensure_instantiable()?;
    (self.construct)(args)
  }
}

impl fmt::Debug for ClassDescriptor {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ClassDescriptor")
      .field("name", &self.name)
      .field("instantiable", &self.instantiable)
      .field("constructor", &self.constructor)
      .finish_non_exhaustive()
  }
}

/// A [`TypeDescriptor`] for an interface. Interfaces are only resolvable
/// through a binding.
#[derive(Debug, Clone)]
pub struct InterfaceDescriptor {
  name: String,
}

impl InterfaceDescriptor {
  pub fn new(name: impl Into<String>) -> Self {
    Self { name: name.into() }
  }

  fn not_instantiable(&self) -> ContainerError {
    ContainerError::NotInstantiable {
      id: self.name.clone(),
    }
  }
}

impl TypeDescriptor for InterfaceDescriptor {
  fn name(&self) -> &str {
    &self.name
  }

  fn is_instantiable(&self) -> bool {
    false
  }

  fn constructor(&self) -> Option<&[Parameter]> {
    None
  }

  fn new_instance_without_constructor(&self) -> Result<Instance> {
    Err(self.not_instantiable())
  }

  fn new_instance_args(&self, _args: Args) -> Result<Instance> {
    Err(self.not_instantiable())
  }
}

/// The set of types the container can introspect, keyed by identifier.
///
/// The registry is thread-safe and may be shared by any number of containers;
/// types can be registered at any point.
#[derive(Default)]
pub struct TypeRegistry {
  types: DashMap<String, Arc<dyn TypeDescriptor>>,
}

impl TypeRegistry {
  pub fn new() -> Self {
    Self::default()
  }

  /// Registers a descriptor under its own name, replacing any previous one.
  pub fn register(&self, descriptor: impl TypeDescriptor + 'static) {
    let name = descriptor.name().to_owned();
    tracing::debug!(type_name = %name, "registering type descriptor");
    self.types.insert(name, Arc::new(descriptor));
  }

  pub fn interface(&self, name: impl Into<String>) {
    self.register(InterfaceDescriptor::new(name));
  }

  /// Looks up the descriptor for `id`.
  pub fn describe(&self, id: &str) -> Result<Arc<dyn TypeDescriptor>> {
    self
      .types
      .get(id)
      .map(|entry| Arc::clone(entry.value()))
      .ok_or_else(|| ContainerError::NotFound { id: id.to_owned() })
  }

  pub fn contains(&self, id: &str) -> bool {
    self.types.contains_key(id)
  }

  pub fn len(&self) -> usize {
    self.types.len()
  }

  pub fn is_empty(&self) -> bool {
    self.types.is_empty()
  }
}

impl fmt::Debug for TypeRegistry {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("TypeRegistry")
      .field("types", &self.types.len())
      .finish()
  }
}
