use thiserror::Error;

/// The error type returned by every resolution path of the container.
///
/// Errors are terminal: the container never retries or substitutes a default,
/// and an error raised deep inside a nested resolution reaches the original
/// caller unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContainerError {
  /// The identifier has no entry (strict lookup) or names no known type.
  #[error("[{id}] was not found")]
  NotFound { id: String },

  /// The identifier names an interface, an abstract class or another type
  /// that cannot be constructed.
  #[error("[{id}] is not instantiable")]
  NotInstantiable { id: String },

  #[error("parameter [{parameter}] of [{class}] has no declared type")]
  UndefinedType { class: String, parameter: String },

  #[error("parameter [{parameter}] of [{class}] has a union type ({})", .types.join("|"))]
  UnionType {
    class: String,
    parameter: String,
    types: Vec<String>,
  },

  #[error("parameter [{parameter}] of [{class}] has the builtin type [{ty}]")]
  BuiltinType {
    class: String,
    parameter: String,
    ty: String,
  },

  /// A constructor was handed an argument it could not use, or ran out of arguments.
  #[error("argument #{position} of [{class}] is missing or not of type `{expected}`")]
  InvalidArgument {
    class: String,
    position: usize,
    expected: &'static str,
  },

  /// A resolved instance could not be downcast to the requested Rust type.
  #[error("[{id}] resolved to `{found}`, not `{expected}`")]
  TypeMismatch {
    id: String,
    expected: &'static str,
    found: &'static str,
  },
}

/// The kind of a [`ContainerError`], without its context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
  NotFound,
  NotInstantiable,
  UndefinedType,
  UnionType,
  BuiltinType,
  InvalidArgument,
  TypeMismatch,
}

impl ContainerError {
  pub fn kind(&self) -> ErrorKind {
    match self {
      ContainerError::NotFound { .. } => ErrorKind::NotFound,
      ContainerError::NotInstantiable { .. } => ErrorKind::NotInstantiable,
      ContainerError::UndefinedType { .. } => ErrorKind::UndefinedType,
      ContainerError::UnionType { .. } => ErrorKind::UnionType,
      ContainerError::BuiltinType { .. } => ErrorKind::BuiltinType,
      ContainerError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
      ContainerError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
    }
  }

  /// Returns `true` if no entry or type exists for the requested identifier.
  ///
  /// Every other kind means the identifier was found but could not be built.
  pub fn is_not_found(&self) -> bool {
    matches!(self, ContainerError::NotFound { .. })
  }
}

/// A specialized `Result` type for container operations.
pub type Result<T, E = ContainerError> = std::result::Result<T, E>;
