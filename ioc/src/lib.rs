//! # Fibre Reflect
//!
//! A reflective Inversion of Control (IoC) container for Rust.
//!
//! Services are bound under string identifiers (interface or class names) to
//! either an alias (another identifier) or a factory. Anything without a
//! binding is built by introspecting its constructor: each declared
//! parameter type is resolved in turn and passed positionally.
//!
//! ## Core Concepts
//!
//! - **Container**: The registry of bindings and the resolver.
//! - **Type descriptors**: Rust has no runtime reflection, so constructible types
//!   describe their constructor through a [`TypeDescriptor`], registered in a
//!   [`TypeRegistry`].
//! - **Bindings**: [`Binding::Alias`] redirects to another identifier,
//!   [`Binding::Factory`] builds the value itself.
//! - **Errors**: Every failure is a typed [`ContainerError`] that propagates
//!   unchanged through nested resolutions.
//!
//! ## Quick Start
//!
//! ```
//! use fibre_reflect::{ClassDescriptor, Container, Instance, TypeRegistry};
//! use std::sync::Arc;
//!
//! struct FileStore;
//! struct Uploader {
//!   store: Arc<FileStore>,
//! }
//!
//! let types = Arc::new(TypeRegistry::new());
//! types.interface("StoreInterface");
//! types.register(ClassDescriptor::new("FileStore", |_| Ok(FileStore)));
//! types.register(
//!   ClassDescriptor::new("Uploader", |mut args| {
//!     Ok(Uploader {
//!       store: args.take::<FileStore>()?,
//!     })
//!   })
//!   .param("store", "StoreInterface"),
//! );
//!
//! let mut container = Container::with_types(types);
//! container.bind_alias("StoreInterface", "FileStore");
//!
//! // `Uploader` has no binding: it is built by reflection, and its
//! // `StoreInterface` parameter is resolved through the alias.
//! let uploader = container.get_as::<Uploader>("Uploader").unwrap();
//! # let _ = &uploader.store;
//!
//! // Factories receive the container and may resolve their own dependencies.
//! container.bind_factory("UploaderInterface", |c| {
//!   Ok(Instance::new(Uploader {
//!     store: c.get_as::<FileStore>("StoreInterface")?,
//!   }))
//! });
//! assert!(container.get("UploaderInterface").unwrap().is::<Uploader>());
//! ```

mod binding;
mod config;
mod container;
mod error;
mod global;
mod macros;
mod reflect;

pub use binding::{Binding, Factory, Instance, Resolved};
pub use config::{ContainerConfig, LookupMode};
pub use container::{Container, ContainerBuilder};
pub use error::{ContainerError, ErrorKind, Result};
pub use global::types;
pub use reflect::{
  Args, ClassDescriptor, InterfaceDescriptor, ParamType, Parameter, TypeDescriptor, TypeRegistry,
  BUILTIN_TYPES,
};
