use fibre_reflect::{ClassDescriptor, Container, Instance, TypeRegistry};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

// Two abstractions and their implementations.
#[derive(Debug)]
struct ClassB;

#[derive(Debug)]
struct ClassA {
  #[allow(dead_code)]
  class_b: Arc<ClassB>,
}

fn main() {
  // Set RUST_LOG=fibre_reflect=trace to watch the resolution steps.
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .init();

  // --- Describing the types ---
  let types = Arc::new(TypeRegistry::new());
  types.interface("InterfaceA");
  types.interface("InterfaceB");
  types.register(ClassDescriptor::new("ClassB", |_| Ok(ClassB)));
  types.register(
    ClassDescriptor::new("ClassA", |mut args| {
      Ok(ClassA {
        class_b: args.take::<ClassB>()?,
      })
    })
    .param("classB", "InterfaceB"),
  );

  // --- Binding ---
  let mut container = Container::with_types(types);
  container.bind_alias("InterfaceB", "ClassB");
  container.bind_factory("InterfaceA", |c| {
    Ok(Instance::new(ClassA {
      class_b: c.get_as::<ClassB>("InterfaceB")?,
    }))
  });

  // --- Resolution ---
  let a = container.get_as::<ClassA>("InterfaceA").unwrap();
  println!("Resolved through a factory: {:?}", a);

  // `ClassA` itself has no binding: its constructor is introspected instead.
  let a = container.get_as::<ClassA>("ClassA").unwrap();
  println!("Resolved by reflection:     {:?}", a);
}
