use fibre_reflect::{resolve, Container, TypeRegistry};
use std::panic;
use std::sync::Arc;

fn main() {
  let types = Arc::new(TypeRegistry::new());
  types.interface("UnboundInterface");
  let container = Container::with_types(types);

  // --- Using the panicking `resolve!` macro ---
  println!("Attempting to resolve an interface that was never bound...");

  let result = panic::catch_unwind(panic::AssertUnwindSafe(|| {
    // This line will panic!
    let _service = resolve!(container, "UnboundInterface");
  }));

  assert!(result.is_err(), "resolve! should have panicked.");
  println!("Successfully caught the expected panic from resolve!.");

  // --- Using the non-panicking `get()` method ---
  println!("\nNow, attempting to resolve using the fallible `get()` method...");

  for id in ["UnboundInterface", "NeverDescribed"] {
    match container.get(id) {
      Ok(_) => panic!("Should not have resolved [{}]!", id),
      Err(err) if err.is_not_found() => println!("[{}] is unknown: {}", id, err),
      Err(err) => println!("[{}] is known but unbuildable: {}", id, err),
    }
  }
}
