use fibre_reflect::{ClassDescriptor, Container, TypeRegistry};
use std::sync::Arc;

#[derive(Debug, Default)]
struct SmtpTransport;

#[derive(Debug, Default)]
struct LogTransport;

fn main() {
  let types = Arc::new(TypeRegistry::new());
  types.interface("TransportInterface");
  types.register(ClassDescriptor::without_constructor::<SmtpTransport>("SmtpTransport"));
  types.register(ClassDescriptor::without_constructor::<LogTransport>("LogTransport"));

  let mut container = Container::with_types(types);

  // An alias can point at another alias; the chain is followed to the end.
  container.bind_alias("mailer.transport", "TransportInterface");
  container.bind_alias("TransportInterface", "SmtpTransport");
  println!(
    "mailer.transport -> {}",
    container.get("mailer.transport").unwrap().type_name()
  );

  // Rebinding replaces the entry, it does not merge with it.
  container.bind_alias("TransportInterface", "LogTransport");
  println!(
    "mailer.transport -> {}",
    container.get("mailer.transport").unwrap().type_name()
  );

  // A factory may also answer with an identifier instead of an object.
  let use_smtp = std::env::var("USE_SMTP").is_ok();
  container.bind_factory("TransportInterface", move |_| {
    Ok(if use_smtp { "SmtpTransport" } else { "LogTransport" })
  });
  println!(
    "mailer.transport -> {}",
    container.get("mailer.transport").unwrap().type_name()
  );

  println!("bound identifiers: {:?}", container.ids().collect::<Vec<_>>());
}
