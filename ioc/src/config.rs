//! Container configuration.

/// How [`Container::get`](crate::Container::get) treats an identifier that
/// has no entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LookupMode {
  /// Fall through to reflective construction of the identifier itself.
  #[default]
  Reflective,
  /// Fail with `NotFound`. Alias targets and reflective construction of
  /// bound identifiers still work; only unbound lookups are refused.
  Strict,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerConfig {
  pub lookup: LookupMode,
}

impl ContainerConfig {
  pub fn strict() -> Self {
    Self {
      lookup: LookupMode::Strict,
    }
  }

  pub fn is_strict(&self) -> bool {
    self.lookup == LookupMode::Strict
  }
}
