// roster/src/util/lazy.rs

//! A value that is either given directly or produced on demand.

use std::fmt;

/// Either a ready value or a zero-argument producer for one.
///
/// Used wherever computing an argument is only worth it on an error path,
/// e.g. building a message that embeds a formatted record.
pub enum Lazy<'a, T> {
  Value(T),
  Deferred(Box<dyn FnOnce() -> T + 'a>),
}

impl<'a, T> Lazy<'a, T> {
  /// Wraps a producer that runs only when the value is resolved.
  pub fn deferred(producer: impl FnOnce() -> T + 'a) -> Self {
    Lazy::Deferred(Box::new(producer))
  }

  /// Resolves to the inner value, invoking the producer if there is one.
  pub fn resolve(self) -> T {
    match self {
      Lazy::Value(value) => value,
      Lazy::Deferred(producer) => producer(),
    }
  }

  pub fn is_deferred(&self) -> bool {
    matches!(self, Lazy::Deferred(_))
  }
}

impl<'a, T> From<T> for Lazy<'a, T> {
  fn from(value: T) -> Self {
    Lazy::Value(value)
  }
}

impl<'a> From<&str> for Lazy<'a, String> {
  fn from(value: &str) -> Self {
    Lazy::Value(value.to_string())
  }
}

impl<'a, T: fmt::Debug> fmt::Debug for Lazy<'a, T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Lazy::Value(value) => f.debug_tuple("Value").field(value).finish(),
      Lazy::Deferred(_) => f.write_str("Deferred(..)"),
    }
  }
}

/// Resolves `expr`. Plain values go in as `Lazy::from(value)`.
pub fn evaluate<T>(expr: Lazy<'_, T>) -> T {
  expr.resolve()
}
