// roster/src/util/raise.rs

//! Helpers that turn a (lazily evaluated) condition into a
//! [`RosterError::Contract`].

use tracing::{event, Level};

use crate::error::{RosterError, RosterResult};
use crate::util::lazy::Lazy;

/// Chainable handle returned by the conditional raise helpers, so several
/// preconditions read as one statement:
///
/// ```
/// use roster::util::raise_if;
///
/// let title = "Signups";
/// raise_if(title.is_empty(), "title must not be empty")
///   .and_then(|r| r.and_if(title.len() > 64, "title is too long"))
///   .unwrap();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Raise;

impl Raise {
  pub fn and_if<'a>(self, predicate: impl Into<Lazy<'a, bool>>, message: impl Into<Lazy<'a, String>>) -> RosterResult<Raise> {
    raise_if(predicate, message)
  }

  pub fn and_if_nullish<'a, V>(
    self,
    value: impl Into<Lazy<'a, Option<V>>>,
    message: impl Into<Lazy<'a, String>>,
  ) -> RosterResult<Raise> {
    raise_if_nullish(value, message).map(|_| Raise)
  }
}

/// Always fails, with the resolved message.
pub fn raise<'a, T>(message: impl Into<Lazy<'a, String>>) -> RosterResult<T> {
  let message = message.into().resolve();
  event!(Level::DEBUG, %message, "Raising contract error.");
  Err(RosterError::Contract { message })
}

/// Fails when the resolved predicate is true. The message is only resolved
/// on that path.
pub fn raise_if<'a>(predicate: impl Into<Lazy<'a, bool>>, message: impl Into<Lazy<'a, String>>) -> RosterResult<Raise> {
  if predicate.into().resolve() {
    return raise(message);
  }
  Ok(Raise)
}

/// Fails when the resolved value is absent; otherwise hands the value back.
pub fn raise_if_nullish<'a, V>(
  value: impl Into<Lazy<'a, Option<V>>>,
  message: impl Into<Lazy<'a, String>>,
) -> RosterResult<V> {
  match value.into().resolve() {
    Some(v) => Ok(v),
    None => raise(message),
  }
}
