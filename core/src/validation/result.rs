// roster/src/validation/result.rs

//! Outcome of running a [`Parser`](crate::validation::Parser) over a record.

/// Either the validated data or every error message collected for it.
///
/// Exactly one variant is active and neither is mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation<T> {
  Success { data: T },
  Failure { errors: Vec<String> },
}

impl<T> Validation<T> {
  pub fn success(data: T) -> Self {
    Validation::Success { data }
  }

  pub fn failure<I, S>(errors: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Validation::Failure {
      errors: errors.into_iter().map(Into::into).collect(),
    }
  }

  pub fn is_success(&self) -> bool {
    matches!(self, Validation::Success { .. })
  }

  pub fn is_failure(&self) -> bool {
    !self.is_success()
  }

  pub fn data(&self) -> Option<&T> {
    match self {
      Validation::Success { data } => Some(data),
      Validation::Failure { .. } => None,
    }
  }

  /// A copy of the collected messages; empty for `Success`.
  pub fn errors(&self) -> Vec<String> {
    match self {
      Validation::Success { .. } => Vec::new(),
      Validation::Failure { errors } => errors.clone(),
    }
  }

  /// Consumes the outcome, running exactly one of the two arms.
  pub fn fold<R>(self, on_success: impl FnOnce(T) -> R, on_failure: impl FnOnce(Vec<String>) -> R) -> R {
    match self {
      Validation::Success { data } => on_success(data),
      Validation::Failure { errors } => on_failure(errors),
    }
  }

  pub fn into_result(self) -> Result<T, Vec<String>> {
    self.fold(Ok, Err)
  }

  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Validation<U> {
    match self {
      Validation::Success { data } => Validation::Success { data: f(data) },
      Validation::Failure { errors } => Validation::Failure { errors },
    }
  }
}

impl<T> From<Validation<T>> for Result<T, Vec<String>> {
  fn from(validation: Validation<T>) -> Self {
    validation.into_result()
  }
}
