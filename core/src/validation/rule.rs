// roster/src/validation/rule.rs

//! Defines a single per-field rule: a presence requirement plus an optional
//! custom check.

use std::sync::Arc;

use crate::error::RosterResult;
use crate::model::value::Value;
use crate::util::raise_if;

/// Custom check for one field. Returns a message when the value is rejected.
///
/// Absent fields are passed as [`Value::Null`].
pub type FieldValidator = Arc<dyn Fn(&Value) -> Option<String> + Send + Sync + 'static>;

/// A rule for one record field.
///
/// A rule that is neither `required` nor carries a validator checks nothing;
/// [`Parser::define_rule`](crate::validation::Parser::define_rule) rejects it.
#[derive(Clone)]
pub struct FieldRule {
  pub field: String,
  pub validator: Option<FieldValidator>,
  pub required: bool,
  // Used instead of "<field> is required" when the field is missing. A blank
  // message falls back to the default.
  pub missing_message: Option<String>,
}

impl FieldRule {
  /// A bare rule for `field`; add `required` or a validator before defining it.
  pub fn new(field: impl Into<String>) -> Self {
    Self {
      field: field.into(),
      validator: None,
      required: false,
      missing_message: None,
    }
  }

  pub fn required(field: impl Into<String>) -> Self {
    Self {
      required: true,
      ..Self::new(field)
    }
  }

  pub fn optional(field: impl Into<String>, validator: impl Fn(&Value) -> Option<String> + Send + Sync + 'static) -> Self {
    Self::new(field).validate_with(validator)
  }

  pub fn validate_with(mut self, validator: impl Fn(&Value) -> Option<String> + Send + Sync + 'static) -> Self {
    self.validator = Some(Arc::new(validator));
    self
  }

  pub fn with_missing_message(mut self, message: impl Into<String>) -> Self {
    self.missing_message = Some(message.into());
    self
  }

  /// Message reported when a required field is absent.
  pub fn missing_text(&self) -> String {
    match self.missing_message.as_deref() {
      Some(message) if !message.trim().is_empty() => message.to_string(),
      _ => format!("{} is required", self.field),
    }
  }

  /// Rejects rules that could never report anything or are missing a field.
  pub fn check_shape(&self) -> RosterResult<()> {
    raise_if(self.field.trim().is_empty(), "The property `field` of a rule is required.")?
      .and_if(
        self.validator.is_none() && !self.required,
        "A rule must define a `validator` or set `required` to true.",
      )?;
    Ok(())
  }
}

// Validators are closures, so only their presence is shown.
impl std::fmt::Debug for FieldRule {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("FieldRule")
      .field("field", &self.field)
      .field("required", &self.required)
      .field("validator_present", &self.validator.is_some())
      .field("missing_message", &self.missing_message)
      .finish()
  }
}
