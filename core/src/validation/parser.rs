// roster/src/validation/parser.rs

//! Runs an ordered set of [`FieldRule`]s against a record.

use std::marker::PhantomData;

use tracing::{event, instrument, Level};

use crate::error::RosterResult;
use crate::model::value::{Fields, Value};
use crate::validation::result::Validation;
use crate::validation::rule::FieldRule;

static ABSENT: Value = Value::Null;

/// Ordered rules for records of type `T`.
///
/// Every rule is evaluated on every parse; a failing rule never hides the
/// result of another one. Messages in a `Failure` follow definition order.
pub struct Parser<T> {
  subject: String,
  rules: Vec<FieldRule>,
  _phantom_record: PhantomData<fn(T) -> T>,
}

impl<T: Fields> Parser<T> {
  /// Creates an empty parser. `subject` names the record type in logs.
  pub fn for_type(subject: impl Into<String>) -> Self {
    Self {
      subject: subject.into(),
      rules: Vec::new(),
      _phantom_record: PhantomData,
    }
  }

  pub fn subject(&self) -> &str {
    &self.subject
  }

  pub fn rules(&self) -> &[FieldRule] {
    &self.rules
  }

  /// Appends a rule, rejecting malformed ones. Returns the parser for chaining.
  pub fn define_rule(mut self, rule: FieldRule) -> RosterResult<Self> {
    rule.check_shape()?;
    event!(Level::TRACE, subject = %self.subject, field = %rule.field, required = rule.required, "Rule defined.");
    self.rules.push(rule);
    Ok(self)
  }

  #[instrument(
        name = "Parser::parse",
        skip_all,
        fields(subject = %self.subject, num_rules = self.rules.len())
    )]
  pub fn parse(&self, data: T) -> Validation<T> {
    let mut errors = Vec::new();

    for rule in &self.rules {
      let value = data.field(&rule.field).unwrap_or(&ABSENT);

      if rule.required && value.is_null() {
        errors.push(rule.missing_text());
        continue;
      }

      if let Some(validator) = &rule.validator {
        if let Some(message) = validator(value).filter(|m| !m.is_empty()) {
          errors.push(message);
        }
      }
    }

    if errors.is_empty() {
      event!(Level::TRACE, "Record satisfied every rule.");
      Validation::success(data)
    } else {
      event!(Level::DEBUG, num_errors = errors.len(), "Record failed validation.");
      Validation::Failure { errors }
    }
  }
}

impl<T> std::fmt::Debug for Parser<T> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Parser")
      .field("subject", &self.subject)
      .field("rules", &self.rules)
      .finish()
  }
}
