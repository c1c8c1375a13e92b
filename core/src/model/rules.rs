// roster/src/model/rules.rs

//! Field names and validators shared by [`User`](crate::model::User) and
//! its DTOs.

use chrono::Utc;

use crate::error::{RosterError, RosterResult};
use crate::model::value::{Record, Value};
use crate::validation::{FieldRule, Parser};

pub const ID: &str = "id";
pub const NAME: &str = "name";
pub const EMAIL: &str = "email";
pub const BIRTHDATE: &str = "birthdate";
pub const IS_ACTIVE: &str = "isActive";
pub const CREATED_AT: &str = "createdAt";
pub const UPDATED_AT: &str = "updatedAt";

pub fn positive_id(value: &Value) -> Option<String> {
  match value.as_int() {
    Some(id) if id > 0 => None,
    _ => Some(format!("{} must be a positive number", ID)),
  }
}

pub fn non_empty_name(value: &Value) -> Option<String> {
  match value.as_text() {
    Some(name) if !name.trim().is_empty() => None,
    _ => Some(format!("{} must be a non-empty string", NAME)),
  }
}

pub fn email(value: &Value) -> Option<String> {
  match value.as_text() {
    Some(email) if !email.trim().is_empty() && email.contains('@') => None,
    _ => Some(format!("{} must be a non-empty string containing \"@\"", EMAIL)),
  }
}

pub fn boolean(field: &'static str) -> impl Fn(&Value) -> Option<String> + Send + Sync + 'static {
  move |value| match value {
    Value::Bool(_) => None,
    _ => Some(format!("{} must be a boolean value", field)),
  }
}

/// A calendar date no later than today (UTC).
pub fn past_date(field: &'static str) -> impl Fn(&Value) -> Option<String> + Send + Sync + 'static {
  move |value| match value.as_date() {
    None => Some(format!("{} must be a valid date", field)),
    Some(date) if date > Utc::now().date_naive() => Some(format!("{} cannot be in the future", field)),
    Some(_) => None,
  }
}

/// A timestamp no later than now.
pub fn past_timestamp(field: &'static str) -> impl Fn(&Value) -> Option<String> + Send + Sync + 'static {
  move |value| match value.as_timestamp() {
    None => Some(format!("{} must be a valid date", field)),
    Some(ts) if ts > Utc::now() => Some(format!("{} cannot be in the future", field)),
    Some(_) => None,
  }
}

/// The four user-editable fields, common to the user and both DTOs.
pub fn define_profile_rules(parser: Parser<Record>) -> RosterResult<Parser<Record>> {
  parser
    .define_rule(FieldRule::required(NAME).validate_with(non_empty_name))?
    .define_rule(FieldRule::required(EMAIL).validate_with(email))?
    .define_rule(FieldRule::required(BIRTHDATE).validate_with(past_date(BIRTHDATE)))?
    .define_rule(FieldRule::required(IS_ACTIVE).validate_with(boolean(IS_ACTIVE)))
}

/// Reads a field that has already passed validation.
pub(crate) fn validated<T>(data: &Record, field: &str, read: impl FnOnce(&Value) -> Option<T>) -> RosterResult<T> {
  data
    .get(field)
    .and_then(read)
    .ok_or_else(|| RosterError::Internal(format!("field '{}' passed validation but could not be read", field)))
}
