// roster/src/model/dto.rs

//! Input records for creating and editing users.
//!
//! Both DTOs carry only the user-editable fields. Turning one into a [`User`]
//! goes back through [`User::from_record`], so the complete user rule set is
//! checked again on every derived construction.

use chrono::{DateTime, NaiveDate, Utc};
use once_cell::sync::OnceCell;
use tracing::{event, Level};

use crate::error::{RosterError, RosterResult};
use crate::model::rules::{self, validated};
use crate::model::user::{User, UserId};
use crate::model::value::{Record, Value};
use crate::validation::{Parser, Validation};

const SUBJECT: &str = "user data";

/// Fields the table assigns when a user is first stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssignedFields {
  pub id: UserId,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

// name / email / birthdate / isActive, validated.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Profile {
  name: String,
  email: String,
  birthdate: NaiveDate,
  is_active: bool,
}

static INSERT_PARSER: OnceCell<Parser<Record>> = OnceCell::new();
static UPDATE_PARSER: OnceCell<Parser<Record>> = OnceCell::new();

impl Profile {
  fn parse(parser: &'static OnceCell<Parser<Record>>, parser_subject: &str, data: Record) -> RosterResult<Self> {
    let parser = parser.get_or_try_init(|| rules::define_profile_rules(Parser::for_type(parser_subject)))?;
    let data = match parser.parse(data) {
      Validation::Success { data } => data,
      Validation::Failure { errors } => {
        event!(Level::DEBUG, subject = parser_subject, ?errors, "Rejected user data.");
        return Err(RosterError::invalid_record(SUBJECT, errors));
      }
    };

    Ok(Self {
      name: validated(&data, rules::NAME, |v| v.as_text().map(str::to_string))?,
      email: validated(&data, rules::EMAIL, |v| v.as_text().map(str::to_string))?,
      birthdate: validated(&data, rules::BIRTHDATE, Value::as_date)?,
      is_active: validated(&data, rules::IS_ACTIVE, Value::as_bool)?,
    })
  }

  fn to_record(&self) -> Record {
    Record::new()
      .with(rules::NAME, self.name.as_str())
      .with(rules::EMAIL, self.email.as_str())
      .with(rules::BIRTHDATE, self.birthdate)
      .with(rules::IS_ACTIVE, self.is_active)
  }
}

/// A validated request to create a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInsertDto {
  profile: Profile,
}

impl UserInsertDto {
  pub fn from_record(data: Record) -> RosterResult<Self> {
    Profile::parse(&INSERT_PARSER, "UserInsertDto", data).map(|profile| Self { profile })
  }

  pub fn name(&self) -> &str {
    &self.profile.name
  }

  pub fn email(&self) -> &str {
    &self.profile.email
  }

  pub fn birthdate(&self) -> NaiveDate {
    self.profile.birthdate
  }

  pub fn is_active(&self) -> bool {
    self.profile.is_active
  }

  pub fn to_record(&self) -> Record {
    self.profile.to_record()
  }

  /// Builds the stored user from this request and the table-assigned fields.
  pub fn to_user(&self, assigned: AssignedFields) -> RosterResult<User> {
    let record = self
      .profile
      .to_record()
      .with(rules::ID, assigned.id)
      .with(rules::CREATED_AT, assigned.created_at)
      .with(rules::UPDATED_AT, assigned.updated_at);
    User::from_record(record)
  }
}

/// A validated replacement for the editable fields of an existing user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserUpdateDto {
  profile: Profile,
}

impl UserUpdateDto {
  pub fn from_record(data: Record) -> RosterResult<Self> {
    Profile::parse(&UPDATE_PARSER, "UserUpdateDto", data).map(|profile| Self { profile })
  }

  pub fn name(&self) -> &str {
    &self.profile.name
  }

  pub fn email(&self) -> &str {
    &self.profile.email
  }

  pub fn birthdate(&self) -> NaiveDate {
    self.profile.birthdate
  }

  pub fn is_active(&self) -> bool {
    self.profile.is_active
  }

  pub fn to_record(&self) -> Record {
    self.profile.to_record()
  }

  /// Returns the updated version of `user`: same `id` and `createdAt`, the
  /// editable fields from this DTO, and `updatedAt` stamped now.
  pub fn apply_to(&self, user: &User) -> RosterResult<User> {
    // The clock may step backwards; updatedAt never does.
    let updated_at = Utc::now().max(user.updated_at());
    let record = self
      .profile
      .to_record()
      .with(rules::ID, user.id())
      .with(rules::CREATED_AT, user.created_at())
      .with(rules::UPDATED_AT, updated_at);
    User::from_record(record)
  }
}
