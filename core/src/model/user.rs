// roster/src/model/user.rs

//! The validated, immutable user record.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use once_cell::sync::OnceCell;
use tracing::{event, Level};

use crate::error::{RosterError, RosterResult};
use crate::model::rules::{self, validated};
use crate::model::value::{Record, Value};
use crate::validation::{FieldRule, Parser, Validation};

pub type UserId = u64;

const SUBJECT: &str = "user object";

/// A user as stored by the [`UsersTable`](crate::table::UsersTable).
///
/// Only constructed through [`User::from_record`], so every instance satisfies
/// the full rule set. Changes produce a new `User` rather than mutating one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
  id: UserId,
  name: String,
  email: String,
  birthdate: NaiveDate,
  is_active: bool,
  created_at: DateTime<Utc>,
  updated_at: DateTime<Utc>,
}

static USER_PARSER: OnceCell<Parser<Record>> = OnceCell::new();

impl User {
  /// The shared rule set every user record is parsed with.
  pub fn parser() -> RosterResult<&'static Parser<Record>> {
    USER_PARSER.get_or_try_init(Self::build_parser)
  }

  fn build_parser() -> RosterResult<Parser<Record>> {
    let parser = Parser::for_type("User").define_rule(FieldRule::required(rules::ID).validate_with(rules::positive_id))?;
    rules::define_profile_rules(parser)?
      .define_rule(FieldRule::required(rules::CREATED_AT).validate_with(rules::past_timestamp(rules::CREATED_AT)))?
      .define_rule(FieldRule::required(rules::UPDATED_AT).validate_with(rules::past_timestamp(rules::UPDATED_AT)))
  }

  /// Validates `data` against every user rule and builds the record, coercing
  /// the date fields. All failing rules are reported together.
  pub fn from_record(data: Record) -> RosterResult<Self> {
    let data = match Self::parser()?.parse(data) {
      Validation::Success { data } => data,
      Validation::Failure { errors } => {
        event!(Level::DEBUG, ?errors, "Rejected user record.");
        return Err(RosterError::invalid_record(SUBJECT, errors));
      }
    };

    Ok(Self {
      id: validated(&data, rules::ID, |v| v.as_int().and_then(|i| UserId::try_from(i).ok()))?,
      name: validated(&data, rules::NAME, |v| v.as_text().map(str::to_string))?,
      email: validated(&data, rules::EMAIL, |v| v.as_text().map(str::to_string))?,
      birthdate: validated(&data, rules::BIRTHDATE, Value::as_date)?,
      is_active: validated(&data, rules::IS_ACTIVE, Value::as_bool)?,
      created_at: validated(&data, rules::CREATED_AT, Value::as_timestamp)?,
      updated_at: validated(&data, rules::UPDATED_AT, Value::as_timestamp)?,
    })
  }

  /// The plain record this user would be parsed from.
  pub fn to_record(&self) -> Record {
    Record::new()
      .with(rules::ID, self.id)
      .with(rules::NAME, self.name.as_str())
      .with(rules::EMAIL, self.email.as_str())
      .with(rules::BIRTHDATE, self.birthdate)
      .with(rules::IS_ACTIVE, self.is_active)
      .with(rules::CREATED_AT, self.created_at)
      .with(rules::UPDATED_AT, self.updated_at)
  }

  pub fn id(&self) -> UserId {
    self.id
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn email(&self) -> &str {
    &self.email
  }

  pub fn birthdate(&self) -> NaiveDate {
    self.birthdate
  }

  pub fn is_active(&self) -> bool {
    self.is_active
  }

  pub fn created_at(&self) -> DateTime<Utc> {
    self.created_at
  }

  pub fn updated_at(&self) -> DateTime<Utc> {
    self.updated_at
  }

  /// Age in whole years as of today (UTC).
  pub fn age(&self) -> u32 {
    self.age_on(Utc::now().date_naive())
  }

  pub fn age_on(&self, today: NaiveDate) -> u32 {
    age_between(self.birthdate, today)
  }
}

/// Whole years from `birthdate` to `on`. The current year only counts once its
/// month and day have been reached; a date before `birthdate` yields 0.
pub fn age_between(birthdate: NaiveDate, on: NaiveDate) -> u32 {
  let mut years = on.year() - birthdate.year();
  if (on.month(), on.day()) < (birthdate.month(), birthdate.day()) {
    years -= 1;
  }
  u32::try_from(years).unwrap_or(0)
}
