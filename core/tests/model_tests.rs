// tests/model_tests.rs
mod common;

use chrono::{Duration, Utc};
use common::*;
use roster::{age_between, AssignedFields, Record, RosterError, User, UserInsertDto, UserUpdateDto, Value};

fn user_record(id: i64) -> Record {
  let now = Utc::now();
  ann_record()
    .with("id", id)
    .with("createdAt", now)
    .with("updatedAt", now)
}

#[test]
fn test_user_from_valid_record() {
  setup_tracing();
  let user = User::from_record(user_record(1)).unwrap();
  assert_eq!(user.id(), 1);
  assert_eq!(user.name(), "Ann");
  assert_eq!(user.email(), "ann@example.com");
  assert_eq!(user.birthdate(), years_ago(30));
  assert!(user.is_active());
  assert_eq!(user.age(), 30);
}

#[test]
fn test_user_round_trips_through_its_record() {
  setup_tracing();
  let user = User::from_record(user_record(3)).unwrap();
  assert_eq!(User::from_record(user.to_record()).unwrap(), user);
}

#[test]
fn test_user_rejection_lists_every_broken_rule() {
  setup_tracing();
  let record = user_record(0)
    .with("email", "no-at-sign")
    .with("isActive", "yes");

  let err = User::from_record(record).unwrap_err();
  assert_eq!(
    err.validation_errors().unwrap(),
    &[
      "id must be a positive number".to_string(),
      "email must be a non-empty string containing \"@\"".to_string(),
      "isActive must be a boolean value".to_string(),
    ]
  );
  assert_eq!(
    err.to_string(),
    "Invalid user object: id must be a positive number, email must be a non-empty string containing \"@\", isActive must be a boolean value"
  );
}

#[test]
fn test_user_requires_every_field() {
  setup_tracing();
  let err = User::from_record(Record::new()).unwrap_err();
  let errors = err.validation_errors().unwrap();
  assert_eq!(
    errors,
    &[
      "id is required",
      "name is required",
      "email is required",
      "birthdate is required",
      "isActive is required",
      "createdAt is required",
      "updatedAt is required",
    ]
    .map(String::from)
  );
}

#[test]
fn test_future_dates_are_rejected() {
  setup_tracing();
  let tomorrow = today().succ_opt().unwrap();
  let record = user_record(1)
    .with("birthdate", tomorrow)
    .with("createdAt", Utc::now() + Duration::days(1));

  let err = User::from_record(record).unwrap_err();
  assert_eq!(
    err.validation_errors().unwrap(),
    &["birthdate cannot be in the future".to_string(), "createdAt cannot be in the future".to_string()]
  );
}

#[test]
fn test_date_fields_are_coerced_from_text() {
  setup_tracing();
  let record = user_record(1)
    .with("birthdate", "1990-06-15")
    .with("createdAt", "2020-01-02T03:04:05Z");
  let user = User::from_record(record).unwrap();
  assert_eq!(user.birthdate(), date(1990, 6, 15));
  assert_eq!(user.created_at().to_rfc3339(), "2020-01-02T03:04:05+00:00");

  let err = UserInsertDto::from_record(ann_record().with("birthdate", "")).unwrap_err();
  assert_eq!(err.validation_errors().unwrap(), &["birthdate must be a valid date".to_string()]);
}

#[test]
fn test_blank_name_is_present_but_invalid() {
  setup_tracing();
  let err = UserInsertDto::from_record(ann_record().with("name", "   ")).unwrap_err();
  assert_eq!(err.to_string(), "Invalid user data: name must be a non-empty string");
}

#[test]
fn test_insert_dto_to_user_uses_assigned_fields() {
  setup_tracing();
  let dto = UserInsertDto::from_record(ann_record()).unwrap();
  let created_at = Utc::now() - Duration::hours(2);
  let updated_at = Utc::now() - Duration::hours(1);

  let user = dto
    .to_user(AssignedFields {
      id: 9,
      created_at,
      updated_at,
    })
    .unwrap();

  assert_eq!(user.id(), 9);
  assert_eq!(user.name(), dto.name());
  assert_eq!(user.email(), dto.email());
  assert_eq!(user.birthdate(), dto.birthdate());
  assert_eq!(user.is_active(), dto.is_active());
  assert_eq!(user.created_at(), created_at);
  assert_eq!(user.updated_at(), updated_at);
  assert_eq!(user.age(), age_between(dto.birthdate(), today()));
}

#[test]
fn test_insert_dto_to_user_revalidates_full_user_rules() {
  setup_tracing();
  let dto = UserInsertDto::from_record(ann_record()).unwrap();
  let now = Utc::now();
  let err = dto
    .to_user(AssignedFields {
      id: 0,
      created_at: now,
      updated_at: now + Duration::days(3),
    })
    .unwrap_err();
  match err {
    RosterError::InvalidRecord { subject, errors } => {
      assert_eq!(subject, "user object");
      assert_eq!(errors, vec!["id must be a positive number", "updatedAt cannot be in the future"]);
    }
    other => panic!("Expected InvalidRecord, got {:?}", other),
  }
}

#[test]
fn test_update_dto_preserves_identity_and_stamps_update_time() {
  setup_tracing();
  let created_at = Utc::now() - Duration::days(10);
  let original = User::from_record(user_record(4).with("createdAt", created_at).with("updatedAt", created_at)).unwrap();

  let dto = UserUpdateDto::from_record(profile_record("Bea", "bea@example.com", date(1985, 1, 20), false)).unwrap();
  let updated = dto.apply_to(&original).unwrap();

  assert_eq!(updated.id(), original.id());
  assert_eq!(updated.created_at(), original.created_at());
  assert_eq!(updated.name(), "Bea");
  assert_eq!(updated.email(), "bea@example.com");
  assert_eq!(updated.birthdate(), date(1985, 1, 20));
  assert!(!updated.is_active());
  assert!(updated.updated_at() >= original.updated_at());
  // The original value is untouched.
  assert_eq!(original.name(), "Ann");
}

#[test]
fn test_dto_records_expose_profile_fields_only() {
  setup_tracing();
  let dto = UserUpdateDto::from_record(ann_record().with("id", 5)).unwrap();
  let record = dto.to_record();
  assert_eq!(record.len(), 4);
  assert_eq!(record.get("name"), Some(&Value::from("Ann")));
  assert!(record.get("id").is_none());
}

#[test]
fn test_age_counts_whole_years() {
  setup_tracing();
  // Anniversary reached / one day short.
  assert_eq!(age_between(date(1990, 6, 15), date(2020, 6, 15)), 30);
  assert_eq!(age_between(date(1990, 6, 15), date(2020, 6, 14)), 29);
  // Birth month later in the year than today's month.
  assert_eq!(age_between(date(1990, 12, 1), date(2020, 3, 15)), 29);
  assert_eq!(age_between(date(1990, 1, 31), date(2020, 2, 1)), 30);
  // Leap-day birthdays count from March 1st in common years.
  assert_eq!(age_between(date(2000, 2, 29), date(2021, 2, 28)), 20);
  assert_eq!(age_between(date(2000, 2, 29), date(2021, 3, 1)), 21);
  // A date before the birthdate is not a negative age.
  assert_eq!(age_between(date(2000, 1, 1), date(1999, 1, 1)), 0);
}

#[test]
fn test_age_relative_to_today() {
  setup_tracing();
  let dto = UserInsertDto::from_record(profile_record("Cy", "cy@example.com", years_ago(18), true)).unwrap();
  let now = Utc::now();
  let user = dto.to_user(AssignedFields { id: 1, created_at: now, updated_at: now }).unwrap();
  assert_eq!(user.age(), 18);

  let day_before_anniversary = years_ago(18).succ_opt().unwrap();
  assert_eq!(age_between(day_before_anniversary, today()), 17);
}

#[test]
fn test_user_rule_set_is_built_once_and_shared() {
  setup_tracing();
  let first = User::parser().unwrap();
  assert!(User::from_record(user_record(1)).is_ok());
  let second = User::parser().unwrap();

  assert!(std::ptr::eq(first, second));
  let fields: Vec<&str> = first.rules().iter().map(|rule| rule.field.as_str()).collect();
  assert_eq!(fields, vec!["id", "name", "email", "birthdate", "isActive", "createdAt", "updatedAt"]);
}
