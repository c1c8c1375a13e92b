// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use chrono::{Datelike, Months, NaiveDate, Utc};
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use roster::{FormFields, Record, UserInsertDto, UserUpdateDto};
use std::sync::Arc;
use tracing::Level;

// --- Helper for Tracing Setup (call once per test run if needed) ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

// --- Dates ---
pub fn today() -> NaiveDate {
  Utc::now().date_naive()
}

pub fn years_ago(years: u32) -> NaiveDate {
  today().checked_sub_months(Months::new(12 * years)).unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn iso(d: NaiveDate) -> String {
  d.format("%Y-%m-%d").to_string()
}

pub fn this_month_name() -> String {
  Utc::now().format("%B").to_string()
}

pub fn current_year() -> i32 {
  today().year()
}

// --- Records and DTOs ---
pub fn profile_record(name: &str, email: &str, birthdate: NaiveDate, is_active: bool) -> Record {
  Record::new()
    .with("name", name)
    .with("email", email)
    .with("birthdate", birthdate)
    .with("isActive", is_active)
}

pub fn ann_record() -> Record {
  profile_record("Ann", "ann@example.com", years_ago(30), true)
}

pub fn insert_dto(name: &str, birthdate: NaiveDate, is_active: bool) -> UserInsertDto {
  let email = format!("{}@example.com", name.to_lowercase());
  UserInsertDto::from_record(profile_record(name, &email, birthdate, is_active)).unwrap()
}

pub fn update_dto(name: &str, birthdate: NaiveDate, is_active: bool) -> UserUpdateDto {
  let email = format!("{}@example.com", name.to_lowercase());
  UserUpdateDto::from_record(profile_record(name, &email, birthdate, is_active)).unwrap()
}

pub fn form_fields(name: &str, email: &str, birthdate: &str, is_active: bool) -> FormFields {
  FormFields {
    name: name.to_string(),
    email: email.to_string(),
    birthdate: birthdate.to_string(),
    is_active,
  }
}

// --- Recording subscribers ---
pub type Recorded<T> = Arc<Mutex<Vec<T>>>;

/// A subscriber that clones every payload into the returned log.
pub fn recorder<T: Clone + Send + 'static>() -> (Recorded<T>, impl Fn(&T) -> anyhow::Result<()> + Send + Sync + 'static) {
  let log: Recorded<T> = Arc::new(Mutex::new(Vec::new()));
  let sink = log.clone();
  (log, move |payload: &T| {
    sink.lock().push(payload.clone());
    Ok(())
  })
}

/// A subscriber that appends `tag` to a shared call log.
pub fn tagger(calls: &Recorded<String>, tag: &'static str) -> impl Fn(&i32) -> anyhow::Result<()> + Send + Sync + 'static {
  let calls = calls.clone();
  move |_payload: &i32| {
    calls.lock().push(tag.to_string());
    Ok(())
  }
}
