// roster/src/model/value.rs

//! Plain records as assembled by the UI layer: named fields holding loosely
//! typed values, before any validation has happened.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// A single raw field value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
  Null,
  Bool(bool),
  Int(i64),
  Text(String),
  Date(NaiveDate),
  Timestamp(DateTime<Utc>),
}

// Date inputs arrive as `YYYY-MM-DD`.
const DATE_FORMAT: &str = "%Y-%m-%d";

impl Value {
  pub fn is_null(&self) -> bool {
    matches!(self, Value::Null)
  }

  pub fn as_bool(&self) -> Option<bool> {
    match self {
      Value::Bool(b) => Some(*b),
      _ => None,
    }
  }

  pub fn as_int(&self) -> Option<i64> {
    match self {
      Value::Int(i) => Some(*i),
      _ => None,
    }
  }

  pub fn as_text(&self) -> Option<&str> {
    match self {
      Value::Text(s) => Some(s),
      _ => None,
    }
  }

  /// Coerces into a calendar date. Accepts dates, timestamps (their UTC date)
  /// and text in `YYYY-MM-DD` or RFC 3339 form.
  pub fn as_date(&self) -> Option<NaiveDate> {
    match self {
      Value::Date(d) => Some(*d),
      Value::Timestamp(ts) => Some(ts.date_naive()),
      Value::Text(s) => {
        let s = s.trim();
        NaiveDate::parse_from_str(s, DATE_FORMAT)
          .ok()
          .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|ts| ts.with_timezone(&Utc).date_naive()))
      }
      _ => None,
    }
  }

  /// Coerces into a UTC timestamp. Accepts timestamps, dates (at midnight UTC)
  /// and RFC 3339 text.
  pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
    match self {
      Value::Timestamp(ts) => Some(*ts),
      Value::Date(d) => d.and_hms_opt(0, 0, 0).map(|midnight| Utc.from_utc_datetime(&midnight)),
      Value::Text(s) => DateTime::parse_from_rfc3339(s.trim()).ok().map(|ts| ts.with_timezone(&Utc)),
      _ => None,
    }
  }
}

impl fmt::Display for Value {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Value::Null => f.write_str("null"),
      Value::Bool(b) => write!(f, "{}", b),
      Value::Int(i) => write!(f, "{}", i),
      Value::Text(s) => write!(f, "{:?}", s),
      Value::Date(d) => write!(f, "{}", d.format(DATE_FORMAT)),
      Value::Timestamp(ts) => write!(f, "{}", ts.to_rfc3339()),
    }
  }
}

impl From<bool> for Value {
  fn from(b: bool) -> Self {
    Value::Bool(b)
  }
}

impl From<i64> for Value {
  fn from(i: i64) -> Self {
    Value::Int(i)
  }
}

impl From<i32> for Value {
  fn from(i: i32) -> Self {
    Value::Int(i64::from(i))
  }
}

// Ids beyond i64 cannot be represented as an integer field; they are kept as
// text so the id rule rejects them instead of silently wrapping.
impl From<u64> for Value {
  fn from(u: u64) -> Self {
    match i64::try_from(u) {
      Ok(i) => Value::Int(i),
      Err(_) => Value::Text(u.to_string()),
    }
  }
}

impl From<&str> for Value {
  fn from(s: &str) -> Self {
    Value::Text(s.to_string())
  }
}

impl From<String> for Value {
  fn from(s: String) -> Self {
    Value::Text(s)
  }
}

impl From<NaiveDate> for Value {
  fn from(d: NaiveDate) -> Self {
    Value::Date(d)
  }
}

impl From<DateTime<Utc>> for Value {
  fn from(ts: DateTime<Utc>) -> Self {
    Value::Timestamp(ts)
  }
}

impl<V: Into<Value>> From<Option<V>> for Value {
  fn from(v: Option<V>) -> Self {
    v.map_or(Value::Null, Into::into)
  }
}

/// Read access to named fields. This is all a
/// [`Parser`](crate::validation::Parser) needs from a record.
pub trait Fields {
  fn field(&self, name: &str) -> Option<&Value>;
}

/// An ordered map of field name to raw value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
  fields: BTreeMap<String, Value>,
}

impl Record {
  pub fn new() -> Self {
    Self::default()
  }

  /// Builder-style insert.
  pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
    self.set(name, value);
    self
  }

  pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
    self.fields.insert(name.into(), value.into());
  }

  pub fn remove(&mut self, name: &str) -> Option<Value> {
    self.fields.remove(name)
  }

  pub fn get(&self, name: &str) -> Option<&Value> {
    self.fields.get(name)
  }

  pub fn len(&self) -> usize {
    self.fields.len()
  }

  pub fn is_empty(&self) -> bool {
    self.fields.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
    self.fields.iter().map(|(k, v)| (k.as_str(), v))
  }
}

impl Fields for Record {
  fn field(&self, name: &str) -> Option<&Value> {
    self.fields.get(name)
  }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
  fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
    Self {
      fields: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
    }
  }
}
