// tests/util_tests.rs
mod common;

use common::*;
use roster::{evaluate, raise, raise_if, raise_if_nullish, Lazy, Raise, RosterError};
use std::cell::Cell;

#[test]
fn test_evaluate_returns_plain_values_unchanged() {
  setup_tracing();
  assert_eq!(evaluate(Lazy::Value(42)), 42);
  let text: String = evaluate(Lazy::from("hello"));
  assert_eq!(text, "hello");
}

#[test]
fn test_evaluate_invokes_deferred_producer() {
  setup_tracing();
  let calls = Cell::new(0);
  let lazy = Lazy::deferred(|| {
    calls.set(calls.get() + 1);
    "computed".to_string()
  });
  assert!(lazy.is_deferred());
  assert_eq!(calls.get(), 0); // Not run until resolved
  assert_eq!(evaluate(lazy), "computed");
  assert_eq!(calls.get(), 1);
}

#[test]
fn test_raise_always_fails_with_message() {
  setup_tracing();
  let result: Result<(), RosterError> = raise("boom");
  match result {
    Err(RosterError::Contract { message }) => assert_eq!(message, "boom"),
    other => panic!("Expected Contract error, got {:?}", other),
  }
}

#[test]
fn test_raise_if_only_builds_message_when_predicate_holds() {
  setup_tracing();
  let message_builds = Cell::new(0);

  let ok = raise_if(
    false,
    Lazy::deferred(|| {
      message_builds.set(message_builds.get() + 1);
      "never".to_string()
    }),
  );
  assert_eq!(ok.unwrap(), Raise);
  assert_eq!(message_builds.get(), 0);

  let err = raise_if(
    Lazy::deferred(|| true),
    Lazy::deferred(|| {
      message_builds.set(message_builds.get() + 1);
      format!("failed after {} checks", 1)
    }),
  )
  .unwrap_err();
  assert_eq!(err.to_string(), "failed after 1 checks");
  assert_eq!(message_builds.get(), 1);
}

#[test]
fn test_raise_chain_stops_at_first_failing_check() {
  setup_tracing();
  let err = raise_if(false, "first")
    .and_then(|r| r.and_if(true, "second"))
    .and_then(|r| r.and_if(true, "third"))
    .unwrap_err();
  assert_eq!(err.to_string(), "second");

  let passed = raise_if(false, "a").and_then(|r| r.and_if_nullish(Some(1), "b"));
  assert!(passed.is_ok());
}

#[test]
fn test_raise_if_nullish_returns_present_value() {
  setup_tracing();
  assert_eq!(raise_if_nullish(Some(7), "missing").unwrap(), 7);

  let err = raise_if_nullish(None::<i32>, "value is missing").unwrap_err();
  assert!(matches!(err, RosterError::Contract { ref message } if message == "value is missing"));

  let lookup = Lazy::deferred(|| "a,b".split(',').nth(5));
  assert!(raise_if_nullish(lookup, "no sixth element").is_err());
}
