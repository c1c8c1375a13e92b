use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use roster::{Event, FieldRule, Parser, Record, User, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{NaiveDate, Utc};

// --- Common Benchmark Inputs ---
fn valid_user_record() -> Record {
  let now = Utc::now();
  Record::new()
    .with("id", 1)
    .with("name", "Ann")
    .with("email", "ann@example.com")
    .with("birthdate", NaiveDate::from_ymd_opt(1990, 6, 15).unwrap())
    .with("isActive", true)
    .with("createdAt", now)
    .with("updatedAt", now)
}

fn invalid_user_record() -> Record {
  valid_user_record()
    .with("id", 0)
    .with("email", "no-at-sign")
    .with("birthdate", "not a date")
}

// --- Benchmark Functions ---

fn bench_user_from_record(c: &mut Criterion) {
  let mut group = c.benchmark_group("UserFromRecord");

  let valid = valid_user_record();
  group.bench_function("valid", |b| {
    b.iter(|| User::from_record(black_box(valid.clone())))
  });

  let invalid = invalid_user_record();
  group.bench_function("invalid", |b| {
    b.iter(|| User::from_record(black_box(invalid.clone())))
  });

  group.finish();
}

fn bench_parser_rule_count(c: &mut Criterion) {
  let mut group = c.benchmark_group("ParserRuleCount");

  for num_rules in [1usize, 8, 32].iter() {
    let mut parser = Parser::<Record>::for_type("Bench");
    let mut record = Record::new();
    for i in 0..*num_rules {
      let field = format!("field_{}", i);
      parser = parser
        .define_rule(FieldRule::required(field.clone()).validate_with(|v: &Value| {
          if v.as_int().is_some() {
            None
          } else {
            Some("must be an integer".to_string())
          }
        }))
        .unwrap();
      record.set(field, i as i64);
    }

    group.throughput(Throughput::Elements(*num_rules as u64));
    group.bench_with_input(BenchmarkId::from_parameter(num_rules), &record, |b, record| {
      b.iter(|| parser.parse(black_box(record.clone())))
    });
  }

  group.finish();
}

fn bench_event_notify(c: &mut Criterion) {
  let mut group = c.benchmark_group("EventNotify");

  for num_subscribers in [1usize, 10, 100].iter() {
    let event = Event::<u64>::new("bench");
    let sum = Arc::new(AtomicU64::new(0));
    for _ in 0..*num_subscribers {
      let sum = sum.clone();
      event.subscribe(move |n: &u64| {
        sum.fetch_add(*n, Ordering::Relaxed);
        Ok(())
      });
    }

    group.throughput(Throughput::Elements(*num_subscribers as u64));
    group.bench_with_input(BenchmarkId::from_parameter(num_subscribers), &event, |b, event| {
      b.iter(|| event.notify(black_box(&1)).unwrap())
    });
  }

  group.finish();
}

criterion_group!(benches, bench_user_from_record, bench_parser_rule_count, bench_event_notify);
criterion_main!(benches);
