// roster/src/lib.rs

//! Roster: validated user records and a live statistics dashboard, built from
//! a few small synchronous building blocks.
//!
//! The crate provides:
//!  - Lazy values and conditional raise helpers for cheap preconditions.
//!  - A two-variant `Validation` outcome and a `Parser` of declarative field
//!    rules that reports every failing rule, not just the first.
//!  - `Event`, an ordered synchronous broadcast with a subscribe-only view.
//!  - Immutable `User` records and the `UserInsertDto` / `UserUpdateDto`
//!    inputs that derive them, all guarded by their own rule sets.
//!  - `UsersTable`, the in-memory store announcing inserts, edits, updates
//!    and deletes.
//!  - Headless forms, alerts and charts, and the `Dashboard` wiring them to
//!    the table (age distribution, active/inactive ratio, signups per month).

pub mod dashboard;
pub mod error;
pub mod event;
pub mod model;
pub mod table;
pub mod ui;
pub mod util;
pub mod validation;

// --- Re-exports for the Public API ---

pub use crate::error::{RosterError, RosterResult};
pub use crate::util::{evaluate, raise, raise_if, raise_if_nullish, Lazy, Raise};

pub use crate::validation::{FieldRule, FieldValidator, Parser, Validation};

pub use crate::event::{Event, Subscriber, Subscribers};

pub use crate::model::{
  age_between, AssignedFields, Fields, Record, User, UserId, UserInsertDto, UserUpdateDto, Value,
};

pub use crate::table::UsersTable;

pub use crate::ui::{Alert, AlertKind, Chart, ChartKind, ChartOptions, DatasetOptions, EditForm, FormFields, RegistrationForm};

pub use crate::dashboard::{Charts, Dashboard, DashboardConfig};

/*
    Typical wiring:
    1. Build a `Parser<Record>` with `.define_rule(..)?` per field, or use the
       ready-made `User::from_record` / `UserInsertDto::from_record`.
    2. Own an `Event<T>` inside the emitting component and hand out
       `event.subscribers()` so consumers can only (un)subscribe.
    3. Store users in a `UsersTable`; subscribe to its events to keep derived
       views (charts, forms) in step.
    4. Or let `Dashboard::new(&DashboardConfig::default())` do all of the above.
*/
