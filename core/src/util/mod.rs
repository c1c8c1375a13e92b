// roster/src/util/mod.rs

//! Small helpers shared by the rest of the crate: deferred values and
//! conditional error raising.

pub mod lazy;
pub mod raise;

pub use lazy::{evaluate, Lazy};
pub use raise::{raise, raise_if, raise_if_nullish, Raise};
