// roster/src/event/mod.rs

//! Synchronous, ordered, multi-subscriber broadcast.

pub mod channel;
pub mod subscribers;

pub use channel::{Event, Subscriber};
pub use subscribers::Subscribers;
