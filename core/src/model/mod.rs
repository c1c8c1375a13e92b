// roster/src/model/mod.rs

//! Domain records and the plain records they are parsed from.

pub mod dto;
pub mod rules;
pub mod user;
pub mod value;

pub use dto::{AssignedFields, UserInsertDto, UserUpdateDto};
pub use user::{age_between, User, UserId};
pub use value::{Fields, Record, Value};
