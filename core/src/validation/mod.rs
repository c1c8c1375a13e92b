// roster/src/validation/mod.rs

//! Declarative field validation: rules, the parser that runs them, and the
//! two-variant outcome it produces.

pub mod parser;
pub mod result;
pub mod rule;

pub use parser::Parser;
pub use result::Validation;
pub use rule::{FieldRule, FieldValidator};
