// roster/src/ui/mod.rs

//! Headless counterparts of the dashboard widgets: they hold the state a
//! renderer would draw and expose the same events, without any rendering.

pub mod alert;
pub mod chart;
pub mod form;

pub use alert::{Alert, AlertKind};
pub use chart::{Chart, ChartKind, ChartOptions, DatasetOptions};
pub use form::{EditForm, FormFields, RegistrationForm};
