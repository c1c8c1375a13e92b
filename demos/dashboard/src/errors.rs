// roster_dashboard/src/errors.rs

use std::path::PathBuf;

use roster::RosterError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Could not read seed file '{path}': {source}")]
  SeedFile {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("JSON Error: {0}")]
  Json(#[from] serde_json::Error),

  #[error("Roster Error: {source}")]
  Roster {
    #[from] // Allows conversion from roster::RosterError
    source: RosterError,
  },
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
