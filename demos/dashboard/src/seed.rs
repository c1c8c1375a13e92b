// roster_dashboard/src/seed.rs

use std::fs;
use std::path::Path;

use roster::FormFields;
use serde::Deserialize;

use crate::errors::{AppError, Result};

/// One entry of the seed file, shaped like the registration form input.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedUser {
  pub name: String,
  pub email: String,
  /// `YYYY-MM-DD`
  pub birthdate: String,
  #[serde(default)]
  pub is_active: bool,
}

impl From<SeedUser> for FormFields {
  fn from(seed: SeedUser) -> Self {
    FormFields {
      name: seed.name,
      email: seed.email,
      birthdate: seed.birthdate,
      is_active: seed.is_active,
    }
  }
}

pub fn load(path: &Path) -> Result<Vec<SeedUser>> {
  let raw = fs::read_to_string(path).map_err(|source| AppError::SeedFile {
    path: path.to_path_buf(),
    source,
  })?;
  let users: Vec<SeedUser> = serde_json::from_str(&raw)?;
  tracing::debug!(path = %path.display(), count = users.len(), "Seed file parsed.");
  Ok(users)
}

pub fn samples() -> Vec<SeedUser> {
  let sample = |name: &str, email: &str, birthdate: &str, is_active: bool| SeedUser {
    name: name.to_string(),
    email: email.to_string(),
    birthdate: birthdate.to_string(),
    is_active,
  };
  vec![
    sample("Ada Lovelace", "ada@example.com", "1990-12-10", true),
    sample("Alan Turing", "alan@example.com", "1984-06-23", true),
    sample("Grace Hopper", "grace@example.com", "1990-12-09", false),
    sample("Broken Entry", "not-an-email", "", true),
  ]
}
