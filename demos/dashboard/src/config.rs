// roster_dashboard/src/config.rs

use crate::errors::{AppError, Result}; // Use AppError specific Result
use dotenvy::dotenv;
use roster::DashboardConfig;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
  /// JSON array of users to register on startup. Built-in samples when unset.
  pub seed_file: Option<PathBuf>,
  pub active_label: Option<String>,
  pub inactive_label: Option<String>,
  /// Print the report as JSON instead of text.
  pub report_json: bool,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let get_env = |var_name: &str| env::var(var_name).ok().filter(|v| !v.trim().is_empty());

    let seed_file = get_env("ROSTER_SEED_FILE").map(PathBuf::from);
    let active_label = get_env("ROSTER_ACTIVE_LABEL");
    let inactive_label = get_env("ROSTER_INACTIVE_LABEL");

    let report_json = get_env("ROSTER_REPORT_JSON")
      .unwrap_or_else(|| "false".to_string())
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid ROSTER_REPORT_JSON value: {}", e)))?;

    if active_label.is_some() && active_label == inactive_label {
      return Err(AppError::Config(
        "ROSTER_ACTIVE_LABEL and ROSTER_INACTIVE_LABEL must differ".to_string(),
      ));
    }

    tracing::info!("Application configuration loaded successfully.");
    Ok(Self {
      seed_file,
      active_label,
      inactive_label,
      report_json,
    })
  }

  pub fn dashboard_config(&self) -> DashboardConfig {
    let mut config = DashboardConfig::default();
    if let Some(label) = &self.active_label {
      config.active_label = label.clone();
    }
    if let Some(label) = &self.inactive_label {
      config.inactive_label = label.clone();
    }
    config
  }
}
