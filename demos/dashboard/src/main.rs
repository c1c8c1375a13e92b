// roster_dashboard/src/main.rs

// Declare modules for the application
mod config;
mod errors;
mod report;
mod seed;

use crate::config::AppConfig;
use crate::errors::Result as AppResult; // Use the app's Result alias
use crate::report::Report;

use roster::Dashboard;
use tracing_subscriber::EnvFilter;

fn run() -> AppResult<()> {
  // Load application configuration
  let app_config = AppConfig::from_env().inspect_err(|e| {
    tracing::error!(error = %e, "Failed to load application configuration.");
  })?;

  let dashboard = Dashboard::new(&app_config.dashboard_config())?;

  let seed_users = match &app_config.seed_file {
    Some(path) => seed::load(path)?,
    None => {
      tracing::info!("No seed file configured; registering built-in sample users.");
      seed::samples()
    }
  };

  for seed_user in seed_users {
    let name = seed_user.name.clone();
    if dashboard.register(seed_user.into()) {
      tracing::info!(%name, "User registered.");
    } else {
      let reason = dashboard
        .registration_form()
        .alert()
        .message()
        .unwrap_or("unknown reason")
        .to_string();
      tracing::warn!(%name, %reason, "User rejected.");
    }
  }

  let report = Report::collect(&dashboard);
  if app_config.report_json {
    println!("{}", serde_json::to_string_pretty(&report)?);
  } else {
    print!("{}", report.to_text());
  }
  Ok(())
}

// RUST_LOG overrides the default level of INFO.
fn log_filter() -> EnvFilter {
  EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

fn main() -> anyhow::Result<()> {
  // Initialize tracing subscriber for logging
  tracing_subscriber::fmt()
    .with_env_filter(log_filter())
    .with_writer(std::io::stderr)
    .init();

  tracing::info!("Starting roster dashboard...");
  run()?;
  Ok(())
}
