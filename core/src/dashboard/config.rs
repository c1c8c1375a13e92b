// roster/src/dashboard/config.rs

use crate::ui::{ChartKind, ChartOptions, DatasetOptions};

/// Presentation settings for the dashboard charts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
  pub age_chart: ChartOptions,
  pub status_chart: ChartOptions,
  pub signup_chart: ChartOptions,
  /// Status chart label for active users.
  pub active_label: String,
  /// Status chart label for inactive users.
  pub inactive_label: String,
}

fn colors(values: &[&str]) -> Vec<String> {
  values.iter().map(|c| c.to_string()).collect()
}

impl Default for DashboardConfig {
  fn default() -> Self {
    Self {
      age_chart: ChartOptions {
        title: "Users by age".to_string(),
        kind: ChartKind::Bar,
        dataset: DatasetOptions {
          label: "Age".to_string(),
          background_colors: colors(&["#4CAF50", "#2196F3", "#FF9800", "#F44336"]),
          border_colors: colors(&["#388E3C", "#1976D2", "#F57C00", "#D32F2F"]),
        },
      },
      status_chart: ChartOptions {
        title: "Active and inactive users".to_string(),
        kind: ChartKind::Pie,
        dataset: DatasetOptions {
          label: "Users".to_string(),
          background_colors: colors(&["#4CAF50", "#F44336"]),
          border_colors: colors(&["#388E3C", "#D32F2F"]),
        },
      },
      signup_chart: ChartOptions {
        title: "Signups per month".to_string(),
        kind: ChartKind::Line,
        dataset: DatasetOptions {
          label: "Signups".to_string(),
          background_colors: colors(&["#2196F3"]),
          border_colors: colors(&["#1976D2"]),
        },
      },
      active_label: "Active".to_string(),
      inactive_label: "Inactive".to_string(),
    }
  }
}
