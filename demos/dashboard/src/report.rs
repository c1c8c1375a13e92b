// roster_dashboard/src/report.rs

use chrono::{DateTime, Utc};
use roster::{Chart, Dashboard};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PointReport {
  pub label: String,
  pub value: i64,
}

#[derive(Debug, Serialize)]
pub struct ChartReport {
  pub title: String,
  pub kind: String,
  pub points: Vec<PointReport>,
}

#[derive(Debug, Serialize)]
pub struct Report {
  pub generated_at: DateTime<Utc>,
  pub users: usize,
  pub charts: Vec<ChartReport>,
}

fn chart_report(chart: &Chart) -> ChartReport {
  let (title, kind) = chart
    .options()
    .map(|o| (o.title.clone(), o.kind.to_string()))
    .unwrap_or_default();
  ChartReport {
    title,
    kind,
    points: chart
      .points()
      // Labels whose count dropped back to zero are not worth showing.
      .filter(|(_, value)| *value != 0)
      .map(|(label, value)| PointReport {
        label: label.to_string(),
        value,
      })
      .collect(),
  }
}

impl Report {
  pub fn collect(dashboard: &Dashboard) -> Self {
    let users = dashboard.table().len();
    let charts = dashboard.charts();
    Self {
      generated_at: Utc::now(),
      users,
      charts: vec![
        chart_report(charts.by_age()),
        chart_report(charts.by_status()),
        chart_report(charts.by_signup_month()),
      ],
    }
  }

  pub fn to_text(&self) -> String {
    let mut out = format!("{} user(s) registered\n", self.users);
    for chart in &self.charts {
      out.push_str(&format!("\n{} ({})\n", chart.title, chart.kind));
      for point in &chart.points {
        out.push_str(&format!("  {:<12} {}\n", point.label, point.value));
      }
    }
    out
  }
}
