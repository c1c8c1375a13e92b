// roster/src/dashboard/charts.rs

//! The three aggregate statistics kept in step with the users table.

use chrono::Datelike;

use crate::error::RosterResult;
use crate::model::User;
use crate::ui::Chart;

use super::config::DashboardConfig;

#[derive(Debug, Clone)]
pub struct Charts {
  by_age: Chart,
  by_status: Chart,
  by_signup_month: Chart,
  active_label: String,
  inactive_label: String,
}

impl Charts {
  /// Renders all three charts from `config`.
  pub fn new(config: &DashboardConfig) -> RosterResult<Self> {
    let mut by_age = Chart::new();
    by_age.render(config.age_chart.clone())?;
    let mut by_status = Chart::new();
    by_status.render(config.status_chart.clone())?;
    let mut by_signup_month = Chart::new();
    by_signup_month.render(config.signup_chart.clone())?;

    Ok(Self {
      by_age,
      by_status,
      by_signup_month,
      active_label: config.active_label.clone(),
      inactive_label: config.inactive_label.clone(),
    })
  }

  pub fn by_age(&self) -> &Chart {
    &self.by_age
  }

  pub fn by_status(&self) -> &Chart {
    &self.by_status
  }

  pub fn by_signup_month(&self) -> &Chart {
    &self.by_signup_month
  }

  pub fn status_label(&self, user: &User) -> String {
    if user.is_active() {
      self.active_label.clone()
    } else {
      self.inactive_label.clone()
    }
  }

  pub fn record_insert(&mut self, user: &User) -> RosterResult<()> {
    self.by_age.update([(age_label(user), 1)])?;
    let status = self.status_label(user);
    self.by_status.update([(status, 1)])?;
    self.by_signup_month.update([(month_label(user), 1)])
  }

  pub fn record_delete(&mut self, user: &User) -> RosterResult<()> {
    self.by_age.update([(age_label(user), -1)])?;
    let status = self.status_label(user);
    self.by_status.update([(status, -1)])?;
    self.by_signup_month.update([(month_label(user), -1)])
  }

  /// Moves one count from the old label to the new one on every chart whose
  /// label changed.
  pub fn record_update(&mut self, previous: &User, current: &User) -> RosterResult<()> {
    if previous.age() != current.age() {
      self.by_age.update([(age_label(current), 1), (age_label(previous), -1)])?;
    }
    if previous.is_active() != current.is_active() {
      let moves = [(self.status_label(current), 1), (self.status_label(previous), -1)];
      self.by_status.update(moves)?;
    }
    if previous.created_at().month() != current.created_at().month() {
      self.by_signup_month.update([(month_label(current), 1), (month_label(previous), -1)])?;
    }
    Ok(())
  }
}

fn age_label(user: &User) -> String {
  user.age().to_string()
}

fn month_label(user: &User) -> String {
  user.created_at().format("%B").to_string()
}
