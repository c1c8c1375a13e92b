// roster/src/ui/chart.rs

//! A single-dataset chart: labelled counters that a renderer can draw.

use std::fmt;

use tracing::{event, Level};

use crate::error::RosterResult;
use crate::util::{raise, raise_if};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
  Bar,
  Pie,
  Line,
}

impl fmt::Display for ChartKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      ChartKind::Bar => "bar",
      ChartKind::Pie => "pie",
      ChartKind::Line => "line",
    })
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetOptions {
  pub label: String,
  pub background_colors: Vec<String>,
  pub border_colors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartOptions {
  pub title: String,
  pub kind: ChartKind,
  pub dataset: DatasetOptions,
}

/// Labels keep the order in which they were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Chart {
  options: Option<ChartOptions>,
  labels: Vec<String>,
  values: Vec<i64>,
}

impl Chart {
  pub fn new() -> Self {
    Self::default()
  }

  /// (Re)creates the chart with `options`, discarding any previous data.
  pub fn render(&mut self, options: ChartOptions) -> RosterResult<()> {
    raise_if(options.title.trim().is_empty(), "Title must be a non-empty string")?
      .and_if(options.dataset.label.trim().is_empty(), "Dataset label must be a non-empty string")?;

    event!(Level::DEBUG, title = %options.title, kind = %options.kind, "Chart rendered.");
    self.options = Some(options);
    self.labels.clear();
    self.values.clear();
    Ok(())
  }

  pub fn is_rendered(&self) -> bool {
    self.options.is_some()
  }

  pub fn options(&self) -> Option<&ChartOptions> {
    self.options.as_ref()
  }

  /// Adds each `(label, delta)` to the label's value, appending unseen labels.
  /// Nothing is applied unless the chart is rendered and `points` is non-empty.
  pub fn update<L: Into<String>>(&mut self, points: impl IntoIterator<Item = (L, i64)>) -> RosterResult<()> {
    if self.options.is_none() {
      return raise("Chart must be rendered before updating");
    }
    let points: Vec<(String, i64)> = points.into_iter().map(|(label, delta)| (label.into(), delta)).collect();
    raise_if(points.is_empty(), "Data must be a non-empty list of [label, value] pairs")?;

    for (label, delta) in points {
      match self.labels.iter().position(|l| *l == label) {
        Some(index) => self.values[index] += delta,
        None => {
          self.labels.push(label);
          self.values.push(delta);
        }
      }
    }
    Ok(())
  }

  pub fn value_of(&self, label: &str) -> Option<i64> {
    self.labels.iter().position(|l| l == label).map(|index| self.values[index])
  }

  pub fn points(&self) -> impl Iterator<Item = (&str, i64)> {
    self.labels.iter().map(String::as_str).zip(self.values.iter().copied())
  }

  pub fn total(&self) -> i64 {
    self.values.iter().sum()
  }
}
