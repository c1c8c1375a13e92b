// roster/src/ui/alert.rs

//! A dismissible status message.

use std::fmt;
use std::str::FromStr;

use crate::error::{RosterError, RosterResult};
use crate::util::raise_if;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertKind {
  #[default]
  Primary,
  Secondary,
  Danger,
  Warning,
  Info,
  Light,
  Dark,
}

impl AlertKind {
  pub const ALL: [AlertKind; 7] = [
    AlertKind::Primary,
    AlertKind::Secondary,
    AlertKind::Danger,
    AlertKind::Warning,
    AlertKind::Info,
    AlertKind::Light,
    AlertKind::Dark,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      AlertKind::Primary => "primary",
      AlertKind::Secondary => "secondary",
      AlertKind::Danger => "danger",
      AlertKind::Warning => "warning",
      AlertKind::Info => "info",
      AlertKind::Light => "light",
      AlertKind::Dark => "dark",
    }
  }
}

impl fmt::Display for AlertKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for AlertKind {
  type Err = RosterError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let wanted = s.trim();
    AlertKind::ALL.into_iter().find(|kind| kind.as_str() == wanted).ok_or_else(|| {
      let names: Vec<&str> = AlertKind::ALL.iter().map(AlertKind::as_str).collect();
      RosterError::contract(format!("Type must be one of the following: {}", names.join(",")))
    })
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alert {
  kind: AlertKind,
  message: Option<String>,
  visible: bool,
}

impl Alert {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn show(&mut self, message: impl Into<String>, kind: AlertKind) -> RosterResult<()> {
    let message = message.into();
    raise_if(message.trim().is_empty(), "Message must be a non-empty string")?;
    self.kind = kind;
    self.message = Some(message);
    self.visible = true;
    Ok(())
  }

  /// Hides the alert. The last message is kept until the next `show`.
  pub fn hide(&mut self) {
    self.visible = false;
  }

  pub fn is_visible(&self) -> bool {
    self.visible
  }

  pub fn kind(&self) -> AlertKind {
    self.kind
  }

  pub fn message(&self) -> Option<&str> {
    self.message.as_deref()
  }
}
