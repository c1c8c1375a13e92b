// roster/src/ui/form.rs

//! Registration and edit forms: raw input fields in, validated DTOs out.

use tracing::{event, Level};

use crate::error::RosterError;
use crate::event::{Event, Subscribers};
use crate::model::{rules, Record, User, UserId, UserInsertDto, UserUpdateDto};
use crate::ui::alert::{Alert, AlertKind};

/// Raw values as typed by the user. `birthdate` is `YYYY-MM-DD` text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
  pub name: String,
  pub email: String,
  pub birthdate: String,
  pub is_active: bool,
}

impl FormFields {
  pub fn to_record(&self) -> Record {
    Record::new()
      .with(rules::NAME, self.name.as_str())
      .with(rules::EMAIL, self.email.as_str())
      .with(rules::BIRTHDATE, self.birthdate.as_str())
      .with(rules::IS_ACTIVE, self.is_active)
  }

  pub fn from_user(user: &User) -> Self {
    Self {
      name: user.name().to_string(),
      email: user.email().to_string(),
      birthdate: user.birthdate().format("%Y-%m-%d").to_string(),
      is_active: user.is_active(),
    }
  }
}

fn show_warning(alert: &mut Alert, err: &RosterError) {
  event!(Level::WARN, error = %err, "Form submission rejected.");
  if let Err(show_err) = alert.show(err.to_string(), AlertKind::Warning) {
    event!(Level::ERROR, error = %show_err, "Could not display the form warning.");
  }
}

/// Collects a new user and announces it through `on_submit`.
#[derive(Debug)]
pub struct RegistrationForm {
  fields: FormFields,
  alert: Alert,
  on_submit: Event<UserInsertDto>,
}

impl RegistrationForm {
  pub fn new() -> Self {
    Self {
      fields: FormFields::default(),
      alert: Alert::new(),
      on_submit: Event::new("on_submit"),
    }
  }

  pub fn on_submit(&self) -> Subscribers<'_, UserInsertDto> {
    self.on_submit.subscribers()
  }

  pub fn fields(&self) -> &FormFields {
    &self.fields
  }

  pub fn fields_mut(&mut self) -> &mut FormFields {
    &mut self.fields
  }

  pub fn set_fields(&mut self, fields: FormFields) {
    self.fields = fields;
  }

  pub fn alert(&self) -> &Alert {
    &self.alert
  }

  /// Validates the fields and notifies `on_submit`. On success the fields are
  /// cleared and the alert hidden; any failure, including one raised by a
  /// subscriber, is shown as a warning and the fields are kept.
  pub fn submit(&mut self) -> bool {
    let outcome = UserInsertDto::from_record(self.fields.to_record()).and_then(|dto| self.on_submit.notify(&dto));

    match outcome {
      Ok(()) => {
        self.fields = FormFields::default();
        self.alert.hide();
        true
      }
      Err(err) => {
        show_warning(&mut self.alert, &err);
        false
      }
    }
  }
}

impl Default for RegistrationForm {
  fn default() -> Self {
    Self::new()
  }
}

/// Edits the user last passed to [`EditForm::load`]; `on_save` carries the
/// user's id and the validated changes.
#[derive(Debug)]
pub struct EditForm {
  fields: FormFields,
  editing: Option<UserId>,
  alert: Alert,
  on_save: Event<(UserId, UserUpdateDto)>,
}

impl EditForm {
  pub fn new() -> Self {
    Self {
      fields: FormFields::default(),
      editing: None,
      alert: Alert::new(),
      on_save: Event::new("on_save"),
    }
  }

  pub fn on_save(&self) -> Subscribers<'_, (UserId, UserUpdateDto)> {
    self.on_save.subscribers()
  }

  pub fn fields(&self) -> &FormFields {
    &self.fields
  }

  pub fn fields_mut(&mut self) -> &mut FormFields {
    &mut self.fields
  }

  pub fn editing(&self) -> Option<UserId> {
    self.editing
  }

  pub fn alert(&self) -> &Alert {
    &self.alert
  }

  pub fn load(&mut self, user: &User) {
    self.alert.hide();
    self.editing = Some(user.id());
    self.fields = FormFields::from_user(user);
    event!(Level::DEBUG, user_id = user.id(), "User loaded into edit form.");
  }

  pub fn submit(&mut self) -> bool {
    let Some(user_id) = self.editing else {
      show_warning(&mut self.alert, &RosterError::contract("No user is being updated."));
      return false;
    };

    let outcome =
      UserUpdateDto::from_record(self.fields.to_record()).and_then(|dto| self.on_save.notify(&(user_id, dto)));

    match outcome {
      Ok(()) => {
        self.alert.hide();
        true
      }
      Err(err) => {
        show_warning(&mut self.alert, &err);
        false
      }
    }
  }
}

impl Default for EditForm {
  fn default() -> Self {
    Self::new()
  }
}
