// roster/src/dashboard/mod.rs

//! Wires the forms, the users table and the charts together.
//!
//! Flow:
//!  - registration `on_submit` appends to the table;
//!  - table `on_insert` / `on_delete` add or remove one count per chart;
//!  - table `on_edit` loads the user into the edit form;
//!  - edit `on_save` updates the table, whose `on_update` moves counts
//!    between chart labels.
//!
//! A flow starting at the table (edit) locks the table and then the edit
//! form, while one starting at a form (save) locks them the other way round.
//! Every flow therefore runs under the dashboard's `dispatch` lock, one at a
//! time.

pub mod charts;
pub mod config;

pub use charts::Charts;
pub use config::DashboardConfig;

use std::sync::{Arc, Weak};

use anyhow::anyhow;
use parking_lot::{Mutex, MutexGuard};
use tracing::{event, Level};

use crate::error::RosterResult;
use crate::model::{User, UserId};
use crate::table::UsersTable;
use crate::ui::{EditForm, FormFields, RegistrationForm};

// Subscribers only hold weak references, so the components never keep each
// other alive.
fn upgrade<T>(weak: &Weak<Mutex<T>>, what: &str) -> anyhow::Result<Arc<Mutex<T>>> {
  weak.upgrade().ok_or_else(|| anyhow!("{} is no longer available", what))
}

pub struct Dashboard {
  dispatch: Mutex<()>,
  table: Arc<Mutex<UsersTable>>,
  registration: Arc<Mutex<RegistrationForm>>,
  edit_form: Arc<Mutex<EditForm>>,
  charts: Arc<Mutex<Charts>>,
}

impl Dashboard {
  /// Renders the charts and connects every component.
  pub fn new(config: &DashboardConfig) -> RosterResult<Self> {
    let dashboard = Self {
      dispatch: Mutex::new(()),
      table: Arc::new(Mutex::new(UsersTable::new())),
      registration: Arc::new(Mutex::new(RegistrationForm::new())),
      edit_form: Arc::new(Mutex::new(EditForm::new())),
      charts: Arc::new(Mutex::new(Charts::new(config)?)),
    };
    dashboard.wire();
    event!(Level::DEBUG, "Dashboard components wired.");
    Ok(dashboard)
  }

  fn wire(&self) {
    let table = self.table.lock();

    let charts = Arc::downgrade(&self.charts);
    table.on_insert().subscribe(move |user: &User| {
      upgrade(&charts, "charts")?.lock().record_insert(user)?;
      Ok(())
    });

    let charts = Arc::downgrade(&self.charts);
    table.on_update().subscribe(move |(previous, current): &(User, User)| {
      upgrade(&charts, "charts")?.lock().record_update(previous, current)?;
      Ok(())
    });

    let charts = Arc::downgrade(&self.charts);
    table.on_delete().subscribe(move |user: &User| {
      upgrade(&charts, "charts")?.lock().record_delete(user)?;
      Ok(())
    });

    let edit_form = Arc::downgrade(&self.edit_form);
    table.on_edit().subscribe(move |user: &User| {
      upgrade(&edit_form, "edit form")?.lock().load(user);
      Ok(())
    });

    let users = Arc::downgrade(&self.table);
    self.registration.lock().on_submit().subscribe(move |dto| {
      upgrade(&users, "users table")?.lock().append(dto.clone())?;
      Ok(())
    });

    let users = Arc::downgrade(&self.table);
    self.edit_form.lock().on_save().subscribe(move |(user_id, dto)| {
      upgrade(&users, "users table")?.lock().update(*user_id, dto)?;
      Ok(())
    });
  }

  /// Fills the registration form and submits it. Returns whether a user was
  /// added; on `false` the reason is in the form's alert.
  pub fn register(&self, fields: FormFields) -> bool {
    let _flow = self.dispatch.lock();
    let mut form = self.registration.lock();
    form.set_fields(fields);
    form.submit()
  }

  /// Loads the user `id` into the edit form, like pressing its edit button.
  pub fn edit(&self, id: UserId) -> RosterResult<bool> {
    let _flow = self.dispatch.lock();
    self.table.lock().request_edit(id)
  }

  /// Replaces the edit form's fields and submits it.
  pub fn save_edit(&self, fields: FormFields) -> bool {
    let _flow = self.dispatch.lock();
    let mut form = self.edit_form.lock();
    *form.fields_mut() = fields;
    form.submit()
  }

  pub fn delete(&self, id: UserId) -> RosterResult<bool> {
    let _flow = self.dispatch.lock();
    self.table.lock().erase(id)
  }

  // Holding one of these guards while calling a flow method on the same
  // thread deadlocks.
  pub fn table(&self) -> MutexGuard<'_, UsersTable> {
    self.table.lock()
  }

  pub fn registration_form(&self) -> MutexGuard<'_, RegistrationForm> {
    self.registration.lock()
  }

  pub fn edit_form(&self) -> MutexGuard<'_, EditForm> {
    self.edit_form.lock()
  }

  pub fn charts(&self) -> MutexGuard<'_, Charts> {
    self.charts.lock()
  }
}
