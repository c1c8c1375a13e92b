// roster/src/table.rs

//! Defines `UsersTable`, the authoritative in-memory collection of users and
//! the events announcing every change to it.

use std::collections::BTreeMap;

use chrono::Utc;
use tracing::{event, instrument, Level};

use crate::error::RosterResult;
use crate::event::{Event, Subscribers};
use crate::model::{AssignedFields, User, UserId, UserInsertDto, UserUpdateDto};
use crate::util::raise_if;

/// In-memory user store.
///
/// Users are keyed by id. Ids come from a sequence starting at 1 and only
/// ever grow, so iteration order is insertion order. Each mutation is applied
/// first and announced afterwards; a failing subscriber does not roll it back.
pub struct UsersTable {
  sequence: UserId,
  users: BTreeMap<UserId, User>,
  on_insert: Event<User>,
  on_edit: Event<User>,
  // (previous state, new state)
  on_update: Event<(User, User)>,
  on_delete: Event<User>,
}

impl UsersTable {
  pub fn new() -> Self {
    Self {
      sequence: 1,
      users: BTreeMap::new(),
      on_insert: Event::new("on_insert"),
      on_edit: Event::new("on_edit"),
      on_update: Event::new("on_update"),
      on_delete: Event::new("on_delete"),
    }
  }

  pub fn on_insert(&self) -> Subscribers<'_, User> {
    self.on_insert.subscribers()
  }

  /// Fired by [`UsersTable::request_edit`] with the user to be edited.
  pub fn on_edit(&self) -> Subscribers<'_, User> {
    self.on_edit.subscribers()
  }

  pub fn on_update(&self) -> Subscribers<'_, (User, User)> {
    self.on_update.subscribers()
  }

  pub fn on_delete(&self) -> Subscribers<'_, User> {
    self.on_delete.subscribers()
  }

  pub fn get(&self, id: UserId) -> Option<&User> {
    self.users.get(&id)
  }

  pub fn users(&self) -> impl Iterator<Item = &User> {
    self.users.values()
  }

  pub fn len(&self) -> usize {
    self.users.len()
  }

  pub fn is_empty(&self) -> bool {
    self.users.is_empty()
  }

  /// Id the next appended user will receive.
  pub fn next_id(&self) -> UserId {
    self.sequence
  }

  /// Stores a new user built from `dto`, stamping both timestamps with the
  /// current time, then notifies `on_insert`.
  #[instrument(name = "UsersTable::append", skip_all, fields(next_id = self.sequence), err(Display))]
  pub fn append(&mut self, dto: UserInsertDto) -> RosterResult<User> {
    let now = Utc::now();
    let user = dto.to_user(AssignedFields {
      id: self.sequence,
      created_at: now,
      updated_at: now,
    })?;
    // The id is only consumed once the user exists.
    self.sequence += 1;
    self.users.insert(user.id(), user.clone());
    event!(Level::INFO, user_id = user.id(), num_users = self.users.len(), "User appended.");

    self.on_insert.notify(&user)?;
    Ok(user)
  }

  /// Replaces the user `id` with `dto` applied to it, then notifies
  /// `on_update` with both states. Returns `false` for an unknown id.
  #[instrument(name = "UsersTable::update", skip(self, dto), err(Display))]
  pub fn update(&mut self, id: UserId, dto: &UserUpdateDto) -> RosterResult<bool> {
    raise_if(id == 0, "userId must be a positive number")?;

    let Some(current) = self.users.get(&id) else {
      event!(Level::DEBUG, "No user with this id; nothing updated.");
      return Ok(false);
    };
    let updated = dto.apply_to(current)?;
    let previous = current.clone();
    self.users.insert(id, updated.clone());
    event!(Level::INFO, "User updated.");

    self.on_update.notify(&(previous, updated))?;
    Ok(true)
  }

  /// Removes the user `id`, then notifies `on_delete`. Returns `false` for an
  /// unknown id.
  #[instrument(name = "UsersTable::erase", skip(self), err(Display))]
  pub fn erase(&mut self, id: UserId) -> RosterResult<bool> {
    let Some(user) = self.users.remove(&id) else {
      event!(Level::DEBUG, "No user with this id; nothing erased.");
      return Ok(false);
    };
    event!(Level::INFO, num_users = self.users.len(), "User erased.");

    self.on_delete.notify(&user)?;
    Ok(true)
  }

  /// Announces that the user `id` should be edited. Returns `false` for an
  /// unknown id.
  pub fn request_edit(&self, id: UserId) -> RosterResult<bool> {
    match self.users.get(&id) {
      Some(user) => {
        self.on_edit.notify(user)?;
        Ok(true)
      }
      None => Ok(false),
    }
  }
}

impl Default for UsersTable {
  fn default() -> Self {
    Self::new()
  }
}

impl std::fmt::Debug for UsersTable {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("UsersTable")
      .field("sequence", &self.sequence)
      .field("num_users", &self.users.len())
      .field("on_insert", &self.on_insert)
      .field("on_edit", &self.on_edit)
      .field("on_update", &self.on_update)
      .field("on_delete", &self.on_delete)
      .finish()
  }
}
