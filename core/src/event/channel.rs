// roster/src/event/channel.rs

//! Defines `Event<A>`, the broadcast primitive owned by an emitting component.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{event, instrument, span, Level};

use crate::error::{RosterError, RosterResult};
use crate::event::subscribers::Subscribers;

/// A subscriber callback. The `Arc` doubles as the subscription's identity:
/// keep a clone of it to unsubscribe later.
pub type Subscriber<A> = Arc<dyn Fn(&A) -> anyhow::Result<()> + Send + Sync + 'static>;

/// An ordered list of subscribers receiving payloads of type `A`.
///
/// Delivery is synchronous and in subscription order; every subscriber has
/// run by the time [`Event::notify`] returns. The first failing subscriber
/// aborts delivery to the remaining ones.
///
/// Components keep their `Event`s private and hand out [`Subscribers`] views,
/// so only the owner can broadcast.
pub struct Event<A: 'static> {
  name: String,
  subscribers: RwLock<Vec<Subscriber<A>>>,
}

impl<A: 'static> Event<A> {
  /// `name` identifies the event in logs and wrapped subscriber errors.
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      subscribers: RwLock::new(Vec::new()),
    }
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  /// Appends `callback` and returns its handle.
  pub fn subscribe<F>(&self, callback: F) -> Subscriber<A>
  where
    F: Fn(&A) -> anyhow::Result<()> + Send + Sync + 'static,
  {
    let handle: Subscriber<A> = Arc::new(callback);
    self.subscribe_handle(handle.clone());
    handle
  }

  /// Appends an existing handle. The same handle may be subscribed more than
  /// once, and is then called once per subscription.
  pub fn subscribe_handle(&self, handle: Subscriber<A>) {
    let mut guard = self.subscribers.write();
    guard.push(handle);
    event!(Level::TRACE, event = %self.name, num_subscribers = guard.len(), "Subscriber added.");
  }

  /// Removes the first subscription of `handle`. Returns `false` if it was
  /// not subscribed.
  pub fn unsubscribe(&self, handle: &Subscriber<A>) -> bool {
    let mut guard = self.subscribers.write();
    match guard.iter().position(|s| same_subscriber(s, handle)) {
      Some(index) => {
        guard.remove(index);
        event!(Level::TRACE, event = %self.name, num_subscribers = guard.len(), "Subscriber removed.");
        true
      }
      None => false,
    }
  }

  /// Snapshot of the current subscribers, in order.
  pub fn all(&self) -> Vec<Subscriber<A>> {
    self.subscribers.read().clone()
  }

  pub fn len(&self) -> usize {
    self.subscribers.read().len()
  }

  pub fn is_empty(&self) -> bool {
    self.subscribers.read().is_empty()
  }

  /// The restricted view handed to consumers.
  pub fn subscribers(&self) -> Subscribers<'_, A> {
    Subscribers::new(self)
  }

  /// Calls every current subscriber with `payload`.
  ///
  /// The list is snapshotted first, so subscribers may (un)subscribe while
  /// being notified; such changes apply from the next `notify`.
  #[instrument(
        name = "Event::notify",
        skip_all,
        fields(event = %self.name),
        err(Display)
    )]
  pub fn notify(&self, payload: &A) -> RosterResult<()> {
    let subscribers = self.all();
    event!(Level::DEBUG, num_subscribers = subscribers.len(), "Notifying subscribers.");

    for (index, subscriber) in subscribers.iter().enumerate() {
      let subscriber_span = span!(Level::TRACE, "subscriber", subscriber_index = index);
      let _subscriber_span_guard = subscriber_span.enter();

      if let Err(source) = subscriber(payload) {
        event!(Level::ERROR, error = %source, "Subscriber failed; remaining subscribers skipped.");
        return Err(RosterError::Subscriber {
          event: self.name.clone(),
          source,
        });
      }
    }
    Ok(())
  }
}

// Identity is the allocation, not the vtable.
fn same_subscriber<A>(a: &Subscriber<A>, b: &Subscriber<A>) -> bool {
  std::ptr::eq(Arc::as_ptr(a) as *const (), Arc::as_ptr(b) as *const ())
}

impl<A: 'static> std::fmt::Debug for Event<A> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Event")
      .field("name", &self.name)
      .field("num_subscribers", &self.len())
      .finish()
  }
}
