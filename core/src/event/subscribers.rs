// roster/src/event/subscribers.rs

//! The consumer-facing side of an [`Event`]: subscribe, unsubscribe and
//! list, but never broadcast.

use crate::event::channel::{Event, Subscriber};

/// Borrowed view over an [`Event`] without access to `notify`.
pub struct Subscribers<'a, A: 'static> {
  event: &'a Event<A>,
}

impl<'a, A: 'static> Subscribers<'a, A> {
  pub(crate) fn new(event: &'a Event<A>) -> Self {
    Self { event }
  }

  pub fn event_name(&self) -> &str {
    self.event.name()
  }

  pub fn subscribe<F>(&self, callback: F) -> Subscriber<A>
  where
    F: Fn(&A) -> anyhow::Result<()> + Send + Sync + 'static,
  {
    self.event.subscribe(callback)
  }

  pub fn subscribe_handle(&self, handle: Subscriber<A>) {
    self.event.subscribe_handle(handle)
  }

  pub fn unsubscribe(&self, handle: &Subscriber<A>) -> bool {
    self.event.unsubscribe(handle)
  }

  pub fn all(&self) -> Vec<Subscriber<A>> {
    self.event.all()
  }
}
