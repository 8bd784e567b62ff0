//! In-memory event list.

use tracing::debug;

use crate::error::{AgendaError, AgendaResult};
use crate::event::Event;

/// Insertion-ordered collection of events.
///
/// No two events share the same start instant. The store only grows through
/// [`EventStore::insert`] or is swapped out wholesale by [`EventStore::replace_all`].
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event unless another one starts at exactly the same instant.
    pub fn insert(&mut self, event: Event) -> AgendaResult<()> {
        if self.events.iter().any(|e| e.date_time() == event.date_time()) {
            debug!(event = %event, "rejecting duplicate timestamp");
            return Err(AgendaError::DuplicateTimestamp(event.date_time()));
        }
        self.events.push(event);
        Ok(())
    }

    pub fn all(&self) -> &[Event] {
        &self.events
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Discard every event and take `events` in their given order.
    pub fn replace_all(&mut self, events: Vec<Event>) {
        self.events = events;
    }
}
