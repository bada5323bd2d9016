//! Aggregate roots and their raised-event buffer.

use super::entity::Entity;
use super::events::{DomainEvent, EventEnvelope};

/// Append-only buffer of events raised by an aggregate, drained as a batch.
#[derive(Debug, Clone)]
pub struct DomainEvents<E> {
    events: Vec<E>,
}

impl<E> DomainEvents<E> {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Appends an event.
    pub fn raise(&mut self, event: E) {
        self.events.push(event);
    }

    /// Returns the raised events in order.
    pub fn as_slice(&self) -> &[E] {
        &self.events
    }

    /// Returns the number of buffered events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true if nothing was raised since the last clear.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Drops every buffered event.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Removes and returns every buffered event.
    pub fn take(&mut self) -> Vec<E> {
        std::mem::take(&mut self.events)
    }
}

impl<E> Default for DomainEvents<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// A consistency boundary that owns child entities and records the domain
/// events its successful operations raise.
pub trait Aggregate: Entity {
    /// The type of events this aggregate raises.
    type Event: DomainEvent;

    /// Returns the aggregate type name.
    fn aggregate_type() -> &'static str;

    /// Returns the raised-event buffer.
    fn events(&self) -> &DomainEvents<Self::Event>;

    /// Returns the raised-event buffer for appending or draining.
    fn events_mut(&mut self) -> &mut DomainEvents<Self::Event>;

    /// Returns the events raised since the last clear, oldest first.
    fn domain_events(&self) -> &[Self::Event] {
        self.events().as_slice()
    }

    /// Records an event.
    fn raise_domain_event(&mut self, event: Self::Event) {
        self.events_mut().raise(event);
    }

    /// Acknowledges every raised event.
    fn clear_domain_events(&mut self) {
        self.events_mut().clear();
    }

    /// Drains the raised events.
    fn take_domain_events(&mut self) -> Vec<Self::Event> {
        self.events_mut().take()
    }

    /// Wraps the raised events into publishable envelopes without draining
    /// the buffer.
    fn event_envelopes(&self) -> Result<Vec<EventEnvelope>, serde_json::Error> {
        let aggregate_id = self.id().map(ToString::to_string).unwrap_or_default();
        self.domain_events()
            .iter()
            .map(|event| EventEnvelope::from_event(&aggregate_id, Self::aggregate_type(), event))
            .collect()
    }

    /// Drains the raised events into publishable envelopes.
    ///
    /// The buffer is left untouched if any event fails to serialize.
    fn take_event_envelopes(&mut self) -> Result<Vec<EventEnvelope>, serde_json::Error> {
        let envelopes = self.event_envelopes()?;
        self.clear_domain_events();
        Ok(envelopes)
    }
}
