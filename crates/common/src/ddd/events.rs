//! Domain events, their transport envelope and the publishing port.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errs::UnitResult;

/// Unique identifier for an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(Uuid);

impl EventId {
    /// Creates a new random event ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Trait for domain events.
///
/// Domain events represent facts that have happened in the domain.
/// They are immutable and should be named in past tense.
pub trait DomainEvent: Serialize + Clone + Send + Sync + std::fmt::Debug {
    /// Returns the event type name.
    fn event_type(&self) -> &'static str;

    /// Returns the unique identifier assigned when the event was raised.
    fn event_id(&self) -> EventId;

    /// Returns when the event was raised.
    fn occurred_on(&self) -> DateTime<Utc>;
}

/// An event together with the aggregate data needed to publish it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventEnvelope {
    /// Unique identifier for this event.
    pub event_id: EventId,

    /// The type of the event (e.g., "OrderAssigned").
    pub event_type: String,

    /// The aggregate this event belongs to, rendered as a string.
    pub aggregate_id: String,

    /// The type of aggregate (e.g., "Courier", "Order").
    pub aggregate_type: String,

    /// When the event was raised.
    pub occurred_on: DateTime<Utc>,

    /// The event payload as JSON.
    pub payload: serde_json::Value,
}

impl EventEnvelope {
    /// Wraps a domain event raised by the given aggregate.
    pub fn from_event<E: DomainEvent>(
        aggregate_id: impl ToString,
        aggregate_type: &str,
        event: &E,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self {
            event_id: event.event_id(),
            event_type: event.event_type().to_string(),
            aggregate_id: aggregate_id.to_string(),
            aggregate_type: aggregate_type.to_string(),
            occurred_on: event.occurred_on(),
            payload: serde_json::to_value(event)?,
        })
    }
}

/// Port through which raised events leave the domain.
///
/// Callers drain an aggregate's events after a successful operation and hand
/// them to the publisher before committing.
#[async_trait]
pub trait DomainEventPublisher: Send + Sync {
    /// Publishes the given envelopes in order.
    async fn publish(&self, events: Vec<EventEnvelope>) -> UnitResult;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Serialize)]
    struct Pinged {
        event_id: EventId,
        occurred_on: DateTime<Utc>,
        target: String,
    }

    impl DomainEvent for Pinged {
        fn event_type(&self) -> &'static str {
            "Pinged"
        }

        fn event_id(&self) -> EventId {
            self.event_id
        }

        fn occurred_on(&self) -> DateTime<Utc> {
            self.occurred_on
        }
    }

    #[test]
    fn event_id_new_creates_unique_ids() {
        assert_ne!(EventId::new(), EventId::new());
    }

    #[test]
    fn envelope_from_event_copies_event_data() {
        let event = Pinged {
            event_id: EventId::new(),
            occurred_on: Utc::now(),
            target: "courier".to_string(),
        };

        let envelope = EventEnvelope::from_event(42_i64, "Probe", &event).unwrap();

        assert_eq!(envelope.event_id, event.event_id);
        assert_eq!(envelope.event_type, "Pinged");
        assert_eq!(envelope.aggregate_id, "42");
        assert_eq!(envelope.aggregate_type, "Probe");
        assert_eq!(envelope.occurred_on, event.occurred_on);
        assert_eq!(envelope.payload["target"], "courier");
    }

    struct Rejecting;

    #[async_trait]
    impl DomainEventPublisher for Rejecting {
        async fn publish(&self, events: Vec<EventEnvelope>) -> UnitResult {
            if events.is_empty() {
                return Ok(());
            }
            Err(crate::Error::of("broker.unavailable", "Broker is unavailable"))
        }
    }

    #[tokio::test]
    async fn publisher_is_object_safe() {
        let publisher: Box<dyn DomainEventPublisher> = Box::new(Rejecting);
        let event = Pinged {
            event_id: EventId::new(),
            occurred_on: Utc::now(),
            target: "order".to_string(),
        };
        let envelope = EventEnvelope::from_event("o-1", "Probe", &event).unwrap();

        assert!(publisher.publish(Vec::new()).await.is_ok());
        let error = publisher.publish(vec![envelope]).await.unwrap_err();
        assert_eq!(error.code(), "broker.unavailable");
    }
}
