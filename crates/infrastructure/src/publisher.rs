//! Domain event publishing.

use std::sync::Arc;

use async_trait::async_trait;
use common::errs::UnitResult;
use common::{Aggregate, DomainEventPublisher, EventEnvelope};
use tokio::sync::RwLock;

use crate::error::Result;

/// Publisher that records every envelope it receives.
///
/// Stands in for a message broker in tests and local runs. Clones share the
/// recorded events.
#[derive(Clone, Default)]
pub struct InMemoryEventPublisher {
    published: Arc<RwLock<Vec<EventEnvelope>>>,
}

impl InMemoryEventPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every envelope published so far, oldest first.
    pub async fn published_events(&self) -> Vec<EventEnvelope> {
        self.published.read().await.clone()
    }

    pub async fn clear_published_events(&self) {
        self.published.write().await.clear();
    }
}

#[async_trait]
impl DomainEventPublisher for InMemoryEventPublisher {
    #[tracing::instrument(skip(self, events), fields(count = events.len()))]
    async fn publish(&self, events: Vec<EventEnvelope>) -> UnitResult {
        for event in &events {
            tracing::debug!(
                event_type = %event.event_type,
                aggregate_id = %event.aggregate_id,
                "publishing event"
            );
            metrics::counter!("events_published_total", "event_type" => event.event_type.clone())
                .increment(1);
        }

        self.published.write().await.extend(events);
        Ok(())
    }
}

/// Publishes the aggregate's raised events as one batch, then clears them.
///
/// Returns the number of published events. Nothing is published when the
/// buffer is empty. The buffer is cleared only after the publisher accepts
/// the batch, so a failed publish can be retried.
pub async fn publish_aggregate_events<A, P>(aggregate: &mut A, publisher: &P) -> Result<usize>
where
    A: Aggregate,
    P: DomainEventPublisher + ?Sized,
{
    let envelopes = aggregate.event_envelopes()?;
    if envelopes.is_empty() {
        return Ok(0);
    }

    let count = envelopes.len();
    if let Err(error) = publisher.publish(envelopes).await {
        tracing::warn!(
            aggregate_type = A::aggregate_type(),
            %error,
            "publishing domain events failed"
        );
        return Err(error.into());
    }
    aggregate.clear_domain_events();
    tracing::info!(aggregate_type = A::aggregate_type(), count, "published domain events");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use common::Error;
    use domain::{Courier, Location, Order};
    use uuid::Uuid;

    use super::*;
    use crate::error::InfrastructureError;

    struct UnavailableBroker;

    #[async_trait]
    impl DomainEventPublisher for UnavailableBroker {
        async fn publish(&self, _events: Vec<EventEnvelope>) -> UnitResult {
            Err(Error::of("broker.unavailable", "Broker is unavailable"))
        }
    }

    #[tokio::test]
    async fn test_failed_publish_keeps_events() {
        let mut order = Order::must_create(Uuid::new_v4(), Location::min(), 1);
        order.assign(Uuid::new_v4()).unwrap();

        let error = publish_aggregate_events(&mut order, &UnavailableBroker)
            .await
            .unwrap_err();

        match error {
            InfrastructureError::Domain(error) => assert_eq!(error.code(), "broker.unavailable"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(order.domain_events().len(), 1);

        let publisher = InMemoryEventPublisher::new();
        let count = publish_aggregate_events(&mut order, &publisher).await.unwrap();
        assert_eq!(count, 1);
        assert!(order.domain_events().is_empty());
        assert_eq!(publisher.published_events().await[0].event_type, "OrderAssigned");
    }

    #[tokio::test]
    async fn test_publish_records_events() {
        let publisher = InMemoryEventPublisher::new();
        let mut order = Order::must_create(Uuid::new_v4(), Location::min(), 1);
        order.assign(Uuid::new_v4()).unwrap();

        let count = publish_aggregate_events(&mut order, &publisher).await.unwrap();

        assert_eq!(count, 1);
        assert!(order.domain_events().is_empty());
        let published = publisher.published_events().await;
        assert_eq!(published[0].event_type, "OrderAssigned");
        assert_eq!(published[0].aggregate_type, "Order");
        assert_eq!(published[0].aggregate_id, order.id().to_string());
    }

    #[tokio::test]
    async fn test_nothing_to_publish() {
        let publisher = InMemoryEventPublisher::new();
        let mut courier = Courier::must_create("Иван", 1, Location::min());

        let count = publish_aggregate_events(&mut courier, &publisher).await.unwrap();

        assert_eq!(count, 0);
        assert!(publisher.published_events().await.is_empty());
    }

    #[tokio::test]
    async fn test_clear_published_events() {
        let publisher = InMemoryEventPublisher::new();
        let mut courier = Courier::must_create("Иван", 1, Location::min());
        courier.take_order(Uuid::new_v4(), 1).unwrap();
        publish_aggregate_events(&mut courier, &publisher).await.unwrap();

        publisher.clear_published_events().await;

        assert!(publisher.published_events().await.is_empty());
    }
}
