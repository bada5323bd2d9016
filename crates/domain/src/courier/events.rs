//! Courier domain events.

use chrono::{DateTime, Utc};
use common::{DomainEvent, EventId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::kernel::Location;

/// Events raised by a courier aggregate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum CourierEvent {
    /// An order was placed into one of the courier's storage places.
    OrderTaken(OrderTakenData),

    /// An order was removed from the courier's storage.
    OrderCompleted(CourierOrderCompletedData),

    /// The courier moved one step towards a target.
    Moved(CourierMovedData),
}

impl CourierEvent {
    pub(crate) fn order_taken(courier_id: Uuid, order_id: Uuid, storage_place_id: Uuid) -> Self {
        CourierEvent::OrderTaken(OrderTakenData {
            event_id: EventId::new(),
            occurred_on: Utc::now(),
            courier_id,
            order_id,
            storage_place_id,
        })
    }

    pub(crate) fn order_completed(courier_id: Uuid, order_id: Uuid) -> Self {
        CourierEvent::OrderCompleted(CourierOrderCompletedData {
            event_id: EventId::new(),
            occurred_on: Utc::now(),
            courier_id,
            order_id,
        })
    }

    pub(crate) fn moved(courier_id: Uuid, from: Location, to: Location) -> Self {
        CourierEvent::Moved(CourierMovedData {
            event_id: EventId::new(),
            occurred_on: Utc::now(),
            courier_id,
            from,
            to,
        })
    }
}

impl DomainEvent for CourierEvent {
    fn event_type(&self) -> &'static str {
        match self {
            CourierEvent::OrderTaken(_) => "CourierOrderTaken",
            CourierEvent::OrderCompleted(_) => "CourierOrderCompleted",
            CourierEvent::Moved(_) => "CourierMoved",
        }
    }

    fn event_id(&self) -> EventId {
        match self {
            CourierEvent::OrderTaken(data) => data.event_id,
            CourierEvent::OrderCompleted(data) => data.event_id,
            CourierEvent::Moved(data) => data.event_id,
        }
    }

    fn occurred_on(&self) -> DateTime<Utc> {
        match self {
            CourierEvent::OrderTaken(data) => data.occurred_on,
            CourierEvent::OrderCompleted(data) => data.occurred_on,
            CourierEvent::Moved(data) => data.occurred_on,
        }
    }
}

/// Data for OrderTaken event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderTakenData {
    pub event_id: EventId,
    pub occurred_on: DateTime<Utc>,
    pub courier_id: Uuid,
    pub order_id: Uuid,

    /// The storage place chosen for the order.
    pub storage_place_id: Uuid,
}

/// Data for OrderCompleted event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourierOrderCompletedData {
    pub event_id: EventId,
    pub occurred_on: DateTime<Utc>,
    pub courier_id: Uuid,
    pub order_id: Uuid,
}

/// Data for Moved event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourierMovedData {
    pub event_id: EventId,
    pub occurred_on: DateTime<Utc>,
    pub courier_id: Uuid,
    pub from: Location,
    pub to: Location,
}
