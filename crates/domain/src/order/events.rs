//! Order domain events.

use chrono::{DateTime, Utc};
use common::{DomainEvent, EventId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Events raised by an order aggregate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum OrderEvent {
    /// A courier was assigned to the order.
    Assigned(OrderAssignedData),

    /// The order was delivered.
    Completed(OrderCompletedData),
}

impl OrderEvent {
    pub(crate) fn assigned(order_id: Uuid, courier_id: Uuid) -> Self {
        OrderEvent::Assigned(OrderAssignedData {
            event_id: EventId::new(),
            occurred_on: Utc::now(),
            order_id,
            courier_id,
        })
    }

    pub(crate) fn completed(order_id: Uuid, courier_id: Option<Uuid>) -> Self {
        OrderEvent::Completed(OrderCompletedData {
            event_id: EventId::new(),
            occurred_on: Utc::now(),
            order_id,
            courier_id,
        })
    }
}

impl DomainEvent for OrderEvent {
    fn event_type(&self) -> &'static str {
        match self {
            OrderEvent::Assigned(_) => "OrderAssigned",
            OrderEvent::Completed(_) => "OrderCompleted",
        }
    }

    fn event_id(&self) -> EventId {
        match self {
            OrderEvent::Assigned(data) => data.event_id,
            OrderEvent::Completed(data) => data.event_id,
        }
    }

    fn occurred_on(&self) -> DateTime<Utc> {
        match self {
            OrderEvent::Assigned(data) => data.occurred_on,
            OrderEvent::Completed(data) => data.occurred_on,
        }
    }
}

/// Data for Assigned event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderAssignedData {
    pub event_id: EventId,
    pub occurred_on: DateTime<Utc>,
    pub order_id: Uuid,
    pub courier_id: Uuid,
}

/// Data for Completed event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCompletedData {
    pub event_id: EventId,
    pub occurred_on: DateTime<Utc>,
    pub order_id: Uuid,

    /// The courier that delivered the order.
    pub courier_id: Option<Uuid>,
}
