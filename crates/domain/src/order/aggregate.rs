//! Order aggregate implementation.

use common::errs::{Error, Result, ResultExt, UnitResult, guard};
use common::{Aggregate, DomainEvents, Entity, impl_entity_identity};
use serde::Serialize;
use uuid::Uuid;

use super::{OrderEvent, OrderStatus};
use crate::kernel::Location;

/// Order aggregate root.
///
/// Represents a delivery request of a fixed volume to a grid location, from
/// creation through courier assignment to completion.
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    /// Caller-supplied order identifier.
    id: Uuid,

    /// Delivery destination.
    location: Location,

    /// Volume the order occupies in a storage place.
    volume: i32,

    /// Current status of the order.
    status: OrderStatus,

    /// Courier the order was assigned to. Kept after completion.
    courier_id: Option<Uuid>,

    #[serde(skip)]
    events: DomainEvents<OrderEvent>,
}

impl Order {
    /// Creates an order in the `Created` status with no courier.
    pub fn create(id: Uuid, location: Location, volume: i32) -> Result<Self> {
        if let Some(error) = guard::combine([
            guard::against_null_or_empty_uuid(id, "id"),
            guard::against_less_or_equal(volume, 0, "volume"),
        ]) {
            return Err(error);
        }

        Ok(Self {
            id,
            location,
            volume,
            status: OrderStatus::Created,
            courier_id: None,
            events: DomainEvents::new(),
        })
    }

    /// Creates an order from arguments known to be valid.
    ///
    /// # Panics
    ///
    /// Panics with a domain invariant fault on invalid arguments.
    pub fn must_create(id: Uuid, location: Location, volume: i32) -> Self {
        Self::create(id, location, volume).get_value_or_throw()
    }
}

// Query methods
impl Order {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn volume(&self) -> i32 {
        self.volume
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn courier_id(&self) -> Option<Uuid> {
        self.courier_id
    }
}

// Command methods
impl Order {
    /// Assigns the order to a courier.
    ///
    /// Only an order in the `Created` status can be assigned.
    pub fn assign(&mut self, courier_id: Uuid) -> UnitResult {
        if let Some(error) = guard::against_null_or_empty_uuid(courier_id, "courier_id") {
            return Err(error);
        }

        if self.status != OrderStatus::Created {
            return Err(Error::of(
                "order.already.assigned",
                format!("Order {} is already in status {}", self.id, self.status),
            ));
        }

        self.transition_to(OrderStatus::Assigned)?;
        self.courier_id = Some(courier_id);

        self.raise_domain_event(OrderEvent::assigned(self.id, courier_id));
        Ok(())
    }

    /// Marks an assigned order as delivered.
    pub fn complete(&mut self) -> UnitResult {
        if self.status != OrderStatus::Assigned {
            return Err(Error::of(
                "order.not.assigned",
                format!(
                    "Cannot complete order {} in status {}. Order must be assigned first.",
                    self.id, self.status
                ),
            ));
        }

        self.transition_to(OrderStatus::Completed)?;

        self.raise_domain_event(OrderEvent::completed(self.id, self.courier_id));
        Ok(())
    }

    fn transition_to(&mut self, target: OrderStatus) -> UnitResult {
        if !self.status.can_transition_to(target) {
            return Err(Error::of(
                "order.invalid.status.transition",
                format!("Cannot transition from {} to {target}", self.status),
            ));
        }

        self.status = target;
        Ok(())
    }
}

impl Entity for Order {
    type Id = Uuid;

    fn entity_type() -> &'static str {
        "Order"
    }

    fn id(&self) -> Option<&Uuid> {
        Some(&self.id)
    }
}

impl Aggregate for Order {
    type Event = OrderEvent;

    fn aggregate_type() -> &'static str {
        "Order"
    }

    fn events(&self) -> &DomainEvents<OrderEvent> {
        &self.events
    }

    fn events_mut(&mut self) -> &mut DomainEvents<OrderEvent> {
        &mut self.events
    }
}

impl_entity_identity!(Order);

impl std::fmt::Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Order(id={}, location={}, volume={}, status={}, ",
            self.id, self.location, self.volume, self.status
        )?;
        match self.courier_id {
            Some(courier_id) => write!(f, "courier_id={courier_id})"),
            None => write!(f, "unassigned)"),
        }
    }
}
