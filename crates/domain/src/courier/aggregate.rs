//! Courier aggregate implementation.

use common::errs::{Error, Result, ResultExt, UnitResult, guard};
use common::{Aggregate, DomainEvents, Entity, impl_entity_identity};
use serde::Serialize;
use uuid::Uuid;

use super::{CourierEvent, StoragePlace};
use crate::kernel::Location;

/// Courier aggregate root.
///
/// Owns its storage places (never fewer than one), moves across the grid at
/// a fixed speed and carries orders in its storage.
#[derive(Debug, Clone, Serialize)]
pub struct Courier {
    id: Uuid,
    name: String,
    speed: i32,
    location: Location,

    /// Insertion order is the tie-break for storage selection.
    storage_places: Vec<StoragePlace>,

    #[serde(skip)]
    events: DomainEvents<CourierEvent>,
}

impl Courier {
    /// Name of the storage place every courier starts with.
    pub const DEFAULT_STORAGE_NAME: &'static str = "Сумка";

    /// Capacity of the storage place every courier starts with.
    pub const DEFAULT_STORAGE_VOLUME: i32 = 10;

    /// Creates a courier at `location` with a single default storage place.
    pub fn create(name: &str, speed: i32, location: Location) -> Result<Self> {
        if let Some(error) = guard::combine([
            guard::against_null_or_empty(name, "name"),
            guard::against_less_or_equal(speed, 0, "speed"),
        ]) {
            return Err(error);
        }

        let default_storage =
            StoragePlace::create(Self::DEFAULT_STORAGE_NAME, Self::DEFAULT_STORAGE_VOLUME, None)?;

        Ok(Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            speed,
            location,
            storage_places: vec![default_storage],
            events: DomainEvents::new(),
        })
    }

    /// Creates a courier from arguments known to be valid.
    ///
    /// # Panics
    ///
    /// Panics with a domain invariant fault on invalid arguments.
    pub fn must_create(name: &str, speed: i32, location: Location) -> Self {
        Self::create(name, speed, location).get_value_or_throw()
    }
}

// Query methods
impl Courier {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn speed(&self) -> i32 {
        self.speed
    }

    pub fn location(&self) -> Location {
        self.location
    }

    /// Returns the storage places in the order they were added.
    pub fn storage_places(&self) -> &[StoragePlace] {
        &self.storage_places
    }

    /// Returns the number of storage places currently holding an order.
    pub fn occupied_count(&self) -> usize {
        self.storage_places
            .iter()
            .filter(|place| place.is_occupied())
            .count()
    }

    /// Returns true if no storage place holds an order.
    pub fn is_free(&self) -> bool {
        self.occupied_count() == 0
    }

    /// Returns true if some storage place could accept `volume` right now.
    pub fn can_take_order(&self, volume: i32) -> bool {
        self.storage_places
            .iter()
            .any(|place| place.can_store(volume))
    }

    /// Number of moves needed to reach `target`, rounding up.
    pub fn calculate_time_to_location(&self, target: &Location) -> i32 {
        let distance = self.location.distance_to(target);
        distance / self.speed + i32::from(distance % self.speed != 0)
    }
}

// Command methods
impl Courier {
    /// Adds a storage place after the existing ones.
    pub fn add_storage_place(&mut self, name: &str, volume: i32) -> UnitResult {
        let place = StoragePlace::create(name, volume, None)?;
        self.storage_places.push(place);
        Ok(())
    }

    /// Puts an order into the smallest free storage place that fits it.
    ///
    /// Among equally small places the one added first wins, which keeps the
    /// larger places free for larger orders.
    pub fn take_order(&mut self, order_id: Uuid, volume: i32) -> UnitResult {
        if let Some(error) = guard::combine([
            guard::against_null_or_empty_uuid(order_id, "order_id"),
            guard::against_less_or_equal(volume, 0, "order_volume"),
        ]) {
            return Err(error);
        }

        let Some(index) = self.best_fit(volume) else {
            return Err(Error::of(
                "courier.no.available.storage",
                format!(
                    "Courier {} has no available storage for order volume {volume}",
                    self.name
                ),
            ));
        };

        let place = &mut self.storage_places[index];
        place.store(order_id, volume)?;
        let storage_place_id = place.id();

        self.raise_domain_event(CourierEvent::order_taken(
            self.id,
            order_id,
            storage_place_id,
        ));
        Ok(())
    }

    /// Releases the storage place holding `order_id`.
    pub fn complete_order(&mut self, order_id: Uuid) -> UnitResult {
        if let Some(error) = guard::against_null_or_empty_uuid(order_id, "order_id") {
            return Err(error);
        }

        let Some(place) = self
            .storage_places
            .iter_mut()
            .find(|place| place.order_id() == Some(order_id))
        else {
            return Err(Error::of(
                "courier.order.not.found",
                format!(
                    "Order {order_id} not found in courier {} storage",
                    self.name
                ),
            ));
        };

        place.clear()?;

        self.raise_domain_event(CourierEvent::order_completed(self.id, order_id));
        Ok(())
    }

    /// Moves one step towards `target`.
    ///
    /// A step covers at most `speed` cells: the X axis is served first and the
    /// Y axis gets whatever budget remains.
    pub fn move_towards(&mut self, target: &Location) -> UnitResult {
        let dx = target.x() - self.location.x();
        let dy = target.y() - self.location.y();

        let move_x = dx.clamp(-self.speed, self.speed);
        let remaining = self.speed - move_x.abs();
        let move_y = dy.clamp(-remaining, remaining);

        let from = self.location;
        let to = Location::create(from.x() + move_x, from.y() + move_y)?;
        self.location = to;

        if from != to {
            self.raise_domain_event(CourierEvent::moved(self.id, from, to));
        }
        Ok(())
    }

    fn best_fit(&self, volume: i32) -> Option<usize> {
        self.storage_places
            .iter()
            .enumerate()
            .filter(|(_, place)| place.can_store(volume))
            .min_by_key(|(_, place)| place.total_volume())
            .map(|(index, _)| index)
    }
}

impl Entity for Courier {
    type Id = Uuid;

    fn entity_type() -> &'static str {
        "Courier"
    }

    fn id(&self) -> Option<&Uuid> {
        Some(&self.id)
    }
}

impl Aggregate for Courier {
    type Event = CourierEvent;

    fn aggregate_type() -> &'static str {
        "Courier"
    }

    fn events(&self) -> &DomainEvents<CourierEvent> {
        &self.events
    }

    fn events_mut(&mut self) -> &mut DomainEvents<CourierEvent> {
        &mut self.events
    }
}

impl_entity_identity!(Courier);

impl std::fmt::Display for Courier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Courier(id={}, name='{}', speed={}, location={}, storage_places={}, occupied={})",
            self.id,
            self.name,
            self.speed,
            self.location,
            self.storage_places.len(),
            self.occupied_count()
        )
    }
}
