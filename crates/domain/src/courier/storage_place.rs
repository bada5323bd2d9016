//! Storage place entity: a named capacity slot holding at most one order.

use common::errs::{Error, Result, ResultExt, UnitResult, guard};
use common::{Entity, impl_entity_identity};
use serde::Serialize;
use uuid::Uuid;

/// A place on the courier (bag, trunk, ...) that holds one order at a time.
#[derive(Debug, Clone, Serialize)]
pub struct StoragePlace {
    id: Uuid,
    name: String,
    total_volume: i32,
    order_id: Option<Uuid>,
}

impl StoragePlace {
    /// Creates a storage place with a fresh identifier.
    ///
    /// `name` must not be blank and `total_volume` must be positive.
    pub fn create(name: &str, total_volume: i32, order_id: Option<Uuid>) -> Result<Self> {
        if let Some(error) = guard::combine([
            guard::against_null_or_empty(name, "name"),
            guard::against_less_or_equal(total_volume, 0, "total_volume"),
        ]) {
            return Err(error);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            total_volume,
            order_id,
        })
    }

    /// Creates a storage place from arguments known to be valid.
    ///
    /// # Panics
    ///
    /// Panics with a domain invariant fault on invalid arguments.
    pub fn must_create(name: &str, total_volume: i32, order_id: Option<Uuid>) -> Self {
        Self::create(name, total_volume, order_id).get_value_or_throw()
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn total_volume(&self) -> i32 {
        self.total_volume
    }

    /// Returns the stored order, if any.
    pub fn order_id(&self) -> Option<Uuid> {
        self.order_id
    }

    pub fn is_occupied(&self) -> bool {
        self.order_id.is_some()
    }

    /// Returns true if the place is empty and large enough for `volume`.
    pub fn can_store(&self, volume: i32) -> bool {
        !self.is_occupied() && volume <= self.total_volume
    }

    /// Puts an order into the place.
    pub fn store(&mut self, order_id: Uuid, volume: i32) -> UnitResult {
        if let Some(error) = guard::against_null_or_empty_uuid(order_id, "order_id") {
            return Err(error);
        }

        if let Some(current) = self.order_id {
            return Err(Error::of(
                "storage.place.already.occupied",
                format!(
                    "Storage place '{}' already contains order {current}",
                    self.name
                ),
            ));
        }

        if volume > self.total_volume {
            return Err(Error::of(
                "storage.place.volume.exceeded",
                format!(
                    "Order volume {volume} exceeds storage place volume {}",
                    self.total_volume
                ),
            ));
        }

        self.order_id = Some(order_id);
        Ok(())
    }

    /// Empties the place.
    pub fn clear(&mut self) -> UnitResult {
        if !self.is_occupied() {
            return Err(Error::of(
                "storage.place.already.empty",
                format!("Storage place '{}' is already empty", self.name),
            ));
        }

        self.order_id = None;
        Ok(())
    }
}

impl Entity for StoragePlace {
    type Id = Uuid;

    fn entity_type() -> &'static str {
        "StoragePlace"
    }

    fn id(&self) -> Option<&Uuid> {
        Some(&self.id)
    }
}

impl_entity_identity!(StoragePlace);

impl std::fmt::Display for StoragePlace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "StoragePlace(id={}, name='{}', total_volume={}, ",
            self.id, self.name, self.total_volume
        )?;
        match self.order_id {
            Some(order_id) => write!(f, "order_id={order_id})"),
            None => write!(f, "empty)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bag() -> StoragePlace {
        StoragePlace::must_create("Рюкзак", 10, None)
    }

    #[test]
    fn test_create_valid() {
        let place = StoragePlace::create("Рюкзак", 10, None).unwrap();
        assert_eq!(place.name(), "Рюкзак");
        assert_eq!(place.total_volume(), 10);
        assert!(!place.id().is_nil());
        assert!(!place.is_occupied());
    }

    #[test]
    fn test_create_with_order() {
        let order_id = Uuid::new_v4();
        let place = StoragePlace::create("Багажник", 100, Some(order_id)).unwrap();
        assert_eq!(place.order_id(), Some(order_id));
        assert!(place.is_occupied());
    }

    #[test]
    fn test_create_invalid() {
        let cases = [
            ("", 10, "value.is.required"),
            ("   ", 10, "value.is.required"),
            ("Рюкзак", 0, "value.must.be.greater.or.equal"),
            ("Рюкзак", -5, "value.must.be.greater.or.equal"),
            ("", 0, "value.is.required"),
        ];

        for (name, volume, code) in cases {
            let error = StoragePlace::create(name, volume, None).unwrap_err();
            assert_eq!(error.code(), code, "name={name:?} volume={volume}");
        }
    }

    #[test]
    fn test_fresh_ids_are_unique() {
        assert_ne!(bag().id(), bag().id());
        assert_ne!(bag(), bag());
    }

    #[test]
    fn test_can_store() {
        let mut place = bag();
        assert!(place.can_store(1));
        assert!(place.can_store(10));
        assert!(!place.can_store(11));

        place.store(Uuid::new_v4(), 5).unwrap();
        assert!(!place.can_store(1));
    }

    #[test]
    fn test_store() {
        let mut place = bag();
        let order_id = Uuid::new_v4();

        place.store(order_id, 10).unwrap();

        assert_eq!(place.order_id(), Some(order_id));
    }

    #[test]
    fn test_store_into_occupied_place_fails() {
        let mut place = bag();
        let first = Uuid::new_v4();
        place.store(first, 5).unwrap();

        let error = place.store(Uuid::new_v4(), 5).unwrap_err();

        assert_eq!(error.code(), "storage.place.already.occupied");
        assert_eq!(place.order_id(), Some(first));
    }

    #[test]
    fn test_store_too_large_fails() {
        let mut place = bag();

        let error = place.store(Uuid::new_v4(), 11).unwrap_err();

        assert_eq!(error.code(), "storage.place.volume.exceeded");
        assert!(!place.is_occupied());
    }

    #[test]
    fn test_store_nil_order_fails() {
        let mut place = bag();

        let error = place.store(Uuid::nil(), 1).unwrap_err();

        assert_eq!(error.code(), "value.is.required");
        assert!(!place.is_occupied());
    }

    #[test]
    fn test_clear() {
        let mut place = bag();
        place.store(Uuid::new_v4(), 3).unwrap();

        place.clear().unwrap();

        assert!(!place.is_occupied());
        assert_eq!(place.order_id(), None);
    }

    #[test]
    fn test_clear_empty_place_fails() {
        let mut place = bag();
        assert_eq!(
            place.clear().unwrap_err().code(),
            "storage.place.already.empty"
        );
    }

    #[test]
    fn test_identity_survives_state_changes() {
        let place = bag();
        let mut changed = place.clone();
        changed.store(Uuid::new_v4(), 1).unwrap();
        assert_eq!(place, changed);
    }

    #[test]
    fn test_display() {
        let place = bag();
        assert!(place.to_string().ends_with("total_volume=10, empty)"));
    }
}
