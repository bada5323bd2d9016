//! Persistence ports.
//!
//! The domain never performs I/O; adapters implementing these traits load and
//! save whole aggregates by identifier.

use async_trait::async_trait;
use common::errs::{Result, UnitResult};
use uuid::Uuid;

use crate::courier::Courier;
use crate::order::Order;

/// Storage for courier aggregates.
#[async_trait]
pub trait CourierRepository: Send + Sync {
    /// Stores a new courier. Fails with `value.is.invalid` if the id is taken.
    async fn add(&self, courier: &Courier) -> UnitResult;

    /// Replaces a stored courier. Fails with `record.not.found` if absent.
    async fn update(&self, courier: &Courier) -> UnitResult;

    /// Loads a courier. Fails with `record.not.found` if absent.
    async fn get(&self, courier_id: Uuid) -> Result<Courier>;

    /// Returns every courier with all storage places empty.
    async fn get_all_free(&self) -> Result<Vec<Courier>>;
}

/// Storage for order aggregates.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Stores a new order. Fails with `value.is.invalid` if the id is taken.
    async fn add(&self, order: &Order) -> UnitResult;

    /// Replaces a stored order. Fails with `record.not.found` if absent.
    async fn update(&self, order: &Order) -> UnitResult;

    /// Loads an order. Fails with `record.not.found` if absent.
    async fn get(&self, order_id: Uuid) -> Result<Order>;

    /// Returns any order still waiting for a courier.
    async fn get_first_in_created_status(&self) -> Result<Option<Order>>;

    /// Returns every order currently assigned to a courier.
    async fn get_all_in_assigned_status(&self) -> Result<Vec<Order>>;
}
