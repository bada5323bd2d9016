//! In-memory repository adapters.
//!
//! Stored aggregates are snapshots: raised events are not persisted, so a
//! loaded aggregate always starts with an empty event buffer.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use common::Aggregate;
use common::errs::{Result, UnitResult, general_errors};
use domain::{Courier, CourierRepository, Order, OrderRepository, OrderStatus};
use tokio::sync::RwLock;
use uuid::Uuid;

fn snapshot<A: Aggregate + Clone>(aggregate: &A) -> A {
    let mut stored = aggregate.clone();
    stored.clear_domain_events();
    stored
}

/// Courier repository backed by a shared map. Clones share state.
#[derive(Clone, Default)]
pub struct InMemoryCourierRepository {
    couriers: Arc<RwLock<HashMap<Uuid, Courier>>>,
}

impl InMemoryCourierRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored couriers.
    pub async fn count(&self) -> usize {
        self.couriers.read().await.len()
    }
}

#[async_trait]
impl CourierRepository for InMemoryCourierRepository {
    #[tracing::instrument(skip(self, courier), fields(courier_id = %courier.id()))]
    async fn add(&self, courier: &Courier) -> UnitResult {
        let mut couriers = self.couriers.write().await;
        if couriers.contains_key(&courier.id()) {
            tracing::warn!("courier already stored");
            return Err(general_errors::value_is_invalid("courier_id", courier.id()));
        }

        couriers.insert(courier.id(), snapshot(courier));
        metrics::counter!("repository_writes_total", "aggregate" => "Courier").increment(1);
        tracing::debug!("courier added");
        Ok(())
    }

    #[tracing::instrument(skip(self, courier), fields(courier_id = %courier.id()))]
    async fn update(&self, courier: &Courier) -> UnitResult {
        let mut couriers = self.couriers.write().await;
        match couriers.get_mut(&courier.id()) {
            Some(stored) => {
                *stored = snapshot(courier);
                metrics::counter!("repository_writes_total", "aggregate" => "Courier")
                    .increment(1);
                Ok(())
            }
            None => Err(general_errors::not_found("courier", courier.id())),
        }
    }

    async fn get(&self, courier_id: Uuid) -> Result<Courier> {
        self.couriers
            .read()
            .await
            .get(&courier_id)
            .cloned()
            .ok_or_else(|| general_errors::not_found("courier", courier_id))
    }

    async fn get_all_free(&self) -> Result<Vec<Courier>> {
        let couriers = self.couriers.read().await;
        Ok(couriers.values().filter(|c| c.is_free()).cloned().collect())
    }
}

/// Order repository backed by a shared map. Clones share state.
#[derive(Clone, Default)]
pub struct InMemoryOrderRepository {
    orders: Arc<RwLock<HashMap<Uuid, Order>>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored orders.
    pub async fn count(&self) -> usize {
        self.orders.read().await.len()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    #[tracing::instrument(skip(self, order), fields(order_id = %order.id()))]
    async fn add(&self, order: &Order) -> UnitResult {
        let mut orders = self.orders.write().await;
        if orders.contains_key(&order.id()) {
            tracing::warn!("order already stored");
            return Err(general_errors::value_is_invalid("order_id", order.id()));
        }

        orders.insert(order.id(), snapshot(order));
        metrics::counter!("repository_writes_total", "aggregate" => "Order").increment(1);
        tracing::debug!("order added");
        Ok(())
    }

    #[tracing::instrument(skip(self, order), fields(order_id = %order.id(), status = %order.status()))]
    async fn update(&self, order: &Order) -> UnitResult {
        let mut orders = self.orders.write().await;
        match orders.get_mut(&order.id()) {
            Some(stored) => {
                *stored = snapshot(order);
                metrics::counter!("repository_writes_total", "aggregate" => "Order").increment(1);
                Ok(())
            }
            None => Err(general_errors::not_found("order", order.id())),
        }
    }

    async fn get(&self, order_id: Uuid) -> Result<Order> {
        self.orders
            .read()
            .await
            .get(&order_id)
            .cloned()
            .ok_or_else(|| general_errors::not_found("order", order_id))
    }

    async fn get_first_in_created_status(&self) -> Result<Option<Order>> {
        let orders = self.orders.read().await;
        Ok(orders
            .values()
            .find(|o| o.status() == OrderStatus::Created)
            .cloned())
    }

    async fn get_all_in_assigned_status(&self) -> Result<Vec<Order>> {
        let orders = self.orders.read().await;
        Ok(orders
            .values()
            .filter(|o| o.status() == OrderStatus::Assigned)
            .cloned()
            .collect())
    }
}
