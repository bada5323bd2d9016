//! Delivery domain model.
//!
//! This crate provides:
//! - `Location`, the bounded grid coordinate shared by every aggregate
//! - `Courier` with its owned `StoragePlace`s and best-fit order allocation
//! - `Order` with its `Created -> Assigned -> Completed` state machine
//! - Repository ports implemented by the infrastructure layer
//!
//! Every operation reports expected failures as a `common::Error` value and
//! leaves the aggregate untouched when it fails.

pub mod courier;
pub mod kernel;
pub mod order;
pub mod ports;

pub use courier::{Courier, CourierEvent, StoragePlace};
pub use kernel::Location;
pub use order::{Order, OrderEvent, OrderStatus};
pub use ports::{CourierRepository, OrderRepository};
