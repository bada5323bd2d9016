//! Courier aggregate and its storage places.

mod aggregate;
mod events;
mod storage_place;

pub use aggregate::Courier;
pub use events::{CourierEvent, CourierMovedData, CourierOrderCompletedData, OrderTakenData};
pub use storage_place::StoragePlace;
