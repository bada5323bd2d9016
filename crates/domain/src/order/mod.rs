//! Order aggregate and related types.

mod aggregate;
mod events;
mod status;

pub use aggregate::Order;
pub use events::{OrderAssignedData, OrderCompletedData, OrderEvent};
pub use status::OrderStatus;
