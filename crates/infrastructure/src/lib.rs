//! Adapters that connect the delivery domain to the outside world.

pub mod config;
pub mod error;
pub mod memory;
pub mod publisher;
pub mod telemetry;

pub use config::Settings;
pub use error::{InfrastructureError, Result};
pub use memory::{InMemoryCourierRepository, InMemoryOrderRepository};
pub use publisher::{InMemoryEventPublisher, publish_aggregate_events};
pub use telemetry::init_tracing;
