//! Domain-driven design building blocks.

pub mod aggregate;
pub mod entity;
pub mod events;
pub mod value_object;

pub use aggregate::{Aggregate, DomainEvents};
pub use entity::{Entity, Identifier};
pub use events::{DomainEvent, DomainEventPublisher, EventEnvelope, EventId};
pub use value_object::ValueObject;
