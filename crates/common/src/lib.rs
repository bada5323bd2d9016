//! Shared building blocks for the delivery domain.
//!
//! This crate provides:
//! - `errs`: the typed `Error`, the `Result`/`UnitResult` kernel and guards
//! - `ddd`: entity, value object and aggregate abstractions plus domain events

pub mod ddd;
pub mod errs;

pub use ddd::{
    Aggregate, DomainEvent, DomainEventPublisher, DomainEvents, Entity, EventEnvelope, EventId,
    Identifier, ValueObject,
};
pub use errs::{DomainInvariantError, Error, ErrorParseError, Result, ResultExt, UnitResult, UnitResultExt};
