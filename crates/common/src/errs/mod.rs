//! Typed errors, the result kernel and argument guards.

mod error;
pub mod general_errors;
pub mod guard;
mod result;

pub use error::{DomainInvariantError, Error, ErrorParseError};
pub use result::{Result, ResultExt, UnitResult, UnitResultExt};
