//! Shared kernel value objects.

use common::errs::{Result, ResultExt, guard};
use common::{ValueObject, impl_value_object};
use serde::{Deserialize, Serialize};

/// A cell on the delivery grid.
///
/// Both coordinates lie in `[MIN_COORDINATE, MAX_COORDINATE]`; the only way
/// to obtain a location is through [`Location::create`], which enforces it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "RawLocation")]
pub struct Location {
    x: i32,
    y: i32,
}

impl Location {
    /// Smallest valid coordinate on either axis.
    pub const MIN_COORDINATE: i32 = 1;

    /// Largest valid coordinate on either axis.
    pub const MAX_COORDINATE: i32 = 10;

    /// Creates a location, failing with `value.is.out.of.range` for the first
    /// coordinate outside the grid.
    pub fn create(x: i32, y: i32) -> Result<Self> {
        if let Some(error) = guard::combine([
            guard::against_out_of_range(x, Self::MIN_COORDINATE, Self::MAX_COORDINATE, "x"),
            guard::against_out_of_range(y, Self::MIN_COORDINATE, Self::MAX_COORDINATE, "y"),
        ]) {
            return Err(error);
        }

        Ok(Self { x, y })
    }

    /// Creates a location that is known to be valid.
    ///
    /// # Panics
    ///
    /// Panics with a domain invariant fault if either coordinate is off the grid.
    pub fn must_create(x: i32, y: i32) -> Self {
        Self::create(x, y).get_value_or_throw()
    }

    /// The top-left corner of the grid.
    pub fn min() -> Self {
        Self {
            x: Self::MIN_COORDINATE,
            y: Self::MIN_COORDINATE,
        }
    }

    /// The bottom-right corner of the grid.
    pub fn max() -> Self {
        Self {
            x: Self::MAX_COORDINATE,
            y: Self::MAX_COORDINATE,
        }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    /// Manhattan distance to `other`.
    pub fn distance_to(&self, other: &Location) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

impl ValueObject for Location {
    type Components = (i32, i32);

    fn equality_components(&self) -> Self::Components {
        (self.x, self.y)
    }
}

impl_value_object!(Location);

#[derive(Deserialize)]
struct RawLocation {
    x: i32,
    y: i32,
}

impl TryFrom<RawLocation> for Location {
    type Error = common::Error;

    fn try_from(raw: RawLocation) -> Result<Self> {
        Self::create(raw.x, raw.y)
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Location(x={}, y={})", self.x, self.y)
    }
}
