//! Catalog of general-purpose error constructors.
//!
//! Every constructor that takes a parameter name panics when the name is
//! blank: that is a bug at the call site, not a domain failure.

use std::fmt::Display;

use super::Error;

fn require_name(name: &str) {
    assert!(!name.trim().is_empty(), "Name must not be null or empty");
}

/// `record.not.found`
pub fn not_found(name: &str, id: impl Display) -> Error {
    require_name(name);
    Error::of(
        "record.not.found",
        format!("Record not found. Name: {name}, id: {id}"),
    )
}

/// `value.is.invalid`
pub fn value_is_invalid(name: &str, value: impl Display) -> Error {
    require_name(name);
    Error::of(
        "value.is.invalid",
        format!("Value '{value}' is invalid for {name}"),
    )
}

/// `value.is.required`
pub fn value_is_required(name: &str) -> Error {
    require_name(name);
    Error::of("value.is.required", format!("Value is required for {name}"))
}

/// `invalid.string.length`
pub fn invalid_length(name: &str) -> Error {
    require_name(name);
    Error::of("invalid.string.length", format!("Invalid {name} length"))
}

/// `collection.is.too.small`
pub fn collection_is_too_small(min_size: usize, current: usize) -> Error {
    Error::of(
        "collection.is.too.small",
        format!(
            "The collection must contain {min_size} items or more. It contains {current} items."
        ),
    )
}

/// `collection.is.too.large`
pub fn collection_is_too_large(max_size: usize, current: usize) -> Error {
    Error::of(
        "collection.is.too.large",
        format!(
            "The collection must contain {max_size} items or fewer. It contains {current} items."
        ),
    )
}

/// `value.is.out.of.range`
pub fn value_is_out_of_range(
    name: &str,
    value: impl Display,
    min_value: impl Display,
    max_value: impl Display,
) -> Error {
    require_name(name);
    Error::of(
        "value.is.out.of.range",
        format!(
            "Value {value} for {name} is out of range. Min value is {min_value}, max value is {max_value}."
        ),
    )
}

/// `value.must.be.greater.than`
pub fn value_must_be_greater_than(name: &str, value: impl Display, min_value: impl Display) -> Error {
    require_name(name);
    Error::of(
        "value.must.be.greater.than",
        format!("The value of {name} ({value}) must be greater than {min_value}."),
    )
}

/// `value.must.be.greater.or.equal`
pub fn value_must_be_greater_or_equal(
    name: &str,
    value: impl Display,
    min_value: impl Display,
) -> Error {
    require_name(name);
    Error::of(
        "value.must.be.greater.or.equal",
        format!("The value of {name} ({value}) must be greater than or equal to {min_value}."),
    )
}

/// `value.must.be.less.than`
pub fn value_must_be_less_than(name: &str, value: impl Display, max_value: impl Display) -> Error {
    require_name(name);
    Error::of(
        "value.must.be.less.than",
        format!("The value of {name} ({value}) must be less than {max_value}."),
    )
}

/// `value.must.be.less.or.equal`
pub fn value_must_be_less_or_equal(
    name: &str,
    value: impl Display,
    max_value: impl Display,
) -> Error {
    require_name(name);
    Error::of(
        "value.must.be.less.or.equal",
        format!("The value of {name} ({value}) must be less than or equal to {max_value}."),
    )
}
