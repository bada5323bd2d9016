//! Precondition checks that yield an [`Error`] or nothing.
//!
//! Guards are evaluated eagerly and combined with [`combine`], which keeps
//! the first failure in argument order.

use std::fmt::Display;

use uuid::Uuid;

use super::{Error, general_errors};

fn require_param_name(param_name: &str) {
    assert!(
        !param_name.trim().is_empty(),
        "Parameter name must not be empty"
    );
}

/// Returns the first error among `errors`, or `None` if every guard passed.
pub fn combine<I>(errors: I) -> Option<Error>
where
    I: IntoIterator<Item = Option<Error>>,
{
    errors.into_iter().flatten().next()
}

/// Fails with `value.is.required` when `value` is empty or whitespace.
pub fn against_null_or_empty(value: &str, param_name: &str) -> Option<Error> {
    require_param_name(param_name);
    value
        .trim()
        .is_empty()
        .then(|| general_errors::value_is_required(param_name))
}

/// Fails with `value.is.required` when `collection` has no elements.
pub fn against_null_or_empty_collection<T>(collection: &[T], param_name: &str) -> Option<Error> {
    require_param_name(param_name);
    collection
        .is_empty()
        .then(|| general_errors::value_is_required(param_name))
}

/// Fails with `value.is.required` when `value` is the nil UUID.
pub fn against_null_or_empty_uuid(value: Uuid, param_name: &str) -> Option<Error> {
    require_param_name(param_name);
    value
        .is_nil()
        .then(|| general_errors::value_is_required(param_name))
}

/// Fails with `value.must.be.less.than` when `value > max_value`.
pub fn against_greater_than<T>(value: T, max_value: T, param_name: &str) -> Option<Error>
where
    T: PartialOrd + Display,
{
    require_param_name(param_name);
    (value > max_value)
        .then(|| general_errors::value_must_be_less_than(param_name, value, max_value))
}

/// Fails with `value.must.be.less.or.equal` when `value >= max_value`.
pub fn against_greater_or_equal<T>(value: T, max_value: T, param_name: &str) -> Option<Error>
where
    T: PartialOrd + Display,
{
    require_param_name(param_name);
    (value >= max_value)
        .then(|| general_errors::value_must_be_less_or_equal(param_name, value, max_value))
}

/// Fails with `value.must.be.greater.than` when `value < min_value`.
pub fn against_less_than<T>(value: T, min_value: T, param_name: &str) -> Option<Error>
where
    T: PartialOrd + Display,
{
    require_param_name(param_name);
    (value < min_value)
        .then(|| general_errors::value_must_be_greater_than(param_name, value, min_value))
}

/// Fails with `value.must.be.greater.or.equal` when `value <= min_value`.
pub fn against_less_or_equal<T>(value: T, min_value: T, param_name: &str) -> Option<Error>
where
    T: PartialOrd + Display,
{
    require_param_name(param_name);
    (value <= min_value)
        .then(|| general_errors::value_must_be_greater_or_equal(param_name, value, min_value))
}

/// Fails with `value.is.out.of.range` unless `min_value <= value <= max_value`.
pub fn against_out_of_range<T>(
    value: T,
    min_value: T,
    max_value: T,
    param_name: &str,
) -> Option<Error>
where
    T: PartialOrd + Display,
{
    require_param_name(param_name);
    (value < min_value || value > max_value).then(|| {
        general_errors::value_is_out_of_range(param_name, value, min_value, max_value)
    })
}

/// Fails with `collection.is.too.small` / `collection.is.too.large` when the
/// element count falls outside `min_size..=max_size`.
pub fn against_collection_size<T>(
    collection: &[T],
    min_size: usize,
    max_size: usize,
    param_name: &str,
) -> Option<Error> {
    require_param_name(param_name);
    let len = collection.len();
    if len < min_size {
        Some(general_errors::collection_is_too_small(min_size, len))
    } else if len > max_size {
        Some(general_errors::collection_is_too_large(max_size, len))
    } else {
        None
    }
}
