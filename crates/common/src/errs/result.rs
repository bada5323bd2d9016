//! Result kernel.
//!
//! Expected failures travel as values: [`Result`] carries either a value or
//! an [`Error`], [`UnitResult`] carries success or an [`Error`]. `map`,
//! `and_then` and `map_err` come from the standard library; the extension
//! traits add the inspection helpers and the single sanctioned bridge to an
//! unrecoverable fault.

use super::{DomainInvariantError, Error};

/// Value-or-error outcome of a domain operation.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Success-or-error outcome of a domain operation that yields no value.
pub type UnitResult<E = Error> = std::result::Result<(), E>;

/// Inspection helpers for [`Result`].
pub trait ResultExt<T, E> {
    /// Returns true for a success.
    fn is_success(&self) -> bool;

    /// Returns true for a failure.
    fn is_failure(&self) -> bool;

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics on a failure; callers must check first.
    fn get_value(self) -> T;

    /// Returns the error.
    ///
    /// # Panics
    ///
    /// Panics on a success; callers must check first.
    fn get_error(self) -> E;

    /// Returns the success value or raises the error as a
    /// [`DomainInvariantError`].
    ///
    /// # Panics
    ///
    /// Panics on a failure.
    fn get_value_or_throw(self) -> T
    where
        E: Into<Error>;

    /// Runs `handler` on the value of a success.
    fn on_success(self, handler: impl FnOnce(&T)) -> Self;

    /// Runs `handler` on the error of a failure.
    fn on_failure(self, handler: impl FnOnce(&E)) -> Self;

    /// Collapses both channels into a single value.
    fn fold<U>(self, on_success: impl FnOnce(T) -> U, on_failure: impl FnOnce(E) -> U) -> U;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    fn is_success(&self) -> bool {
        self.is_ok()
    }

    fn is_failure(&self) -> bool {
        self.is_err()
    }

    fn get_value(self) -> T {
        match self {
            Ok(value) => value,
            Err(_) => panic!("Cannot get value from failure"),
        }
    }

    fn get_error(self) -> E {
        match self {
            Ok(_) => panic!("Cannot get error from success"),
            Err(error) => error,
        }
    }

    fn get_value_or_throw(self) -> T
    where
        E: Into<Error>,
    {
        match self {
            Ok(value) => value,
            Err(error) => DomainInvariantError::new(error.into()).raise(),
        }
    }

    fn on_success(self, handler: impl FnOnce(&T)) -> Self {
        if let Ok(value) = &self {
            handler(value);
        }
        self
    }

    fn on_failure(self, handler: impl FnOnce(&E)) -> Self {
        if let Err(error) = &self {
            handler(error);
        }
        self
    }

    fn fold<U>(self, on_success: impl FnOnce(T) -> U, on_failure: impl FnOnce(E) -> U) -> U {
        match self {
            Ok(value) => on_success(value),
            Err(error) => on_failure(error),
        }
    }
}

/// Helpers specific to [`UnitResult`].
pub trait UnitResultExt<E>: Sized {
    /// Succeeds only if both sides succeed; otherwise returns the first
    /// failure, checking `self` before `other`.
    fn merge(self, other: Self) -> Self;

    /// Raises the error as a [`DomainInvariantError`].
    ///
    /// # Panics
    ///
    /// Panics on a failure.
    fn get_or_else_throw(self)
    where
        E: Into<Error>;

    /// Converts into a value-less [`Result`].
    fn to_result(self) -> Result<(), E>;

    /// Converts from a value-less [`Result`].
    fn from_result(result: Result<(), E>) -> Self;
}

impl<E> UnitResultExt<E> for UnitResult<E> {
    fn merge(self, other: Self) -> Self {
        self.and(other)
    }

    fn get_or_else_throw(self)
    where
        E: Into<Error>,
    {
        if let Err(error) = self {
            DomainInvariantError::new(error.into()).raise();
        }
    }

    fn to_result(self) -> Result<(), E> {
        self
    }

    fn from_result(result: Result<(), E>) -> Self {
        result
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn failure(code: &str) -> Error {
        Error::of(code, "failed")
    }

    #[test]
    fn test_success_and_failure_flags() {
        let ok: Result<i32> = Ok(1);
        let err: Result<i32> = Err(failure("e"));
        assert!(ok.is_success() && !ok.is_failure());
        assert!(err.is_failure() && !err.is_success());
    }

    #[test]
    fn test_get_value_and_error() {
        let ok: Result<i32> = Ok(7);
        assert_eq!(ok.get_value(), 7);

        let err: Result<i32> = Err(failure("e"));
        assert_eq!(err.get_error().code(), "e");
    }

    #[test]
    #[should_panic(expected = "Cannot get value from failure")]
    fn test_get_value_on_failure_panics() {
        let err: Result<i32> = Err(failure("e"));
        err.get_value();
    }

    #[test]
    #[should_panic(expected = "Cannot get error from success")]
    fn test_get_error_on_success_panics() {
        let ok: Result<i32> = Ok(1);
        ok.get_error();
    }

    #[test]
    #[should_panic(expected = "Domain invariant violated")]
    fn test_get_value_or_throw_panics_on_failure() {
        let err: Result<i32> = Err(failure("e"));
        err.get_value_or_throw();
    }

    #[test]
    fn test_mapping_keeps_other_channel() {
        let ok: Result<i32> = Ok(2);
        assert_eq!(ok.map(|v| v * 10).get_value(), 20);

        let err: Result<i32> = Err(failure("e"));
        assert_eq!(err.map(|v| v * 10).get_error().code(), "e");

        let err: Result<i32> = Err(failure("e"));
        let mapped = err.map_err(|_| failure("mapped"));
        assert_eq!(mapped.get_error().code(), "mapped");

        let ok: Result<i32> = Ok(2);
        let chained: Result<i32> = ok.and_then(|_| Err(failure("chained")));
        assert_eq!(chained.get_error().code(), "chained");
    }

    #[test]
    fn test_callbacks_run_on_matching_channel() {
        let seen_value = Cell::new(0);
        let seen_error = Cell::new(false);

        let ok: Result<i32> = Ok(3);
        let _ = ok
            .on_success(|v| seen_value.set(*v))
            .on_failure(|_| seen_error.set(true));
        assert_eq!(seen_value.get(), 3);
        assert!(!seen_error.get());

        let err: Result<i32> = Err(failure("e"));
        let _ = err
            .on_success(|_| seen_value.set(-1))
            .on_failure(|_| seen_error.set(true));
        assert_eq!(seen_value.get(), 3);
        assert!(seen_error.get());
    }

    #[test]
    fn test_fold() {
        let ok: Result<i32> = Ok(4);
        assert_eq!(ok.fold(|v| v.to_string(), |e| e.code().to_string()), "4");

        let err: Result<i32> = Err(failure("e"));
        assert_eq!(err.fold(|v| v.to_string(), |e| e.code().to_string()), "e");
    }

    #[test]
    fn test_merge_is_left_biased() {
        let ok: UnitResult = Ok(());
        assert!(ok.merge(Ok(())).is_success());

        let left: UnitResult = Err(failure("left"));
        let right: UnitResult = Err(failure("right"));
        assert_eq!(left.merge(right).get_error().code(), "left");

        let ok: UnitResult = Ok(());
        assert_eq!(ok.merge(Err(failure("right"))).get_error().code(), "right");
    }

    #[test]
    fn test_unit_result_conversions() {
        let err: UnitResult = Err(failure("e"));
        let as_result = err.to_result();
        let restored = <UnitResult as UnitResultExt<Error>>::from_result(as_result);
        assert_eq!(restored.get_error().code(), "e");
    }

    #[test]
    fn test_helpers_work_with_any_error_type() {
        let parsed: Result<i32, std::num::ParseIntError> = "x".parse::<i32>();
        assert!(parsed.is_failure());

        let seen = Cell::new(false);
        let folded = parsed
            .on_failure(|_| seen.set(true))
            .fold(|v| v, |_| -1);
        assert_eq!(folded, -1);
        assert!(seen.get());

        let left: UnitResult<&str> = Err("left");
        assert_eq!(left.merge(Err("right")).get_error(), "left");
    }

    #[test]
    #[should_panic(expected = "Domain invariant violated")]
    fn test_get_or_else_throw_panics() {
        let err: UnitResult = Err(failure("e"));
        err.get_or_else_throw();
    }
}
