//! The typed domain error and the invariant fault it can be raised as.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

use super::general_errors;

/// Message some HTTP frameworks send in place of a serialized error when the
/// request body is missing.
const EMPTY_BODY_MESSAGE: &str = "A non-empty request body is required.";

/// An expected domain failure: a stable machine-readable code and a
/// human-readable message.
///
/// Both fields are non-empty. The code catalog (e.g. `value.is.required`,
/// `courier.no.available.storage`) is consumed verbatim by transport layers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ErrorRepr")]
pub struct Error {
    code: String,
    message: String,
}

impl Error {
    /// Separator used by [`Error::serialize`].
    pub const SEPARATOR: &'static str = "||";

    /// Creates an error.
    ///
    /// # Panics
    ///
    /// Panics if `code` or `message` is empty.
    pub fn of(code: impl Into<String>, message: impl Into<String>) -> Self {
        let code = code.into();
        let message = message.into();
        assert!(!code.is_empty(), "Code must not be empty");
        assert!(!message.is_empty(), "Message must not be empty");
        Self { code, message }
    }

    /// Returns the error code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Renders the error as `"<code>||<message>"`.
    pub fn serialize(&self) -> String {
        format!("{}{}{}", self.code, Self::SEPARATOR, self.message)
    }

    /// Parses an error previously rendered by [`Error::serialize`].
    ///
    /// Anything after the second separator is dropped.
    pub fn deserialize(serialized: &str) -> Result<Self, ErrorParseError> {
        if serialized == EMPTY_BODY_MESSAGE {
            return Ok(general_errors::value_is_required("serialized"));
        }

        let mut parts = serialized.split(Self::SEPARATOR);
        match (parts.next(), parts.next()) {
            (Some(code), Some(message)) if !code.is_empty() && !message.is_empty() => {
                Ok(Self::of(code, message))
            }
            _ => Err(ErrorParseError {
                input: serialized.to_string(),
            }),
        }
    }

    /// Raises `error` as a [`DomainInvariantError`] when one is present.
    ///
    /// # Panics
    ///
    /// Panics if `error` is `Some`.
    pub fn throw_if(error: Option<Error>) {
        if let Some(error) = error {
            DomainInvariantError::new(error).raise();
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error{{code='{}', message='{}'}}", self.code, self.message)
    }
}

impl std::error::Error for Error {}

impl FromStr for Error {
    type Err = ErrorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::deserialize(s)
    }
}

#[derive(Deserialize)]
struct ErrorRepr {
    code: String,
    message: String,
}

impl TryFrom<ErrorRepr> for Error {
    type Error = String;

    fn try_from(repr: ErrorRepr) -> Result<Self, Self::Error> {
        if repr.code.is_empty() || repr.message.is_empty() {
            return Err("error code and message must not be empty".to_string());
        }
        Ok(Self {
            code: repr.code,
            message: repr.message,
        })
    }
}

/// Returned when a serialized error cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
#[error("Invalid error serialization: '{input}'")]
pub struct ErrorParseError {
    /// The rejected input.
    pub input: String,
}

/// A domain error promoted to an unrecoverable fault.
///
/// Only the `must_create`/`get_value_or_throw` family produces it, at call
/// sites that treat the failure as unreachable.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
#[error("Domain invariant violated: {}", .error.message())]
pub struct DomainInvariantError {
    /// The error that was raised.
    pub error: Error,
}

impl DomainInvariantError {
    /// Wraps an error.
    pub fn new(error: Error) -> Self {
        Self { error }
    }

    /// Panics with this fault as the message.
    pub fn raise(self) -> ! {
        panic!("{self} [{}]", self.error.code())
    }
}

impl From<Error> for DomainInvariantError {
    fn from(error: Error) -> Self {
        Self::new(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let error = Error::of("value.is.required", "Value is required for name");
        assert_eq!(error.code(), "value.is.required");
        assert_eq!(error.message(), "Value is required for name");
    }

    #[test]
    #[should_panic(expected = "Code must not be empty")]
    fn test_empty_code_panics() {
        Error::of("", "message");
    }

    #[test]
    #[should_panic(expected = "Message must not be empty")]
    fn test_empty_message_panics() {
        Error::of("code", "");
    }

    #[test]
    fn test_equality_uses_both_fields() {
        assert_eq!(Error::of("a", "b"), Error::of("a", "b"));
        assert_ne!(Error::of("a", "b"), Error::of("a", "c"));
        assert_ne!(Error::of("a", "b"), Error::of("x", "b"));
    }

    #[test]
    fn test_serialize_format() {
        let error = Error::of("order.not.assigned", "Order must be assigned first.");
        assert_eq!(
            error.serialize(),
            "order.not.assigned||Order must be assigned first."
        );
    }

    #[test]
    fn test_deserialize_restores_error() {
        let errors = [
            Error::of("value.is.required", "Value is required for name"),
            Error::of("courier.no.available.storage", "no storage | for volume 5"),
            Error::of("x", "message with: punctuation, and spaces"),
        ];

        for error in errors {
            let parsed = Error::deserialize(&error.serialize()).unwrap();
            assert_eq!(parsed, error);
        }
    }

    #[test]
    fn test_deserialize_without_separator_fails() {
        let result = Error::deserialize("no separator here");
        assert_eq!(
            result,
            Err(ErrorParseError {
                input: "no separator here".to_string()
            })
        );
    }

    #[test]
    fn test_deserialize_empty_body_message() {
        let error: Error = EMPTY_BODY_MESSAGE.parse().unwrap();
        assert_eq!(error.code(), "value.is.required");
    }

    #[test]
    fn test_deserialize_ignores_extra_parts() {
        let error = Error::deserialize("code||message||trailing").unwrap();
        assert_eq!(error, Error::of("code", "message"));
    }

    #[test]
    fn test_display() {
        let error = Error::of("c", "m");
        assert_eq!(error.to_string(), "Error{code='c', message='m'}");
    }

    #[test]
    fn test_json_rejects_empty_fields() {
        let json = r#"{"code":"","message":"m"}"#;
        assert!(serde_json::from_str::<Error>(json).is_err());

        let json = r#"{"code":"c","message":"m"}"#;
        assert_eq!(serde_json::from_str::<Error>(json).unwrap(), Error::of("c", "m"));
    }

    #[test]
    fn test_throw_if_none_is_noop() {
        Error::throw_if(None);
    }

    #[test]
    #[should_panic(expected = "Domain invariant violated: boom")]
    fn test_throw_if_some_panics() {
        Error::throw_if(Some(Error::of("code", "boom")));
    }
}
