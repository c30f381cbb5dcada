//! Errors reported by the validation bridge.

use std::error::Error;
use std::fmt;

use crate::container::TypeMismatchError;

/// A boxed error returned by a sub-schema validator.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Represents a structural form that could not be encoded or validated.
///
/// # Examples
///
/// ```rust
/// use rusty_results::bridge::{Deserialized, StructuralValidationError};
/// use rusty_results::container::Optional;
/// use serde_json::json;
///
/// let raw = json!({"value": "foo", "extra": "bar"});
/// let error = Optional::<String>::from_structural_form(&raw, &Deserialized::new()).unwrap_err();
/// assert!(matches!(error, StructuralValidationError::TooManyKeys { .. }));
/// ```
#[derive(Debug)]
pub enum StructuralValidationError {
    /// The input was not a mapping.
    TypeMismatch(TypeMismatchError),
    /// An `Outcome` form had neither the success nor the failure key.
    MissingVariant {
        /// The success key that was expected.
        success: &'static str,
        /// The failure key that was expected.
        failure: &'static str,
    },
    /// The form had more than one key.
    TooManyKeys {
        /// Every key found in the form.
        keys: Vec<String>,
    },
    /// The single key of the form is not a recognized variant key.
    UnknownKey {
        /// The key that was found.
        key: String,
        /// The keys that would have been accepted.
        expected: Vec<&'static str>,
    },
    /// A recognized key carried `null` instead of a payload, or a payload
    /// being encoded serialized to `null`.
    NullPayload {
        /// The key whose payload was null.
        key: &'static str,
    },
    /// The sub-schema validator rejected the payload.
    Payload {
        /// The key whose payload was rejected.
        key: &'static str,
        /// The validator's error.
        source: BoxError,
    },
    /// The payload could not be encoded.
    Encode(serde_json::Error),
    /// The configured success and failure keys are the same, or a key is empty.
    AmbiguousKeys {
        /// The offending key.
        key: &'static str,
    },
}

impl fmt::Display for StructuralValidationError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeMismatch(error) => write!(formatter, "invalid structural form: {error}"),
            Self::MissingVariant { success, failure } => write!(
                formatter,
                "invalid structural form: expected exactly one of `{success}` or `{failure}`, found no keys"
            ),
            Self::TooManyKeys { keys } => write!(
                formatter,
                "invalid structural form: expected at most one key, found {}",
                keys.join(", ")
            ),
            Self::UnknownKey { key, expected } => write!(
                formatter,
                "invalid structural form: unknown key `{key}`, expected `{}`",
                expected.join("` or `")
            ),
            Self::NullPayload { key } => {
                write!(formatter, "invalid structural form: `{key}` has a null payload")
            }
            Self::Payload { key, source } => {
                write!(formatter, "invalid payload for `{key}`: {source}")
            }
            Self::Encode(error) => write!(formatter, "failed to encode payload: {error}"),
            Self::AmbiguousKeys { key } => {
                write!(formatter, "ambiguous structural form keys: `{key}`")
            }
        }
    }
}

impl Error for StructuralValidationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::TypeMismatch(error) => Some(error),
            Self::Payload { source, .. } => Some(source.as_ref()),
            Self::Encode(error) => Some(error),
            _ => None,
        }
    }
}

impl From<TypeMismatchError> for StructuralValidationError {
    fn from(error: TypeMismatchError) -> Self {
        Self::TypeMismatch(error)
    }
}

impl From<serde_json::Error> for StructuralValidationError {
    fn from(error: serde_json::Error) -> Self {
        Self::Encode(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn unknown_key_display_lists_expected_keys() {
        let error = StructuralValidationError::UnknownKey {
            key: "foo".to_string(),
            expected: vec!["value", "error"],
        };
        assert_eq!(
            format!("{error}"),
            "invalid structural form: unknown key `foo`, expected `value` or `error`"
        );
    }

    #[rstest]
    fn payload_error_exposes_source() {
        let inner: BoxError = "not a string".into();
        let error = StructuralValidationError::Payload {
            key: "value",
            source: inner,
        };
        assert_eq!(
            error.source().map(ToString::to_string),
            Some("not a string".to_string())
        );
    }

    #[rstest]
    fn type_mismatch_converts() {
        let error: StructuralValidationError = TypeMismatchError {
            expected: "mapping",
            found: "number",
        }
        .into();
        assert_eq!(
            format!("{error}"),
            "invalid structural form: type mismatch: expected mapping, found number"
        );
    }
}
