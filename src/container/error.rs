//! Error types for the container combinators.
//!
//! Only the "unwrap" family of operations can fail. Every other combinator
//! is total and returns a new container instead.

use std::fmt;

/// Represents an attempt to extract a variant that is not the active one.
///
/// Returned by `get`, `get_or_fail`, `get_error`, `expect_error`,
/// `expect_absent` and `unwrap_absent`.
///
/// # Examples
///
/// ```rust
/// use rusty_results::container::{Optional, UnwrapError};
///
/// let absent: Optional<i32> = Optional::Absent;
/// let error = absent.get_or_fail("missing port").unwrap_err();
/// assert_eq!(error.operation, "Optional::get_or_fail");
/// assert_eq!(error.detail.as_deref(), Some("missing port"));
/// assert_eq!(format!("{error}"), "Optional::get_or_fail: missing port");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnwrapError {
    /// The operation that failed, for example `"Outcome::get"`.
    pub operation: &'static str,
    /// The caller message, or the rendered payload of the other variant.
    pub detail: Option<String>,
}

impl UnwrapError {
    pub(crate) const fn new(operation: &'static str) -> Self {
        Self {
            operation,
            detail: None,
        }
    }

    pub(crate) fn with_detail(operation: &'static str, detail: impl Into<String>) -> Self {
        Self {
            operation,
            detail: Some(detail.into()),
        }
    }
}

impl fmt::Display for UnwrapError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.detail {
            Some(detail) => write!(formatter, "{}: {detail}", self.operation),
            None => write!(
                formatter,
                "{}: called on the wrong variant",
                self.operation
            ),
        }
    }
}

impl std::error::Error for UnwrapError {}

/// Represents a value whose shape is not the container shape that was expected.
///
/// The containers themselves rule this out at compile time (`to_result_transpose`
/// only exists on `Optional<Outcome<T, E>>`). It surfaces at dynamic boundaries,
/// such as a structural form that is not a mapping at all.
///
/// # Examples
///
/// ```rust
/// use rusty_results::container::TypeMismatchError;
///
/// let error = TypeMismatchError {
///     expected: "mapping",
///     found: "number",
/// };
/// assert_eq!(format!("{error}"), "type mismatch: expected mapping, found number");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeMismatchError {
    /// The shape that was expected.
    pub expected: &'static str,
    /// The shape that was actually found.
    pub found: &'static str,
}

impl fmt::Display for TypeMismatchError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "type mismatch: expected {}, found {}",
            self.expected, self.found
        )
    }
}

impl std::error::Error for TypeMismatchError {}
