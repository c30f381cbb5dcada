//! Sub-schema validators for container payloads.
//!
//! The bridge never decides how a payload is validated. It hands the raw
//! payload to a [`Validator`] supplied by the caller for each declared field
//! type. Any `Fn(&Value) -> Result<T, BoxError>` is a validator, and
//! [`Deserialized`] validates by running `T`'s serde `Deserialize` impl.

use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::BoxError;

/// Validates and decodes the raw payload of a structural form.
///
/// # Examples
///
/// ```rust
/// use rusty_results::bridge::{BoxError, Validator};
/// use serde_json::{json, Value};
///
/// let positive = |raw: &Value| -> Result<u64, BoxError> {
///     match raw.as_u64() {
///         Some(number) if number > 0 => Ok(number),
///         _ => Err("expected a positive integer".into()),
///     }
/// };
///
/// assert_eq!(positive.validate(&json!(3)).unwrap(), 3);
/// assert!(positive.validate(&json!(-1)).is_err());
/// ```
pub trait Validator<T> {
    /// Validates `raw`, returning the decoded value or the reason it was rejected.
    ///
    /// # Errors
    ///
    /// Returns the validator's own error when `raw` is not a valid `T`.
    fn validate(&self, raw: &Value) -> Result<T, BoxError>;
}

impl<T, F> Validator<T> for F
where
    F: Fn(&Value) -> Result<T, BoxError>,
{
    #[inline]
    fn validate(&self, raw: &Value) -> Result<T, BoxError> {
        self(raw)
    }
}

/// A validator that decodes the payload with `T`'s `Deserialize` impl.
///
/// # Examples
///
/// ```rust
/// use rusty_results::bridge::{Deserialized, Validator};
/// use serde_json::json;
///
/// let validator = Deserialized::<String>::new();
/// assert_eq!(validator.validate(&json!("foo bar")).unwrap(), "foo bar");
/// assert!(validator.validate(&json!(10)).is_err());
/// ```
pub struct Deserialized<T> {
    marker: PhantomData<fn() -> T>,
}

impl<T> Deserialized<T> {
    /// Creates the validator.
    pub const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<T> Default for Deserialized<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Deserialized<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Deserialized<T> {}

impl<T> fmt::Debug for Deserialized<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Deserialized<{}>", std::any::type_name::<T>())
    }
}

impl<T: DeserializeOwned> Validator<T> for Deserialized<T> {
    fn validate(&self, raw: &Value) -> Result<T, BoxError> {
        T::deserialize(raw).map_err(BoxError::from)
    }
}
