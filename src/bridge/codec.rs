//! Encoding containers to structural forms and validating them back.

use serde::Serialize;
use serde_json::Value;

use super::error::StructuralValidationError;
use super::keys::FormKeys;
use super::validator::Validator;
use super::StructuralForm;
use crate::container::{Optional, Outcome, TypeMismatchError};

/// Converts containers to and from their structural form.
///
/// The bridge owns only the key configuration. Payload validation is
/// delegated to the [`Validator`]s passed to each `decode_*` call.
///
/// # Examples
///
/// ```rust
/// use rusty_results::bridge::{Deserialized, FormKeys, StructuralBridge};
/// use rusty_results::container::Outcome;
/// use serde_json::{json, Value};
///
/// let bridge = StructuralBridge::new(FormKeys::VARIANT_NAMES).unwrap();
///
/// let form = bridge.encode_outcome(&Outcome::<i32, String>::Success(10)).unwrap();
/// assert_eq!(Value::Object(form), json!({"Ok": 10}));
///
/// let decoded: Outcome<i32, String> = bridge
///     .decode_outcome(&json!({"Error": "foo"}), &Deserialized::new(), &Deserialized::new())
///     .unwrap();
/// assert_eq!(decoded, Outcome::Failure("foo".to_string()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructuralBridge {
    keys: FormKeys,
}

impl StructuralBridge {
    /// Creates a bridge for `keys`.
    ///
    /// # Errors
    ///
    /// Returns [`StructuralValidationError::AmbiguousKeys`] if a key is empty
    /// or the success and failure keys are equal.
    pub fn new(keys: FormKeys) -> Result<Self, StructuralValidationError> {
        for key in [keys.present, keys.success, keys.failure] {
            if key.is_empty() {
                return Err(StructuralValidationError::AmbiguousKeys { key });
            }
        }
        if keys.success == keys.failure {
            return Err(StructuralValidationError::AmbiguousKeys { key: keys.success });
        }
        Ok(Self { keys })
    }

    /// Returns the configured keys.
    pub const fn keys(&self) -> &FormKeys {
        &self.keys
    }

    // =========================================================================
    // Optional
    // =========================================================================

    /// Encodes `Absent` as `{}` and `Present(v)` as `{present: v}`.
    ///
    /// # Errors
    ///
    /// Returns [`StructuralValidationError::Encode`] if the payload cannot be
    /// represented as JSON, and [`StructuralValidationError::NullPayload`] if
    /// it encodes to `null` (`()`, `None`, unit structs), which no decoder
    /// accepts.
    pub fn encode_optional<T: Serialize>(
        &self,
        optional: &Optional<T>,
    ) -> Result<StructuralForm, StructuralValidationError> {
        let mut form = StructuralForm::new();
        if let Optional::Present(value) = optional {
            let payload = encode_payload(self.keys.present, value)?;
            form.insert(self.keys.present.to_owned(), payload);
        }
        Ok(form)
    }

    /// Decodes an `Optional` from `raw`, validating the payload with `validator`.
    ///
    /// # Errors
    ///
    /// Returns a [`StructuralValidationError`] if `raw` is not a mapping, has
    /// more than one key, has a key other than the present key, carries a
    /// null payload, or if `validator` rejects the payload.
    pub fn decode_optional<T, V>(
        &self,
        raw: &Value,
        validator: &V,
    ) -> Result<Optional<T>, StructuralValidationError>
    where
        V: Validator<T>,
    {
        let Some((key, payload)) = single_entry(raw)? else {
            tracing::trace!("decoded empty structural form as Absent");
            return Ok(Optional::Absent);
        };
        if key != self.keys.present {
            tracing::debug!(%key, "rejected structural form for Optional: unknown key");
            return Err(StructuralValidationError::UnknownKey {
                key: key.clone(),
                expected: vec![self.keys.present],
            });
        }
        validate_payload(self.keys.present, payload, validator).map(Optional::Present)
    }

    /// Encodes `optional` and decodes it again with `validator`.
    ///
    /// This is how an already constructed container is accepted as input: it
    /// goes through exactly the checks a raw form would.
    ///
    /// # Errors
    ///
    /// Returns a [`StructuralValidationError`] if encoding fails or the
    /// payload no longer passes `validator`.
    pub fn revalidate_optional<T, V>(
        &self,
        optional: &Optional<T>,
        validator: &V,
    ) -> Result<Optional<T>, StructuralValidationError>
    where
        T: Serialize,
        V: Validator<T>,
    {
        let form = self.encode_optional(optional)?;
        self.decode_optional(&Value::Object(form), validator)
    }

    // =========================================================================
    // Outcome
    // =========================================================================

    /// Encodes `Success(v)` as `{success: v}` and `Failure(e)` as `{failure: e}`.
    ///
    /// # Errors
    ///
    /// Returns [`StructuralValidationError::Encode`] if the payload cannot be
    /// represented as JSON, and [`StructuralValidationError::NullPayload`] if
    /// it encodes to `null`.
    pub fn encode_outcome<T: Serialize, E: Serialize>(
        &self,
        outcome: &Outcome<T, E>,
    ) -> Result<StructuralForm, StructuralValidationError> {
        let (key, payload) = match outcome {
            Outcome::Success(value) => (self.keys.success, encode_payload(self.keys.success, value)?),
            Outcome::Failure(error) => (self.keys.failure, encode_payload(self.keys.failure, error)?),
        };
        let mut form = StructuralForm::new();
        form.insert(key.to_owned(), payload);
        Ok(form)
    }

    /// Decodes an `Outcome` from `raw`, validating the payload of whichever
    /// channel is present with the matching validator.
    ///
    /// # Errors
    ///
    /// Returns a [`StructuralValidationError`] if `raw` is not a mapping, is
    /// empty, has more than one key, has an unrecognized key, carries a null
    /// payload, or if the channel's validator rejects the payload.
    pub fn decode_outcome<T, E, S, F>(
        &self,
        raw: &Value,
        success_validator: &S,
        failure_validator: &F,
    ) -> Result<Outcome<T, E>, StructuralValidationError>
    where
        S: Validator<T>,
        F: Validator<E>,
    {
        let Some((key, payload)) = single_entry(raw)? else {
            tracing::debug!("rejected structural form for Outcome: no variant key");
            return Err(StructuralValidationError::MissingVariant {
                success: self.keys.success,
                failure: self.keys.failure,
            });
        };
        if key == self.keys.success {
            validate_payload(self.keys.success, payload, success_validator).map(Outcome::Success)
        } else if key == self.keys.failure {
            validate_payload(self.keys.failure, payload, failure_validator).map(Outcome::Failure)
        } else {
            tracing::debug!(%key, "rejected structural form for Outcome: unknown key");
            Err(StructuralValidationError::UnknownKey {
                key: key.clone(),
                expected: vec![self.keys.success, self.keys.failure],
            })
        }
    }

    /// Encodes `outcome` and decodes it again with the channel validators.
    ///
    /// # Errors
    ///
    /// Returns a [`StructuralValidationError`] if encoding fails or the
    /// payload no longer passes its validator.
    pub fn revalidate_outcome<T, E, S, F>(
        &self,
        outcome: &Outcome<T, E>,
        success_validator: &S,
        failure_validator: &F,
    ) -> Result<Outcome<T, E>, StructuralValidationError>
    where
        T: Serialize,
        E: Serialize,
        S: Validator<T>,
        F: Validator<E>,
    {
        let form = self.encode_outcome(outcome)?;
        self.decode_outcome(&Value::Object(form), success_validator, failure_validator)
    }
}

impl Default for StructuralBridge {
    fn default() -> Self {
        Self {
            keys: FormKeys::DEFAULT,
        }
    }
}

// =============================================================================
// Container Shortcuts
// =============================================================================

impl<T> Optional<T> {
    /// Encodes this optional with the default keys.
    ///
    /// # Errors
    ///
    /// See [`StructuralBridge::encode_optional`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rusty_results::container::Optional;
    /// use serde_json::json;
    ///
    /// assert!(Optional::<i32>::Absent.to_structural_form().unwrap().is_empty());
    ///
    /// let form = Optional::Present("foo bar").to_structural_form().unwrap();
    /// assert_eq!(form.get("value"), Some(&json!("foo bar")));
    /// ```
    pub fn to_structural_form(&self) -> Result<StructuralForm, StructuralValidationError>
    where
        T: Serialize,
    {
        StructuralBridge::default().encode_optional(self)
    }

    /// Decodes an optional from `raw` with the default keys.
    ///
    /// # Errors
    ///
    /// See [`StructuralBridge::decode_optional`].
    pub fn from_structural_form<V>(raw: &Value, validator: &V) -> Result<Self, StructuralValidationError>
    where
        V: Validator<T>,
    {
        StructuralBridge::default().decode_optional(raw, validator)
    }
}

impl<T, E> Outcome<T, E> {
    /// Encodes this outcome with the default keys.
    ///
    /// # Errors
    ///
    /// See [`StructuralBridge::encode_outcome`].
    pub fn to_structural_form(&self) -> Result<StructuralForm, StructuralValidationError>
    where
        T: Serialize,
        E: Serialize,
    {
        StructuralBridge::default().encode_outcome(self)
    }

    /// Decodes an outcome from `raw` with the default keys.
    ///
    /// # Errors
    ///
    /// See [`StructuralBridge::decode_outcome`].
    pub fn from_structural_form<S, F>(
        raw: &Value,
        success_validator: &S,
        failure_validator: &F,
    ) -> Result<Self, StructuralValidationError>
    where
        S: Validator<T>,
        F: Validator<E>,
    {
        StructuralBridge::default().decode_outcome(raw, success_validator, failure_validator)
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Returns the only entry of the mapping `raw`, or `None` if it is empty.
fn single_entry(raw: &Value) -> Result<Option<(&String, &Value)>, StructuralValidationError> {
    let Value::Object(form) = raw else {
        tracing::debug!(found = value_kind(raw), "rejected structural form: not a mapping");
        return Err(TypeMismatchError {
            expected: "mapping",
            found: value_kind(raw),
        }
        .into());
    };
    let mut entries = form.iter();
    match (entries.next(), entries.next()) {
        (None, _) => Ok(None),
        (Some(entry), None) => Ok(Some(entry)),
        (Some(_), Some(_)) => {
            let keys: Vec<String> = form.keys().cloned().collect();
            tracing::debug!(?keys, "rejected structural form: more than one key");
            Err(StructuralValidationError::TooManyKeys { keys })
        }
    }
}

/// Encodes a payload, rejecting the `null` that decoding would refuse.
fn encode_payload<T: Serialize>(
    key: &'static str,
    payload: &T,
) -> Result<Value, StructuralValidationError> {
    let encoded = serde_json::to_value(payload)?;
    if encoded.is_null() {
        tracing::debug!(key, "refused to encode a null payload");
        return Err(StructuralValidationError::NullPayload { key });
    }
    Ok(encoded)
}

fn validate_payload<T, V>(
    key: &'static str,
    payload: &Value,
    validator: &V,
) -> Result<T, StructuralValidationError>
where
    V: Validator<T>,
{
    if payload.is_null() {
        tracing::debug!(key, "rejected structural form: null payload");
        return Err(StructuralValidationError::NullPayload { key });
    }
    validator.validate(payload).map_err(|source| {
        tracing::debug!(key, error = %source, "sub-schema validator rejected payload");
        StructuralValidationError::Payload { key, source }
    })
}

const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "mapping",
    }
}
