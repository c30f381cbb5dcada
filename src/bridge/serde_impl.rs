//! Serde registration for the containers.
//!
//! `Serialize` and `Deserialize` produce and accept the structural form with
//! [`FormKeys::DEFAULT`], so a container used as a field of any serde-derived
//! type is encoded the same way the bridge encodes it:
//!
//! ```rust
//! use rusty_results::container::{Optional, Outcome};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, PartialEq, Serialize, Deserialize)]
//! struct Contact {
//!     name: Optional<String>,
//!     phone: Optional<u32>,
//!     lookup: Outcome<u32, String>,
//! }
//!
//! let contact = Contact {
//!     name: Optional::Present("Link".to_string()),
//!     phone: Optional::Absent,
//!     lookup: Outcome::Failure("timeout".to_string()),
//! };
//!
//! let json = serde_json::to_string(&contact).unwrap();
//! assert_eq!(json, r#"{"name":{"value":"Link"},"phone":{},"lookup":{"error":"timeout"}}"#);
//!
//! let restored: Contact = serde_json::from_str(&json).unwrap();
//! assert_eq!(restored, contact);
//! ```
//!
//! A payload that serializes to `null` has no structural form, so
//! serializing `Optional::Present(())` fails instead of producing
//! `{"value": null}`, which deserialization would reject.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, DeserializeSeed, MapAccess, Visitor};
use serde::ser::{self, SerializeMap};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::keys::FormKeys;
use crate::container::{Optional, Outcome};

const PRESENT_KEY: &str = FormKeys::DEFAULT.present;
const SUCCESS_KEY: &str = FormKeys::DEFAULT.success;
const FAILURE_KEY: &str = FormKeys::DEFAULT.failure;

const OPTIONAL_FIELDS: &[&str] = &[PRESENT_KEY];
const OUTCOME_FIELDS: &[&str] = &[SUCCESS_KEY, FAILURE_KEY];

// =============================================================================
// Serialize
// =============================================================================

/// Encodes a payload as JSON, rejecting one that encodes to `null`.
fn non_null_payload<T, S>(key: &'static str, payload: &T) -> Result<serde_json::Value, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    let encoded = serde_json::to_value(payload).map_err(ser::Error::custom)?;
    if encoded.is_null() {
        return Err(ser::Error::custom(format_args!(
            "`{key}` has a null payload, which the structural form cannot represent"
        )));
    }
    Ok(encoded)
}

impl<T: Serialize> Serialize for Optional<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Present(value) => {
                let payload = non_null_payload::<T, S>(PRESENT_KEY, value)?;
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(PRESENT_KEY, &payload)?;
                map.end()
            }
            Self::Absent => serializer.serialize_map(Some(0))?.end(),
        }
    }
}

impl<T: Serialize, E: Serialize> Serialize for Outcome<T, E> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let (key, payload) = match self {
            Self::Success(value) => (SUCCESS_KEY, non_null_payload::<T, S>(SUCCESS_KEY, value)?),
            Self::Failure(error) => (FAILURE_KEY, non_null_payload::<E, S>(FAILURE_KEY, error)?),
        };
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(key, &payload)?;
        map.end()
    }
}

// =============================================================================
// Deserialize
// =============================================================================

/// Deserializes a payload, rejecting `null`.
struct NonNullPayload<T> {
    key: &'static str,
    marker: PhantomData<T>,
}

impl<T> NonNullPayload<T> {
    const fn new(key: &'static str) -> Self {
        Self {
            key,
            marker: PhantomData,
        }
    }
}

impl<'de, T> DeserializeSeed<'de> for NonNullPayload<T>
where
    T: Deserialize<'de>,
{
    type Value = T;

    fn deserialize<D>(self, deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_option(self)
    }
}

impl<'de, T> Visitor<'de> for NonNullPayload<T>
where
    T: Deserialize<'de>,
{
    type Value = T;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a non-null payload for `{}`", self.key)
    }

    fn visit_none<E>(self) -> Result<T, E>
    where
        E: de::Error,
    {
        Err(E::custom(format_args!("`{}` has a null payload", self.key)))
    }

    fn visit_unit<E>(self) -> Result<T, E>
    where
        E: de::Error,
    {
        self.visit_none()
    }

    fn visit_some<D>(self, deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer)
    }
}

fn reject_extra_key<'de, A>(access: &mut A) -> Result<(), A::Error>
where
    A: MapAccess<'de>,
{
    match access.next_key::<String>()? {
        Some(extra) => Err(de::Error::custom(format_args!(
            "expected at most one key, found extra key `{extra}`"
        ))),
        None => Ok(()),
    }
}

struct OptionalVisitor<T> {
    marker: PhantomData<T>,
}

impl<'de, T> Visitor<'de> for OptionalVisitor<T>
where
    T: Deserialize<'de>,
{
    type Value = Optional<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a mapping with no keys or the single key `{PRESENT_KEY}`")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let Some(key) = access.next_key::<String>()? else {
            return Ok(Optional::Absent);
        };
        if key != PRESENT_KEY {
            return Err(de::Error::unknown_field(&key, OPTIONAL_FIELDS));
        }
        let value = access.next_value_seed(NonNullPayload::new(PRESENT_KEY))?;
        reject_extra_key(&mut access)?;
        Ok(Optional::Present(value))
    }
}

impl<'de, T> Deserialize<'de> for Optional<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(OptionalVisitor {
            marker: PhantomData,
        })
    }
}

struct OutcomeVisitor<T, E> {
    marker: PhantomData<(T, E)>,
}

impl<'de, T, E> Visitor<'de> for OutcomeVisitor<T, E>
where
    T: Deserialize<'de>,
    E: Deserialize<'de>,
{
    type Value = Outcome<T, E>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(
            formatter,
            "a mapping with the single key `{SUCCESS_KEY}` or `{FAILURE_KEY}`"
        )
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let Some(key) = access.next_key::<String>()? else {
            return Err(de::Error::custom(format_args!(
                "expected exactly one of `{SUCCESS_KEY}` or `{FAILURE_KEY}`, found no keys"
            )));
        };
        let outcome = if key == SUCCESS_KEY {
            Outcome::Success(access.next_value_seed(NonNullPayload::new(SUCCESS_KEY))?)
        } else if key == FAILURE_KEY {
            Outcome::Failure(access.next_value_seed(NonNullPayload::new(FAILURE_KEY))?)
        } else {
            return Err(de::Error::unknown_field(&key, OUTCOME_FIELDS));
        };
        reject_extra_key(&mut access)?;
        Ok(outcome)
    }
}

impl<'de, T, E> Deserialize<'de> for Outcome<T, E>
where
    T: Deserialize<'de>,
    E: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(OutcomeVisitor {
            marker: PhantomData,
        })
    }
}
