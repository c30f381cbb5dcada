//! Validation bridge between containers and their structural form.
//!
//! A structural form is a JSON mapping with at most one key naming the active
//! variant:
//!
//! | Container            | Structural form        |
//! |----------------------|------------------------|
//! | `Optional::Absent`   | `{}`                   |
//! | `Optional::Present`  | `{present: payload}`   |
//! | `Outcome::Success`   | `{success: payload}`   |
//! | `Outcome::Failure`   | `{failure: payload}`   |
//!
//! Key names come from [`FormKeys`]. Payloads are validated by the caller's
//! [`Validator`]s, so a declared `Optional<Email>` only accepts forms whose
//! payload is a valid `Email`.
//!
//! The containers also implement serde's `Serialize` and `Deserialize` with
//! the default keys, which lets them appear as fields of derived types.
//!
//! # Examples
//!
//! ```rust
//! use rusty_results::bridge::{BoxError, StructuralValidationError};
//! use rusty_results::container::Optional;
//! use serde_json::{json, Value};
//!
//! let non_empty = |raw: &Value| -> Result<String, BoxError> {
//!     match raw.as_str() {
//!         Some(text) if !text.is_empty() => Ok(text.to_string()),
//!         _ => Err("expected a non-empty string".into()),
//!     }
//! };
//!
//! let parsed = Optional::from_structural_form(&json!({"value": "foo bar"}), &non_empty).unwrap();
//! assert_eq!(parsed, Optional::Present("foo bar".to_string()));
//!
//! let rejected = Optional::from_structural_form(&json!({"value": ""}), &non_empty);
//! assert!(matches!(rejected, Err(StructuralValidationError::Payload { .. })));
//! ```

mod codec;
mod error;
mod keys;
mod serde_impl;
mod validator;

use serde_json::Value;

pub use codec::StructuralBridge;
pub use error::{BoxError, StructuralValidationError};
pub use keys::FormKeys;
pub use validator::{Deserialized, Validator};

/// The encoded form of a container: a mapping from variant key to payload.
pub type StructuralForm = serde_json::Map<String, Value>;
