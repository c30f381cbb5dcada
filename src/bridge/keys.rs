//! Key names used by the structural form.

/// The key names that identify the active variant in a structural form.
///
/// `present` and `success` may coincide because an `Optional` and an
/// `Outcome` are never decoded against the same keys at once. `success` and
/// `failure` must differ, which [`StructuralBridge::new`](super::StructuralBridge::new)
/// enforces.
///
/// # Examples
///
/// ```rust
/// use rusty_results::bridge::FormKeys;
///
/// let keys = FormKeys::default();
/// assert_eq!(keys.present, "value");
/// assert_eq!(keys.failure, "error");
///
/// assert_eq!(FormKeys::VARIANT_NAMES.success, "Ok");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormKeys {
    /// Key for `Optional::Present`.
    pub present: &'static str,
    /// Key for `Outcome::Success`.
    pub success: &'static str,
    /// Key for `Outcome::Failure`.
    pub failure: &'static str,
}

impl FormKeys {
    /// `{"value": ..}` for present and success values, `{"error": ..}` for failures.
    ///
    /// These are also the keys used by the serde impls.
    pub const DEFAULT: Self = Self {
        present: "value",
        success: "value",
        failure: "error",
    };

    /// Keys named after the variants: `{"Some": ..}`, `{"Ok": ..}`, `{"Error": ..}`.
    pub const VARIANT_NAMES: Self = Self {
        present: "Some",
        success: "Ok",
        failure: "Error",
    };

    /// Creates a key set.
    pub const fn new(present: &'static str, success: &'static str, failure: &'static str) -> Self {
        Self {
            present,
            success,
            failure,
        }
    }
}

impl Default for FormKeys {
    fn default() -> Self {
        Self::DEFAULT
    }
}
