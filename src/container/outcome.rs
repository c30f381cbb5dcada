//! Outcome type - a success or a failure.
//!
//! This module provides the `Outcome<T, E>` type, which is either
//! `Success(T)` or `Failure(E)`. It mirrors [`Optional`] with an error
//! channel in place of absence:
//!
//! - `map` / `and_then` act on the success value and short-circuit on failure
//! - `map_error` / `or_else` act on the error and leave successes alone
//! - `to_optional_transpose` swaps `Outcome<Optional<T>, E>` into `Optional<Outcome<T, E>>`
//!
//! # Examples
//!
//! ```rust
//! use rusty_results::container::Outcome;
//!
//! fn parse(input: &str) -> Outcome<i32, String> {
//!     input.parse::<i32>().map_err(|error| error.to_string()).into()
//! }
//!
//! let doubled = parse("21").map(|x| x * 2);
//! assert_eq!(doubled, Outcome::Success(42));
//!
//! let recovered = parse("x").or_else(|_| Outcome::<i32, String>::Success(0));
//! assert_eq!(recovered, Outcome::Success(0));
//! ```

use std::fmt;

use super::error::UnwrapError;
use super::iter::{IntoIter, Iter};
use super::optional::Optional;

/// A computation result that is either a success or a failure.
///
/// Equality, ordering and hashing are structural over the active variant and
/// its payload. `Success(0)` and `Failure(0)` are never equal.
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The type of the error
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome<T, E> {
    /// The computation succeeded with a value.
    Success(T),
    /// The computation failed with an error.
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Boolean coercion: a `Success` is truthy and a `Failure` is falsy.
    ///
    /// Only the variant is consulted, never the payload.
    #[inline]
    pub const fn is_truthy(&self) -> bool {
        self.is_success()
    }

    /// Returns `true` if this is a `Success` with a value equal to `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rusty_results::container::Outcome;
    ///
    /// assert!(Outcome::<i32, i32>::Success(0).contains(&0));
    /// assert!(!Outcome::<i32, i32>::Failure(0).contains(&0));
    /// ```
    #[inline]
    pub fn contains<U>(&self, value: &U) -> bool
    where
        T: PartialEq<U>,
    {
        match self {
            Self::Success(inner) => inner == value,
            Self::Failure(_) => false,
        }
    }

    /// Returns `true` if this is a `Failure` with an error equal to `error`.
    #[inline]
    pub fn contains_error<F>(&self, error: &F) -> bool
    where
        E: PartialEq<F>,
    {
        match self {
            Self::Success(_) => false,
            Self::Failure(inner) => inner == error,
        }
    }

    /// Converts from `&Outcome<T, E>` to `Outcome<&T, &E>`.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    // =========================================================================
    // Conversion to Optional
    // =========================================================================

    /// Keeps the success value, discarding any error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rusty_results::container::{Optional, Outcome};
    ///
    /// assert_eq!(Outcome::<i32, &str>::Success(1).to_optional_success(), Optional::Present(1));
    /// assert_eq!(Outcome::<i32, &str>::Failure("e").to_optional_success(), Optional::Absent);
    /// ```
    #[inline]
    pub fn to_optional_success(self) -> Optional<T> {
        match self {
            Self::Success(value) => Optional::Present(value),
            Self::Failure(_) => Optional::Absent,
        }
    }

    /// Keeps the error, discarding any success value.
    #[inline]
    pub fn to_optional_failure(self) -> Optional<E> {
        match self {
            Self::Success(_) => Optional::Absent,
            Self::Failure(error) => Optional::Present(error),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies `function` to the success value, leaving a failure untouched.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(function(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Applies `function` to the error, leaving a success untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rusty_results::container::Outcome;
    ///
    /// let failure: Outcome<i32, &str> = Outcome::Failure("bad");
    /// assert_eq!(failure.map_error(str::len), Outcome::Failure(3));
    /// ```
    #[inline]
    pub fn map_error<U, F>(self, function: F) -> Outcome<T, U>
    where
        F: FnOnce(E) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(function(error)),
        }
    }

    /// Applies `function` to the success value, or returns `default` on failure.
    #[inline]
    pub fn map_or<U, F>(self, default: U, function: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(_) => default,
        }
    }

    /// Applies `function` to the success value, or `default` to the error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rusty_results::container::Outcome;
    ///
    /// let failure: Outcome<i32, i32> = Outcome::Failure(3);
    /// assert_eq!(failure.map_or_else(|e| e * 10, |v| v + 1), 30);
    /// ```
    #[inline]
    pub fn map_or_else<U, D, F>(self, default: D, function: F) -> U
    where
        D: FnOnce(E) -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error) => default(error),
        }
    }

    // =========================================================================
    // Chaining Operations
    // =========================================================================

    /// Calls `function` with the success value; a failure short-circuits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rusty_results::container::Outcome;
    ///
    /// let checked = |x: i32| if x > 0 { Outcome::Success(x) } else { Outcome::Failure("negative") };
    /// assert_eq!(Outcome::Success(5).and_then(checked), Outcome::Success(5));
    /// assert_eq!(Outcome::Failure("early").and_then(checked), Outcome::Failure("early"));
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Calls `function` with the error; a success is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rusty_results::container::Outcome;
    ///
    /// let retry = |e: i32| Outcome::<i32, i32>::Success(e + 10);
    /// assert_eq!(Outcome::Failure(0).or_else(retry), Outcome::Success(10));
    /// assert_eq!(Outcome::Success(0).or_else(retry), Outcome::Success(0));
    /// ```
    #[inline]
    pub fn or_else<U, F>(self, function: F) -> Outcome<T, U>
    where
        F: FnOnce(E) -> Outcome<T, U>,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => function(error),
        }
    }

    /// Returns `other` if `self` is a `Success`, otherwise the failure of `self`.
    #[inline]
    pub fn logical_and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Self::Success(_) => other,
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Returns `self` if it is a `Success`, otherwise `other`.
    #[inline]
    pub fn logical_or<U>(self, other: Outcome<T, U>) -> Outcome<T, U> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(_) => other,
        }
    }

    // =========================================================================
    // Value Extraction (Consuming)
    // =========================================================================

    /// Returns the success value or `default`.
    #[inline]
    pub fn get_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the success value or computes one from `function`.
    #[inline]
    pub fn get_or_else<F>(self, function: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => function(),
        }
    }

    /// Returns the success value, reporting `message` on failure.
    ///
    /// # Errors
    ///
    /// Returns an [`UnwrapError`] carrying `message` if this is a `Failure`.
    #[inline]
    pub fn get_or_fail(self, message: &str) -> Result<T, UnwrapError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(_) => Err(UnwrapError::with_detail("Outcome::get_or_fail", message)),
        }
    }

    /// Returns the error, reporting `message` if this is a `Success`.
    ///
    /// # Errors
    ///
    /// Returns an [`UnwrapError`] carrying `message` if this is a `Success`.
    #[inline]
    pub fn expect_error(self, message: &str) -> Result<E, UnwrapError> {
        match self {
            Self::Success(_) => Err(UnwrapError::with_detail("Outcome::expect_error", message)),
            Self::Failure(error) => Ok(error),
        }
    }

    /// Returns an iterator over the success value.
    #[inline]
    pub const fn iter(&self) -> Iter<'_, T> {
        match self {
            Self::Success(value) => Iter::new(Some(value)),
            Self::Failure(_) => Iter::new(None),
        }
    }

    /// Collects the success value into a sequence of zero or one elements.
    #[inline]
    pub fn to_sequence(self) -> Vec<T> {
        self.into_iter().collect()
    }
}

impl<T, E: fmt::Debug> Outcome<T, E> {
    /// Returns the success value.
    ///
    /// # Errors
    ///
    /// Returns an [`UnwrapError`] whose detail is the `Debug` rendering of the
    /// error if this is a `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rusty_results::container::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::Success(1).get(), Ok(1));
    ///
    /// let error = Outcome::<i32, &str>::Failure("boom").get().unwrap_err();
    /// assert_eq!(error.detail.as_deref(), Some("\"boom\""));
    /// ```
    #[inline]
    pub fn get(self) -> Result<T, UnwrapError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(UnwrapError::with_detail(
                "Outcome::get",
                format!("{error:?}"),
            )),
        }
    }
}

impl<T: fmt::Debug, E> Outcome<T, E> {
    /// Returns the error.
    ///
    /// # Errors
    ///
    /// Returns an [`UnwrapError`] whose detail is the `Debug` rendering of the
    /// success value if this is a `Success`.
    #[inline]
    pub fn get_error(self) -> Result<E, UnwrapError> {
        match self {
            Self::Success(value) => Err(UnwrapError::with_detail(
                "Outcome::get_error",
                format!("{value:?}"),
            )),
            Self::Failure(error) => Ok(error),
        }
    }
}

// =============================================================================
// Nested Operations
// =============================================================================

impl<T, E> Outcome<Outcome<T, E>, E> {
    /// Removes one level of nesting.
    ///
    /// A failure at the outer level is returned unchanged.
    #[inline]
    pub fn flatten_one(self) -> Outcome<T, E> {
        match self {
            Self::Success(inner) => inner,
            Self::Failure(error) => Outcome::Failure(error),
        }
    }
}

impl<T, E> Outcome<Optional<T>, E> {
    /// Swaps an outcome of an optional into an optional outcome.
    ///
    /// - `Success(Present(v))` becomes `Present(Success(v))`
    /// - `Success(Absent)` becomes `Absent`
    /// - `Failure(e)` becomes `Present(Failure(e))`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rusty_results::container::{Optional, Outcome};
    ///
    /// let value: Outcome<Optional<i32>, &str> = Outcome::Success(Optional::Present(5));
    /// assert_eq!(value.to_optional_transpose(), Optional::Present(Outcome::Success(5)));
    ///
    /// let value: Outcome<Optional<i32>, &str> = Outcome::Failure("e");
    /// assert_eq!(value.to_optional_transpose(), Optional::Present(Outcome::Failure("e")));
    /// ```
    #[inline]
    pub fn to_optional_transpose(self) -> Optional<Outcome<T, E>> {
        match self {
            Self::Success(Optional::Present(value)) => Optional::Present(Outcome::Success(value)),
            Self::Success(Optional::Absent) => Optional::Absent,
            Self::Failure(error) => Optional::Present(Outcome::Failure(error)),
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Outcome<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => formatter.debug_tuple("Success").field(value).finish(),
            Self::Failure(error) => formatter.debug_tuple("Failure").field(error).finish(),
        }
    }
}

impl<T, E> IntoIterator for Outcome<T, E> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.to_optional_success().into())
    }
}

impl<'a, T, E> IntoIterator for &'a Outcome<T, E> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    /// Converts a standard `Result`: `Ok(v)` becomes `Success(v)`, `Err(e)` becomes `Failure(e)`.
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    /// Converts back into a standard `Result`.
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}

static_assertions::assert_impl_all!(Outcome<i32, String>: Send, Sync, std::hash::Hash);
static_assertions::assert_impl_all!(Outcome<i32, u8>: Copy);
