//! Optional type - a value or nothing.
//!
//! This module provides the `Optional<T>` type, which is either
//! `Present(T)` or `Absent`. It carries the same combinator vocabulary as
//! [`Outcome`], and the two convert into each other:
//!
//! - `to_result` / `to_result_or_else` turn absence into a failure
//! - `to_result_transpose` swaps `Optional<Outcome<T, E>>` into `Outcome<Optional<T>, E>`
//!
//! The only operations that can fail are the "unwrap" family (`get`,
//! `get_or_fail`, `expect_absent`, `unwrap_absent`), which return
//! [`UnwrapError`] instead of panicking.
//!
//! # Examples
//!
//! ```rust
//! use rusty_results::container::{Optional, Outcome};
//!
//! let port: Optional<u16> = Optional::Present(8080);
//!
//! match port {
//!     Optional::Present(number) => println!("listening on {number}"),
//!     Optional::Absent => println!("no port configured"),
//! }
//!
//! let described = port.map_or_else(|| "none".to_string(), |number| number.to_string());
//! assert_eq!(described, "8080");
//!
//! let checked: Outcome<u16, &str> = port.filter(|number| *number > 1024).to_result("privileged");
//! assert_eq!(checked, Outcome::Success(8080));
//! ```

use std::fmt;

use super::error::UnwrapError;
use super::iter::{IntoIter, Iter};
use super::outcome::Outcome;

/// A value that is either present or absent.
///
/// Equality, ordering and hashing are structural: two `Present` values are
/// equal iff their payloads are, and every `Absent` is equal to every other
/// `Absent`.
///
/// # Type Parameters
///
/// * `T` - The type of the contained value
///
/// # Examples
///
/// ```rust
/// use std::collections::HashSet;
/// use rusty_results::container::Optional;
///
/// let set: HashSet<Optional<i32>> =
///     [Optional::Present(0), Optional::Absent, Optional::Present(0)].into_iter().collect();
/// assert_eq!(set.len(), 2);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Optional<T> {
    /// A value is present.
    Present(T),
    /// No value.
    Absent,
}

impl<T> Optional<T> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Present` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rusty_results::container::Optional;
    ///
    /// assert!(Optional::Present(1).is_present());
    /// assert!(!Optional::<i32>::Absent.is_present());
    /// ```
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if this is `Absent`.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns `true` if this is `Present` with a value equal to `item`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rusty_results::container::Optional;
    ///
    /// assert!(Optional::Present(0).contains(&0));
    /// assert!(!Optional::Present(0).contains(&1));
    /// assert!(!Optional::<i32>::Absent.contains(&0));
    /// ```
    #[inline]
    pub fn contains<U>(&self, item: &U) -> bool
    where
        T: PartialEq<U>,
    {
        match self {
            Self::Present(value) => value == item,
            Self::Absent => false,
        }
    }

    // =========================================================================
    // Reference Access
    // =========================================================================

    /// Converts from `&Optional<T>` to `Optional<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Present(value) => Optional::Present(value),
            Self::Absent => Optional::Absent,
        }
    }

    // =========================================================================
    // Value Extraction (Consuming)
    // =========================================================================

    /// Returns the contained value.
    ///
    /// # Errors
    ///
    /// Returns an [`UnwrapError`] without detail if this is `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rusty_results::container::Optional;
    ///
    /// assert_eq!(Optional::Present(42).get(), Ok(42));
    /// assert!(Optional::<i32>::Absent.get().is_err());
    /// ```
    #[inline]
    pub fn get(self) -> Result<T, UnwrapError> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(UnwrapError::new("Optional::get")),
        }
    }

    /// Returns the contained value, reporting `message` if there is none.
    ///
    /// # Errors
    ///
    /// Returns an [`UnwrapError`] carrying `message` if this is `Absent`.
    #[inline]
    pub fn get_or_fail(self, message: &str) -> Result<T, UnwrapError> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(UnwrapError::with_detail("Optional::get_or_fail", message)),
        }
    }

    /// Returns the contained value or `default`.
    ///
    /// `default` is evaluated eagerly; use [`Optional::get_or_else`] to defer it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rusty_results::container::Optional;
    ///
    /// assert_eq!(Optional::Present(0).get_or(10), 0);
    /// assert_eq!(Optional::Absent.get_or(10), 10);
    /// ```
    #[inline]
    pub fn get_or(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => default,
        }
    }

    /// Returns the contained value or computes one from `function`.
    #[inline]
    pub fn get_or_else<F>(self, function: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent => function(),
        }
    }

    /// Returns `Ok(())` if this is `Absent`.
    ///
    /// # Errors
    ///
    /// Returns an [`UnwrapError`] carrying `message` if a value is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rusty_results::container::Optional;
    ///
    /// assert!(Optional::<i32>::Absent.expect_absent("should be empty").is_ok());
    /// let error = Optional::Present(1).expect_absent("should be empty").unwrap_err();
    /// assert_eq!(error.detail.as_deref(), Some("should be empty"));
    /// ```
    #[inline]
    pub fn expect_absent(&self, message: &str) -> Result<(), UnwrapError> {
        match self {
            Self::Present(_) => Err(UnwrapError::with_detail("Optional::expect_absent", message)),
            Self::Absent => Ok(()),
        }
    }

    /// Returns `Ok(())` if this is `Absent`.
    ///
    /// # Errors
    ///
    /// Returns an [`UnwrapError`] without detail if a value is present.
    #[inline]
    pub fn unwrap_absent(&self) -> Result<(), UnwrapError> {
        match self {
            Self::Present(_) => Err(UnwrapError::new("Optional::unwrap_absent")),
            Self::Absent => Ok(()),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies `function` to the contained value.
    ///
    /// `Absent` stays `Absent` and `function` is never called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rusty_results::container::Optional;
    ///
    /// assert_eq!(Optional::Present(21).map(|x| x * 2), Optional::Present(42));
    /// assert_eq!(Optional::<i32>::Absent.map(|x| x * 2), Optional::Absent);
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => Optional::Present(function(value)),
            Self::Absent => Optional::Absent,
        }
    }

    /// Applies `function` to the contained value, or returns `default`.
    ///
    /// The decision is made on the variant only, so falsy payloads such as
    /// `0` or `""` are still passed to `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rusty_results::container::Optional;
    ///
    /// assert_eq!(Optional::Present(0).map_or(-1, |x| x + 1), 1);
    /// assert_eq!(Optional::<i32>::Absent.map_or(-1, |x| x + 1), -1);
    /// ```
    #[inline]
    pub fn map_or<U, F>(self, default: U, function: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => default,
        }
    }

    /// Applies `function` to the contained value, or computes a default.
    #[inline]
    pub fn map_or_else<U, D, F>(self, default: D, function: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => default(),
        }
    }

    /// Keeps the value only if `predicate` accepts it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rusty_results::container::Optional;
    ///
    /// let even = |x: &i32| x % 2 == 0;
    /// assert_eq!(Optional::Present(4).filter(even), Optional::Present(4));
    /// assert_eq!(Optional::Present(3).filter(even), Optional::Absent);
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Present(value) => {
                if predicate(&value) {
                    Self::Present(value)
                } else {
                    Self::Absent
                }
            }
            Self::Absent => Self::Absent,
        }
    }

    // =========================================================================
    // Chaining Operations
    // =========================================================================

    /// Calls `function` with the contained value and returns its result.
    ///
    /// Some languages call this operation flatmap.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rusty_results::container::Optional;
    ///
    /// let half = |x: i32| if x % 2 == 0 { Optional::Present(x / 2) } else { Optional::Absent };
    /// assert_eq!(Optional::Present(8).and_then(half), Optional::Present(4));
    /// assert_eq!(Optional::Present(7).and_then(half), Optional::Absent);
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => Optional::Absent,
        }
    }

    /// Returns `self` if a value is present, otherwise calls `function`.
    #[inline]
    pub fn or_else<F>(self, function: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Present(value) => Self::Present(value),
            Self::Absent => function(),
        }
    }

    /// Returns `Present` if exactly one of `self` and `other` is `Present`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rusty_results::container::Optional;
    ///
    /// assert_eq!(Optional::Present(1).xor(Optional::Absent), Optional::Present(1));
    /// assert_eq!(Optional::Absent.xor(Optional::Present(2)), Optional::Present(2));
    /// assert_eq!(Optional::Present(1).xor(Optional::Present(2)), Optional::Absent);
    /// assert_eq!(Optional::<i32>::Absent.xor(Optional::Absent), Optional::Absent);
    /// ```
    #[inline]
    pub fn xor(self, other: Self) -> Self {
        match (self, other) {
            (Self::Present(value), Self::Absent) | (Self::Absent, Self::Present(value)) => {
                Self::Present(value)
            }
            _ => Self::Absent,
        }
    }

    /// Returns `other` if `self` is `Present`, otherwise `Absent`.
    ///
    /// This is the short-circuiting `and` of two optionals.
    #[inline]
    pub fn logical_and<U>(self, other: Optional<U>) -> Optional<U> {
        match self {
            Self::Present(_) => other,
            Self::Absent => Optional::Absent,
        }
    }

    /// Returns `self` if it is `Present`, otherwise `other`.
    ///
    /// This is the short-circuiting `or` of two optionals.
    #[inline]
    pub fn logical_or(self, other: Self) -> Self {
        match self {
            Self::Present(value) => Self::Present(value),
            Self::Absent => other,
        }
    }

    // =========================================================================
    // Zip Operations
    // =========================================================================

    /// Pairs the values of `self` and `other` if both are present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rusty_results::container::Optional;
    ///
    /// assert_eq!(Optional::Present(1).zip(Optional::Present("a")), Optional::Present((1, "a")));
    /// assert_eq!(Optional::Present(1).zip(Optional::<&str>::Absent), Optional::Absent);
    /// ```
    #[inline]
    pub fn zip<U>(self, other: Optional<U>) -> Optional<(T, U)> {
        self.zip_with(other, |left, right| (left, right))
    }

    /// Combines the values of `self` and `other` with `function` if both are present.
    #[inline]
    pub fn zip_with<U, R, F>(self, other: Optional<U>, function: F) -> Optional<R>
    where
        F: FnOnce(T, U) -> R,
    {
        match (self, other) {
            (Self::Present(left), Optional::Present(right)) => {
                Optional::Present(function(left, right))
            }
            _ => Optional::Absent,
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts into an [`Outcome`], using `error` for `Absent`.
    ///
    /// `error` is evaluated eagerly; use [`Optional::to_result_or_else`] to defer it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rusty_results::container::{Optional, Outcome};
    ///
    /// assert_eq!(Optional::Present(3).to_result("none"), Outcome::Success(3));
    /// assert_eq!(Optional::<i32>::Absent.to_result("none"), Outcome::Failure("none"));
    /// ```
    #[inline]
    pub fn to_result<E>(self, error: E) -> Outcome<T, E> {
        match self {
            Self::Present(value) => Outcome::Success(value),
            Self::Absent => Outcome::Failure(error),
        }
    }

    /// Converts into an [`Outcome`], computing the error for `Absent`.
    #[inline]
    pub fn to_result_or_else<E, F>(self, function: F) -> Outcome<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Present(value) => Outcome::Success(value),
            Self::Absent => Outcome::Failure(function()),
        }
    }

    /// Returns an iterator over the contained value.
    #[inline]
    pub const fn iter(&self) -> Iter<'_, T> {
        match self {
            Self::Present(value) => Iter::new(Some(value)),
            Self::Absent => Iter::new(None),
        }
    }

    /// Collects the contained value into a sequence of zero or one elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rusty_results::container::Optional;
    ///
    /// assert_eq!(Optional::Present(1).to_sequence(), vec![1]);
    /// assert_eq!(Optional::<i32>::Absent.to_sequence(), Vec::<i32>::new());
    /// ```
    #[inline]
    pub fn to_sequence(self) -> Vec<T> {
        self.into_iter().collect()
    }
}

// =============================================================================
// Default-based Operations
// =============================================================================

impl<T: Default> Optional<T> {
    /// Returns the contained value, or `T::default()` if absent.
    #[inline]
    pub fn get_or_default(self) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => T::default(),
        }
    }
}

// =============================================================================
// Nested Operations
// =============================================================================

impl<T> Optional<Optional<T>> {
    /// Removes one level of nesting.
    ///
    /// See [`Flatten`](super::Flatten) to remove every level at once.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rusty_results::container::Optional;
    ///
    /// let nested = Optional::Present(Optional::Present(Optional::Present(1)));
    /// assert_eq!(nested.flatten_one(), Optional::Present(Optional::Present(1)));
    /// ```
    #[inline]
    pub fn flatten_one(self) -> Optional<T> {
        match self {
            Self::Present(inner) => inner,
            Self::Absent => Optional::Absent,
        }
    }
}

impl<T, E> Optional<Outcome<T, E>> {
    /// Swaps an optional outcome into an outcome of an optional.
    ///
    /// - `Present(Success(v))` becomes `Success(Present(v))`
    /// - `Present(Failure(e))` becomes `Failure(e)`
    /// - `Absent` becomes `Success(Absent)`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rusty_results::container::{Optional, Outcome};
    ///
    /// let value: Optional<Outcome<i32, &str>> = Optional::Present(Outcome::Success(5));
    /// assert_eq!(value.to_result_transpose(), Outcome::Success(Optional::Present(5)));
    ///
    /// let value: Optional<Outcome<i32, &str>> = Optional::Absent;
    /// assert_eq!(value.to_result_transpose(), Outcome::Success(Optional::Absent));
    /// ```
    #[inline]
    pub fn to_result_transpose(self) -> Outcome<Optional<T>, E> {
        match self {
            Self::Present(Outcome::Success(value)) => Outcome::Success(Optional::Present(value)),
            Self::Present(Outcome::Failure(error)) => Outcome::Failure(error),
            Self::Absent => Outcome::Success(Optional::Absent),
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T> Default for Optional<T> {
    #[inline]
    fn default() -> Self {
        Self::Absent
    }
}

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => formatter.debug_tuple("Present").field(value).finish(),
            Self::Absent => formatter.write_str("Absent"),
        }
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.into())
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> From<Option<T>> for Optional<T> {
    /// Converts a standard `Option`: `Some(v)` becomes `Present(v)`, `None` becomes `Absent`.
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    /// Converts back into a standard `Option`.
    #[inline]
    fn from(optional: Optional<T>) -> Self {
        match optional {
            Optional::Present(value) => Some(value),
            Optional::Absent => None,
        }
    }
}

static_assertions::assert_impl_all!(Optional<i32>: Copy, Send, Sync, std::hash::Hash, Default);
static_assertions::assert_not_impl_any!(Optional<std::rc::Rc<i32>>: Send, Sync);
