//! Bifunctor type class - mapping over both channels of a two-sided container.
//!
//! `Outcome<T, E>` is implemented as `Bifunctor<E, T>`:
//! - `first` transforms the error, like `map_error`
//! - `second` transforms the success value, like `map`
//!
//! This ordering keeps `second` consistent with `Functor::fmap`.
//!
//! # Laws
//!
//! - **Identity**: `x.bimap(|a| a, |b| b) == x`
//! - **Composition**: `x.bimap(f1, g1).bimap(f2, g2) == x.bimap(|a| f2(f1(a)), |b| g2(g1(b)))`
//!
//! # Examples
//!
//! ```rust
//! use rusty_results::container::Outcome;
//! use rusty_results::typeclass::Bifunctor;
//!
//! let failure: Outcome<i32, &str> = Outcome::Failure("bad");
//! assert_eq!(failure.bimap(str::len, |x| x * 2), Outcome::Failure(3));
//!
//! let success: Outcome<i32, &str> = Outcome::Success(21);
//! assert_eq!(success.bimap(str::len, |x| x * 2), Outcome::Success(42));
//! ```

use crate::container::Outcome;

/// A type class for containers with two mappable channels.
pub trait Bifunctor<A, B> {
    /// The same container with both channels re-typed.
    type Target<C, D>;

    /// Applies `first_function` to the first channel or `second_function` to the second.
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D;

    /// Maps only the first channel.
    #[inline]
    fn first<C, F>(self, function: F) -> Self::Target<C, B>
    where
        F: FnOnce(A) -> C,
        Self: Sized,
    {
        self.bimap(function, |b| b)
    }

    /// Maps only the second channel.
    #[inline]
    fn second<D, G>(self, function: G) -> Self::Target<A, D>
    where
        G: FnOnce(B) -> D,
        Self: Sized,
    {
        self.bimap(|a| a, function)
    }

    /// Like [`Bifunctor::bimap`], without consuming the container.
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(&A) -> C,
        G: FnOnce(&B) -> D;
}

impl<T, E> Bifunctor<E, T> for Outcome<T, E> {
    type Target<C, D> = Outcome<D, C>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Outcome<D, C>
    where
        F: FnOnce(E) -> C,
        G: FnOnce(T) -> D,
    {
        match self {
            Self::Success(value) => Outcome::Success(second_function(value)),
            Self::Failure(error) => Outcome::Failure(first_function(error)),
        }
    }

    #[inline]
    fn first<C, F>(self, function: F) -> Outcome<T, C>
    where
        F: FnOnce(E) -> C,
    {
        self.map_error(function)
    }

    #[inline]
    fn second<D, G>(self, function: G) -> Outcome<D, E>
    where
        G: FnOnce(T) -> D,
    {
        self.map(function)
    }

    #[inline]
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Outcome<D, C>
    where
        F: FnOnce(&E) -> C,
        G: FnOnce(&T) -> D,
    {
        match self {
            Self::Success(value) => Outcome::Success(second_function(value)),
            Self::Failure(error) => Outcome::Failure(first_function(error)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn first_transforms_error() {
        let failure: Outcome<i32, i32> = Outcome::Failure(2);
        assert_eq!(failure.first(|e| e * 10), Outcome::Failure(20));
    }

    #[rstest]
    fn second_leaves_failure_unchanged() {
        let failure: Outcome<i32, i32> = Outcome::Failure(2);
        assert_eq!(failure.second(|v| v * 10), Outcome::Failure(2));
    }

    #[rstest]
    fn bimap_ref_does_not_consume() {
        let success: Outcome<String, String> = Outcome::Success("abc".to_string());
        let lengths = success.bimap_ref(String::len, String::len);
        assert_eq!(lengths, Outcome::Success(3));
        assert!(success.is_success());
    }
}
