//! Functor type class - mapping over the payload of a container.
//!
//! # Laws
//!
//! - **Identity**: `fa.fmap(|x| x) == fa`
//! - **Composition**: `fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))`
//!
//! # Examples
//!
//! ```rust
//! use rusty_results::container::{Optional, Outcome};
//! use rusty_results::typeclass::Functor;
//!
//! assert_eq!(Optional::Present(2).fmap(|x| x + 1), Optional::Present(3));
//!
//! let failure: Outcome<i32, String> = Outcome::Failure("bad".to_string());
//! assert_eq!(failure.fmap_ref(|x| x + 1), Outcome::Failure("bad".to_string()));
//! ```

use super::higher::TypeConstructor;
use crate::container::{Optional, Outcome};

/// A type class for containers whose payload can be mapped.
pub trait Functor: TypeConstructor {
    /// Applies `function` to the payload, consuming the container.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies `function` to a reference to the payload.
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the payload with `value`.
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the payload, keeping only the shape.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

// =============================================================================
// Optional<A> Implementation
// =============================================================================

impl<A> Functor for Optional<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Optional<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

// =============================================================================
// Outcome<T, E> Implementation
// =============================================================================

impl<T, E: Clone> Functor for Outcome<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(&T) -> B,
    {
        match self {
            Self::Success(value) => Outcome::Success(function(value)),
            Self::Failure(error) => Outcome::Failure(error.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn optional_fmap_present() {
        assert_eq!(Optional::Present(5).fmap(|x| x * 2), Optional::Present(10));
    }

    #[rstest]
    fn optional_fmap_ref_does_not_consume() {
        let value = Optional::Present("hello".to_string());
        let length = value.fmap_ref(String::len);
        assert_eq!(length, Optional::Present(5));
        assert!(value.is_present());
    }

    #[rstest]
    fn outcome_void_keeps_failure() {
        let failure: Outcome<i32, &str> = Outcome::Failure("e");
        assert_eq!(failure.void(), Outcome::Failure("e"));
    }

    #[rstest]
    fn outcome_replace_success() {
        let success: Outcome<i32, &str> = Outcome::Success(1);
        assert_eq!(success.replace("x"), Outcome::Success("x"));
    }
}
