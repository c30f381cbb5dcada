//! Monad type class - sequencing computations that produce containers.
//!
//! # Laws
//!
//! - **Left identity**: `pure(a).flat_map(f) == f(a)`
//! - **Right identity**: `m.flat_map(pure) == m`
//! - **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`

use super::functor::Functor;
use crate::container::{Optional, Outcome};

/// A type class for containers that can be chained.
///
/// # Examples
///
/// ```rust
/// use rusty_results::container::Optional;
/// use rusty_results::typeclass::Monad;
///
/// let value = <Optional<()>>::pure(4);
/// let halved = value.flat_map(|x| if x % 2 == 0 { Optional::Present(x / 2) } else { Optional::Absent });
/// assert_eq!(halved, Optional::Present(2));
/// ```
pub trait Monad: Functor {
    /// Lifts a plain value into the container.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Feeds the payload to `function` and returns its container.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Sequences `next` after `self`, discarding the payload of `self`.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<A> Monad for Optional<A> {
    #[inline]
    fn pure<B>(value: B) -> Optional<B> {
        Optional::Present(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(A) -> Optional<B>,
    {
        self.and_then(function)
    }
}

impl<T, E: Clone> Monad for Outcome<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Outcome<B, E> {
        Outcome::Success(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(T) -> Outcome<B, E>,
    {
        self.and_then(function)
    }
}
