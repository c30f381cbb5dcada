//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `Optional<_>` as a type constructor directly.
//! [`TypeConstructor`] records the payload type and how to re-apply the
//! constructor to another payload, which is what [`Functor`](super::Functor)
//! and [`Monad`](super::Monad) need to describe their results.
//!
//! # Example
//!
//! ```rust
//! use rusty_results::container::Optional;
//! use rusty_results::typeclass::TypeConstructor;
//!
//! fn empty_like<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let present: Optional<i32> = Optional::Present(42);
//! assert_eq!(empty_like(present), Optional::<String>::Absent);
//! ```

use crate::container::{Optional, Outcome};

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The payload type the constructor is currently applied to.
/// - `WithType<B>`: The same constructor applied to `B`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The payload type, for example `i32` for `Optional<i32>`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Optional<A> {
    type Inner = A;
    type WithType<B> = Optional<B>;
}

/// `Outcome<T, E>` is a type constructor over its success type; the error type is fixed.
impl<T, E> TypeConstructor for Outcome<T, E> {
    type Inner = T;
    type WithType<B> = Outcome<B, E>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_inner_type_is_correct() {
        fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
        assert_inner::<Optional<i32>>();
    }

    #[test]
    fn outcome_with_type_preserves_error_type() {
        fn assert_outcome_with_type<T, E, B>()
        where
            Outcome<T, E>: TypeConstructor<Inner = T, WithType<B> = Outcome<B, E>>,
        {
        }

        assert_outcome_with_type::<i32, String, bool>();
        assert_outcome_with_type::<String, (), i32>();
    }
}
