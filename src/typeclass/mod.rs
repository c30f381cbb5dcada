//! Type class instances for the containers.
//!
//! Rust has no higher-kinded types, so the type classes are encoded with
//! Generic Associated Types through [`TypeConstructor`]:
//!
//! - [`Functor`]: mapping over the payload
//! - [`Monad`]: lifting values and sequencing with `flat_map`
//! - [`Bifunctor`]: mapping both channels of an `Outcome`
//!
//! # Examples
//!
//! ```rust
//! use rusty_results::container::{Optional, Outcome};
//! use rusty_results::typeclass::{Functor, Monad, TypeConstructor};
//!
//! fn increment_all<M>(container: M) -> M::WithType<i32>
//! where
//!     M: Functor + TypeConstructor<Inner = i32>,
//! {
//!     container.fmap(|x| x + 1)
//! }
//!
//! assert_eq!(increment_all(Optional::Present(1)), Optional::Present(2));
//! assert_eq!(increment_all(Outcome::<i32, String>::Success(1)), Outcome::Success(2));
//!
//! let chained = Optional::Present(3).flat_map(|x| Optional::Present(x * 3));
//! assert_eq!(chained, Optional::Present(9));
//! ```

mod bifunctor;
mod functor;
mod higher;
mod monad;

pub use bifunctor::Bifunctor;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
