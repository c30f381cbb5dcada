//! # rusty_results
//!
//! Sum-type containers for values that may be missing and computations that
//! may fail, with a combinator vocabulary over both.
//!
//! ## Overview
//!
//! - **Containers**: [`Optional`](container::Optional) (`Present` / `Absent`) and
//!   [`Outcome`](container::Outcome) (`Success` / `Failure`)
//! - **Combinators**: mapping, chaining, fallbacks, zipping, flattening,
//!   transposition and explicit unwrapping
//! - **Type Classes**: Functor, Monad and Bifunctor instances for both containers
//! - **Structural Bridge**: encoding to and validating from a `{key: payload}`
//!   mapping, with serde support
//!
//! ## Feature Flags
//!
//! - `typeclass` (default): Functor, Monad and Bifunctor instances
//! - `serde`: the structural bridge and `Serialize` / `Deserialize` impls
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use rusty_results::prelude::*;
//!
//! let parsed: Optional<i32> = "42".parse::<i32>().ok().into();
//! let checked = parsed
//!     .filter(|value| *value > 0)
//!     .to_result("not a positive number");
//!
//! assert_eq!(checked, Success(42));
//! assert_eq!(Failure::<i32, _>(0).or_else(|e| Success::<i32, i32>(e + 10)), Success(10));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the containers with their variants, and the type classes and
/// bridge when their features are enabled.
///
/// # Usage
///
/// ```rust
/// use rusty_results::prelude::*;
///
/// assert!(Present(1).is_present());
/// assert!(Absent::<i32>.is_absent());
/// ```
pub mod prelude {
    pub use crate::container::Optional::{self, Absent, Present};
    pub use crate::container::Outcome::{self, Failure, Success};
    pub use crate::container::{Flatten, Leaf, TypeMismatchError, UnwrapError};

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "serde")]
    pub use crate::bridge::*;
}

pub mod container;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "serde")]
pub mod bridge;
