//! Sum-type containers and their combinators.
//!
//! - [`Optional`]: a value or nothing (`Present` / `Absent`)
//! - [`Outcome`]: a success or a failure (`Success` / `Failure`)
//! - [`Flatten`]: removes every level of same-kind nesting
//! - [`UnwrapError`], [`TypeMismatchError`]: the only failures the containers report
//!
//! Both containers are immutable value types. Every combinator consumes the
//! container and returns a new one; only the "unwrap" family can fail.
//!
//! # Examples
//!
//! ```rust
//! use rusty_results::container::{Optional, Outcome};
//!
//! let user_id: Optional<u32> = Optional::Present(7);
//! let lookup = |id: u32| -> Outcome<String, String> {
//!     if id == 7 { Outcome::Success("ferris".to_string()) } else { Outcome::Failure(format!("no user {id}")) }
//! };
//!
//! let name = user_id.map(lookup).to_result_transpose();
//! assert_eq!(name, Outcome::Success(Optional::Present("ferris".to_string())));
//! ```

mod error;
mod flatten;
mod iter;
mod optional;
mod outcome;

pub use error::{TypeMismatchError, UnwrapError};
pub use flatten::{Flatten, Leaf};
pub use iter::{IntoIter, Iter};
pub use optional::Optional;
pub use outcome::Outcome;
