//! Recursive flattening of nested containers.
//!
//! `flatten_one` removes a single level of nesting. [`Flatten::flatten`]
//! keeps removing levels until the payload is no longer a container of the
//! same kind, which is detected at the type level through the [`Leaf`]
//! marker:
//!
//! ```text
//! Optional<Optional<Optional<T>>>  --flatten_one-->  Optional<Optional<T>>
//!                                  --flatten_one-->  Optional<T>            (T: Leaf, stop)
//! ```
//!
//! Flattening an already flat container returns it unchanged, so
//! `x.flatten().flatten() == x.flatten()`.
//!
//! # Examples
//!
//! ```rust
//! use rusty_results::container::{Flatten, Optional, Outcome};
//!
//! let nested = Optional::Present(Optional::Present(Optional::Present(3)));
//! assert_eq!(nested.flatten(), Optional::Present(3));
//!
//! let nested: Outcome<Outcome<i32, &str>, &str> = Outcome::Success(Outcome::Failure("inner"));
//! assert_eq!(nested.flatten(), Outcome::Failure("inner"));
//! ```
//!
//! User-defined payload types opt in by implementing [`Leaf`]:
//!
//! ```rust
//! use rusty_results::container::{Flatten, Leaf, Optional};
//!
//! #[derive(Debug, PartialEq)]
//! struct Port(u16);
//!
//! impl Leaf for Port {}
//!
//! let nested = Optional::Present(Optional::Present(Port(80)));
//! assert_eq!(nested.flatten(), Optional::Present(Port(80)));
//! ```

use super::optional::Optional;
use super::outcome::Outcome;

/// Marker for payload types that terminate flattening.
///
/// Never implement this for `Optional` or `Outcome`. Same-kind nesting is
/// what [`Flatten`] removes, and a container of the other kind already stops
/// flattening.
pub trait Leaf {}

/// Removes every level of same-kind nesting from a container.
pub trait Flatten {
    /// The fully flattened container type.
    type Output;

    /// Repeatedly applies `flatten_one` until the payload is a [`Leaf`].
    fn flatten(self) -> Self::Output;
}

impl<T: Leaf> Flatten for Optional<T> {
    type Output = Self;

    #[inline]
    fn flatten(self) -> Self {
        self
    }
}

impl<T> Flatten for Optional<Optional<T>>
where
    Optional<T>: Flatten,
{
    type Output = <Optional<T> as Flatten>::Output;

    #[inline]
    fn flatten(self) -> Self::Output {
        self.flatten_one().flatten()
    }
}

impl<T: Leaf, E> Flatten for Outcome<T, E> {
    type Output = Self;

    #[inline]
    fn flatten(self) -> Self {
        self
    }
}

impl<T, E> Flatten for Outcome<Outcome<T, E>, E>
where
    Outcome<T, E>: Flatten,
{
    type Output = <Outcome<T, E> as Flatten>::Output;

    #[inline]
    fn flatten(self) -> Self::Output {
        self.flatten_one().flatten()
    }
}

// A container of the other kind stops flattening.

impl<T, E> Flatten for Optional<Outcome<T, E>> {
    type Output = Self;

    #[inline]
    fn flatten(self) -> Self {
        self
    }
}

impl<T, E> Flatten for Outcome<Optional<T>, E> {
    type Output = Self;

    #[inline]
    fn flatten(self) -> Self {
        self
    }
}

macro_rules! impl_leaf {
    ($($type:ty),* $(,)?) => {
        $(impl Leaf for $type {})*
    };
}

impl_leaf!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    String,
    std::path::PathBuf,
);

impl<T: ?Sized> Leaf for &T {}
impl<T: ?Sized> Leaf for &mut T {}
impl<T, const N: usize> Leaf for [T; N] {}
impl<T> Leaf for Vec<T> {}
impl<T: ?Sized> Leaf for Box<T> {}
impl<T: ?Sized> Leaf for std::rc::Rc<T> {}
impl<T: ?Sized> Leaf for std::sync::Arc<T> {}
impl<T> Leaf for Option<T> {}
impl<T, E> Leaf for Result<T, E> {}
impl<K, V, S> Leaf for std::collections::HashMap<K, V, S> {}
impl<K, V> Leaf for std::collections::BTreeMap<K, V> {}
impl<T, S> Leaf for std::collections::HashSet<T, S> {}
impl<T> Leaf for std::collections::BTreeSet<T> {}

macro_rules! impl_leaf_tuple {
    ($($name:ident),+) => {
        impl<$($name),+> Leaf for ($($name,)+) {}
    };
}

impl_leaf_tuple!(A);
impl_leaf_tuple!(A, B);
impl_leaf_tuple!(A, B, C);
impl_leaf_tuple!(A, B, C, D);
impl_leaf_tuple!(A, B, C, D, E);
impl_leaf_tuple!(A, B, C, D, E, F);
impl_leaf_tuple!(A, B, C, D, E, F, G);
impl_leaf_tuple!(A, B, C, D, E, F, G, H);
