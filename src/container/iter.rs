//! Iterators over the zero-or-one payload of a container.
//!
//! `Optional::Present` and `Outcome::Success` yield their value once;
//! `Optional::Absent` and `Outcome::Failure` yield nothing.

use std::iter::FusedIterator;

/// A borrowing iterator over the payload of an `Optional` or `Outcome`.
///
/// Created by `Optional::iter` and `Outcome::iter`.
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: Option<&'a T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) const fn new(inner: Option<&'a T>) -> Self {
        Self { inner }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(self.inner.is_some());
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// An owning iterator over the payload of an `Optional` or `Outcome`.
///
/// Created by the `IntoIterator` impls of both containers.
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    inner: Option<T>,
}

impl<T> IntoIter<T> {
    pub(crate) const fn new(inner: Option<T>) -> Self {
        Self { inner }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(self.inner.is_some());
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn into_iter_yields_once() {
        let mut iterator = IntoIter::new(Some(7));
        assert_eq!(iterator.len(), 1);
        assert_eq!(iterator.next(), Some(7));
        assert_eq!(iterator.len(), 0);
        assert_eq!(iterator.next(), None);
        assert_eq!(iterator.next(), None);
    }

    #[rstest]
    fn iter_on_nothing_is_empty() {
        let mut iterator: Iter<'_, i32> = Iter::new(None);
        assert_eq!(iterator.size_hint(), (0, Some(0)));
        assert_eq!(iterator.next_back(), None);
    }
}
