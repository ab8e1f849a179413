//! Membership queries used by bulk set operations.
//!
//! [`CarsSet::retain_all`](super::CarsSet::retain_all) and
//! [`CarsSet::remove_all`](super::CarsSet::remove_all) only need to ask
//! whether an element is present in the argument collection. This trait is
//! that single question, so any collection type can be passed without first
//! converting it into a `CarsSet`.

use std::collections::{BTreeSet, HashSet};
use std::hash::{BuildHasher, Hash};

/// A collection that can answer whether it holds a given element.
///
/// # Examples
///
/// ```rust
/// use taxi_fleet::fleet::Membership;
///
/// let numbers = vec![1, 2, 3];
/// assert!(numbers.has(&2));
/// assert!(!numbers.has(&4));
/// ```
pub trait Membership<T> {
    /// Returns `true` if `element` is a member of this collection.
    fn has(&self, element: &T) -> bool;
}

impl<T: PartialEq> Membership<T> for [T] {
    #[inline]
    fn has(&self, element: &T) -> bool {
        self.contains(element)
    }
}

impl<T: PartialEq, const N: usize> Membership<T> for [T; N] {
    #[inline]
    fn has(&self, element: &T) -> bool {
        self.contains(element)
    }
}

impl<T: PartialEq> Membership<T> for Vec<T> {
    #[inline]
    fn has(&self, element: &T) -> bool {
        self.as_slice().contains(element)
    }
}

impl<T: Eq + Hash, S: BuildHasher> Membership<T> for HashSet<T, S> {
    #[inline]
    fn has(&self, element: &T) -> bool {
        self.contains(element)
    }
}

impl<T: Ord> Membership<T> for BTreeSet<T> {
    #[inline]
    fn has(&self, element: &T) -> bool {
        self.contains(element)
    }
}

impl<T, M: Membership<T> + ?Sized> Membership<T> for &M {
    #[inline]
    fn has(&self, element: &T) -> bool {
        (**self).has(element)
    }
}
