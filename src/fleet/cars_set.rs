//! Insertion-ordered set backed by a growable array.
//!
//! This module provides [`CarsSet`], a duplicate-free collection that keeps
//! elements in the order they were first inserted. Uniqueness is decided by
//! `PartialEq` alone through a linear scan; no hashing is involved.
//!
//! # Storage
//!
//! Elements live in a fixed-length slot array. The first `len` slots hold
//! elements, every slot after them is empty. When all slots are taken the
//! array grows to `max(15, floor(capacity * 1.3))` slots.
//!
//! # Time Complexity
//!
//! | Operation     | Complexity          |
//! |---------------|---------------------|
//! | `len`         | O(1)                |
//! | `contains`    | O(n)                |
//! | `add`         | O(n), amortized growth |
//! | `remove`      | O(n)                |
//! | `add_all`     | O(n * m)            |
//! | `retain_all`  | O(n) membership checks |
//! | `remove_all`  | O(n) membership checks |
//! | `clear`       | O(n)                |
//!
//! # Examples
//!
//! ```rust
//! use taxi_fleet::cars::Car;
//! use taxi_fleet::fleet::CarsSet;
//!
//! let camry = Car::sedan("Camry", 7.5, 180.0, 28000.0).unwrap();
//! let volt = Car::electric("Volt", 18.5, 150.0, 35000.0).unwrap();
//!
//! let mut set = CarsSet::new();
//! assert!(set.add(camry.clone()));
//! assert!(set.add(volt.clone()));
//! assert!(!set.add(camry.clone())); // already present
//!
//! assert_eq!(set.len(), 2);
//! let models: Vec<&str> = set.iter().map(Car::model).collect();
//! assert_eq!(models, vec!["Camry", "Volt"]);
//!
//! assert!(set.remove(&camry));
//! assert!(!set.contains(&camry));
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::iter::FusedIterator;

use super::Membership;
use crate::cars::Car;

/// Number of slots allocated by [`CarsSet::new`].
pub const INITIAL_CAPACITY: usize = 15;

// Growth factor 1.3 expressed as a ratio so capacity stays integral.
const GROWTH_NUMERATOR: usize = 13;
const GROWTH_DENOMINATOR: usize = 10;

static_assertions::const_assert!(INITIAL_CAPACITY > 0);
static_assertions::const_assert!(GROWTH_NUMERATOR > GROWTH_DENOMINATOR);

/// Returns the capacity that follows `current` when the set is full.
#[inline]
const fn grown_capacity(current: usize) -> usize {
    let whole = (current / GROWTH_DENOMINATOR).saturating_mul(GROWTH_NUMERATOR);
    let fraction = (current % GROWTH_DENOMINATOR) * GROWTH_NUMERATOR / GROWTH_DENOMINATOR;
    let scaled = whole.saturating_add(fraction);
    if scaled > INITIAL_CAPACITY {
        scaled
    } else {
        INITIAL_CAPACITY
    }
}

/// A duplicate-free collection that iterates in insertion order.
///
/// Two elements are duplicates when they compare equal with `PartialEq`. For
/// [`Car`] that is structural equality over the category, model and numeric
/// attributes.
///
/// # Type Parameters
///
/// * `T` - The element type. Defaults to [`Car`].
///
/// # Examples
///
/// ```rust
/// use taxi_fleet::fleet::CarsSet;
///
/// // Built from a collection: duplicates are dropped, first-seen order kept
/// let set: CarsSet<i32> = [3, 1, 3, 2, 1].into_iter().collect();
/// let elements: Vec<i32> = set.iter().copied().collect();
/// assert_eq!(elements, vec![3, 1, 2]);
/// ```
pub struct CarsSet<T = Car> {
    slots: Vec<Option<T>>,
    len: usize,
}

impl<T> CarsSet<T> {
    /// Creates an empty set with room for 15 elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use taxi_fleet::fleet::CarsSet;
    ///
    /// let set: CarsSet = CarsSet::new();
    /// assert!(set.is_empty());
    /// assert_eq!(set.capacity(), 15);
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    /// Creates an empty set with room for `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self { slots, len: 0 }
    }

    /// Returns the number of elements in the set.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots in the backing array.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns an iterator over the elements in insertion order.
    ///
    /// The borrow of the set lasts as long as the iterator, so the set cannot
    /// change while it is being iterated.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> CarsSetIterator<'_, T> {
        CarsSetIterator {
            inner: self.slots[..self.len].iter(),
        }
    }

    /// Removes every element, dropping each one. The capacity is kept.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use taxi_fleet::fleet::CarsSet;
    ///
    /// let mut set: CarsSet<i32> = (0..20).collect();
    /// let capacity = set.capacity();
    /// set.clear();
    /// assert!(set.is_empty());
    /// assert_eq!(set.capacity(), capacity);
    /// ```
    pub fn clear(&mut self) {
        self.slots[..self.len].fill_with(|| None);
        self.len = 0;
    }

    fn push_unchecked(&mut self, element: T) {
        if self.len == self.slots.len() {
            let new_capacity = grown_capacity(self.slots.len());
            debug_assert!(new_capacity > self.slots.len(), "set storage cannot grow");
            tracing::trace!(
                from = self.slots.len(),
                to = new_capacity,
                "growing set storage"
            );
            self.slots.resize_with(new_capacity, || None);
        }
        self.slots[self.len] = Some(element);
        self.len += 1;
    }

    /// Keeps the elements for which `keep` returns `true`, in order.
    ///
    /// Returns `true` if any element was dropped.
    fn compact<F>(&mut self, mut keep: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        let original_len = self.len;
        let mut compaction = Compaction {
            slots: &mut self.slots,
            len: &mut self.len,
            read: 0,
            write: 0,
            original_len,
        };

        while compaction.read < original_len {
            let kept = compaction.slots[compaction.read]
                .as_ref()
                .is_some_and(&mut keep);
            if kept {
                compaction.slots.swap(compaction.read, compaction.write);
                compaction.write += 1;
            }
            compaction.read += 1;
        }

        compaction.write != original_len
    }
}

/// Finishes a bulk removal, including when a membership check panics.
///
/// Slots `write..read` hold dropped elements, slots `read..original_len` hold
/// elements that were never examined. On drop the unexamined elements are
/// moved down behind the kept ones, the remaining slots are cleared and the
/// length is updated.
struct Compaction<'a, T> {
    slots: &'a mut [Option<T>],
    len: &'a mut usize,
    read: usize,
    write: usize,
    original_len: usize,
}

impl<T> Drop for Compaction<'_, T> {
    fn drop(&mut self) {
        let mut write = self.write;
        for read in self.read..self.original_len {
            self.slots.swap(read, write);
            write += 1;
        }
        self.slots[write..self.original_len].fill_with(|| None);
        *self.len = write;
    }
}

impl<T: PartialEq> CarsSet<T> {
    /// Returns `true` if the set contains an element equal to `element`.
    ///
    /// # Complexity
    ///
    /// O(n) linear scan.
    #[must_use]
    pub fn contains(&self, element: &T) -> bool {
        self.iter().any(|item| item == element)
    }

    /// Appends `element` unless an equal element is already present.
    ///
    /// Returns `true` if the set changed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use taxi_fleet::fleet::CarsSet;
    ///
    /// let mut set = CarsSet::new();
    /// assert!(set.add("a"));
    /// assert!(!set.add("a"));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn add(&mut self, element: T) -> bool {
        if self.contains(&element) {
            return false;
        }
        self.push_unchecked(element);
        true
    }

    /// Removes the element equal to `element`, shifting later elements left.
    ///
    /// Returns `true` if an element was removed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use taxi_fleet::fleet::CarsSet;
    ///
    /// let mut set: CarsSet<i32> = [1, 2, 3].into();
    /// assert!(set.remove(&2));
    /// assert!(!set.remove(&2));
    /// assert_eq!(set.to_vec(), vec![1, 3]);
    /// ```
    pub fn remove(&mut self, element: &T) -> bool {
        let Some(position) = self.iter().position(|item| item == element) else {
            return false;
        };
        self.slots[position..self.len].rotate_left(1);
        self.len -= 1;
        self.slots[self.len] = None;
        true
    }

    /// Returns `true` if every element yielded by `elements` is in the set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use taxi_fleet::fleet::CarsSet;
    ///
    /// let set: CarsSet<i32> = [1, 2, 3].into();
    /// assert!(set.contains_all(&[3, 1]));
    /// assert!(!set.contains_all(&[3, 4]));
    /// assert!(set.contains_all(Vec::<i32>::new()));
    /// ```
    pub fn contains_all<I>(&self, elements: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        elements
            .into_iter()
            .all(|element| self.contains(element.borrow()))
    }

    /// Adds every element yielded by `elements`.
    ///
    /// Returns `true` if at least one element was added.
    pub fn add_all<I>(&mut self, elements: I) -> bool
    where
        I: IntoIterator<Item = T>,
    {
        elements
            .into_iter()
            .fold(false, |modified, element| self.add(element) | modified)
    }

    /// Keeps only the elements that are members of `collection`.
    ///
    /// The relative order of kept elements is preserved. Returns `true` if
    /// the set changed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use taxi_fleet::fleet::CarsSet;
    ///
    /// let mut set: CarsSet<i32> = [1, 2, 3, 4].into();
    /// assert!(set.retain_all(&[4, 2, 9]));
    /// assert_eq!(set.to_vec(), vec![2, 4]);
    /// assert!(!set.retain_all(&[4, 2]));
    /// ```
    pub fn retain_all<M>(&mut self, collection: &M) -> bool
    where
        M: Membership<T> + ?Sized,
    {
        self.compact(|element| collection.has(element))
    }

    /// Removes every element that is a member of `collection`.
    ///
    /// The relative order of remaining elements is preserved. Returns `true`
    /// if the set changed.
    pub fn remove_all<M>(&mut self, collection: &M) -> bool
    where
        M: Membership<T> + ?Sized,
    {
        self.compact(|element| !collection.has(element))
    }
}

impl<T: Clone> CarsSet<T> {
    /// Returns the elements in insertion order as a new vector of exactly
    /// `len()` elements.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    /// Copies the elements into `buffer`, reusing it when it is large enough.
    ///
    /// If `buffer` holds at least `len()` slots, the elements overwrite its
    /// prefix and, when it is strictly larger, the slot right after the last
    /// element is set to `None`. Slots beyond that one are left untouched.
    /// Otherwise a new vector of exactly `len()` slots is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use taxi_fleet::fleet::CarsSet;
    ///
    /// let set: CarsSet<i32> = [1, 2].into();
    ///
    /// let reused = set.to_array_in(vec![Some(7); 4]);
    /// assert_eq!(reused, vec![Some(1), Some(2), None, Some(7)]);
    ///
    /// let fresh = set.to_array_in(Vec::new());
    /// assert_eq!(fresh, vec![Some(1), Some(2)]);
    /// ```
    #[must_use]
    pub fn to_array_in(&self, mut buffer: Vec<Option<T>>) -> Vec<Option<T>> {
        if buffer.len() < self.len {
            return self.slots[..self.len].to_vec();
        }
        buffer[..self.len].clone_from_slice(&self.slots[..self.len]);
        if buffer.len() > self.len {
            buffer[self.len] = None;
        }
        buffer
    }
}

impl<T> Default for CarsSet<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Copies the elements into a new set whose capacity equals their count.
impl<T: Clone> Clone for CarsSet<T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots[..self.len].to_vec(),
            len: self.len,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for CarsSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for CarsSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("[")?;
        for (index, element) in self.iter().enumerate() {
            if index > 0 {
                formatter.write_str(", ")?;
            }
            write!(formatter, "{element}")?;
        }
        formatter.write_str("]")
    }
}

/// Set equality: same length and every element of one is in the other.
/// Insertion order is not compared.
impl<T: PartialEq> PartialEq for CarsSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().all(|element| other.contains(element))
    }
}

impl<T: Eq> Eq for CarsSet<T> {}

impl<T: PartialEq> Membership<T> for CarsSet<T> {
    #[inline]
    fn has(&self, element: &T) -> bool {
        self.contains(element)
    }
}

impl<T: PartialEq> FromIterator<T> for CarsSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.add_all(iter);
        set
    }
}

impl<T: PartialEq> Extend<T> for CarsSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl<T: PartialEq> From<Vec<T>> for CarsSet<T> {
    fn from(elements: Vec<T>) -> Self {
        elements.into_iter().collect()
    }
}

impl<T: PartialEq, const N: usize> From<[T; N]> for CarsSet<T> {
    fn from(elements: [T; N]) -> Self {
        elements.into_iter().collect()
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over references to the elements of a [`CarsSet`], in insertion
/// order.
pub struct CarsSetIterator<'a, T> {
    inner: std::slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iterator for CarsSetIterator<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.find_map(|slot| slot.as_ref())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for CarsSetIterator<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.rfind(|slot| slot.is_some())?.as_ref()
    }
}

impl<T> ExactSizeIterator for CarsSetIterator<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for CarsSetIterator<'_, T> {}

/// Owning iterator over the elements of a [`CarsSet`], in insertion order.
pub struct CarsSetIntoIterator<T> {
    inner: std::iter::Flatten<std::vec::IntoIter<Option<T>>>,
    remaining: usize,
}

impl<T> Iterator for CarsSetIntoIterator<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let element = self.inner.next()?;
        self.remaining -= 1;
        Some(element)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for CarsSetIntoIterator<T> {
    #[inline]
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for CarsSetIntoIterator<T> {}

impl<T> IntoIterator for CarsSet<T> {
    type Item = T;
    type IntoIter = CarsSetIntoIterator<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        self.slots.truncate(self.len);
        CarsSetIntoIterator {
            inner: self.slots.into_iter().flatten(),
            remaining: self.len,
        }
    }
}

impl<'a, T> IntoIterator for &'a CarsSet<T> {
    type Item = &'a T;
    type IntoIter = CarsSetIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for CarsSet<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
struct CarsSetVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for CarsSetVisitor<T>
where
    T: serde::Deserialize<'de> + PartialEq,
{
    type Value = CarsSet<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut set = CarsSet::new();
        while let Some(element) = seq.next_element()? {
            set.add(element);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for CarsSet<T>
where
    T: serde::Deserialize<'de> + PartialEq,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(CarsSetVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
