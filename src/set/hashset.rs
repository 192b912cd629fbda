//! Hash-backed mathematical set.
//!
//! This module provides [`Set`], an unordered collection of unique
//! elements stored in a hash table whose entries are kept densely packed,
//! so that `add`, `remove`, `contains` and `pop` run in expected O(1) time.
//!
//! # Overview
//!
//! Operations come in two families:
//!
//! - **Mutating**: `add`, `remove`, `pop`, `clear`, `update`,
//!   `difference_update`, `intersection_update`,
//!   `symmetric_difference_update` change the set in place
//! - **Derived**: `union`, `difference`, `intersection`,
//!   `symmetric_difference` clone the set, apply the matching update to the
//!   clone and return it, leaving the receiver and all sources untouched
//!
//! Arguments are read-only: no operation ever modifies a set or collection
//! passed to it.
//!
//! # Examples
//!
//! ```rust
//! use setwise::set::Set;
//!
//! let mut set: Set<i32> = (1..=250).collect();
//! set.difference_update([126..=250]);
//! assert_eq!(set.count(), 125);
//!
//! let wider = set.union([vec![500, 501]]);
//! assert_eq!(set.count(), 125);   // Receiver unchanged
//! assert_eq!(wider.count(), 127); // New set
//! ```
//!
//! # Iteration and Mutation
//!
//! [`Set::iter`] borrows the set, so the borrow checker rejects any attempt
//! to mutate a set while one of its iterators is alive. Iteration order is
//! unspecified and may differ between two sets holding the same elements;
//! use [`Set::to_sorted_vec`] or the `Display` form for a deterministic
//! order.
//!
//! # Thread Safety
//!
//! `Set<T>` is `Send` and `Sync` exactly when `T` and the hash builder are.
//! Mutation needs `&mut Set<T>`, so unsynchronized concurrent mutation does
//! not compile; shared `&Set<T>` reads from several threads are sound.

use std::borrow::Borrow;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::iter::{FromIterator, FusedIterator};

use indexmap::IndexSet;
use indexmap::set as index_set;

use super::DefaultHashBuilder;
use super::EmptySetError;
#[cfg(feature = "typeclass")]
use crate::typeclass::{Foldable, Monoid, Semigroup};

// =============================================================================
// Set Definition
// =============================================================================

/// An unordered collection of unique elements.
///
/// Elements must implement [`Hash`] and [`Eq`]; two elements that compare
/// equal are never both members. The set owns its elements, and cloning a
/// set produces an independent copy.
///
/// # Time Complexity
///
/// | Operation                     | Complexity (expected)   |
/// |-------------------------------|-------------------------|
/// | `new`                         | O(1)                    |
/// | `contains` / `add` / `remove` | O(1)                    |
/// | `count` / `is_empty`          | O(1)                    |
/// | `pop`                         | O(1)                    |
/// | `update` / `difference_update`| O(total source length)  |
/// | `intersection_update`         | O(total source length)  |
/// | `union` / `difference` / `intersection` | O(n + total source length) |
/// | `symmetric_difference`        | O(n + m)                |
/// | `is_superset`                 | O(min(n, m)), short-circuits |
/// | `is_subset` / `equals`        | O(n + m)                |
/// | `is_disjoint`                 | O(m), short-circuits    |
///
/// # Examples
///
/// ```rust
/// use setwise::set::Set;
///
/// let set = Set::singleton(42);
/// assert!(set.contains(&42));
/// assert!(!set.contains(&0));
/// ```
#[derive(Clone)]
pub struct Set<T, S = DefaultHashBuilder> {
    elements: IndexSet<T, S>,
}

// Shared reads are safe across threads when the elements allow it
static_assertions::assert_impl_all!(Set<i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Set<String>: Send, Sync, Clone);
static_assertions::assert_not_impl_any!(Set<std::rc::Rc<i32>>: Send, Sync);

impl<T> Set<T> {
    /// Creates a new empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::Set;
    ///
    /// let set: Set<i32> = Set::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }

    /// Creates an empty set with room for at least `capacity` elements.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
    }
}

impl<T: Hash + Eq> Set<T> {
    /// Creates a set containing a single element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::Set;
    ///
    /// let set = Set::singleton("only");
    /// assert_eq!(set.count(), 1);
    /// ```
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        let mut set = Self::with_capacity(1);
        set.add(element);
        set
    }
}

impl<T: Clone + Hash + Eq> Set<T> {
    /// Creates a set from any source, consuming it exactly once.
    ///
    /// The source may be another set, a native sequence or any iterator.
    /// Duplicate values are absorbed silently.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::Set;
    ///
    /// let from_vector: Set<i32> = Set::from_source(vec![3, 1, 3, 2, 1]);
    /// assert_eq!(from_vector.count(), 3);
    ///
    /// let copy: Set<i32> = Set::from_source(&from_vector);
    /// assert_eq!(copy, from_vector);
    /// ```
    #[must_use]
    pub fn from_source<I>(source: I) -> Self
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        let mut set = Self::new();
        set.update_from(source);
        set
    }
}

impl<T, S> Set<T, S> {
    /// Creates an empty set that hashes with `hasher`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::hash_map::RandomState;
    /// use setwise::set::Set;
    ///
    /// let mut set = Set::with_hasher(RandomState::new());
    /// set.add(1);
    /// assert!(set.contains(&1));
    /// ```
    #[inline]
    #[must_use]
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            elements: IndexSet::with_hasher(hasher),
        }
    }

    /// Creates an empty set with room for `capacity` elements that hashes
    /// with `hasher`.
    #[inline]
    #[must_use]
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            elements: IndexSet::with_capacity_and_hasher(capacity, hasher),
        }
    }

    /// Returns the number of elements in the set (its cardinality).
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::Set;
    ///
    /// let set = Set::from([1, 2, 2, 3]);
    /// assert_eq!(set.count(), 3);
    /// ```
    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.elements.len()
    }

    /// Returns the number of elements in the set.
    ///
    /// Same as [`count`](Self::count).
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the number of elements the set can hold without reallocating.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.elements.capacity()
    }

    /// Returns a reference to the set's hash builder.
    #[inline]
    #[must_use]
    pub fn hasher(&self) -> &S {
        self.elements.hasher()
    }

    /// Removes all elements. Afterwards `count() == 0`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::Set;
    ///
    /// let mut set = Set::from([1, 2, 3]);
    /// set.clear();
    /// assert!(set.is_empty());
    /// assert!(!set.contains(&1));
    /// ```
    pub fn clear(&mut self) {
        self.elements.clear();
        trace_operation!(operation = "clear", len = 0_usize);
    }

    /// Returns an iterator over the elements of the set.
    ///
    /// The order is unspecified. The iterator borrows the set, so the set
    /// cannot be mutated until the iterator is dropped; calling `iter`
    /// again restarts the enumeration.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::Set;
    ///
    /// let set = Set::from([1, 2, 3]);
    /// let sum: i32 = set.iter().sum();
    /// assert_eq!(sum, 6);
    /// assert_eq!(set.iter().count(), set.count());
    /// ```
    #[must_use]
    pub fn iter(&self) -> SetIterator<'_, T> {
        SetIterator {
            inner: self.elements.iter(),
        }
    }
}

impl<T: Hash + Eq, S: BuildHasher> Set<T, S> {
    /// Returns `true` if the set contains the specified element.
    ///
    /// The element may be any borrowed form of the set's element type,
    /// but `Hash` and `Eq` on the borrowed form must match those for
    /// the element type.
    ///
    /// # Complexity
    ///
    /// O(1) expected
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::Set;
    ///
    /// let set = Set::from(["hello".to_string(), "world".to_string()]);
    ///
    /// // Can use &str to look up String elements
    /// assert!(set.contains("hello"));
    /// assert!(!set.contains("other"));
    /// ```
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.elements.contains(element)
    }

    /// Inserts an element if it is not already present.
    ///
    /// Returns `true` if the element was newly inserted. Adding an element
    /// that is already a member is a no-op.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::Set;
    ///
    /// let mut set = Set::new();
    /// assert!(set.add(1));
    /// assert!(!set.add(1));
    /// assert_eq!(set.count(), 1);
    /// ```
    pub fn add(&mut self, element: T) -> bool {
        self.elements.insert(element)
    }

    /// Removes an element if it is present.
    ///
    /// Returns `true` if the element was a member. Removing a non-member
    /// is a no-op, never an error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::Set;
    ///
    /// let mut set = Set::from([1, 2]);
    /// assert!(set.remove(&1));
    /// assert!(!set.remove(&1));
    /// assert_eq!(set.count(), 1);
    /// ```
    pub fn remove<Q>(&mut self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.elements.swap_remove(element)
    }

    /// Reserves capacity for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) {
        self.elements.reserve(additional);
    }

    /// Keeps only the elements for which `predicate` returns `true`.
    pub fn retain<P>(&mut self, predicate: P)
    where
        P: FnMut(&T) -> bool,
    {
        self.elements.retain(predicate);
    }

    /// Removes every element that appears in any of the given sources.
    ///
    /// Equivalent to calling [`remove`](Self::remove) for every value of
    /// every source; values that are not members are ignored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::Set;
    ///
    /// let mut set: Set<i32> = (1..=500).collect();
    /// let upper: Set<i32> = (251..=500).collect();
    ///
    /// set.difference_update([&upper]);
    /// assert!(set.equals(1..=250));
    /// ```
    pub fn difference_update<I>(&mut self, sources: I)
    where
        I: IntoIterator,
        I::Item: IntoIterator,
        <I::Item as IntoIterator>::Item: Borrow<T>,
    {
        for source in sources {
            for element in source {
                self.elements
                    .swap_remove(<<I::Item as IntoIterator>::Item as Borrow<T>>::borrow(&element));
            }
        }
        trace_operation!(operation = "difference_update", len = self.len());
    }

    /// Returns `true` if the set has no element in common with `other`.
    ///
    /// Stops at the first shared element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::Set;
    ///
    /// let set: Set<i32> = (1..=250).collect();
    /// assert!(set.is_disjoint(251..=500));
    /// assert!(!set.is_disjoint(125..=375));
    /// ```
    #[must_use]
    pub fn is_disjoint<I>(&self, other: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        other
            .into_iter()
            .all(|element| !self.elements.contains(<I::Item as Borrow<T>>::borrow(&element)))
    }

    /// Removes and returns an arbitrary element.
    ///
    /// Which element is chosen is unspecified. The returned element is no
    /// longer a member afterwards. Runs in O(1), so draining a set with
    /// repeated `pop` calls is linear in its size.
    ///
    /// # Errors
    ///
    /// Returns [`EmptySetError`] if the set has no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::{EmptySetError, Set};
    ///
    /// let mut set = Set::from([7]);
    /// assert_eq!(set.pop(), Ok(7));
    /// assert_eq!(set.pop(), Err(EmptySetError));
    /// ```
    pub fn pop(&mut self) -> Result<T, EmptySetError> {
        let element = self.elements.pop().ok_or(EmptySetError)?;
        trace_operation!(operation = "pop", len = self.len());
        Ok(element)
    }
}

impl<T: Hash + Eq, S: BuildHasher + Clone> Set<T, S> {
    /// Retains only the elements present in **every** given source.
    ///
    /// Sources are applied in turn: the set is intersected with the first
    /// source, the result with the second, and so on. With no sources the
    /// set is left unchanged.
    ///
    /// Each source is scanned exactly once, so single-pass iterators are
    /// accepted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::Set;
    ///
    /// let mut set: Set<i32> = (1..=10).collect();
    /// set.intersection_update([vec![2, 4, 6, 8, 10], vec![4, 8, 12]]);
    /// assert_eq!(set.to_sorted_vec(), vec![4, 8]);
    /// ```
    pub fn intersection_update<I>(&mut self, sources: I)
    where
        I: IntoIterator,
        I::Item: IntoIterator,
        <I::Item as IntoIterator>::Item: Borrow<T>,
    {
        for source in sources {
            let mut retained = IndexSet::with_hasher(self.elements.hasher().clone());
            for element in source {
                let element = <<I::Item as IntoIterator>::Item as Borrow<T>>::borrow(&element);
                if let Some(member) = self.elements.swap_take(element) {
                    retained.insert(member);
                }
            }
            self.elements = retained;
        }
        trace_operation!(operation = "intersection_update", len = self.len());
    }
}

impl<T: Clone + Hash + Eq, S: BuildHasher + Clone> Set<T, S> {
    fn update_from<I>(&mut self, source: I)
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        for element in source {
            let element = <I::Item as Borrow<T>>::borrow(&element);
            if !self.elements.contains(element) {
                self.elements.insert(element.clone());
            }
        }
    }

    fn collect_source<I>(&self, source: I) -> Self
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        let mut collected = Self::with_hasher(self.elements.hasher().clone());
        collected.update_from(source);
        collected
    }

    /// Inserts every element of every source.
    ///
    /// Sources are applied in argument order, each in its own iteration
    /// order. Uniqueness is preserved: values already present are ignored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::Set;
    ///
    /// let mut set: Set<i32> = (1..=250).collect();
    /// let upper: Set<i32> = (251..=500).collect();
    ///
    /// set.update([&upper]);
    /// assert!(set.equals(1..=500));
    ///
    /// set.update([vec![1, 2], vec![501]]);
    /// assert_eq!(set.count(), 501);
    /// ```
    pub fn update<I>(&mut self, sources: I)
    where
        I: IntoIterator,
        I::Item: IntoIterator,
        <I::Item as IntoIterator>::Item: Borrow<T>,
    {
        for source in sources {
            self.update_from(source);
        }
        trace_operation!(operation = "update", len = self.len());
    }

    /// Replaces the contents with the elements found in exactly one of the
    /// set and `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::Set;
    ///
    /// let mut set = Set::from([1, 2, 3]);
    /// set.symmetric_difference_update([2, 3, 4]);
    /// assert_eq!(set.to_sorted_vec(), vec![1, 4]);
    /// ```
    pub fn symmetric_difference_update<I>(&mut self, other: I)
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        *self = self.symmetric_difference(other);
        trace_operation!(operation = "symmetric_difference_update", len = self.len());
    }

    /// Returns a new set holding the elements of the set and of every source.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::Set;
    /// use setwise::sources;
    ///
    /// let low: Set<i32> = (1..=250).collect();
    /// let middle: Vec<i32> = (125..=375).collect();
    ///
    /// let union = low.union(sources![&low, middle, (251..=500).into_iter()]);
    /// assert_eq!(union.count(), 500);
    /// assert_eq!(low.count(), 250);
    /// ```
    #[must_use]
    pub fn union<I>(&self, sources: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoIterator,
        <I::Item as IntoIterator>::Item: Borrow<T>,
    {
        let mut result = self.clone();
        result.update(sources);
        result
    }

    /// Returns a new set holding the elements of the set that appear in
    /// none of the sources.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::Set;
    ///
    /// let set = Set::from([1, 2, 3, 4]);
    /// let difference = set.difference([vec![1], vec![3, 5]]);
    /// assert_eq!(difference.to_sorted_vec(), vec![2, 4]);
    /// assert!(set.difference([&set]).is_empty());
    /// ```
    #[must_use]
    pub fn difference<I>(&self, sources: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoIterator,
        <I::Item as IntoIterator>::Item: Borrow<T>,
    {
        let mut result = self.clone();
        result.difference_update(sources);
        result
    }

    /// Returns a new set holding the elements of the set that appear in
    /// every source.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::Set;
    ///
    /// let set: Set<i32> = (1..=250).collect();
    /// assert!(set.intersection([251..=500]).is_empty());
    /// assert_eq!(set.intersection([&set]), set);
    /// ```
    #[must_use]
    pub fn intersection<I>(&self, sources: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoIterator,
        <I::Item as IntoIterator>::Item: Borrow<T>,
    {
        let mut result = self.clone();
        result.intersection_update(sources);
        result
    }

    /// Returns a new set holding the elements found in exactly one of the
    /// set and `other`.
    ///
    /// Computed as `(other - self) | (self - other)`. The result has the
    /// same members whichever operand is the receiver.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::Set;
    ///
    /// let low: Set<i32> = (1..=250).collect();
    /// let middle: Set<i32> = (125..=375).collect();
    ///
    /// let symmetric = low.symmetric_difference(&middle);
    /// assert!(symmetric.contains(&1));
    /// assert!(!symmetric.contains(&125));
    /// assert!(symmetric.contains(&375));
    /// assert_eq!(symmetric, middle.symmetric_difference(&low));
    /// ```
    #[must_use]
    pub fn symmetric_difference<I>(&self, other: I) -> Self
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        let other = self.collect_source(other);
        let mut result = other.difference([self]);
        result.update([self.difference([&other])]);
        result
    }

    /// Returns `true` if the set and `other` hold exactly the same elements.
    ///
    /// `other` is first cloned into a set, so duplicates and ordering
    /// in the source do not matter. Like [`is_subset`](Self::is_subset)
    /// this costs O(m) time and memory in the size of `other`; compare two
    /// existing sets with `==` to avoid the copy.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::Set;
    ///
    /// let set = Set::from([1, 2, 3]);
    /// assert!(set.equals([3, 2, 1, 1]));
    /// assert!(!set.equals([1, 2]));
    /// ```
    #[must_use]
    pub fn equals<I>(&self, other: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        *self == self.collect_source(other)
    }

    /// Returns `true` if every element of `other` is a member of the set.
    ///
    /// `other` is scanned without being copied and the scan stops at the
    /// first non-member. A candidate with more distinct elements than the
    /// set therefore answers `false` after at most `count() + 1` distinct
    /// values, however large it is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::Set;
    ///
    /// let set: Set<i32> = (1..=250).collect();
    /// assert!(set.is_superset(1..=125));
    /// assert!(!set.is_superset(1..=500));
    /// ```
    #[must_use]
    pub fn is_superset<I>(&self, other: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        other
            .into_iter()
            .all(|element| self.elements.contains(<I::Item as Borrow<T>>::borrow(&element)))
    }

    /// Returns `true` if every element of the set is a member of `other`.
    ///
    /// `a.is_subset(&b)` always equals `b.is_superset(&a)`; two sets with
    /// no containment relation are neither subset nor superset of each
    /// other.
    ///
    /// Membership in `other` has to be looked up, so `other` is first
    /// cloned into a set of its own, even when it already is one. This
    /// costs O(m) time and memory in the size of `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::Set;
    ///
    /// let set: Set<i32> = (1..=250).collect();
    /// assert!(set.is_subset(1..=500));
    /// assert!(!set.is_subset(1..=125));
    /// assert!(!set.is_subset(251..=500));
    /// ```
    #[must_use]
    pub fn is_subset<I>(&self, other: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        let other = self.collect_source(other);
        if self.len() > other.len() {
            return false;
        }
        self.iter().all(|element| other.contains(element))
    }

    /// Returns the elements in unspecified order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    /// Returns the elements in ascending order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::Set;
    ///
    /// let set = Set::from([3, 1, 2]);
    /// assert_eq!(set.to_sorted_vec(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn to_sorted_vec(&self) -> Vec<T>
    where
        T: Ord,
    {
        let mut elements = self.to_vec();
        elements.sort_unstable();
        elements
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over the elements of a [`Set`].
#[derive(Clone)]
pub struct SetIterator<'a, T> {
    inner: index_set::Iter<'a, T>,
}

impl<'a, T> Iterator for SetIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for SetIterator<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for SetIterator<'_, T> {}

/// An owning iterator over the elements of a [`Set`].
pub struct SetIntoIterator<T> {
    inner: index_set::IntoIter<T>,
}

impl<T> Iterator for SetIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for SetIntoIterator<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for SetIntoIterator<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T, S: Default> Default for Set<T, S> {
    #[inline]
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<T: Hash + Eq, S: BuildHasher + Default> FromIterator<T> for Set<T, S> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::default();
        set.extend(iter);
        set
    }
}

impl<T: Hash + Eq, S: BuildHasher> Extend<T> for Set<T, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<'a, T: Copy + Hash + Eq + 'a, S: BuildHasher> Extend<&'a T> for Set<T, S> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.elements.extend(iter.into_iter().copied());
    }
}

impl<T: Hash + Eq, const N: usize> From<[T; N]> for Set<T> {
    fn from(elements: [T; N]) -> Self {
        elements.into_iter().collect()
    }
}

impl<T: Hash + Eq> From<Vec<T>> for Set<T> {
    fn from(elements: Vec<T>) -> Self {
        elements.into_iter().collect()
    }
}

impl<T, S> IntoIterator for Set<T, S> {
    type Item = T;
    type IntoIter = SetIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        SetIntoIterator {
            inner: self.elements.into_iter(),
        }
    }
}

impl<'a, T, S> IntoIterator for &'a Set<T, S> {
    type Item = &'a T;
    type IntoIter = SetIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Hash + Eq, S: BuildHasher> PartialEq for Set<T, S> {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }

        for element in self {
            if !other.contains(element) {
                return false;
            }
        }

        true
    }
}

impl<T: Hash + Eq, S: BuildHasher> Eq for Set<T, S> {}

impl<T: fmt::Debug, S> fmt::Debug for Set<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

/// Sets form a semigroup under union.
#[cfg(feature = "typeclass")]
impl<T: Clone + Hash + Eq, S: BuildHasher + Clone> Semigroup for Set<T, S> {
    fn combine(mut self, other: Self) -> Self {
        self.update([other]);
        self
    }

    fn combine_ref(&self, other: &Self) -> Self {
        self.union([other])
    }
}

/// The empty set is the identity for union.
#[cfg(feature = "typeclass")]
impl<T: Clone + Hash + Eq, S: BuildHasher + Clone + Default> Monoid for Set<T, S> {
    fn empty() -> Self {
        Self::default()
    }
}

#[cfg(feature = "typeclass")]
impl<T, S> Foldable for Set<T, S> {
    type Inner = T;

    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    fn length(&self) -> usize {
        self.elements.len()
    }
}

// =============================================================================
// Tests
// =============================================================================
