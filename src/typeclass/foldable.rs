//! Foldable type class - folding over structures.
//!
//! The `Foldable` type class represents data structures that can be "folded"
//! into a summary value. Folding visits every element once, combining each
//! with an accumulator.
//!
//! For unordered containers such as [`Set`](crate::set::Set) the visiting
//! order is unspecified, so only folds with a commutative combining function
//! give a deterministic result.
//!
//! # Examples
//!
//! ```rust
//! use setwise::set::Set;
//! use setwise::typeclass::Foldable;
//!
//! let set = Set::from([1, 2, 3, 4, 5]);
//! let sum = set.fold_left(0, |accumulator, element| accumulator + element);
//! assert_eq!(sum, 15);
//! ```

use super::monoid::Monoid;

/// A type class for structures that can be folded to a summary value.
///
/// # Laws
///
/// ## length consistency
///
/// ```text
/// fa.length() == fa.fold_left(0, |count, _| count + 1)
/// ```
///
/// ## `fold_map` consistency
///
/// ```text
/// fa.fold_map(f) == fa.fold_left(B::empty(), |acc, a| acc.combine(f(a)))
/// ```
pub trait Foldable {
    /// The element type visited by folds.
    type Inner;

    /// Folds the structure, visiting every element once.
    ///
    /// # Arguments
    ///
    /// * `init` - The initial accumulator value
    /// * `function` - A function that combines the accumulator with an element
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B,
        Self: Sized;

    /// Maps each element to a monoid and combines the results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::Set;
    /// use setwise::typeclass::Foldable;
    ///
    /// let words = Set::from(["ab", "cd"]);
    /// let letters: Set<char> = words.fold_map(|word| word.chars().collect());
    /// assert_eq!(letters, Set::from(['a', 'b', 'c', 'd']));
    /// ```
    fn fold_map<M, F>(self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(Self::Inner) -> M,
        Self: Sized,
    {
        self.fold_left(M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }

    /// Returns `true` if the structure contains no elements.
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        self.clone().fold_left(true, |_, _| false)
    }

    /// Returns the number of elements in the structure.
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.clone().fold_left(0, |count, _| count + 1)
    }

    /// Collects every element into a `Vec`, in visiting order.
    fn to_list(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut elements, element| {
            elements.push(element);
            elements
        })
    }

    /// Returns some element satisfying the predicate, if any.
    fn find<P>(self, mut predicate: P) -> Option<Self::Inner>
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        self.fold_left(None, |found, element| {
            found.or_else(|| predicate(&element).then_some(element))
        })
    }

    /// Returns `true` if any element satisfies the predicate.
    fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        self.clone().find(predicate).is_some()
    }

    /// Returns `true` if every element satisfies the predicate.
    ///
    /// Vacuously `true` for an empty structure.
    fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        !self.exists(|element| !predicate(element))
    }
}
