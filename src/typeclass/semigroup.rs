//! Semigroup type class - types with an associative binary operation.
//!
//! A type `T` is a semigroup if there exists a function
//! `combine: (T, T) -> T` that is associative.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use setwise::set::Set;
//! use setwise::typeclass::Semigroup;
//!
//! let low = Set::from([1, 2]);
//! let high = Set::from([2, 3]);
//! assert_eq!(low.combine(high), Set::from([1, 2, 3]));
//! ```

/// A type class for types with an associative binary operation.
///
/// # Laws
///
/// All implementations must satisfy:
///
/// ## Associativity
///
/// For all `a`, `b`, `c`:
/// ```text
/// (a.combine(b)).combine(c) == a.combine(b.combine(c))
/// ```
pub trait Semigroup {
    /// Combines two values into one.
    ///
    /// This operation must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference, returning a new value.
    ///
    /// The default implementation clones both values and calls `combine`.
    /// Types can override this for more efficient implementations.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::Set;
    /// use setwise::typeclass::Semigroup;
    ///
    /// let a = Set::from([1]);
    /// let b = Set::from([2]);
    /// let result = a.combine_ref(&b);
    /// // Original values are still available
    /// assert_eq!(a.count(), 1);
    /// assert_eq!(result.count(), 2);
    /// ```
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Reduces all elements in an iterator using the semigroup operation.
    ///
    /// Returns `None` if the iterator is empty.
    /// For a version that returns the identity for empty iterators, see
    /// [`Monoid::combine_all`](super::Monoid::combine_all).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::Set;
    /// use setwise::typeclass::Semigroup;
    ///
    /// let sets = vec![Set::from([1]), Set::from([2]), Set::from([1, 3])];
    /// assert_eq!(Set::reduce_all(sets), Some(Set::from([1, 2, 3])));
    ///
    /// let none: Vec<Set<i32>> = vec![];
    /// assert_eq!(Set::reduce_all(none), None);
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}
