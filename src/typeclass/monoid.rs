//! Monoid type class - semigroups with an identity element.
//!
//! A type `T` is a monoid if it is a [`Semigroup`] with an identity element
//! `empty: T` such that for all `a`:
//!
//! - `empty.combine(a) == a` (left identity)
//! - `a.combine(empty) == a` (right identity)
//!
//! For sets, `combine` is union and `empty` is the empty set.

use super::semigroup::Semigroup;

/// A type class for semigroups with an identity element.
///
/// # Laws
///
/// All implementations must satisfy (in addition to Semigroup laws):
///
/// ## Left Identity
///
/// ```text
/// Self::empty().combine(a) == a
/// ```
///
/// ## Right Identity
///
/// ```text
/// a.combine(Self::empty()) == a
/// ```
///
/// # Examples
///
/// ```rust
/// use setwise::set::Set;
/// use setwise::typeclass::{Monoid, Semigroup};
///
/// let set = Set::from(["a", "b"]);
/// assert_eq!(Set::empty().combine(set.clone()), set);
/// assert_eq!(set.clone().combine(Set::empty()), set);
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    fn empty() -> Self;

    /// Combines all elements in an iterator, starting from the identity element.
    ///
    /// Unlike [`Semigroup::reduce_all`], this method always returns a value
    /// (the identity element for empty iterators).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::Set;
    /// use setwise::typeclass::Monoid;
    ///
    /// let none: Vec<Set<i32>> = vec![];
    /// assert!(Set::combine_all(none).is_empty());
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }

    /// Returns whether this value is the identity element.
    fn is_empty_value(&self) -> bool
    where
        Self: PartialEq + Sized,
    {
        *self == Self::empty()
    }
}
