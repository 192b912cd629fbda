//! Operator overloads for set algebra.
//!
//! - `a | b`, `a |= b`: union
//! - `a & b`, `a &= b`: intersection
//! - `a - b`, `a -= b`: difference
//! - `a ^ b`, `a ^= b`: symmetric difference
//!
//! Binary operators take both operands by reference and return a new set;
//! assigning operators mutate the left operand.
//!
//! ```rust
//! use setwise::set::Set;
//!
//! let a = Set::from([1, 2, 3]);
//! let b = Set::from([2, 3, 4]);
//!
//! assert_eq!(&a | &b, Set::from([1, 2, 3, 4]));
//! assert_eq!(&a & &b, Set::from([2, 3]));
//! assert_eq!(&a - &b, Set::from([1]));
//! assert_eq!(&a ^ &b, Set::from([1, 4]));
//! ```

use std::hash::{BuildHasher, Hash};
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Sub, SubAssign};

use super::Set;

impl<T: Clone + Hash + Eq, S: BuildHasher + Clone> BitOr<&Set<T, S>> for &Set<T, S> {
    type Output = Set<T, S>;

    /// Returns the union of `self` and `rhs` as a new set.
    #[inline]
    fn bitor(self, rhs: &Set<T, S>) -> Set<T, S> {
        self.union([rhs])
    }
}

impl<T: Clone + Hash + Eq, S: BuildHasher + Clone> BitAnd<&Set<T, S>> for &Set<T, S> {
    type Output = Set<T, S>;

    /// Returns the intersection of `self` and `rhs` as a new set.
    #[inline]
    fn bitand(self, rhs: &Set<T, S>) -> Set<T, S> {
        self.intersection([rhs])
    }
}

impl<T: Clone + Hash + Eq, S: BuildHasher + Clone> Sub<&Set<T, S>> for &Set<T, S> {
    type Output = Set<T, S>;

    /// Returns the difference of `self` and `rhs` as a new set.
    #[inline]
    fn sub(self, rhs: &Set<T, S>) -> Set<T, S> {
        self.difference([rhs])
    }
}

impl<T: Clone + Hash + Eq, S: BuildHasher + Clone> BitXor<&Set<T, S>> for &Set<T, S> {
    type Output = Set<T, S>;

    /// Returns the symmetric difference of `self` and `rhs` as a new set.
    #[inline]
    fn bitxor(self, rhs: &Set<T, S>) -> Set<T, S> {
        self.symmetric_difference(rhs)
    }
}

impl<T: Clone + Hash + Eq, S: BuildHasher + Clone> BitOrAssign<&Set<T, S>> for Set<T, S> {
    #[inline]
    fn bitor_assign(&mut self, rhs: &Set<T, S>) {
        self.update([rhs]);
    }
}

impl<T: Hash + Eq, S: BuildHasher + Clone> BitAndAssign<&Set<T, S>> for Set<T, S> {
    #[inline]
    fn bitand_assign(&mut self, rhs: &Set<T, S>) {
        self.intersection_update([rhs]);
    }
}

impl<T: Hash + Eq, S: BuildHasher> SubAssign<&Set<T, S>> for Set<T, S> {
    #[inline]
    fn sub_assign(&mut self, rhs: &Set<T, S>) {
        self.difference_update([rhs]);
    }
}

impl<T: Clone + Hash + Eq, S: BuildHasher + Clone> BitXorAssign<&Set<T, S>> for Set<T, S> {
    #[inline]
    fn bitxor_assign(&mut self, rhs: &Set<T, S>) {
        self.symmetric_difference_update(rhs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn left() -> Set<i32> {
        Set::from([1, 2, 3])
    }

    #[fixture]
    fn right() -> Set<i32> {
        Set::from([2, 3, 4])
    }

    #[rstest]
    fn test_binary_operators_match_methods(left: Set<i32>, right: Set<i32>) {
        assert_eq!(&left | &right, left.union([&right]));
        assert_eq!(&left & &right, left.intersection([&right]));
        assert_eq!(&left - &right, left.difference([&right]));
        assert_eq!(&left ^ &right, left.symmetric_difference(&right));
    }

    #[rstest]
    fn test_assigning_operators(left: Set<i32>, right: Set<i32>) {
        let mut union = left.clone();
        union |= &right;
        assert_eq!(union.to_sorted_vec(), vec![1, 2, 3, 4]);

        let mut intersection = left.clone();
        intersection &= &right;
        assert_eq!(intersection.to_sorted_vec(), vec![2, 3]);

        let mut difference = left.clone();
        difference -= &right;
        assert_eq!(difference.to_sorted_vec(), vec![1]);

        let mut symmetric = left;
        symmetric ^= &right;
        assert_eq!(symmetric.to_sorted_vec(), vec![1, 4]);
    }
}
