#![cfg(feature = "typeclass")]
//! Property-based tests for the Semigroup, Monoid and Foldable laws of Set.

use proptest::prelude::*;
use setwise::set::Set;
use setwise::typeclass::{Foldable, Monoid, Semigroup};

fn arbitrary_set() -> impl Strategy<Value = Set<i32>> {
    prop::collection::vec(-50..50_i32, 0..30)
        .prop_map(|elements| elements.into_iter().collect::<Set<i32>>())
}

// =============================================================================
// Semigroup Associativity Law
// Description: (a <> b) <> c = a <> (b <> c)
// =============================================================================

proptest! {
    #[test]
    fn prop_semigroup_associativity_law(
        set_a in arbitrary_set(),
        set_b in arbitrary_set(),
        set_c in arbitrary_set()
    ) {
        let left = set_a.clone().combine(set_b.clone()).combine(set_c.clone());
        let right = set_a.combine(set_b.combine(set_c));

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Semigroup Reference Consistency Law
// Description: a.combine_ref(&b) = a.clone().combine(b.clone())
// =============================================================================

proptest! {
    #[test]
    fn prop_combine_ref_consistency_law(set_a in arbitrary_set(), set_b in arbitrary_set()) {
        prop_assert_eq!(set_a.combine_ref(&set_b), set_a.combine(set_b));
    }
}

// =============================================================================
// Monoid Identity Laws
// Description: empty <> a = a = a <> empty
// =============================================================================

proptest! {
    #[test]
    fn prop_monoid_identity_law(set in arbitrary_set()) {
        prop_assert_eq!(Set::empty().combine(set.clone()), set.clone());
        prop_assert_eq!(set.clone().combine(Set::empty()), set);
    }
}

// =============================================================================
// Monoid Combine-All Law
// Description: combine_all folds every set into a single union
// =============================================================================

proptest! {
    #[test]
    fn prop_combine_all_law(sets in prop::collection::vec(arbitrary_set(), 0..6)) {
        let expected = sets
            .iter()
            .fold(Set::new(), |accumulator: Set<i32>, set| accumulator.union([set]));

        prop_assert_eq!(Set::combine_all(sets), expected);
    }
}

// =============================================================================
// Foldable Length Law
// Description: length = fold_left(0, |n, _| n + 1) = count
// =============================================================================

proptest! {
    #[test]
    fn prop_foldable_length_law(set in arbitrary_set()) {
        let folded = set.clone().fold_left(0_usize, |count, _| count + 1);

        prop_assert_eq!(Foldable::length(&set), folded);
        prop_assert_eq!(set.count(), folded);
    }
}

// =============================================================================
// Foldable Sum Law
// Description: A commutative fold gives the same result as iterating
// =============================================================================

proptest! {
    #[test]
    fn prop_foldable_sum_law(set in arbitrary_set()) {
        let expected: i32 = set.iter().sum();
        let folded = set.fold_left(0, |accumulator, element| accumulator + element);

        prop_assert_eq!(folded, expected);
    }
}

// =============================================================================
// Foldable Exists/ForAll Duality Law
// Description: exists(p) = !for_all(!p)
// =============================================================================

proptest! {
    #[test]
    fn prop_exists_for_all_duality_law(set in arbitrary_set(), threshold in -50..50_i32) {
        prop_assert_eq!(
            set.exists(|element| *element > threshold),
            !set.for_all(|element| *element <= threshold)
        );
    }
}
