//! Property-based tests for Set laws.
//!
//! These tests verify that Set satisfies the algebraic properties expected
//! of a mathematical set, whatever the elements and whichever operand is
//! the receiver.

use std::collections::HashSet;

use proptest::prelude::*;
use setwise::set::{EmptySetError, Set};

fn small_elements() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-20..20_i32, 0..40)
}

// =============================================================================
// Uniqueness Law
// Description: A set holds each distinct source value exactly once
// =============================================================================

proptest! {
    #[test]
    fn prop_uniqueness_law(elements in small_elements()) {
        let distinct: HashSet<i32> = elements.iter().copied().collect();
        let set: Set<i32> = Set::from_source(&elements);

        prop_assert_eq!(set.count(), distinct.len());
        prop_assert_eq!(set.iter().count(), distinct.len());
    }
}

// =============================================================================
// Idempotent Add Law
// Description: Adding an element twice is the same as adding it once
// =============================================================================

proptest! {
    #[test]
    fn prop_idempotent_add_law(elements in small_elements(), element: i32) {
        let mut once: Set<i32> = Set::from_source(&elements);
        once.add(element);

        let mut twice = once.clone();
        prop_assert!(!twice.add(element));

        prop_assert_eq!(once, twice);
    }
}

// =============================================================================
// Absent Remove Law
// Description: Removing a non-member leaves the set unchanged
// =============================================================================

proptest! {
    #[test]
    fn prop_absent_remove_law(elements in small_elements()) {
        let set: Set<i32> = Set::from_source(&elements);
        let mut removed = set.clone();

        prop_assert!(!removed.remove(&1_000));
        prop_assert_eq!(removed, set);
    }
}

// =============================================================================
// Remove-Contains Law
// Description: A removed element is never contained in the set
// =============================================================================

proptest! {
    #[test]
    fn prop_remove_contains_law(elements in small_elements(), element in -20..20_i32) {
        let mut set: Set<i32> = Set::from_source(&elements);
        let was_member = set.contains(&element);

        prop_assert_eq!(set.remove(&element), was_member);
        prop_assert!(!set.contains(&element));
    }
}

// =============================================================================
// Union Identity Law
// Description: a ∪ a = a, and a ∪ ∅ = a
// =============================================================================

proptest! {
    #[test]
    fn prop_union_identity_law(elements in small_elements()) {
        let set: Set<i32> = Set::from_source(&elements);
        let empty: Set<i32> = Set::new();

        prop_assert!(set.union([&set]).equals(&set));
        prop_assert_eq!(set.union([&empty]), set.clone());
        prop_assert_eq!(empty.union([&set]), set);
    }
}

// =============================================================================
// Union Commutativity Law
// Description: a ∪ b = b ∪ a
// =============================================================================

proptest! {
    #[test]
    fn prop_union_commutativity_law(
        elements_a in small_elements(),
        elements_b in small_elements()
    ) {
        let set_a: Set<i32> = Set::from_source(&elements_a);
        let set_b: Set<i32> = Set::from_source(&elements_b);

        prop_assert_eq!(set_a.union([&set_b]), set_b.union([&set_a]));
    }
}

// =============================================================================
// Intersection Absorption Law
// Description: a ∩ a = a
// =============================================================================

proptest! {
    #[test]
    fn prop_intersection_absorption_law(elements in small_elements()) {
        let set: Set<i32> = Set::from_source(&elements);

        prop_assert!(set.intersection([&set]).equals(&set));
    }
}

// =============================================================================
// Intersection Membership Law
// Description: x ∈ a ∩ b  ⇔  x ∈ a ∧ x ∈ b
// =============================================================================

proptest! {
    #[test]
    fn prop_intersection_membership_law(
        elements_a in small_elements(),
        elements_b in small_elements(),
        probe in -20..20_i32
    ) {
        let set_a: Set<i32> = Set::from_source(&elements_a);
        let set_b: Set<i32> = Set::from_source(&elements_b);
        let intersection = set_a.intersection([elements_b.iter()]);

        prop_assert_eq!(
            intersection.contains(&probe),
            set_a.contains(&probe) && set_b.contains(&probe)
        );
    }
}

// =============================================================================
// Difference Self-Annihilation Law
// Description: a − a = ∅
// =============================================================================

proptest! {
    #[test]
    fn prop_difference_self_annihilation_law(elements in small_elements()) {
        let set: Set<i32> = Set::from_source(&elements);

        prop_assert!(set.difference([&set]).is_empty());
        prop_assert_eq!(set.count(), Set::<i32>::from_source(&elements).count());
    }
}

// =============================================================================
// Symmetric Difference Commutativity Law
// Description: a △ b = b △ a
// =============================================================================

proptest! {
    #[test]
    fn prop_symmetric_difference_commutativity_law(
        elements_a in small_elements(),
        elements_b in small_elements()
    ) {
        let set_a: Set<i32> = Set::from_source(&elements_a);
        let set_b: Set<i32> = Set::from_source(&elements_b);

        let a_then_b = set_a.symmetric_difference(&set_b);
        let b_then_a = set_b.symmetric_difference(&set_a);

        prop_assert!(a_then_b.equals(&b_then_a));
        prop_assert!(a_then_b.is_disjoint(set_a.intersection([&set_b])));
    }
}

// =============================================================================
// Subset/Superset Duality Law
// Description: a ⊆ b  ⇔  b ⊇ a
// =============================================================================

proptest! {
    #[test]
    fn prop_subset_superset_duality_law(
        elements_a in prop::collection::vec(0..8_i32, 0..6),
        elements_b in prop::collection::vec(0..8_i32, 0..10)
    ) {
        let set_a: Set<i32> = Set::from_source(&elements_a);
        let set_b: Set<i32> = Set::from_source(&elements_b);

        prop_assert_eq!(set_a.is_subset(&set_b), set_b.is_superset(&set_a));
        prop_assert_eq!(set_b.is_subset(&set_a), set_a.is_superset(&set_b));
        prop_assert_eq!(
            set_a.is_subset(&set_b),
            set_a.iter().all(|element| set_b.contains(element))
        );
    }
}

// =============================================================================
// Disjointness Consistency Law
// Description: a.is_disjoint(b)  ⇔  |a ∩ b| = 0
// =============================================================================

proptest! {
    #[test]
    fn prop_disjointness_consistency_law(
        elements_a in small_elements(),
        elements_b in small_elements()
    ) {
        let set_a: Set<i32> = Set::from_source(&elements_a);

        prop_assert_eq!(
            set_a.is_disjoint(&elements_b),
            set_a.intersection([&elements_b]).count() == 0
        );
    }
}

// =============================================================================
// Derived Operations Purity Law
// Description: Derived operations never modify the receiver or arguments
// =============================================================================

proptest! {
    #[test]
    fn prop_derived_operations_purity_law(
        elements_a in small_elements(),
        elements_b in small_elements()
    ) {
        let set_a: Set<i32> = Set::from_source(&elements_a);
        let set_b: Set<i32> = Set::from_source(&elements_b);
        let snapshot_a = set_a.clone();
        let snapshot_b = set_b.clone();

        let _ = set_a.union([&set_b]);
        let _ = set_a.intersection([&set_b]);
        let _ = set_a.difference([&set_b]);
        let _ = set_a.symmetric_difference(&set_b);

        prop_assert_eq!(set_a, snapshot_a);
        prop_assert_eq!(set_b, snapshot_b);
    }
}

// =============================================================================
// Pop Laws
// Description: pop removes exactly one member; pop on ∅ fails
// =============================================================================

proptest! {
    #[test]
    fn prop_pop_reduces_cardinality_law(elements in prop::collection::vec(any::<i32>(), 1..40)) {
        let mut set: Set<i32> = Set::from_source(&elements);
        let before = set.count();

        let popped = set.pop();
        prop_assert!(popped.is_ok());
        let popped = popped.unwrap_or_default();

        prop_assert_eq!(set.count(), before - 1);
        prop_assert!(!set.contains(&popped));
        prop_assert!(elements.contains(&popped));
    }
}

#[test]
fn pop_on_empty_set_fails() {
    let mut set: Set<i32> = Set::new();
    assert_eq!(set.pop(), Err(EmptySetError));
    assert!(set.is_empty());
}
