//! Property-based tests for validated sets
//!
//! Derived sets must partition their source, and no failing operation may
//! leave a set in a state its validator rejects.

use proptest::prelude::*;
use sigil::{Key, Set, Validator};

fn items_strategy() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-50i32..50, 0..24)
}

/// A predicate `x mod modulus == rem`, parameters drawn by proptest.
fn predicate_strategy() -> impl Strategy<Value = (i32, i32)> {
    (1i32..6).prop_flat_map(|modulus| (Just(modulus), 0..modulus))
}

fn selects(modulus: i32, rem: i32) -> impl Fn(&i32) -> bool + Copy {
    move |x: &i32| x.rem_euclid(modulus) == rem
}

proptest! {
    #[test]
    fn construction_succeeds_iff_every_item_is_valid(items in items_strategy(), bound in -50i32..50) {
        let result = Set::with_validator(items.clone(), Validator::predicate(move |x: &i32| *x >= bound));
        let all_valid = items.iter().all(|x| *x >= bound);

        prop_assert_eq!(result.is_ok(), all_valid);

        if let Err(err) = result {
            let first = items.iter().position(|x| *x < bound).unwrap();
            prop_assert_eq!(err.key(), Some(&Key::try_from(first).unwrap()));
        }
    }

    #[test]
    fn exclude_is_filter_of_the_negation(items in items_strategy(), (modulus, rem) in predicate_strategy()) {
        let set = Set::new(items);
        let p = selects(modulus, rem);

        prop_assert_eq!(set.exclude(p), set.filter(|x| !p(x)));
    }

    #[test]
    fn filter_and_exclude_partition_the_set(items in items_strategy(), (modulus, rem) in predicate_strategy()) {
        let set = Set::new(items.clone());
        let p = selects(modulus, rem);

        let kept = set.filter(p);
        let dropped = set.exclude(p);

        prop_assert_eq!(kept.len() + dropped.len(), set.len());
        prop_assert!(kept.values().all(p));
        prop_assert!(!dropped.has_matching(p));

        // Relative order survives on both sides.
        let expected_kept: Vec<i32> = items.iter().copied().filter(|x| p(x)).collect();
        let expected_dropped: Vec<i32> = items.iter().copied().filter(|x| !p(x)).collect();
        prop_assert_eq!(kept.to_vec(), expected_kept);
        prop_assert_eq!(dropped.to_vec(), expected_dropped);
    }

    #[test]
    fn refused_validator_leaves_contents_unchanged(items in items_strategy(), bound in -50i32..50) {
        let mut set = Set::new(items.clone());
        let all_valid = items.iter().all(|x| *x >= bound);

        let result = set
            .set_validator(Validator::predicate(move |x: &i32| *x >= bound))
            .map(|_| ());

        prop_assert_eq!(result.is_ok(), all_valid);
        prop_assert_eq!(set.to_vec(), items);

        if !all_valid {
            // The previous validator (none) is still in place.
            prop_assert!(set.validator().is_none());
            prop_assert!(set.push(bound - 1).is_ok());
        }
    }

    #[test]
    fn rejected_insert_is_atomic(items in items_strategy(), key in 0i64..30, value in -50i32..50) {
        let mut set = Set::with_validator(
            items.iter().copied().filter(|x| *x >= 0),
            Validator::predicate(|x: &i32| *x >= 0),
        ).unwrap();
        let before = set.clone();

        let result = set.insert(key, value);

        if value < 0 {
            prop_assert!(result.is_err());
            prop_assert_eq!(set, before);
        } else {
            prop_assert!(result.is_ok());
            prop_assert_eq!(set.get(key), Ok(&value));
        }
    }

    #[test]
    fn contains_agrees_with_stored_values(items in items_strategy(), probe in -60i32..60) {
        let set = Set::new(items.clone());

        prop_assert_eq!(set.contains(&probe), items.contains(&probe));
    }
}
