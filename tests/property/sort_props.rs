//! Sort properties: ordering, permutation, idempotence.

use super::common::contents;
use growlist::contracts::check_sorted_by;
use growlist::{quicksort_by, ArrayList};
use proptest::prelude::*;
use std::collections::HashMap;

fn counts(values: &[i32]) -> HashMap<i32, usize> {
    let mut counts = HashMap::new();
    for &v in values {
        *counts.entry(v).or_insert(0) += 1;
    }
    counts
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// After sort, compare(get(i), get(i + 1)) <= 0 for every adjacent pair.
    #[test]
    fn sorted_after_sort(values in prop::collection::vec(-50i32..50, 0..300)) {
        let mut list: ArrayList<i32> = values.iter().copied().collect();
        list.sort_by(|a, b| a.cmp(b));
        prop_assert_eq!(check_sorted_by(&list, i32::cmp), None);
    }

    /// Sorting permutes: same multiset before and after.
    #[test]
    fn sort_is_permutation(values in prop::collection::vec(-20i32..20, 0..200)) {
        let mut list: ArrayList<i32> = values.iter().copied().collect();
        list.sort();
        prop_assert_eq!(counts(&contents(&list)), counts(&values));
    }

    /// Sorting a sorted list changes nothing (but still counts as a mutation).
    #[test]
    fn sort_is_idempotent(values in prop::collection::vec(any::<i32>(), 0..200), descending in any::<bool>()) {
        let compare = |a: &i32, b: &i32| if descending { b.cmp(a) } else { a.cmp(b) };
        let mut list: ArrayList<i32> = values.into_iter().collect();
        list.sort_by(compare);
        let once = contents(&list);
        let version = list.version();

        list.sort_by(compare);
        prop_assert_eq!(contents(&list), once);
        prop_assert_eq!(list.version(), version + 1);
    }

    /// Sorting keeps len and capacity.
    #[test]
    fn sort_keeps_shape(values in prop::collection::vec(any::<u8>(), 0..100)) {
        let mut list: ArrayList<u8> = values.into_iter().collect();
        let (len, capacity) = (list.len(), list.capacity());
        list.sort();
        prop_assert_eq!(list.len(), len);
        prop_assert_eq!(list.capacity(), capacity);
    }

    /// The raw quicksort agrees with the std sort on keyed records.
    #[test]
    fn quicksort_matches_std_on_keys(pairs in prop::collection::vec((0u8..10, any::<u16>()), 0..150)) {
        let mut ours = pairs.clone();
        quicksort_by(&mut ours, |a, b| a.0.cmp(&b.0));

        let mut theirs = pairs;
        theirs.sort_by_key(|p| p.0);

        let ours_keys: Vec<u8> = ours.iter().map(|p| p.0).collect();
        let theirs_keys: Vec<u8> = theirs.iter().map(|p| p.0).collect();
        prop_assert_eq!(ours_keys, theirs_keys);
    }

    /// Presorted and all-equal runs (the lopsided-partition cases) stay put.
    #[test]
    fn lopsided_inputs_stay_sorted(len in 0usize..2_000, value in any::<u16>(), all_equal in any::<bool>()) {
        let values: Vec<u16> = if all_equal {
            vec![value; len]
        } else {
            (0..len).map(|i| i as u16).collect()
        };
        let mut list: ArrayList<u16> = values.iter().copied().collect();
        list.sort();
        prop_assert_eq!(contents(&list), values.clone());
        list.sort();
        prop_assert_eq!(contents(&list), values);
    }
}
