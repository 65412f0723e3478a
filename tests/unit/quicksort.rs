//! The Lomuto quicksort in isolation.

use growlist::{contracts::check_sorted_by, partition, quicksort, quicksort_by, ArrayList};
use std::cmp::Ordering;

#[test]
fn sorts_reverse_input() {
    let mut values: Vec<i32> = (0..500).rev().collect();
    quicksort(&mut values);
    assert_eq!(values, (0..500).collect::<Vec<_>>());
}

#[test]
fn sorts_by_key_comparator() {
    let mut words = vec!["kiwi", "fig", "banana", "apple"];
    quicksort_by(&mut words, |a, b| a.len().cmp(&b.len()).then(a.cmp(b)));
    assert_eq!(words, vec!["fig", "kiwi", "apple", "banana"]);
}

#[test]
fn sorting_sorted_input_is_identity() {
    let mut values = vec![1, 1, 2, 3, 5, 8, 13];
    let before = values.clone();
    quicksort(&mut values);
    assert_eq!(values, before);
}

#[test]
fn all_equal_elements() {
    let mut values = vec![7; 64];
    quicksort(&mut values);
    assert_eq!(values, vec![7; 64]);
}

#[test]
fn partition_splits_around_last_element() {
    let mut values = [9, 2, 8, 1, 7, 3, 5];
    let p = partition(&mut values, 0, 6, &mut i32::cmp);
    assert_eq!(values[p], 5);
    assert!(values[..p].iter().all(|&v| v <= 5));
    assert!(values[p + 1..].iter().all(|&v| v > 5));
}

#[test]
fn partition_of_subrange_leaves_rest_alone() {
    let mut values = [100, 4, 3, 2, 1, -100];
    let p = partition(&mut values, 1, 4, &mut i32::cmp);
    assert_eq!(p, 1);
    assert_eq!(values[0], 100);
    assert_eq!(values[5], -100);
    assert_eq!(&values[1..5], &[1, 3, 2, 4]);
}

#[test]
fn float_total_order() {
    let mut values = vec![2.5_f64, -0.0, 1.0, f64::NAN, -3.0];
    quicksort_by(&mut values, f64::total_cmp);
    assert_eq!(check_sorted_by(&values, f64::total_cmp), None);
    assert!(values[4].is_nan());
}

#[test]
fn comparison_count_on_sorted_input() {
    let n = 50;
    let mut values: Vec<u32> = (0..n).collect();
    let mut count = 0u32;
    quicksort_by(&mut values, |a, b| {
        count += 1;
        a.cmp(b)
    });
    assert_eq!(count, n * (n - 1) / 2);
}

#[test]
fn reversed_comparator() {
    let mut values = vec![1, 3, 2];
    quicksort_by(&mut values, |a: &i32, b: &i32| -> Ordering { b.cmp(a) });
    assert_eq!(values, vec![3, 2, 1]);
}

// ============================================================================
// LOPSIDED PARTITIONS AT SCALE
// ============================================================================

// Sorted and all-equal input put every element on one side of the
// last-element pivot. These run in quadratic time but must not exhaust the
// stack.
const LARGE: u32 = 100_000;

#[test]
fn presorted_list_sorts_twice_without_overflow() {
    let mut list: ArrayList<u32> = (0..LARGE).collect();
    for _ in 0..2 {
        list.sort();
        assert_eq!(list.len(), LARGE as usize);
        assert_eq!(check_sorted_by(&list, u32::cmp), None);
        assert_eq!(list.first(), Some(&0));
        assert_eq!(list.last(), Some(&(LARGE - 1)));
    }
}

#[test]
fn all_equal_list_sorts_twice_without_overflow() {
    let mut list: ArrayList<u32> = std::iter::repeat(7).take(LARGE as usize).collect();
    for _ in 0..2 {
        list.sort();
        assert_eq!(list.len(), LARGE as usize);
        assert!(list.iter().all(|&v| v == 7));
    }
}

#[test]
fn reverse_sorted_slice_sorts_without_overflow() {
    let mut values: Vec<u32> = (0..LARGE).rev().collect();
    quicksort(&mut values);
    assert_eq!(check_sorted_by(&values, u32::cmp), None);
}
