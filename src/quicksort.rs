// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Quicksort with a Lomuto partition.
//!
//! # Algorithm Overview
//!
//! ```text
//! Input: [3, 7, 1, 5, 4]          pivot = last element (4)
//!
//! Partition: sweep j over [low, high), swap every x <= pivot to the left
//! ┌───┬───┬───┬───┬───┐
//! │ 3 │ 1 │ 7 │ 5 │ 4 │   after sweep: i = 2 (3 and 1 are <= 4)
//! └───┴───┴───┴───┴───┘
//! ┌───┬───┬───┬───┬───┐
//! │ 3 │ 1 │ 4 │ 5 │ 7 │   pivot swapped into slot i, its final place
//! └───┴───┴───┴───┴───┘
//!
//! Recurse on the smaller of [3, 1] and [5, 7], loop on the other.
//! ```
//!
//! # Complexity
//!
//! - Time: O(n log n) average, O(n²) when the input is already ordered
//!   against the last-element pivot
//! - Space: O(log n) stack; only the smaller side is recursed into
//!
//! Not stable. The pivot is always the last element of the subrange; the
//! exact swap sequence is part of the contract, so the pivot choice must not
//! change.

use std::cmp::Ordering;

/// Sort `array` in place, ascending per `compare`.
///
/// `compare` must be a consistent total order over the elements present;
/// otherwise the resulting order is unspecified (but the call still
/// terminates and never panics).
pub fn quicksort_by<T, F>(array: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if array.len() > 1 {
        sort_range(array, 0, array.len() - 1, &mut compare);
    }
}

/// Sort `array` in place by `T`'s natural order.
pub fn quicksort<T: Ord>(array: &mut [T]) {
    quicksort_by(array, T::cmp);
}

/// Sort the inclusive range `[low, high]`.
///
/// Recurses into the smaller side and loops on the larger one, so the stack
/// stays O(log n) even when every partition is maximally lopsided (sorted
/// or all-equal input).
fn sort_range<T, F>(array: &mut [T], mut low: usize, mut high: usize, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    while low < high {
        let pivot = partition(array, low, high, compare);

        if pivot - low < high - pivot {
            // pivot can be 0, so the left bound is only formed when it exists
            if pivot > low {
                sort_range(array, low, pivot - 1, compare);
            }
            low = pivot + 1;
        } else {
            sort_range(array, pivot + 1, high, compare);
            // left side is the larger one here, so it is non-empty
            high = pivot - 1;
        }
    }
}

/// Lomuto partition of the inclusive range `[low, high]` around `array[high]`.
///
/// Returns the pivot's final index `p`. Afterwards every element in
/// `[low, p)` compares `<=` the pivot and every element in `(p, high]`
/// compares `>` it.
///
/// # Panics
/// Panics if `low > high` or `high >= array.len()`.
pub fn partition<T, F>(array: &mut [T], low: usize, high: usize, compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    // INVARIANT: array[low..next] <= pivot for all indices swept so far
    let mut next = low;
    for j in low..high {
        if compare(&array[j], &array[high]) != Ordering::Greater {
            array.swap(next, j);
            next += 1;
        }
    }
    array.swap(next, high);
    next
}
