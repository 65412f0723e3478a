// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the quicksort.
//!
//! Arbitrary input must come out sorted and as a permutation of the input.
//! A comparator that ignores its arguments must still terminate without
//! panicking or losing elements.

#![no_main]

use growlist::contracts::check_sorted_by;
use growlist::{quicksort, quicksort_by};
use libfuzzer_sys::fuzz_target;
use std::cmp::Ordering;

fuzz_target!(|data: &[u8]| {
    // Property 1: sorted permutation of the input
    let mut ours = data.to_vec();
    quicksort(&mut ours);
    assert_eq!(check_sorted_by(&ours, u8::cmp), None);

    let mut expected = data.to_vec();
    expected.sort_unstable();
    assert_eq!(ours, expected);

    // Property 2: an inconsistent comparator still terminates with the
    // same multiset of elements
    let mut chaotic = data.to_vec();
    let mut flip = false;
    quicksort_by(&mut chaotic, |_, _| {
        flip = !flip;
        if flip {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    });
    chaotic.sort_unstable();
    assert_eq!(chaotic, expected);
});
