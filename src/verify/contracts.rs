// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the list and its sort.
//!
//! Debug-mode assertions over the properties the list relies on. These are:
//!
//! 1. **Zero-cost in release builds** (use `debug_assert!`)
//! 2. **Early failure detection** during development and fuzzing
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! Every mutating list operation ends with `check_live_prefix`. If one of
//! these fires, the slot bookkeeping is broken and every later answer from
//! the list is suspect.
//!
//! | Contract Function       | Property                                         |
//! |-------------------------|--------------------------------------------------|
//! | `check_live_prefix`     | `slots[..len]` all occupied, `slots[len..]` empty |
//! | `check_growth`          | capacity strictly grows and fits the new element |
//! | `check_cursor_position` | `position <= len`                                |
//! | `check_sorted_by`       | adjacent pairs ordered per comparator            |
//!
//! `check_sorted_by` calls the comparator again, so the list never runs it on
//! user comparators (an inconsistent comparator must not turn into a panic).
//! Tests and fuzz targets call it directly.

use std::cmp::Ordering;

use crate::list::{GROWTH_FACTOR, INITIAL_CAPACITY};

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

const _: () = {
    // INVARIANT: a fresh list can hold at least one element without growing
    assert!(INITIAL_CAPACITY > 0);
    // INVARIANT: growth must make room, or add() on a full list loops forever
    assert!(GROWTH_FACTOR >= 2);
};

// ============================================================================
// STORAGE CONTRACTS
// ============================================================================

/// Check that exactly the first `len` slots are occupied.
///
/// # Panics (debug builds only)
/// Panics if `len > slots.len()`, if a live slot is empty, or if a slot past
/// `len` still holds a value.
#[inline]
pub fn check_live_prefix<T>(slots: &[Option<T>], len: usize) {
    debug_assert!(
        len <= slots.len(),
        "Contract violation: LivePrefix - len {} > capacity {}",
        len,
        slots.len()
    );

    if cfg!(debug_assertions) && len <= slots.len() {
        if let Some(hole) = slots[..len].iter().position(Option::is_none) {
            panic!(
                "Contract violation: LivePrefix - empty slot {} inside live range 0..{}",
                hole, len
            );
        }
        if let Some(stale) = slots[len..].iter().position(Option::is_some) {
            panic!(
                "Contract violation: LivePrefix - stale value at slot {} past len {}",
                len + stale,
                len
            );
        }
    }
}

/// Check a capacity change made to fit one more element.
///
/// # Panics (debug builds only)
/// Panics if the new capacity does not grow or cannot hold `len + 1`.
#[inline]
pub fn check_growth(old_capacity: usize, new_capacity: usize, len: usize) {
    debug_assert!(
        new_capacity > old_capacity,
        "Contract violation: Growth - capacity {} -> {} did not grow",
        old_capacity,
        new_capacity
    );
    debug_assert!(
        new_capacity > len,
        "Contract violation: Growth - capacity {} cannot hold {} elements",
        new_capacity,
        len + 1
    );
}

// ============================================================================
// CURSOR CONTRACTS
// ============================================================================

/// Check that a cursor position lies within the list.
#[inline]
pub fn check_cursor_position(position: usize, len: usize) {
    debug_assert!(
        position <= len,
        "Contract violation: CursorPosition - position {} > len {}",
        position,
        len
    );
}

// ============================================================================
// ORDER CONTRACTS
// ============================================================================

/// Check that a sequence is ordered per `compare`.
///
/// Returns the first index `i` where `compare(items[i], items[i + 1])` is
/// `Greater`, so callers outside debug builds can still use the answer.
pub fn check_sorted_by<'a, T, I, F>(items: I, mut compare: F) -> Option<usize>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut iter = items.into_iter();
    let mut prev = iter.next()?;
    for (i, curr) in iter.enumerate() {
        if compare(prev, curr) == Ordering::Greater {
            return Some(i);
        }
        prev = curr;
    }
    None
}
