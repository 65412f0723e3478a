// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the growlist growth rule and partition.
//!
//! This standalone crate mirrors the capacity arithmetic and the Lomuto
//! partition step from the main crate and proves them for all inputs up to
//! small bounds.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **Growth makes room**: a full list always gets strictly more capacity
//! 2. **Partition**: the returned index is in range, everything left of it is
//!    `<=` the pivot and everything right of it is `>` the pivot
//! 3. **No panics**: partition never indexes out of bounds

/// Slots in a freshly created list (must match src/list/mod.rs).
pub const INITIAL_CAPACITY: usize = 10;

/// Capacity multiplier on growth (must match src/list/mod.rs).
pub const GROWTH_FACTOR: usize = 2;

// ============================================================================
// GROWTH (mirrors ArrayList::ensure_capacity)
// ============================================================================

/// Capacity after one growth step from `old_capacity`.
pub fn grown_capacity(old_capacity: usize) -> usize {
    if old_capacity == 0 {
        INITIAL_CAPACITY
    } else {
        old_capacity.saturating_mul(GROWTH_FACTOR)
    }
}

// ============================================================================
// PARTITION (mirrors quicksort::partition, specialised to u8)
// ============================================================================

/// Lomuto partition of `array[low..=high]` around `array[high]`.
pub fn partition(array: &mut [u8], low: usize, high: usize) -> usize {
    let mut next = low;
    for j in low..high {
        if array[j] <= array[high] {
            array.swap(next, j);
            next += 1;
        }
    }
    array.swap(next, high);
    next
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Growing a full list always leaves room for the next element.
    #[kani::proof]
    fn verify_growth_makes_room() {
        let len: usize = kani::any();
        kani::assume(len < usize::MAX);

        let grown = grown_capacity(len);
        kani::assert(grown > len, "a full list must grow");
    }

    /// From a fresh list, capacity stays INITIAL_CAPACITY * 2^k.
    #[kani::proof]
    #[kani::unwind(8)]
    fn verify_growth_sequence() {
        let steps: u32 = kani::any_where(|&n| n < 7);
        let mut capacity = INITIAL_CAPACITY;
        for _ in 0..steps {
            capacity = grown_capacity(capacity);
        }
        kani::assert(
            capacity == INITIAL_CAPACITY << steps,
            "capacity must follow doubling from INITIAL_CAPACITY",
        );
    }

    /// Partition splits any small array around the pivot.
    #[kani::proof]
    #[kani::unwind(7)]
    fn verify_partition_splits() {
        const N: usize = 6;
        let mut array: [u8; N] = kani::any();
        let low: usize = kani::any_where(|&l| l < N);
        let high: usize = kani::any_where(|&h| h < N && h >= low);
        let pivot = array[high];

        let p = partition(&mut array, low, high);

        kani::assert(p >= low && p <= high, "pivot index must stay in range");
        kani::assert(array[p] == pivot, "pivot must land at the returned index");
        for i in low..p {
            kani::assert(array[i] <= pivot, "left side must be <= pivot");
        }
        for i in p + 1..=high {
            kani::assert(array[i] > pivot, "right side must be > pivot");
        }
    }
}
