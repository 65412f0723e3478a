// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit tests, integration tests and benches.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::list::ArrayList;

/// A list holding `0..n` in order.
pub fn filled(n: u32) -> ArrayList<u32> {
    (0..n).collect()
}

/// A list holding `values` in order.
pub fn list_of<T: Clone>(values: &[T]) -> ArrayList<T> {
    values.iter().cloned().collect()
}

/// Live contents as a `Vec`, for comparing against an oracle.
pub fn contents<T: Clone>(list: &ArrayList<T>) -> Vec<T> {
    list.iter().cloned().collect()
}

/// Whether `value` survives the sieve over `divisors` (no divisor divides it).
pub fn survives_sieve(value: u32, divisors: &[u32]) -> bool {
    divisors.iter().all(|&d| d == 0 || value % d != 0)
}

/// Capacity after `adds` appends to a fresh list, per the doubling policy.
pub fn expected_capacity(adds: usize) -> usize {
    let mut capacity = crate::list::INITIAL_CAPACITY;
    while capacity < adds {
        capacity *= crate::list::GROWTH_FACTOR;
    }
    capacity
}
