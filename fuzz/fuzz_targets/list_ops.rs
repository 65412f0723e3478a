// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target replaying arbitrary operation histories against a `Vec`.
//!
//! Indices are unconstrained, so most of the interesting inputs are the
//! out-of-range ones: they must fail cleanly and leave the list untouched.

#![no_main]

use arbitrary::Arbitrary;
use growlist::{ArrayList, ListError};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Op {
    Add(i16),
    Insert(u8, i16),
    Set(u8, i16),
    RemoveAt(u8),
    Clear,
    Sort,
    SortReverse,
    Trim,
}

fuzz_target!(|ops: Vec<Op>| {
    let mut list = ArrayList::new();
    let mut oracle: Vec<i16> = Vec::new();

    for op in ops {
        let size = oracle.len();
        let version = list.version();
        let capacity = list.capacity();

        let failed = match op {
            Op::Add(v) => {
                list.add(v);
                oracle.push(v);
                false
            }
            Op::Insert(i, v) => {
                let i = usize::from(i);
                let got = list.insert(i, v);
                if i <= size {
                    assert_eq!(got, Ok(()));
                    oracle.insert(i, v);
                    false
                } else {
                    assert_eq!(got, Err(ListError::OutOfRange { index: i, size }));
                    true
                }
            }
            Op::Set(i, v) => {
                let i = usize::from(i);
                match oracle.get_mut(i) {
                    Some(slot) => {
                        assert_eq!(list.set(i, v), Ok(*slot));
                        *slot = v;
                        false
                    }
                    None => {
                        assert_eq!(list.set(i, v), Err(ListError::OutOfRange { index: i, size }));
                        true
                    }
                }
            }
            Op::RemoveAt(i) => {
                let i = usize::from(i);
                if i < size {
                    assert_eq!(list.remove_at(i), Ok(oracle.remove(i)));
                    false
                } else {
                    assert_eq!(list.remove_at(i), Err(ListError::OutOfRange { index: i, size }));
                    true
                }
            }
            Op::Clear => {
                list.clear();
                oracle.clear();
                false
            }
            Op::Sort => {
                list.sort();
                oracle.sort_unstable();
                false
            }
            Op::SortReverse => {
                list.sort_by(|a, b| b.cmp(a));
                oracle.sort_unstable_by(|a, b| b.cmp(a));
                false
            }
            Op::Trim => {
                list.trim_to_size();
                capacity == size
            }
        };

        if failed {
            assert_eq!(list.version(), version, "no-op changed the version");
        } else {
            assert_eq!(list.version(), version.wrapping_add(1));
        }
        assert!(list.capacity() >= list.len());
        assert!(list.iter().eq(oracle.iter()), "contents diverged");
    }
});
