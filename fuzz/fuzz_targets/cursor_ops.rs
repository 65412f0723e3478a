// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for cursor state transitions.
//!
//! Interleaves cursor calls with direct mutations. A cursor must either
//! agree with a simple model or report exactly the error the model predicts,
//! and once it reports a concurrent modification it must never recover.

#![no_main]

use arbitrary::Arbitrary;
use growlist::{ArrayList, ListError};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Step {
    HasNext,
    Next,
    Remove,
    DirectAdd(u8),
    DirectRemove(u8),
}

fuzz_target!(|input: (u8, Vec<Step>)| {
    let (len, steps) = input;
    let mut list: ArrayList<u8> = (0..len).collect();
    let mut cursor = list.cursor();

    // model
    let mut position = 0usize;
    let mut can_remove = false;
    let mut stale = false;

    for step in steps {
        match step {
            Step::HasNext => match cursor.has_next(&list) {
                Ok(more) => {
                    assert!(!stale);
                    assert_eq!(more, position < list.len());
                }
                Err(e) => {
                    assert!(stale);
                    assert!(matches!(e, ListError::ConcurrentModification { .. }));
                }
            },
            Step::Next => match cursor.next(&list) {
                Ok(_) => {
                    assert!(!stale && position < list.len());
                    position += 1;
                    can_remove = true;
                }
                Err(ListError::EndOfSequence) => assert!(!stale && position >= list.len()),
                Err(ListError::ConcurrentModification { .. }) => assert!(stale),
                Err(e) => panic!("unexpected error from next: {:?}", e),
            },
            Step::Remove => match cursor.remove(&mut list) {
                Ok(_) => {
                    assert!(!stale && can_remove);
                    position -= 1;
                    can_remove = false;
                }
                Err(ListError::IllegalState) => assert!(!can_remove),
                Err(ListError::ConcurrentModification { .. }) => assert!(stale && can_remove),
                Err(e) => panic!("unexpected error from remove: {:?}", e),
            },
            Step::DirectAdd(v) => {
                list.add(v);
                stale = true;
            }
            Step::DirectRemove(i) => {
                if list.remove_at(usize::from(i)).is_ok() {
                    stale = true;
                }
            }
        }
        // only a real outside change can invalidate
        if cursor.is_invalidated() {
            assert!(stale);
        }
        if !stale {
            assert_eq!(cursor.position(), position);
        }
    }
});
