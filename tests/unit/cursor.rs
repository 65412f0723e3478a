//! Cursor protocol: traversal, sanctioned removal, fail-fast detection.

use super::common::{contents, filled, list_of};
use growlist::{ArrayList, ListError};

fn is_concurrent_modification<T>(result: Result<T, ListError>) -> bool {
    matches!(result, Err(ListError::ConcurrentModification { .. }))
}

// ============================================================================
// TRAVERSAL
// ============================================================================

#[test]
fn yields_every_element_in_insertion_order() {
    let list = filled(100);
    let mut cursor = list.cursor();
    let mut seen = Vec::new();
    while cursor.has_next(&list).unwrap() {
        assert_eq!(cursor.position(), seen.len());
        seen.push(*cursor.next(&list).unwrap());
    }
    assert_eq!(seen, (0..100).collect::<Vec<_>>());
    assert_eq!(cursor.position(), list.len());
}

#[test]
fn empty_list_is_exhausted_immediately() {
    let list: ArrayList<u8> = ArrayList::new();
    let mut cursor = list.cursor();
    assert_eq!(cursor.has_next(&list), Ok(false));
    assert_eq!(cursor.next(&list), Err(ListError::EndOfSequence));
}

#[test]
fn exhausted_cursor_keeps_reporting_end() {
    let list = filled(1);
    let mut cursor = list.cursor();
    cursor.next(&list).unwrap();
    for _ in 0..3 {
        assert_eq!(cursor.next(&list), Err(ListError::EndOfSequence));
    }
    assert!(!cursor.is_invalidated());
}

// ============================================================================
// SANCTIONED REMOVAL
// ============================================================================

#[test]
fn remove_without_next_is_illegal() {
    let mut list = filled(3);
    let mut cursor = list.cursor();
    assert_eq!(cursor.remove(&mut list), Err(ListError::IllegalState));
    assert_eq!(list.len(), 3);
}

#[test]
fn remove_twice_is_illegal() {
    let mut list = filled(3);
    let mut cursor = list.cursor();
    cursor.next(&list).unwrap();
    cursor.remove(&mut list).unwrap();
    assert_eq!(cursor.remove(&mut list), Err(ListError::IllegalState));
    assert_eq!(contents(&list), vec![1, 2]);
}

#[test]
fn remove_every_element() {
    let mut list = filled(25);
    let mut cursor = list.cursor();
    while cursor.has_next(&list).unwrap() {
        cursor.next(&list).unwrap();
        cursor.remove(&mut list).unwrap();
    }
    assert!(list.is_empty());
    assert_eq!(cursor.position(), 0);
    assert_eq!(list.capacity(), 40, "removal never shrinks capacity");
}

#[test]
fn remove_last_element_exhausts() {
    let mut list = list_of(&['a', 'b']);
    let mut cursor = list.cursor();
    cursor.next(&list).unwrap();
    cursor.next(&list).unwrap();
    assert_eq!(cursor.remove(&mut list), Ok('b'));
    assert_eq!(cursor.has_next(&list), Ok(false));
}

#[test]
fn removal_bumps_list_version_but_not_cursor_validity() {
    let mut list = filled(3);
    let before = list.version();
    let mut cursor = list.cursor();
    cursor.next(&list).unwrap();
    cursor.remove(&mut list).unwrap();
    assert_eq!(list.version(), before + 1);
    assert_eq!(cursor.has_next(&list), Ok(true));
}

// ============================================================================
// FAIL-FAST DETECTION
// ============================================================================

#[test]
fn direct_add_mid_traversal_is_detected() {
    let mut list = filled(10);
    let mut cursor = list.cursor();
    cursor.next(&list).unwrap();
    cursor.next(&list).unwrap();

    list.add(10);

    assert!(is_concurrent_modification(cursor.has_next(&list)));
    assert!(is_concurrent_modification(cursor.next(&list)));
    assert!(is_concurrent_modification(cursor.remove(&mut list)));
    assert_eq!(list.len(), 11, "failed remove must not touch the list");
}

#[test]
fn every_mutation_kind_invalidates() {
    type Mutation = fn(&mut ArrayList<u32>);
    let mutations: [(&str, Mutation); 7] = [
        ("add", |l| l.add(99)),
        ("insert", |l| l.insert(0, 99).unwrap()),
        ("set", |l| {
            l.set(0, 99).unwrap();
        }),
        ("remove_at", |l| {
            l.remove_at(0).unwrap();
        }),
        ("clear", |l| l.clear()),
        ("sort", |l| l.sort()),
        ("trim", |l| l.trim_to_size()),
    ];

    for (name, mutate) in mutations {
        let mut list = filled(5);
        let mut cursor = list.cursor();
        cursor.next(&list).unwrap();
        mutate(&mut list);
        assert!(
            is_concurrent_modification(cursor.has_next(&list)),
            "{} did not invalidate the cursor",
            name
        );
    }
}

#[test]
fn trim_without_reallocation_does_not_invalidate() {
    let mut list = filled(10);
    let mut cursor = list.cursor();
    list.trim_to_size();
    assert_eq!(cursor.has_next(&list), Ok(true));
}

#[test]
fn remove_checks_state_before_version() {
    let mut list = filled(3);
    let mut cursor = list.cursor();
    list.add(3);
    assert_eq!(cursor.remove(&mut list), Err(ListError::IllegalState));
}

#[test]
fn two_cursors_one_removes() {
    let mut list = filled(6);
    let mut a = list.cursor();
    let mut b = list.cursor();

    a.next(&list).unwrap();
    b.next(&list).unwrap();
    a.remove(&mut list).unwrap();

    assert_eq!(a.next(&list), Ok(&1));
    assert!(is_concurrent_modification(b.next(&list)));
    assert!(b.is_invalidated());
}

#[test]
fn error_reports_both_versions() {
    let mut list = filled(2);
    let mut cursor = list.cursor();
    list.add(2);
    list.add(3);
    assert_eq!(
        cursor.has_next(&list),
        Err(ListError::ConcurrentModification {
            expected: 2,
            found: 4
        })
    );
}

// ============================================================================
// BULK DRAIN
// ============================================================================

#[test]
fn for_each_remaining_drains_in_order() {
    let list = filled(10);
    let mut cursor = list.cursor();
    cursor.next(&list).unwrap();

    let mut seen = Vec::new();
    cursor.for_each_remaining(&list, |v| seen.push(*v)).unwrap();
    assert_eq!(seen, (1..10).collect::<Vec<_>>());
    assert_eq!(cursor.has_next(&list), Ok(false));
}

#[test]
fn for_each_remaining_propagates_invalidation() {
    let mut list = filled(4);
    let mut cursor = list.cursor();
    list.remove_at(0).unwrap();

    let mut calls = 0;
    let result = cursor.for_each_remaining(&list, |_| calls += 1);
    assert!(is_concurrent_modification(result));
    assert_eq!(calls, 0);
}

#[test]
fn retain_with_matches_manual_loop() {
    let mut manual = filled(200);
    let mut cursor = manual.cursor();
    while cursor.has_next(&manual).unwrap() {
        if cursor.next(&manual).unwrap() % 7 == 0 {
            cursor.remove(&mut manual).unwrap();
        }
    }

    let mut packaged = filled(200);
    let removed = packaged.cursor().retain_with(&mut packaged, |v| v % 7 != 0).unwrap();

    assert_eq!(removed, 200 - manual.len());
    assert_eq!(packaged, manual);
}
