// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The growable array list.
//!
//! `ArrayList<T>` owns a boxed slice of slots and tracks how many of them
//! are live. The physical capacity (`slots.len()`) only changes in two
//! places: `ensure_capacity` doubles it when an insertion would overflow,
//! and `trim_to_size` shrinks it to exactly `len`.
//!
//! ```text
//!            len = 4                 capacity = 10
//! ┌────┬────┬────┬────┬────┬────┬────┬────┬────┬────┐
//! │ a  │ b  │ c  │ d  │ ·  │ ·  │ ·  │ ·  │ ·  │ ·  │
//! └────┴────┴────┴────┴────┴────┴────┴────┴────┴────┘
//!   live (Some)          empty (None)
//! ```
//!
//! Every mutation bumps `version`. Cursors (see [`Cursor`]) remember the
//! version they last saw and refuse to continue once it moves without them.

mod cursor;
mod iter;

pub use cursor::Cursor;
pub use iter::{IntoIter, Iter};

use std::cmp::Ordering;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

use crate::error::ListError;
use crate::quicksort::quicksort_by;
use crate::verify::contracts;

/// Capacity of a freshly constructed list.
pub const INITIAL_CAPACITY: usize = 10;

/// Factor applied to the capacity when a full list grows.
pub const GROWTH_FACTOR: usize = 2;

/// Identity of one list instance, used to bind a cursor to its list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListId(u64);

impl ListId {
    /// Next id from a process-wide counter, so lists built on different
    /// threads never share one.
    fn fresh() -> Self {
        static NEXT_ID: AtomicU64 = AtomicU64::new(0);
        ListId(NEXT_ID.fetch_add(1, AtomicOrdering::Relaxed))
    }
}

/// The abstract list interface.
///
/// `ArrayList` is the only implementation in this crate; the trait lets
/// callers write code that does not care how the list is stored.
pub trait List<T> {
    fn add(&mut self, element: T);
    fn insert(&mut self, index: usize, element: T) -> Result<(), ListError>;
    fn get(&self, index: usize) -> Result<&T, ListError>;
    fn set(&mut self, index: usize, element: T) -> Result<T, ListError>;
    fn remove_at(&mut self, index: usize) -> Result<T, ListError>;
    fn clear(&mut self);
    fn sort_by(&mut self, compare: &mut dyn FnMut(&T, &T) -> Ordering);
    fn trim_to_size(&mut self);
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A growable, index-addressable list backed by a manually managed buffer.
pub struct ArrayList<T> {
    slots: Box<[Option<T>]>,
    len: usize,
    version: u64,
    id: ListId,
}

fn empty_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}

impl<T> ArrayList<T> {
    /// Create an empty list with [`INITIAL_CAPACITY`] slots.
    pub fn new() -> Self {
        Self {
            slots: empty_slots(INITIAL_CAPACITY),
            len: 0,
            version: 0,
            id: ListId::fresh(),
        }
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots currently allocated.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Modification counter, bumped by every mutating call.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn id(&self) -> ListId {
        self.id
    }

    /// Append `element` at the end, doubling the capacity first if full.
    pub fn add(&mut self, element: T) {
        self.ensure_capacity();
        self.slots[self.len] = Some(element);
        self.len += 1;
        self.touch();
        contracts::check_live_prefix(&self.slots, self.len);
    }

    /// Insert `element` at `index`, shifting `[index, len)` one slot right.
    ///
    /// Valid for `0 <= index <= len`.
    pub fn insert(&mut self, index: usize, element: T) -> Result<(), ListError> {
        // INVARIANT: bounds are checked before anything is written
        if index > self.len {
            return Err(self.out_of_range(index));
        }
        self.ensure_capacity();

        // slots[len] is empty, so rotating moves that hole to `index`
        self.slots[index..=self.len].rotate_right(1);
        self.slots[index] = Some(element);
        self.len += 1;
        self.touch();
        contracts::check_live_prefix(&self.slots, self.len);
        Ok(())
    }

    /// Element at `index`. Valid for `0 <= index < len`.
    pub fn get(&self, index: usize) -> Result<&T, ListError> {
        self.slots[..self.len]
            .get(index)
            .and_then(Option::as_ref)
            .ok_or(self.out_of_range(index))
    }

    /// Overwrite the element at `index`, returning the previous one.
    pub fn set(&mut self, index: usize, element: T) -> Result<T, ListError> {
        let error = self.out_of_range(index);
        let slot = self.slots[..self.len]
            .get_mut(index)
            .and_then(Option::as_mut)
            .ok_or(error)?;
        let previous = std::mem::replace(slot, element);
        self.touch();
        Ok(previous)
    }

    /// Remove and return the element at `index`, shifting the tail left.
    pub fn remove_at(&mut self, index: usize) -> Result<T, ListError> {
        self.shift_out(index)
    }

    /// Drop every live element. Capacity is unchanged.
    pub fn clear(&mut self) {
        for slot in &mut self.slots[..self.len] {
            *slot = None;
        }
        self.len = 0;
        self.touch();
        contracts::check_live_prefix(&self.slots, self.len);
    }

    /// Sort the list in place with the crate's quicksort.
    ///
    /// The live elements are moved into a scratch buffer of exactly `len`
    /// elements, sorted there, and moved back. `compare` must be a
    /// consistent total order; otherwise the resulting order is
    /// unspecified. If `compare` panics, the list is left empty.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let len = self.len;
        let mut scratch: Box<[T]> = self.slots[..len]
            .iter_mut()
            .filter_map(Option::take)
            .collect();

        // Until the elements come back, the list is empty; a panicking
        // comparator then leaves a valid (if empty) list behind.
        self.len = 0;
        quicksort_by(&mut scratch, compare);

        let restored = scratch.len();
        for (slot, value) in self.slots.iter_mut().zip(scratch.into_vec()) {
            *slot = Some(value);
        }
        self.len = restored;
        self.touch();
        tracing::trace!(len = self.len, "sorted list");
        contracts::check_live_prefix(&self.slots, self.len);
    }

    /// Shrink the capacity to exactly `len`. No-op (and no version bump)
    /// when there is no spare capacity.
    pub fn trim_to_size(&mut self) {
        if self.slots.len() > self.len {
            let old_capacity = self.slots.len();
            self.reallocate(self.len);
            self.touch();
            tracing::debug!(
                old_capacity,
                new_capacity = self.len,
                "trimmed list storage"
            );
        }
        contracts::check_live_prefix(&self.slots, self.len);
    }

    /// First element, if any.
    pub fn first(&self) -> Option<&T> {
        self.get(0).ok()
    }

    /// Last element, if any.
    pub fn last(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|i| self.get(i).ok())
    }

    /// Borrowing iterator over the live elements.
    ///
    /// The borrow keeps the list frozen, so this iterator needs no version
    /// check. Use [`cursor`](Self::cursor) to remove while iterating.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.slots[..self.len])
    }

    /// Fail-fast cursor positioned before the first element.
    pub fn cursor(&self) -> Cursor {
        Cursor::new(self.id, self.version)
    }

    /// Remove the live element at `index` and close the gap.
    ///
    /// Shared by `remove_at` and `Cursor::remove` so the shift exists once.
    fn shift_out(&mut self, index: usize) -> Result<T, ListError> {
        let error = self.out_of_range(index);
        let removed = self.slots[..self.len]
            .get_mut(index)
            .and_then(Option::take)
            .ok_or(error)?;

        // INVARIANT: slots[len - 1] is None after the shift (no stale tail)
        // slots[index] is now empty; rotating moves the hole to the old tail
        self.slots[index..self.len].rotate_left(1);
        self.len -= 1;
        self.touch();
        contracts::check_live_prefix(&self.slots, self.len);
        Ok(removed)
    }

    /// Make room for one more element.
    fn ensure_capacity(&mut self) {
        let old_capacity = self.slots.len();
        if self.len < old_capacity {
            return;
        }

        // A trimmed empty list has no capacity to double.
        let new_capacity = if old_capacity == 0 {
            INITIAL_CAPACITY
        } else {
            old_capacity.saturating_mul(GROWTH_FACTOR)
        };
        self.reallocate(new_capacity);
        contracts::check_growth(old_capacity, new_capacity, self.len);
        tracing::trace!(old_capacity, new_capacity, "grew list storage");
    }

    /// Move the live elements into a fresh buffer of `capacity` slots.
    fn reallocate(&mut self, capacity: usize) {
        debug_assert!(capacity >= self.len);
        let mut slots = empty_slots(capacity);
        for (dst, src) in slots.iter_mut().zip(&mut self.slots[..self.len]) {
            *dst = src.take();
        }
        self.slots = slots;
    }

    // INVARIANT: every successful structural change bumps the version exactly once
    fn touch(&mut self) {
        self.version = self.version.wrapping_add(1);
    }

    fn out_of_range(&self, index: usize) -> ListError {
        ListError::OutOfRange {
            index,
            size: self.len,
        }
    }
}

impl<T: Ord> ArrayList<T> {
    /// Sort ascending by `T`'s natural order.
    pub fn sort(&mut self) {
        self.sort_by(T::cmp);
    }
}

impl<T> List<T> for ArrayList<T> {
    fn add(&mut self, element: T) {
        ArrayList::add(self, element);
    }

    fn insert(&mut self, index: usize, element: T) -> Result<(), ListError> {
        ArrayList::insert(self, index, element)
    }

    fn get(&self, index: usize) -> Result<&T, ListError> {
        ArrayList::get(self, index)
    }

    fn set(&mut self, index: usize, element: T) -> Result<T, ListError> {
        ArrayList::set(self, index, element)
    }

    fn remove_at(&mut self, index: usize) -> Result<T, ListError> {
        ArrayList::remove_at(self, index)
    }

    fn clear(&mut self) {
        ArrayList::clear(self);
    }

    fn sort_by(&mut self, compare: &mut dyn FnMut(&T, &T) -> Ordering) {
        ArrayList::sort_by(self, compare);
    }

    fn trim_to_size(&mut self) {
        ArrayList::trim_to_size(self);
    }

    fn len(&self) -> usize {
        self.len
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Clones keep the capacity but start a fresh history: new identity,
/// version 0. Cursors of the original do not carry over.
impl<T: Clone> Clone for ArrayList<T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            len: self.len,
            version: 0,
            id: ListId::fresh(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Equality compares live contents only, not capacity or version.
impl<T: PartialEq> PartialEq for ArrayList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ArrayList<T> {}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.add(element);
        }
    }
}

impl<T> IntoIterator for ArrayList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.slots, self.len)
    }
}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
