// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fail-fast cursor over an [`ArrayList`].
//!
//! A cursor holds no borrow of its list. The list is passed to every call,
//! which leaves it free to be mutated between calls. The cursor catches
//! that instead of preventing it: it remembers the list's version and
//! fails with [`ListError::ConcurrentModification`] as soon as the version
//! moves without it.
//!
//! ```text
//!        next()           next()          remove()
//!   ┌──────────────┐ ┌──────────────┐ ┌──────────────────────┐
//!   ▼              │ ▼              │ ▼                      │
//! [ 0 ]  [ 1 ]  [ 2 ]  [ 3 ]      position steps back,   expected_version
//!   ^pos=0         ^pos=2          tail shifts left       re-synced
//! ```
//!
//! Removal through the cursor is the one sanctioned mutation: it bumps the
//! list's version like any other, then re-syncs the cursor so the cursor
//! itself stays valid. Once a mismatch is seen the cursor is invalidated for
//! good.

use super::{ArrayList, ListId};
use crate::error::ListError;
use crate::verify::contracts;

/// External iterator bound to one list.
#[derive(Debug, Clone)]
pub struct Cursor {
    owner: ListId,
    position: usize,
    expected_version: u64,
    can_remove: bool,
    invalidated: bool,
}

impl Cursor {
    pub(super) fn new(owner: ListId, version: u64) -> Self {
        Self {
            owner,
            position: 0,
            expected_version: version,
            can_remove: false,
            invalidated: false,
        }
    }

    /// Index of the next element `next` would return.
    pub fn position(&self) -> usize {
        self.position
    }

    /// True once a concurrent modification has been detected.
    pub fn is_invalidated(&self) -> bool {
        self.invalidated
    }

    /// Whether another element remains.
    pub fn has_next<T>(&mut self, list: &ArrayList<T>) -> Result<bool, ListError> {
        self.check_for_comodification(list)?;
        Ok(self.position < list.len())
    }

    /// Return the next element and advance.
    pub fn next<'a, T>(&mut self, list: &'a ArrayList<T>) -> Result<&'a T, ListError> {
        if !self.has_next(list)? {
            return Err(ListError::EndOfSequence);
        }
        let element = list.get(self.position)?;
        self.can_remove = true;
        self.position += 1;
        Ok(element)
    }

    /// Remove the element most recently returned by `next`.
    ///
    /// Fails with `IllegalState` unless `next` succeeded since the last
    /// removal. The cursor stays usable afterwards.
    pub fn remove<T>(&mut self, list: &mut ArrayList<T>) -> Result<T, ListError> {
        if !self.can_remove {
            return Err(ListError::IllegalState);
        }
        self.check_for_comodification(list)?;

        let index = self.position.checked_sub(1).ok_or(ListError::IllegalState)?;
        let removed = list.shift_out(index)?;
        self.position = index;
        self.can_remove = false;
        // INVARIANT: the cursor's own removal is the only change it absorbs
        self.expected_version = list.version();
        contracts::check_cursor_position(self.position, list.len());
        Ok(removed)
    }

    /// Feed every remaining element to `action`, in order.
    ///
    /// Stops at the first error, leaving the cursor where that error left it.
    pub fn for_each_remaining<T, F>(
        &mut self,
        list: &ArrayList<T>,
        mut action: F,
    ) -> Result<(), ListError>
    where
        F: FnMut(&T),
    {
        while self.has_next(list)? {
            action(self.next(list)?);
        }
        Ok(())
    }

    /// Drain the cursor, removing every element `keep` rejects.
    ///
    /// Returns the number of elements removed.
    pub fn retain_with<T, F>(&mut self, list: &mut ArrayList<T>, mut keep: F) -> Result<usize, ListError>
    where
        F: FnMut(&T) -> bool,
    {
        let mut removed = 0;
        while self.has_next(list)? {
            if !keep(self.next(list)?) {
                self.remove(list)?;
                removed += 1;
            }
        }
        Ok(removed)
    }

    fn check_for_comodification<T>(&mut self, list: &ArrayList<T>) -> Result<(), ListError> {
        let found = list.version();
        if !self.invalidated && list.id() == self.owner && found == self.expected_version {
            return Ok(());
        }

        if !self.invalidated {
            tracing::warn!(
                expected = self.expected_version,
                found,
                position = self.position,
                "cursor invalidated by concurrent modification"
            );
            self.invalidated = true;
        }
        Err(ListError::ConcurrentModification {
            expected: self.expected_version,
            found,
        })
    }
}
