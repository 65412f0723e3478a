// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors surfaced by the list and its cursors.
//!
//! Every failure is checked before anything is written, so an `Err` always
//! means the list is exactly as it was before the call.

use std::fmt;

/// Error type for list and cursor operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// Index outside the operation's valid bound.
    OutOfRange { index: usize, size: usize },
    /// `next` called on an exhausted cursor.
    EndOfSequence,
    /// `remove` called without a fresh element from `next`.
    IllegalState,
    /// The list was changed by something other than this cursor.
    ConcurrentModification { expected: u64, found: u64 },
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListError::OutOfRange { index, size } => {
                write!(f, "Index: {}, Size: {}", index, size)
            }
            ListError::EndOfSequence => write!(f, "no more elements"),
            ListError::IllegalState => {
                write!(f, "remove() requires a preceding call to next()")
            }
            ListError::ConcurrentModification { expected, found } => {
                write!(
                    f,
                    "list modified outside the cursor (expected version {}, found {})",
                    expected, found
                )
            }
        }
    }
}

impl std::error::Error for ListError {}
