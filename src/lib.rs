// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A growable array list built from scratch, with an in-place quicksort and
//! fail-fast cursors.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌───────────────────┐     ┌──────────────────┐
//! │ quicksort.rs │◀────│    list/mod.rs    │◀────│  list/cursor.rs  │
//! │ (Lomuto,     │     │ (ArrayList: slots,│     │ (Cursor: version │
//! │  last pivot) │     │  len, version)    │     │  check, remove)  │
//! └──────────────┘     └───────────────────┘     └──────────────────┘
//!        │                      │                         │
//!        ▼                      ▼                         ▼
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                      verify/contracts.rs                         │
//! │   (live-prefix, growth and cursor-position debug contracts)      │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Invariants
//!
//! | Property              | Where enforced                  |
//! |-----------------------|---------------------------------|
//! | Live prefix, no gaps  | `contracts::check_live_prefix`  |
//! | Doubling from 10      | `ArrayList::ensure_capacity`    |
//! | Bounds before writes  | every indexed `ArrayList` op    |
//! | Fail-fast iteration   | `Cursor::check_for_comodification` |
//!
//! # Usage
//!
//! ```
//! use growlist::{ArrayList, ListError};
//!
//! let mut list: ArrayList<u32> = (0..30).collect();
//! let mut cursor = list.cursor();
//! while cursor.has_next(&list)? {
//!     if cursor.next(&list)? % 2 == 0 {
//!         cursor.remove(&mut list)?;
//!     }
//! }
//! assert_eq!(list.len(), 15);
//!
//! list.add(99);
//! assert!(matches!(
//!     cursor.has_next(&list),
//!     Err(ListError::ConcurrentModification { .. })
//! ));
//! # Ok::<(), ListError>(())
//! ```

mod error;
pub mod list;
pub mod quicksort;
pub mod testing;
pub mod verify;

// Re-exports for public API
pub use error::ListError;
pub use list::{
    ArrayList, Cursor, IntoIter, Iter, List, ListId, GROWTH_FACTOR, INITIAL_CAPACITY,
};
pub use quicksort::{partition, quicksort, quicksort_by};
pub use verify::contracts;
