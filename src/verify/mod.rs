// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: runtime contracts over the list's invariants.
//!
//! The contracts panic in debug builds when an invariant is violated and
//! compile to nothing in release. The unit tests, property tests, fuzz
//! targets and Kani harnesses all lean on the same definitions, so a
//! property only has to be written down once.

pub mod contracts;
