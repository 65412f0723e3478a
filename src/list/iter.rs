// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Std iterator adapters over the live slots.

use std::iter::FusedIterator;

/// Borrowing iterator returned by [`ArrayList::iter`](super::ArrayList::iter).
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    live: std::slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(live: &'a [Option<T>]) -> Self {
        Self { live: live.iter() }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.live.next().and_then(Option::as_ref)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.live.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.live.next_back().and_then(Option::as_ref)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator returned by `ArrayList::into_iter`.
#[derive(Debug)]
pub struct IntoIter<T> {
    live: std::vec::IntoIter<Option<T>>,
}

impl<T> IntoIter<T> {
    pub(super) fn new(slots: Box<[Option<T>]>, len: usize) -> Self {
        let mut live = slots.into_vec();
        live.truncate(len);
        Self {
            live: live.into_iter(),
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.live.next().flatten()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.live.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.live.next_back().flatten()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
