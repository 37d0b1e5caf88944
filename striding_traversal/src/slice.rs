// Copyright 2026 the Striding Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`RandomAccess`] traversal over shared slices.
//!
//! Positions are plain element indices; the sentinel is the slice length.
//! Elements are produced by reference, so the traversal borrows from the
//! slice rather than copying.

use crate::{Bidirectional, RandomAccess, Traversal};

impl<'a, T> Traversal for &'a [T] {
    type Item = &'a T;
    type Position = usize;

    fn start(&self) -> usize {
        0
    }

    fn end(&self) -> usize {
        (**self).len()
    }

    fn at(&self, pos: &usize) -> &'a T {
        let slice: &'a [T] = *self;
        &slice[*pos]
    }

    fn after(&self, pos: &usize) -> usize {
        debug_assert!(
            *pos < (**self).len(),
            "slice traversal: advancing past the end sentinel"
        );
        pos + 1
    }

    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn advance_toward(&self, pos: &usize, by: usize, limit: &usize) -> usize {
        debug_assert!(*pos <= *limit, "slice traversal: limit is behind the position");
        pos.saturating_add(by).min(*limit)
    }
}

impl<T> Bidirectional for &[T] {
    fn before(&self, pos: &usize) -> usize {
        debug_assert!(*pos > 0, "slice traversal: stepping before the start");
        pos - 1
    }
}

impl<T> RandomAccess for &[T] {
    fn offset(&self, pos: &usize, by: isize) -> usize {
        let target = *pos as isize + by;
        debug_assert!(
            target >= 0 && target as usize <= (**self).len(),
            "slice traversal: offset outside the slice"
        );
        target.clamp(0, (**self).len() as isize) as usize
    }

    fn distance(&self, from: &usize, to: &usize) -> isize {
        *to as isize - *from as isize
    }
}
