// Copyright 2026 the Striding Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`RandomAccess`] traversal over `Range<usize>`.
//!
//! Ranges make a convenient owned base: they are `Clone + Copy`, cost nothing
//! to construct, and produce their elements by value. A position is the
//! contained value itself; the sentinel is the range's upper bound. Degenerate
//! ranges (`start > end`) behave as empty.

use core::ops::Range;

use crate::{Bidirectional, RandomAccess, Traversal};

impl Traversal for Range<usize> {
    type Item = usize;
    type Position = usize;

    fn start(&self) -> usize {
        self.start
    }

    fn end(&self) -> usize {
        self.end.max(self.start)
    }

    fn at(&self, pos: &usize) -> usize {
        debug_assert!(
            *pos >= self.start && *pos < self.end,
            "range traversal: reading a position outside the range"
        );
        *pos
    }

    fn after(&self, pos: &usize) -> usize {
        debug_assert!(
            *pos < self.end,
            "range traversal: advancing past the end sentinel"
        );
        pos + 1
    }

    fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    fn advance_toward(&self, pos: &usize, by: usize, limit: &usize) -> usize {
        debug_assert!(*pos <= *limit, "range traversal: limit is behind the position");
        pos.saturating_add(by).min(*limit)
    }
}

impl Bidirectional for Range<usize> {
    fn before(&self, pos: &usize) -> usize {
        debug_assert!(
            *pos > self.start,
            "range traversal: stepping before the start"
        );
        pos - 1
    }
}

impl RandomAccess for Range<usize> {
    fn offset(&self, pos: &usize, by: isize) -> usize {
        let target = *pos as isize + by;
        debug_assert!(
            target >= self.start as isize && target as usize <= Traversal::end(self),
            "range traversal: offset outside the range"
        );
        target.clamp(self.start as isize, Traversal::end(self) as isize) as usize
    }

    fn distance(&self, from: &usize, to: &usize) -> isize {
        *to as isize - *from as isize
    }
}
