// Copyright 2026 the Striding Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Striding for forward-only sequences: a lazy [`Iterator`] adapter.
//!
//! This is the forward-only tier of the crate: no positions, no sentinels,
//! just a source iterator consumed `step` elements at a time. The source may
//! be infinite; skipped elements are discarded as they are passed over, never
//! buffered.

use core::iter::FusedIterator;
use core::num::NonZeroUsize;

/// An iterator producing every `step`-th element of a source iterator.
///
/// Created by [`StrideByExt::stride_by`]. The first element of the source is
/// always produced; after that, `step − 1` elements are skipped per produced
/// element. If the source exhausts mid-skip, iteration simply ends.
#[derive(Debug, Clone)]
pub struct StrideBy<I> {
    iter: I,
    step: NonZeroUsize,
    first: bool,
}

impl<I> StrideBy<I> {
    /// Wraps `iter`, exposing every `step`-th element.
    #[must_use]
    pub const fn new(iter: I, step: NonZeroUsize) -> Self {
        Self {
            iter,
            step,
            first: true,
        }
    }

    /// Returns the step size.
    #[must_use]
    pub const fn step(&self) -> usize {
        self.step.get()
    }

    /// Forward offset of the next produced element within the remaining
    /// source: 0 before the first element has been produced, `step − 1`
    /// afterwards (the elements still to skip).
    const fn pending_skip(&self) -> usize {
        if self.first { 0 } else { self.step.get() - 1 }
    }
}

impl<I: Iterator> Iterator for StrideBy<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.first {
            self.first = false;
            self.iter.next()
        } else {
            self.iter.nth(self.step.get() - 1)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let produced = |n: usize| {
            let skip = self.pending_skip();
            if n <= skip {
                0
            } else {
                1 + (n - 1 - skip) / self.step.get()
            }
        };
        let (lower, upper) = self.iter.size_hint();
        (produced(lower), upper.map(produced))
    }
}

impl<I> DoubleEndedIterator for StrideBy<I>
where
    I: DoubleEndedIterator + ExactSizeIterator,
{
    fn next_back(&mut self) -> Option<I::Item> {
        // The exposed elements sit at forward offsets `skip, skip + step, …`
        // of the remaining source; the last of them is what a backward step
        // must produce. Knowing the remaining length pins down that phase.
        let remaining = self.iter.len();
        let skip = self.pending_skip();
        if remaining <= skip {
            return None;
        }
        let produced = 1 + (remaining - 1 - skip) / self.step.get();
        let last_offset = skip + (produced - 1) * self.step.get();
        self.iter.nth_back(remaining - 1 - last_offset)
    }
}

impl<I: ExactSizeIterator> ExactSizeIterator for StrideBy<I> {}

impl<I: FusedIterator> FusedIterator for StrideBy<I> {}

/// Extension trait that adds [`stride_by`](Self::stride_by) to every
/// [`Iterator`].
pub trait StrideByExt: Iterator {
    /// Returns an iterator over every `step`-th element of `self`.
    ///
    /// Works over infinite sources, since each produced element only requires
    /// consuming `step` elements from the source:
    ///
    /// ```rust
    /// use core::num::NonZeroUsize;
    /// use striding_view::StrideByExt;
    ///
    /// let step = NonZeroUsize::new(3).unwrap();
    /// let firsts: Vec<u32> = (0..).stride_by(step).take(4).collect();
    /// assert_eq!(firsts, [0, 3, 6, 9]);
    /// ```
    fn stride_by(self, step: NonZeroUsize) -> StrideBy<Self>
    where
        Self: Sized,
    {
        StrideBy::new(self, step)
    }
}

impl<I: Iterator> StrideByExt for I {}
