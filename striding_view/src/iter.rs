// Copyright 2026 the Striding Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Iteration over the exposed elements of a [`Strided`] view.

use core::fmt;
use core::iter::FusedIterator;

use striding_traversal::{Bidirectional, Traversal};

use crate::view::{Strided, StridePosition};

impl<B: Traversal> Strided<B> {
    /// Returns an iterator over the exposed elements, in base order.
    ///
    /// The iterator is double-ended when the base is [`Bidirectional`];
    /// reversing it yields exactly the forward elements in reverse order.
    pub fn iter(&self) -> Iter<'_, B> {
        Iter {
            view: self,
            front: self.start(),
            back: self.end(),
        }
    }
}

impl<'a, B: Traversal> IntoIterator for &'a Strided<B> {
    type Item = B::Item;
    type IntoIter = Iter<'a, B>;

    fn into_iter(self) -> Iter<'a, B> {
        self.iter()
    }
}

/// Iterator over the exposed elements of a [`Strided`] view.
///
/// Walks a pair of cursors toward each other, so forward and backward
/// iteration can be interleaved without revisiting elements.
pub struct Iter<'a, B: Traversal> {
    view: &'a Strided<B>,
    front: StridePosition<B::Position>,
    back: StridePosition<B::Position>,
}

// Not derived: the derives would bound `B` itself instead of `B::Position`.
impl<B: Traversal> Clone for Iter<'_, B> {
    fn clone(&self) -> Self {
        Self {
            view: self.view,
            front: self.front.clone(),
            back: self.back.clone(),
        }
    }
}

impl<B: Traversal> fmt::Debug for Iter<'_, B>
where
    B: fmt::Debug,
    B::Position: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("view", &self.view)
            .field("front", &self.front)
            .field("back", &self.back)
            .finish()
    }
}

impl<B: Traversal> Iterator for Iter<'_, B> {
    type Item = B::Item;

    fn next(&mut self) -> Option<B::Item> {
        if self.front == self.back {
            return None;
        }
        let item = self.view.at(&self.front);
        self.front = self.view.after(&self.front);
        Some(item)
    }
}

impl<B: Bidirectional> DoubleEndedIterator for Iter<'_, B> {
    fn next_back(&mut self) -> Option<B::Item> {
        if self.front == self.back {
            return None;
        }
        self.back = self.view.before(&self.back);
        Some(self.view.at(&self.back))
    }
}

impl<B: Traversal> FusedIterator for Iter<'_, B> {}
