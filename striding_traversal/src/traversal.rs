// Copyright 2026 the Striding Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The capability-tier traits.

/// An ordered container that supports positional, forward-only traversal.
///
/// A `Traversal` has a [`start`](Self::start) position, a past-the-end
/// [`end`](Self::end) sentinel, and a way to move a position forward. The
/// sentinel compares equal to itself and to no real position, and must never
/// be passed to [`at`](Self::at).
///
/// Implementations must guarantee that:
/// - repeatedly applying [`after`](Self::after) from `start()` visits every
///   element exactly once, in container order, and reaches `end()`,
/// - `after` runs in O(1) amortized time,
/// - positions obtained from this container stay valid as long as the
///   container is not mutated.
pub trait Traversal {
    /// The element type produced by [`at`](Self::at).
    type Item;

    /// An opaque handle identifying a location within the traversal.
    type Position: Clone + PartialEq;

    /// The position of the first element, equal to [`end`](Self::end) when the
    /// container is empty.
    fn start(&self) -> Self::Position;

    /// The past-the-end sentinel.
    ///
    /// The sentinel is a boundary marker, not an addressable position:
    /// [`at`](Self::at) and [`after`](Self::after) must not be called with it.
    fn end(&self) -> Self::Position;

    /// The element at `pos`.
    ///
    /// `pos` must be a real position of this container, never the sentinel.
    fn at(&self, pos: &Self::Position) -> Self::Item;

    /// The position immediately after `pos`.
    ///
    /// `pos` must not be the sentinel; advancing the sentinel is a caller bug.
    fn after(&self, pos: &Self::Position) -> Self::Position;

    /// Returns `true` if the container has no elements.
    fn is_empty(&self) -> bool {
        self.start() == self.end()
    }

    /// Number of elements in the container.
    ///
    /// The default walks the container and costs O(len). Implementations that
    /// know their length should override it; [`RandomAccess`] implementations
    /// must override it with an O(1) version.
    fn len(&self) -> usize {
        let end = self.end();
        let mut pos = self.start();
        let mut n = 0;
        while pos != end {
            pos = self.after(&pos);
            n += 1;
        }
        n
    }

    /// Advances `pos` forward by up to `by` steps, stopping at `limit`.
    ///
    /// `limit` must be a position at or ahead of `pos` (the sentinel is
    /// allowed). Returns `limit` itself when `pos` would move past it.
    ///
    /// The default applies [`after`](Self::after) repeatedly and costs O(by);
    /// [`RandomAccess`] implementations should override it in O(1).
    fn advance_toward(
        &self,
        pos: &Self::Position,
        by: usize,
        limit: &Self::Position,
    ) -> Self::Position {
        let mut pos = pos.clone();
        for _ in 0..by {
            if pos == *limit {
                break;
            }
            pos = self.after(&pos);
        }
        pos
    }
}

/// A [`Traversal`] that additionally supports backward position movement.
pub trait Bidirectional: Traversal {
    /// The position immediately before `pos`.
    ///
    /// `pos` must not be the start position; stepping before the start is a
    /// caller bug. `before(end())` is the position of the last element.
    fn before(&self, pos: &Self::Position) -> Self::Position;
}

/// A [`Bidirectional`] traversal with O(1) position arithmetic.
///
/// Implementations must also override [`Traversal::len`] and
/// [`Traversal::advance_toward`] so they run in O(1).
pub trait RandomAccess: Bidirectional {
    /// The position `by` steps away from `pos` (negative `by` moves backward).
    ///
    /// Offsetting to one past the last element yields the sentinel; offsetting
    /// outside `0..=len` is a caller bug.
    fn offset(&self, pos: &Self::Position, by: isize) -> Self::Position;

    /// Number of positions from `from` to `to`; negative when `to` is before
    /// `from`. Either argument may be the sentinel.
    fn distance(&self, from: &Self::Position, to: &Self::Position) -> isize;
}
