// Copyright 2026 the Striding Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The strided view and its position arithmetic.

use core::num::NonZeroUsize;

use striding_traversal::{Bidirectional, RandomAccess, Traversal};

use crate::InvalidStep;

/// A lazy view over every `step`-th element of a base container.
///
/// The view stores only the base and the step; it never materializes the
/// elements it exposes. Its exposed positions are the base positions
/// `0, step, 2·step, …` that fall inside the base, and its traversal tier is
/// exactly the base's tier: a [`Traversal`] base yields a [`Traversal`] view,
/// a [`Bidirectional`] base a [`Bidirectional`] view, and so on. Striding
/// never upgrades capability.
///
/// For borrowing bases the base type itself is a reference (for example
/// `&[T]`), which ties the view's lifetime to the underlying storage. Owned
/// bases such as `Range<usize>` are held by value.
///
/// Two views compare equal when they expose the same elements in the same
/// order, regardless of how their bases or steps differ:
///
/// ```rust
/// use core::num::NonZeroUsize;
/// use striding_view::StridedExt;
///
/// let step = NonZeroUsize::new(2).unwrap();
/// let a = [1, 2, 3, 4, 5];
/// let b = [1, 0, 3, 0, 5];
/// // Both expose [1, 3, 5].
/// assert_eq!(a.as_slice().strided(step), b.as_slice().strided(step));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Strided<B> {
    base: B,
    step: NonZeroUsize,
}

/// A position within a [`Strided`] view.
///
/// Wraps the corresponding base position; the view's end sentinel wraps the
/// base's own end sentinel, so a strided position never points past the
/// base's bounds. Backward arithmetic reconstructs the distance to the end
/// from the wrapped position and the base's length, which is what lets
/// stepping back from the sentinel land on the last exposed element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StridePosition<P> {
    base: P,
}

impl<B> Strided<B> {
    /// Creates a view over every `step`-th element of `base`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidStep`] when `step < 1`. The error can only occur
    /// here, at construction.
    pub fn new(base: B, step: usize) -> Result<Self, InvalidStep> {
        match NonZeroUsize::new(step) {
            Some(step) => Ok(Self { base, step }),
            None => Err(InvalidStep),
        }
    }

    /// Creates a view over every `step`-th element of `base`.
    ///
    /// The non-zero step type makes this constructor infallible; prefer it
    /// when the step is known at the call site.
    #[must_use]
    pub const fn with_step(base: B, step: NonZeroUsize) -> Self {
        Self { base, step }
    }

    /// Returns a shared reference to the base container.
    #[must_use]
    pub const fn base(&self) -> &B {
        &self.base
    }

    /// Returns the step size.
    #[must_use]
    pub const fn step(&self) -> usize {
        self.step.get()
    }

    /// Consumes the view and returns the base container.
    pub fn into_inner(self) -> B {
        self.base
    }

    /// Strides this view again, flattening the composition.
    ///
    /// Striding a strided view by `m` exposes every `m`-th of every `n`-th
    /// element, which is every `n·m`-th element of the original base, so the
    /// result is a view directly over that base with the product step. The
    /// product saturates at `usize::MAX`.
    ///
    /// ```rust
    /// use core::num::NonZeroUsize;
    /// use striding_view::StridedExt;
    ///
    /// let two = NonZeroUsize::new(2).unwrap();
    /// let three = NonZeroUsize::new(3).unwrap();
    /// let view = (0..11_usize).strided(two).strided(three);
    /// assert_eq!(view.step(), 6);
    /// let elems: Vec<usize> = view.iter().collect();
    /// assert_eq!(elems, [0, 6]);
    /// ```
    #[must_use]
    pub fn strided(self, step: NonZeroUsize) -> Self {
        Self {
            base: self.base,
            step: self.step.saturating_mul(step),
        }
    }
}

impl<B: Traversal> Strided<B> {
    /// The first exposed element, or `None` when the view is empty.
    #[must_use]
    pub fn first(&self) -> Option<B::Item> {
        let start = self.start();
        if start == self.end() {
            None
        } else {
            Some(self.at(&start))
        }
    }
}

impl<B: RandomAccess> Strided<B> {
    /// The last exposed element, or `None` when the view is empty.
    ///
    /// This is the element at base position `step · (len − 1)`, which is not
    /// in general the last element of the base: over ten elements with step
    /// 3 the exposed base positions are 0, 3, 6, 9, so `last` reads base
    /// position 9.
    #[must_use]
    pub fn last(&self) -> Option<B::Item> {
        let len = self.len();
        if len == 0 {
            None
        } else {
            let pos = self.offset(&self.start(), len as isize - 1);
            Some(self.at(&pos))
        }
    }

    /// View index of `pos`: how many exposed elements precede it.
    ///
    /// The sentinel maps to `len`. Exposed base positions are exact multiples
    /// of the step away from the base start, so the division is exact.
    fn index_of(&self, pos: &StridePosition<B::Position>) -> usize {
        if pos.base == self.base.end() {
            self.len()
        } else {
            let from_start = self.base.distance(&self.base.start(), &pos.base);
            debug_assert!(from_start >= 0, "strided view: position before the base start");
            from_start as usize / self.step.get()
        }
    }
}

impl<B: Traversal> Traversal for Strided<B> {
    type Item = B::Item;
    type Position = StridePosition<B::Position>;

    fn start(&self) -> Self::Position {
        StridePosition {
            base: self.base.start(),
        }
    }

    fn end(&self) -> Self::Position {
        StridePosition {
            base: self.base.end(),
        }
    }

    fn at(&self, pos: &Self::Position) -> B::Item {
        self.base.at(&pos.base)
    }

    fn after(&self, pos: &Self::Position) -> Self::Position {
        let end = self.base.end();
        debug_assert!(
            pos.base != end,
            "strided view: advancing past the end sentinel"
        );
        // Advancing into a partial final group stops at the base sentinel,
        // which is exactly the view's sentinel.
        StridePosition {
            base: self.base.advance_toward(&pos.base, self.step.get(), &end),
        }
    }

    fn is_empty(&self) -> bool {
        self.base.is_empty()
    }

    fn len(&self) -> usize {
        self.base.len().div_ceil(self.step.get())
    }

    fn advance_toward(
        &self,
        pos: &Self::Position,
        by: usize,
        limit: &Self::Position,
    ) -> Self::Position {
        let by = by.saturating_mul(self.step.get());
        StridePosition {
            base: self.base.advance_toward(&pos.base, by, &limit.base),
        }
    }
}

impl<B: Bidirectional> Bidirectional for Strided<B> {
    fn before(&self, pos: &Self::Position) -> Self::Position {
        debug_assert!(
            pos.base != self.base.start(),
            "strided view: stepping before the start position"
        );
        let back = if pos.base == self.base.end() {
            // From the sentinel, land on the last exposed base position: the
            // largest multiple of the step strictly below the base length.
            let len = self.base.len();
            debug_assert!(len > 0, "strided view: stepping before the start position");
            len - (len - 1) / self.step.get() * self.step.get()
        } else {
            // Every other exposed position is a whole stride in.
            self.step.get()
        };
        let mut base = pos.base.clone();
        for _ in 0..back {
            base = self.base.before(&base);
        }
        StridePosition { base }
    }
}

impl<B: RandomAccess> RandomAccess for Strided<B> {
    fn offset(&self, pos: &Self::Position, by: isize) -> Self::Position {
        let len = self.len();
        let target = self.index_of(pos) as isize + by;
        debug_assert!(
            target >= 0 && target as usize <= len,
            "strided view: offset outside the view"
        );
        let target = target.clamp(0, len as isize) as usize;
        if target == len {
            self.end()
        } else {
            StridePosition {
                base: self
                    .base
                    .offset(&self.base.start(), (target * self.step.get()) as isize),
            }
        }
    }

    fn distance(&self, from: &Self::Position, to: &Self::Position) -> isize {
        self.index_of(to) as isize - self.index_of(from) as isize
    }
}

impl<A, B> PartialEq<Strided<B>> for Strided<A>
where
    A: Traversal,
    B: Traversal,
    A::Item: PartialEq<B::Item>,
{
    /// Element-wise sequence equality: the bases and steps may differ as long
    /// as the exposed elements match in order.
    fn eq(&self, other: &Strided<B>) -> bool {
        self.iter().eq(other.iter())
    }
}

/// Extension trait that adds [`strided`](Self::strided) to every
/// [`Traversal`] container.
pub trait StridedExt: Traversal + Sized {
    /// Returns a lazy view over every `step`-th element of `self`.
    ///
    /// ```rust
    /// use core::num::NonZeroUsize;
    /// use striding_view::StridedExt;
    ///
    /// let data = [0, 1, 2, 3, 4, 5];
    /// let view = data.as_slice().strided(NonZeroUsize::new(2).unwrap());
    /// let elems: Vec<i32> = view.iter().copied().collect();
    /// assert_eq!(elems, [0, 2, 4]);
    /// ```
    fn strided(self, step: NonZeroUsize) -> Strided<Self> {
        Strided::with_step(self, step)
    }
}

impl<B: Traversal + Sized> StridedExt for B {}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;
    use core::fmt::Debug;
    use core::num::NonZeroUsize;

    use striding_traversal::{Bidirectional, RandomAccess, Traversal};

    use super::{Strided, StridedExt};
    use crate::InvalidStep;

    fn nz(step: usize) -> NonZeroUsize {
        NonZeroUsize::new(step).unwrap()
    }

    fn elements<B: Traversal>(view: &Strided<B>) -> Vec<B::Item> {
        view.iter().collect()
    }

    #[test]
    fn stride_over_range() {
        assert_eq!(elements(&(0..11_usize).strided(nz(1))), (0..11).collect::<Vec<_>>());
        assert_eq!(elements(&(0..11_usize).strided(nz(2))), [0, 2, 4, 6, 8, 10]);
        assert_eq!(elements(&(0..11_usize).strided(nz(3))), [0, 3, 6, 9]);
        assert_eq!(elements(&(0..11_usize).strided(nz(4))), [0, 4, 8]);
        assert_eq!(elements(&(0..11_usize).strided(nz(5))), [0, 5, 10]);
        assert_eq!(elements(&(0..11_usize).strided(nz(10))), [0, 10]);
        assert_eq!(elements(&(0..11_usize).strided(nz(11))), [0]);
    }

    #[test]
    fn stride_over_slice() {
        let data: Vec<usize> = (0..11).collect();
        let view = data.as_slice().strided(nz(3));
        let elems: Vec<usize> = view.iter().copied().collect();
        assert_eq!(elems, [0, 3, 6, 9]);
    }

    #[test]
    fn empty_base_yields_empty_view() {
        for step in 1..5 {
            let view = (0..0_usize).strided(nz(step));
            assert!(view.is_empty());
            assert_eq!(view.len(), 0);
            assert_eq!(view.first(), None);
            assert_eq!(view.last(), None);
            assert!(elements(&view).is_empty());
        }
    }

    #[test]
    fn step_larger_than_length_exposes_only_the_first() {
        let data = [7, 8, 9];
        let view = data.as_slice().strided(nz(100));
        assert_eq!(view.len(), 1);
        assert_eq!(view.first(), Some(&7));
        assert_eq!(view.last(), Some(&7));
    }

    #[test]
    fn reversed_view_and_strided_reversal() {
        let data = [0, 1, 2, 3, 4, 5];
        let rev: Vec<i32> = data.as_slice().strided(nz(3)).iter().rev().copied().collect();
        assert_eq!(rev, [3, 0]);

        // Striding an already-reversed base has a different phase alignment.
        let reversed: Vec<i32> = data.iter().rev().copied().collect();
        let view = reversed.as_slice().strided(nz(2));
        let elems: Vec<i32> = view.iter().copied().collect();
        assert_eq!(elems, [5, 3, 1]);
    }

    #[test]
    fn reversal_law_matches_forward_enumeration() {
        let data: Vec<usize> = (0..23).collect();
        for step in 1..9 {
            let view = data.as_slice().strided(nz(step));
            let mut forward: Vec<usize> = view.iter().copied().collect();
            forward.reverse();
            let backward: Vec<usize> = view.iter().rev().copied().collect();
            assert_eq!(backward, forward, "step {step}");
        }
    }

    #[test]
    fn manual_index_walk() {
        let data = [0, 1, 2, 3, 4, 5];
        let view = data.as_slice().strided(nz(2));
        let mut pos = view.start();
        assert_eq!(view.at(&pos), &0);
        pos = view.after(&pos);
        assert_eq!(view.at(&pos), &2);
        pos = view.after(&pos);
        assert_eq!(view.at(&pos), &4);
        pos = view.before(&pos);
        assert_eq!(view.at(&pos), &2);
        pos = view.before(&pos);
        assert_eq!(view.at(&pos), &0);
        assert_eq!(pos, view.start());
    }

    #[test]
    fn partial_final_group_advances_to_the_sentinel() {
        // Step 3 over six elements exposes base positions 0 and 3 only; the
        // position after base 3 is the sentinel, not base 6, 7, or 8.
        let data = [0, 1, 2, 3, 4, 5];
        let view = data.as_slice().strided(nz(3));
        let pos = view.after(&view.start());
        assert_eq!(view.at(&pos), &3);
        assert_eq!(view.after(&pos), view.end());
    }

    #[test]
    fn composition_flattens_to_the_product_step() {
        let flattened = (0..11_usize).strided(nz(2)).strided(nz(3));
        assert_eq!(flattened.step(), 6);
        assert_eq!(elements(&flattened), [0, 6]);
        assert!(flattened == (0..11_usize).strided(nz(6)));
    }

    #[test]
    fn nested_composition_exposes_the_same_elements() {
        // Forcing the nested-wrapper representation through the extension
        // trait must still satisfy the element-sequence equivalence law.
        let nested = StridedExt::strided((0..11_usize).strided(nz(2)), nz(3));
        assert_eq!(elements(&nested), elements(&(0..11_usize).strided(nz(6))));

        let deeper = StridedExt::strided(nested, nz(2));
        assert_eq!(elements(&deeper), elements(&(0..11_usize).strided(nz(12))));
    }

    #[test]
    fn equality_is_element_wise() {
        let a = [1, 2, 3, 4, 5];
        let b = [1, 0, 3, 0, 5];
        assert_eq!(a.as_slice().strided(nz(2)), b.as_slice().strided(nz(2)));
        assert!(a.as_slice().strided(nz(2)) != a.as_slice().strided(nz(1)));
    }

    #[test]
    fn equality_ignores_base_identity() {
        // A range view and another range view over distinct bases, exposing
        // the same elements with different steps.
        assert!((0..7_usize).strided(nz(6)) == (0..12_usize).strided(nz(6)));
    }

    #[test]
    fn last_reads_the_final_exposed_position() {
        assert_eq!((1..11_usize).strided(nz(2)).last(), Some(9)); // 1, 3, 5, 7, 9
        assert_eq!((1..11_usize).strided(nz(3)).last(), Some(10)); // 1, 4, 7, 10
        assert_eq!((1..11_usize).strided(nz(4)).last(), Some(9)); // 1, 5, 9
        assert_eq!((1..11_usize).strided(nz(5)).last(), Some(6)); // 1, 6
        assert_eq!((1..101_usize).strided(nz(50)).last(), Some(51)); // 1, 51
        assert_eq!((1..6_usize).strided(nz(2)).last(), Some(5)); // 1, 3, 5
        assert_eq!((1..1_usize).strided(nz(2)).last(), None);
    }

    #[test]
    fn len_is_ceil_of_base_len_over_step() {
        assert_eq!((0..0_usize).strided(nz(2)).len(), 0);
        assert_eq!((0..11_usize).strided(nz(1)).len(), 11);
        assert_eq!((0..11_usize).strided(nz(2)).len(), 6);
        assert_eq!((0..11_usize).strided(nz(3)).len(), 4);
        assert_eq!((0..11_usize).strided(nz(4)).len(), 3);
        assert_eq!((0..11_usize).strided(nz(5)).len(), 3);
        assert_eq!((0..11_usize).strided(nz(10)).len(), 2);
        assert_eq!((0..11_usize).strided(nz(11)).len(), 1);
    }

    /// Forward `len` steps from the start reach the sentinel, backward `len`
    /// steps from the sentinel reach the start, and offset/distance agree
    /// with the walk at every position.
    fn validate_traversal<B>(view: &Strided<B>)
    where
        B: RandomAccess,
        B::Position: Debug,
    {
        let len = view.len();
        let start = view.start();

        let mut pos = start.clone();
        for i in 0..len {
            assert_eq!(view.distance(&start, &pos), i as isize);
            assert_eq!(view.offset(&start, i as isize), pos);
            assert_eq!(view.distance(&pos, &view.end()), (len - i) as isize);
            pos = view.after(&pos);
        }
        assert_eq!(pos, view.end());

        for _ in 0..len {
            pos = view.before(&pos);
        }
        assert_eq!(pos, start);
    }

    #[test]
    fn traversal_validation_over_ranges() {
        validate_traversal(&(0..0_usize).strided(nz(1)));
        validate_traversal(&(0..0_usize).strided(nz(2)));
        validate_traversal(&(0..101_usize).strided(nz(10)));
        validate_traversal(&(0..101_usize).strided(nz(11)));
        validate_traversal(&(0..101_usize).strided(nz(101)));
    }

    #[test]
    fn traversal_validation_over_slices() {
        let data: Vec<usize> = (0..101).collect();
        validate_traversal(&data.as_slice().strided(nz(10)));
        validate_traversal(&data.as_slice().strided(nz(11)));
        validate_traversal(&data.as_slice().strided(nz(101)));
    }

    #[test]
    fn traversal_validation_over_chars() {
        let chars: Vec<char> = "lorem ipsum".chars().collect();
        validate_traversal(&chars.as_slice().strided(nz(1)));
        validate_traversal(&chars.as_slice().strided(nz(2)));
        validate_traversal(&chars.as_slice().strided(nz(10)));
    }

    #[test]
    fn offset_by_multiplies_the_step() {
        let view = (0..101_usize).strided(nz(22));
        let expected = [0, 22, 44, 66, 88];
        let start = view.start();
        for (i, want) in expected.iter().enumerate() {
            let pos = view.offset(&start, i as isize);
            assert_eq!(view.at(&pos), *want);
        }
        assert_eq!(view.offset(&start, view.len() as isize), view.end());
    }

    #[test]
    fn offset_by_len_is_the_sentinel() {
        let view = (1..6_usize).strided(nz(3)); // 1, 4
        assert_eq!(view.len(), 2);
        assert_eq!(view.offset(&view.start(), 2), view.end());
    }

    #[test]
    fn negative_offsets_move_backward() {
        let view = (0..101_usize).strided(nz(22));
        let pos = view.offset(&view.start(), 3);
        assert_eq!(view.at(&view.offset(&pos, -2)), 22);
        assert_eq!(view.offset(&view.end(), -(view.len() as isize)), view.start());
    }

    #[test]
    fn zero_step_is_rejected_at_construction() {
        assert_eq!(Strided::new(0..10_usize, 0).unwrap_err(), InvalidStep);
        let view = Strided::new(0..10_usize, 3).unwrap();
        assert_eq!(view.step(), 3);
        assert_eq!(elements(&view), [0, 3, 6, 9]);
    }

    #[test]
    fn accessors_round_trip() {
        let view = Strided::with_step(0..10_usize, nz(4));
        assert_eq!(view.base().clone(), 0..10);
        assert_eq!(view.step(), 4);
        assert_eq!(view.into_inner(), 0..10);
    }

    #[test]
    #[should_panic(expected = "advancing past the end sentinel")]
    fn advancing_the_sentinel_is_a_bug() {
        let data = [1, 2, 3];
        let view = data.as_slice().strided(nz(2));
        let end = view.end();
        let _ = view.after(&end);
    }

    #[test]
    #[should_panic(expected = "stepping before the start position")]
    fn stepping_before_the_start_is_a_bug() {
        let data = [1, 2, 3];
        let view = data.as_slice().strided(nz(2));
        let start = view.start();
        let _ = view.before(&start);
    }

    /// A base that stops at the bidirectional tier: no `len` override and no
    /// random access, so the view leans on the default walk when stepping
    /// back from the sentinel.
    struct BidiOnly<'a> {
        chars: &'a [char],
    }

    impl Traversal for BidiOnly<'_> {
        type Item = char;
        type Position = usize;

        fn start(&self) -> usize {
            0
        }

        fn end(&self) -> usize {
            self.chars.len()
        }

        fn at(&self, pos: &usize) -> char {
            self.chars[*pos]
        }

        fn after(&self, pos: &usize) -> usize {
            pos + 1
        }
    }

    impl Bidirectional for BidiOnly<'_> {
        fn before(&self, pos: &usize) -> usize {
            pos - 1
        }
    }

    #[test]
    fn bidirectional_only_base_reverses_correctly() {
        let chars: Vec<char> = "lorem ipsum".chars().collect();
        let view = Strided::with_step(BidiOnly { chars: &chars }, nz(4));
        let forward: Vec<char> = view.iter().collect(); // l, m, s
        assert_eq!(forward, ['l', 'm', 's']);
        let backward: Vec<char> = view.iter().rev().collect();
        assert_eq!(backward, ['s', 'm', 'l']);
    }
}
