// Copyright 2026 the Striding Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Striding View: lazy, non-copying views over every N-th element of an
//! ordered container.
//!
//! A strided view wraps a base container plus a positive step size and
//! exposes the elements at base positions `0, step, 2·step, …`, in base
//! order, without materializing anything. Whatever traversal capabilities
//! the base offers — forward-only iteration, backward stepping, O(1) random
//! access — the view preserves at the same tier, using the contract from
//! [`striding_traversal`]:
//!
//! - Any [`Iterator`] can be strided with [`StrideByExt::stride_by`]; the
//!   result is itself a plain iterator and the source may be infinite.
//! - Any [`Traversal`] container can be strided with [`StridedExt::strided`];
//!   the resulting [`Strided`] view is again a [`Traversal`], and is
//!   [`Bidirectional`] or [`RandomAccess`] exactly when the base is.
//!
//! ## Examples
//!
//! Striding a slice (a [`RandomAccess`] base):
//!
//! ```rust
//! use core::num::NonZeroUsize;
//! use striding_view::{StridedExt, Traversal};
//!
//! let data = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
//! let view = data.as_slice().strided(NonZeroUsize::new(3).unwrap());
//!
//! let elems: Vec<i32> = view.iter().copied().collect();
//! assert_eq!(elems, [0, 3, 6, 9]);
//! assert_eq!(view.len(), 4);
//! assert_eq!(view.last(), Some(&9));
//!
//! // Bidirectional bases reverse for free.
//! let rev: Vec<i32> = view.iter().rev().copied().collect();
//! assert_eq!(rev, [9, 6, 3, 0]);
//! ```
//!
//! Striding a forward-only sequence:
//!
//! ```rust
//! use core::num::NonZeroUsize;
//! use striding_view::StrideByExt;
//!
//! let chars: String = "striding".chars().stride_by(NonZeroUsize::new(2).unwrap()).collect();
//! assert_eq!(chars, "srdn");
//! ```
//!
//! Construction with an untrusted step goes through [`Strided::new`], which
//! rejects a zero step with [`InvalidStep`]; everything after construction is
//! total for valid positions, and misusing a position (advancing the end
//! sentinel, stepping before the start) is a caller bug caught by debug
//! assertions.
//!
//! Views compare by exposed elements, not by base identity, and composing
//! two strides flattens into a single stride over the original base (see
//! [`Strided::strided`]).
//!
//! This crate is `no_std` and does not allocate.

#![no_std]

#[cfg(test)]
extern crate alloc;

mod error;
mod iter;
mod stride_by;
mod view;

pub use error::InvalidStep;
pub use iter::Iter;
pub use stride_by::{StrideBy, StrideByExt};
pub use striding_traversal::{Bidirectional, RandomAccess, Traversal};
pub use view::{Strided, StridePosition, StridedExt};
