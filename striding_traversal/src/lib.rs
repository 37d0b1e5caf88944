// Copyright 2026 the Striding Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Striding Traversal: a capability-tiered traversal contract for ordered containers.
//!
//! This crate describes *what a container can do* for position-based traversal,
//! without saying anything about how its elements are stored. Adapters (such as
//! the strided view in `striding_view`) are written against these traits and
//! inherit exactly the capabilities their base container offers.
//!
//! The contract is a ladder of three traits, each a strict superset of the one
//! below it:
//!
//! - [`Traversal`]: a start position, a past-the-end sentinel, element access by
//!   position, and forward position advancement.
//! - [`Bidirectional`]: additionally, backward position movement.
//! - [`RandomAccess`]: additionally, O(1) position offsetting and distance
//!   computation (and an O(1) [`Traversal::len`]).
//!
//! Forward-only sequences — the tier below [`Traversal`] — are the standard
//! library's [`Iterator`] contract and need nothing from this crate.
//!
//! Positions are opaque handles, not raw integers in general: a position is only
//! meaningful to the container that produced it, and the end sentinel is never
//! an addressable position.
//!
//! ## Example
//!
//! Walking a slice through the contract:
//!
//! ```rust
//! use striding_traversal::Traversal;
//!
//! let data = [10, 20, 30];
//! let base = data.as_slice();
//!
//! let mut pos = base.start();
//! let mut seen = Vec::new();
//! while pos != base.end() {
//!     seen.push(*base.at(&pos));
//!     pos = base.after(&pos);
//! }
//! assert_eq!(seen, [10, 20, 30]);
//! ```
//!
//! Implementations are provided for shared slices (`&[T]`) and for
//! `Range<usize>`, both at the [`RandomAccess`] tier. Containers outside this
//! crate implement the ladder themselves, stopping at whichever tier they can
//! honor the cost contract of.
//!
//! This crate is `no_std` and does not allocate.

#![no_std]

#[cfg(test)]
extern crate alloc;

mod range;
mod slice;
mod traversal;

pub use traversal::{Bidirectional, RandomAccess, Traversal};
