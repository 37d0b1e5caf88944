// Copyright 2026 the Striding Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction errors.

use core::fmt;

/// Error returned by [`Strided::new`](crate::Strided::new) when the requested
/// step is less than one.
///
/// A step of zero never exposes any position and has no coherent traversal
/// semantics, so construction refuses it up front. This is the only
/// recoverable error in the crate; everything past construction treats
/// malformed inputs as caller bugs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidStep;

impl fmt::Display for InvalidStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("stride step must be at least 1")
    }
}

impl core::error::Error for InvalidStep {}
