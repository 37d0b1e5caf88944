// Copyright 2026 the Striding Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for the striding workspace. See the `benches/` directory.
