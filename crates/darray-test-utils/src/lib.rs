// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for darray crates.
//!
//! Fixtures are plain values (tuples, strings) so they can be shared by unit
//! tests, integration tests and benchmarks without depending on `darray` itself.
//!
//! ## License
//!
//! GPL-3.0-only

mod fixtures;

pub use fixtures::{
    expected_capacity, points_file_contents, polynomial_points, sequential_points, words,
};
