// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Command-line collaborators of `darray`.
//!
//! - [`points`]: reads a two-column data file into a `DynamicArray<Point>`.
//! - [`fit`]: least-squares polynomial fit through the normal equations, solved by `nalgebra`.
//! - [`report`]: prints a fit the way the `darray fit` command does.
//! - [`correct`]: the sensor correction filter behind `darray correct`.
//! - [`status`]: maps failures to process exit statuses.

pub mod correct;
pub mod fit;
pub mod points;
pub mod report;
pub mod status;

#[cfg(test)]
mod tests;
