// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::fmt::Write;

/// Returns `n` distinct `(x, y)` pairs: `x = i / 2`, `y = 3x - 1`.
pub fn sequential_points(n: usize) -> Vec<(f64, f64)> {
    (0..n)
        .map(|i| {
            let x = i as f64 * 0.5;
            (x, 3.0 * x - 1.0)
        })
        .collect()
}

/// Samples the polynomial `coefficients[0] + coefficients[1] x + ...` at every `x`.
pub fn polynomial_points(coefficients: &[f64], xs: &[f64]) -> Vec<(f64, f64)> {
    xs.iter()
        .map(|&x| {
            let y = coefficients.iter().rev().fold(0.0, |acc, c| acc * x + c);
            (x, y)
        })
        .collect()
}

/// Returns `n` distinct words: `word-0000`, `word-0001`, ...
pub fn words(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("word-{i:04}")).collect()
}

/// Renders pairs as a whitespace-separated two-column points file.
pub fn points_file_contents(points: &[(f64, f64)]) -> String {
    let mut contents = String::new();

    for (x, y) in points {
        writeln!(contents, "{x}\t{y}").expect("Failed to write to String");
    }

    contents
}

/// Capacity after `pushes` pushes into an array created with zero capacity.
///
/// Smallest multiple of `increment` that holds every record.
pub fn expected_capacity(pushes: usize, increment: usize) -> usize {
    pushes.div_ceil(increment) * increment
}
