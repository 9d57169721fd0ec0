// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Least-squares polynomial fit through the normal equations.
//!
//! For points `(x_i, y_i)` and a polynomial of order `n`, builds the Vandermonde
//! matrix `A[i][j] = x_i^j` (`n + 1` columns) and the vector `b[i] = y_i`, then
//! solves `AᵀA z = Aᵀb` with a QR factorization of `AᵀA`. All linear algebra is
//! done by `nalgebra`; points are only read back by index.

use darray::{DynamicArray, Point};
use nalgebra::{DMatrix, DVector};
use thiserror::Error;

/// Errors that can occur while fitting.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum FitError {
    /// The polynomial order must be at least 1.
    #[error("order must be 1 or more, got {0}")]
    InvalidOrder(usize),

    /// There are no points to fit.
    #[error("no data points to fit")]
    NoPoints,

    /// Fewer points than coefficients: the system has no unique solution.
    #[error("{points} points cannot determine {coefficients} coefficients")]
    Underdetermined {
        /// Number of points available.
        points: usize,
        /// Number of coefficients requested (order + 1).
        coefficients: usize,
    },

    /// `AᵀA` is singular or the solution is not finite.
    #[error("normal equations are singular")]
    Singular,
}

/// A solved fit, with the intermediate matrices kept for verbose reporting.
#[derive(Debug, Clone)]
pub struct Fit {
    a: DMatrix<f64>,
    b: DVector<f64>,
    at: DMatrix<f64>,
    ata: DMatrix<f64>,
    atb: DVector<f64>,
    coefficients: DVector<f64>,
}

impl Fit {
    /// Coefficients `c_0..=c_n` of `f(x) = c_0 + c_1 x + ... + c_n x^n`.
    pub fn coefficients(&self) -> &[f64] {
        self.coefficients.as_slice()
    }

    /// Order of the fitted polynomial.
    pub fn order(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Evaluates the fitted polynomial at `x`.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, c| acc * x + c)
    }

    /// Vandermonde matrix `A` (points x coefficients).
    pub fn a(&self) -> &DMatrix<f64> {
        &self.a
    }

    /// Right-hand side `b` (the y values).
    pub fn b(&self) -> &DVector<f64> {
        &self.b
    }

    /// Transpose `Aᵀ`.
    pub fn at(&self) -> &DMatrix<f64> {
        &self.at
    }

    /// Normal matrix `AᵀA`.
    pub fn ata(&self) -> &DMatrix<f64> {
        &self.ata
    }

    /// Normal right-hand side `Aᵀb`.
    pub fn atb(&self) -> &DVector<f64> {
        &self.atb
    }
}

/// Fits a polynomial of `order` to `points`.
pub fn fit_polynomial(points: &DynamicArray<Point>, order: usize) -> Result<Fit, FitError> {
    if order < 1 {
        return Err(FitError::InvalidOrder(order));
    }

    let nr = points.entries_used();
    let nc = order + 1;

    if nr == 0 {
        return Err(FitError::NoPoints);
    }
    if nr < nc {
        return Err(FitError::Underdetermined {
            points: nr,
            coefficients: nc,
        });
    }

    let a = DMatrix::from_fn(nr, nc, |i, j| power(points[i].x, j));
    let b = DVector::from_fn(nr, |i, _| points[i].y);

    let at = a.transpose();
    let ata = &at * &a;
    let atb = &at * &b;

    let coefficients = ata.clone().qr().solve(&atb).ok_or(FitError::Singular)?;

    if coefficients.iter().any(|c| !c.is_finite()) {
        return Err(FitError::Singular);
    }

    log::debug!("fitted {} points with a polynomial of order {}", nr, order);

    Ok(Fit {
        a,
        b,
        at,
        ata,
        atb,
        coefficients,
    })
}

// Repeated multiplication, column by column.
fn power(x: f64, exponent: usize) -> f64 {
    (0..exponent).fold(1.0, |acc, _| acc * x)
}
