// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Text report for a [`Fit`].

use std::io::{self, Write};

use nalgebra::{DMatrix, DVector};

use crate::fit::Fit;

const SIGNIFICANT_DIGITS: i32 = 6;

/// Writes the full report: matrices and raw coefficients when `verbose`, then
/// the fitted polynomial.
pub fn write_report<W: Write>(out: &mut W, fit: &Fit, verbose: bool) -> io::Result<()> {
    if verbose {
        write_matrices(out, fit)?;
    }

    writeln!(out, "Least Squares Solution via Norm factorization:")?;

    if verbose {
        for (i, c) in fit.coefficients().iter().enumerate() {
            writeln!(out, " x_ls[{i}] = {c:20.16} ")?;
        }
        writeln!(out)?;
    }

    write_polynomial(out, fit.coefficients())
}

/// Writes `A`, `b`, `Aᵀ`, `AᵀA` and `Aᵀb`.
pub fn write_matrices<W: Write>(out: &mut W, fit: &Fit) -> io::Result<()> {
    write_matrix(out, "A", fit.a())?;
    writeln!(out)?;
    write_vector(out, "b", fit.b())?;
    writeln!(out)?;
    write_matrix(out, "AT", fit.at())?;
    writeln!(out)?;
    write_matrix(out, "ATA", fit.ata())?;
    writeln!(out)?;
    write_vector(out, "ATB", fit.atb())
}

fn write_matrix<W: Write>(out: &mut W, name: &str, matrix: &DMatrix<f64>) -> io::Result<()> {
    writeln!(out, "{name}({} x {})", matrix.nrows(), matrix.ncols())?;

    for (i, row) in matrix.row_iter().enumerate() {
        write!(out, "{i}:\t")?;
        for value in row.iter() {
            write!(out, "{value:20.5}\t")?;
        }
        writeln!(out)?;
    }

    Ok(())
}

fn write_vector<W: Write>(out: &mut W, name: &str, vector: &DVector<f64>) -> io::Result<()> {
    writeln!(out, "{name}({} x 1)", vector.len())?;

    for (i, value) in vector.iter().enumerate() {
        writeln!(out, "{i}:\t{value:20.5}")?;
    }

    Ok(())
}

/// Writes `  f(x) =  c0 + c1x + c2x^2 ...` followed by a blank line.
pub fn write_polynomial<W: Write>(out: &mut W, coefficients: &[f64]) -> io::Result<()> {
    write!(out, "  f(x) = ")?;

    for (i, &c) in coefficients.iter().enumerate() {
        let more = i + 1 < coefficients.len();
        let c = format_general(c);

        match i {
            0 => write!(out, " {c} +")?,
            1 => write!(out, " {c}x ")?,
            _ => write!(out, " {c}x^{i} ")?,
        }

        if i > 0 && more {
            write!(out, "+")?;
        }
    }

    write!(out, "\n\n")
}

/// Formats `value` with six significant digits, switching to scientific notation
/// for very large or very small magnitudes, trailing zeros removed.
///
/// ```rust
/// use darray_cli::report::format_general;
///
/// assert_eq!(format_general(3.0), "3");
/// assert_eq!(format_general(0.1234567), "0.123457");
/// assert_eq!(format_general(1234567.0), "1.23457e+06");
/// assert_eq!(format_general(-0.00001), "-1e-05");
/// ```
pub fn format_general(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{sign}inf");
    }
    if value == 0.0 {
        let sign = if value.is_sign_negative() { "-" } else { "" };
        return format!("{sign}0");
    }

    // Rounding to the significant digits first decides the exponent.
    let scientific = format!("{:.*e}", (SIGNIFICANT_DIGITS - 1) as usize, value);
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= SIGNIFICANT_DIGITS {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{sign}{:02}",
            trim_fraction(mantissa),
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (SIGNIFICANT_DIGITS - 1 - exponent) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}
