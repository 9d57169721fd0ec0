// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Sensor correction filter.
//!
//! Reads `ideal real` integer pairs and writes `ideal corrected`, where the
//! correction subtracts a quadratic error model evaluated at the raw reading.
//! Pairs are whitespace-separated; line breaks carry no meaning.

use std::io::{self, BufRead, Write};

use thiserror::Error;

/// Errors that can occur while filtering.
#[derive(Debug, Error)]
pub enum CorrectError {
    /// A token is not an integer.
    #[error("expected an integer, found {token:?}")]
    Malformed {
        /// The offending token.
        token: String,
    },

    /// The input ended after an ideal value with no matching reading.
    #[error("missing reading after ideal value {ideal}")]
    Incomplete {
        /// The unpaired ideal value.
        ideal: i32,
    },

    /// Reading input or writing output failed.
    #[error("i/o failure")]
    Io(#[from] io::Error),
}

/// Quadratic sensor error model `c0 + c1 x + c2 x²`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrectionPolynomial {
    /// Constant term.
    pub c0: f64,
    /// Linear term.
    pub c1: f64,
    /// Quadratic term.
    pub c2: f64,
}

impl Default for CorrectionPolynomial {
    fn default() -> Self {
        Self {
            c0: -48.9559,
            c1: 0.293484,
            c2: -5.31075e-05,
        }
    }
}

impl CorrectionPolynomial {
    /// Evaluates the model at `x` in Horner form.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.c0 + x * (self.c1 + self.c2 * x)
    }

    /// Estimated error of `real`, rounded half away from zero.
    pub fn offset(&self, real: i32) -> i32 {
        self.evaluate(f64::from(real)).round() as i32
    }

    /// Corrected value of `real`.
    pub fn correct(&self, real: i32) -> i32 {
        real.saturating_sub(self.offset(real))
    }
}

/// Corrects every pair from `input` into `output`; returns the number of pairs.
pub fn run_filter<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    polynomial: &CorrectionPolynomial,
) -> Result<usize, CorrectError> {
    let mut pending: Option<i32> = None;
    let mut pairs = 0;

    for line in input.split(b'\n') {
        let line = line?;

        for token in line.split(u8::is_ascii_whitespace).filter(|t| !t.is_empty()) {
            let value = parse_token(token)?;

            match pending.take() {
                None => pending = Some(value),
                Some(ideal) => {
                    writeln!(output, "{} {}", ideal, polynomial.correct(value))?;
                    pairs += 1;
                }
            }
        }
    }

    if let Some(ideal) = pending {
        return Err(CorrectError::Incomplete { ideal });
    }

    log::debug!("corrected {} readings", pairs);

    Ok(pairs)
}

fn parse_token(token: &[u8]) -> Result<i32, CorrectError> {
    core::str::from_utf8(token)
        .ok()
        .and_then(|token| token.parse().ok())
        .ok_or_else(|| CorrectError::Malformed {
            token: String::from_utf8_lossy(token).into_owned(),
        })
}
