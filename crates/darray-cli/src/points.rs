// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Two-column points file reader.
//!
//! One point per line, `x` and `y` separated by whitespace. Blank lines are
//! skipped and columns past the second are ignored.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use darray::{DynamicArray, DynamicArrayError, GROWTH_AMOUNT, Point};
use thiserror::Error;

/// Errors that can occur while loading points.
#[derive(Debug, Error)]
pub enum PointsError {
    /// The points file could not be opened.
    #[error("unable to open data points file '{}'", .path.display())]
    Open {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Reading from the source failed.
    #[error("failed to read points")]
    Read(#[from] std::io::Error),

    /// A non-blank line does not hold two numeric columns.
    #[error("line {line}: expected two numeric columns, found {content:?}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// The offending line.
        content: String,
    },

    /// The points buffer could not grow.
    #[error(transparent)]
    Storage(#[from] DynamicArrayError),
}

/// Reads every point from `reader` and appends it to `points`.
///
/// Returns the number of points appended.
pub fn read_points<R: BufRead>(
    reader: R,
    points: &mut DynamicArray<Point>,
) -> Result<usize, PointsError> {
    let mut appended = 0;

    for (number, raw) in reader.split(b'\n').enumerate() {
        let raw = raw?;
        let bytes = raw.strip_suffix(b"\r").unwrap_or(&raw[..]);

        let Ok(line) = std::str::from_utf8(bytes) else {
            return Err(PointsError::Parse {
                line: number + 1,
                content: String::from_utf8_lossy(bytes).into_owned(),
            });
        };
        let mut columns = line.split_whitespace();

        let Some(x) = columns.next() else {
            continue;
        };

        let point = parse_point(x, columns.next()).ok_or_else(|| PointsError::Parse {
            line: number + 1,
            content: line.to_string(),
        })?;

        points.push(point)?;
        appended += 1;
    }

    Ok(appended)
}

fn parse_point(x: &str, y: Option<&str>) -> Option<Point> {
    let x = x.parse().ok()?;
    let y = y?.parse().ok()?;

    Some(Point::new(x, y))
}

/// Opens `path` and loads its points into a new array pre-sized for one growth step.
pub fn load_points(path: &Path) -> Result<DynamicArray<Point>, PointsError> {
    let file = File::open(path).map_err(|source| PointsError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut points = DynamicArray::create(GROWTH_AMOUNT)?;
    let appended = read_points(BufReader::new(file), &mut points)?;

    log::info!("read {} points from '{}'", appended, path.display());

    Ok(points)
}
