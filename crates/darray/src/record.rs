// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Fixed-layout record shapes stored in a [`DynamicArray`](crate::DynamicArray).
//!
//! An array holds exactly one of these shapes; the choice is made by the type
//! parameter at compile time.

use core::fmt;

use zeroize::Zeroize;

use crate::error::RecordError;

/// Size of the text buffer inside a [`TextRecord`], terminator included.
pub const MAX_STR_LEN: usize = 256;

/// Bounded text buffer holding at most `MAX_STR_LEN - 1` bytes of UTF-8.
///
/// # Example
///
/// ```rust
/// use darray::{MAX_STR_LEN, TextRecord};
///
/// let word = TextRecord::new("hello").unwrap();
/// assert_eq!(word.as_str(), "hello");
///
/// let too_long = "x".repeat(MAX_STR_LEN);
/// assert!(TextRecord::new(&too_long).is_err());
/// ```
#[derive(Clone, Copy, Eq, PartialEq, Hash, Zeroize)]
pub struct TextRecord {
    bytes: [u8; MAX_STR_LEN],
    len: u8,
}

impl TextRecord {
    /// Copies `text` into a new record.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::TextTooLong`] if `text` is `MAX_STR_LEN` bytes or longer.
    pub fn new(text: &str) -> Result<Self, RecordError> {
        let len = text.len();
        let stored = u8::try_from(len).map_err(|_| RecordError::TextTooLong {
            len,
            max: MAX_STR_LEN - 1,
        })?;

        let mut bytes = [0u8; MAX_STR_LEN];
        bytes[..len].copy_from_slice(text.as_bytes());

        Ok(Self { bytes, len: stored })
    }

    /// Returns the stored text.
    pub fn as_str(&self) -> &str {
        // Only ever filled from a &str, or wiped to length zero.
        core::str::from_utf8(&self.bytes[..usize::from(self.len)]).unwrap_or_default()
    }

    /// Returns the length of the stored text in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        usize::from(self.len)
    }

    /// Returns `true` if the record holds no text.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Default for TextRecord {
    fn default() -> Self {
        Self {
            bytes: [0u8; MAX_STR_LEN],
            len: 0,
        }
    }
}

impl TryFrom<&str> for TextRecord {
    type Error = RecordError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        Self::new(text)
    }
}

impl fmt::Debug for TextRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TextRecord").field(&self.as_str()).finish()
    }
}

impl fmt::Display for TextRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A pair of floating-point coordinates, one line of a two-column data file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Zeroize)]
pub struct Point {
    /// Abscissa.
    pub x: f64,
    /// Ordinate.
    pub y: f64,
}

impl Point {
    /// Creates a point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A sequence number paired with a floating-point value.
#[derive(Debug, Default, Clone, Copy, PartialEq, Zeroize)]
pub struct Sample {
    /// Sequence number.
    pub num: i32,
    /// Measured value.
    pub point: f64,
}

impl Sample {
    /// Creates a sample.
    pub const fn new(num: i32, point: f64) -> Self {
        Self { num, point }
    }
}
