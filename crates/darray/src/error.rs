// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for darray.

use thiserror::Error;

/// Error type for `DynamicArray` operations.
///
/// Every variant is an allocation failure of some kind. The array is left exactly
/// as it was before the failing call, so the caller decides whether to abort,
/// retry with a smaller request or propagate.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum DynamicArrayError {
    /// The allocator could not provide storage for `requested` records.
    #[error("allocation failed: unable to reserve storage for {requested} records")]
    AllocationFailed {
        /// Total number of record slots that were requested.
        requested: usize,
    },

    /// The new capacity does not fit in `usize`, or its byte size exceeds `isize::MAX`.
    #[error("capacity overflow: requested capacity exceeds the addressable size")]
    CapacityOverflow,
}

/// Error type for record construction.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum RecordError {
    /// The text does not fit in a `TextRecord`.
    #[error("text is {len} bytes long, at most {max} bytes fit in a record")]
    TextTooLong {
        /// Length of the rejected text in bytes.
        len: usize,
        /// Maximum accepted length in bytes.
        max: usize,
    },
}
