// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growable array with a fixed-increment growth policy and fallible allocation.
//!
//! `DynamicArray<T>` owns a contiguous buffer of records and tracks two numbers:
//! how many slots are allocated (`capacity()`) and how many hold valid data
//! (`entries_used()`). When a `push()` finds the buffer full, it grows by a fixed
//! number of slots (100 by default), never by a multiplicative factor.
//!
//! # Core Guarantees
//!
//! - **Exact capacity**: `capacity()` is always the number of slots requested, either
//!   at creation or by the growth policy. It is never rounded up.
//! - **Additive growth**: the number of reallocations grows linearly with the number
//!   of records, see [`GrowthPolicy`].
//! - **Fallible allocation**: `create()` and `push()` return [`DynamicArrayError`]
//!   instead of aborting. Whether to abort is the caller's decision.
//! - **Reusable header**: `destroy()` releases the buffer and resets the header; the
//!   same value can be re-created with `recreate()`.
//!
//! # Example: Basic Usage
//!
//! ```rust
//! use darray::{DynamicArray, DynamicArrayError, Point};
//!
//! fn example() -> Result<(), DynamicArrayError> {
//!     let mut points = DynamicArray::create(0)?;
//!
//!     for i in 0..5 {
//!         points.push(Point::new(f64::from(i), 2.0 * f64::from(i)))?;
//!     }
//!
//!     assert_eq!(points.entries_used(), 5);
//!     assert_eq!(points.capacity(), 100);
//!     assert_eq!(points[3], Point::new(3.0, 6.0));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Example: Destroy and Reuse
//!
//! ```rust
//! use darray::{DynamicArray, DynamicArrayError, Sample};
//!
//! fn example() -> Result<(), DynamicArrayError> {
//!     let mut samples = DynamicArray::create(10)?;
//!     samples.push(Sample::new(1, 0.5))?;
//!
//!     samples.destroy();
//!     assert_eq!(samples.capacity(), 0);
//!     assert!(!samples.is_allocated());
//!
//!     samples.recreate(5)?;
//!     samples.push(Sample::new(7, 1.5))?;
//!     assert_eq!(samples.entries_used(), 1);
//!     assert_eq!(samples[0], Sample::new(7, 1.5));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Test Utilities
//!
//! Enable the `test_utils` feature to inject allocation failures:
//!
//! ```toml
//! [dev-dependencies]
//! darray = { version = "*", features = ["test_utils"] }
//! ```
//!
//! Then use [`DynamicArrayBehaviour`] to test error scenarios:
//!
//! ```rust
//! // test_utils feature required in dev-dependencies
//! #[cfg(test)]
//! mod tests {
//!     use darray::{DynamicArray, DynamicArrayBehaviour, Point};
//!
//!     #[test]
//!     fn test_handles_allocation_failure() {
//!         let mut points = DynamicArray::<Point>::new();
//!         points.change_behaviour(DynamicArrayBehaviour::FailAtAllocate);
//!
//!         assert!(points.push(Point::new(1.0, 2.0)).is_err());
//!     }
//! }
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

mod dynamic_array;
mod error;
mod growth;
mod record;

#[cfg(test)]
mod tests;

pub use dynamic_array::DynamicArray;
pub use error::{DynamicArrayError, RecordError};
pub use growth::{GROWTH_AMOUNT, GrowthPolicy};
pub use record::{MAX_STR_LEN, Point, Sample, TextRecord};

#[cfg(any(test, feature = "test_utils"))]
pub use dynamic_array::DynamicArrayBehaviour;
