// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::num::NonZeroUsize;

/// Default number of slots added each time a full array grows.
pub const GROWTH_AMOUNT: usize = 100;

const DEFAULT_INCREMENT: NonZeroUsize = match NonZeroUsize::new(GROWTH_AMOUNT) {
    Some(increment) => increment,
    None => panic!("GROWTH_AMOUNT must be non-zero"),
};

/// Additive growth policy for [`DynamicArray`](crate::DynamicArray).
///
/// A full array grows by exactly `increment()` slots. There is no doubling: pushing
/// `n` records into an empty array performs `ceil(n / increment)` allocations.
///
/// # Example
///
/// ```rust
/// use darray::GrowthPolicy;
///
/// let policy = GrowthPolicy::default();
/// assert_eq!(policy.increment(), 100);
/// assert_eq!(policy.next_capacity(0), Some(100));
/// assert_eq!(policy.next_capacity(10), Some(110));
/// ```
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct GrowthPolicy {
    increment: NonZeroUsize,
}

impl GrowthPolicy {
    /// Creates a policy that grows by `increment` slots at a time.
    pub const fn fixed(increment: NonZeroUsize) -> Self {
        Self { increment }
    }

    /// Returns the number of slots added per growth step.
    #[inline]
    pub const fn increment(&self) -> usize {
        self.increment.get()
    }

    /// Returns the capacity after one growth step, or `None` on `usize` overflow.
    #[inline]
    pub const fn next_capacity(&self, current: usize) -> Option<usize> {
        current.checked_add(self.increment.get())
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self::fixed(DEFAULT_INCREMENT)
    }
}
