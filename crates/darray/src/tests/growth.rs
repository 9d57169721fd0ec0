// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::num::NonZeroUsize;

use crate::{GROWTH_AMOUNT, GrowthPolicy};

#[test]
fn test_default_increment() {
    assert_eq!(GrowthPolicy::default().increment(), GROWTH_AMOUNT);
    assert_eq!(GROWTH_AMOUNT, 100);
}

#[test]
fn test_next_capacity_is_additive() {
    let policy = GrowthPolicy::default();

    assert_eq!(policy.next_capacity(0), Some(100));
    assert_eq!(policy.next_capacity(100), Some(200));
    assert_eq!(policy.next_capacity(10), Some(110));
}

#[test]
fn test_next_capacity_overflow() {
    let policy = GrowthPolicy::fixed(NonZeroUsize::new(2).expect("2 is non-zero"));

    assert_eq!(policy.next_capacity(usize::MAX - 2), Some(usize::MAX));
    assert_eq!(policy.next_capacity(usize::MAX - 1), None);
}
