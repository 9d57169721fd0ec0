// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::num::NonZeroUsize;

use darray_test_utils::{sequential_points, words};
use zeroize::Zeroize;

use crate::{DynamicArray, GrowthPolicy, Point, Sample, TextRecord};

fn push_points(array: &mut DynamicArray<Point>, pairs: &[(f64, f64)]) {
    for &(x, y) in pairs {
        array.push(Point::new(x, y)).expect("Failed to push(..)");
    }
}

// =============================================================================
// new(), default()
// =============================================================================

#[test]
fn test_new_is_empty_header() {
    let array: DynamicArray<Point> = DynamicArray::new();

    assert_eq!(array.capacity(), 0);
    assert_eq!(array.entries_used(), 0);
    assert!(array.is_empty());
    assert!(!array.is_allocated());
    assert_eq!(array.policy(), GrowthPolicy::default());
}

#[test]
fn test_default_equals_new() {
    let array: DynamicArray<Sample> = DynamicArray::default();
    assert_eq!(array, DynamicArray::new());
}

// =============================================================================
// create()
// =============================================================================

#[test]
fn test_create_zero_defers_allocation() {
    let array: DynamicArray<Point> = DynamicArray::create(0).expect("Failed to create(0)");

    assert_eq!(array.capacity(), 0);
    assert_eq!(array.entries_used(), 0);
    assert!(!array.is_allocated());
}

#[test]
fn test_create_allocates_exact_capacity() {
    let array: DynamicArray<TextRecord> = DynamicArray::create(7).expect("Failed to create(7)");

    assert_eq!(array.capacity(), 7);
    assert_eq!(array.entries_used(), 0);
    assert!(array.is_allocated());
}

#[test]
fn test_create_with_policy_keeps_policy() {
    let policy = GrowthPolicy::fixed(NonZeroUsize::new(3).expect("3 is non-zero"));
    let array: DynamicArray<Point> =
        DynamicArray::create_with_policy(2, policy).expect("Failed to create_with_policy(..)");

    assert_eq!(array.capacity(), 2);
    assert_eq!(array.policy().increment(), 3);
}

// =============================================================================
// push()
// =============================================================================

#[test]
fn test_push_returns_index() {
    let mut array = DynamicArray::new();

    for expected in 0..5 {
        let index = array
            .push(Sample::new(expected as i32, 0.5))
            .expect("Failed to push(..)");
        assert_eq!(index, expected);
    }
}

#[test]
fn test_push_from_zero_capacity_grows_to_increment() {
    // Scenario A
    let mut array = DynamicArray::create(0).expect("Failed to create(0)");
    push_points(&mut array, &sequential_points(5));

    assert_eq!(array.capacity(), 100);
    assert_eq!(array.entries_used(), 5);
}

#[test]
fn test_push_grows_by_fixed_increment_when_full() {
    // Scenario B
    let pairs = sequential_points(11);
    let mut array = DynamicArray::create(10).expect("Failed to create(10)");

    push_points(&mut array, &pairs[..10]);
    assert_eq!(array.capacity(), 10);
    assert_eq!(array.entries_used(), 10);

    push_points(&mut array, &pairs[10..]);
    assert_eq!(array.capacity(), 110);
    assert_eq!(array.entries_used(), 11);

    for (i, &(x, y)) in pairs.iter().enumerate() {
        assert_eq!(array[i], Point::new(x, y));
    }
}

#[test]
fn test_push_never_doubles() {
    let mut array = DynamicArray::new();
    push_points(&mut array, &sequential_points(301));

    assert_eq!(array.capacity(), 400);
    assert_eq!(array.entries_used(), 301);
}

#[test]
fn test_push_with_custom_increment() {
    let policy = GrowthPolicy::fixed(NonZeroUsize::new(4).expect("4 is non-zero"));
    let mut array = DynamicArray::with_policy(policy);

    push_points(&mut array, &sequential_points(4));
    assert_eq!(array.capacity(), 4);

    push_points(&mut array, &sequential_points(1));
    assert_eq!(array.capacity(), 8);
}

#[test]
fn test_push_text_records() {
    let words = words(3);
    let mut array = DynamicArray::new();

    for word in &words {
        array
            .push(TextRecord::new(word).expect("Failed to build TextRecord"))
            .expect("Failed to push(..)");
    }

    for (i, word) in words.iter().enumerate() {
        assert_eq!(array[i].as_str(), word);
    }
}

// =============================================================================
// destroy()
// =============================================================================

#[test]
fn test_destroy_resets_header() {
    let mut array: DynamicArray<Point> = DynamicArray::create(25).expect("Failed to create(25)");
    push_points(&mut array, &sequential_points(3));

    array.destroy();

    assert_eq!(array.capacity(), 0);
    assert_eq!(array.entries_used(), 0);
    assert!(!array.is_allocated());
    assert_eq!(array, DynamicArray::new());
}

#[test]
fn test_destroy_is_idempotent() {
    let mut array: DynamicArray<Point> = DynamicArray::create(5).expect("Failed to create(5)");

    array.destroy();
    array.destroy();

    assert_eq!(array, DynamicArray::new());
}

#[test]
fn test_destroy_keeps_policy() {
    let policy = GrowthPolicy::fixed(NonZeroUsize::new(9).expect("9 is non-zero"));
    let mut array: DynamicArray<Point> =
        DynamicArray::create_with_policy(1, policy).expect("Failed to create_with_policy(..)");

    array.destroy();

    assert_eq!(array.policy(), policy);
}

#[test]
fn test_create_then_destroy_equals_fresh_header() {
    for k in [0, 1, 10, 100, 1_000] {
        let mut array: DynamicArray<Sample> = DynamicArray::create(k).expect("Failed to create(..)");
        array.destroy();

        assert_eq!(array, DynamicArray::new());
    }
}

// =============================================================================
// recreate()
// =============================================================================

#[test]
fn test_recreate_after_destroy_has_no_residual_records() {
    // Scenario C
    let mut array = DynamicArray::new();
    push_points(&mut array, &sequential_points(3));

    array.destroy();
    array.recreate(5).expect("Failed to recreate(5)");

    array.push(Point::new(10.0, 20.0)).expect("Failed to push(..)");
    array.push(Point::new(30.0, 40.0)).expect("Failed to push(..)");

    assert_eq!(array.entries_used(), 2);
    assert_eq!(array.capacity(), 5);
    assert_eq!(array[0], Point::new(10.0, 20.0));
    assert_eq!(array[1], Point::new(30.0, 40.0));
    assert!(array.get(2).is_none());
}

#[test]
fn test_recreate_without_destroy_releases_previous_storage() {
    let mut array = DynamicArray::create(3).expect("Failed to create(3)");
    push_points(&mut array, &sequential_points(3));

    array.recreate(0).expect("Failed to recreate(0)");

    assert_eq!(array.capacity(), 0);
    assert_eq!(array.entries_used(), 0);
    assert!(!array.is_allocated());
}

// =============================================================================
// get(), get_mut(), as_slice(), Index
// =============================================================================

#[test]
fn test_get_out_of_bounds_is_none() {
    let mut array = DynamicArray::create(10).expect("Failed to create(10)");
    array.push(Sample::new(1, 1.0)).expect("Failed to push(..)");

    // Allocated but unused slots are not readable
    assert!(array.get(0).is_some());
    assert!(array.get(1).is_none());
    assert!(array.get(9).is_none());
}

#[test]
fn test_get_mut_and_index_mut() {
    let mut array = DynamicArray::new();
    array.push(Sample::new(1, 1.0)).expect("Failed to push(..)");
    array.push(Sample::new(2, 2.0)).expect("Failed to push(..)");

    if let Some(sample) = array.get_mut(0) {
        sample.point = 42.0;
    }
    array[1].num = 7;

    assert_eq!(array.as_slice(), &[Sample::new(1, 42.0), Sample::new(7, 2.0)]);
}

#[test]
#[should_panic]
fn test_index_past_entries_used_panics() {
    let array: DynamicArray<Point> = DynamicArray::create(10).expect("Failed to create(10)");
    let _point: Point = array[0];
}

// =============================================================================
// Debug
// =============================================================================

#[test]
fn test_debug_shows_header_only() {
    let mut array = DynamicArray::create(10).expect("Failed to create(10)");
    array.push(Point::new(1.5, 2.5)).expect("Failed to push(..)");

    let snapshot = format!("{:?}", array);
    insta::assert_snapshot!(snapshot, @"DynamicArray { entries_used: 1, capacity: 10, increment: 100 }");
}

// =============================================================================
// Zeroize
// =============================================================================

#[test]
fn test_zeroize_destroys_array() {
    let mut array = DynamicArray::new();
    array
        .push(TextRecord::new("secret").expect("Failed to build TextRecord"))
        .expect("Failed to push(..)");

    array.zeroize();

    assert_eq!(array.capacity(), 0);
    assert_eq!(array.entries_used(), 0);
    assert!(!array.is_allocated());
}
