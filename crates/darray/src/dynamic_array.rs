// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;
use core::fmt;
use core::ops::{Index, IndexMut};

use zeroize::Zeroize;

use crate::error::DynamicArrayError;
use crate::growth::GrowthPolicy;
use crate::record::TextRecord;

/// Test behaviour for injecting failures in `DynamicArray` operations.
///
/// This is only available with the `test_utils` feature and allows users
/// to test error handling paths in their code by injecting failures.
///
/// The behaviour is sticky - once set, it remains active until changed.
///
/// # Example
///
/// ```rust
/// // test_utils feature required in dev-dependencies
/// #[cfg(test)]
/// mod tests {
///     use darray::{DynamicArray, DynamicArrayBehaviour, DynamicArrayError, Point};
///
///     #[test]
///     fn test_handles_allocation_failure() -> Result<(), DynamicArrayError> {
///         let mut points = DynamicArray::new();
///
///         // Inject failure
///         points.change_behaviour(DynamicArrayBehaviour::FailAtAllocate);
///
///         // The first push needs to allocate, so it fails
///         assert!(points.push(Point::new(1.0, 2.0)).is_err());
///
///         // Reset to normal behaviour
///         points.change_behaviour(DynamicArrayBehaviour::None);
///
///         // Now it works
///         points.push(Point::new(1.0, 2.0))?;
///         Ok(())
///     }
/// }
/// ```
#[cfg(any(test, feature = "test_utils"))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DynamicArrayBehaviour {
    /// Normal behaviour - no injected failures.
    #[default]
    None,
    /// Every allocation attempt fails with `AllocationFailed`.
    FailAtAllocate,
}

/// Growable array of fixed-layout records.
///
/// The header tracks `capacity()` (allocated slots) and `entries_used()` (slots
/// holding valid data). Records live at contiguous indices `0..entries_used()` in
/// the order they were pushed.
///
/// Storage is only ever allocated when `capacity() > 0`. A full array grows by
/// the fixed increment of its [`GrowthPolicy`].
///
/// Records are reached through index-based accessors that borrow the array, so
/// no reference into the buffer can outlive a `push()` that may move it.
///
/// # Type Parameters
///
/// - `T`: The record type. One array holds exactly one record shape.
///
/// # Example
///
/// ```rust
/// use darray::{DynamicArray, DynamicArrayError, Point};
///
/// fn example() -> Result<(), DynamicArrayError> {
///     let mut points = DynamicArray::create(10)?;
///
///     for i in 0..10 {
///         points.push(Point::new(f64::from(i), 0.0))?;
///     }
///     assert_eq!(points.capacity(), 10);
///
///     // Full: the next push grows by 100 slots
///     let index = points.push(Point::new(10.0, 0.0))?;
///     assert_eq!(index, 10);
///     assert_eq!(points.capacity(), 110);
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub struct DynamicArray<T> {
    capacity: usize,
    storage: Vec<T>,
    policy: GrowthPolicy,
    #[cfg(any(test, feature = "test_utils"))]
    behaviour: DynamicArrayBehaviour,
}

impl<T> DynamicArray<T> {
    /// Creates an empty header with no storage and the default growth policy.
    ///
    /// # Example
    ///
    /// ```rust
    /// use darray::{DynamicArray, Point};
    ///
    /// let points: DynamicArray<Point> = DynamicArray::new();
    /// assert_eq!(points.capacity(), 0);
    /// assert_eq!(points.entries_used(), 0);
    /// assert!(!points.is_allocated());
    /// ```
    pub fn new() -> Self {
        Self::with_policy(GrowthPolicy::default())
    }

    /// Creates an empty header with no storage and the given growth policy.
    pub fn with_policy(policy: GrowthPolicy) -> Self {
        Self {
            capacity: 0,
            storage: Vec::new(),
            policy,
            #[cfg(any(test, feature = "test_utils"))]
            behaviour: DynamicArrayBehaviour::default(),
        }
    }

    /// Creates an array with room for exactly `initial_capacity` records.
    ///
    /// With `initial_capacity == 0` nothing is allocated until the first `push()`.
    ///
    /// # Errors
    ///
    /// Returns [`DynamicArrayError::AllocationFailed`] if the allocator refuses the
    /// request, or [`DynamicArrayError::CapacityOverflow`] if its byte size is not
    /// addressable.
    ///
    /// # Example
    ///
    /// ```rust
    /// use darray::{DynamicArray, DynamicArrayError, TextRecord};
    ///
    /// fn example() -> Result<(), DynamicArrayError> {
    ///     let words: DynamicArray<TextRecord> = DynamicArray::create(5)?;
    ///     assert_eq!(words.capacity(), 5);
    ///     assert!(words.is_allocated());
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn create(initial_capacity: usize) -> Result<Self, DynamicArrayError> {
        Self::create_with_policy(initial_capacity, GrowthPolicy::default())
    }

    /// Same as [`create`](Self::create), with an explicit growth policy.
    pub fn create_with_policy(
        initial_capacity: usize,
        policy: GrowthPolicy,
    ) -> Result<Self, DynamicArrayError> {
        let mut array = Self::with_policy(policy);

        if initial_capacity > 0 {
            array.allocate(initial_capacity)?;
        }

        Ok(array)
    }

    /// Releases the current storage, if any, and re-creates the array with room
    /// for `initial_capacity` records.
    ///
    /// The growth policy is kept. If the allocation fails the array is left empty,
    /// exactly as after [`destroy`](Self::destroy).
    ///
    /// # Errors
    ///
    /// Same as [`create`](Self::create).
    pub fn recreate(&mut self, initial_capacity: usize) -> Result<(), DynamicArrayError> {
        self.destroy();

        if initial_capacity > 0 {
            self.allocate(initial_capacity)?;
        }

        Ok(())
    }

    /// Ensures the buffer holds exactly `capacity` slots and records it in the header.
    fn allocate(&mut self, capacity: usize) -> Result<(), DynamicArrayError> {
        #[cfg(any(test, feature = "test_utils"))]
        if matches!(self.behaviour, DynamicArrayBehaviour::FailAtAllocate) {
            return Err(DynamicArrayError::AllocationFailed {
                requested: capacity,
            });
        }

        capacity
            .checked_mul(core::mem::size_of::<T>())
            .filter(|bytes| *bytes <= isize::MAX as usize)
            .ok_or(DynamicArrayError::CapacityOverflow)?;

        let additional = capacity - self.storage.len();
        self.storage
            .try_reserve_exact(additional)
            .map_err(|_| DynamicArrayError::AllocationFailed {
                requested: capacity,
            })?;

        self.capacity = capacity;

        Ok(())
    }

    #[cold]
    #[inline(never)]
    fn grow(&mut self) -> Result<(), DynamicArrayError> {
        let new_capacity = self
            .policy
            .next_capacity(self.capacity)
            .ok_or(DynamicArrayError::CapacityOverflow)?;

        self.allocate(new_capacity)?;

        log::trace!(
            "dynamic array grew to {} slots ({} used)",
            new_capacity,
            self.storage.len()
        );

        Ok(())
    }

    /// Appends a record and returns the index it was stored at.
    ///
    /// If the array is full (including the zero-capacity case) it first grows by
    /// the policy's increment. Growing may move the buffer.
    ///
    /// # Errors
    ///
    /// Returns the allocation error if growing fails. The array is unchanged and
    /// `record` is dropped; use [`try_push`](Self::try_push) to keep it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use darray::{DynamicArray, DynamicArrayError, Sample};
    ///
    /// fn example() -> Result<(), DynamicArrayError> {
    ///     let mut samples = DynamicArray::new();
    ///     assert_eq!(samples.push(Sample::new(1, 0.25))?, 0);
    ///     assert_eq!(samples.push(Sample::new(2, 0.50))?, 1);
    ///     assert_eq!(samples.capacity(), 100);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn push(&mut self, record: T) -> Result<usize, DynamicArrayError> {
        self.try_push(record).map_err(|(_, err)| err)
    }

    /// Like [`push`](Self::push), but hands `record` back when growing fails.
    ///
    /// The array is unchanged on error, so the caller may release memory
    /// elsewhere and retry with the same record.
    ///
    /// # Errors
    ///
    /// Returns `record` together with the allocation error.
    pub fn try_push(&mut self, record: T) -> Result<usize, (T, DynamicArrayError)> {
        let index = self.storage.len();

        if index == self.capacity {
            if let Err(err) = self.grow() {
                return Err((record, err));
            }
        }

        self.storage.push(record);

        Ok(index)
    }

    /// Releases the storage and resets the header to the freshly created state.
    ///
    /// Calling it again on an already destroyed array does nothing. The growth
    /// policy is configuration and survives.
    pub fn destroy(&mut self) {
        let released = core::mem::take(&mut self.storage);

        if self.capacity > 0 {
            log::debug!(
                "dynamic array released {} slots ({} used)",
                self.capacity,
                released.len()
            );
        }

        drop(released);
        self.capacity = 0;
    }

    /// Returns the number of allocated record slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of slots holding valid records.
    #[inline]
    pub fn entries_used(&self) -> usize {
        self.storage.len()
    }

    /// Alias of [`entries_used`](Self::entries_used).
    #[inline]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns `true` if no record has been pushed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Returns `true` if a buffer is currently allocated.
    pub fn is_allocated(&self) -> bool {
        if core::mem::size_of::<T>() == 0 {
            return self.capacity > 0;
        }

        self.storage.capacity() > 0
    }

    /// Returns the growth policy.
    #[inline]
    pub fn policy(&self) -> GrowthPolicy {
        self.policy
    }

    /// Returns the record at `index`, or `None` if `index >= entries_used()`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.storage.get(index)
    }

    /// Returns a mutable reference to the record at `index`, or `None` if out of bounds.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.storage.get_mut(index)
    }

    /// Returns the valid records `0..entries_used()` as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.storage
    }

    /// Changes the test behaviour for this array.
    ///
    /// This is only available with the `test_utils` feature and allows injecting
    /// failures for testing error handling paths.
    #[cfg(any(test, feature = "test_utils"))]
    pub fn change_behaviour(&mut self, behaviour: DynamicArrayBehaviour) {
        self.behaviour = behaviour;
    }
}

impl DynamicArray<TextRecord> {
    /// Looks up a record by its text.
    ///
    /// Not implemented yet: it always answers `None`, whatever the key and the
    /// contents of the array. `None` here is an answer, not an error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use darray::{DynamicArray, TextRecord};
    ///
    /// fn example() -> Result<(), Box<dyn std::error::Error>> {
    ///     let mut words = DynamicArray::new();
    ///     words.push(TextRecord::new("apple")?)?;
    ///
    ///     assert!(words.search("apple").is_none());
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn search(&self, _key: &str) -> Option<&TextRecord> {
        None
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicArray")
            .field("entries_used", &self.entries_used())
            .field("capacity", &self.capacity)
            .field("increment", &self.policy.increment())
            .finish()
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        // Skip behaviour (test-only injection state)
        self.capacity == other.capacity
            && self.policy == other.policy
            && self.storage == other.storage
    }
}

impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.storage[index]
    }
}

impl<T> IndexMut<usize> for DynamicArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.storage[index]
    }
}

impl<T: Zeroize> Zeroize for DynamicArray<T> {
    /// Wipes every record in place, then performs [`destroy`](DynamicArray::destroy).
    fn zeroize(&mut self) {
        self.storage.zeroize();
        self.destroy();
    }
}
