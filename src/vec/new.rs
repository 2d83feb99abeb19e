// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::Error,
    raw::RawStorage,
    vec::{DynamicArray, FillGuard},
};

impl<T> DynamicArray<T> {
    /// Constructs an empty array. Does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self {
            buf: RawStorage::new(),
            len: 0,
        }
    }

    /// Constructs an empty array with room for exactly `capacity` elements.
    ///
    /// # Panics
    ///
    /// Panics if the capacity overflows; allocator failure goes through
    /// [`alloc::alloc::handle_alloc_error`].
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: RawStorage::allocate(capacity),
            len: 0,
        }
    }

    /// Fallible variant of [`with_capacity`](Self::with_capacity).
    #[inline]
    pub fn try_with_capacity(capacity: usize) -> Result<Self, Error> {
        Ok(Self {
            buf: RawStorage::try_allocate(capacity)?,
            len: 0,
        })
    }

    /// Constructs an array of `len` default values, with capacity `len`.
    ///
    /// If `T::default` panics, the values built so far are dropped and the
    /// storage is released before the panic continues.
    #[inline]
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        Self::from_fn(len, |_| T::default())
    }

    /// Constructs an array of `len` elements where element `i` is `f(i)`.
    ///
    /// Capacity is exactly `len`. Same panic behavior as [`with_len`](Self::with_len).
    pub fn from_fn<F: FnMut(usize) -> T>(len: usize, mut f: F) -> Self {
        let buf = RawStorage::allocate(len);
        // SAFETY: a fresh block of `len` slots, all uninitialized.
        let mut fill = unsafe { FillGuard::new(buf.address(0), len) };
        for i in 0..len {
            fill.write(f(i));
        }
        let len = fill.defuse();
        Self { buf, len }
    }
}

#[cfg(test)]
mod tests {
    use crate::DynamicArray;
    use alloc::string::String;

    #[test]
    fn test_with_len_default_initializes() {
        let v: DynamicArray<String> = DynamicArray::with_len(3);
        assert_eq!(v.len(), 3);
        assert_eq!(v.capacity(), 3);
        assert!(v.iter().all(String::is_empty));
    }

    #[test]
    fn test_with_len_zero_does_not_allocate() {
        let v: DynamicArray<u64> = DynamicArray::with_len(0);
        assert!(v.is_empty());
        assert_eq!(v.capacity(), 0);
    }

    #[test]
    fn test_from_fn_passes_indices() {
        let v = DynamicArray::from_fn(4, |i| i * i);
        assert_eq!(v, [0, 1, 4, 9]);
    }

    #[test]
    fn test_try_with_capacity_overflow() {
        let res = DynamicArray::<u32>::try_with_capacity(usize::MAX);
        assert_eq!(res.unwrap_err(), crate::Error::CapacityOverflow);
    }
}
