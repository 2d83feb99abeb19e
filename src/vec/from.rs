// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::DynamicArray;

// Core imports
use core::{mem::ManuallyDrop, ptr};

impl<T, const N: usize> From<[T; N]> for DynamicArray<T> {
    /// Moves the array's elements in; capacity is exactly `N`.
    fn from(src: [T; N]) -> Self {
        let mut v = Self::with_capacity(N);
        let src = ManuallyDrop::new(src);
        // SAFETY: `v` has `N` spare slots in a block disjoint from `src`;
        // ownership of every element moves over since `src` is never dropped.
        unsafe { ptr::copy_nonoverlapping(src.as_ptr(), v.as_mut_ptr(), N) };
        v.len = N;
        v
    }
}

impl<T: Clone> From<&[T]> for DynamicArray<T> {
    /// Clones every element; capacity is exactly `src.len()`.
    fn from(src: &[T]) -> Self {
        Self::from_fn(src.len(), |i| src[i].clone())
    }
}

impl<T: Clone, const N: usize> From<&[T; N]> for DynamicArray<T> {
    fn from(src: &[T; N]) -> Self {
        Self::from(&src[..])
    }
}
