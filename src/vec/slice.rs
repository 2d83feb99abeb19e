// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::DynamicArray;

impl<T> DynamicArray<T> {
    /// Views the live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: by invariant `buf[..len]` are initialized and `len <= capacity`;
        // the base pointer is non-null and aligned even when nothing is allocated.
        unsafe { core::slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }

    /// Views the live elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as in `as_slice`; `&mut self` guarantees exclusive access.
        unsafe { core::slice::from_raw_parts_mut(self.buf.as_mut_ptr(), self.len) }
    }
}
