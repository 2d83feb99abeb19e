// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::DynamicArray;

// Core imports
use core::ptr;

impl<T> DynamicArray<T> {
    /// Splits off `[at..len)` into a new array and leaves `[..at)` in `self`.
    ///
    /// The returned array has capacity `len - at`; `self` keeps its capacity.
    ///
    /// # Panics
    ///
    /// Panics if `at > len()`.
    #[track_caller]
    pub fn split_off(&mut self, at: usize) -> Self {
        let len = self.len;
        assert!(at <= len, "split_off index (is {at}) should be <= len (is {len})");
        let tail_len = len - at;
        let mut other = Self::with_capacity(tail_len);
        // SAFETY: `[at, len)` are live; `other` has `tail_len` spare slots in a
        // different block. Ownership moves by shrinking `self.len`.
        unsafe {
            ptr::copy_nonoverlapping(self.buf.address(at), other.as_mut_ptr(), tail_len);
        }
        self.len = at;
        other.len = tail_len;
        other
    }
}
