// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::DynamicArray;

// Core imports
use core::ops::Range;

impl<T> DynamicArray<T> {
    /// Returns a raw pointer to the start of the backing storage.
    ///
    /// Only the first `len` slots hold live values. The pointer is invalidated
    /// by any operation that may reallocate or shift elements.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_ptr()
    }

    /// Returns a mutable raw pointer to the start of the backing storage.
    ///
    /// Writing past `len` is allowed from Rust's point of view, but it does
    /// **not** update `len`; such values are never dropped or observed by the
    /// array.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr()
    }

    /// Address of the first element (equal to [`end`](Self::end) when empty).
    #[inline]
    pub fn begin(&self) -> *const T {
        self.buf.as_ptr()
    }

    /// Address one past the last element. Never dereference it.
    #[inline]
    pub fn end(&self) -> *const T {
        self.buf.address(self.len)
    }

    /// `begin()..end()` as a range of raw pointers.
    #[inline]
    pub fn as_ptr_range(&self) -> Range<*const T> {
        self.begin()..self.end()
    }

    /// Mutable counterpart of [`as_ptr_range`](Self::as_ptr_range).
    #[inline]
    pub fn as_mut_ptr_range(&mut self) -> Range<*mut T> {
        self.buf.as_mut_ptr()..self.buf.address(self.len)
    }
}
