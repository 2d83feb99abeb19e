// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Core imports
use core::{mem, ptr};

/// Tracks a run of slots being filled left to right by code that may panic.
///
/// If the guard is dropped before [`defuse`](FillGuard::defuse), the values
/// written so far are dropped in place. The slots themselves are not freed;
/// whoever owns the block releases it afterwards.
pub(crate) struct FillGuard<T> {
    dst: *mut T,
    cap: usize,
    written: usize,
}

impl<T> FillGuard<T> {
    /// # Safety
    ///
    /// `dst` must be valid for writes of `cap` consecutive `T`s, those slots
    /// must be uninitialized, and nothing else may touch them while the guard
    /// is alive.
    #[inline]
    pub(crate) unsafe fn new(dst: *mut T, cap: usize) -> Self {
        Self {
            dst,
            cap,
            written: 0,
        }
    }

    /// Writes `value` into the next free slot.
    #[inline]
    pub(crate) fn write(&mut self, value: T) {
        assert!(self.written < self.cap, "fill guard overrun");
        // SAFETY: `written < cap` and `new`'s contract makes `dst[..cap]` writable.
        unsafe { self.dst.add(self.written).write(value) };
        self.written += 1;
    }

    /// Keeps the written values and returns how many there are.
    #[inline]
    pub(crate) fn defuse(self) -> usize {
        let written = self.written;
        mem::forget(self);
        written
    }
}

impl<T> Drop for FillGuard<T> {
    fn drop(&mut self) {
        // SAFETY: exactly `dst[..written]` were initialized by `write`.
        unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.dst, self.written)) }
    }
}
