// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::{DynamicArray, FillGuard};

impl<T> DynamicArray<T> {
    /// Resizes to `new_len`, default-constructing new elements when growing
    /// and dropping trailing ones when shrinking.
    ///
    /// Growing past the capacity reserves exactly `new_len` slots.
    #[inline]
    pub fn resize(&mut self, new_len: usize)
    where
        T: Default,
    {
        self.resize_with(new_len, T::default);
    }

    /// Resizes to `new_len`, filling new slots with values returned by `f`.
    ///
    /// When growing, `len` is only updated after every new element is built;
    /// if `f` panics, the elements built so far are dropped and the length is
    /// unchanged (the capacity may already have grown).
    pub fn resize_with<F: FnMut() -> T>(&mut self, new_len: usize, mut f: F) {
        let len = self.len;
        if new_len <= len {
            self.truncate(new_len);
            return;
        }
        self.reserve(new_len);
        let extra = new_len - len;
        // SAFETY: `new_len <= capacity`, so `[len, new_len)` are in-bounds and
        // uninitialized.
        let mut fill = unsafe { FillGuard::new(self.buf.address(len), extra) };
        for _ in 0..extra {
            fill.write(f());
        }
        self.len = len + fill.defuse();
    }
}
