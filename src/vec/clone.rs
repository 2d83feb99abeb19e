// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::{DynamicArray, FillGuard};

impl<T: Clone> Clone for DynamicArray<T> {
    /// Deep copy with capacity equal to `self.len()`.
    ///
    /// If an element's `clone` panics, the clones made so far are dropped and
    /// the new block freed; `self` is never touched.
    fn clone(&self) -> Self {
        Self::from(self.as_slice())
    }

    /// Copy-assigns `source` into `self`, reusing storage where possible.
    ///
    /// - `source.len() > self.capacity()`: a full clone is built and swapped in,
    ///   so a panic leaves `self` untouched.
    /// - Otherwise the common prefix is assigned element by element with
    ///   `T::clone_from`, then the surplus is dropped or the missing tail is
    ///   cloned into spare slots. A panic here leaves `self` valid but
    ///   partially assigned.
    fn clone_from(&mut self, source: &Self) {
        if source.len > self.capacity() {
            let mut copy = source.clone();
            self.swap(&mut copy);
            return;
        }

        let common = self.len.min(source.len);
        for (dst, src) in self.as_mut_slice()[..common]
            .iter_mut()
            .zip(&source.as_slice()[..common])
        {
            dst.clone_from(src);
        }

        if self.len >= source.len {
            self.truncate(source.len);
        } else {
            let tail = &source.as_slice()[common..];
            // SAFETY: `source.len <= capacity`, so `[common, source.len)` are
            // in-bounds spare slots of `self`.
            let mut fill = unsafe { FillGuard::new(self.buf.address(common), tail.len()) };
            for item in tail {
                fill.write(item.clone());
            }
            self.len = common + fill.defuse();
        }
    }
}
