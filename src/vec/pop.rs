// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::DynamicArray;

impl<T> DynamicArray<T> {
    /// Removes the last element and returns it, or `None` if empty.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            // SAFETY: the old last slot was live before the decrement and is now
            // outside the live range, so reading it out transfers ownership.
            Some(unsafe { self.buf.address(self.len).read() })
        }
    }
}
