// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::DynamicArray;

// Core imports
use core::ptr;

impl<T> DynamicArray<T> {
    /// Removes and returns the element at `index`, shifting later elements left.
    ///
    /// Relative order of the remaining elements is preserved. `O(len - index)`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[track_caller]
    pub fn remove(&mut self, index: usize) -> T {
        let len = self.len;
        assert!(
            index < len,
            "removal index (is {index}) should be < len (is {len})"
        );
        // SAFETY: `index < len`, so the slot is live. After reading it out the
        // slot is a hole, which the overlapping copy closes; the old last slot
        // is then outside the new `len`.
        unsafe {
            let hole = self.buf.address(index);
            let out = hole.read();
            ptr::copy(hole.add(1), hole, len - index - 1);
            self.len = len - 1;
            out
        }
    }

    /// Removes and returns the element at `index` by moving the last element into its place.
    ///
    /// `O(1)`, does not preserve order.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[track_caller]
    pub fn swap_remove(&mut self, index: usize) -> T {
        let len = self.len;
        assert!(
            index < len,
            "swap_remove index (is {index}) should be < len (is {len})"
        );
        // SAFETY: both `index` and `len - 1` are live slots. The last slot is
        // moved into the hole (a no-op copy when they coincide) and dropped from
        // the live range.
        unsafe {
            let hole = self.buf.address(index);
            let out = hole.read();
            ptr::copy(self.buf.address(len - 1), hole, 1);
            self.len = len - 1;
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::DynamicArray;
    use alloc::{rc::Rc, string::String};

    #[test]
    fn test_remove_preserves_order() {
        let mut v: DynamicArray<i32> = DynamicArray::from([1, 2, 3, 4, 5]);
        assert_eq!(v.remove(2), 3);
        assert_eq!(v, [1, 2, 4, 5]);
        assert_eq!(v.remove(3), 5);
        assert_eq!(v, [1, 2, 4]);
        assert_eq!(v.remove(0), 1);
        assert_eq!(v, [2, 4]);
        assert_eq!(v.capacity(), 5);
    }

    #[test]
    fn test_swap_remove() {
        let mut s: DynamicArray<i32> = DynamicArray::from([1, 2, 3, 4, 5]);
        assert_eq!(s.swap_remove(1), 2);
        assert_eq!(s, [1, 5, 3, 4]);
        assert_eq!(s.swap_remove(3), 4);
        assert_eq!(s, [1, 5, 3]);
    }

    #[test]
    fn test_remove_hands_ownership_back() {
        let tracker = Rc::new(());
        let mut v: DynamicArray<Rc<()>> = DynamicArray::new();
        v.push(Rc::clone(&tracker));
        v.push(Rc::clone(&tracker));
        let removed = v.remove(0);
        assert_eq!(Rc::strong_count(&tracker), 3);
        drop(removed);
        drop(v);
        assert_eq!(Rc::strong_count(&tracker), 1);
    }

    #[test]
    #[should_panic(expected = "removal index")]
    fn test_remove_out_of_bounds_panics() {
        let mut v: DynamicArray<String> = DynamicArray::new();
        v.remove(0);
    }

    #[test]
    #[should_panic(expected = "swap_remove index")]
    fn test_swap_remove_out_of_bounds_panics() {
        let mut v: DynamicArray<i32> = DynamicArray::from([1]);
        v.swap_remove(1);
    }
}
