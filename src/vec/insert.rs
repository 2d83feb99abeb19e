// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    raw::{handle_error, RawStorage},
    vec::DynamicArray,
};

// Core imports
use core::ptr;

impl<T> DynamicArray<T> {
    /// Inserts `value` before `index`, shifting later elements right.
    ///
    /// `insert(len(), v)` is the same as `push(v)`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    #[inline]
    #[track_caller]
    pub fn insert(&mut self, index: usize, value: T) -> &mut T {
        self.emplace_with(index, || value)
    }

    /// Inserts the value built by `f` before `index` and returns a reference to it.
    ///
    /// - With spare capacity, `f` runs first; the tail is then shifted one slot
    ///   right and the new value written into the hole.
    /// - When full, a block of `max(1, 2 * len)` slots is allocated, `f` builds
    ///   the value straight into slot `index` of that block, and the prefix and
    ///   suffix are moved around it.
    ///
    /// Either way, a panic in `f` leaves the array exactly as it was.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    #[track_caller]
    pub fn emplace_with<F: FnOnce() -> T>(&mut self, index: usize, f: F) -> &mut T {
        let len = self.len;
        assert!(
            index <= len,
            "insertion index (is {index}) should be <= len (is {len})"
        );
        if index == len {
            return self.emplace_back_with(f);
        }

        if len == self.capacity() {
            let new_capacity = self.grown_capacity().unwrap_or_else(|err| handle_error(err));
            let new_buf: RawStorage<T> = RawStorage::allocate(new_capacity);
            // SAFETY: `index < len < new_capacity`; the slot is fresh.
            unsafe { new_buf.address(index).write(f()) };
            self.adopt(new_buf, Some(index));
        } else {
            let value = f();
            // SAFETY: `len < capacity`, so `[index + 1, len + 1)` is in bounds.
            // `ptr::copy` handles the overlap; slot `index` is then a hole that
            // gets overwritten without dropping.
            unsafe {
                let hole = self.buf.address(index);
                ptr::copy(hole, hole.add(1), len - index);
                hole.write(value);
            }
        }
        self.len = len + 1;
        // SAFETY: slot `index` holds the value just written.
        unsafe { &mut *self.buf.address(index) }
    }
}

#[cfg(test)]
mod tests {
    use crate::DynamicArray;
    use alloc::string::{String, ToString};

    #[test]
    fn test_insert_within_capacity_shifts_tail() {
        let mut v: DynamicArray<i32> = DynamicArray::with_capacity(8);
        v.extend_from_slice(&[10, 20, 30]);
        let before = v.as_ptr();
        v.insert(1, 15);
        assert_eq!(v, [10, 15, 20, 30]);
        v.insert(0, 5);
        assert_eq!(v, [5, 10, 15, 20, 30]);
        assert_eq!(v.as_ptr(), before);
    }

    #[test]
    fn test_insert_when_full_reallocates_around_gap() {
        let mut v: DynamicArray<String> =
            DynamicArray::from([String::from("a"), String::from("c")]);
        assert_eq!(v.capacity(), 2);
        v.insert(1, String::from("b"));
        assert_eq!(v, ["a", "b", "c"]);
        assert_eq!(v.capacity(), 4);
    }

    #[test]
    fn test_repeated_front_insert_through_growth() {
        let mut v: DynamicArray<String> = DynamicArray::new();
        for i in 0..9 {
            v.insert(0, i.to_string());
        }
        assert_eq!(v.capacity(), 16);
        assert_eq!(v, ["8", "7", "6", "5", "4", "3", "2", "1", "0"]);
        let tail = v.split_off(6);
        assert_eq!(tail, ["2", "1", "0"]);
    }

    #[test]
    fn test_insert_at_end_matches_push() {
        let mut a: DynamicArray<i32> = DynamicArray::from([1, 2, 3]);
        let mut b = a.clone();
        let end = a.len();
        a.insert(end, 4);
        b.push(4);
        assert_eq!(a, b);
        assert_eq!(a.capacity(), b.capacity());
    }

    #[test]
    fn test_insert_into_empty() {
        let mut v: DynamicArray<i32> = DynamicArray::new();
        assert_eq!(*v.insert(0, 7), 7);
        assert_eq!(v, [7]);
        assert_eq!(v.capacity(), 1);
    }

    #[test]
    fn test_insert_returns_reference_to_inserted() {
        let mut v: DynamicArray<i32> = DynamicArray::from([1, 3]);
        *v.emplace_with(1, || 2) *= 100;
        assert_eq!(v, [1, 200, 3]);
    }

    #[test]
    #[should_panic(expected = "insertion index")]
    fn test_insert_past_len_panics() {
        let mut v: DynamicArray<i32> = DynamicArray::from([1, 2]);
        v.insert(3, 9);
    }
}
