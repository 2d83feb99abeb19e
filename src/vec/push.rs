// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::Error,
    raw::{handle_error, RawStorage},
    vec::DynamicArray,
};

impl<T> DynamicArray<T> {
    /// Appends `value` and returns a reference to it.
    ///
    /// Amortized `O(1)`: a full array grows to `max(1, 2 * len)` slots.
    #[inline]
    pub fn push(&mut self, value: T) -> &mut T {
        self.emplace_back_with(|| value)
    }

    /// Appends `value`, reporting allocation failure instead of diverging.
    ///
    /// On `Err` the array is unchanged and `value` is dropped.
    pub fn try_push(&mut self, value: T) -> Result<&mut T, Error> {
        if self.len == self.capacity() {
            let new_capacity = self.grown_capacity()?;
            self.try_reserve(new_capacity)?;
        }
        Ok(self.emplace_back_with(|| value))
    }

    /// Appends the value built by `f`, constructing it directly in its final slot.
    ///
    /// When the array is full, `f` runs against the *new* block before any
    /// element is relocated; if `f` panics, the new block is freed and the
    /// array is left exactly as it was. `len` only grows once `f` returned.
    pub fn emplace_back_with<F: FnOnce() -> T>(&mut self, f: F) -> &mut T {
        let len = self.len;
        if len == self.capacity() {
            let new_capacity = self.grown_capacity().unwrap_or_else(|err| handle_error(err));
            let new_buf: RawStorage<T> = RawStorage::allocate(new_capacity);
            // SAFETY: `len < new_capacity`, so the slot is in bounds and uninitialized.
            unsafe { new_buf.address(len).write(f()) };
            self.adopt(new_buf, None);
        } else {
            // SAFETY: `len < capacity`, so slot `len` is in bounds and uninitialized.
            unsafe { self.buf.address(len).write(f()) };
        }
        self.len = len + 1;
        // SAFETY: slot `len` was just initialized and is now counted as live.
        unsafe { &mut *self.buf.address(len) }
    }
}

#[cfg(test)]
mod tests {
    use crate::DynamicArray;
    use alloc::{string::String, vec::Vec};

    #[test]
    fn test_push_doubles_capacity_from_zero() {
        let mut v: DynamicArray<u32> = DynamicArray::new();
        let mut seen = Vec::new();
        for i in 0..17 {
            v.push(i);
            seen.push(v.capacity());
        }
        assert_eq!(
            seen,
            [1, 2, 4, 4, 8, 8, 8, 8, 16, 16, 16, 16, 16, 16, 16, 16, 32]
        );
        assert!(v.iter().copied().eq(0..17));
    }

    #[test]
    fn test_push_returns_reference_to_new_element() {
        let mut v: DynamicArray<u32> = DynamicArray::new();
        *v.push(1) += 10;
        assert_eq!(v, [11]);
    }

    #[test]
    fn test_push_within_capacity_keeps_storage() {
        let mut v: DynamicArray<u32> = DynamicArray::with_capacity(4);
        let before = v.as_ptr();
        for i in 0..4 {
            v.push(i);
        }
        assert_eq!(v.as_ptr(), before);
    }

    #[test]
    fn test_emplace_back_with_builds_in_place() {
        let mut v: DynamicArray<Vec<u8>> = DynamicArray::new();
        v.emplace_back_with(|| Vec::from([1, 2]));
        v.emplace_back_with(Vec::new);
        assert_eq!(v.len(), 2);
        assert_eq!(v[0], [1, 2]);
        assert!(v[1].is_empty());
    }

    #[test]
    fn test_push_past_capacity_relocates_owned_values() {
        let mut v: DynamicArray<String> = DynamicArray::with_capacity(2);
        v.push(String::from("a"));
        v.push(String::from("b"));
        let before = v.as_ptr();
        v.push(String::from("c"));
        assert_ne!(v.as_ptr(), before);
        assert_eq!(v.capacity(), 4);
        assert_eq!(v, ["a", "b", "c"]);
    }

    #[test]
    fn test_try_push_grows_like_push() {
        let mut v: DynamicArray<u32> = DynamicArray::new();
        for i in 0..5 {
            assert_eq!(*v.try_push(i).unwrap(), i);
        }
        assert_eq!(v.capacity(), 8);
    }
}
