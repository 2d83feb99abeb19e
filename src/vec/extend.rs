// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::{DynamicArray, FillGuard};

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.reserve_additional(lower);
        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.reserve_additional(lower);
        for &item in iter {
            self.push(item);
        }
    }
}

impl<T> DynamicArray<T> {
    /// Clones every element of `src` onto the end.
    ///
    /// Reserves once up front. If a `clone` panics, the clones appended so far
    /// are dropped and the length is unchanged.
    pub fn extend_from_slice(&mut self, src: &[T])
    where
        T: Clone,
    {
        self.reserve_additional(src.len());
        let len = self.len;
        // SAFETY: the reservation above makes `[len, len + src.len())` spare slots.
        let mut fill = unsafe { FillGuard::new(self.buf.address(len), src.len()) };
        for item in src {
            fill.write(item.clone());
        }
        self.len = len + fill.defuse();
    }
}

#[cfg(test)]
mod tests {
    use crate::DynamicArray;
    use alloc::string::String;

    #[test]
    fn test_extend_from_slice() {
        let mut v: DynamicArray<u8> = DynamicArray::new();
        v.extend_from_slice(&[1, 2, 3]);
        assert_eq!(v, [1, 2, 3]);
        assert_eq!(v.capacity(), 3);
        v.extend_from_slice(&[]);
        assert_eq!(v.len(), 3);
        v.extend_from_slice(&[4]);
        assert_eq!(v, [1, 2, 3, 4]);
        assert_eq!(v.capacity(), 6);
    }

    #[test]
    fn test_extend_by_value_and_by_ref() {
        let mut v: DynamicArray<i32> = DynamicArray::new();
        v.extend(0..3);
        v.extend(&[10, 11]);
        assert_eq!(v, [0, 1, 2, 10, 11]);
    }

    #[test]
    fn test_extend_with_unsized_hint() {
        let mut v: DynamicArray<String> = DynamicArray::new();
        v.extend("a,b,c".split(',').map(String::from));
        assert_eq!(v, ["a", "b", "c"]);
    }
}
