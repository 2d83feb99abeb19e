// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`DynamicArray`](crate::DynamicArray).
//!
//! - `IntoIter<T>` yields by value and supports `DoubleEndedIterator`,
//!   `ExactSizeIterator`, and `FusedIterator`. Elements it never yields are
//!   dropped with it.
//! - `&DynamicArray` and `&mut DynamicArray` iterate as slices.

mod from_iterator;

// Crate imports
use crate::{raw::RawStorage, vec::DynamicArray};

// Core imports
use core::{fmt, iter::FusedIterator, mem::ManuallyDrop, ptr};

/// Owned iterator returned by `DynamicArray::into_iter()`.
///
/// Takes over the array's storage; slots `[front, back)` are the elements not
/// yet yielded.
pub struct IntoIter<T> {
    pub(crate) buf: RawStorage<T>,
    pub(crate) front: usize,
    pub(crate) back: usize, // exclusive
}

impl<T> IntoIter<T> {
    /// The elements not yet yielded, as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[front, back)` are live and owned by the iterator.
        unsafe { core::slice::from_raw_parts(self.buf.address(self.front), self.back - self.front) }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        if self.front < self.back {
            let i = self.front;
            self.front += 1;
            // SAFETY: slot `i` was live and is now outside `[front, back)`.
            Some(unsafe { self.buf.address(i).read() })
        } else {
            None
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front < self.back {
            self.back -= 1;
            // SAFETY: the old last slot was live and is now outside `[front, back)`.
            Some(unsafe { self.buf.address(self.back).read() })
        } else {
            None
        }
    }
}
impl<T> FusedIterator for IntoIter<T> {}
impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let rest =
            ptr::slice_from_raw_parts_mut(self.buf.address(self.front), self.back - self.front);
        // SAFETY: the unyielded elements are still live; `buf` frees the block after.
        unsafe { ptr::drop_in_place(rest) }
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
impl<'a, T> IntoIterator for &'a mut DynamicArray<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        // The iterator takes over both the storage and the live elements.
        let mut this = ManuallyDrop::new(self);
        IntoIter {
            buf: core::mem::take(&mut this.buf),
            front: 0,
            back: this.len,
        }
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::DynamicArray;
    use alloc::{format, rc::Rc, string::String, vec::Vec};

    #[test]
    fn test_double_ended() {
        let v: DynamicArray<i32> = DynamicArray::from([10, 20, 30, 40]);
        let mut it = v.into_iter();
        assert_eq!(it.next(), Some(10));
        assert_eq!(it.next_back(), Some(40));
        assert_eq!(it.as_slice(), &[20, 30]);
        assert_eq!(it.next(), Some(20));
        assert_eq!(it.next(), Some(30));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn test_size_hint_tracks_consumption() {
        let v: DynamicArray<i32> = DynamicArray::from([10, 20, 30]);
        let mut it = v.into_iter();
        assert_eq!(it.size_hint(), (3, Some(3)));
        it.next();
        assert_eq!(it.len(), 2);
        it.next_back();
        assert_eq!(it.size_hint(), (1, Some(1)));
    }

    #[test]
    fn test_dropping_iterator_drops_rest() {
        let tracker = Rc::new(());
        let v: DynamicArray<Rc<()>> = DynamicArray::from_fn(4, |_| Rc::clone(&tracker));
        let mut it = v.into_iter();
        let first = it.next();
        drop(it);
        assert_eq!(Rc::strong_count(&tracker), 2);
        drop(first);
        assert_eq!(Rc::strong_count(&tracker), 1);
    }

    #[test]
    fn test_iteration_yields_len_elements_in_order() {
        let mut v: DynamicArray<String> = DynamicArray::new();
        for s in ["x", "y", "z"] {
            v.push(String::from(s));
        }
        let borrowed: Vec<&str> = (&v).into_iter().map(String::as_str).collect();
        assert_eq!(borrowed, ["x", "y", "z"]);

        for s in &mut v {
            s.make_ascii_uppercase();
        }
        let owned: Vec<String> = v.into_iter().collect();
        assert_eq!(owned, ["X", "Y", "Z"]);
    }

    #[test]
    fn test_into_iter_debug() {
        let v: DynamicArray<u8> = DynamicArray::from([1, 2]);
        assert_eq!(format!("{:?}", v.into_iter()), "IntoIter([1, 2])");
    }

    #[test]
    fn test_into_iter_zero_sized_type() {
        let v: DynamicArray<()> = DynamicArray::from([(); 3]);
        assert_eq!(v.into_iter().count(), 3);
    }
}
