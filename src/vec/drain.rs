// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::DynamicArray;

// Core imports
use core::{
    fmt,
    iter::FusedIterator,
    ops::{Bound, RangeBounds},
    ptr,
};

/// Draining iterator returned by [`DynamicArray::drain`].
///
/// - Holds a mutable borrow of the parent array for the iterator's lifetime.
/// - While alive, the parent's length covers only the elements before the
///   drained range; the tail is moved back into place when the `Drain` drops.
/// - Elements of the range that are never yielded are dropped with it.
pub struct Drain<'a, T> {
    vec: &'a mut DynamicArray<T>,
    front: usize,
    back: usize, // exclusive
    tail_start: usize,
    tail_len: usize,
}

impl<T> Drain<'_, T> {
    /// The elements not yet yielded, as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[front, back)` are live elements owned by the drain.
        unsafe {
            core::slice::from_raw_parts(self.vec.buf.address(self.front), self.back - self.front)
        }
    }
}

impl<T> Iterator for Drain<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.front < self.back {
            let i = self.front;
            self.front += 1;
            // SAFETY: slot `i` was live and is now outside `[front, back)`.
            Some(unsafe { self.vec.buf.address(i).read() })
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }
}
impl<T> DoubleEndedIterator for Drain<'_, T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front < self.back {
            self.back -= 1;
            // SAFETY: the old last slot was live and is now outside `[front, back)`.
            Some(unsafe { self.vec.buf.address(self.back).read() })
        } else {
            None
        }
    }
}
impl<T> ExactSizeIterator for Drain<'_, T> {}
impl<T> FusedIterator for Drain<'_, T> {}

impl<T> Drop for Drain<'_, T> {
    fn drop(&mut self) {
        /// Restores the tail even if an element destructor panics.
        struct MoveTail<'r, 'a, T>(&'r mut Drain<'a, T>);

        impl<T> Drop for MoveTail<'_, '_, T> {
            fn drop(&mut self) {
                let d = &mut *self.0;
                let start = d.vec.len;
                // SAFETY: the tail `[tail_start, tail_start + tail_len)` is live
                // and `start <= tail_start`; `ptr::copy` handles the overlap.
                unsafe {
                    ptr::copy(
                        d.vec.buf.address(d.tail_start),
                        d.vec.buf.address(start),
                        d.tail_len,
                    );
                }
                d.vec.len = start + d.tail_len;
            }
        }

        let guard = MoveTail(self);
        let d = &mut *guard.0;
        let rest = ptr::slice_from_raw_parts_mut(d.vec.buf.address(d.front), d.back - d.front);
        d.front = d.back;
        // SAFETY: the unyielded range elements are live and owned by the drain.
        unsafe { ptr::drop_in_place(rest) }
    }
}

impl<T: fmt::Debug> fmt::Debug for Drain<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Drain").field(&self.as_slice()).finish()
    }
}

impl<T> DynamicArray<T> {
    /// Removes the elements in `range` and returns them as an iterator.
    ///
    /// The tail after the range is shifted left when the iterator is dropped,
    /// whether or not it was fully consumed. Capacity is unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `start > end` or `end > len()`.
    ///
    /// # Examples
    /// ```
    /// # use dynamic_array::DynamicArray;
    /// let mut v = DynamicArray::from([1, 2, 3, 4]);
    /// let drained: DynamicArray<_> = v.drain(1..3).collect();
    /// assert_eq!(drained, [2, 3]);
    /// assert_eq!(v, [1, 4]);
    /// ```
    #[track_caller]
    pub fn drain<R>(&mut self, range: R) -> Drain<'_, T>
    where
        R: RangeBounds<usize>,
    {
        let len = self.len;

        let start = match range.start_bound() {
            Bound::Included(&i) => i,
            Bound::Excluded(&i) => i.checked_add(1).expect("drain range start overflow"),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&i) => i.checked_add(1).expect("drain range end overflow"),
            Bound::Excluded(&i) => i,
            Bound::Unbounded => len,
        };

        if start > end {
            panic!("drain range start > end: {} > {}", start, end);
        }
        if end > len {
            panic!("drain range end {} exceeds length {}", end, len);
        }

        // Hide the range and the tail until the drain puts the tail back.
        self.len = start;
        Drain {
            vec: self,
            front: start,
            back: end,
            tail_start: end,
            tail_len: len - end,
        }
    }
}
