// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `DynamicArray` type and its inherent API.
//!
//! `DynamicArray<T>` is a growable, heap-backed vector. It owns exactly one
//! [`RawStorage<T>`] and a logical length, and it is the only authority on
//! which slots of that storage hold live values.
//!
//! Invariants:
//! - `0 <= len <= buf.capacity()` always holds.
//! - Slots `buf[..len]` hold initialized `T` values owned by the array.
//! - Slots `buf[len..]` are uninitialized and must never be read as `T`.
//! - Every public method restores these invariants before returning, and
//!   before any call into user code that may panic.

mod as_ptr;
mod clone;
mod drain;
mod extend;
mod from;
mod guard;
mod insert;
mod new;
mod pop;
mod push;
mod remove;
mod reserve;
mod resize;
mod retain;
mod slice;
mod split_off;

pub use drain::Drain;
pub(crate) use guard::FillGuard;

// Crate imports
use crate::{
    error::Error,
    raw::{report, RawStorage},
};

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    mem,
    ops::{Deref, DerefMut},
    ptr,
};

/// A contiguous, growable array that manages its own storage.
///
/// `DynamicArray<T>` is split in two layers:
///
/// - a [`RawStorage<T>`] that owns an uninitialized block and hands out slot
///   addresses; and
/// - the array itself, which tracks `len` and constructs, moves and drops
///   elements inside that block.
///
/// # Growth
///
/// Appending to a full array allocates a new block of `max(1, 2 * len)` slots,
/// so `push` is amortized `O(1)`: starting from empty, capacities go
/// `0, 1, 2, 4, 8, …`. Relocating elements into the new block is a bitwise
/// move, which cannot fail, so a reallocation never leaves elements half
/// transferred.
///
/// # Panic safety
///
/// Element code (`Default`, `Clone`, and the closures passed to
/// [`emplace_back_with`](DynamicArray::emplace_back_with),
/// [`emplace_with`](DynamicArray::emplace_with), [`resize_with`](DynamicArray::resize_with)
/// and friends) may panic. The array never leaks or double-drops an element
/// when that happens, and the following operations leave the array exactly as
/// it was before the call:
///
/// - [`reserve`](DynamicArray::reserve) and its variants
/// - [`push`](DynamicArray::push) / [`emplace_back_with`](DynamicArray::emplace_back_with)
/// - [`insert`](DynamicArray::insert) / [`emplace_with`](DynamicArray::emplace_with)
/// - [`Clone::clone`], and [`Clone::clone_from`] when the source does not fit
///
/// A growing [`resize_with`](DynamicArray::resize_with) that panics keeps the
/// old elements and length but may already have reserved a larger block.
/// [`Clone::clone_from`] over an array that already has room assigns in place
/// and is only as strong as `T::clone_from`.
///
/// # Pointer invalidation
///
/// Raw pointers returned by [`begin`](DynamicArray::begin),
/// [`end`](DynamicArray::end), [`as_ptr`](DynamicArray::as_ptr) and friends
/// are invalidated by anything that may reallocate (`reserve`, `push`,
/// `insert`, growing `resize`) or shift elements (`insert`, `remove`,
/// `retain`). Using them afterwards is undefined behavior; it is not checked.
///
/// # Examples
///
/// ```rust
/// use dynamic_array::DynamicArray;
///
/// let mut v = DynamicArray::new();
/// v.push(1);
/// v.push(2);
/// v.push(3);
/// assert_eq!(v.capacity(), 4);
///
/// v.insert(1, 9);
/// assert_eq!(v, [1, 9, 2, 3]);
/// assert_eq!(v.remove(0), 1);
/// assert_eq!(v.pop(), Some(3));
/// assert_eq!(v, [9, 2]);
/// ```
pub struct DynamicArray<T> {
    pub(crate) buf: RawStorage<T>,
    pub(crate) len: usize,
}

impl<T> DynamicArray<T> {
    /// Number of slots in the backing storage.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Number of live elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `capacity - len`, the number of elements that fit without reallocating.
    #[inline]
    pub const fn spare_capacity(&self) -> usize {
        self.buf.capacity() - self.len
    }

    /// Returns `Some(&T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.as_slice().get(i)
    }

    /// Returns `Some(&mut T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(i)
    }

    /// Shorthand for `self.as_slice().iter()`.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Exchanges storage and length with `other` in `O(1)`. No element is touched.
    ///
    /// This is also the move-assignment primitive: after `a.swap(&mut b)` the
    /// old contents of `a` live in `b` and are dropped with it.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        self.buf.swap(&mut other.buf);
        mem::swap(&mut self.len, &mut other.len);
    }

    /// Drops every element past `len`; no-op if `len >= self.len()`.
    ///
    /// Capacity is unchanged.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }
        let tail = ptr::slice_from_raw_parts_mut(self.buf.address(len), self.len - len);
        // Shrink first: a panicking destructor must not see the tail as live.
        self.len = len;
        // SAFETY: `tail` covers `buf[len..old_len]`, which held live elements
        // and is no longer counted by `self.len`.
        unsafe { ptr::drop_in_place(tail) }
    }

    /// Drops every element. Capacity is unchanged.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Returns `true` if the array contains `x` (linear search).
    #[inline]
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(x)
    }

    /// Capacity for the next growth step: `max(1, 2 * len)`.
    pub(crate) fn grown_capacity(&self) -> Result<usize, Error> {
        if self.len == 0 {
            Ok(1)
        } else {
            self.len
                .checked_mul(2)
                .ok_or_else(|| report(Error::CapacityOverflow))
        }
    }
}

impl<T> Drop for DynamicArray<T> {
    fn drop(&mut self) {
        // SAFETY: `buf[..len]` are live and owned by `self`; `buf` frees the
        // block afterwards without touching slots.
        unsafe { ptr::drop_in_place(self.as_mut_slice()) }
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, U> PartialEq<DynamicArray<U>> for DynamicArray<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &DynamicArray<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T, U> PartialEq<[U]> for DynamicArray<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}
impl<T, U> PartialEq<&[U]> for DynamicArray<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}
impl<T, U, const N: usize> PartialEq<[U; N]> for DynamicArray<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other
    }
}
impl<T: Eq> Eq for DynamicArray<T> {}
impl<T: Ord> Ord for DynamicArray<T> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: PartialOrd> PartialOrd for DynamicArray<T> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Hash> Hash for DynamicArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for DynamicArray<T> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T> DerefMut for DynamicArray<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for DynamicArray<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> AsMut<[T]> for DynamicArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as a slice)
impl<T> Borrow<[T]> for DynamicArray<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> BorrowMut<[T]> for DynamicArray<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::DynamicArray;
    use alloc::{format, rc::Rc, string::String};

    #[test]
    fn test_reference_scenario() {
        let mut v: DynamicArray<i32> = DynamicArray::new();
        v.push(1);
        v.push(2);
        v.push(3);
        assert_eq!(v.len(), 3);
        assert_eq!(v.capacity(), 4);
        assert_eq!(v, [1, 2, 3]);

        v.insert(1, 9);
        assert_eq!(v, [1, 9, 2, 3]);
        assert_eq!(v.len(), 4);

        assert_eq!(v.remove(0), 1);
        assert_eq!(v, [9, 2, 3]);
        assert_eq!(v.len(), 3);

        assert_eq!(v.pop(), Some(3));
        assert_eq!(v, [9, 2]);
        assert_eq!(v.len(), 2);
    }

    #[test]
    fn test_default_and_capacity() {
        let v: DynamicArray<i32> = DynamicArray::default();
        assert_eq!(v.len(), 0);
        assert_eq!(v.capacity(), 0);
        assert!(v.is_empty());
        assert_eq!(v.spare_capacity(), 0);

        let w: DynamicArray<i32> = DynamicArray::with_capacity(5);
        assert_eq!(w.capacity(), 5);
        assert_eq!(w.spare_capacity(), 5);
    }

    #[test]
    fn test_swap_exchanges_everything() {
        let mut a: DynamicArray<i32> = DynamicArray::from([1, 2, 3]);
        let mut b: DynamicArray<i32> = DynamicArray::with_capacity(10);
        a.swap(&mut b);
        assert!(a.is_empty());
        assert_eq!(a.capacity(), 10);
        assert_eq!(b, [1, 2, 3]);
        assert_eq!(b.capacity(), 3);
    }

    #[test]
    fn test_move_leaves_source_empty() {
        let mut a: DynamicArray<String> = DynamicArray::new();
        a.push(String::from("x"));
        a.push(String::from("y"));
        let b = core::mem::take(&mut a);
        assert_eq!(a.len(), 0);
        assert_eq!(b, [String::from("x"), String::from("y")]);
    }

    #[test]
    fn test_truncate_and_clear_drop_elements() {
        let tracker = Rc::new(());
        let mut v: DynamicArray<Rc<()>> = DynamicArray::new();
        for _ in 0..5 {
            v.push(Rc::clone(&tracker));
        }
        assert_eq!(Rc::strong_count(&tracker), 6);

        v.truncate(10);
        assert_eq!(v.len(), 5);

        v.truncate(2);
        assert_eq!(v.len(), 2);
        assert_eq!(v.capacity(), 8);
        assert_eq!(Rc::strong_count(&tracker), 3);

        v.clear();
        assert!(v.is_empty());
        assert_eq!(Rc::strong_count(&tracker), 1);
    }

    #[test]
    fn test_drop_releases_elements() {
        let tracker = Rc::new(());
        {
            let mut v = DynamicArray::new();
            for _ in 0..3 {
                v.push(Rc::clone(&tracker));
            }
        }
        assert_eq!(Rc::strong_count(&tracker), 1);
    }

    #[test]
    fn test_contains_and_getters() {
        let v: DynamicArray<i32> = DynamicArray::from([7, 8, 9]);
        assert!(v.contains(&7));
        assert!(!v.contains(&10));
        assert_eq!(v.first(), Some(&7));
        assert_eq!(v.last(), Some(&9));
        assert_eq!(v.get(1), Some(&8));
        assert_eq!(v.get(3), None);

        let mut w = v.clone();
        *w.get_mut(1).unwrap() = 80;
        assert_eq!(w, [7, 80, 9]);
        assert_eq!(w.get_mut(3), None);
    }

    #[test]
    fn test_deref_and_as_ref() {
        let mut v: DynamicArray<i32> = DynamicArray::from([1, 2]);
        let s: &[i32] = &v;
        assert_eq!(s, &[1, 2]);
        let smut: &mut [i32] = &mut v;
        smut[1] = 22;
        assert_eq!(v.as_slice(), &[1, 22]);
        let amut: &mut [i32] = v.as_mut();
        amut[0] = 11;
        let aref: &[i32] = v.as_ref();
        assert_eq!(aref, &[11, 22]);
    }

    #[test]
    fn test_ordering_and_hash_follow_slices() {
        use core::hash::BuildHasher;
        use std::collections::hash_map::RandomState;

        let a: DynamicArray<i32> = DynamicArray::from([1, 2, 3]);
        let b: DynamicArray<i32> = DynamicArray::from([1, 2, 4]);
        assert!(a < b);
        assert_eq!(a.cmp(&a.clone()), core::cmp::Ordering::Equal);

        let state = RandomState::new();
        assert_eq!(state.hash_one(&a), state.hash_one([1, 2, 3].as_slice()));
    }

    #[test]
    fn test_debug_prints_as_list() {
        let v: DynamicArray<u8> = DynamicArray::from([1, 2]);
        assert_eq!(format!("{v:?}"), "[1, 2]");
    }

    #[test]
    fn test_zero_sized_elements() {
        let mut v: DynamicArray<()> = DynamicArray::new();
        for _ in 0..100 {
            v.push(());
        }
        assert_eq!(v.len(), 100);
        assert_eq!(v.capacity(), 128);
        assert_eq!(v.pop(), Some(()));
        assert_eq!(v.iter().count(), 99);
    }
}
