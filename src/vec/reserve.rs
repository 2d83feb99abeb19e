// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::Error,
    raw::{handle_error, report, RawStorage},
    trace::trace_event,
    vec::DynamicArray,
};

// Core imports
use core::ptr;

impl<T> DynamicArray<T> {
    /// Ensures the capacity is at least `new_capacity` (a total, not an increment).
    ///
    /// No-op if `new_capacity <= capacity()`. Otherwise allocates a block of
    /// exactly `new_capacity` slots and moves the elements into it. Relocation
    /// is a bitwise move and cannot fail, so either the whole call succeeds or
    /// the array is untouched.
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow; allocator failure goes through
    /// [`alloc::alloc::handle_alloc_error`].
    #[inline]
    pub fn reserve(&mut self, new_capacity: usize) {
        if let Err(err) = self.try_reserve(new_capacity) {
            handle_error(err)
        }
    }

    /// Fallible variant of [`reserve`](Self::reserve). The array is unchanged on `Err`.
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<(), Error> {
        if new_capacity <= self.capacity() {
            return Ok(());
        }
        let new_buf = RawStorage::try_allocate(new_capacity)?;
        self.adopt(new_buf, None);
        Ok(())
    }

    /// Ensures room for `additional` more elements, growing geometrically.
    ///
    /// The new capacity is the larger of `len + additional` and twice the
    /// current capacity, which keeps repeated calls amortized `O(1)` per element.
    #[inline]
    pub fn reserve_additional(&mut self, additional: usize) {
        if let Err(err) = self.try_reserve_additional(additional) {
            handle_error(err)
        }
    }

    /// Fallible variant of [`reserve_additional`](Self::reserve_additional).
    pub fn try_reserve_additional(&mut self, additional: usize) -> Result<(), Error> {
        let required = self
            .len
            .checked_add(additional)
            .ok_or_else(|| report(Error::CapacityOverflow))?;
        if required <= self.capacity() {
            return Ok(());
        }
        let doubled = self
            .capacity()
            .checked_mul(2)
            .map_or(required, |d| d.max(required));
        self.try_reserve(doubled)
    }

    /// Moves the live elements into `new_buf` and adopts it.
    ///
    /// With `gap: Some(i)`, elements `[i, len)` land one slot further right,
    /// leaving slot `i` of `new_buf` to the caller (which has already filled it
    /// or is about to). The old block is released without dropping anything,
    /// since its elements now live in `new_buf`.
    pub(crate) fn adopt(&mut self, mut new_buf: RawStorage<T>, gap: Option<usize>) {
        let len = self.len;
        let (split, shift) = match gap {
            Some(i) => (i, 1),
            None => (len, 0),
        };
        debug_assert!(split <= len);
        debug_assert!(len + shift <= new_buf.capacity());

        trace_event!(
            old_capacity = self.capacity(),
            new_capacity = new_buf.capacity(),
            len,
            "reallocate"
        );

        // SAFETY: source slots `[0, len)` are live; destination slots are in
        // bounds of `new_buf` (checked above) and distinct from the source block.
        // After the copies the source slots are treated as uninitialized.
        unsafe {
            ptr::copy_nonoverlapping(self.buf.as_ptr(), new_buf.as_mut_ptr(), split);
            ptr::copy_nonoverlapping(
                self.buf.address(split),
                new_buf.address(split + shift),
                len - split,
            );
        }
        self.buf.swap(&mut new_buf);
    }
}
