// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Uninitialized backing storage.
//!
//! [`RawStorage<T>`] owns a heap block sized for a fixed number of `T` slots.
//! It knows its capacity and how to hand out slot addresses, but it has no
//! idea which slots hold live values: that bookkeeping belongs entirely to
//! the caller (normally [`DynamicArray`](crate::DynamicArray)).
//!
//! Dropping a `RawStorage` frees the block and never runs an element
//! destructor.

// Crate imports
use crate::{error::Error, trace::trace_event};

// Alloc imports
use alloc::alloc::{self as global, handle_alloc_error};

// Core imports
use core::{
    alloc::Layout,
    fmt,
    marker::PhantomData,
    mem::{self, MaybeUninit},
    ops::{Index, IndexMut},
    ptr::NonNull,
};

/// An owned, fixed-capacity block of uninitialized `T` slots.
///
/// - Capacity `0` and zero-sized `T` never touch the allocator; the base
///   pointer is then dangling (but aligned and non-null).
/// - The type is move-only. Copying raw bytes of a block would duplicate
///   whatever values the caller placed in it, so there is no `Clone`.
/// - [`swap`](RawStorage::swap) and moves are `O(1)` and touch no slot.
///
/// # Examples
///
/// ```rust
/// use dynamic_array::RawStorage;
///
/// let mut raw: RawStorage<u32> = RawStorage::allocate(4);
/// assert_eq!(raw.capacity(), 4);
/// raw[0].write(7);
/// // SAFETY: slot 0 was written just above.
/// assert_eq!(unsafe { raw[0].assume_init() }, 7);
/// ```
pub struct RawStorage<T> {
    ptr: NonNull<T>,
    cap: usize,
    _owns: PhantomData<T>,
}

// SAFETY: `RawStorage<T>` uniquely owns its block, exactly like `Box<[MaybeUninit<T>]>`.
unsafe impl<T: Send> Send for RawStorage<T> {}
// SAFETY: shared access only hands out `&MaybeUninit<T>` and raw pointers.
unsafe impl<T: Sync> Sync for RawStorage<T> {}

impl<T> RawStorage<T> {
    const IS_ZST: bool = mem::size_of::<T>() == 0;

    /// Creates an empty block with capacity `0`. Does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            _owns: PhantomData,
        }
    }

    /// Allocates a block for `capacity` slots.
    ///
    /// Returns [`Error::CapacityOverflow`] when `capacity * size_of::<T>()`
    /// exceeds `isize::MAX`, and [`Error::AllocError`] when the global
    /// allocator fails. Nothing is retained on failure.
    pub fn try_allocate(capacity: usize) -> Result<Self, Error> {
        if capacity == 0 || Self::IS_ZST {
            return Ok(Self {
                ptr: NonNull::dangling(),
                cap: capacity,
                _owns: PhantomData,
            });
        }

        let layout =
            Layout::array::<T>(capacity).map_err(|_| report(Error::CapacityOverflow))?;
        // SAFETY: `capacity > 0` and `T` is not zero-sized, so `layout` has a
        // non-zero size.
        let raw = unsafe { global::alloc(layout) };
        match NonNull::new(raw.cast::<T>()) {
            Some(ptr) => Ok(Self {
                ptr,
                cap: capacity,
                _owns: PhantomData,
            }),
            None => Err(report(Error::AllocError { layout })),
        }
    }

    /// Allocates a block for `capacity` slots, diverging on failure.
    ///
    /// # Panics
    ///
    /// Panics on [`Error::CapacityOverflow`]. Allocator failure is routed to
    /// [`handle_alloc_error`], which aborts by default.
    #[inline]
    pub fn allocate(capacity: usize) -> Self {
        match Self::try_allocate(capacity) {
            Ok(raw) => raw,
            Err(err) => handle_error(err),
        }
    }

    /// Number of slots in the block.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.cap
    }

    /// Base address of the block.
    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Mutable base address of the block.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Address of slot `offset`.
    ///
    /// `offset == capacity()` (one past the end) is a legal address to compute
    /// but must never be dereferenced. Larger offsets are a contract
    /// violation, caught by a debug assertion.
    #[inline]
    pub fn address(&self, offset: usize) -> *mut T {
        debug_assert!(
            offset <= self.cap,
            "slot offset {offset} past one-past-end of capacity {}",
            self.cap
        );
        self.ptr.as_ptr().wrapping_add(offset)
    }

    /// Exchanges blocks with `other`. No slot is read or written.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.ptr, &mut other.ptr);
        mem::swap(&mut self.cap, &mut other.cap);
    }
}

impl<T> Default for RawStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for RawStorage<T> {
    type Output = MaybeUninit<T>;

    fn index(&self, i: usize) -> &MaybeUninit<T> {
        assert!(
            i < self.cap,
            "slot index {i} out of range for capacity {}",
            self.cap
        );
        // SAFETY: `i < cap`, so the slot lies inside the block (or `T` is a ZST
        // and the dangling base is valid for zero-byte access). `MaybeUninit`
        // makes no claim about the contents.
        unsafe { &*self.ptr.as_ptr().add(i).cast::<MaybeUninit<T>>() }
    }
}

impl<T> IndexMut<usize> for RawStorage<T> {
    fn index_mut(&mut self, i: usize) -> &mut MaybeUninit<T> {
        assert!(
            i < self.cap,
            "slot index {i} out of range for capacity {}",
            self.cap
        );
        // SAFETY: as in `index`; `&mut self` gives exclusive access to the block.
        unsafe { &mut *self.ptr.as_ptr().add(i).cast::<MaybeUninit<T>>() }
    }
}

impl<T> Drop for RawStorage<T> {
    fn drop(&mut self) {
        if self.cap == 0 || Self::IS_ZST {
            return;
        }
        if let Ok(layout) = Layout::array::<T>(self.cap) {
            // SAFETY: the block was obtained from `alloc` with exactly this
            // layout in `try_allocate`, and ownership is unique.
            unsafe { global::dealloc(self.ptr.as_ptr().cast::<u8>(), layout) }
        }
    }
}

impl<T> fmt::Debug for RawStorage<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawStorage")
            .field("ptr", &self.ptr)
            .field("capacity", &self.cap)
            .finish()
    }
}

/// Emits the `allocation failed` event for `err` and hands it back.
///
/// Every `Error` is created through here, so fallible and diverging callers
/// both see exactly one event per failure.
#[cold]
pub(crate) fn report(err: Error) -> Error {
    trace_event!(error = %err, "allocation failed");
    err
}

/// Turns an allocation error into the matching divergence for infallible APIs.
#[cold]
#[track_caller]
pub(crate) fn handle_error(err: Error) -> ! {
    match err {
        Error::AllocError { layout } => handle_alloc_error(layout),
        Error::CapacityOverflow => panic!("capacity overflow"),
    }
}
