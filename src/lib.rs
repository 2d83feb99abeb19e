// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `dynamic-array`
//!
//! A `no_std` + `alloc`, contiguous, growable array that manages its own heap
//! storage instead of wrapping `Vec`.
//!
//! The crate is built from two layers:
//!
//! - [`RawStorage<T>`] owns an uninitialized block sized for a fixed number of
//!   `T` slots. It knows its capacity and slot addresses, and nothing about
//!   which slots hold values. It is move-only and frees its block on drop
//!   without running element destructors.
//! - [`DynamicArray<T>`] owns one `RawStorage<T>` plus a length. It is the sole
//!   authority on which slots are live, and implements construction,
//!   destruction, cloning, growth, insertion and removal on top of the raw
//!   block.
//!
//! ## High-level semantics
//!
//! - `0 <= len <= capacity` at all times; slots `[0, len)` are live.
//! - Appending to a full array grows the capacity to `max(1, 2 * len)`, so
//!   [`DynamicArray::push`] is amortized `O(1)`.
//! - Clones are deep and get capacity equal to the source length.
//! - Moves are `O(1)`; `core::mem::take` leaves an empty array behind.
//! - [`DynamicArray::reserve`] takes a total capacity, not an increment. Use
//!   [`DynamicArray::reserve_additional`] for `Vec::reserve`-style growth.
//!
//! ## Failure behavior
//!
//! - **Allocation failure**: the `try_*` methods return [`Error`]; the others
//!   panic on capacity overflow and route allocator failure to
//!   `alloc::alloc::handle_alloc_error`. Nothing from the failed attempt is
//!   kept.
//! - **Panics in element code** (`Default`, `Clone`, user closures): nothing
//!   leaks and nothing is dropped twice. Reallocating operations (`reserve`,
//!   `push`, `insert` and their `emplace` forms) and `Clone` leave the array
//!   exactly as it was. See [`DynamicArray`] for the full list.
//! - **Contract violations** (indexing past `len`, inserting past `len`,
//!   removing past `len`) panic like slices do.
//!
//! Relocating elements into a larger block is a bitwise move in Rust, which
//! cannot fail, so reallocation never needs a copy-based fallback.
//!
//! ## Features
//!
//! - `serde`: `Serialize` / `Deserialize` for `DynamicArray<T>` as a sequence.
//! - `tracing`: emits `trace`-level events under the `dynamic_array` target
//!   whenever the array reallocates or an allocation fails.
//!
//! ## Example
//!
//! ```rust
//! use dynamic_array::DynamicArray;
//!
//! let mut v = DynamicArray::new();
//! v.push(1);
//! v.push(2);
//! v.push(3);
//! assert_eq!((v.len(), v.capacity()), (3, 4));
//!
//! v.insert(1, 9);
//! v.remove(0);
//! v.pop();
//! assert_eq!(v, [9, 2]);
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_op_in_unsafe_fn)]

extern crate alloc;

// Modules
mod error;
mod index;
mod iter;
mod raw;
#[cfg(feature = "serde")]
mod serde;
mod trace;
mod vec;

// Public exports (crate API surface)
pub use error::Error;
pub use iter::IntoIter;
pub use raw::RawStorage;
pub use vec::{Drain, DynamicArray};
