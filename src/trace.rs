// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Structured logging hooks.
//!
//! With the `tracing` feature enabled, [`trace_event!`] forwards to
//! [`tracing::trace!`] under the `dynamic_array` target. Without it the macro
//! expands to nothing and its arguments are never evaluated.

#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($($arg:tt)+) => {
        ::tracing::trace!(target: "dynamic_array", $($arg)+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($($arg:tt)+) => {};
}

pub(crate) use trace_event;
