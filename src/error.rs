// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for [`DynamicArray`](crate::DynamicArray) and
//! [`RawStorage`](crate::RawStorage).
//!
//! Only resource exhaustion is reported through [`Error`]. Contract violations
//! (bad indices, inserting past the end) panic like slices do, and failures
//! inside element code (`Default`, `Clone`, closures) surface as panics that
//! the container unwinds through without leaking.

// Core imports
use core::{alloc::Layout, error::Error as CoreError, fmt};

/// Errors returned by the fallible (`try_*`) allocation paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The requested capacity does not fit in `isize::MAX` bytes, or computing
    /// it overflowed `usize`.
    CapacityOverflow,
    /// The global allocator returned null for `layout`.
    AllocError {
        /// Layout that could not be satisfied.
        layout: Layout,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityOverflow => f.write_str("capacity overflow"),
            Self::AllocError { layout } => write!(
                f,
                "memory allocation of {} bytes (align {}) failed",
                layout.size(),
                layout.align()
            ),
        }
    }
}

impl CoreError for Error {}

#[cfg(test)]
mod tests {
    // Imports
    use crate::Error;
    use alloc::string::{String, ToString};
    use core::{alloc::Layout, error::Error as CoreError};

    fn takes_error(e: &dyn CoreError) -> String {
        e.to_string()
    }

    #[test]
    fn test_error_is_core_error() {
        let s = takes_error(&Error::CapacityOverflow);
        assert!(s.contains("overflow"));
    }

    #[test]
    fn test_alloc_error_reports_layout() {
        let layout = Layout::array::<u64>(16).unwrap();
        let s = Error::AllocError { layout }.to_string();
        assert!(s.contains("128 bytes"));
        assert!(s.contains("align 8"));
    }
}
