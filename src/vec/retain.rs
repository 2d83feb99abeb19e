// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::DynamicArray;

// Core imports
use core::ptr;

/// Closes the gap left by rejected elements, even when the predicate or a
/// destructor unwinds halfway through.
struct RetainGuard<'a, T> {
    v: &'a mut DynamicArray<T>,
    processed: usize,
    deleted: usize,
    original_len: usize,
}

impl<T> Drop for RetainGuard<'_, T> {
    fn drop(&mut self) {
        if self.deleted > 0 {
            // SAFETY: `[processed, original_len)` are untouched live elements;
            // they move down over the `deleted` holes just before them.
            unsafe {
                let src = self.v.buf.address(self.processed);
                ptr::copy(
                    src,
                    src.sub(self.deleted),
                    self.original_len - self.processed,
                );
            }
        }
        self.v.len = self.original_len - self.deleted;
    }
}

impl<T> DynamicArray<T> {
    /// Retains only the elements for which `f` returns `true`, preserving order.
    ///
    /// The predicate sees each element once, in order. If it panics, the
    /// elements already rejected stay dropped and the rest are kept.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut f: F) {
        let original_len = self.len;
        // Elements are in flux until the guard restores `len`.
        self.len = 0;
        let mut g = RetainGuard {
            v: self,
            processed: 0,
            deleted: 0,
            original_len,
        };

        while g.processed != original_len {
            let cur = g.v.buf.address(g.processed);
            // SAFETY: `processed < original_len`, so `cur` is live.
            if !f(unsafe { &*cur }) {
                g.processed += 1;
                g.deleted += 1;
                // SAFETY: `cur` is live and now counted as deleted, so the guard
                // will not move or drop it again.
                unsafe { ptr::drop_in_place(cur) };
                continue;
            }
            if g.deleted > 0 {
                // SAFETY: the destination is a hole left by a deleted element.
                unsafe { ptr::copy_nonoverlapping(cur, cur.sub(g.deleted), 1) };
            }
            g.processed += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::DynamicArray;
    use alloc::rc::Rc;

    #[test]
    fn test_retain_is_stable() {
        let mut v: DynamicArray<i32> = DynamicArray::from([1, 2, 3, 4, 5, 6]);
        v.retain(|x| x % 2 == 0);
        assert_eq!(v, [2, 4, 6]);
        assert_eq!(v.capacity(), 6);
    }

    #[test]
    fn test_retain_drops_rejected() {
        let keep = Rc::new(1);
        let toss = Rc::new(0);
        let mut v: DynamicArray<Rc<i32>> = DynamicArray::new();
        for i in 0..6 {
            v.push(if i % 3 == 0 { Rc::clone(&keep) } else { Rc::clone(&toss) });
        }
        v.retain(|x| **x == 1);
        assert_eq!(v.len(), 2);
        assert_eq!(Rc::strong_count(&keep), 3);
        assert_eq!(Rc::strong_count(&toss), 1);
    }

    #[test]
    fn test_retain_panic_keeps_unvisited() {
        use std::panic::{catch_unwind, AssertUnwindSafe};

        let mut v: DynamicArray<i32> = DynamicArray::from([1, 2, 3, 4, 5]);
        let res = catch_unwind(AssertUnwindSafe(|| {
            v.retain(|&x| {
                assert!(x != 4, "boom");
                x != 2
            })
        }));
        assert!(res.is_err());
        assert_eq!(v, [1, 3, 4, 5]);
    }
}
