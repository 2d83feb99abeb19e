// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`DynamicArray`](crate::DynamicArray).
//!
//! - **Serialize**: as a sequence of the `len` live elements.
//! - **Deserialize**: from any sequence. Capacity is reserved from the
//!   sequence's size hint, capped so a hostile hint cannot force a huge
//!   allocation up front.

// Crate imports
use crate::vec::DynamicArray;

// Core imports
use core::{fmt, marker::PhantomData, mem};

// External imports - serde
use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};

/// Upper bound, in bytes, of what a size hint alone may pre-allocate.
const MAX_PREALLOC_BYTES: usize = 1024 * 1024;

impl<T: Serialize> Serialize for DynamicArray<T> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let mut seq = s.serialize_seq(Some(self.len()))?;
        for item in self {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct ArrayVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> de::Visitor<'de> for ArrayVisitor<T> {
    type Value = DynamicArray<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sequence")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let cap = a
            .size_hint()
            .unwrap_or(0)
            .min(MAX_PREALLOC_BYTES / mem::size_of::<T>().max(1));
        let mut out =
            DynamicArray::try_with_capacity(cap).map_err(<A::Error as de::Error>::custom)?;
        while let Some(elem) = a.next_element::<T>()? {
            out.try_push(elem).map_err(<A::Error as de::Error>::custom)?;
        }
        Ok(out)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for DynamicArray<T> {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(ArrayVisitor(PhantomData))
    }
}
