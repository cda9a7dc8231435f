//! An [`Array`] is serialized as a plain sequence of its elements.

use std::fmt;
use std::marker::PhantomData;

use serde::{Serialize, Serializer, Deserialize, Deserializer};
use serde::de::{SeqAccess, Visitor};

use super::{Array};

/// Upper bound on the capacity reserved from an untrusted length hint.
const MAX_PREALLOCATION: usize = 4096;

/// **Requires crate feature `"serde"`**
impl<T: Serialize> Serialize for Array<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

struct ArrayVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for ArrayVisitor<T> {
    type Value = Array<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of array elements")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATION));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Array::new(items))
    }
}

/// **Requires crate feature `"serde"`**
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Array<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(ArrayVisitor(PhantomData))
    }
}
