// Copyright 2026 Leapjoin Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Composite keys
//!
//! A key is a fixed-length vector of [`Datum`] elements; every key in one
//! tree shares the same arity. Comparison is lexicographic over element
//! comparison and assumes equal arity. Inline storage covers arities up to
//! four without heap allocation.

use std::cmp::Ordering;

use smallvec::SmallVec;

use super::datum::Datum;

/// A composite key: a fixed-arity vector of scalar elements
pub type Key = SmallVec<[Datum; 4]>;

/// Build a key from any elements convertible to datums
pub fn key<T: Into<Datum>>(elements: impl IntoIterator<Item = T>) -> Key {
    elements.into_iter().map(Into::into).collect()
}

/// Copy a borrowed key into an owned one
///
/// Seeks return keys aliased into tree storage; callers that need to hold
/// onto a result across further calls copy it first.
pub fn copy_key(key: &[Datum]) -> Key {
    key.iter().cloned().collect()
}

/// The key of the given arity below every stored key
pub fn least_key(key_len: usize) -> Key {
    (0..key_len).map(|_| Datum::Least).collect()
}

/// The key of the given arity above every stored key
pub fn greatest_key(key_len: usize) -> Key {
    (0..key_len).map(|_| Datum::Greatest).collect()
}

/// Lexicographic comparison of two keys of equal arity
pub fn cmp_keys(a: &[Datum], b: &[Datum]) -> Ordering {
    debug_assert_eq!(a.len(), b.len(), "keys must share arity");
    for (x, y) in a.iter().zip(b) {
        match x.cmp(y) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    Ordering::Equal
}

/// Whether the first `prefix_len` elements differ in at least one position
pub fn prefix_not_equal(a: &[Datum], b: &[Datum], prefix_len: usize) -> bool {
    debug_assert!(prefix_len <= a.len() && prefix_len <= b.len());
    a[..prefix_len]
        .iter()
        .zip(&b[..prefix_len])
        .any(|(x, y)| x != y)
}

/// Index of the first key strictly greater than `key` in a sorted slice
///
/// May equal `keys.len()` when no such key exists.
pub fn find_gt(keys: &[Key], key: &[Datum]) -> usize {
    keys.partition_point(|k| cmp_keys(k, key) != Ordering::Greater)
}

/// Index of the first key greater than or equal to `key` in a sorted slice
pub fn find_gte(keys: &[Key], key: &[Datum]) -> usize {
    keys.partition_point(|k| cmp_keys(k, key) == Ordering::Less)
}
