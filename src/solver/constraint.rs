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

//! Index constraints
//!
//! A [`Constraint`] wraps one cursor and narrows a pair of bound buffers
//! shared with the solver. The buffers describe, per key position, the
//! interval a satisfying key must fall into. `propagate` leapfrogs the
//! cursor to the smallest key inside the bounds and tightens the lows to
//! it; `split_left` and `split_right` carve the interval in two for the
//! solver's branching.
//!
//! A failed seek writes the all-`Greatest` key into the lows. The solver
//! reads that back as a bound crossing and fails the branch; no separate
//! miss channel exists.

use crate::core::key::{greatest_key, Key};
use crate::core::Datum;
use crate::index::Cursor;

/// Tighten `los` to a key the cursor landed on
///
/// Positions are copied left to right and copying stops after the first
/// position whose element does not already meet the high bound: a
/// position-wise low is only sound while every position before it is
/// pinned.
fn pull_key_into(found: &[Datum], los: &mut [Datum], his: &[Datum]) {
    for i in 0..los.len() {
        los[i] = found[i].clone();
        if los[i] != his[i] {
            break;
        }
    }
}

/// One constraint over a shared bounds vector
#[derive(Debug)]
pub struct Constraint<'a, V> {
    cursor: Cursor<'a, V>,
    /// Scratch probe for the right branch of a split
    right_los: Key,
    /// Cached all-`Greatest` key written to the lows on a missed seek
    greatest: Key,
}

impl<'a, V> Constraint<'a, V> {
    /// Wrap a cursor
    pub fn new(cursor: Cursor<'a, V>) -> Self {
        let key_len = cursor.key_len();
        Self {
            cursor,
            right_los: greatest_key(key_len),
            greatest: greatest_key(key_len),
        }
    }

    /// Arity of the wrapped cursor's keys
    pub fn key_len(&self) -> usize {
        self.cursor.key_len()
    }

    /// Reposition the cursor at the root
    pub fn reset(&mut self) {
        self.cursor.reset();
    }

    /// Leapfrog to the smallest key within the bounds and tighten the lows
    pub(crate) fn propagate(&mut self, los: &mut [Datum], his: &mut [Datum]) {
        let key_len = self.key_len();
        debug_assert_eq!(los.len(), key_len);
        debug_assert_eq!(his.len(), key_len);

        // A lexicographic index cannot tighten positions beneath an unfixed
        // prefix; reset that suffix to the full interval before seeking.
        let mut fixed = 0;
        while fixed < key_len && los[fixed] == his[fixed] {
            fixed += 1;
        }
        for i in (fixed + 1)..key_len {
            los[i] = Datum::Least;
            his[i] = Datum::Greatest;
        }

        match self.cursor.seek_gte(los) {
            Some(found) => pull_key_into(found, los, his),
            None => los.clone_from_slice(&self.greatest),
        }
    }

    /// Pin the first unfixed position to its current low
    ///
    /// The left branch of a split explores assignments where that position
    /// equals the low exactly.
    pub(crate) fn split_left(&self, los: &[Datum], his: &mut [Datum]) {
        for i in 0..los.len() {
            if los[i] != his[i] {
                his[i] = los[i].clone();
                return;
            }
        }
        unreachable!("no position left to split");
    }

    /// Advance the lows strictly past the left branch's pinned value
    ///
    /// Seeks past the probe built from the lows up to and including the
    /// split position, with `Greatest` everywhere after it.
    pub(crate) fn split_right(&mut self, los: &mut [Datum], his: &[Datum]) {
        let key_len = self.right_los.len();
        debug_assert_eq!(los.len(), key_len);
        let mut split_ix = None;
        for i in 0..key_len {
            self.right_los[i] = los[i].clone();
            if los[i] != his[i] {
                split_ix = Some(i);
                break;
            }
        }
        let split_ix = match split_ix {
            Some(ix) => ix,
            None => unreachable!("no position left to split"),
        };
        for slot in &mut self.right_los[split_ix + 1..] {
            *slot = Datum::Greatest;
        }

        match self.cursor.seek_gt(&self.right_los) {
            Some(found) => pull_key_into(found, los, his),
            None => los.clone_from_slice(&self.greatest),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::key::{key, least_key};
    use crate::index::BTree;

    fn pairs() -> BTree<()> {
        let mut tree = BTree::new(2, 2).unwrap();
        for (a, b) in [("a", "b"), ("b", "c"), ("c", "d"), ("d", "b")] {
            tree.insert(key([a, b]), ());
        }
        tree
    }

    #[test]
    fn test_propagate_tightens_first_unfixed_position() {
        let tree = pairs();
        let mut constraint = Constraint::new(tree.cursor());
        let mut los = least_key(2);
        let mut his = greatest_key(2);
        constraint.propagate(&mut los, &mut his);
        // lands on ("a","b") but only the first position may tighten
        assert_eq!(los, key(vec!["a".into(), Datum::Least]));
        assert_eq!(his, greatest_key(2));
    }

    #[test]
    fn test_propagate_copies_through_pinned_prefix() {
        let tree = pairs();
        let mut constraint = Constraint::new(tree.cursor());
        let mut los = key(["b", "a"]);
        let mut his: Key = key(vec!["b".into(), Datum::Greatest]);
        constraint.propagate(&mut los, &mut his);
        // first position is pinned, so the second tightens to the match
        assert_eq!(los, key(["b", "c"]));
    }

    #[test]
    fn test_propagate_widens_suffix_under_unfixed_prefix() {
        let tree = pairs();
        let mut constraint = Constraint::new(tree.cursor());
        // stale tight suffix under an unfixed first position
        let mut los = key(["b", "z"]);
        let mut his: Key = key(vec![Datum::Greatest, "z".into()]);
        constraint.propagate(&mut los, &mut his);
        // suffix was reset before seeking, so ("b","c") is reachable
        assert_eq!(los[0], "b".into());
        assert_eq!(his[1], Datum::Greatest);
    }

    #[test]
    fn test_propagate_miss_writes_greatest() {
        let tree = pairs();
        let mut constraint = Constraint::new(tree.cursor());
        let mut los = key(["z", "z"]);
        let mut his = greatest_key(2);
        constraint.propagate(&mut los, &mut his);
        assert_eq!(los, greatest_key(2));
    }

    #[test]
    fn test_split_left_pins_first_unfixed() {
        let tree = pairs();
        let constraint = Constraint::new(tree.cursor());
        let los = key(["b", "c"]);
        let mut his: Key = key(vec!["b".into(), Datum::Greatest]);
        constraint.split_left(&los, &mut his);
        assert_eq!(his, key(["b", "c"]));
    }

    #[test]
    fn test_split_right_seeks_past_pinned_value() {
        let tree = pairs();
        let mut constraint = Constraint::new(tree.cursor());
        let mut los = key(vec!["a".into(), Datum::Least]);
        let his = greatest_key(2);
        constraint.split_right(&mut los, &his);
        // everything starting with "a" is behind; lands on ("b","c")
        assert_eq!(los[0], "b".into());
    }

    #[test]
    fn test_split_right_miss_writes_greatest() {
        let tree = pairs();
        let mut constraint = Constraint::new(tree.cursor());
        let mut los = key(vec!["d".into(), Datum::Least]);
        let his = greatest_key(2);
        constraint.split_right(&mut los, &his);
        assert_eq!(los, greatest_key(2));
    }
}
