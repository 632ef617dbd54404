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

//! Seek cursors
//!
//! A [`Cursor`] is positioned over one tree and moves forward to bounds:
//! `seek_gte` lands on the smallest stored key at or above the probe,
//! `seek_gt` on the smallest strictly above it.
//!
//! Instead of restarting from the root, a seek first climbs from its
//! current position while the cached subtree summaries prove the answer
//! lies outside the current subtree, then walks back down. Under
//! monotonically increasing probes this amortizes to a handful of node
//! visits per call.
//!
//! The cursor borrows its tree, so the tree cannot be mutated while any
//! cursor is alive. Returned keys alias tree storage; copy them (for
//! example with [`copy_key`](crate::core::key::copy_key)) before holding
//! on to them.

use std::cmp::Ordering;

use crate::core::key::{cmp_keys, find_gt, find_gte, Key};
use crate::core::Datum;

use super::btree::BTree;
use super::node::NodeId;

/// A stateful cursor over one tree
#[derive(Debug)]
pub struct Cursor<'a, V> {
    tree: &'a BTree<V>,
    node: NodeId,
    ix: usize,
}

impl<'a, V> Cursor<'a, V> {
    pub(crate) fn new(tree: &'a BTree<V>) -> Self {
        Self {
            tree,
            node: tree.root_id(),
            ix: 0,
        }
    }

    /// Arity of the underlying tree's keys
    pub fn key_len(&self) -> usize {
        self.tree.key_len()
    }

    /// Move back to the root
    pub fn reset(&mut self) {
        self.node = self.tree.root_id();
        self.ix = 0;
    }

    /// Smallest stored key greater than or equal to `key`
    pub fn seek_gte(&mut self, key: &[Datum]) -> Option<&'a Key> {
        self.seek(key, false)
    }

    /// Smallest stored key strictly greater than `key`
    pub fn seek_gt(&mut self, key: &[Datum]) -> Option<&'a Key> {
        self.seek(key, true)
    }

    fn seek(&mut self, key: &[Datum], strict: bool) -> Option<&'a Key> {
        assert_eq!(
            key.len(),
            self.tree.key_len(),
            "probe arity must match the tree"
        );
        let tree = self.tree;

        // Climb while this subtree provably cannot hold the answer: either
        // everything here is already behind the probe, or keys between the
        // probe and this subtree's smallest key may exist elsewhere.
        while self.node != tree.root_id() {
            let node = tree.node(self.node);
            let past = match cmp_keys(&node.upper, key) {
                Ordering::Less => true,
                Ordering::Equal => strict,
                Ordering::Greater => false,
            };
            let before = cmp_keys(key, &node.lower) == Ordering::Less;
            if !past && !before {
                break;
            }
            self.node = node.parent.unwrap();
            self.ix = 0;
        }

        // Walk down. At an internal node the candidate child may be skipped
        // outright when its upper summary shows it holds nothing past the
        // probe; the separator above it is then the answer.
        loop {
            let node = tree.node(self.node);
            let ix = if strict {
                find_gt(&node.keys, key)
            } else {
                find_gte(&node.keys, key)
            };
            self.ix = ix;
            if node.is_leaf() {
                return node.keys.get(ix);
            }
            let child = tree.node(node.children[ix]);
            let child_exhausted = match cmp_keys(&child.upper, key) {
                Ordering::Less => true,
                Ordering::Equal => strict,
                Ordering::Greater => false,
            };
            if child_exhausted {
                return node.keys.get(ix);
            }
            self.node = node.children[ix];
        }
    }
}
