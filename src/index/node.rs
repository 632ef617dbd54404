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

//! B-tree nodes
//!
//! Nodes live in a slot arena owned by the tree and refer to each other by
//! [`NodeId`]. Rebalancing relinks parents constantly, which integer handles
//! make cheap; no ownership cycles, no reference counting.

use crate::core::key::{greatest_key, least_key, Key};

/// Handle of a node slot in the tree's arena
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NodeId(pub(crate) u32);

impl NodeId {
    #[inline]
    pub(crate) fn ix(self) -> usize {
        self.0 as usize
    }
}

/// Which side of a separator slot a child entry travels with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WhichChild {
    Left,
    Right,
}

impl WhichChild {
    #[inline]
    fn offset(self) -> usize {
        match self {
            WhichChild::Left => 0,
            WhichChild::Right => 1,
        }
    }
}

/// A B-tree node
///
/// `keys` and `vals` run in parallel; `children` is empty exactly for
/// leaves and otherwise holds one more entry than `keys`. The cached
/// `lower`/`upper` summaries are the minimum and maximum key anywhere in
/// the subtree rooted here, maintained by the tree after every mutation.
#[derive(Debug)]
pub(crate) struct Node<V> {
    /// Keys stored in this node (sorted, no duplicates)
    pub(crate) keys: Vec<Key>,
    /// Values corresponding to keys
    pub(crate) vals: Vec<V>,
    /// Child handles; empty iff leaf
    pub(crate) children: Vec<NodeId>,
    /// Parent handle; `None` for the root
    pub(crate) parent: Option<NodeId>,
    /// Position of this node within its parent's children
    pub(crate) parent_ix: usize,
    /// Smallest key in this subtree
    pub(crate) lower: Key,
    /// Largest key in this subtree
    pub(crate) upper: Key,
}

impl<V> Node<V> {
    /// Create a detached empty leaf
    ///
    /// An empty node carries an inverted summary range so that no key ever
    /// tests inside it.
    pub(crate) fn new_leaf(key_len: usize) -> Self {
        Self {
            keys: Vec::new(),
            vals: Vec::new(),
            children: Vec::new(),
            parent: None,
            parent_ix: 0,
            lower: greatest_key(key_len),
            upper: least_key(key_len),
        }
    }

    #[inline]
    pub(crate) fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Entry insertion primitive used by split and the rotations
    ///
    /// Inserts `key` and `val` at `ix`; a child, when given, lands on the
    /// chosen side of the new separator.
    pub(crate) fn push(
        &mut self,
        ix: usize,
        key: Key,
        val: V,
        child: Option<NodeId>,
        which: WhichChild,
    ) {
        self.keys.insert(ix, key);
        self.vals.insert(ix, val);
        if let Some(child) = child {
            self.children.insert(ix + which.offset(), child);
        }
    }

    /// Inverse of [`push`](Node::push)
    ///
    /// Removes the entry at `ix` together with the child on the chosen side
    /// of it (for internal nodes).
    pub(crate) fn pop(&mut self, ix: usize, which: WhichChild) -> (Key, V, Option<NodeId>) {
        let key = self.keys.remove(ix);
        let val = self.vals.remove(ix);
        let child = if self.is_leaf() {
            None
        } else {
            Some(self.children.remove(ix + which.offset()))
        };
        (key, val, child)
    }
}
