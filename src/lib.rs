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

//! # Leapjoin - in-memory ordered index engine with a leapfrog join solver
//!
//! Leapjoin provides three tightly coupled pieces:
//!
//! - [`BTree`] - a mutable B-tree mapping fixed-arity composite keys to
//!   values, with the smallest and largest key of every subtree cached on
//!   its root node
//! - [`Cursor`] - a stateful forward cursor whose `seek_gt`/`seek_gte`
//!   climb lazily using those summaries before descending, skipping whole
//!   subtrees
//! - [`Solver`] - a worst-case-optimal multi-way join: several cursors,
//!   each bound to a slice of a shared variable vector through a
//!   [`Constraint`], enumerate every assignment satisfying all of them at
//!   once
//!
//! ## Quick start
//!
//! ```rust
//! use leapjoin::{key, BTree, Constraint, Solver};
//!
//! // edges of a small graph
//! let mut edges = BTree::new(2, 2).unwrap();
//! for (from, to) in [("a", "b"), ("b", "c"), ("a", "c")] {
//!     edges.insert(key([from, to]), ());
//! }
//!
//! // paths x -> y -> z: edge(x, y) joined with edge(y, z)
//! let constraints = vec![
//!     Constraint::new(edges.cursor()),
//!     Constraint::new(edges.cursor()),
//! ];
//! let mut solver = Solver::new(3, constraints, vec![vec![0, 1], vec![1, 2]]).unwrap();
//! while let Some(path) = solver.next() {
//!     println!("{} -> {} -> {}", path[0], path[1], path[2]);
//! }
//! ```
//!
//! The engine is single-threaded and purely in-memory. Cursors borrow
//! their tree, so the borrow checker enforces the reader/writer contract;
//! keys returned from seeks alias tree storage and should be copied before
//! being held across calls.
//!
//! ## Modules
//!
//! - [`core`] - scalar elements, composite keys, errors
//! - [`index`] - the B-tree and its cursor
//! - [`solver`] - constraints and the join solver

pub mod core;
pub mod index;
pub mod solver;

// Re-export main types for convenience
pub use crate::core::{
    cmp_keys, copy_key, greatest_key, key, least_key, Datum, Error, Key, Result,
};
pub use crate::index::{BTree, Cursor, Iter};
pub use crate::solver::{Constraint, Solutions, Solver};
