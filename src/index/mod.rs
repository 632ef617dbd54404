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

//! Ordered index structures
//!
//! - [`BTree`] - composite-key B-tree with cached subtree summaries
//! - [`Cursor`] - forward-seeking cursor that exploits the summaries

pub mod btree;
pub mod cursor;
mod node;

pub use btree::{BTree, Iter};
pub use cursor::Cursor;
