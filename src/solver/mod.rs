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

//! Multi-way join machinery
//!
//! - [`Constraint`] - one cursor bound to a slice of the variable vector
//! - [`Solver`] - propagate/split/backtrack loop enumerating all
//!   assignments that satisfy every constraint simultaneously

pub mod constraint;
pub mod engine;

pub use constraint::Constraint;
pub use engine::{Solutions, Solver};
