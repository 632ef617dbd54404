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

//! Core types and definitions for Leapjoin
//!
//! This module contains the fundamental types used throughout the engine:
//!
//! - [`Datum`] - scalar key elements (boolean, number, text, bound sentinels)
//! - [`Key`] - fixed-arity composite keys with lexicographic ordering
//! - [`Error`] - error types for construction-time misuse

pub mod datum;
pub mod error;
pub mod key;

// Re-export main types for convenience
pub use datum::Datum;
pub use error::{Error, Result};
pub use key::{
    cmp_keys, copy_key, find_gt, find_gte, greatest_key, key, least_key, prefix_not_equal, Key,
};
