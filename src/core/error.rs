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

//! Error types for Leapjoin
//!
//! Construction-time misuse is reported through these errors. Misuse inside
//! an operation (for example a key whose arity does not match the tree) is a
//! bug in the caller and asserts instead.

use thiserror::Error;

/// Result type alias for Leapjoin operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Leapjoin
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // =========================================================================
    // Tree construction errors
    // =========================================================================
    /// Minimum node occupancy must be positive
    #[error("min_keys must be at least 1")]
    ZeroMinKeys,

    /// Keys must carry at least one element
    #[error("key_len must be at least 1")]
    ZeroKeyLen,

    // =========================================================================
    // Solver construction errors
    // =========================================================================
    /// A solver needs at least one constraint to make progress
    #[error("solver requires at least one constraint")]
    NoConstraints,

    /// A solver needs at least one variable to bind
    #[error("solver requires at least one variable")]
    NoVariables,

    /// One variable mapping is required per constraint
    #[error("expected {constraints} variable mappings, got {got}")]
    MappingCountMismatch { constraints: usize, got: usize },

    /// A variable mapping must cover every key position of its constraint
    #[error("mapping for constraint {constraint} has {got} entries, expected key arity {expected}")]
    MappingArityMismatch {
        constraint: usize,
        expected: usize,
        got: usize,
    },

    /// Variable index outside the solver's variable vector
    #[error("variable index {var} in mapping for constraint {constraint} out of range, solver has {num_vars} variables")]
    VariableOutOfRange {
        constraint: usize,
        var: usize,
        num_vars: usize,
    },

    /// Every variable must be reachable by at least one constraint, otherwise
    /// its bounds can never tighten and the search cannot terminate
    #[error("variable {var} is not mapped by any constraint")]
    VariableUnconstrained { var: usize },
}
