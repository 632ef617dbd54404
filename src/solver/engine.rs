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

//! Constraint solver
//!
//! [`Solver`] enumerates every assignment of a variable vector that
//! satisfies all of its constraints at once. It keeps one low and one high
//! bound per variable and alternates two moves until the space is
//! exhausted:
//!
//! - **propagate**: round-robin over the constraints, shuttling each
//!   constraint's slice of the bounds through its cursor until a full round
//!   tightens nothing.
//! - **branch**: at such a fixpoint, either every variable is pinned and
//!   the assignment is emitted, or the highest-priority constraint with an
//!   unfixed variable splits the space. The left branch pins that variable
//!   to its lowest candidate; the saved bounds go on a stack so the right
//!   branch (everything strictly above) runs after backtracking.
//!
//! Constraint order is the caller's lever: earlier constraints are
//! preferred as splitters, so putting the most selective relations first
//! prunes the search hardest.

use crate::core::error::{Error, Result};
use crate::core::key::{greatest_key, least_key, Key};
use crate::core::Datum;

use super::constraint::Constraint;

/// A saved branching point
#[derive(Debug)]
struct Frame {
    los: Vec<Datum>,
    his: Vec<Datum>,
    /// Constraint whose split defines this branch
    splitter: usize,
}

#[derive(Debug, Clone, Copy)]
enum Op {
    Propagate,
    SplitLeft,
    SplitRight,
}

/// Enumerates all assignments satisfying every constraint
#[derive(Debug)]
pub struct Solver<'a, V> {
    constraints: Vec<Constraint<'a, V>>,
    /// `ixes[c][i]` is the global variable bound to key position `i` of
    /// constraint `c`
    ixes: Vec<Vec<usize>>,
    /// Per-variable bounds on the assignment under construction
    los: Vec<Datum>,
    his: Vec<Datum>,
    /// Per-constraint buffers the bounds are shuttled through
    scratch_los: Vec<Key>,
    scratch_his: Vec<Key>,
    /// Backtrack points, innermost last
    stack: Vec<Frame>,
    failed: bool,
    /// Round-robin position and fixpoint marker
    current: usize,
    last_changed: usize,
}

impl<'a, V> Solver<'a, V> {
    /// Build a solver over `num_vars` variables
    ///
    /// `ixes` supplies one variable mapping per constraint, covering each
    /// of its key positions in order. Every variable must appear in at
    /// least one mapping.
    pub fn new(
        num_vars: usize,
        constraints: Vec<Constraint<'a, V>>,
        ixes: Vec<Vec<usize>>,
    ) -> Result<Self> {
        if constraints.is_empty() {
            return Err(Error::NoConstraints);
        }
        if num_vars == 0 {
            return Err(Error::NoVariables);
        }
        if ixes.len() != constraints.len() {
            return Err(Error::MappingCountMismatch {
                constraints: constraints.len(),
                got: ixes.len(),
            });
        }
        let mut covered = vec![false; num_vars];
        for (c, (constraint, map)) in constraints.iter().zip(&ixes).enumerate() {
            if map.len() != constraint.key_len() {
                return Err(Error::MappingArityMismatch {
                    constraint: c,
                    expected: constraint.key_len(),
                    got: map.len(),
                });
            }
            for &var in map {
                if var >= num_vars {
                    return Err(Error::VariableOutOfRange {
                        constraint: c,
                        var,
                        num_vars,
                    });
                }
                covered[var] = true;
            }
        }
        if let Some(var) = covered.iter().position(|&seen| !seen) {
            return Err(Error::VariableUnconstrained { var });
        }

        let scratch_los = constraints.iter().map(|c| least_key(c.key_len())).collect();
        let scratch_his = constraints
            .iter()
            .map(|c| greatest_key(c.key_len()))
            .collect();
        Ok(Self {
            constraints,
            ixes,
            los: vec![Datum::Least; num_vars],
            his: vec![Datum::Greatest; num_vars],
            scratch_los,
            scratch_his,
            stack: Vec::new(),
            failed: false,
            current: 0,
            last_changed: 0,
        })
    }

    /// Number of variables in an assignment
    pub fn num_vars(&self) -> usize {
        self.los.len()
    }

    /// Restore the freshly constructed state
    pub fn reset(&mut self) {
        self.los.fill(Datum::Least);
        self.his.fill(Datum::Greatest);
        self.stack.clear();
        self.failed = false;
        self.current = 0;
        self.last_changed = 0;
        for constraint in &mut self.constraints {
            constraint.reset();
        }
    }

    /// Produce the next satisfying assignment
    ///
    /// Returns `None` once the search space is exhausted; further calls
    /// keep returning `None` until [`reset`](Solver::reset).
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<Vec<Datum>> {
        let n = self.constraints.len();
        loop {
            if self.failed {
                // unwind to the innermost open branch and take its right side
                let frame = self.stack.pop()?;
                self.los = frame.los;
                self.his = frame.his;
                self.failed = false;
                self.apply(frame.splitter, Op::SplitRight);
                self.current = 0;
                self.last_changed = 0;
                continue;
            }

            let changed = self.apply(self.current, Op::Propagate);
            if self.failed {
                continue;
            }
            if changed {
                self.last_changed = self.current;
                self.current = (self.current + 1) % n;
                continue;
            }
            self.current = (self.current + 1) % n;
            if self.current != self.last_changed {
                continue;
            }

            // a full round tightened nothing: solution or branch
            if self.los.iter().zip(&self.his).all(|(lo, hi)| lo == hi) {
                // fail on re-entry so the next call backtracks past this one
                self.failed = true;
                return Some(self.los.clone());
            }
            let splitter = (0..n)
                .find(|&c| self.ixes[c].iter().any(|&v| self.los[v] != self.his[v]))
                .expect("unfixed variable but every constraint fully bound");
            self.stack.push(Frame {
                los: self.los.clone(),
                his: self.his.clone(),
                splitter,
            });
            self.apply(splitter, Op::SplitLeft);
            self.current = 0;
            self.last_changed = 0;
        }
    }

    /// Iterator draining the remaining assignments
    pub fn solutions(&mut self) -> Solutions<'_, 'a, V> {
        Solutions { solver: self }
    }

    /// Run one constraint operation through the bounds protocol
    ///
    /// Gathers the constraint's slice of the global bounds, applies the
    /// operation, and folds the result back in. Returns whether any global
    /// bound moved; crossing bounds or a sentinel low/high mark the branch
    /// failed.
    fn apply(&mut self, c: usize, op: Op) -> bool {
        let map = &self.ixes[c];
        for (i, &var) in map.iter().enumerate() {
            self.scratch_los[c][i] = self.los[var].clone();
            self.scratch_his[c][i] = self.his[var].clone();
        }

        {
            let constraint = &mut self.constraints[c];
            let clos = &mut self.scratch_los[c];
            let chis = &mut self.scratch_his[c];
            match op {
                Op::Propagate => constraint.propagate(clos, chis),
                Op::SplitLeft => constraint.split_left(clos, chis),
                Op::SplitRight => constraint.split_right(clos, chis),
            }
        }

        let mut changed = false;
        for (i, &var) in self.ixes[c].iter().enumerate() {
            let lo = &self.scratch_los[c][i];
            let hi = &self.scratch_his[c][i];
            if *lo > self.los[var] {
                self.los[var] = lo.clone();
                changed = true;
            }
            if *hi < self.his[var] {
                self.his[var] = hi.clone();
                changed = true;
            }
        }
        for &var in &self.ixes[c] {
            if self.los[var] > self.his[var]
                || self.los[var] == Datum::Greatest
                || self.his[var] == Datum::Least
            {
                self.failed = true;
            }
        }
        changed
    }
}

/// Draining iterator over a solver's remaining assignments
pub struct Solutions<'s, 'a, V> {
    solver: &'s mut Solver<'a, V>,
}

impl<'s, 'a, V> Iterator for Solutions<'s, 'a, V> {
    type Item = Vec<Datum>;

    fn next(&mut self) -> Option<Self::Item> {
        self.solver.next()
    }
}
