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

//! Scalar key elements
//!
//! A [`Datum`] is one element of a composite key: a boolean, a number, or a
//! string, plus the two bound sentinels `Least` and `Greatest`. The total
//! order places booleans below numbers below strings, with the sentinels at
//! the edges; within a kind the natural order applies.
//!
//! Sentinels exist so that range bounds can be expressed in-band. Stored
//! keys never contain them.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// A single element of a composite key
///
/// `Text` uses `Arc<str>` for cheap cloning; key elements are copied into
/// bound buffers constantly during solving.
#[derive(Debug, Clone)]
pub enum Datum {
    /// Sentinel ordered below every other element
    Least,
    /// Boolean value
    Boolean(bool),
    /// 64-bit floating point number
    Number(f64),
    /// UTF-8 text
    Text(Arc<str>),
    /// Sentinel ordered above every other element
    Greatest,
}

impl Datum {
    /// Create a boolean element
    pub fn boolean(value: bool) -> Self {
        Datum::Boolean(value)
    }

    /// Create a numeric element
    pub fn number(value: f64) -> Self {
        Datum::Number(value)
    }

    /// Create a text element
    pub fn text(value: impl Into<String>) -> Self {
        Datum::Text(Arc::from(value.into().as_str()))
    }

    /// Create a text element from `Arc<str>` without copying
    pub fn text_arc(value: Arc<str>) -> Self {
        Datum::Text(value)
    }

    /// Returns true for the `Least` and `Greatest` bound sentinels
    pub fn is_sentinel(&self) -> bool {
        matches!(self, Datum::Least | Datum::Greatest)
    }

    /// Rank of the element's kind in the cross-kind order
    fn kind_rank(&self) -> u8 {
        match self {
            Datum::Least => 0,
            Datum::Boolean(_) => 1,
            Datum::Number(_) => 2,
            Datum::Text(_) => 3,
            Datum::Greatest => 4,
        }
    }
}

/// Total ordering over elements
///
/// Same-kind elements compare naturally; numbers use `total_cmp` so the
/// order is total even in the presence of NaN. Different kinds compare by
/// kind rank, which also handles the sentinels: `Least` is alone in the
/// lowest rank and `Greatest` alone in the highest, so each equals itself
/// and bounds everything else.
impl Ord for Datum {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Datum::Boolean(a), Datum::Boolean(b)) => a.cmp(b),
            (Datum::Number(a), Datum::Number(b)) => a.total_cmp(b),
            (Datum::Text(a), Datum::Text(b)) => {
                // identical allocation, skip the byte walk
                if Arc::ptr_eq(a, b) {
                    Ordering::Equal
                } else {
                    a.as_ref().cmp(b.as_ref())
                }
            }
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }
}

impl PartialOrd for Datum {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Equality must agree with Ord, so it is defined through it. Deriving
// PartialEq would disagree with total_cmp on -0.0 vs 0.0 and corrupt
// node key order.
impl PartialEq for Datum {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Datum {}

impl fmt::Display for Datum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Datum::Least => write!(f, "<least>"),
            Datum::Boolean(b) => write!(f, "{}", b),
            Datum::Number(n) => write!(f, "{}", n),
            Datum::Text(s) => write!(f, "{:?}", s.as_ref()),
            Datum::Greatest => write!(f, "<greatest>"),
        }
    }
}

// =========================================================================
// From implementations for convenient construction
// =========================================================================

impl From<bool> for Datum {
    fn from(v: bool) -> Self {
        Datum::Boolean(v)
    }
}

impl From<f64> for Datum {
    fn from(v: f64) -> Self {
        Datum::Number(v)
    }
}

impl From<i64> for Datum {
    fn from(v: i64) -> Self {
        Datum::Number(v as f64)
    }
}

impl From<i32> for Datum {
    fn from(v: i32) -> Self {
        Datum::Number(v as f64)
    }
}

impl From<&str> for Datum {
    fn from(v: &str) -> Self {
        Datum::Text(Arc::from(v))
    }
}

impl From<String> for Datum {
    fn from(v: String) -> Self {
        Datum::Text(Arc::from(v.as_str()))
    }
}

impl From<Arc<str>> for Datum {
    fn from(v: Arc<str>) -> Self {
        Datum::Text(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_order() {
        let samples = [
            Datum::Least,
            Datum::boolean(false),
            Datum::boolean(true),
            Datum::number(-10.0),
            Datum::number(3.5),
            Datum::text("a"),
            Datum::text("b"),
            Datum::Greatest,
        ];
        for (i, a) in samples.iter().enumerate() {
            for (j, b) in samples.iter().enumerate() {
                assert_eq!(a.cmp(b), i.cmp(&j), "{} vs {}", a, b);
            }
        }
    }

    #[test]
    fn test_sentinels_equal_themselves() {
        assert_eq!(Datum::Least, Datum::Least);
        assert_eq!(Datum::Greatest, Datum::Greatest);
        assert!(Datum::Least < Datum::Greatest);
        assert!(Datum::Least < Datum::boolean(false));
        assert!(Datum::text("zzz") < Datum::Greatest);
    }

    #[test]
    fn test_equality_agrees_with_ordering() {
        let a = Datum::number(2.0);
        let b = Datum::from(2i64);
        assert_eq!(a, b);
        assert!(a <= b && a >= b && !(a < b) && !(a > b));

        let c = Datum::text("x");
        let d = Datum::text("y");
        assert_ne!(c, d);
        assert!(c < d && !(d < c));
    }

    #[test]
    fn test_nan_is_ordered() {
        let nan = Datum::number(f64::NAN);
        assert_eq!(nan, Datum::number(f64::NAN));
        assert!(Datum::number(f64::INFINITY) < nan);
        assert!(nan < Datum::text(""));
    }

    #[test]
    fn test_shared_text_compares_equal() {
        let shared: Arc<str> = Arc::from("hello");
        let a = Datum::text_arc(shared.clone());
        let b = Datum::text_arc(shared);
        assert_eq!(a, b);
        assert_eq!(a, Datum::text("hello"));
    }

    #[test]
    fn test_is_sentinel() {
        assert!(Datum::Least.is_sentinel());
        assert!(Datum::Greatest.is_sentinel());
        assert!(!Datum::number(0.0).is_sentinel());
        assert!(!Datum::boolean(false).is_sentinel());
    }
}
