//! Ternary rows: truth-table assignments and implicants.
//!
//! A [`Row`] is a fixed-length sequence of [`Value`]s, one per variable.
//! Rows without don't-cares are full assignments (points of the Boolean
//! hypercube); rows with don't-cares are implicants covering every
//! assignment that agrees with them on the literal positions.
//!
//! Assignments are also addressed by index: index `i` is the assignment
//! obtained by writing `i` in binary over `arity` bits, most significant bit
//! on the first variable.
//!
//! # Example
//!
//! ```
//! use qmc_rs::row::Row;
//!
//! let a: Row = "110".parse().unwrap();
//! let b: Row = "100".parse().unwrap();
//! let m = a.merge(&b).unwrap();
//! assert_eq!(m.to_string(), "1-0");
//! assert_eq!(m.assignments().collect::<Vec<_>>(), vec![4, 6]);
//! ```

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use crate::error::Malformed;
use crate::types::Value;

/// An ordered, fixed-length sequence of ternary values.
///
/// Rows are ordered lexicographically by their values.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Row(Vec<Value>);

impl Row {
    pub fn new(values: Vec<Value>) -> Self {
        Row(values)
    }

    /// Builds an assignment from truth-table bits (`0` or `1`).
    pub fn from_bits(bits: &[u8]) -> Result<Self, Malformed> {
        bits.iter()
            .map(|&b| Value::try_from(b))
            .collect::<Result<Vec<_>, _>>()
            .map(Row)
    }

    pub fn from_bools(bits: &[bool]) -> Self {
        Row(bits.iter().map(|&b| Value::from(b)).collect())
    }

    /// Decodes the assignment with the given index.
    ///
    /// The caller must ensure `arity < usize::BITS`.
    pub fn from_index(index: usize, arity: usize) -> Self {
        Row((0..arity)
            .map(|pos| Value::from((index >> (arity - 1 - pos)) & 1 == 1))
            .collect())
    }

    /// Number of variables.
    pub fn arity(&self) -> usize {
        self.0.len()
    }

    pub fn values(&self) -> &[Value] {
        &self.0
    }

    /// Number of don't-care positions.
    pub fn dont_cares(&self) -> usize {
        self.0.iter().filter(|v| !v.is_literal()).count()
    }

    /// Returns `true` if the row has no don't-care positions.
    pub fn is_assignment(&self) -> bool {
        self.0.iter().all(|v| v.is_literal())
    }

    /// Literal positions as `(variable index, polarity)` pairs.
    pub fn literals(&self) -> impl Iterator<Item = (usize, bool)> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.as_bool().map(|b| (i, b)))
    }

    /// Merges two rows differing in exactly one position, where one has `0`
    /// and the other `1`. The result carries a don't-care at that position.
    ///
    /// Any other difference, including a don't-care against a literal,
    /// blocks the merge.
    pub fn merge(&self, other: &Row) -> Option<Row> {
        if self.arity() != other.arity() {
            return None;
        }
        let mut diff = None;
        for (k, (&a, &b)) in self.0.iter().zip(&other.0).enumerate() {
            if a == b {
                continue;
            }
            if diff.is_some() || !a.is_complement_of(b) {
                return None;
            }
            diff = Some(k);
        }
        let k = diff?;
        let mut values = self.0.clone();
        values[k] = Value::DontCare;
        Some(Row(values))
    }

    pub fn is_mergeable(&self, other: &Row) -> bool {
        self.merge(other).is_some()
    }

    /// Checks whether the assignment agrees with every literal position.
    ///
    /// Returns `false` when the lengths differ.
    pub fn satisfied_by(&self, assignment: &[bool]) -> bool {
        self.arity() == assignment.len()
            && self.0.iter().zip(assignment).all(|(v, &b)| v.accepts(b))
    }

    /// Bit masks `(care, value)` such that the assignment with index `i`
    /// satisfies this row iff `i & care == value`.
    ///
    /// The caller must ensure `arity < usize::BITS`.
    pub fn masks(&self) -> (usize, usize) {
        let n = self.arity();
        let mut care = 0;
        let mut value = 0;
        for (pos, v) in self.0.iter().enumerate() {
            let bit = 1usize << (n - 1 - pos);
            match v {
                Value::Zero => care |= bit,
                Value::One => {
                    care |= bit;
                    value |= bit;
                }
                Value::DontCare => {}
            }
        }
        (care, value)
    }

    /// Indices of all assignments satisfying this row, in ascending order.
    ///
    /// The caller must ensure `arity < usize::BITS`.
    pub fn assignments(&self) -> Assignments {
        let (care, value) = self.masks();
        let full = if self.arity() == 0 {
            0
        } else {
            usize::MAX >> (usize::BITS as usize - self.arity())
        };
        Assignments {
            free: full & !care,
            value,
            subset: 0,
            done: false,
        }
    }
}

/// Iterator over the assignment indices of a [`Row`].
///
/// Walks the subsets of the free-variable mask in increasing order.
pub struct Assignments {
    free: usize,
    value: usize,
    subset: usize,
    done: bool,
}

impl Iterator for Assignments {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = self.value | self.subset;
        if self.subset == self.free {
            self.done = true;
        } else {
            self.subset = self.subset.wrapping_sub(self.free) & self.free;
        }
        Some(current)
    }
}

impl Index<usize> for Row {
    type Output = Value;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl From<Vec<Value>> for Row {
    fn from(values: Vec<Value>) -> Self {
        Row(values)
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for v in &self.0 {
            write!(f, "{}", v)?;
        }
        Ok(())
    }
}

impl FromStr for Row {
    type Err = Malformed;

    /// Parses a row such as `"10-1"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .chars()
            .map(Value::from_char)
            .collect::<Result<Vec<_>, _>>()
            .map(Row)
    }
}
