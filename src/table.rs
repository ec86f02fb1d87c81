//! Evaluation tables: the set of assignments on which a function is true.
//!
//! A [`Table`] is the only input of the minimization pipeline. It has a
//! declared arity and holds a set of rows of that arity; duplicates collapse
//! and iteration follows row order, so every run over the same table sees
//! the same sequence of rows.
//!
//! ```
//! use qmc_rs::table::Table;
//!
//! let table = Table::from_bits(vec![vec![0, 0], vec![0, 1], vec![1, 1]]).unwrap();
//! assert_eq!(table.arity(), 2);
//! assert_eq!(table.minterms().unwrap().collect::<Vec<_>>(), vec![0, 1, 3]);
//!
//! let same: Table = "00 01 11".parse().unwrap();
//! assert_eq!(table, same);
//! ```

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::{Malformed, QmcError, Result};
use crate::row::Row;

/// A set of ternary rows sharing one arity.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Table {
    arity: usize,
    rows: BTreeSet<Row>,
}

impl Table {
    /// Creates a table with a declared arity.
    ///
    /// Rows may contain don't-cares, so an already reduced set of implicants
    /// can be fed back into the pipeline. The table may be empty; the reducer
    /// rejects empty tables on entry.
    pub fn new(arity: usize, rows: impl IntoIterator<Item = Row>) -> Result<Self> {
        if arity == 0 {
            return Err(Malformed::ZeroArity.into());
        }
        let mut set = BTreeSet::new();
        for (i, row) in rows.into_iter().enumerate() {
            if row.arity() != arity {
                return Err(Malformed::ArityMismatch {
                    row: i,
                    expected: arity,
                    got: row.arity(),
                }
                .into());
            }
            set.insert(row);
        }
        Ok(Self { arity, rows: set })
    }

    /// Creates a table from truth-table bits.
    ///
    /// The first row's length is the arity; every other row must match it.
    pub fn from_bits<B: AsRef<[u8]>>(rows: impl IntoIterator<Item = B>) -> Result<Self> {
        let rows = rows
            .into_iter()
            .map(|bits| Row::from_bits(bits.as_ref()))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Self::from_rows(rows)
    }

    /// Creates a table from Boolean rows; the first row's length is the arity.
    pub fn from_bools<B: AsRef<[bool]>>(rows: impl IntoIterator<Item = B>) -> Result<Self> {
        let rows: Vec<Row> = rows
            .into_iter()
            .map(|bits| Row::from_bools(bits.as_ref()))
            .collect();
        Self::from_rows(rows)
    }

    /// Creates a table from assignment indices (binary counting, first
    /// variable most significant).
    pub fn from_minterms(arity: usize, minterms: impl IntoIterator<Item = usize>) -> Result<Self> {
        check_enumerable(arity)?;
        let rows = minterms
            .into_iter()
            .map(|index| {
                if index >> arity != 0 {
                    Err(QmcError::from(Malformed::MintermOutOfRange { index, arity }))
                } else {
                    Ok(Row::from_index(index, arity))
                }
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(arity, rows)
    }

    fn from_rows(rows: Vec<Row>) -> Result<Self> {
        let arity = rows
            .first()
            .map(Row::arity)
            .ok_or(QmcError::EmptyInput("evaluation table"))?;
        Self::new(arity, rows)
    }

    /// Number of variables.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Number of distinct rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn contains(&self, row: &Row) -> bool {
        self.rows.contains(row)
    }

    /// Rows in ascending order.
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }

    /// Indices of all assignments the table covers, in ascending order.
    ///
    /// Rows with don't-cares contribute every assignment they satisfy.
    /// Fails with [`Malformed::ArityTooLarge`] when assignments have no
    /// `usize` index.
    pub fn minterms(&self) -> Result<impl Iterator<Item = usize>> {
        check_enumerable(self.arity)?;
        let minterms: BTreeSet<usize> = self.rows.iter().flat_map(Row::assignments).collect();
        Ok(minterms.into_iter())
    }
}

/// Checks that every assignment over `arity` variables has a `usize` index.
pub(crate) fn check_enumerable(arity: usize) -> Result<()> {
    if arity == 0 {
        return Err(Malformed::ZeroArity.into());
    }
    if arity >= usize::BITS as usize {
        return Err(Malformed::ArityTooLarge(arity).into());
    }
    Ok(())
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", row)?;
        }
        Ok(())
    }
}

impl FromStr for Table {
    type Err = QmcError;

    /// Parses whitespace-separated rows such as `"110 100"`.
    ///
    /// Lines starting with `#` are comments.
    fn from_str(s: &str) -> Result<Self> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.starts_with('#'))
            .flat_map(str::split_whitespace)
            .map(|token| token.parse::<Row>().map_err(QmcError::from))
            .collect::<Result<Vec<_>>>()?;
        Self::from_rows(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use crate::types::Value;

    #[test]
    fn test_from_bits() {
        let table = Table::from_bits(vec![vec![1, 1], vec![1, 0], vec![1, 1]]).unwrap();
        assert_eq!(table.arity(), 2);
        assert_eq!(table.len(), 2);
        assert!(table.contains(&"10".parse().unwrap()));
    }

    #[test]
    fn test_from_bools() {
        let table = Table::from_bools([[true, false, true], [false, false, true]]).unwrap();
        assert_eq!(table.arity(), 3);
        assert_eq!(table.to_string(), "001\n101");
        assert_eq!(table.minterms().unwrap().collect::<Vec<_>>(), vec![1, 5]);

        let err = Table::from_bools(vec![vec![true], vec![true, false]]).unwrap_err();
        assert_eq!(
            err,
            QmcError::MalformedInput(Malformed::ArityMismatch {
                row: 1,
                expected: 1,
                got: 2
            })
        );
        assert_eq!(
            Table::from_bools(Vec::<Vec<bool>>::new()).unwrap_err(),
            QmcError::EmptyInput("evaluation table")
        );
    }

    #[test]
    fn test_arity_mismatch() {
        let err = Table::from_bits(vec![vec![1, 1], vec![1]]).unwrap_err();
        assert_eq!(
            err,
            QmcError::MalformedInput(Malformed::ArityMismatch {
                row: 1,
                expected: 2,
                got: 1
            })
        );
    }

    #[test]
    fn test_empty() {
        let err = Table::from_bits(Vec::<Vec<u8>>::new()).unwrap_err();
        assert_eq!(err, QmcError::EmptyInput("evaluation table"));

        let table = Table::new(3, []).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_zero_arity() {
        let err = Table::from_bits(vec![Vec::<u8>::new()]).unwrap_err();
        assert_eq!(err, QmcError::MalformedInput(Malformed::ZeroArity));
    }

    #[test]
    fn test_invalid_bit() {
        let err = Table::from_bits(vec![vec![1, 2]]).unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn test_from_minterms() {
        let table = Table::from_minterms(3, [0, 5, 7]).unwrap();
        let rows: Vec<String> = table.rows().map(|r| r.to_string()).collect();
        assert_eq!(rows, vec!["000", "101", "111"]);

        let err = Table::from_minterms(2, [4]).unwrap_err();
        assert_eq!(
            err,
            QmcError::MalformedInput(Malformed::MintermOutOfRange { index: 4, arity: 2 })
        );
    }

    #[test]
    fn test_minterms_expand_dont_cares() {
        let table: Table = "1- 01".parse().unwrap();
        assert_eq!(table.minterms().unwrap().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_minterms_arity_too_large() {
        let table = Table::new(70, [Row::new(vec![Value::One; 70])]).unwrap();
        assert_eq!(
            table.minterms().err(),
            Some(QmcError::MalformedInput(Malformed::ArityTooLarge(70)))
        );
    }

    #[test]
    fn test_parse() {
        let table: Table = "# comment\n110\n100 111\n".parse().unwrap();
        assert_eq!(table.arity(), 3);
        assert_eq!(table.len(), 3);
        assert_eq!(table.to_string(), "100\n110\n111");
        assert!("10 1x".parse::<Table>().unwrap_err().is_malformed());
    }
}
