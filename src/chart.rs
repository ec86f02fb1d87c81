//! Prime implicant coverage chart.
//!
//! The chart has one row per prime implicant and one column per assignment
//! of the function's variables. Columns follow binary counting with the first
//! variable most significant, so column `i` always denotes the assignment
//! [`Row::from_index(i, arity)`][Row::from_index] for every implicant.
//!
//! The chart is immutable once built; the cover solver works on masks over
//! its columns and implicants.
//!
//! ```
//! use std::collections::BTreeSet;
//! use qmc_rs::chart::build_chart;
//! use qmc_rs::row::Row;
//!
//! let primes: BTreeSet<Row> = ["0-", "-1"].iter().map(|s| s.parse().unwrap()).collect();
//! let chart = build_chart(&primes).unwrap();
//! assert_eq!(chart.num_columns(), 4);
//! assert_eq!(chart.satisfiers(1), vec![0, 1]); // 01 is covered by both
//! assert_eq!(chart.to_string(), "0- XX..\n-1 .X.X");
//! ```

use std::collections::BTreeSet;
use std::fmt;

use log::debug;

use crate::bitset::BitSet;
use crate::error::{Malformed, QmcError, Result};
use crate::row::Row;
use crate::table::check_enumerable;

/// Satisfaction of every assignment by every prime implicant.
#[derive(Debug, Clone)]
pub struct CoverageChart {
    arity: usize,
    /// Prime implicants in ascending row order.
    implicants: Vec<Row>,
    /// `coverage[k]` holds the columns satisfied by `implicants[k]`.
    coverage: Vec<BitSet>,
}

/// Builds the coverage chart of a set of prime implicants.
pub fn build_chart(primes: &BTreeSet<Row>) -> Result<CoverageChart> {
    let first = primes
        .first()
        .ok_or(QmcError::EmptyInput("prime implicant set"))?;
    let arity = first.arity();
    if arity == 0 {
        return Err(QmcError::DegenerateChart);
    }
    check_enumerable(arity)?;
    let num_columns = 1usize << arity;

    let mut implicants = Vec::with_capacity(primes.len());
    let mut coverage = Vec::with_capacity(primes.len());
    for (k, prime) in primes.iter().enumerate() {
        if prime.arity() != arity {
            return Err(Malformed::ArityMismatch {
                row: k,
                expected: arity,
                got: prime.arity(),
            }
            .into());
        }
        let (care, value) = prime.masks();
        let mut columns = BitSet::new(num_columns);
        for column in 0..num_columns {
            if column & care == value {
                columns.insert(column);
            }
        }
        implicants.push(prime.clone());
        coverage.push(columns);
    }

    debug!(
        "build_chart: {} implicants x {} columns",
        implicants.len(),
        num_columns
    );
    Ok(CoverageChart {
        arity,
        implicants,
        coverage,
    })
}

impl CoverageChart {
    /// Number of variables.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Number of assignment columns, `2^arity`.
    pub fn num_columns(&self) -> usize {
        self.coverage.first().map_or(0, BitSet::width)
    }

    pub fn num_implicants(&self) -> usize {
        self.implicants.len()
    }

    pub fn implicants(&self) -> &[Row] {
        &self.implicants
    }

    pub fn implicant(&self, k: usize) -> &Row {
        &self.implicants[k]
    }

    /// Columns satisfied by the `k`-th implicant.
    pub fn coverage(&self, k: usize) -> &BitSet {
        &self.coverage[k]
    }

    /// Checks whether the `k`-th implicant satisfies the given column.
    pub fn satisfies(&self, k: usize, column: usize) -> bool {
        self.coverage[k].contains(column)
    }

    /// Indices of the implicants satisfying the given column.
    pub fn satisfiers(&self, column: usize) -> Vec<usize> {
        (0..self.implicants.len())
            .filter(|&k| self.satisfies(k, column))
            .collect()
    }

    /// The assignment denoted by a column.
    pub fn assignment(&self, column: usize) -> Row {
        Row::from_index(column, self.arity)
    }
}

impl fmt::Display for CoverageChart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (k, implicant) in self.implicants.iter().enumerate() {
            if k > 0 {
                writeln!(f)?;
            }
            write!(f, "{} ", implicant)?;
            for column in 0..self.num_columns() {
                let mark = if self.satisfies(k, column) { 'X' } else { '.' };
                write!(f, "{}", mark)?;
            }
        }
        Ok(())
    }
}
