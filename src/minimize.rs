//! The complete minimization pipeline.
//!
//! [`Minimizer`] chains the three phases:
//!
//! ```text
//! Table -> reduce -> primes -> build_chart -> chart -> solve_cover -> Minimized
//! ```
//!
//! Each phase checks its own preconditions; the first failure aborts the run
//! and no partial result is returned.
//!
//! # Example
//!
//! ```
//! use qmc_rs::minimize::minimize;
//! use qmc_rs::table::Table;
//!
//! let table = Table::from_bits(vec![vec![0, 0], vec![0, 1], vec![1, 1]]).unwrap();
//! let f = minimize(&table).unwrap();
//! assert_eq!(f.to_string(), "!x1 | x2");
//! assert!(f.evaluate(&[false, false]));
//! assert!(!f.evaluate(&[true, false]));
//! ```

use std::collections::BTreeSet;

use log::{debug, info};

use crate::chart::build_chart;
use crate::cover::{solve_cover, Cover};
use crate::error::Result;
use crate::reduce::reduce_with;
use crate::row::Row;
use crate::table::Table;

/// Tuning knobs of the pipeline. None of them change the result.
#[derive(Debug, Clone)]
pub struct MinimizerConfig {
    /// Allow the reducer to compare row pairs on the rayon thread pool (default: true)
    pub parallel: bool,
    /// Smallest working table handled in parallel (default: 64)
    pub parallel_threshold: usize,
}

impl Default for MinimizerConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            parallel_threshold: 64,
        }
    }
}

/// Runs the minimization pipeline with a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct Minimizer {
    config: MinimizerConfig,
}

impl Minimizer {
    pub fn new(config: MinimizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MinimizerConfig {
        &self.config
    }

    /// Minimizes the function that is true exactly on the table's assignments.
    pub fn minimize(&self, table: &Table) -> Result<Minimized> {
        info!(
            "minimize: {} rows over {} variables",
            table.len(),
            table.arity()
        );

        let primes = reduce_with(table, &self.config)?;
        debug!("minimize: {} prime implicants", primes.len());

        let chart = build_chart(&primes)?;
        let cover = solve_cover(&chart, table)?;

        info!(
            "minimize: {} implicants selected ({} essential)",
            cover.len(),
            cover.essential().len()
        );
        Ok(Minimized {
            arity: table.arity(),
            primes,
            cover,
        })
    }
}

/// Minimizes a table with the default configuration.
pub fn minimize(table: &Table) -> Result<Minimized> {
    Minimizer::default().minimize(table)
}

/// Result of one minimization run: a sum of implicants.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Minimized {
    arity: usize,
    primes: BTreeSet<Row>,
    cover: Cover,
}

impl Minimized {
    /// Number of variables.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// All prime implicants of the function.
    pub fn primes(&self) -> &BTreeSet<Row> {
        &self.primes
    }

    /// The selected implicants; their disjunction is the minimized function.
    pub fn implicants(&self) -> BTreeSet<Row> {
        self.cover.implicants()
    }

    /// Essential prime implicants.
    pub fn essential(&self) -> &BTreeSet<Row> {
        self.cover.essential()
    }

    pub fn cover(&self) -> &Cover {
        &self.cover
    }

    /// Evaluates the minimized function on a full assignment.
    ///
    /// Returns `false` if the assignment length differs from the arity.
    pub fn evaluate(&self, assignment: &[bool]) -> bool {
        self.cover.essential().iter().any(|r| r.satisfied_by(assignment))
            || self.cover.greedy().iter().any(|r| r.satisfied_by(assignment))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use crate::error::QmcError;

    fn rows(rows: &[&str]) -> BTreeSet<Row> {
        rows.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn test_minimize_pipeline() {
        let table: Table = "11 10".parse().unwrap();
        let f = minimize(&table).unwrap();
        assert_eq!(f.arity(), 2);
        assert_eq!(f.primes(), &rows(&["1-"]));
        assert_eq!(f.implicants(), rows(&["1-"]));
        assert_eq!(f.essential(), &rows(&["1-"]));
    }

    #[test]
    fn test_evaluate() {
        let table = Table::from_minterms(3, [1, 3, 4, 5]).unwrap();
        let f = minimize(&table).unwrap();
        for index in 0..8 {
            let bits: Vec<bool> = (0..3).map(|pos| (index >> (2 - pos)) & 1 == 1).collect();
            assert_eq!(f.evaluate(&bits), [1, 3, 4, 5].contains(&index));
        }
        assert!(!f.evaluate(&[true]));
    }

    #[test]
    fn test_sequential_config() {
        let minimizer = Minimizer::new(MinimizerConfig {
            parallel: false,
            ..Default::default()
        });
        assert!(!minimizer.config().parallel);
        let table = Table::from_minterms(4, [0, 2, 5, 7, 8, 10, 13, 15]).unwrap();
        let f = minimizer.minimize(&table).unwrap();
        assert_eq!(f.implicants(), rows(&["-0-0", "-1-1"]));
        assert_eq!(f, minimize(&table).unwrap());
    }

    #[test]
    fn test_empty_table() {
        let table = Table::new(3, []).unwrap();
        assert_eq!(
            minimize(&table).unwrap_err(),
            QmcError::EmptyInput("evaluation table")
        );
    }
}
