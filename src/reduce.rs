//! Implicant reduction: the first phase of Quine–McCluskey.
//!
//! Starting from the rows of an evaluation table, every round merges all
//! pairs of rows that differ in a single `0`/`1` position into a row with a
//! don't-care there. Rows that merged with nobody are prime implicants; the
//! merged rows form the next round. The procedure stops when a round produces
//! no merged rows. Each round raises the number of don't-cares of the working
//! rows by one, so there are at most `arity + 1` rounds.
//!
//! ```
//! use qmc_rs::reduce::reduce;
//! use qmc_rs::table::Table;
//!
//! let table: Table = "00 01 11".parse().unwrap();
//! let primes: Vec<String> = reduce(&table).unwrap().iter().map(|r| r.to_string()).collect();
//! assert_eq!(primes, vec!["0-", "-1"]);
//! ```

use std::collections::BTreeSet;

use log::debug;
use rayon::prelude::*;

use crate::error::{QmcError, Result};
use crate::minimize::MinimizerConfig;
use crate::row::Row;
use crate::table::Table;

/// Computes the prime implicants of a table with the default configuration.
pub fn reduce(table: &Table) -> Result<BTreeSet<Row>> {
    reduce_with(table, &MinimizerConfig::default())
}

/// Computes the prime implicants of a table.
///
/// Pairwise comparison runs on the rayon thread pool for working tables of
/// at least `config.parallel_threshold` rows when `config.parallel` is set.
/// The result does not depend on the configuration.
pub fn reduce_with(table: &Table, config: &MinimizerConfig) -> Result<BTreeSet<Row>> {
    if table.is_empty() {
        return Err(QmcError::EmptyInput("evaluation table"));
    }

    let mut primes = BTreeSet::new();
    let mut working: Vec<Row> = table.rows().cloned().collect();
    let mut round = 0;

    while !working.is_empty() {
        round += 1;
        let parallel = config.parallel && working.len() >= config.parallel_threshold;
        let (merged, used) = if parallel {
            merge_round_parallel(&working)
        } else {
            merge_round(&working)
        };

        let before = primes.len();
        primes.extend(
            working
                .iter()
                .zip(&used)
                .filter(|&(_, &took_part)| !took_part)
                .map(|(row, _)| row.clone()),
        );
        debug!(
            "reduce: round {} (working = {}, merged = {}, primes = +{}, parallel = {})",
            round,
            working.len(),
            merged.len(),
            primes.len() - before,
            parallel
        );

        working = merged.into_iter().collect();
    }

    Ok(primes)
}

/// One round of pairwise merging.
///
/// Returns the set of merged rows and, per input row, whether it took part
/// in at least one merge.
fn merge_round(rows: &[Row]) -> (BTreeSet<Row>, Vec<bool>) {
    let mut merged = BTreeSet::new();
    let mut used = vec![false; rows.len()];
    for i in 0..rows.len() {
        for j in (i + 1)..rows.len() {
            if let Some(row) = rows[i].merge(&rows[j]) {
                merged.insert(row);
                used[i] = true;
                used[j] = true;
            }
        }
    }
    (merged, used)
}

/// Parallel version of [`merge_round`].
///
/// Each pair is checked independently; the results are folded into a set
/// only after all pairs are done.
fn merge_round_parallel(rows: &[Row]) -> (BTreeSet<Row>, Vec<bool>) {
    let merges: Vec<(usize, usize, Row)> = (0..rows.len())
        .into_par_iter()
        .flat_map_iter(|i| {
            ((i + 1)..rows.len())
                .filter_map(move |j| rows[i].merge(&rows[j]).map(|row| (i, j, row)))
        })
        .collect();

    let mut merged = BTreeSet::new();
    let mut used = vec![false; rows.len()];
    for (i, j, row) in merges {
        merged.insert(row);
        used[i] = true;
        used[j] = true;
    }
    (merged, used)
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    fn rows(rows: &[&str]) -> BTreeSet<Row> {
        rows.iter().map(|s| s.parse().unwrap()).collect()
    }

    fn table(s: &str) -> Table {
        s.parse().unwrap()
    }

    #[test]
    fn test_single_merge() {
        assert_eq!(reduce(&table("11 10")).unwrap(), rows(&["1-"]));
    }

    #[test]
    fn test_overlapping_merges() {
        assert_eq!(reduce(&table("00 01 11")).unwrap(), rows(&["0-", "-1"]));
    }

    #[test]
    fn test_single_row() {
        assert_eq!(reduce(&table("101")).unwrap(), rows(&["101"]));
    }

    #[test]
    fn test_no_merges() {
        assert_eq!(reduce(&table("00 11")).unwrap(), rows(&["00", "11"]));
    }

    #[test]
    fn test_tautology() {
        let t = Table::from_minterms(3, 0..8).unwrap();
        assert_eq!(reduce(&t).unwrap(), rows(&["---"]));
    }

    #[test]
    fn test_duplicate_merges_collapse() {
        // 00+01, 10+11 -> 0-, 1- and 00+10, 01+11 -> -0, -1; both give "--".
        assert_eq!(reduce(&table("00 01 10 11")).unwrap(), rows(&["--"]));
    }

    #[test]
    fn test_mixed_generations() {
        // sum(0, 1, 2, 5, 6, 7) has six two-literal primes.
        let t = Table::from_minterms(3, [0, 1, 2, 5, 6, 7]).unwrap();
        assert_eq!(
            reduce(&t).unwrap(),
            rows(&["00-", "0-0", "-01", "-10", "1-1", "11-"])
        );
    }

    #[test]
    fn test_idempotent() {
        let t = Table::from_minterms(4, [0, 1, 2, 5, 6, 7, 8, 9, 10, 14]).unwrap();
        let primes = reduce(&t).unwrap();
        let again = reduce(&Table::new(4, primes.clone()).unwrap()).unwrap();
        assert_eq!(again, primes);
    }

    #[test]
    fn test_empty_table() {
        let t = Table::new(2, []).unwrap();
        assert_eq!(
            reduce(&t).unwrap_err(),
            QmcError::EmptyInput("evaluation table")
        );
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let t = Table::from_minterms(6, (0..64).filter(|i| i % 3 != 0 || i % 7 == 0)).unwrap();
        let sequential = MinimizerConfig {
            parallel: false,
            ..MinimizerConfig::default()
        };
        let parallel = MinimizerConfig {
            parallel: true,
            parallel_threshold: 0,
        };
        assert_eq!(
            reduce_with(&t, &sequential).unwrap(),
            reduce_with(&t, &parallel).unwrap()
        );
    }

    #[test]
    fn test_arity_preserved() {
        let t = Table::from_minterms(5, [1, 3, 7, 15, 31, 30, 28, 24, 16]).unwrap();
        for prime in reduce(&t).unwrap() {
            assert_eq!(prime.arity(), 5);
        }
    }
}
