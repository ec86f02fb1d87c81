//! Selection of a cover from the prime implicant chart.
//!
//! The solver restricts the chart to the assignments present in the original
//! table, extracts essential implicants (unique satisfiers of some column),
//! and covers whatever is left greedily, always taking the implicant that
//! satisfies the most uncovered columns. Ties go to the smallest row.
//!
//! The result covers every assignment of the table but is not guaranteed to
//! be of minimum size: only the essential implicants are provably necessary.
//!
//! ```
//! use qmc_rs::chart::build_chart;
//! use qmc_rs::cover::solve_cover;
//! use qmc_rs::reduce::reduce;
//! use qmc_rs::table::Table;
//!
//! let table: Table = "00 01 11".parse().unwrap();
//! let chart = build_chart(&reduce(&table).unwrap()).unwrap();
//! let cover = solve_cover(&chart, &table).unwrap();
//! assert_eq!(cover.essential().len(), 2);
//! assert!(cover.greedy().is_empty());
//! ```

use std::collections::BTreeSet;

use log::debug;

use crate::bitset::BitSet;
use crate::chart::CoverageChart;
use crate::error::{Malformed, QmcError, Result};
use crate::row::Row;
use crate::table::Table;

/// Implicants selected by the cover solver.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Cover {
    essential: BTreeSet<Row>,
    greedy: Vec<Row>,
}

impl Cover {
    /// Implicants that were the unique satisfier of some assignment.
    pub fn essential(&self) -> &BTreeSet<Row> {
        &self.essential
    }

    /// Implicants picked by the greedy stage, in the order they were picked.
    pub fn greedy(&self) -> &[Row] {
        &self.greedy
    }

    /// Total number of selected implicants.
    pub fn len(&self) -> usize {
        self.essential.len() + self.greedy.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, row: &Row) -> bool {
        self.essential.contains(row) || self.greedy.contains(row)
    }

    /// All selected implicants.
    pub fn implicants(&self) -> BTreeSet<Row> {
        self.essential
            .iter()
            .chain(&self.greedy)
            .cloned()
            .collect()
    }
}

/// Selects the final implicant set covering every assignment of `table`.
pub fn select_cover(chart: &CoverageChart, table: &Table) -> Result<BTreeSet<Row>> {
    solve_cover(chart, table).map(|cover| cover.implicants())
}

/// Same as [`select_cover`], keeping track of how each implicant was chosen.
pub fn solve_cover(chart: &CoverageChart, table: &Table) -> Result<Cover> {
    if chart.arity() == 0 || chart.num_columns() == 0 {
        return Err(QmcError::DegenerateChart);
    }
    if table.arity() != chart.arity() {
        return Err(Malformed::ChartMismatch {
            chart: chart.arity(),
            table: table.arity(),
        }
        .into());
    }

    // Only the assignments of the table need to be covered.
    let mut live = BitSet::new(chart.num_columns());
    live.extend(table.minterms()?);
    if let Some(column) = live
        .iter()
        .find(|&column| chart.satisfiers(column).is_empty())
    {
        return Err(Malformed::Uncoverable(chart.assignment(column).to_string()).into());
    }
    let mut alive = BitSet::full(chart.num_implicants());
    debug!(
        "solve_cover: {} relevant columns out of {}",
        live.len(),
        chart.num_columns()
    );

    let mut cover = Cover::default();

    // Essential implicants.
    while let Some(k) = find_essential(chart, &live, &alive) {
        debug!("solve_cover: essential {}", chart.implicant(k));
        live.difference_with(chart.coverage(k));
        alive.remove(k);
        cover.essential.insert(chart.implicant(k).clone());
    }

    // Greedy residual cover.
    loop {
        alive.retain(|k| chart.coverage(k).intersection_count(&live) > 0);
        if live.is_empty() {
            break;
        }
        // Implicants are in row order, so the first maximum is the smallest row.
        let mut best: Option<(usize, usize)> = None;
        for k in alive.iter() {
            let count = chart.coverage(k).intersection_count(&live);
            if best.map_or(true, |(_, max)| count > max) {
                best = Some((k, count));
            }
        }
        let Some((k, count)) = best else {
            let column = live.iter().next().unwrap_or_default();
            return Err(Malformed::Uncoverable(chart.assignment(column).to_string()).into());
        };
        debug!(
            "solve_cover: greedy {} covering {} columns",
            chart.implicant(k),
            count
        );
        live.difference_with(chart.coverage(k));
        alive.remove(k);
        cover.greedy.push(chart.implicant(k).clone());
    }

    debug!(
        "solve_cover: {} essential + {} greedy",
        cover.essential.len(),
        cover.greedy.len()
    );
    Ok(cover)
}

/// Finds the first live column with exactly one alive satisfier.
fn find_essential(chart: &CoverageChart, live: &BitSet, alive: &BitSet) -> Option<usize> {
    live.iter().find_map(|column| {
        let mut satisfiers = alive.iter().filter(|&k| chart.satisfies(k, column));
        match (satisfiers.next(), satisfiers.next()) {
            (Some(k), None) => Some(k),
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use crate::chart::build_chart;

    fn rows(rows: &[&str]) -> BTreeSet<Row> {
        rows.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn test_single_essential() {
        let table: Table = "11 10".parse().unwrap();
        let chart = build_chart(&rows(&["1-"])).unwrap();
        let cover = solve_cover(&chart, &table).unwrap();
        assert_eq!(cover.essential(), &rows(&["1-"]));
        assert!(cover.greedy().is_empty());
        assert_eq!(select_cover(&chart, &table).unwrap(), rows(&["1-"]));
    }

    #[test]
    fn test_irrelevant_columns_ignored() {
        // "-1" also satisfies 11, which is not in the table.
        let table: Table = "00 01".parse().unwrap();
        let chart = build_chart(&rows(&["0-", "-1"])).unwrap();
        let cover = select_cover(&chart, &table).unwrap();
        assert_eq!(cover, rows(&["0-"]));
    }

    #[test]
    fn test_cyclic_core_uses_greedy() {
        // f = sum(0, 1, 2, 5, 6, 7): the classic cyclic chart, no essentials.
        let table = Table::from_minterms(3, [0, 1, 2, 5, 6, 7]).unwrap();
        let primes = rows(&["00-", "0-0", "-01", "-10", "1-1", "11-"]);
        let chart = build_chart(&primes).unwrap();
        let cover = solve_cover(&chart, &table).unwrap();
        assert!(cover.essential().is_empty());
        // All primes cover two columns; the smallest row wins the first tie.
        assert_eq!(cover.greedy()[0].to_string(), "00-");
        for column in table.minterms().unwrap() {
            assert!(cover
                .implicants()
                .iter()
                .any(|r| r.assignments().any(|a| a == column)));
        }
        // Deterministic.
        assert_eq!(solve_cover(&chart, &table).unwrap(), cover);
    }

    #[test]
    fn test_redundant_implicant_dropped() {
        // f = x1 x2' + x1' x3, whose consensus term x2' x3 is prime but redundant.
        let table = Table::from_minterms(3, [1, 3, 4, 5]).unwrap();
        let primes = rows(&["0-1", "10-", "-01"]);
        let chart = build_chart(&primes).unwrap();
        let cover = solve_cover(&chart, &table).unwrap();
        assert_eq!(cover.essential(), &rows(&["0-1", "10-"]));
        assert!(cover.greedy().is_empty());
        assert!(!cover.contains(&"-01".parse().unwrap()));
    }

    #[test]
    fn test_arity_mismatch() {
        let table: Table = "111".parse().unwrap();
        let chart = build_chart(&rows(&["1-"])).unwrap();
        assert_eq!(
            solve_cover(&chart, &table).unwrap_err(),
            QmcError::MalformedInput(Malformed::ChartMismatch { chart: 2, table: 3 })
        );
    }

    #[test]
    fn test_uncoverable() {
        let table: Table = "00".parse().unwrap();
        let chart = build_chart(&rows(&["1-"])).unwrap();
        assert_eq!(
            solve_cover(&chart, &table).unwrap_err(),
            QmcError::MalformedInput(Malformed::Uncoverable("00".to_string()))
        );
    }
}
