//! # qmc-rs: Quine–McCluskey minimization in Rust
//!
//! **`qmc-rs`** computes a small sum-of-products form of a Boolean function
//! given by the set of assignments on which it is true.
//!
//! ## How it works
//!
//! The minimizer is a three-phase pipeline:
//!
//! 1. **Reduction** ([`reduce`]): rows differing in a single variable are merged
//!    repeatedly until a fixed point; rows that never merge are the *prime implicants*.
//! 2. **Chart** ([`chart`]): every prime implicant is checked against every
//!    assignment of the variables, giving the prime implicant chart.
//! 3. **Cover** ([`cover`]): essential implicants are taken first, the
//!    remaining assignments are covered greedily.
//!
//! The greedy step makes the result small but not necessarily minimum.
//! Ties are broken by row order, so the output is fully deterministic.
//!
//! ## Basic Usage
//!
//! ```rust
//! use qmc_rs::minimize::minimize;
//! use qmc_rs::table::Table;
//!
//! // f(x1, x2, x3) is true on 001, 011, 100, 101
//! let table = Table::from_minterms(3, [1, 3, 4, 5]).unwrap();
//!
//! let f = minimize(&table).unwrap();
//! assert_eq!(f.to_string(), "!x1 & x3 | x1 & !x2");
//!
//! // The consensus term !x2 & x3 is prime, but not needed.
//! assert_eq!(f.primes().len(), 3);
//! assert_eq!(f.implicants().len(), 2);
//! ```
//!
//! ## Rows
//!
//! Rows are written as strings over `0`, `1` and `-` (don't-care), with the
//! first character standing for the first variable. Assignment index `i`
//! denotes the binary expansion of `i`, first variable most significant.
//!
//! ## Core Components
//!
//! - **[`table`]**: evaluation tables, the input of the pipeline.
//! - **[`row`]** and **[`types`]**: ternary rows and values.
//! - **[`minimize`]**: the [`Minimizer`][crate::minimize::Minimizer] running all phases.
//! - **[`expr`]**: rendering of the result as a Boolean expression.
//! - **[`error`]**: the [`QmcError`][crate::error::QmcError] returned by every phase.

pub mod bitset;
pub mod chart;
pub mod cover;
pub mod error;
pub mod expr;
pub mod minimize;
pub mod reduce;
pub mod row;
pub mod table;
pub mod types;
