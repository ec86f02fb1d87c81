//! Error types for the minimization pipeline.
//!
//! Every failure is detected eagerly at the entry of a pipeline stage and
//! aborts the whole run. There are three families:
//!
//! - [`QmcError::MalformedInput`] — rows whose length differs from the arity,
//!   unparsable row text, out-of-range minterms, or a chart that does not
//!   belong to the table it is solved against.
//! - [`QmcError::EmptyInput`] — nothing to reduce or nothing to chart.
//! - [`QmcError::DegenerateChart`] — a chart without assignment columns.

use thiserror::Error;

/// Errors that can occur while minimizing a Boolean function.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QmcError {
    /// The input violates the shape contract of the stage it was passed to.
    #[error("malformed input: {0}")]
    MalformedInput(#[from] Malformed),

    /// An empty table or an empty prime implicant set.
    #[error("empty input: {0}")]
    EmptyInput(&'static str),

    /// A coverage chart over zero variables.
    #[error("degenerate chart: no assignment columns")]
    DegenerateChart,
}

/// Details of a [`QmcError::MalformedInput`] failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Malformed {
    /// A row whose length differs from the arity of its table.
    #[error("row {row} has length {got}, expected arity {expected}")]
    ArityMismatch { row: usize, expected: usize, got: usize },

    /// A coverage chart solved against a table of another arity.
    #[error("chart has arity {chart}, table has arity {table}")]
    ChartMismatch { chart: usize, table: usize },

    /// A table declared over zero variables.
    #[error("arity must be at least 1")]
    ZeroArity,

    /// Too many variables to index every assignment.
    #[error("arity {0} is too large to enumerate all assignments")]
    ArityTooLarge(usize),

    /// A value that is not one of `0`, `1`, `-`.
    #[error("invalid value {0:?}")]
    InvalidValue(String),

    /// A minterm index outside `0..2^arity`.
    #[error("minterm {index} is out of range for arity {arity}")]
    MintermOutOfRange { index: usize, arity: usize },

    /// A table assignment that no implicant of the chart satisfies.
    #[error("assignment {0} is not satisfied by any implicant")]
    Uncoverable(String),
}

impl QmcError {
    /// Returns `true` for errors of the [`QmcError::MalformedInput`] family.
    pub fn is_malformed(&self) -> bool {
        matches!(self, QmcError::MalformedInput(_))
    }
}

pub type Result<T> = std::result::Result<T, QmcError>;
