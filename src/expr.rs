//! Sum-of-products rendering of implicants and minimized functions.
//!
//! A literal position `1` renders as the variable, `0` as its negation `!x`,
//! and don't-cares are omitted. Terms are joined with ` & `, the disjunction
//! with ` | `. Variables default to `x1`, `x2`, ... (1-indexed).
//!
//! ```
//! use qmc_rs::minimize::minimize;
//! use qmc_rs::table::Table;
//!
//! let table: Table = "110 111 011".parse().unwrap();
//! let f = minimize(&table).unwrap();
//! assert_eq!(f.to_expression(), "x1 & x2 | x2 & x3");
//! assert_eq!(f.to_expression_with(&["a", "b", "c"]), "a & b | b & c");
//! ```

use std::fmt;

use crate::minimize::Minimized;
use crate::row::Row;

fn var_name<S: AsRef<str>>(names: &[S], index: usize) -> String {
    match names.get(index) {
        Some(name) => name.as_ref().to_string(),
        None => format!("x{}", index + 1),
    }
}

impl Row {
    /// Renders the row as a conjunction of literals.
    ///
    /// A row without literals is the constant `true`.
    pub fn to_term<S: AsRef<str>>(&self, names: &[S]) -> String {
        let literals: Vec<String> = self
            .literals()
            .map(|(i, positive)| {
                let name = var_name(names, i);
                if positive {
                    name
                } else {
                    format!("!{}", name)
                }
            })
            .collect();
        if literals.is_empty() {
            "true".to_string()
        } else {
            literals.join(" & ")
        }
    }
}

impl Minimized {
    /// Renders the minimized function with the default variable names.
    pub fn to_expression(&self) -> String {
        self.to_expression_with::<&str>(&[])
    }

    /// Renders the minimized function, naming variable `i` as `names[i]`.
    ///
    /// Variables beyond the end of `names` fall back to `x{i+1}`.
    pub fn to_expression_with<S: AsRef<str>>(&self, names: &[S]) -> String {
        let terms: Vec<String> = self
            .implicants()
            .iter()
            .map(|row| row.to_term(names))
            .collect();
        if terms.is_empty() {
            "false".to_string()
        } else {
            terms.join(" | ")
        }
    }
}

impl fmt::Display for Minimized {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_expression())
    }
}
