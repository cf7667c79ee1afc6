//! Truth tables.
//!
//! A [`TruthTable`] is computed by driving [`Argument::set`] and
//! [`Argument::evaluate`] over every assignment, one row per assignment, in
//! the order of [`Assignments`].
//!
//! Its `Display` form is meant for consoles:
//!
//! ```text
//!  A | B |
//! ---|---|---
//!  T | T | T
//!  T | F | F
//!  F | T | T
//!  F | F | T
//! ```

use std::fmt;

use log::debug;

use crate::argument::Argument;
use crate::assignment::Assignments;
use crate::types::Var;

/// One row of a truth table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Input values, in the order of [`TruthTable::variables`]
    pub inputs: Vec<bool>,
    /// Value of the formula for these inputs
    pub output: bool,
}

#[derive(Debug, Clone)]
pub struct TruthTable {
    vars: Vec<Var>,
    rows: Vec<Row>,
}

impl TruthTable {
    /// Computes the truth table of `arg`.
    ///
    /// Leaves the argument's variables set to the values of the last row.
    pub fn new(arg: &mut Argument) -> Self {
        let vars = arg.variables().to_vec();
        let assignments = Assignments::new(&vars);
        debug!("truth table for {} with {} rows", arg, assignments.len());

        let mut rows = Vec::with_capacity(assignments.len());
        for assignment in assignments {
            let inputs: Vec<bool> = vars.iter().map(|&v| assignment.get(v)).collect();
            for (&var, &value) in vars.iter().zip(&inputs) {
                arg.set(var.name(), value);
            }
            let output = arg.evaluate();
            rows.push(Row { inputs, output });
        }

        TruthTable { vars, rows }
    }

    /// Column variables, in first-occurrence order.
    pub fn variables(&self) -> &[Var] {
        &self.vars
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Returns `true` if every row evaluates to `true`.
    pub fn is_valid(&self) -> bool {
        self.rows.iter().all(|row| row.output)
    }
}

fn tf(value: bool) -> char {
    if value {
        'T'
    } else {
        'F'
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for var in &self.vars {
            write!(f, "{} | ", var)?;
        }
        writeln!(f)?;
        for _ in &self.vars {
            write!(f, "---|")?;
        }
        writeln!(f, "---")?;
        for row in &self.rows {
            write!(f, " ")?;
            for &value in &row.inputs {
                write!(f, "{} | ", tf(value))?;
            }
            writeln!(f, "{}", tf(row.output))?;
        }
        Ok(())
    }
}
