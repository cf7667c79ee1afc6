//! Variable assignments and their exhaustive enumeration.
//!
//! An [`Assignment`] maps every propositional variable to a boolean value.
//! Since there are only 26 variables, it is stored as a single bitset, so it is
//! `Copy` and cheap to pass around during enumeration.
//!
//! [`Assignments`] walks all `2^n` assignments over an ordered list of
//! variables, which is the engine behind validity checking and truth tables.
//!
//! # Example
//!
//! ```
//! use tautology_rs::assignment::Assignments;
//! use tautology_rs::types::Var;
//!
//! let vars = [Var::new('A'), Var::new('B')];
//! let rows: Vec<_> = Assignments::new(&vars)
//!     .map(|a| (a.get(vars[0]), a.get(vars[1])))
//!     .collect();
//! assert_eq!(rows, vec![(true, true), (true, false), (false, true), (false, false)]);
//! ```

use std::fmt;

use crate::types::{Var, NUM_VARS};

/// A mapping from variables to boolean values.
///
/// Variables that were never assigned read as `false`.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Assignment {
    bits: u32,
}

impl Assignment {
    /// Creates an assignment with every variable set to `false`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value assigned to `var`.
    pub fn get(&self, var: Var) -> bool {
        self.bits & (1 << var.index()) != 0
    }

    /// Assigns `value` to `var`.
    pub fn set(&mut self, var: Var, value: bool) {
        if value {
            self.bits |= 1 << var.index();
        } else {
            self.bits &= !(1 << var.index());
        }
    }

    /// Returns a copy of this assignment with `var` set to `value`.
    pub fn with(mut self, var: Var, value: bool) -> Self {
        self.set(var, value);
        self
    }

    /// Returns the variables currently assigned `true`, alphabetically.
    pub fn true_vars(&self) -> impl Iterator<Item = Var> + '_ {
        (0..NUM_VARS)
            .filter_map(Var::from_index)
            .filter(move |&v| self.get(v))
    }
}

impl FromIterator<(Var, bool)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (Var, bool)>>(iter: I) -> Self {
        let mut assignment = Assignment::new();
        for (var, value) in iter {
            assignment.set(var, value);
        }
        assignment
    }
}

/// Renders the assignment as `{A, C}`: the set of variables assigned `true`.
impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, var) in self.true_vars().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", var)?;
        }
        write!(f, "}}")
    }
}

/// An iterator over all `2^n` assignments to an ordered list of variables.
///
/// Row `k` gives the `j`-th variable the value `true` iff bit `n-1-j` of `k`
/// is clear. The first row is therefore all-true and the last all-false, with
/// the first variable changing slowest. Every assignment is produced exactly
/// once. With no variables, a single empty assignment is produced.
///
/// Only the listed variables are touched; all others stay `false`.
#[derive(Debug, Clone)]
pub struct Assignments<'a> {
    vars: &'a [Var],
    /// Index of the next row to produce
    next: u64,
    /// Total number of rows, `2^n`
    total: u64,
}

impl<'a> Assignments<'a> {
    /// Creates a new enumerator over the given variables.
    ///
    /// # Panics
    ///
    /// Panics if more than [`NUM_VARS`] variables are given.
    pub fn new(vars: &'a [Var]) -> Self {
        assert!(vars.len() <= NUM_VARS, "At most {} variables can be enumerated", NUM_VARS);
        Assignments {
            vars,
            next: 0,
            total: 1 << vars.len(),
        }
    }

    fn row(&self, k: u64) -> Assignment {
        let n = self.vars.len();
        self.vars
            .iter()
            .enumerate()
            .map(|(j, &var)| (var, (k >> (n - 1 - j)) & 1 == 0))
            .collect()
    }
}

impl Iterator for Assignments<'_> {
    type Item = Assignment;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.total {
            return None;
        }
        let assignment = self.row(self.next);
        self.next += 1;
        Some(assignment)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.total - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Assignments<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashSet;

    use test_log::test;

    fn vars(names: &str) -> Vec<Var> {
        names.chars().map(Var::new).collect()
    }

    #[test]
    fn test_assignment_default_false() {
        let a = Assignment::new();
        for i in 0..NUM_VARS {
            assert!(!a.get(Var::from_index(i).unwrap()));
        }
    }

    #[test]
    fn test_assignment_set_get() {
        let x = Var::new('X');
        let y = Var::new('Y');
        let mut a = Assignment::new();
        a.set(x, true);
        assert!(a.get(x));
        assert!(!a.get(y));
        a.set(x, false);
        assert!(!a.get(x));
        assert_eq!(a.with(y, true).true_vars().collect::<Vec<_>>(), vec![y]);
    }

    #[test]
    fn test_assignment_display() {
        let a: Assignment = [(Var::new('C'), true), (Var::new('A'), true), (Var::new('B'), false)]
            .into_iter()
            .collect();
        assert_eq!(a.to_string(), "{A, C}");
        assert_eq!(Assignment::new().to_string(), "{}");
    }

    #[test]
    fn test_enumerate_zero_vars() {
        let all: Vec<_> = Assignments::new(&[]).collect();
        assert_eq!(all, vec![Assignment::new()]);
    }

    #[test]
    fn test_enumerate_row_order() {
        let vs = vars("AB");
        let rows: Vec<(bool, bool)> = Assignments::new(&vs).map(|a| (a.get(vs[0]), a.get(vs[1]))).collect();
        assert_eq!(
            rows,
            vec![(true, true), (true, false), (false, true), (false, false)]
        );
    }

    #[test]
    fn test_enumerate_exhaustive_and_distinct() {
        let vs = vars("QWERT");
        let iter = Assignments::new(&vs);
        assert_eq!(iter.len(), 32);
        let all: HashSet<Assignment> = iter.collect();
        assert_eq!(all.len(), 32);
    }

    #[test]
    fn test_enumerate_leaves_other_vars_false() {
        let vs = vars("B");
        for a in Assignments::new(&vs) {
            assert!(!a.get(Var::new('A')));
            assert!(!a.get(Var::new('C')));
        }
    }

    #[test]
    fn test_enumerate_size_hint_shrinks() {
        let vs = vars("AB");
        let mut iter = Assignments::new(&vs);
        assert_eq!(iter.len(), 4);
        iter.next();
        assert_eq!(iter.len(), 3);
    }
}
