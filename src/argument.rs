//! Arguments: parsed formulas with validity checking.
//!
//! An [`Argument`] owns an expression tree together with its ordered variable
//! list. Validity is decided by brute force: the formula is evaluated under
//! every one of the `2^n` assignments to its `n` variables.
//!
//! # Example
//!
//! ```
//! use tautology_rs::argument::Argument;
//!
//! // Contrapositive law
//! let arg = Argument::parse("(A>B)=(~B>~A)").unwrap();
//! assert!(arg.is_tautology());
//!
//! // Affirming the consequent is not valid
//! let arg = Argument::parse("((A>B)&B)>A").unwrap();
//! assert!(!arg.is_tautology());
//! let cex = arg.counterexample().unwrap();
//! assert_eq!(cex.to_string(), "{B}");
//! ```

use std::fmt;
use std::str::FromStr;

use log::{debug, trace};

use crate::assignment::{Assignment, Assignments};
use crate::expr::Expr;
use crate::parser::{parse_formula, ParseError};
use crate::types::Var;

/// Parses `formula` into an [`Argument`].
pub fn parse(formula: &str) -> Result<Argument, ParseError> {
    Argument::parse(formula)
}

/// A parsed formula paired with its variables.
///
/// The tree structure never changes after parsing. Only the leaf values do,
/// through [`Argument::set`].
#[derive(Debug, Clone)]
pub struct Argument {
    tree: Expr,
    /// Distinct variables in first-occurrence order
    vars: Vec<Var>,
}

impl Argument {
    /// Parses `formula` into an argument.
    pub fn parse(formula: &str) -> Result<Self, ParseError> {
        let (tree, vars) = parse_formula(formula)?;
        Ok(Argument { tree, vars })
    }

    /// Creates an argument from an already built tree.
    ///
    /// The variable list is taken from the tree in first-occurrence order.
    pub fn from_expr(tree: Expr) -> Self {
        let vars = tree.variables();
        Argument { tree, vars }
    }

    /// Returns the expression tree.
    pub fn tree(&self) -> &Expr {
        &self.tree
    }

    /// Returns the distinct variables in the order they first appear.
    pub fn variables(&self) -> &[Var] {
        &self.vars
    }

    /// Canonical fully parenthesized form of the formula.
    pub fn render(&self) -> String {
        self.tree.render()
    }

    /// Sets variable `name` (either case) to `value` in every leaf that uses it.
    ///
    /// Names outside `A`..=`Z` match no leaf, so the call has no effect.
    pub fn set(&mut self, name: char, value: bool) {
        match Var::parse(name) {
            Some(var) => self.tree.set(var, value),
            None => trace!("set({:?}) matches no variable", name),
        }
    }

    /// Evaluates the formula with the values last given to [`Argument::set`].
    ///
    /// Variables that were never set read as `false`.
    pub fn evaluate(&self) -> bool {
        self.tree.evaluate()
    }

    /// Evaluates the formula under `assignment`.
    pub fn eval(&self, assignment: &Assignment) -> bool {
        self.tree.eval(assignment)
    }

    /// Iterates all `2^n` assignments to the variables of this argument.
    pub fn assignments(&self) -> Assignments<'_> {
        Assignments::new(&self.vars)
    }

    /// Returns `true` if the formula holds under every assignment.
    pub fn is_tautology(&self) -> bool {
        let valid = self.counterexample().is_none();
        debug!("is_tautology({}) = {}", self.tree, valid);
        valid
    }

    /// Returns `true` if some assignment makes the formula true.
    pub fn is_satisfiable(&self) -> bool {
        self.models().next().is_some()
    }

    /// Returns `true` if no assignment makes the formula true.
    pub fn is_contradiction(&self) -> bool {
        !self.is_satisfiable()
    }

    /// Returns the first assignment (in enumeration order) that falsifies the
    /// formula, or `None` if it is a tautology.
    pub fn counterexample(&self) -> Option<Assignment> {
        self.assignments().find(|a| !self.eval(a))
    }

    /// Iterates the assignments that make the formula true.
    pub fn models(&self) -> impl Iterator<Item = Assignment> + '_ {
        self.assignments().filter(move |a| self.eval(a))
    }

    /// Number of assignments to the argument's variables that satisfy it.
    pub fn count_models(&self) -> u64 {
        self.models().count() as u64
    }
}

impl FromStr for Argument {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Argument::parse(s)
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_single_var_is_not_tautology() {
        let mut arg = Argument::parse("A").unwrap();
        assert_eq!(arg.variables(), &[Var::new('A')]);
        assert!(!arg.is_tautology());

        arg.set('a', true);
        assert!(arg.evaluate());
        arg.set('A', false);
        assert!(!arg.evaluate());
    }

    #[test]
    fn test_excluded_middle() {
        let arg = Argument::parse("A|~A").unwrap();
        assert_eq!(arg.variables(), &[Var::new('A')]);
        assert!(arg.is_tautology());
        assert_eq!(arg.counterexample(), None);
    }

    #[test]
    fn test_contradiction() {
        let arg = Argument::parse("A&~A").unwrap();
        assert!(!arg.is_tautology());
        assert!(arg.is_contradiction());
        assert!(arg.assignments().all(|a| !arg.eval(&a)));
    }

    #[test]
    fn test_set_on_duplicated_variable() {
        let mut arg = Argument::parse("A&A").unwrap();
        assert!(!arg.evaluate());
        arg.set('A', true);
        assert!(arg.evaluate());
        arg.set('A', false);
        assert!(!arg.evaluate());
    }

    #[test]
    fn test_set_ignores_non_letters() {
        let mut arg = Argument::parse("A|B").unwrap();
        arg.set('1', true);
        arg.set('&', true);
        assert!(!arg.evaluate());
    }

    #[test]
    fn test_count_models() {
        assert_eq!(Argument::parse("A&B").unwrap().count_models(), 1);
        assert_eq!(Argument::parse("A|B").unwrap().count_models(), 3);
        assert_eq!(Argument::parse("A=B").unwrap().count_models(), 2);
        assert_eq!(Argument::parse("A|~A").unwrap().count_models(), 2);
        assert_eq!(Argument::parse("(A|B|C)&~A&~B&~C").unwrap().count_models(), 0);
    }

    #[test]
    fn test_counterexample_falsifies() {
        let arg = Argument::parse("(A>B)>(B>A)").unwrap();
        let cex = arg.counterexample().unwrap();
        assert!(!arg.eval(&cex));
        assert!(!cex.get(Var::new('A')));
        assert!(cex.get(Var::new('B')));
    }

    #[test]
    fn test_from_expr_without_parser() {
        let a = Var::new('A');
        let arg = Argument::from_expr(Expr::implies(Expr::prop(a), Expr::prop(a)));
        assert_eq!(arg.variables(), &[a]);
        assert!(arg.is_tautology());
    }

    #[test]
    fn test_from_str_and_display() {
        let arg: Argument = "a > (b|c)".parse().unwrap();
        assert_eq!(arg.to_string(), "( A > ( B | C ) )");
        assert_eq!(arg.render(), arg.to_string());
        assert!("a >".parse::<Argument>().is_err());
        assert!(parse("").is_err());
    }
}
