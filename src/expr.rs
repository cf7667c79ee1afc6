//! Propositional expression trees.
//!
//! An [`Expr`] is a closed sum type over the six node kinds of propositional
//! logic. Every inner node exclusively owns its children, so a tree built by
//! the parser holds one [`Expr::Prop`] leaf per *occurrence* of a variable.
//!
//! There are two ways to evaluate a tree:
//!
//! - [`Expr::eval`] is pure and reads variable values from an [`Assignment`].
//! - [`Expr::set`] + [`Expr::evaluate`] work on the value slot stored in each
//!   leaf. `set` broadcasts to every leaf with the given name, so all
//!   occurrences of a variable always agree.
//!
//! Both give identical results for the same values.

use std::fmt;

use crate::assignment::Assignment;
use crate::types::Var;

/// A propositional expression tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Variable leaf with its current value
    Prop { var: Var, value: bool },
    /// Negation
    Not(Box<Expr>),
    /// Conjunction
    And(Box<Expr>, Box<Expr>),
    /// Disjunction
    Or(Box<Expr>, Box<Expr>),
    /// Material implication
    Implies(Box<Expr>, Box<Expr>),
    /// Biconditional
    Equiv(Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Creates a leaf for `var`, initially `false`.
    pub fn prop(var: Var) -> Self {
        Expr::Prop { var, value: false }
    }

    pub fn not(operand: Self) -> Self {
        Expr::Not(Box::new(operand))
    }

    pub fn and(lhs: Self, rhs: Self) -> Self {
        Expr::And(Box::new(lhs), Box::new(rhs))
    }

    pub fn or(lhs: Self, rhs: Self) -> Self {
        Expr::Or(Box::new(lhs), Box::new(rhs))
    }

    pub fn implies(lhs: Self, rhs: Self) -> Self {
        Expr::Implies(Box::new(lhs), Box::new(rhs))
    }

    pub fn equiv(lhs: Self, rhs: Self) -> Self {
        Expr::Equiv(Box::new(lhs), Box::new(rhs))
    }
}

impl Expr {
    /// Evaluates the tree using the values stored in its leaves.
    pub fn evaluate(&self) -> bool {
        match self {
            Expr::Prop { value, .. } => *value,
            Expr::Not(e) => !e.evaluate(),
            Expr::And(l, r) => l.evaluate() & r.evaluate(),
            Expr::Or(l, r) => l.evaluate() | r.evaluate(),
            Expr::Implies(l, r) => !l.evaluate() | r.evaluate(),
            Expr::Equiv(l, r) => l.evaluate() == r.evaluate(),
        }
    }

    /// Stores `value` in every leaf named `var`.
    ///
    /// Leaves for other variables are left untouched.
    pub fn set(&mut self, var: Var, value: bool) {
        match self {
            Expr::Prop { var: v, value: slot } => {
                if *v == var {
                    *slot = value;
                }
            }
            Expr::Not(e) => e.set(var, value),
            Expr::And(l, r) | Expr::Or(l, r) | Expr::Implies(l, r) | Expr::Equiv(l, r) => {
                l.set(var, value);
                r.set(var, value);
            }
        }
    }

    /// Evaluates the tree under `assignment`, ignoring the leaf value slots.
    pub fn eval(&self, assignment: &Assignment) -> bool {
        match self {
            Expr::Prop { var, .. } => assignment.get(*var),
            Expr::Not(e) => !e.eval(assignment),
            Expr::And(l, r) => l.eval(assignment) && r.eval(assignment),
            Expr::Or(l, r) => l.eval(assignment) || r.eval(assignment),
            Expr::Implies(l, r) => !l.eval(assignment) || r.eval(assignment),
            Expr::Equiv(l, r) => l.eval(assignment) == r.eval(assignment),
        }
    }

    /// Distinct variables of the tree, in left-to-right first-occurrence order.
    pub fn variables(&self) -> Vec<Var> {
        let mut vars = Vec::new();
        self.collect_variables(&mut vars);
        vars
    }

    fn collect_variables(&self, vars: &mut Vec<Var>) {
        match self {
            Expr::Prop { var, .. } => {
                if !vars.contains(var) {
                    vars.push(*var);
                }
            }
            Expr::Not(e) => e.collect_variables(vars),
            Expr::And(l, r) | Expr::Or(l, r) | Expr::Implies(l, r) | Expr::Equiv(l, r) => {
                l.collect_variables(vars);
                r.collect_variables(vars);
            }
        }
    }

    /// Size of the expression tree (number of nodes).
    pub fn size(&self) -> usize {
        match self {
            Expr::Prop { .. } => 1,
            Expr::Not(e) => 1 + e.size(),
            Expr::And(l, r) | Expr::Or(l, r) | Expr::Implies(l, r) | Expr::Equiv(l, r) => 1 + l.size() + r.size(),
        }
    }

    /// Depth of the expression tree (0 for leaves).
    pub fn depth(&self) -> usize {
        match self {
            Expr::Prop { .. } => 0,
            Expr::Not(e) => 1 + e.depth(),
            Expr::And(l, r) | Expr::Or(l, r) | Expr::Implies(l, r) | Expr::Equiv(l, r) => 1 + l.depth().max(r.depth()),
        }
    }

    /// Fully parenthesized text form, accepted back by the parser.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Prop { var, .. } => write!(f, "{}", var),
            Expr::Not(e) => write!(f, "( ! {} )", e),
            Expr::And(l, r) => write!(f, "( {} & {} )", l, r),
            Expr::Or(l, r) => write!(f, "( {} | {} )", l, r),
            Expr::Implies(l, r) => write!(f, "( {} > {} )", l, r),
            Expr::Equiv(l, r) => write!(f, "( {} = {} )", l, r),
        }
    }
}
