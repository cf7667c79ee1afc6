//! # tautology-rs: Propositional Logic in Rust
//!
//! **`tautology-rs`** parses propositional-logic formulas into expression trees,
//! evaluates them under variable assignments, and decides validity by
//! exhaustive truth-table enumeration.
//!
//! ## What is a Tautology?
//!
//! A formula is a **tautology** (or *valid*) when it evaluates to true under every
//! possible assignment of its variables. With `n` distinct variables there are
//! `2^n` assignments, and this crate simply checks them all.
//!
//! ## Formula Syntax
//!
//! | Connective  | Symbols         | Example   |
//! |-------------|-----------------|-----------|
//! | Variable    | `A`..`Z`        | `p`, `Q`  |
//! | Negation    | `~`, `!`        | `~A`      |
//! | Conjunction | `&`, `^`        | `A & B`   |
//! | Disjunction | `\|`            | `A \| B`  |
//! | Implication | `>`             | `A > B`   |
//! | Equivalence | `=`             | `A = B`   |
//! | Grouping    | `()`, `[]`, `{}`| `~(A&B)`  |
//!
//! Letters are case-insensitive and whitespace is ignored.
//! There is **no operator precedence**: a chain such as `A & B | C` groups to the
//! right, as `A & (B | C)`. Use brackets for anything else.
//!
//! ## Basic Usage
//!
//! ```rust
//! use tautology_rs::argument::parse;
//!
//! // 1. Parse a formula
//! let mut arg = parse("(A > B) = (~B > ~A)").unwrap();
//!
//! // 2. Inspect it
//! assert_eq!(arg.variables().len(), 2);
//! assert_eq!(arg.render(), "( ( A > B ) = ( ( ! B ) > ( ! A ) ) )");
//!
//! // 3. Check validity
//! assert!(arg.is_tautology());
//!
//! // 4. Evaluate under a specific assignment (A=true, B=false)
//! arg.set('A', true);
//! arg.set('B', false);
//! assert!(arg.evaluate());
//! ```
//!
//! ## Core Components
//!
//! - **[`parser`]**: Recursive-descent parser producing [`Expr`][crate::expr::Expr] trees.
//! - **[`expr`]**: The expression tree and its evaluation.
//! - **[`argument`]**: The [`Argument`][crate::argument::Argument] type and validity checking.
//! - **[`table`]**: Truth tables for display.

pub mod argument;
pub mod assignment;
pub mod expr;
pub mod parser;
pub mod table;
pub mod types;
