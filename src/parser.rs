//! Formula parser.
//!
//! Turns formula text such as `(A>B)=(~B>~A)` into an [`Expr`] tree plus the
//! list of distinct variables in first-occurrence order.
//!
//! # Syntax
//!
//! ```text
//! formula  := operand [ binop formula ]
//! operand  := neg letter | neg group | group | letter
//! group    := open formula close
//! letter   := A..Z                          (case-insensitive)
//! neg      := ~ | !
//! binop    := & | ^ | '|' | > | =
//! open     := ( | [ | {
//! close    := ) | ] | }
//! ```
//!
//! Whitespace is ignored everywhere. There is no operator precedence: after
//! the left operand, the whole rest of the input is the right operand, so
//! `A&B|C` means `A&(B|C)`. Use brackets to group differently.
//!
//! Bracket matching only tracks nesting depth, so `(A&B]` is accepted.
//! Nesting (brackets plus chained operators) is limited to [`MAX_DEPTH`].
//!
//! Letters are uppercased in ASCII only. Any other character stays as typed
//! and is reported at its own position.
//!
//! Error positions are indices into the normalized input, that is, after
//! whitespace removal.

use std::fmt;

use log::{debug, trace};

use crate::expr::Expr;
use crate::types::Var;

const NEGATION: [char; 2] = ['~', '!'];
const OPENERS: [char; 3] = ['(', '[', '{'];
const CLOSERS: [char; 3] = [')', ']', '}'];

/// Maximum nesting of formulas, counting both bracket groups and the right
/// operands of a chain such as `A&B&C`. Keeps the recursive descent (and the
/// recursive evaluation of the resulting tree) well within a thread's stack.
pub const MAX_DEPTH: usize = 512;

/// Error type for parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Nothing left after whitespace removal.
    EmptyInput,
    /// A character that is not allowed at this point of the formula.
    UnexpectedSymbol { position: usize, symbol: char },
    /// An opening bracket that is never closed.
    UnbalancedParentheses { position: usize },
    /// An operand was expected, but the input (or the enclosing group) ended.
    MissingOperand { position: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::EmptyInput => write!(f, "empty formula"),
            ParseError::UnexpectedSymbol { position, symbol } => {
                write!(f, "unexpected symbol '{}' at position {}", symbol, position)
            }
            ParseError::UnbalancedParentheses { position } => {
                write!(f, "unbalanced parenthesis opened at position {}", position)
            }
            ParseError::MissingOperand { position } => write!(f, "missing operand at position {}", position),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parses `formula` into an expression tree and its variables.
///
/// The variables are distinct and listed in the order they first appear.
///
/// # Example
///
/// ```
/// use tautology_rs::parser::parse_formula;
/// use tautology_rs::types::Var;
///
/// let (expr, vars) = parse_formula("b & ~(a | b)").unwrap();
/// assert_eq!(vars, vec![Var::new('B'), Var::new('A')]);
/// assert_eq!(expr.render(), "( B & ( ! ( A | B ) ) )");
/// ```
pub fn parse_formula(formula: &str) -> Result<(Expr, Vec<Var>), ParseError> {
    let chars: Vec<char> = formula
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect();
    debug!("parse_formula(formula = {:?}) normalized to {:?}", formula, String::from_iter(&chars));

    if chars.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let mut parser = Parser {
        chars,
        vars: Vec::new(),
        depth: 0,
    };
    let expr = parser.formula(0, parser.chars.len())?;
    debug!("parsed {} with variables {:?}", expr, parser.vars);
    Ok((expr, parser.vars))
}

/// Recursive-descent state: the normalized input and the variable registry.
///
/// Every rule works on a half-open span `start..end` of `chars`, so no
/// substrings are allocated while descending.
struct Parser {
    chars: Vec<char>,
    vars: Vec<Var>,
    /// Number of `formula` rules currently being parsed
    depth: usize,
}

impl Parser {
    /// `formula := operand [ binop formula ]` over `start..end`.
    ///
    /// Both a bracket group and a right operand open a nested formula. Past
    /// [`MAX_DEPTH`] nested formulas, the opener or operator that introduced
    /// the next one is reported as an unexpected symbol.
    fn formula(&mut self, start: usize, end: usize) -> Result<Expr, ParseError> {
        if self.depth == MAX_DEPTH {
            // Only nested formulas get here, so `start - 1` is the opener or operator.
            let position = start - 1;
            debug!("formula nested deeper than {} at position {}", MAX_DEPTH, position);
            return Err(ParseError::UnexpectedSymbol {
                position,
                symbol: self.chars[position],
            });
        }
        self.depth += 1;
        let result = self.binary(start, end);
        self.depth -= 1;
        result
    }

    fn binary(&mut self, start: usize, end: usize) -> Result<Expr, ParseError> {
        trace!("formula({}..{})", start, end);
        let (left, pos) = self.operand(start, end)?;
        if pos == end {
            return Ok(left);
        }

        let symbol = self.chars[pos];
        let combine: fn(Expr, Expr) -> Expr = match symbol {
            '&' | '^' => Expr::and,
            '|' => Expr::or,
            '>' => Expr::implies,
            '=' => Expr::equiv,
            _ => return Err(ParseError::UnexpectedSymbol { position: pos, symbol }),
        };
        let right = self.formula(pos + 1, end)?;
        Ok(combine(left, right))
    }

    /// Parses one operand starting at `start`, returning it together with the
    /// position just past it.
    fn operand(&mut self, start: usize, end: usize) -> Result<(Expr, usize), ParseError> {
        let Some(&first) = self.chars.get(start).filter(|_| start < end) else {
            return Err(ParseError::MissingOperand { position: start });
        };

        if NEGATION.contains(&first) {
            let next = start + 1;
            if next == end {
                return Err(ParseError::MissingOperand { position: next });
            }
            let symbol = self.chars[next];
            if let Some(var) = Var::parse(symbol) {
                self.register(var);
                return Ok((Expr::not(Expr::prop(var)), next + 1));
            }
            if OPENERS.contains(&symbol) {
                let (inner, pos) = self.group(next, end)?;
                return Ok((Expr::not(inner), pos));
            }
            return Err(ParseError::UnexpectedSymbol { position: next, symbol });
        }

        if OPENERS.contains(&first) {
            return self.group(start, end);
        }

        if let Some(var) = Var::parse(first) {
            self.register(var);
            return Ok((Expr::prop(var), start + 1));
        }

        Err(ParseError::UnexpectedSymbol {
            position: start,
            symbol: first,
        })
    }

    /// `group := open formula close`, where `open` is at position `open`.
    fn group(&mut self, open: usize, end: usize) -> Result<(Expr, usize), ParseError> {
        let close = self.find_closing(open, end)?;
        let inner = self.formula(open + 1, close)?;
        Ok((inner, close + 1))
    }

    /// Finds the bracket closing the one at `open`, looking no further than `end`.
    fn find_closing(&self, open: usize, end: usize) -> Result<usize, ParseError> {
        let mut depth = 0usize;
        for (i, c) in self.chars[open..end].iter().enumerate() {
            if OPENERS.contains(c) {
                depth += 1;
            } else if CLOSERS.contains(c) {
                depth -= 1;
                if depth == 0 {
                    return Ok(open + i);
                }
            }
        }
        debug!("no closing bracket for position {}", open);
        Err(ParseError::UnbalancedParentheses { position: open })
    }

    fn register(&mut self, var: Var) {
        if !self.vars.contains(&var) {
            trace!("new variable {}", var);
            self.vars.push(var);
        }
    }
}
