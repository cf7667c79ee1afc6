///! Type-safe wrapper for propositional variables.
///!
///! Formulas name their variables with single letters. This module provides a
///! newtype that normalizes the letter case once, so that `a` and `A` can never
///! be mistaken for two different variables further down the pipeline.
use std::fmt;

/// Number of distinct propositional variables (one per letter `A`..=`Z`).
pub const NUM_VARS: usize = 26;

/// A propositional variable, identified by an uppercase letter.
///
/// # Invariants
///
/// - The wrapped byte is always in `b'A'..=b'Z'`
/// - Lowercase input is normalized to uppercase on construction
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Var(u8);

impl Var {
    /// Creates a new variable with the given name.
    ///
    /// # Panics
    ///
    /// Panics if `name` is not an ASCII letter.
    pub fn new(name: char) -> Self {
        match Self::parse(name) {
            Some(var) => var,
            None => panic!("Variable names must be letters A-Z, got {:?}", name),
        }
    }

    /// Creates a variable from a letter in either case, or `None` for any
    /// other character.
    pub fn parse(name: char) -> Option<Self> {
        if name.is_ascii_alphabetic() {
            Some(Var(name.to_ascii_uppercase() as u8))
        } else {
            None
        }
    }

    /// Creates a variable from its alphabet index (0 for `A`).
    pub fn from_index(index: usize) -> Option<Self> {
        if index < NUM_VARS {
            Some(Var(b'A' + index as u8))
        } else {
            None
        }
    }

    /// Returns the uppercase letter naming this variable.
    pub fn name(self) -> char {
        self.0 as char
    }

    /// Returns the alphabet index of this variable (0 for `A`, 25 for `Z`).
    pub fn index(self) -> usize {
        (self.0 - b'A') as usize
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<Var> for char {
    fn from(var: Var) -> Self {
        var.name()
    }
}
