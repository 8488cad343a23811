/// Binary operator parsing.
///
/// Implements the precedence cascade from `and`/`or` down through
/// comparisons, additive and multiplicative expressions.
pub mod binary;

/// Core parsing logic.
///
/// Contains the program and expression entry points, the assignment level and
/// shared result types.
pub mod core;

/// Statement parsing.
///
/// Implements parsing for all statement forms, including the brace-delimited
/// statement blocks of `if`, `while` and `def`.
pub mod statement;

/// Unary, primary and atom parsing.
///
/// Handles prefix `-`, the postfix subscript and call operators, and the
/// atomic expressions (literals, identifiers, list literals, parentheses).
pub mod unary;

/// Utility functions for the parser.
///
/// Provides helpers for comma-separated lists, identifiers and expected
/// tokens.
pub mod utils;
