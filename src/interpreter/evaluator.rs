/// Binary operator evaluation.
///
/// Implements evaluation for all binary operations over values: arithmetic
/// with integer/float promotion, the string and list overloads of `+` and
/// `*`, and comparisons.
pub mod binary;

/// Core evaluation logic for expressions.
///
/// Contains the evaluation context, the expression dispatcher and the shared
/// evaluation routines (variables, subscripts, assignments, logic).
pub mod core;

/// Variable environments.
///
/// Implements the global environment and the per-call frames user functions
/// execute in.
pub mod env;

/// Function call evaluation and the built-in functions.
///
/// Implements calls to user-defined functions and the builtin table
/// (`print`, `assert`, `len`, `int`, `str`, `sqrt`, `append`).
pub mod function;

/// Statement evaluation.
///
/// Implements statement execution and the control signal that carries
/// `break`, `continue` and `return` through nested blocks.
pub mod statement;
