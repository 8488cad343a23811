//! # step
//!
//! step is a tree-walking interpreter for Step, a small dynamically-typed
//! imperative language with curly-brace, semicolon-terminated syntax and
//! Python-like semantics for numbers, strings, lists and first-class
//! functions.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use crate::interpreter::{evaluator::core::Context, lexer::tokenize, parser::core::parse_program};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums and related types
/// that represent the syntactic structure of source code as a tree. The AST
/// is built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source locations to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while running a
/// program. It standardizes error reporting and carries detailed information
/// about failures, including error kinds, descriptions and source locations.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers (and columns for lexical errors) for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, error handling and all supporting infrastructure to
/// provide a complete runtime for Step programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator and value
///   types.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion and helpers.
///
/// # Responsibilities
/// - Safely convert between `i64` and `f64` without silent data loss.
pub mod util;

/// Runs a Step program.
///
/// The source is tokenized and parsed in full, then the statement tree is
/// evaluated against a fresh global environment seeded with the built-in
/// functions. Everything the program prints goes to `output`, which makes
/// the function directly testable: pass a `Vec<u8>` to capture output, or a
/// locked stdout in a real driver.
///
/// # Errors
/// Returns the first lexical, parse or runtime error (assertion failures
/// included). The driver maps an error to a non-zero exit status.
///
/// # Examples
/// ```
/// use step::run;
///
/// let mut output: Vec<u8> = Vec::new();
/// run("print(1 + 2);", &mut output).unwrap();
/// assert_eq!(String::from_utf8(output).unwrap(), "3\n");
///
/// // Unknown variables are runtime errors.
/// let mut sink: Vec<u8> = Vec::new();
/// assert!(run("y = x + 1;", &mut sink).is_err());
/// ```
pub fn run(source: &str, output: &mut dyn Write) -> Result<(), Box<dyn std::error::Error>> {
    let tokens = tokenize(source)?;

    let mut iter = tokens.iter().peekable();
    let program = parse_program(&mut iter)?;

    let mut context = Context::new(output);
    context.eval_program(&program)?;

    Ok(())
}
