/// The evaluator module executes AST nodes and produces effects.
///
/// The evaluator walks the statement tree, evaluates expressions, performs
/// arithmetic and the sequence operations, manages variable bindings, and
/// drives control flow. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles variables, functions and control flow.
/// - Reports runtime errors such as division by zero or invalid operations.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as numbers,
/// strings, identifiers, keywords and operators. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source location.
/// - Handles numeric and string literals, identifiers and operators.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the syntactic structure of statements and
/// expressions.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates correct grammar and syntax, reporting errors with location
///   info.
/// - Supports arithmetic, subscripts, calls, assignments and control flow.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares all the value types used during interpretation, such
/// as integers, floating-point numbers, strings, shared lists, `None` and
/// callables. It also provides truthiness, structural equality and the
/// canonical string rendering.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Implements truthiness, equality and rendering with cycle protection.
/// - Provides the shared mutable list storage behind list handles.
pub mod value;
