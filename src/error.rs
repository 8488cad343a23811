/// Lexical errors.
///
/// Defines all error types that can occur while turning source text into
/// tokens, such as unterminated strings or characters that start no token.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the statement tree
/// from the token stream. Parse errors include missing punctuation, malformed
/// expressions and invalid assignment targets.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include things like division by zero, type mismatches, out-of-range
/// subscripts and failed assertions.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
