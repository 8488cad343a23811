#[derive(Debug)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// A description of the token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// More than one comparison operator was chained (e.g. `a < b < c`).
    ChainedComparison {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The left side of an assignment is neither an identifier nor a
    /// subscript.
    InvalidAssignmentTarget {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },

            Self::ChainedComparison { line } => write!(f,
                                                       "Error on line {line}: Comparison operators cannot be chained."),

            Self::InvalidAssignmentTarget { line } => write!(f,
                                                             "Error on line {line}: The left side of an assignment must be an identifier or a subscript."),
        }
    }
}

impl std::error::Error for ParseError {}
