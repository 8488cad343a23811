#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to use an undefined variable.
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A value had an unexpected or incompatible type.
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// The wrong number of arguments was supplied to a function.
    ArgumentCountMismatch {
        /// The name of the function being called.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to access a list or string element outside the valid range.
    IndexOutOfBounds {
        /// The index that was requested.
        index: i64,
        /// The length of the sequence.
        len:   usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A subscript index was fractional.
    FractionalIndex {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted division or modulo by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Integer arithmetic overflowed.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An integer was too large to be compared or combined with a float
    /// without losing precision.
    IntegerTooLarge {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An argument was invalid or out of range.
    InvalidArgument {
        /// Details about why the argument is invalid.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// An assertion failed during execution.
    AssertionFailed {
        /// The message passed as the second `assert` argument, if any.
        message: Option<String>,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A `break` statement executed outside any loop.
    BreakOutsideLoop {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `continue` statement executed outside any loop.
    ContinueOutsideLoop {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `return` statement executed outside any function call.
    ReturnOutsideFunction {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Lists were nested (possibly cyclically) beyond the supported depth
    /// while comparing or rendering.
    NestingTooDeep {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Writing to the output sink failed.
    Io {
        /// Details from the underlying I/O error.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, line } => {
                write!(f, "Error on line {line}: Unknown variable '{name}'.")
            },
            Self::TypeError { details, line } => {
                write!(f, "Error on line {line}: Type error: {details}.")
            },
            Self::ArgumentCountMismatch { name, line } => write!(f,
                                                                 "Error on line {line}: Wrong number of arguments for '{name}'."),
            Self::IndexOutOfBounds { index, len, line } => write!(f,
                                                                  "Error on line {line}: Index {index} is out of range for length {len}."),
            Self::FractionalIndex { line } => write!(f,
                                                     "Error on line {line}: Subscript index must be an integer."),
            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),
            Self::Overflow { line } => write!(f,
                                              "Error on line {line}: Integer overflow while trying to compute result."),
            Self::IntegerTooLarge { line } => write!(f,
                                                     "Error on line {line}: Integer is too large to combine with a float."),
            Self::InvalidArgument { details, line } => {
                write!(f, "Error on line {line}: Invalid argument: {details}.")
            },
            Self::AssertionFailed { message, line } => match message {
                Some(message) => {
                    write!(f, "Error on line {line}: Assertion failed: {message}")
                },
                None => write!(f, "Error on line {line}: Assertion failed."),
            },
            Self::BreakOutsideLoop { line } => {
                write!(f, "Error on line {line}: 'break' outside of a loop.")
            },
            Self::ContinueOutsideLoop { line } => {
                write!(f, "Error on line {line}: 'continue' outside of a loop.")
            },
            Self::ReturnOutsideFunction { line } => {
                write!(f, "Error on line {line}: 'return' outside of a function.")
            },
            Self::NestingTooDeep { line } => {
                write!(f, "Error on line {line}: Lists are nested too deeply.")
            },
            Self::Io { details, line } => {
                write!(f, "Error on line {line}: Failed to write output: {details}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
