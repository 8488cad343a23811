use std::rc::Rc;

use crate::{
    ast::{FunctionDef, LiteralValue},
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, function::core::BuiltinDef},
        value::list::ListRef,
    },
    util::num::{f64_to_i64_checked, i64_to_f64_checked},
};

/// Maximum list nesting depth tolerated by structural equality and rendering.
/// Deeper nesting (in practice, a cycle built through subscript assignment)
/// is reported as a runtime error instead of overflowing the stack.
pub const MAX_LIST_DEPTH: usize = 64;

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible types that can appear in expressions,
/// assignments, function returns and conditions. Numbers keep their integer
/// or float identity as distinct variants; lists are handles into shared
/// bodies; callables are either built-in or user-defined functions.
#[derive(Debug, Clone)]
pub enum Value {
    /// An integer value (64-bit signed).
    Integer(i64),
    /// A floating-point value (double precision).
    Real(f64),
    /// An immutable string value.
    Str(Rc<str>),
    /// A handle to a shared mutable list body.
    List(ListRef),
    /// The unit value `None`.
    None,
    /// A built-in function from the interpreter's builtin table.
    Builtin(&'static BuiltinDef),
    /// A user-defined function created by a `def` statement.
    Function(Rc<FunctionDef>),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(Rc::from(v))
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::List(ListRef::new(v))
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Integer(n) => (*n).into(),
            LiteralValue::Real(r) => (*r).into(),
            LiteralValue::Str(s) => s.as_str().into(),
            LiteralValue::None => Self::None,
        }
    }
}

impl Value {
    /// Creates the language-level boolean for `flag`: integer `1` for true and
    /// integer `0` for false.
    ///
    /// # Example
    /// ```
    /// use step::interpreter::value::core::Value;
    ///
    /// assert!(matches!(Value::boolean(true), Value::Integer(1)));
    /// assert!(matches!(Value::boolean(false), Value::Integer(0)));
    /// ```
    #[must_use]
    pub const fn boolean(flag: bool) -> Self {
        if flag { Self::Integer(1) } else { Self::Integer(0) }
    }

    /// Returns the truthiness of the value.
    ///
    /// Exactly `0`, `0.0`, the empty string, the empty list and `None` are
    /// false; every other value (including every callable) is true.
    ///
    /// # Example
    /// ```
    /// use step::interpreter::value::core::Value;
    ///
    /// assert!(Value::Integer(3).is_true());
    /// assert!(!Value::Real(0.0).is_true());
    /// assert!(!Value::from("").is_true());
    /// assert!(!Value::None.is_true());
    /// ```
    #[must_use]
    pub fn is_true(&self) -> bool {
        match self {
            Self::Integer(n) => *n != 0,
            Self::Real(r) => *r != 0.0,
            Self::Str(s) => !s.is_empty(),
            Self::List(list) => !list.is_empty(),
            Self::None => false,
            Self::Builtin(_) | Self::Function(_) => true,
        }
    }

    /// Compares two values for language-level equality.
    ///
    /// Numbers compare by numeric value across the integer/float divide,
    /// strings by contents, lists structurally (element by element, with
    /// aliased bodies equal without recursion), callables by identity.
    /// Values of different types are unequal.
    ///
    /// # Parameters
    /// - `other`: The value to compare against.
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Errors
    /// - `NestingTooDeep` when list nesting exceeds [`MAX_LIST_DEPTH`].
    /// - `IntegerTooLarge` when an integer beyond 2^53 is compared against a
    ///   float.
    pub fn is_equal(&self, other: &Self, line: usize) -> EvalResult<bool> {
        self.equal_at_depth(other, 0, line)
    }

    fn equal_at_depth(&self, other: &Self, depth: usize, line: usize) -> EvalResult<bool> {
        Ok(match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Real(a), Self::Real(b)) => a == b,
            (Self::Integer(a), Self::Real(b)) | (Self::Real(b), Self::Integer(a)) => {
                i64_to_f64_checked(*a, RuntimeError::IntegerTooLarge { line })? == *b
            },
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::None, Self::None) => true,
            (Self::List(a), Self::List(b)) => {
                if a.shares_body(b) {
                    return Ok(true);
                }
                if depth >= MAX_LIST_DEPTH {
                    return Err(RuntimeError::NestingTooDeep { line });
                }
                let items_a = a.items();
                let items_b = b.items();
                if items_a.len() != items_b.len() {
                    return Ok(false);
                }
                for (x, y) in items_a.iter().zip(items_b.iter()) {
                    if !x.equal_at_depth(y, depth + 1, line)? {
                        return Ok(false);
                    }
                }
                true
            },
            (Self::Builtin(a), Self::Builtin(b)) => std::ptr::eq(*a, *b),
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            _ => false,
        })
    }

    /// Renders the value as its canonical string.
    ///
    /// This rendering is shared by the `str` builtin and by `print`: integers
    /// without a decimal point, floats always with one, strings verbatim
    /// without quotes, `None` as `None`, and lists as `[a, b, c]` rendered
    /// recursively.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Errors
    /// Returns `NestingTooDeep` when list nesting exceeds [`MAX_LIST_DEPTH`].
    ///
    /// # Example
    /// ```
    /// use step::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(-4).canonical(1).unwrap(), "-4");
    /// assert_eq!(Value::Real(2.0).canonical(1).unwrap(), "2.0");
    /// assert_eq!(Value::None.canonical(1).unwrap(), "None");
    /// ```
    pub fn canonical(&self, line: usize) -> EvalResult<String> {
        let mut rendered = String::new();
        self.render_at_depth(&mut rendered, 0, line)?;
        Ok(rendered)
    }

    fn render_at_depth(&self, out: &mut String, depth: usize, line: usize) -> EvalResult<()> {
        match self {
            Self::Integer(n) => out.push_str(&n.to_string()),
            Self::Real(r) => out.push_str(&format_real(*r)),
            Self::Str(s) => out.push_str(s),
            Self::None => out.push_str("None"),
            Self::Builtin(def) => out.push_str(&format!("<built-in function {}>", def.name)),
            Self::Function(def) => out.push_str(&format!("<function {}>", def.name)),
            Self::List(list) => {
                if depth >= MAX_LIST_DEPTH {
                    return Err(RuntimeError::NestingTooDeep { line });
                }
                out.push('[');
                for (index, value) in list.items().iter().enumerate() {
                    if index > 0 {
                        out.push_str(", ");
                    }
                    value.render_at_depth(out, depth + 1, line)?;
                }
                out.push(']');
            },
        }
        Ok(())
    }

    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// Accepts `Value::Real` and `Value::Integer`. For integers, conversion
    /// fails if the value is too large to be represented as `f64` exactly.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(f64)`: If the value is a float or a safe integer.
    /// - `Err(RuntimeError::TypeError | IntegerTooLarge)`: Otherwise.
    pub fn as_real(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Real(r) => Ok(*r),
            Self::Integer(n) => {
                i64_to_f64_checked(*n, RuntimeError::IntegerTooLarge { line })
            },
            other => {
                Err(RuntimeError::TypeError { details: format!("expected a number, found '{}'",
                                                               other.type_name()),
                                              line })
            },
        }
    }

    /// Converts the value to a subscript index into a sequence of length
    /// `len`.
    ///
    /// Integers are used directly; floats are accepted only when they are
    /// integer-valued. Negative and too-large indices are out of range.
    ///
    /// # Parameters
    /// - `len`: Length of the sequence being subscripted.
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(usize)`: A valid 0-based index.
    /// - `Err(RuntimeError)`: For non-numbers, fractional floats, and
    ///   out-of-range indices.
    pub fn as_index(&self, len: usize, line: usize) -> EvalResult<usize> {
        let index = match self {
            Self::Integer(n) => *n,
            Self::Real(r) => f64_to_i64_checked(*r, line)?,
            other => {
                return Err(RuntimeError::TypeError { details: format!("'{}' cannot be used as an index",
                                                                      other.type_name()),
                                                     line });
            },
        };
        match usize::try_from(index) {
            Ok(i) if i < len => Ok(i),
            _ => Err(RuntimeError::IndexOutOfBounds { index, len, line }),
        }
    }

    /// Returns the name of the value's language-level type, for error
    /// messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) | Self::Real(_) => "NUMBER",
            Self::Str(_) => "STRING",
            Self::List(_) => "LIST",
            Self::None => "NONE",
            Self::Builtin(_) => "BUILTIN_FUNCTION",
            Self::Function(_) => "FUNCTION",
        }
    }
}

/// Formats a float the way the language renders it: integer-valued finite
/// floats keep a trailing `.0`, everything else uses the shortest decimal
/// form.
///
/// # Example
/// ```
/// use step::interpreter::value::core::format_real;
///
/// assert_eq!(format_real(2.0), "2.0");
/// assert_eq!(format_real(1.5), "1.5");
/// assert_eq!(format_real(-4.0), "-4.0");
/// ```
#[must_use]
pub fn format_real(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}
