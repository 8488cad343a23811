use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
    util::num::f64_to_i64_checked,
};

/// Converts a number or a string to an integer.
///
/// Floats are truncated toward zero; strings are parsed as decimal integers
/// (surrounding whitespace allowed). A string that does not parse, or any
/// other argument type, is an error.
///
/// # Parameters
/// - `_context`: Evaluation context (unused).
/// - `args`: Slice containing one argument.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// `Value::Integer` containing the converted value.
///
/// # Example
/// ```
/// use step::interpreter::{evaluator::{core::Context, function::convert::int},
///                         value::core::Value};
///
/// let mut out: Vec<u8> = Vec::new();
/// let mut context = Context::new(&mut out);
///
/// let truncated = int(&mut context, &[Value::Real(-3.9)], 1).unwrap();
/// assert!(matches!(truncated, Value::Integer(-3)));
///
/// let parsed = int(&mut context, &[Value::from("42")], 1).unwrap();
/// assert!(matches!(parsed, Value::Integer(42)));
/// ```
pub fn int(_context: &mut Context<'_>, args: &[Value], line: usize) -> EvalResult<Value> {
    match &args[0] {
        Value::Integer(n) => Ok(Value::Integer(*n)),
        Value::Real(r) => f64_to_i64_checked(r.trunc(), line).map(Value::Integer),
        Value::Str(s) => {
            s.trim()
             .parse::<i64>()
             .map(Value::Integer)
             .map_err(|_| RuntimeError::InvalidArgument { details: format!("'{s}' cannot be parsed as an integer"),
                                                          line })
        },
        other => {
            Err(RuntimeError::TypeError { details: format!("int('{}') cannot be evaluated",
                                                           other.type_name()),
                                          line })
        },
    }
}

/// Converts any value to its canonical string rendering.
///
/// The rendering is the same one `print` uses (see
/// [`Value::canonical`]).
///
/// # Parameters
/// - `_context`: Evaluation context (unused).
/// - `args`: Slice containing one argument.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// `Value::Str` containing the rendering.
pub fn str_fn(_context: &mut Context<'_>, args: &[Value], line: usize) -> EvalResult<Value> {
    Ok(Value::from(args[0].canonical(line)?.as_str()))
}
