use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

/// Computes the square root of a number, always as a float.
///
/// Negative arguments and non-numbers are errors.
///
/// # Parameters
/// - `_context`: Evaluation context (unused).
/// - `args`: Slice containing one argument.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// `Value::Real` containing the square root.
///
/// # Example
/// ```
/// use step::interpreter::{evaluator::{core::Context, function::sqrt::sqrt},
///                         value::core::Value};
///
/// let mut out: Vec<u8> = Vec::new();
/// let mut context = Context::new(&mut out);
/// let root = sqrt(&mut context, &[Value::Integer(9)], 1).unwrap();
///
/// assert!(matches!(root, Value::Real(r) if r == 3.0));
/// ```
pub fn sqrt(_context: &mut Context<'_>, args: &[Value], line: usize) -> EvalResult<Value> {
    match &args[0] {
        Value::Integer(_) | Value::Real(_) => {
            let value = args[0].as_real(line)?;
            if value < 0.0 {
                return Err(RuntimeError::InvalidArgument { details:
                                                               "square root of a negative number".to_string(),
                                                           line });
            }
            Ok(Value::Real(value.sqrt()))
        },
        other => {
            Err(RuntimeError::TypeError { details: format!("sqrt('{}') cannot be evaluated",
                                                           other.type_name()),
                                          line })
        },
    }
}
