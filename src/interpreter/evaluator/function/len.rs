use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

/// Returns the length of a string (in bytes) or a list (in elements).
///
/// Any other argument type is a type error.
///
/// # Parameters
/// - `_context`: Evaluation context (unused).
/// - `args`: Slice containing one argument.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// `Value::Integer` containing the length.
///
/// # Example
/// ```
/// use step::interpreter::{evaluator::{core::Context, function::len::len},
///                         value::core::Value};
///
/// let mut out: Vec<u8> = Vec::new();
/// let mut context = Context::new(&mut out);
/// let n = len(&mut context, &[Value::from("abc")], 1).unwrap();
///
/// assert!(matches!(n, Value::Integer(3)));
/// ```
#[allow(clippy::cast_possible_wrap)]
pub fn len(_context: &mut Context<'_>, args: &[Value], line: usize) -> EvalResult<Value> {
    match &args[0] {
        Value::Str(s) => Ok(Value::Integer(s.len() as i64)),
        Value::List(list) => Ok(Value::Integer(list.len() as i64)),
        other => {
            Err(RuntimeError::TypeError { details: format!("len('{}') cannot be evaluated",
                                                           other.type_name()),
                                          line })
        },
    }
}
