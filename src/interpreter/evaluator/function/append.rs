use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

/// Appends a value to a list in place and returns `None`.
///
/// The first argument must be a list; the second may be any value. The
/// mutation happens through the shared list body, so it is visible through
/// every alias of the list.
///
/// # Parameters
/// - `_context`: Evaluation context (unused).
/// - `args`: Slice containing the list and the value.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// `Value::None`.
///
/// # Example
/// ```
/// use step::interpreter::{evaluator::{core::Context, function::append::append},
///                         value::core::Value};
///
/// let mut out: Vec<u8> = Vec::new();
/// let mut context = Context::new(&mut out);
/// let list = Value::from(vec![Value::Integer(1)]);
///
/// append(&mut context, &[list.clone(), Value::Integer(2)], 1).unwrap();
///
/// assert!(matches!(&list, Value::List(l) if l.len() == 2));
/// ```
pub fn append(_context: &mut Context<'_>, args: &[Value], line: usize) -> EvalResult<Value> {
    match &args[0] {
        Value::List(list) => {
            list.push(args[1].clone());
            Ok(Value::None)
        },
        other => {
            Err(RuntimeError::TypeError { details: format!("append('{}', ...) cannot be evaluated",
                                                           other.type_name()),
                                          line })
        },
    }
}
