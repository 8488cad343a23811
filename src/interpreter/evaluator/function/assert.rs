use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

/// Asserts that the first argument is truthy.
///
/// Accepts one or two arguments. When the first argument is truthy the call
/// returns `None`. Otherwise the program fails with an assertion error; the
/// optional second argument is rendered canonically and carried in the
/// error's message, so the driver surfaces it on stderr.
///
/// # Parameters
/// - `_context`: Evaluation context (unused).
/// - `args`: One or two evaluated arguments.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// `Value::None` on success.
pub fn assert_fn(_context: &mut Context<'_>, args: &[Value], line: usize) -> EvalResult<Value> {
    if args[0].is_true() {
        return Ok(Value::None);
    }
    let message = match args.get(1) {
        Some(value) => Some(value.canonical(line)?),
        None => None,
    };
    Err(RuntimeError::AssertionFailed { message, line })
}
