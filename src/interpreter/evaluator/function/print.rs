use crate::interpreter::{
    evaluator::core::{Context, EvalResult},
    value::core::Value,
};

/// Writes the arguments to the program's output sink and returns `None`.
///
/// Accepts any number of arguments. Each argument is rendered as its
/// canonical string; renderings are separated by single spaces and the line
/// is terminated with `\n`. `print()` with no arguments writes a bare
/// newline.
///
/// # Parameters
/// - `context`: Evaluation context owning the output sink.
/// - `args`: The evaluated arguments.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// `Value::None`.
///
/// # Example
/// ```
/// use step::interpreter::{evaluator::{core::Context, function::print::print},
///                         value::core::Value};
///
/// let mut out: Vec<u8> = Vec::new();
/// let mut context = Context::new(&mut out);
/// print(&mut context, &[Value::Integer(1), Value::from("two")], 1).unwrap();
///
/// assert_eq!(out, b"1 two\n");
/// ```
pub fn print(context: &mut Context<'_>, args: &[Value], line: usize) -> EvalResult<Value> {
    let mut rendered = Vec::with_capacity(args.len());
    for arg in args {
        rendered.push(arg.canonical(line)?);
    }
    context.write_line(&rendered.join(" "), line)?;
    Ok(Value::None)
}
