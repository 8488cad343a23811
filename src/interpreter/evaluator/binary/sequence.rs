use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

/// Clamps a replication count; non-positive counts produce empty results.
fn repeat_count(count: i64) -> usize {
    usize::try_from(count).unwrap_or(0)
}

impl Context<'_> {
    /// Evaluates `+` and `*` when a string or a list is involved.
    ///
    /// Supported forms:
    /// - `string + string` concatenates.
    /// - `list + list` concatenates into a fresh heap list.
    /// - `string * int` and `int * string` repeat the string; a non-positive
    ///   count yields the empty string.
    /// - `list * int` and `int * list` repeat the list into a fresh heap
    ///   list; element handles are shared, not cloned.
    ///
    /// Any other combination is a type error.
    ///
    /// # Parameters
    /// - `op`: The operator (`Add` or `Mul` reach this function).
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the combined sequence.
    ///
    /// # Example
    /// ```
    /// use step::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let s = Value::from("ab");
    /// let n = Value::Integer(3);
    ///
    /// let repeated = Context::eval_sequence_op(BinaryOperator::Mul, &s, &n, 1).unwrap();
    /// assert!(matches!(repeated, Value::Str(r) if &*r == "ababab"));
    /// ```
    pub fn eval_sequence_op(op: BinaryOperator,
                            left: &Value,
                            right: &Value,
                            line: usize)
                            -> EvalResult<Value> {
        use BinaryOperator::{Add, Mul};
        use Value::{Integer, List, Str};

        match (op, &left, &right) {
            (Add, Str(a), Str(b)) => {
                let mut joined = String::with_capacity(a.len() + b.len());
                joined.push_str(a);
                joined.push_str(b);
                Ok(Value::from(joined.as_str()))
            },
            (Add, List(a), List(b)) => Ok(List(a.concat(b))),
            (Mul, Str(s), Integer(n)) | (Mul, Integer(n), Str(s)) => {
                Ok(Value::from(s.repeat(repeat_count(*n)).as_str()))
            },
            (Mul, List(l), Integer(n)) | (Mul, Integer(n), List(l)) => {
                Ok(List(l.repeat(repeat_count(*n))))
            },
            _ => {
                Err(RuntimeError::TypeError { details: format!("'{}' {op} '{}' cannot be evaluated",
                                                               left.type_name(),
                                                               right.type_name()),
                                              line })
            },
        }
    }
}
