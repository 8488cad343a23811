use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// `==` and `!=` are defined on all types and use structural equality
    /// (see [`Value::is_equal`]); values of different types are simply
    /// unequal. The relational operators accept numbers only, comparing
    /// mixed integer/float operands by numeric value. Every comparison
    /// produces the language-level booleans `1` and `0`.
    ///
    /// # Parameters
    /// - `op`: The comparison operator.
    /// - `left`: The left-hand value.
    /// - `right`: The right-hand value.
    /// - `line`: Current line number used for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing integer `1` or `0`.
    ///
    /// # Example
    /// ```
    /// use step::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let a = Value::Integer(3);
    /// let b = Value::Real(3.0);
    ///
    /// let result = Context::eval_comparison(BinaryOperator::Equal, &a, &b, 1).unwrap();
    /// assert!(matches!(result, Value::Integer(1)));
    /// ```
    pub fn eval_comparison(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        use BinaryOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};
        use Value::{Integer, Real};

        Ok(Value::boolean(match op {
                              Equal => left.is_equal(right, line)?,
                              NotEqual => !left.is_equal(right, line)?,

                              Less | Greater | LessEqual | GreaterEqual => {
                                  match (&left, &right) {
                                      (Integer(a), Integer(b)) => match op {
                                          Less => a < b,
                                          Greater => a > b,
                                          LessEqual => a <= b,
                                          GreaterEqual => a >= b,
                                          _ => unreachable!(),
                                      },
                                      (Integer(_) | Real(_), Integer(_) | Real(_)) => {
                                          let a = left.as_real(line)?;
                                          let b = right.as_real(line)?;
                                          match op {
                                              Less => a < b,
                                              Greater => a > b,
                                              LessEqual => a <= b,
                                              GreaterEqual => a >= b,
                                              _ => unreachable!(),
                                          }
                                      },
                                      _ => {
                                          return Err(RuntimeError::TypeError { details:
                                                                                   format!("'{}' {op} '{}' cannot be evaluated",
                                                                                           left.type_name(),
                                                                                           right.type_name()),
                                                                               line });
                                      },
                                  }
                              },

                              _ => unreachable!(),
                          }))
    }
}
