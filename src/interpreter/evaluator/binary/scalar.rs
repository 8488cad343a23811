use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
    util::num::i64_to_f64_checked,
};

/// Floor modulo over floats: the result carries the sign of the divisor, so
/// `-6 % 4` is `2` and `6 % -4` is `-2`.
fn floor_mod(a: f64, b: f64) -> f64 {
    let r = a % b;
    if r != 0.0 && (r < 0.0) != (b < 0.0) { r + b } else { r }
}

impl Context<'_> {
    /// Evaluates a scalar arithmetic operation.
    ///
    /// Both operands must be numbers. Integer operands keep producing
    /// integers for `+ - * %` and for exact division; any float operand
    /// promotes the whole operation to floats. Division and modulo by zero
    /// are checked for both numeric categories, and integer arithmetic is
    /// checked for overflow.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator (`Add`, `Sub`, `Mul`, `Div` or `Mod`).
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the computed scalar.
    ///
    /// # Example
    /// ```
    /// use step::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let x = Value::Integer(7);
    /// let y = Value::Integer(2);
    ///
    /// let exact = Context::eval_scalar_op(BinaryOperator::Mod, &x, &y, 1).unwrap();
    /// assert!(matches!(exact, Value::Integer(1)));
    ///
    /// let quotient = Context::eval_scalar_op(BinaryOperator::Div, &x, &y, 1).unwrap();
    /// assert!(matches!(quotient, Value::Real(q) if q == 3.5));
    /// ```
    pub fn eval_scalar_op(op: BinaryOperator,
                          left: &Value,
                          right: &Value,
                          line: usize)
                          -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mod, Mul, Sub};
        use Value::{Integer, Real};

        match (&left, &right) {
            (Integer(a), Integer(b)) => Self::eval_integer_op(op, *a, *b, line),
            (Integer(_) | Real(_), Integer(_) | Real(_)) => {
                let a = left.as_real(line)?;
                let b = right.as_real(line)?;

                Ok(Real(match op {
                            Add => a + b,
                            Sub => a - b,
                            Mul => a * b,
                            Div => {
                                if b == 0.0 {
                                    return Err(RuntimeError::DivisionByZero { line });
                                }
                                a / b
                            },
                            Mod => {
                                if b == 0.0 {
                                    return Err(RuntimeError::DivisionByZero { line });
                                }
                                floor_mod(a, b)
                            },
                            _ => unreachable!(),
                        }))
            },
            _ => {
                Err(RuntimeError::TypeError { details: format!("'{}' {op} '{}' cannot be evaluated",
                                                               left.type_name(),
                                                               right.type_name()),
                                              line })
            },
        }
    }

    /// Evaluates an arithmetic operation between two integers.
    ///
    /// `+ - * %` stay integer; `/` yields an integer exactly when the
    /// division is exact and a float otherwise. All operations are checked
    /// for overflow.
    fn eval_integer_op(op: BinaryOperator, a: i64, b: i64, line: usize) -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mod, Mul, Sub};

        match op {
            Add => {
                a.checked_add(b)
                 .map(Value::Integer)
                 .ok_or(RuntimeError::Overflow { line })
            },
            Sub => {
                a.checked_sub(b)
                 .map(Value::Integer)
                 .ok_or(RuntimeError::Overflow { line })
            },
            Mul => {
                a.checked_mul(b)
                 .map(Value::Integer)
                 .ok_or(RuntimeError::Overflow { line })
            },
            Div => {
                if b == 0 {
                    return Err(RuntimeError::DivisionByZero { line });
                }
                let remainder = a.checked_rem(b).ok_or(RuntimeError::Overflow { line })?;
                if remainder == 0 {
                    return a.checked_div(b)
                            .map(Value::Integer)
                            .ok_or(RuntimeError::Overflow { line });
                }
                let a = i64_to_f64_checked(a, RuntimeError::IntegerTooLarge { line })?;
                let b = i64_to_f64_checked(b, RuntimeError::IntegerTooLarge { line })?;
                Ok(Value::Real(a / b))
            },
            Mod => {
                if b == 0 {
                    return Err(RuntimeError::DivisionByZero { line });
                }
                let r = a.checked_rem(b).ok_or(RuntimeError::Overflow { line })?;
                Ok(Value::Integer(if r != 0 && (r < 0) != (b < 0) { r + b } else { r }))
            },
            _ => unreachable!(),
        }
    }
}
