use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates a binary operation between two values.
    ///
    /// This function routes the operation to specialized handlers depending
    /// on the operator and operand types. Arithmetic over numbers goes to the
    /// scalar evaluator; `+` and `*` with a string or list operand go to the
    /// sequence evaluator; relational and equality operators use
    /// `eval_comparison`. The logical connectives never reach this function
    /// because they short-circuit at the expression level.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use step::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let left = Value::Integer(3);
    /// let right = Value::Integer(4);
    ///
    /// let result = Context::eval_binary(BinaryOperator::Add, &left, &right, 1).unwrap();
    /// assert!(matches!(result, Value::Integer(7)));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or,
            Sub,
        };
        use Value::{List, Str};

        match op {
            Add | Sub | Mul | Div | Mod => match (&left, &right) {
                (Str(_) | List(_), _) | (_, Str(_) | List(_)) => {
                    Self::eval_sequence_op(op, left, right, line)
                },
                _ => Self::eval_scalar_op(op, left, right, line),
            },

            Less | Greater | LessEqual | GreaterEqual | Equal | NotEqual => {
                Self::eval_comparison(op, left, right, line)
            },

            And | Or => unreachable!("logical operators short-circuit in the expression evaluator"),
        }
    }
}
