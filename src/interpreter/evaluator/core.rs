use std::io::Write;

use crate::{
    ast::{BinaryOperator, Expr, Statement, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::{env::Environment, statement::Control},
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the variable environment (global
/// bindings plus the per-call frames) and the output sink that `print` and
/// `assert` write to. The sink is injected so that tests can capture program
/// output.
///
/// ## Usage
///
/// A `Context` is created once per program run and drives all evaluation
/// through [`Context::eval_program`], [`Context::eval_statement`] and
/// [`Context::eval`].
pub struct Context<'out> {
    /// The variable environment, seeded with the built-in functions.
    pub env: Environment,
    output:  &'out mut dyn Write,
}

impl<'out> Context<'out> {
    /// Creates a new evaluation context writing to `output`. The global
    /// environment starts out holding exactly the built-in functions.
    pub fn new(output: &'out mut dyn Write) -> Self {
        Self { env: Environment::new(),
               output }
    }

    /// Evaluates a whole program.
    ///
    /// Statements run in order. A `break`, `continue` or `return` that
    /// escapes to the top level is a runtime error.
    ///
    /// # Parameters
    /// - `program`: The parsed statement list.
    ///
    /// # Returns
    /// `Ok(())` when every statement ran to completion.
    pub fn eval_program(&mut self, program: &[Statement]) -> EvalResult<()> {
        for statement in program {
            match self.eval_statement(statement)? {
                Control::Next => {},
                Control::Break { line } => {
                    return Err(RuntimeError::BreakOutsideLoop { line });
                },
                Control::Continue { line } => {
                    return Err(RuntimeError::ContinueOutsideLoop { line });
                },
                Control::Return { line, .. } => {
                    return Err(RuntimeError::ReturnOutsideFunction { line });
                },
            }
        }
        Ok(())
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches based on expression variant: literals, variables, unary and
    /// binary operations, assignments, list literals, subscripts and calls.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The computed [`Value`]; every Step expression produces one.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Value::from(value)),
            Expr::Variable { name, line } => self.eval_variable(name, *line),
            Expr::UnaryOp { op, expr, line } => self.eval_unary_op(*op, expr, *line),
            Expr::BinaryOp { left, op, right, line } => match op {
                BinaryOperator::And | BinaryOperator::Or => {
                    self.eval_logical_op(*op, left, right)
                },
                _ => {
                    let left = self.eval(left)?;
                    let right = self.eval(right)?;
                    Self::eval_binary(*op, &left, &right, *line)
                },
            },
            Expr::Assign { target, value, .. } => self.eval_assignment(target, value),
            Expr::ListLiteral { elements, .. } => self.eval_list_literal(elements),
            Expr::Index { sequence, index, line } => self.eval_index(sequence, index, *line),
            Expr::Call { callee, arguments, line } => self.eval_call(callee, arguments, *line),
        }
    }

    /// Looks up a variable by name.
    ///
    /// Lookup consults the innermost call frame first (when a function is
    /// executing) and falls back to the global environment.
    ///
    /// # Errors
    /// Returns `UnknownVariable` when the name is bound nowhere.
    fn eval_variable(&self, name: &str, line: usize) -> EvalResult<Value> {
        self.env
            .get(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                           line })
    }

    /// Evaluates a unary operator applied to a subexpression.
    ///
    /// The only unary operator is numeric negation; it preserves the
    /// integer/float identity of its operand.
    fn eval_unary_op(&mut self, op: UnaryOperator, expr: &Expr, line: usize) -> EvalResult<Value> {
        let value = self.eval(expr)?;
        match op {
            UnaryOperator::Negate => match value {
                Value::Integer(n) => {
                    n.checked_neg()
                     .map(Value::Integer)
                     .ok_or(RuntimeError::Overflow { line })
                },
                Value::Real(r) => Ok(Value::Real(-r)),
                other => {
                    Err(RuntimeError::TypeError { details: format!("-'{}' cannot be evaluated",
                                                                   other.type_name()),
                                                  line })
                },
            },
        }
    }

    /// Evaluates `and`/`or`.
    ///
    /// Both connectives short-circuit on the truthiness of the left operand
    /// and produce the language-level booleans `1` and `0`.
    fn eval_logical_op(&mut self,
                       op: BinaryOperator,
                       left: &Expr,
                       right: &Expr)
                       -> EvalResult<Value> {
        match op {
            BinaryOperator::And => {
                if !self.eval(left)?.is_true() {
                    return Ok(Value::boolean(false));
                }
                Ok(Value::boolean(self.eval(right)?.is_true()))
            },
            BinaryOperator::Or => {
                if self.eval(left)?.is_true() {
                    return Ok(Value::boolean(true));
                }
                Ok(Value::boolean(self.eval(right)?.is_true()))
            },
            _ => unreachable!("only logical operators are dispatched here"),
        }
    }

    /// Evaluates a list literal into a fresh heap list.
    fn eval_list_literal(&mut self, elements: &[Expr]) -> EvalResult<Value> {
        let mut items = Vec::with_capacity(elements.len());
        for element in elements {
            items.push(self.eval(element)?);
        }
        Ok(Value::from(items))
    }

    /// Evaluates a subscript expression `sequence[index]`.
    ///
    /// Lists yield the element at the index; strings yield a one-character
    /// string. Indices are 0-based and must be integer-valued.
    fn eval_index(&mut self, sequence: &Expr, index: &Expr, line: usize) -> EvalResult<Value> {
        let sequence = self.eval(sequence)?;
        let index = self.eval(index)?;
        match &sequence {
            Value::List(list) => {
                let i = index.as_index(list.len(), line)?;
                Ok(list.get(i).expect("index was bounds-checked"))
            },
            Value::Str(s) => {
                let i = index.as_index(s.len(), line)?;
                Ok(Value::from((s.as_bytes()[i] as char).to_string().as_str()))
            },
            other => {
                Err(RuntimeError::TypeError { details: format!("'{}'['{}'] cannot be evaluated",
                                                               other.type_name(),
                                                               index.type_name()),
                                              line })
            },
        }
    }

    /// Evaluates an assignment expression.
    ///
    /// `name = e` binds in the current frame (the call frame during a
    /// function call, the global frame otherwise). `list[i] = e` mutates the
    /// shared list body, so the change is visible through every alias. The
    /// value of the assignment is the assigned value.
    fn eval_assignment(&mut self, target: &Expr, value: &Expr) -> EvalResult<Value> {
        match target {
            Expr::Variable { name, .. } => {
                let value = self.eval(value)?;
                self.env.set(name, value.clone());
                Ok(value)
            },
            Expr::Index { sequence, index, line } => {
                let sequence = self.eval(sequence)?;
                let index = self.eval(index)?;
                let value = self.eval(value)?;
                match &sequence {
                    Value::List(list) => {
                        let i = index.as_index(list.len(), *line)?;
                        list.set(i, value.clone());
                        Ok(value)
                    },
                    other => {
                        Err(RuntimeError::TypeError { details: format!("cannot assign into '{}'",
                                                                       other.type_name()),
                                                      line: *line, })
                    },
                }
            },
            _ => unreachable!("the parser validates assignment targets"),
        }
    }

    /// Writes one line of program output to the injected sink.
    pub(crate) fn write_line(&mut self, text: &str, line: usize) -> EvalResult<()> {
        writeln!(self.output, "{text}").map_err(|e| RuntimeError::Io { details: e.to_string(),
                                                                      line })
    }
}
