use std::rc::Rc;

use crate::{
    ast::{Expr, Statement},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

/// The result of executing one statement.
///
/// `Next` means evaluation continues with the following statement. The other
/// variants are raised by `break`, `continue` and `return` and travel up
/// through nested blocks until a loop or a function call absorbs them; each
/// carries the source line of the statement that raised it so an escape to
/// the top level can be reported precisely.
#[derive(Debug)]
pub enum Control {
    /// Continue with the next statement.
    Next,
    /// A `break` statement was executed.
    Break {
        /// Line of the `break` statement.
        line: usize,
    },
    /// A `continue` statement was executed.
    Continue {
        /// Line of the `continue` statement.
        line: usize,
    },
    /// A `return` statement was executed.
    Return {
        /// The returned value (`None` for a bare `return;`).
        value: Value,
        /// Line of the `return` statement.
        line:  usize,
    },
}

impl Context<'_> {
    /// Evaluates a single statement and returns its control signal.
    ///
    /// Expression statements discard their value. `def` binds the function
    /// name in the global environment. `if` and `while` descend into their
    /// blocks and propagate whatever signal the blocks produce.
    ///
    /// # Parameters
    /// - `statement`: Statement to evaluate.
    ///
    /// # Returns
    /// The [`Control`] signal describing how evaluation should continue.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<Control> {
        match statement {
            Statement::Empty => Ok(Control::Next),
            Statement::Expression { expr, .. } => {
                self.eval(expr)?;
                Ok(Control::Next)
            },
            Statement::If { condition,
                            then_branch,
                            else_branch,
                            .. } => self.eval_if(condition, then_branch, else_branch.as_deref()),
            Statement::While { condition, body, .. } => self.eval_while(condition, body),
            Statement::Break { line } => Ok(Control::Break { line: *line }),
            Statement::Continue { line } => Ok(Control::Continue { line: *line }),
            Statement::Return { value, line } => {
                let value = match value {
                    Some(expr) => self.eval(expr)?,
                    None => Value::None,
                };
                Ok(Control::Return { value,
                                     line: *line })
            },
            Statement::Function(def) => {
                self.env.define_global(&def.name, Value::Function(Rc::clone(def)));
                Ok(Control::Next)
            },
        }
    }

    /// Evaluates a list of statements in order.
    ///
    /// Evaluation continues as long as statements signal `Next` and stops
    /// early on the first `break`, `continue` or `return`, handing the
    /// signal to the caller.
    pub(crate) fn eval_statement_list(&mut self, statements: &[Statement]) -> EvalResult<Control> {
        for statement in statements {
            let control = self.eval_statement(statement)?;
            if !matches!(control, Control::Next) {
                return Ok(control);
            }
        }
        Ok(Control::Next)
    }

    fn eval_if(&mut self,
               condition: &Expr,
               then_branch: &[Statement],
               else_branch: Option<&[Statement]>)
               -> EvalResult<Control> {
        if self.eval(condition)?.is_true() {
            return self.eval_statement_list(then_branch);
        }
        match else_branch {
            Some(statements) => self.eval_statement_list(statements),
            None => Ok(Control::Next),
        }
    }

    fn eval_while(&mut self, condition: &Expr, body: &[Statement]) -> EvalResult<Control> {
        while self.eval(condition)?.is_true() {
            match self.eval_statement_list(body)? {
                Control::Next | Control::Continue { .. } => {},
                Control::Break { .. } => break,
                ret @ Control::Return { .. } => return Ok(ret),
            }
        }
        Ok(Control::Next)
    }
}
