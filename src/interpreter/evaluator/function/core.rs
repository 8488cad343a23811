use crate::{
    ast::{Expr, FunctionDef},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            function::{append, assert, convert, len, print, sqrt},
            statement::Control,
        },
        value::core::Value,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives the evaluation context (for output), a slice of
/// evaluated argument values and the line number of the call. It returns the
/// call's result wrapped in `EvalResult`.
pub type BuiltinFn = fn(&mut Context<'_>, &[Value], usize) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `OneOf(slice)` means the builtin accepts any arity listed in `slice`.
/// - `Variadic` means any number of arguments is accepted.
#[derive(Clone, Copy)]
pub enum Arity {
    Exact(usize),
    OneOf(&'static [usize]),
    Variadic,
}

/// One entry of the builtin table: a name, an arity specification and the
/// implementation. Builtins are first-class values; two references to the
/// same entry compare equal.
pub struct BuiltinDef {
    pub name:  &'static str,
    pub arity: Arity,
    pub func:  BuiltinFn,
}

impl std::fmt::Debug for BuiltinDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuiltinDef")
         .field("name", &self.name)
         .finish_non_exhaustive()
    }
}

/// Defines the builtin functions by generating the lookup table.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces `BUILTIN_TABLE`, which the global environment is seeded
/// from at startup.
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        /// The table of built-in functions seeded into the global environment.
        pub static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
    };
}

builtin_functions! {
    "print"  => { arity: Arity::Variadic, func: print::print },
    "assert" => { arity: Arity::OneOf(&[1, 2]), func: assert::assert_fn },
    "len"    => { arity: Arity::Exact(1), func: len::len },
    "int"    => { arity: Arity::Exact(1), func: convert::int },
    "str"    => { arity: Arity::Exact(1), func: convert::str_fn },
    "sqrt"   => { arity: Arity::Exact(1), func: sqrt::sqrt },
    "append" => { arity: Arity::Exact(2), func: append::append },
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity
    /// constraint.
    ///
    /// Returns `true` if the count is permitted, `false` otherwise.
    #[must_use]
    pub fn check(&self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == *m,
            Self::OneOf(arr) => arr.contains(&n),
            Self::Variadic => true,
        }
    }
}

impl Context<'_> {
    /// Evaluates a call expression.
    ///
    /// The callee expression is evaluated first (functions are first-class,
    /// so any expression may produce one), then the arguments left to right.
    /// Builtin calls verify arity against the table entry; user-defined calls
    /// delegate to [`Context::call_function`].
    ///
    /// # Parameters
    /// - `callee`: Expression evaluating to the callable.
    /// - `arguments`: Argument expressions.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The call result, or an error when the callee is not callable or the
    /// arity does not match.
    pub(crate) fn eval_call(&mut self,
                            callee: &Expr,
                            arguments: &[Expr],
                            line: usize)
                            -> EvalResult<Value> {
        let function = self.eval(callee)?;

        let mut args = Vec::with_capacity(arguments.len());
        for argument in arguments {
            args.push(self.eval(argument)?);
        }

        match function {
            Value::Builtin(def) => {
                if !def.arity.check(args.len()) {
                    return Err(RuntimeError::ArgumentCountMismatch { name: def.name.to_string(),
                                                                     line });
                }
                (def.func)(self, &args, line)
            },
            Value::Function(def) => self.call_function(&def, args, line),
            other => {
                Err(RuntimeError::TypeError { details: format!("'{}' is not callable",
                                                               other.type_name()),
                                              line })
            },
        }
    }

    /// Executes a user-defined function.
    ///
    /// Parameters are bound in a fresh call frame; the body runs until it
    /// returns, falls off the end (yielding `None`), or misuses a loop
    /// signal. The frame is popped on every exit path, errors included.
    ///
    /// # Errors
    /// - Wrong number of arguments.
    /// - `break`/`continue` escaping the function body without a loop.
    fn call_function(&mut self,
                     def: &FunctionDef,
                     args: Vec<Value>,
                     line: usize)
                     -> EvalResult<Value> {
        if args.len() != def.params.len() {
            return Err(RuntimeError::ArgumentCountMismatch { name: def.name.clone(),
                                                             line });
        }

        let bindings = def.params.iter().cloned().zip(args).collect();
        self.env.push_frame(bindings);
        let outcome = self.eval_statement_list(&def.body);
        self.env.pop_frame();

        match outcome? {
            Control::Next => Ok(Value::None),
            Control::Return { value, .. } => Ok(value),
            Control::Break { line } => Err(RuntimeError::BreakOutsideLoop { line }),
            Control::Continue { line } => Err(RuntimeError::ContinueOutsideLoop { line }),
        }
    }
}
