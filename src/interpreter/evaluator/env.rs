use std::collections::HashMap;

use crate::interpreter::{evaluator::function::core::BUILTIN_TABLE, value::core::Value};

/// Maps identifier names to values.
///
/// There is exactly one global frame, seeded with the built-in callables at
/// startup, plus a stack of call frames pushed and popped around user
/// function calls. Lookup consults the top call frame and then the global
/// frame; intermediate frames are invisible. Assignment writes to whichever
/// frame is current, so function-local assignments do not leak out of the
/// call.
pub struct Environment {
    globals: HashMap<String, Value>,
    frames:  Vec<HashMap<String, Value>>,
}

#[allow(clippy::new_without_default)]
impl Environment {
    /// Creates the global environment with the built-in functions installed.
    #[must_use]
    pub fn new() -> Self {
        let globals = BUILTIN_TABLE.iter()
                                   .map(|def| (def.name.to_string(), Value::Builtin(def)))
                                   .collect();
        Self { globals,
               frames: Vec::new() }
    }

    /// Looks up `name`, consulting the innermost call frame first and the
    /// global frame second.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        if let Some(frame) = self.frames.last()
           && let Some(value) = frame.get(name)
        {
            return Some(value);
        }
        self.globals.get(name)
    }

    /// Binds or rebinds `name` in the current frame: the innermost call frame
    /// while a function executes, the global frame otherwise.
    pub fn set(&mut self, name: &str, value: Value) {
        match self.frames.last_mut() {
            Some(frame) => {
                frame.insert(name.to_string(), value);
            },
            None => {
                self.globals.insert(name.to_string(), value);
            },
        }
    }

    /// Binds `name` in the global frame regardless of any active call. Used
    /// by `def`, which always creates top-level definitions.
    pub fn define_global(&mut self, name: &str, value: Value) {
        self.globals.insert(name.to_string(), value);
    }

    /// Pushes a fresh call frame holding the parameter bindings of a call.
    pub fn push_frame(&mut self, bindings: HashMap<String, Value>) {
        self.frames.push(bindings);
    }

    /// Pops the innermost call frame when a call finishes.
    pub fn pop_frame(&mut self) {
        self.frames.pop();
    }
}
