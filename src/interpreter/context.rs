use std::collections::{HashMap, HashSet};

use crate::interpreter::{
    evaluator::function::core::lookup_builtin,
    object::{core::Object, variable::Variable},
    value::core::{FALSE, TRUE, Value},
};

/// One scope level: names bound to values (normally variable cells).
pub type Frame = HashMap<String, Value>;

/// The variable scopes visible to one evaluation.
///
/// Frames are searched innermost first; names found nowhere fall back to the
/// read-only globals (`empty`, `true`, `false` and the built-in functions).
/// The front frame holds host bindings, captured variables and call
/// parameters.
///
/// Cloning a context clones the frames but shares the variable cells.
#[derive(Debug, Clone)]
pub struct Context {
    frames: Vec<Frame>,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Creates a context with a single empty frame.
    #[must_use]
    pub fn new() -> Self {
        Self { frames: vec![Frame::new()] }
    }

    /// Opens a new innermost scope.
    pub fn push(&mut self) {
        self.frames.push(Frame::new());
    }

    /// Closes the innermost scope. The front frame is never removed.
    pub fn pop(&mut self) {
        if self.frames.len() > 1 {
            self.frames.pop();
        }
    }

    /// Number of open scopes.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Binds `name` in the front frame, replacing any previous binding.
    pub fn bind(&mut self, name: &str, value: Value) {
        if let Some(front) = self.frames.first_mut() {
            front.insert(name.to_string(), value);
        }
    }

    /// Looks `name` up in the scopes, innermost first. Globals are not
    /// consulted.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Value> {
        self.frames
            .iter()
            .rev()
            .find_map(|frame| frame.get(name).cloned())
    }

    /// Resolves a name as it appears in a script.
    ///
    /// Scopes are searched first, then the globals. A name found nowhere is
    /// created as an empty variable in the innermost scope. With `local` set
    /// (`my name`) a fresh variable is created in the innermost scope
    /// regardless of outer bindings.
    pub fn resolve(&mut self, name: &str, local: bool) -> Value {
        if !local {
            if let Some(value) = self.lookup(name) {
                return value;
            }
            if let Some(value) = global(name) {
                return value;
            }
        }
        let variable = Value::from(Variable::default());
        if let Some(innermost) = self.frames.last_mut() {
            innermost.insert(name.to_string(), variable.clone());
        }
        variable
    }

    /// Builds the context a function literal closes over: a single frame
    /// holding the current bindings of the given names. Names that are not
    /// bound in any scope are skipped.
    #[must_use]
    pub fn capture(&self, names: &HashSet<String>) -> Self {
        let frame = names.iter()
                         .filter_map(|name| self.lookup(name).map(|value| (name.clone(), value)))
                         .collect();
        Self { frames: vec![frame] }
    }
}

/// Read-only global names.
///
/// `true` is `-1` so that `~true == false`.
#[must_use]
pub fn global(name: &str) -> Option<Value> {
    match name {
        "empty" => Some(Value::Empty),
        "true" => Some(Value::Int(TRUE)),
        "false" => Some(Value::Int(FALSE)),
        _ => lookup_builtin(name).map(|builtin| Object::Builtin(builtin).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_names_become_local_variables() {
        let mut context = Context::new();
        context.push();
        let x = context.resolve("x", false);
        assert!(matches!(x, Value::Object(Object::Variable(_))));
        assert_eq!(context.lookup("x"), Some(x));
        context.pop();
        assert_eq!(context.lookup("x"), None);
    }

    #[test]
    fn my_shadows_outer_binding() {
        let mut context = Context::new();
        let outer = context.resolve("x", false);
        context.push();
        let inner = context.resolve("x", true);
        assert_ne!(outer, inner);
        context.pop();
        assert_eq!(context.lookup("x"), Some(outer));
    }

    #[test]
    fn globals_are_not_stored() {
        let mut context = Context::new();
        assert_eq!(context.resolve("true", false), Value::Int(-1));
        assert!(matches!(context.resolve("sin", false), Value::Object(Object::Builtin(_))));
        assert_eq!(context.lookup("true"), None);
    }

    #[test]
    fn capture_keeps_only_bound_names() {
        let mut context = Context::new();
        let k = context.resolve("k", false);
        let names = ["k", "missing"].iter().map(ToString::to_string).collect();
        let captured = context.capture(&names);
        assert_eq!(captured.lookup("k"), Some(k));
        assert_eq!(captured.lookup("missing"), None);
    }
}
