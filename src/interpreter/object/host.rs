use crate::{
    error::ErrorKind,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// An object implemented by the embedding program.
///
/// Register one with [`Engine::add`](crate::interpreter::evaluator::core::Engine::add)
/// wrapped by [`Object::host`](crate::interpreter::object::core::Object::host).
/// Scripts then use it like any other object: read it, assign it, call it,
/// index it or access its members.
///
/// Every operation defaults to `TypeMismatch`; implement the ones the object
/// supports.
pub trait HostObject {
    /// Handles `new obj`.
    fn create(&self) -> EvalResult<Value> {
        Err(ErrorKind::TypeMismatch)
    }

    /// The value the object dereferences to. `None` means the object is its
    /// own value and is passed around as a handle.
    fn get(&self) -> Option<Value> {
        None
    }

    /// Handles `obj = value`; returns the assigned value.
    fn set(&self, _value: Value) -> EvalResult<Value> {
        Err(ErrorKind::TypeMismatch)
    }

    /// Handles `obj(params)`. `params` is `empty`, one value, or an array of
    /// arguments.
    fn call(&self, _params: Value) -> EvalResult<Value> {
        Err(ErrorKind::TypeMismatch)
    }

    /// Handles `obj.name`.
    fn item(&self, _name: &str) -> EvalResult<Value> {
        Err(ErrorKind::TypeMismatch)
    }

    /// Handles `obj[index]`.
    fn index(&self, _index: &Value) -> EvalResult<Value> {
        Err(ErrorKind::TypeMismatch)
    }

    /// Text printed for the object when it is its own value.
    fn describe(&self) -> String {
        "object".to_string()
    }
}
