use std::{cell::RefCell, rc::Rc};

use crate::{
    error::ErrorKind,
    interpreter::{evaluator::core::EvalResult, object::core::Object, value::core::Value},
};

/// A mutable cell holding one value.
///
/// Cloning a `Variable` clones the handle, not the cell: closures, instance
/// members and host bindings that share a variable all see each other's
/// writes.
#[derive(Debug, Clone, Default)]
pub struct Variable {
    cell: Rc<RefCell<Value>>,
}

impl Variable {
    /// Creates a cell holding `value`.
    #[must_use]
    pub fn new(value: Value) -> Self {
        Self { cell: Rc::new(RefCell::new(value)) }
    }

    /// Returns a copy of the held value.
    #[must_use]
    pub fn get(&self) -> Value {
        self.cell.borrow().clone()
    }

    /// Replaces the held value.
    pub fn set(&self, value: Value) {
        *self.cell.borrow_mut() = value;
    }

    /// The object held by the cell, for operations forwarded to it.
    ///
    /// # Errors
    /// `TypeMismatch` if the cell holds a scalar.
    pub fn held_object(&self) -> EvalResult<Object> {
        match self.get() {
            Value::Object(object) => Ok(object),
            _ => Err(ErrorKind::TypeMismatch),
        }
    }

    /// Indexes the held value.
    ///
    /// Objects handle the index themselves. A scalar accepts index `0` and
    /// yields this variable, so `x[0] = v` assigns `x`.
    ///
    /// # Errors
    /// `InvalidArgument` for any other index on a scalar.
    pub fn index(&self, index: &Value) -> EvalResult<Value> {
        match self.get() {
            Value::Object(object) => object.index(index),
            _ if *index == Value::Int(0) => Ok(self.clone().into()),
            _ => Err(ErrorKind::InvalidArgument),
        }
    }

    /// Returns `true` if both handles share one cell.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.cell, &other.cell)
    }
}
