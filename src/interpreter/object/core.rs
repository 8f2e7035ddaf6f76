use std::{fmt, rc::Rc};

use crate::{
    error::ErrorKind,
    interpreter::{
        evaluator::core::EvalResult,
        object::{
            array::{Array, Indexer},
            class::{Instance, UserClass},
            function::{BuiltinFunction, Functional, UserFunction},
            host::HostObject,
            variable::Variable,
        },
        value::core::Value,
    },
};

/// A handle to a runtime object.
///
/// Every object kind answers the same protocol: `create` (the `new`
/// operator), `get` (dereference), `set` (assignment), `call` (`f(args)`),
/// `item` (`obj.name`) and `index` (`obj[i]`). Operations a kind does not
/// support fail with `TypeMismatch`. Variables and array elements forward
/// `create`, `call` and `item` to the object they hold.
///
/// Handles are cheap to clone and compare by identity.
#[derive(Clone)]
pub enum Object {
    /// A mutable cell.
    Variable(Variable),
    /// A shared list.
    Array(Array),
    /// A reference to one array slot.
    Indexer(Indexer),
    /// A native function from the built-in table.
    Builtin(&'static BuiltinFunction),
    /// A function literal together with the variables it captured.
    Function(Rc<UserFunction>),
    /// An `object` literal, possibly bound to constructor arguments.
    Class(Rc<UserClass>),
    /// The result of `new` on a class.
    Instance(Rc<Instance>),
    /// A `fold`, `map` or `filter` wrapper around a function.
    Functional(Rc<Functional>),
    /// An object supplied by the embedding host.
    Host(Rc<dyn HostObject>),
}

impl Object {
    /// Wraps a host implementation in a handle.
    ///
    /// # Example
    /// ```
    /// use cinder::interpreter::{object::{core::Object, host::HostObject},
    ///                           value::core::Value};
    ///
    /// struct Answer;
    ///
    /// impl HostObject for Answer {
    ///     fn get(&self) -> Option<Value> {
    ///         Some(Value::Int(42))
    ///     }
    /// }
    ///
    /// let answer = Value::from(Object::host(Answer));
    /// assert_eq!(answer.deref().unwrap(), Value::Int(42));
    /// ```
    pub fn host(object: impl HostObject + 'static) -> Self {
        Self::Host(Rc::new(object))
    }

    /// Instantiates the object (`new obj`).
    ///
    /// # Errors
    /// `TypeMismatch` unless the object is a class or a host object that
    /// supports instantiation; errors raised by the class body propagate.
    pub fn create(&self) -> EvalResult<Value> {
        match self {
            Self::Variable(v) => v.held_object()?.create(),
            Self::Indexer(i) => i.element_object()?.create(),
            Self::Class(class) => class.create(),
            Self::Host(host) => host.create(),
            _ => Err(ErrorKind::TypeMismatch),
        }
    }

    /// Dereferences the object.
    ///
    /// Variables and array elements yield what they hold, arrays collapse as
    /// described in [`Array::get`], and host objects decide for themselves.
    /// Every other kind yields itself.
    ///
    /// # Errors
    /// `InvalidArgument` for a dangling array element.
    pub fn get(&self) -> EvalResult<Value> {
        match self {
            Self::Variable(v) => Ok(v.get()),
            Self::Array(array) => Ok(array.get()),
            Self::Indexer(i) => i.get(),
            Self::Host(host) => Ok(host.get().unwrap_or_else(|| self.clone().into())),
            _ => Ok(self.clone().into()),
        }
    }

    /// Assigns through the object and returns the assigned value.
    ///
    /// # Errors
    /// `TypeMismatch` unless the object is a variable, an array element or a
    /// host object that accepts assignment.
    pub fn set(&self, value: Value) -> EvalResult<Value> {
        match self {
            Self::Variable(v) => {
                v.set(value.clone());
                Ok(value)
            },
            Self::Indexer(i) => i.set(value),
            Self::Host(host) => host.set(value),
            _ => Err(ErrorKind::TypeMismatch),
        }
    }

    /// Returns `true` for objects that can stand on the left of `=`.
    #[must_use]
    pub const fn is_settable(&self) -> bool {
        matches!(self, Self::Variable(_) | Self::Indexer(_) | Self::Host(_))
    }

    /// Calls the object with `params`: `empty` for no arguments, a single
    /// value, or an array holding several arguments.
    ///
    /// Calling a class binds constructor arguments and yields the bound
    /// class; `new` then instantiates it.
    ///
    /// # Errors
    /// `TypeMismatch` for objects that are not callable, otherwise whatever
    /// the callee reports.
    pub fn call(&self, params: Value) -> EvalResult<Value> {
        match self {
            Self::Variable(v) => v.held_object()?.call(params),
            Self::Indexer(i) => i.element_object()?.call(params),
            Self::Builtin(builtin) => builtin.call(params),
            Self::Function(function) => function.call(params),
            Self::Class(class) => Ok(Self::Class(Rc::new(class.bind(params))).into()),
            Self::Functional(functional) => functional.call(params),
            Self::Host(host) => host.call(params),
            Self::Array(_) | Self::Instance(_) => Err(ErrorKind::TypeMismatch),
        }
    }

    /// Looks up a member (`obj.name`).
    ///
    /// # Errors
    /// `UnknownVariable` for a missing instance member; `TypeMismatch` for
    /// objects without members.
    pub fn item(&self, name: &str) -> EvalResult<Value> {
        match self {
            Self::Variable(v) => v.held_object()?.item(name),
            Self::Indexer(i) => i.element_object()?.item(name),
            Self::Instance(instance) => instance.item(name),
            Self::Host(host) => host.item(name),
            _ => Err(ErrorKind::TypeMismatch),
        }
    }

    /// Indexes the object (`obj[i]`). The result is an assignable reference
    /// where the object supports one.
    ///
    /// # Errors
    /// `InvalidArgument` for an out-of-bounds or non-integer array index;
    /// `TypeMismatch` for objects that cannot be indexed.
    pub fn index(&self, index: &Value) -> EvalResult<Value> {
        match self {
            Self::Variable(v) => v.index(index),
            Self::Array(array) => array.index(index),
            Self::Indexer(i) => i.index(index),
            Self::Host(host) => host.index(index),
            _ => Err(ErrorKind::TypeMismatch),
        }
    }

    /// Identity comparison.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Variable(a), Self::Variable(b)) => a.ptr_eq(b),
            (Self::Array(a), Self::Array(b)) => a.ptr_eq(b),
            (Self::Indexer(a), Self::Indexer(b)) => a.ptr_eq(b),
            (Self::Builtin(a), Self::Builtin(b)) => std::ptr::eq(*a, *b),
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            (Self::Class(a), Self::Class(b)) => Rc::ptr_eq(a, b),
            (Self::Instance(a), Self::Instance(b)) => Rc::ptr_eq(a, b),
            (Self::Functional(a), Self::Functional(b)) => Rc::ptr_eq(a, b),
            (Self::Host(a), Self::Host(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    const fn kind_name(&self) -> &'static str {
        match self {
            Self::Variable(_) => "Variable",
            Self::Array(_) => "Array",
            Self::Indexer(_) => "Indexer",
            Self::Builtin(_) => "Builtin",
            Self::Function(_) => "Function",
            Self::Class(_) => "Class",
            Self::Instance(_) => "Instance",
            Self::Functional(_) => "Functional",
            Self::Host(_) => "Host",
        }
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({self})", self.kind_name())
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Variable(v) => match v.get() {
                Value::Object(Self::Variable(inner)) if inner.ptr_eq(v) => Ok(()),
                value => write!(f, "{value}"),
            },
            Self::Array(array) => write!(f, "{array}"),
            Self::Indexer(i) => match i.get() {
                Ok(value) => write!(f, "{value}"),
                Err(_) => Ok(()),
            },
            Self::Builtin(builtin) => write!(f, "{}", builtin.name),
            Self::Function(function) => write!(f, "{function}"),
            Self::Class(class) => write!(f, "{class}"),
            Self::Instance(_) => write!(f, "instance"),
            Self::Functional(functional) => write!(f, "{functional}"),
            Self::Host(host) => match host.get() {
                Some(value) => write!(f, "{value}"),
                None => write!(f, "{}", host.describe()),
            },
        }
    }
}
