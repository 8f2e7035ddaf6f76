use std::{fmt, rc::Rc};

use tracing::trace;

use crate::{
    error::ErrorKind,
    interpreter::{
        context::Context,
        evaluator::core::{DepthGuard, EvalResult, Limits, execute},
        object::{core::Object, function::bind_parameters},
        value::core::Value,
    },
};

/// An `object` literal.
///
/// Calling the class binds constructor arguments and yields a new bound
/// class; `new` runs the body in a fresh context and keeps that context as
/// the instance's members.
#[derive(Clone)]
pub struct UserClass {
    params:    Vec<String>,
    body:      String,
    captured:  Context,
    limits:    Limits,
    arguments: Value,
}

impl UserClass {
    /// Creates an unbound class.
    #[must_use]
    pub const fn new(params: Vec<String>, body: String, captured: Context, limits: Limits) -> Self {
        Self { params,
               body,
               captured,
               limits,
               arguments: Value::Empty }
    }

    /// Returns a copy of the class bound to constructor arguments.
    #[must_use]
    pub fn bind(&self, arguments: Value) -> Self {
        Self { arguments,
               ..self.clone() }
    }

    /// Instantiates the class.
    ///
    /// # Errors
    /// `RecursionLimit` when instantiation nests too deeply,
    /// `BadParameterCount` on an argument mismatch, and any error raised by
    /// the body.
    pub fn create(&self) -> EvalResult<Value> {
        let _depth = DepthGuard::enter(self.limits.max_depth)?;
        trace!(body = %self.body, "instantiating object");

        let mut members = self.captured.clone();
        bind_parameters(&mut members, &self.params, self.arguments.clone())?;
        execute(&mut members, &self.body, self.limits).map_err(ErrorKind::from)?;
        Ok(Object::Instance(Rc::new(Instance { members })).into())
    }
}

impl fmt::Display for UserClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "object({}) {{{}}}", self.params.join(", "), self.body)
    }
}

/// An instantiated object. Its members are the variables its class body
/// defined, plus its constructor parameters and captured variables.
pub struct Instance {
    members: Context,
}

impl Instance {
    /// Looks up a member by name.
    ///
    /// # Errors
    /// `UnknownVariable` if the instance has no such member.
    pub fn item(&self, name: &str) -> EvalResult<Value> {
        self.members
            .lookup(name)
            .ok_or_else(|| ErrorKind::UnknownVariable { name: name.to_string() })
    }
}
