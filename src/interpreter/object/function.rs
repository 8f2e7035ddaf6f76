use std::fmt;

use tracing::trace;

use crate::{
    error::ErrorKind,
    interpreter::{
        context::Context,
        evaluator::core::{DepthGuard, Engine, EvalResult, Limits},
        object::{array::Array, core::Object, variable::Variable},
        value::core::Value,
    },
};

/// Number of arguments a built-in accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly this many arguments.
    Exact(usize),
    /// Any number of arguments.
    Variadic,
}

/// Signature of a native function. Arguments arrive dereferenced.
pub type NativeFn = fn(&[Value]) -> EvalResult<Value>;

/// A native function exposed to scripts under a global name.
pub struct BuiltinFunction {
    /// The global name.
    pub name:  &'static str,
    /// Accepted argument count.
    pub arity: Arity,
    /// The implementation.
    pub func:  NativeFn,
}

impl BuiltinFunction {
    /// Unpacks `params` into an argument list, checks the count and invokes
    /// the function.
    ///
    /// An array supplies one argument per element. `empty` supplies no
    /// arguments, except to a one-argument function, which receives it as
    /// its argument. Any other value is a single argument.
    ///
    /// # Errors
    /// `BadParameterCount` when the count does not match the arity; anything
    /// the function itself reports.
    pub fn call(&self, params: Value) -> EvalResult<Value> {
        let args = match params {
            Value::Object(Object::Array(list)) => list.to_vec(),
            Value::Empty if self.arity != Arity::Exact(1) => Vec::new(),
            single => vec![single],
        };
        if let Arity::Exact(count) = self.arity
           && args.len() != count
        {
            return Err(ErrorKind::BadParameterCount);
        }
        (self.func)(&args)
    }
}

/// Binds call arguments as fresh variables in the front frame of `context`.
///
/// With no declared parameters the whole argument value is bound to `@`.
/// Otherwise the arguments are spread over the names, and their count must
/// match; a single parameter called with no arguments receives `empty`.
///
/// # Errors
/// `BadParameterCount` when the counts differ.
pub fn bind_parameters(context: &mut Context, names: &[String], params: Value) -> EvalResult<()> {
    match names {
        [] => context.bind("@", Variable::new(params).into()),
        [name] if params.is_empty() => context.bind(name, Variable::default().into()),
        _ => {
            let values = Array::from_value(&params).to_vec();
            if values.len() != names.len() {
                return Err(ErrorKind::BadParameterCount);
            }
            for (name, value) in names.iter().zip(values) {
                context.bind(name, Variable::new(value).into());
            }
        },
    }
    Ok(())
}

/// A function literal: parameter names, the verbatim body text, and the
/// variables captured where it was defined.
///
/// The body is re-parsed on every call in a fresh engine whose context starts
/// from the captured variables.
pub struct UserFunction {
    params:   Vec<String>,
    body:     String,
    captured: Context,
    limits:   Limits,
}

impl UserFunction {
    /// Creates a function value.
    #[must_use]
    pub const fn new(params: Vec<String>, body: String, captured: Context, limits: Limits) -> Self {
        Self { params,
               body,
               captured,
               limits }
    }

    /// The body text.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Invokes the function.
    ///
    /// # Errors
    /// `RecursionLimit` when calls nest too deeply, `BadParameterCount` on an
    /// argument mismatch, and any error raised by the body.
    pub fn call(&self, params: Value) -> EvalResult<Value> {
        let _depth = DepthGuard::enter(self.limits.max_depth)?;
        trace!(body = %self.body, "calling function");

        let mut context = self.captured.clone();
        bind_parameters(&mut context, &self.params, params)?;
        Engine::with_context(context, self.limits).eval(&self.body)
                                                  .map_err(ErrorKind::from)
    }
}

impl fmt::Display for UserFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub({}) {}", self.params.join(", "), self.body)
    }
}

/// Which list combinator a [`Functional`] applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionalKind {
    /// Left fold using the first element as the seed.
    Fold,
    /// Applies the function to every element.
    Map,
    /// Keeps the elements the function finds truthy.
    Filter,
}

/// A function wrapped by `fold`, `map` or `filter`, waiting for the list to
/// apply it to: `map(f)(list)`.
pub struct Functional {
    kind:     FunctionalKind,
    function: Object,
}

impl Functional {
    /// Wraps `function`.
    #[must_use]
    pub const fn new(kind: FunctionalKind, function: Object) -> Self {
        Self { kind, function }
    }

    /// Applies the combinator to `params`, viewed as a list.
    ///
    /// # Errors
    /// Propagates errors from the wrapped function.
    pub fn call(&self, params: Value) -> EvalResult<Value> {
        let items = Array::from_value(&params).to_vec();
        match self.kind {
            FunctionalKind::Fold => {
                let mut items = items.into_iter();
                let Some(mut acc) = items.next() else {
                    return Ok(Value::Empty);
                };
                for item in items {
                    acc = self.function
                              .call(Array::new(vec![acc, item]).into())?
                              .deref()?;
                }
                Ok(acc)
            },
            FunctionalKind::Map => {
                let mapped = items.into_iter()
                                  .map(|item| self.function.call(item)?.deref())
                                  .collect::<EvalResult<Vec<_>>>()?;
                Ok(Array::new(mapped).into())
            },
            FunctionalKind::Filter => {
                let mut kept = Vec::new();
                for item in items {
                    if self.function.call(item.clone())?.truthy()? {
                        kept.push(item);
                    }
                }
                Ok(Array::new(kept).into())
            },
        }
    }
}

impl fmt::Display for Functional {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.kind {
            FunctionalKind::Fold => "fold",
            FunctionalKind::Map => "map",
            FunctionalKind::Filter => "filter",
        };
        write!(f, "{name}({})", self.function)
    }
}
