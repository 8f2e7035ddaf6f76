use std::{cell::Cell, collections::HashSet};

use tracing::{debug, trace, warn};

use crate::{
    error::{ErrorKind, ScriptError},
    interpreter::{
        context::Context,
        evaluator::operators::{Action, Assoc, Deref, Level, OpInfo, operators},
        lexer::{Lexer, Op, Token},
        object::{array::Array, variable::Variable},
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or the
/// `ErrorKind` describing the failure. Positions are attached once, when the
/// error leaves [`Engine::eval`].
pub type EvalResult<T> = Result<T, ErrorKind>;

/// Default bound on nested calls, instantiations, brackets and other nested
/// constructs.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Resource limits applied to one engine and to every function and class it
/// creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Deepest allowed nesting of calls, instantiations, bracketed
    /// sub-expressions, prefix and right-associative operators, `if`, `for`
    /// and function literals. Exceeding it fails with `RecursionLimit`.
    pub max_depth:      usize,
    /// Most iterations a single `for` loop may run; `None` is unbounded.
    /// Exceeding it fails with `IterationLimit`.
    pub max_iterations: Option<u64>,
}

impl Default for Limits {
    fn default() -> Self {
        Self { max_depth:      DEFAULT_MAX_DEPTH,
               max_iterations: None, }
    }
}

thread_local! {
    static DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// Counts one level of nesting for as long as it is alive.
pub(crate) struct DepthGuard;

impl DepthGuard {
    /// Enters one nesting level.
    ///
    /// # Errors
    /// `RecursionLimit` if `max_depth` levels are already open.
    pub(crate) fn enter(max_depth: usize) -> EvalResult<Self> {
        DEPTH.with(|depth| {
                 if depth.get() >= max_depth {
                     warn!(max_depth, "nesting limit reached");
                     return Err(ErrorKind::RecursionLimit);
                 }
                 depth.set(depth.get() + 1);
                 Ok(Self)
             })
    }
}

impl Drop for DepthGuard {
    fn drop(&mut self) {
        DEPTH.with(|depth| depth.set(depth.get().saturating_sub(1)));
    }
}

/// A script interpreter with its own variable scopes.
///
/// Each call to [`Engine::eval`] runs in a fresh scope layered over the
/// engine's front frame, so names a script creates do not outlive the call.
/// Values registered with [`Engine::add`] live in the front frame and are
/// visible to every evaluation.
///
/// # Example
/// ```
/// use cinder::interpreter::{evaluator::core::Engine, value::core::Value};
///
/// let mut engine = Engine::new();
/// engine.add("rate", Value::Int(3));
///
/// let result = engine.eval("x = 14; x * rate").unwrap();
/// assert_eq!(result, Value::Int(42));
///
/// // `x` was local to the previous evaluation.
/// assert_eq!(engine.eval("x").unwrap(), Value::Empty);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Engine {
    context: Context,
    limits:  Limits,
}

impl Engine {
    /// Creates an engine with default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with the given limits.
    #[must_use]
    pub fn with_limits(limits: Limits) -> Self {
        Self { context: Context::new(),
               limits }
    }

    /// Creates an engine over an existing context.
    pub(crate) const fn with_context(context: Context, limits: Limits) -> Self {
        Self { context, limits }
    }

    /// The limits this engine applies.
    #[must_use]
    pub const fn limits(&self) -> Limits {
        self.limits
    }

    /// Registers a host value under `name` in the front frame.
    ///
    /// Objects are bound as they are. Scalars are wrapped in a variable cell,
    /// so scripts can assign the name.
    pub fn add(&mut self, name: &str, value: impl Into<Value>) {
        let value = match value.into() {
            object @ Value::Object(_) => object,
            scalar => Variable::new(scalar).into(),
        };
        trace!(name, "binding host value");
        self.context.bind(name, value);
    }

    /// Evaluates a script and returns the value of its last statement,
    /// dereferenced.
    ///
    /// # Errors
    /// A [`ScriptError`] carrying the error kind, the byte offset of the
    /// offending token and its line number.
    pub fn eval(&mut self, source: &str) -> Result<Value, ScriptError> {
        trace!(len = source.len(), "evaluating script");
        self.context.push();
        let result = execute(&mut self.context, source, self.limits);
        self.context.pop();
        result
    }
}

/// Runs `source` directly in `context`, without opening a scope.
///
/// Class bodies use this so the names they define remain in the context that
/// becomes the instance.
pub(crate) fn execute(context: &mut Context,
                      source: &str,
                      limits: Limits)
                      -> Result<Value, ScriptError> {
    let mut evaluator = Evaluator::new(source, context, limits);
    evaluator.run().map_err(|kind| {
                       let error = ScriptError::new(kind, source, evaluator.lexer.state());
                       debug!(%error, position = error.position, "evaluation failed");
                       error
                   })
}

/// The single-pass parser-evaluator.
///
/// There is no syntax tree: each `parse_*` method consumes tokens and
/// computes the value of what it consumed in the same step. With `skip` set
/// it consumes the same tokens without any effect, which is how untaken
/// branches, short-circuited operands, loop clauses and function bodies are
/// stepped over. Names seen while skipping are collected in `captures`.
pub(crate) struct Evaluator<'src, 'ctx> {
    pub(crate) lexer:    Lexer<'src>,
    pub(crate) context:  &'ctx mut Context,
    pub(crate) captures: HashSet<String>,
    pub(crate) limits:   Limits,
}

impl<'src, 'ctx> Evaluator<'src, 'ctx> {
    pub(crate) fn new(source: &'src str, context: &'ctx mut Context, limits: Limits) -> Self {
        Self { lexer: Lexer::new(source),
               context,
               captures: HashSet::new(),
               limits }
    }

    /// Evaluates the whole source.
    fn run(&mut self) -> EvalResult<Value> {
        if self.lexer.init()? == &Token::End {
            return Ok(Value::Empty);
        }
        let value = self.parse(Level::Script, false)?;
        if !self.lexer.at_end() {
            return Err(ErrorKind::SyntaxError);
        }
        value.deref()
    }

    /// Parses and evaluates one expression at `level`.
    pub(crate) fn parse(&mut self, level: Level, skip: bool) -> EvalResult<Value> {
        match level {
            Level::Statement => self.parse_statement(skip),
            Level::Unary => self.parse_unary(skip),
            Level::Primary => self.parse_primary(skip),
            _ => self.parse_binary(level, skip),
        }
    }

    /// Left operand at the next level, then operators of this level for as
    /// long as they appear.
    fn parse_binary(&mut self, level: Level, skip: bool) -> EvalResult<Value> {
        let mut result = self.parse(level.next(), skip)?;
        while let Some(info) = self.operator(level) {
            result = self.apply(level, info, result, skip)?;
        }
        Ok(result)
    }

    /// The operator table entry for the current token at `level`.
    fn operator(&self, level: Level) -> Option<&'static OpInfo> {
        let op = self.lexer.token().op()?;
        operators(level).iter().find(|info| info.op == op)
    }

    /// Parses the right operand of `info` and applies it to `left`.
    fn apply(&mut self,
             level: Level,
             info: &'static OpInfo,
             left: Value,
             skip: bool)
             -> EvalResult<Value> {
        let action = match info.action {
            Action::Apply(action) => action,
            Action::Conditional => {
                self.lexer.next()?;
                return self.parse_if(Level::Logical, &left, skip);
            },
            Action::And | Action::Or => {
                self.lexer.next()?;
                return self.parse_logical(info.action, level, &left, skip);
            },
        };

        let right = match info.op {
            // The bracket is left for the primary parser, which reads the
            // whole group.
            Op::LParen | Op::LBracket => self.parse(level.next(), skip)?,
            Op::Member => {
                let name = self.lexer.member().unwrap_or_default().to_string();
                self.lexer.next()?;
                Value::Str(name)
            },
            Op::Increment | Op::Decrement if level == Level::Functional => {
                self.lexer.next()?;
                Value::Empty
            },
            Op::Semicolon => {
                self.lexer.next()?;
                if self.at_statement_end() {
                    return Ok(left);
                }
                self.parse(level.next(), skip)?
            },
            _ => {
                self.lexer.next()?;
                match info.assoc {
                    Assoc::Right => {
                        let _depth = DepthGuard::enter(self.limits.max_depth)?;
                        self.parse(level, skip)?
                    },
                    Assoc::Left => self.parse(level.next(), skip)?,
                }
            },
        };

        if skip {
            return Ok(Value::Empty);
        }
        let (left, right) = match info.deref {
            Deref::None => (left, right),
            Deref::Right => (left, right.deref()?),
            Deref::Both => (left.deref()?, right.deref()?),
        };
        action(left, right)
    }

    /// Returns `true` where an empty statement may end: before another `;`,
    /// a closing brace or the end of input.
    fn at_statement_end(&self) -> bool {
        self.lexer.at_end()
        || self.lexer.is(Op::Semicolon)
        || self.lexer.is(Op::RBrace)
        || self.lexer.is(Op::RParen)
    }

    /// A comma list becomes an array of the dereferenced items.
    fn parse_statement(&mut self, skip: bool) -> EvalResult<Value> {
        let first = self.parse(Level::Assignment, skip)?;
        if !self.lexer.is(Op::Comma) {
            return Ok(first);
        }

        let mut items = Vec::new();
        if !skip {
            items.push(first.deref()?);
        }
        while self.lexer.is(Op::Comma) {
            self.lexer.next()?;
            let item = self.parse(Level::Assignment, skip)?;
            if !skip {
                items.push(item.deref()?);
            }
        }
        Ok(if skip { Value::Empty } else { Array::new(items).into() })
    }

    /// Prefix operators; the left operand of a prefix operator is `empty`.
    fn parse_unary(&mut self, skip: bool) -> EvalResult<Value> {
        if self.lexer.at_end() {
            return Err(ErrorKind::UnexpectedEndOfInput);
        }
        match self.operator(Level::Unary) {
            Some(info) => self.apply(Level::Unary, info, Value::Empty, skip),
            None => self.parse(Level::Unary.next(), skip),
        }
    }

    /// Literals, names, keyword constructs and bracketed groups.
    fn parse_primary(&mut self, skip: bool) -> EvalResult<Value> {
        match self.lexer.token().clone() {
            Token::Literal(value) => {
                self.lexer.next()?;
                Ok(if skip { Value::Empty } else { value })
            },
            Token::My => {
                self.lexer.next()?;
                if self.lexer.name().is_none() {
                    return Err(ErrorKind::SyntaxError);
                }
                self.parse_name(skip, true)
            },
            Token::Name(_) => self.parse_name(skip, false),
            Token::If => {
                let _depth = DepthGuard::enter(self.limits.max_depth)?;
                self.lexer.next()?;
                let condition = self.parse(Level::Assignment, skip)?;
                self.parse_if(Level::Assignment, &condition, skip)
            },
            Token::Sub => self.parse_function(skip, false),
            Token::Op(Op::Backslash) => self.parse_function(skip, true),
            Token::Class => self.parse_class(skip),
            Token::For => self.parse_for(skip),
            Token::Op(open @ (Op::LParen | Op::LBracket)) => self.parse_group(open, skip),
            Token::Op(Op::LBrace) => self.parse_block(skip),
            Token::End => Err(ErrorKind::UnexpectedEndOfInput),
            _ => Err(ErrorKind::SyntaxError),
        }
    }

    /// A name evaluates to its binding. While skipping it is only recorded
    /// as a possible capture.
    fn parse_name(&mut self, skip: bool, local: bool) -> EvalResult<Value> {
        let name = self.lexer.name().unwrap_or_default().to_string();
        self.lexer.next()?;
        if skip {
            self.captures.insert(name);
            return Ok(Value::Empty);
        }
        Ok(self.context.resolve(&name, local))
    }
}
