use std::rc::Rc;

use tracing::trace;

use crate::{
    error::ErrorKind,
    interpreter::{
        evaluator::{
            core::{DepthGuard, EvalResult, Evaluator},
            operators::Level,
        },
        lexer::Op,
        object::{class::UserClass, core::Object, function::UserFunction},
        value::core::Value,
    },
};

impl Evaluator<'_, '_> {
    /// Reads the parameter list after `sub`, `fn`, `=>`, `\` or `object`.
    ///
    /// The list is optional and parenthesized: `sub(a, b)`. After `\` the
    /// names may also follow without parentheses. A lone `@` declares no
    /// parameters, so the whole argument is bound to `@`.
    fn parse_parameters(&mut self, bare: bool) -> EvalResult<Vec<String>> {
        self.lexer.next()?;
        let parenthesized = self.lexer.is(Op::LParen);
        if !parenthesized && !bare {
            return Ok(Vec::new());
        }
        if parenthesized {
            self.lexer.next()?;
        }

        let mut names = Vec::new();
        while let Some(name) = self.lexer.name() {
            names.push(name.to_string());
            self.lexer.next()?;
            if !self.lexer.is(Op::Comma) {
                break;
            }
            self.lexer.next()?;
        }
        if names == ["@"] {
            names.clear();
        }

        if parenthesized {
            self.lexer.check_pair(Op::LParen)?;
        }
        Ok(names)
    }

    /// A function literal. The body is one expression at assignment level;
    /// it is stepped over to find its extent and the names it mentions, and
    /// stored as text.
    pub(crate) fn parse_function(&mut self, skip: bool, bare: bool) -> EvalResult<Value> {
        let _depth = DepthGuard::enter(self.limits.max_depth)?;
        let params = self.parse_parameters(bare)?;
        if self.lexer.at_end() {
            return Err(ErrorKind::SyntaxError);
        }

        let start = self.lexer.state();
        if !skip {
            self.captures.clear();
        }
        self.parse(Level::Assignment, true)?;
        if skip {
            return Ok(Value::Empty);
        }

        let body = self.lexer.content(start, self.lexer.state()).trim_end().to_string();
        let captured = self.context.capture(&self.captures);
        trace!(params = ?params, body = %body, "defined function");
        Ok(Object::Function(Rc::new(UserFunction::new(params, body, captured, self.limits))).into())
    }

    /// An `object` literal: `object(params) { body }` or `object expr`.
    pub(crate) fn parse_class(&mut self, skip: bool) -> EvalResult<Value> {
        let _depth = DepthGuard::enter(self.limits.max_depth)?;
        let params = self.parse_parameters(false)?;
        let braced = self.lexer.is(Op::LBrace);
        if braced {
            self.lexer.next()?;
        }
        if self.lexer.at_end() {
            return Err(if braced {
                           ErrorKind::MissingCharacter { expected: '}' }
                       } else {
                           ErrorKind::SyntaxError
                       });
        }

        let start = self.lexer.state();
        if !skip {
            self.captures.clear();
        }
        if !braced {
            self.parse(Level::Assignment, true)?;
        } else if !self.lexer.is(Op::RBrace) {
            self.parse(Level::Script, true)?;
        }
        let end = self.lexer.state();
        if braced {
            self.lexer.check_pair(Op::LBrace)?;
        }
        if skip {
            return Ok(Value::Empty);
        }

        let body = self.lexer.content(start, end).trim_end().to_string();
        let captured = self.context.capture(&self.captures);
        trace!(params = ?params, body = %body, "defined object");
        Ok(Object::Class(Rc::new(UserClass::new(params, body, captured, self.limits))).into())
    }

    /// `( statement )` or `[ statement ]`. Empty brackets yield `empty`.
    pub(crate) fn parse_group(&mut self, open: Op, skip: bool) -> EvalResult<Value> {
        let _depth = DepthGuard::enter(self.limits.max_depth)?;
        self.lexer.next()?;
        if let Some((close, _)) = open.closer()
           && self.lexer.is(close)
        {
            self.lexer.next()?;
            return Ok(Value::Empty);
        }
        let value = self.parse(Level::Statement, skip)?;
        self.lexer.check_pair(open)?;
        Ok(value)
    }

    /// `{ script }` in its own scope.
    pub(crate) fn parse_block(&mut self, skip: bool) -> EvalResult<Value> {
        let _depth = DepthGuard::enter(self.limits.max_depth)?;
        self.lexer.next()?;
        if self.lexer.is(Op::RBrace) {
            self.lexer.next()?;
            return Ok(Value::Empty);
        }
        self.context.push();
        let value = self.parse(Level::Script, skip);
        self.context.pop();
        let value = value?;
        self.lexer.check_pair(Op::LBrace)?;
        Ok(value)
    }
}
