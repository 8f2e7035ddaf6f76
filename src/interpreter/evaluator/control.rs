use tracing::warn;

use crate::{
    error::ErrorKind,
    interpreter::{
        evaluator::{
            core::{DepthGuard, EvalResult, Evaluator},
            operators::{Action, Level},
        },
        lexer::{Op, Token},
        value::core::Value,
    },
};

impl Evaluator<'_, '_> {
    /// Evaluates the branches of `if cond a else b` and `cond ? a : b`.
    ///
    /// The condition has already been evaluated. Both branches are parsed at
    /// `level`; the untaken one is skipped. Without an `else`/`:` branch a
    /// false condition yields `empty`.
    pub(crate) fn parse_if(&mut self,
                           level: Level,
                           condition: &Value,
                           skip: bool)
                           -> EvalResult<Value> {
        let taken = !skip && condition.truthy()?;

        let mut result = self.parse(level, skip || !taken)?;
        if !taken {
            result = Value::Empty;
        }

        if matches!(self.lexer.token(), Token::Else) || self.lexer.is(Op::Colon) {
            self.lexer.next()?;
            let otherwise = self.parse(level, skip || taken)?;
            if !skip && !taken {
                result = otherwise;
            }
        }
        Ok(result)
    }

    /// Evaluates the right side of `&&` or `||`.
    ///
    /// The right operand is only evaluated when the left one does not decide
    /// the result. The result is always `true` (-1) or `false` (0).
    pub(crate) fn parse_logical(&mut self,
                                action: Action,
                                level: Level,
                                left: &Value,
                                skip: bool)
                                -> EvalResult<Value> {
        if skip {
            self.parse(level.next(), true)?;
            return Ok(Value::Empty);
        }

        let is_or = matches!(action, Action::Or);
        if left.truthy()? == is_or {
            self.parse(level.next(), true)?;
            return Ok(Value::from(is_or));
        }
        let right = self.parse(level.next(), false)?;
        Ok(Value::from(right.truthy()?))
    }

    /// `for(init; cond; incr) body`
    ///
    /// The initializer runs once. The condition, increment and body are
    /// first stepped over, then re-evaluated from their saved states on every
    /// iteration. An empty condition counts as false. Yields the value of the
    /// last body evaluation, or `empty` if the body never ran.
    pub(crate) fn parse_for(&mut self, skip: bool) -> EvalResult<Value> {
        let _depth = DepthGuard::enter(self.limits.max_depth)?;
        self.lexer.next()?;
        self.expect(Op::LParen)?;
        self.lexer.next()?;

        if !self.lexer.is(Op::Semicolon) {
            self.parse(Level::Statement, skip)?;
            self.expect(Op::Semicolon)?;
        }
        self.lexer.next()?;

        let condition = self.clause(Op::Semicolon)?;
        self.lexer.next()?;
        let increment = self.clause(Op::RParen)?;
        self.lexer.next()?;

        let body = self.lexer.state();
        self.parse(Level::Statement, true)?;

        let Some(condition) = condition.filter(|_| !skip) else {
            return Ok(Value::Empty);
        };

        let mut result = Value::Empty;
        let mut iterations: u64 = 0;
        while self.reparse(condition)?.truthy()? {
            iterations += 1;
            if let Some(limit) = self.limits.max_iterations
               && iterations > limit
            {
                warn!(limit, "loop iteration limit reached");
                return Err(ErrorKind::IterationLimit);
            }
            result = self.reparse(body)?;
            if let Some(increment) = increment {
                self.reparse(increment)?;
            }
        }
        Ok(result)
    }

    /// Steps over an optional loop clause ending at `terminator` and returns
    /// its start state.
    fn clause(&mut self, terminator: Op) -> EvalResult<Option<usize>> {
        if self.lexer.is(terminator) {
            return Ok(None);
        }
        let start = self.lexer.state();
        self.parse(Level::Statement, true)?;
        self.expect(terminator)?;
        Ok(Some(start))
    }

    /// Evaluates the statement starting at a saved state, then returns to
    /// the current position.
    fn reparse(&mut self, state: usize) -> EvalResult<Value> {
        let resume = self.lexer.state();
        self.lexer.set_state(state)?;
        let value = self.parse(Level::Statement, false)?;
        self.lexer.set_state(resume)?;
        Ok(value)
    }

    /// Requires the current token to be `op` without consuming it.
    pub(crate) fn expect(&self, op: Op) -> EvalResult<()> {
        if self.lexer.is(op) {
            Ok(())
        } else if self.lexer.at_end() {
            Err(ErrorKind::UnexpectedEndOfInput)
        } else {
            Err(ErrorKind::SyntaxError)
        }
    }
}
