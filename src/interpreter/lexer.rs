use logos::Logos;

use crate::{
    error::ErrorKind,
    interpreter::{
        evaluator::core::EvalResult,
        value::{core::Value, date::parse_date},
    },
};

/// Operator and punctuation symbols.
///
/// `Member` and `New` are never produced as `Token::Op`; they stand for the
/// `.name` and `new` tokens when the operator table is searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
    /// `^`
    Pow,
    /// `~`
    BitNot,
    /// `!`
    Not,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `=`
    Assign,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `&`
    BitAnd,
    /// `&&`
    And,
    /// `|`
    BitOr,
    /// `||`
    Or,
    /// `?`
    Question,
    /// `:`
    Colon,
    /// `:=`
    Bind,
    /// `;`
    Semicolon,
    /// `,`
    Comma,
    /// `++`
    Increment,
    /// `--`
    Decrement,
    /// `+=`
    AddAssign,
    /// `-=`
    SubAssign,
    /// `*=`
    MulAssign,
    /// `/=`
    DivAssign,
    /// `\`
    Backslash,
    /// `\=`
    BackslashAssign,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `.name`
    Member,
    /// `new`
    New,
}

impl Op {
    /// Returns the closing symbol matching an opening bracket.
    #[must_use]
    pub const fn closer(self) -> Option<(Self, char)> {
        match self {
            Self::LParen => Some((Self::RParen, ')')),
            Self::LBracket => Some((Self::RBracket, ']')),
            Self::LBrace => Some((Self::RBrace, '}')),
            _ => None,
        }
    }
}

/// Represents a lexical token in the source input.
///
/// Literal micro-grammars (numbers, quoted strings and `#date#` literals) are
/// scanned by hand in callbacks that bump the lexer past the literal.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = ErrorKind)]
pub enum Token {
    /// Numeric, string and date literals.
    #[regex(r"[0-9]", number_literal)]
    #[token("\"", |lex| quoted_literal(lex, '"'))]
    #[token("'", |lex| quoted_literal(lex, '\''))]
    #[token("#", date_literal)]
    Literal(Value),
    /// Identifier tokens; variable or function names such as `x` or `@`.
    #[regex(r"[A-Za-z_@][A-Za-z0-9_]*", |lex| lex.slice().to_string())]
    Name(String),
    /// Member access written as `.name`; carries the member name.
    #[regex(r"\.[A-Za-z_@][A-Za-z0-9_]*", |lex| lex.slice()[1..].to_string())]
    Member(String),
    /// `for`
    #[token("for")]
    For,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `sub`, `fn` or `=>`
    #[token("sub")]
    #[token("fn")]
    #[token("=>")]
    Sub,
    /// `object`
    #[token("object")]
    Class,
    /// `new`
    #[token("new")]
    New,
    /// `my`
    #[token("my")]
    My,
    /// Operators and punctuation.
    #[token("+", |_| Op::Add)]
    #[token("-", |_| Op::Sub)]
    #[token("*", |_| Op::Mul)]
    #[token("/", |_| Op::Div)]
    #[token("%", |_| Op::Mod)]
    #[token("^", |_| Op::Pow)]
    #[token("~", |_| Op::BitNot)]
    #[token("!", |_| Op::Not)]
    #[token("<", |_| Op::Less)]
    #[token("<=", |_| Op::LessEqual)]
    #[token(">", |_| Op::Greater)]
    #[token(">=", |_| Op::GreaterEqual)]
    #[token("=", |_| Op::Assign)]
    #[token("==", |_| Op::Equal)]
    #[token("!=", |_| Op::NotEqual)]
    #[token("&", |_| Op::BitAnd)]
    #[token("&&", |_| Op::And)]
    #[token("|", |_| Op::BitOr)]
    #[token("||", |_| Op::Or)]
    #[token("?", |_| Op::Question)]
    #[token(":", |_| Op::Colon)]
    #[token(":=", |_| Op::Bind)]
    #[token(";", |_| Op::Semicolon)]
    #[token(",", |_| Op::Comma)]
    #[token("++", |_| Op::Increment)]
    #[token("--", |_| Op::Decrement)]
    #[token("+=", |_| Op::AddAssign)]
    #[token("-=", |_| Op::SubAssign)]
    #[token("*=", |_| Op::MulAssign)]
    #[token("/=", |_| Op::DivAssign)]
    #[token("\\", |_| Op::Backslash)]
    #[token("\\=", |_| Op::BackslashAssign)]
    #[token("(", |_| Op::LParen)]
    #[token(")", |_| Op::RParen)]
    #[token("{", |_| Op::LBrace)]
    #[token("}", |_| Op::RBrace)]
    #[token("[", |_| Op::LBracket)]
    #[token("]", |_| Op::RBracket)]
    Op(Op),
    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip, allow_greedy = true)]
    Comment,
    /// Whitespace.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
    /// End of input. A NUL character also terminates the script.
    #[token("\0")]
    End,
}

impl Token {
    /// Returns the operator this token stands for in the operator table.
    #[must_use]
    pub const fn op(&self) -> Option<Op> {
        match self {
            Self::Op(op) => Some(*op),
            Self::Member(_) => Some(Op::Member),
            Self::New => Some(Op::New),
            _ => None,
        }
    }
}

/// Scans a number starting with the digit just matched.
///
/// Accepts decimal integers, `0x` hexadecimal integers, decimal fractions and
/// an exponent introduced by `e`, `E`, `d` or `D` with an optional sign.
/// Integer digits are accumulated with an overflow check; fraction digits that
/// would overflow are dropped, leaving a best-effort double.
fn number_literal(lex: &mut logos::Lexer<Token>) -> Result<Value, ErrorKind> {
    #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    enum Stage {
        Integer,
        Fraction,
        Exponent,
        ExponentDigits,
        Hex,
    }

    let first = lex.slice().as_bytes()[0];
    let rest = lex.remainder().as_bytes();

    let mut stage = Stage::Integer;
    let mut base: i64 = 10;
    let mut mantissa = i64::from(first - b'0');
    let mut scale: i32 = 0;
    let mut exponent: i32 = 0;
    let mut exponent_sign: i32 = 1;
    let mut fraction_full = false;
    let mut consumed = 0;

    if first == b'0' && matches!(rest.first(), Some(b'x' | b'X')) {
        stage = Stage::Hex;
        base = 16;
        consumed = 1;
    }

    let accumulate = |mantissa: i64, digit: i64| -> Result<i64, ErrorKind> {
        if mantissa > (i64::MAX - digit) / base {
            return Err(ErrorKind::OutOfRange);
        }
        Ok(mantissa * base + digit)
    };

    while let Some(&c) = rest.get(consumed) {
        match c {
            b'0'..=b'9' => {
                let digit = i64::from(c - b'0');
                match stage {
                    Stage::Integer | Stage::Hex => mantissa = accumulate(mantissa, digit)?,
                    Stage::Fraction if !fraction_full => {
                        if mantissa > (i64::MAX - digit) / base {
                            fraction_full = true;
                        } else {
                            mantissa = mantissa * base + digit;
                            scale -= 1;
                        }
                    },
                    Stage::Exponent | Stage::ExponentDigits => {
                        stage = Stage::ExponentDigits;
                        exponent = exponent.saturating_mul(10).saturating_add(i32::from(c - b'0'));
                    },
                    Stage::Fraction => {},
                }
            },
            b'a'..=b'f' | b'A'..=b'F' if stage == Stage::Hex => {
                let digit = i64::from(c.to_ascii_uppercase() - b'A') + 10;
                mantissa = accumulate(mantissa, digit)?;
            },
            b'.' if stage == Stage::Integer => stage = Stage::Fraction,
            b'e' | b'E' | b'd' | b'D' if stage <= Stage::Fraction => stage = Stage::Exponent,
            b'+' | b'-' if stage == Stage::Exponent => {
                exponent_sign = if c == b'-' { -1 } else { 1 };
                stage = Stage::ExponentDigits;
            },
            _ => break,
        }
        consumed += 1;
    }
    lex.bump(consumed);

    match stage {
        Stage::Exponent => Err(ErrorKind::SyntaxError),
        Stage::Integer | Stage::Hex => Ok(Value::Int(mantissa)),
        Stage::Fraction | Stage::ExponentDigits => {
            let power = scale.saturating_add(exponent_sign * exponent);
            #[allow(clippy::cast_precision_loss)]
            let mantissa = mantissa as f64;
            Ok(Value::Double(if power < 0 {
                                 mantissa / 10_f64.powi(-power)
                             } else {
                                 mantissa * 10_f64.powi(power)
                             }))
        },
    }
}

/// Scans a quoted string. A doubled quote inside the literal stands for one
/// quote character.
fn quoted_literal(lex: &mut logos::Lexer<Token>, quote: char) -> Result<Value, ErrorKind> {
    let mut text = String::new();
    loop {
        let rest = lex.remainder();
        let end = rest.find(quote)
                      .ok_or(ErrorKind::MissingCharacter { expected: quote })?;
        text.push_str(&rest[..end]);
        lex.bump(end + quote.len_utf8());

        if !lex.remainder().starts_with(quote) {
            break;
        }
        text.push(quote);
        lex.bump(quote.len_utf8());
    }
    Ok(Value::Str(text))
}

/// Scans a `#...#` literal and parses its interior with the date grammar.
fn date_literal(lex: &mut logos::Lexer<Token>) -> Result<Value, ErrorKind> {
    let rest = lex.remainder();
    let end = rest.find('#')
                  .ok_or(ErrorKind::MissingCharacter { expected: '#' })?;
    let date = parse_date(&rest[..end])?;
    lex.bump(end + 1);
    Ok(Value::Date(date))
}

/// An on-demand token stream over one source text.
///
/// The lexer holds exactly one current token. Its *state* is the byte offset
/// where that token starts; [`Lexer::set_state`] jumps back to a saved state
/// and re-lexes the token found there, which is how loop clauses are
/// evaluated repeatedly without building a tree.
pub struct Lexer<'src> {
    source: &'src str,
    inner:  logos::Lexer<'src, Token>,
    token:  Token,
    state:  usize,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned before the first token. Call
    /// [`Lexer::init`] to read it.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { source,
               inner: Token::lexer(source),
               token: Token::End,
               state: 0 }
    }

    /// Rewinds to the start of the source and reads the first token.
    pub fn init(&mut self) -> EvalResult<&Token> {
        self.set_state(0)
    }

    /// Advances to the next token.
    ///
    /// # Errors
    /// Propagates literal errors (`MissingCharacter`, `OutOfRange`,
    /// `SyntaxError`) and `SyntaxError` for characters outside the language.
    pub fn next(&mut self) -> EvalResult<&Token> {
        match self.inner.next() {
            None => {
                self.state = self.source.len();
                self.token = Token::End;
            },
            Some(token) => {
                self.state = self.inner.span().start;
                self.token = token?;
            },
        }
        Ok(&self.token)
    }

    /// Repositions the cursor at a previously saved state and re-lexes the
    /// token there.
    pub fn set_state(&mut self, state: usize) -> EvalResult<&Token> {
        self.inner = Token::lexer(self.source);
        self.inner.bump(state.min(self.source.len()));
        self.next()
    }

    /// Byte offset where the current token starts.
    #[must_use]
    pub const fn state(&self) -> usize {
        self.state
    }

    /// The current token.
    #[must_use]
    pub const fn token(&self) -> &Token {
        &self.token
    }

    /// Returns whether the current token is the given operator symbol.
    #[must_use]
    pub fn is(&self, op: Op) -> bool {
        self.token == Token::Op(op)
    }

    /// Returns whether the input is exhausted.
    #[must_use]
    pub fn at_end(&self) -> bool {
        self.token == Token::End
    }

    /// The name carried by the current token, if it is a name.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match &self.token {
            Token::Name(name) => Some(name),
            _ => None,
        }
    }

    /// The member name carried by the current token, if it is `.name`.
    #[must_use]
    pub fn member(&self) -> Option<&str> {
        match &self.token {
            Token::Member(name) => Some(name),
            _ => None,
        }
    }

    /// Returns the verbatim source between two states.
    #[must_use]
    pub fn content(&self, from: usize, to: usize) -> &'src str {
        self.source.get(from..to).unwrap_or_default()
    }

    /// Requires the closer matching `opener` and steps past it.
    ///
    /// # Errors
    /// `MissingCharacter` naming the expected closer.
    pub fn check_pair(&mut self, opener: Op) -> EvalResult<()> {
        if let Some((closer, expected)) = opener.closer() {
            if !self.is(closer) {
                return Err(ErrorKind::MissingCharacter { expected });
            }
            self.next()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(source: &str) -> EvalResult<Vec<Token>> {
        let mut lexer = Lexer::new(source);
        let mut out = vec![lexer.init()?.clone()];
        while !lexer.at_end() {
            out.push(lexer.next()?.clone());
        }
        Ok(out)
    }

    #[test]
    fn numbers() {
        assert_eq!(tokens("42").unwrap()[0], Token::Literal(Value::Int(42)));
        assert_eq!(tokens("0x1F").unwrap()[0], Token::Literal(Value::Int(31)));
        assert_eq!(tokens("4.7").unwrap()[0], Token::Literal(Value::Double(4.7)));
        assert_eq!(tokens("15e-1").unwrap()[0], Token::Literal(Value::Double(1.5)));
        assert_eq!(tokens("2D3").unwrap()[0], Token::Literal(Value::Double(2000.0)));
        assert_eq!(tokens("1e"), Err(ErrorKind::SyntaxError));
        assert_eq!(tokens("99999999999999999999"), Err(ErrorKind::OutOfRange));
    }

    #[test]
    fn strings_and_dates() {
        assert_eq!(tokens(r#""say ""hi""""#).unwrap()[0],
                   Token::Literal(Value::Str("say \"hi\"".into())));
        assert_eq!(tokens("'it''s'").unwrap()[0], Token::Literal(Value::Str("it's".into())));
        assert_eq!(tokens("\"open"),
                   Err(ErrorKind::MissingCharacter { expected: '"' }));
        assert_eq!(tokens("#1.1.2000"),
                   Err(ErrorKind::MissingCharacter { expected: '#' }));
        assert!(matches!(tokens("#16.10.1974#").unwrap()[0], Token::Literal(Value::Date(_))));
    }

    #[test]
    fn operators_keywords_and_members() {
        assert_eq!(tokens("a.b += my").unwrap(),
                   vec![Token::Name("a".into()),
                        Token::Member("b".into()),
                        Token::Op(Op::AddAssign),
                        Token::My,
                        Token::End]);
        assert_eq!(tokens("fn => sub").unwrap(),
                   vec![Token::Sub, Token::Sub, Token::Sub, Token::End]);
        assert_eq!(tokens("for(;;)").unwrap().len(), 6);
        assert_eq!(tokens("x // note\n+1").unwrap().len(), 4);
    }

    #[test]
    fn set_state_relexes() {
        let mut lexer = Lexer::new("a + b");
        lexer.init().unwrap();
        lexer.next().unwrap();
        let plus = lexer.state();
        lexer.next().unwrap();
        assert_eq!(lexer.name(), Some("b"));
        lexer.set_state(plus).unwrap();
        assert!(lexer.is(Op::Add));
    }
}
