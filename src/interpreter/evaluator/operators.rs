use crate::interpreter::{
    evaluator::{
        access::{call, index, member, post_decrement, post_increment},
        binary::{
            arithmetic::{add, divide, multiply, power, remainder, subtract},
            assign::{add_assign, assign, divide_assign, multiply_assign, subtract_assign},
            comparison::{equal, greater, greater_equal, less, less_equal, not_equal},
            logic::{bit_and, bit_or, sequence},
        },
        core::EvalResult,
        unary::{bit_not, instantiate, logical_not, negate, pre_decrement, pre_increment},
    },
    lexer::Op,
    value::core::Value,
};

/// Precedence levels, loosest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    /// `;`
    Script,
    /// `,` lists
    Statement,
    /// `= += -= *= /=`
    Assignment,
    /// `? :`
    Conditional,
    /// `&& ||`
    Logical,
    /// `& |`
    Binary,
    /// `== !=`
    Equality,
    /// `< <= > >=`
    Relation,
    /// `+ -`
    Addition,
    /// `* / %`
    Multiplication,
    /// `^`
    Power,
    /// Prefix `++ -- - ~ ! new`
    Unary,
    /// Postfix `++ --`, calls, indexing and member access
    Functional,
    /// Literals, names and keyword constructs
    Primary,
}

impl Level {
    /// The next tighter level. `Primary` is its own successor.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Script => Self::Statement,
            Self::Statement => Self::Assignment,
            Self::Assignment => Self::Conditional,
            Self::Conditional => Self::Logical,
            Self::Logical => Self::Binary,
            Self::Binary => Self::Equality,
            Self::Equality => Self::Relation,
            Self::Relation => Self::Addition,
            Self::Addition => Self::Multiplication,
            Self::Multiplication => Self::Power,
            Self::Power => Self::Unary,
            Self::Unary => Self::Functional,
            Self::Functional | Self::Primary => Self::Primary,
        }
    }
}

/// Operator associativity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assoc {
    Left,
    Right,
}

/// Which operands are dereferenced before the action runs.
///
/// Operators that act on a reference (assignment targets, increments, member
/// access, `new`) keep that side as it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deref {
    None,
    Right,
    Both,
}

/// Binary operator implementation.
pub type BinaryFn = fn(Value, Value) -> EvalResult<Value>;

/// What an operator does once matched.
#[derive(Debug, Clone, Copy)]
pub enum Action {
    /// Evaluate the right operand and combine it with the left.
    Apply(BinaryFn),
    /// `cond ? a : b`; only the chosen branch is evaluated.
    Conditional,
    /// `&&`; the right operand is skipped when the left is false.
    And,
    /// `||`; the right operand is skipped when the left is true.
    Or,
}

/// One row of the operator table.
#[derive(Debug)]
pub struct OpInfo {
    pub op:     Op,
    pub assoc:  Assoc,
    pub deref:  Deref,
    pub action: Action,
}

const fn left(op: Op, deref: Deref, action: BinaryFn) -> OpInfo {
    OpInfo { op,
             assoc: Assoc::Left,
             deref,
             action: Action::Apply(action) }
}

const fn right(op: Op, deref: Deref, action: BinaryFn) -> OpInfo {
    OpInfo { op,
             assoc: Assoc::Right,
             deref,
             action: Action::Apply(action) }
}

const fn special(op: Op, action: Action) -> OpInfo {
    OpInfo { op,
             assoc: Assoc::Left,
             deref: Deref::None,
             action }
}

static SCRIPT: &[OpInfo] = &[left(Op::Semicolon, Deref::None, sequence)];

static ASSIGNMENT: &[OpInfo] = &[right(Op::Assign, Deref::Right, assign),
                                 right(Op::AddAssign, Deref::Right, add_assign),
                                 right(Op::SubAssign, Deref::Right, subtract_assign),
                                 right(Op::MulAssign, Deref::Right, multiply_assign),
                                 right(Op::DivAssign, Deref::Right, divide_assign)];

static CONDITIONAL: &[OpInfo] = &[special(Op::Question, Action::Conditional)];

static LOGICAL: &[OpInfo] = &[special(Op::And, Action::And), special(Op::Or, Action::Or)];

static BINARY: &[OpInfo] = &[left(Op::BitAnd, Deref::Both, bit_and),
                             left(Op::BitOr, Deref::Both, bit_or)];

static EQUALITY: &[OpInfo] = &[left(Op::Equal, Deref::Both, equal),
                               left(Op::NotEqual, Deref::Both, not_equal)];

static RELATION: &[OpInfo] = &[left(Op::Less, Deref::Both, less),
                               left(Op::LessEqual, Deref::Both, less_equal),
                               left(Op::Greater, Deref::Both, greater),
                               left(Op::GreaterEqual, Deref::Both, greater_equal)];

static ADDITION: &[OpInfo] = &[left(Op::Add, Deref::Both, add),
                               left(Op::Sub, Deref::Both, subtract)];

static MULTIPLICATION: &[OpInfo] = &[left(Op::Mul, Deref::Both, multiply),
                                     left(Op::Div, Deref::Both, divide),
                                     left(Op::Mod, Deref::Both, remainder)];

static POWER: &[OpInfo] = &[right(Op::Pow, Deref::Both, power)];

static UNARY: &[OpInfo] = &[right(Op::Increment, Deref::None, pre_increment),
                            right(Op::Decrement, Deref::None, pre_decrement),
                            right(Op::Sub, Deref::Right, negate),
                            right(Op::BitNot, Deref::Right, bit_not),
                            right(Op::Not, Deref::Right, logical_not),
                            right(Op::New, Deref::None, instantiate)];

static FUNCTIONAL: &[OpInfo] = &[left(Op::Increment, Deref::None, post_increment),
                                 left(Op::Decrement, Deref::None, post_decrement),
                                 left(Op::LParen, Deref::Right, call),
                                 left(Op::LBracket, Deref::Right, index),
                                 left(Op::Member, Deref::None, member)];

/// The operators recognised at `level`.
#[must_use]
pub fn operators(level: Level) -> &'static [OpInfo] {
    match level {
        Level::Script => SCRIPT,
        Level::Assignment => ASSIGNMENT,
        Level::Conditional => CONDITIONAL,
        Level::Logical => LOGICAL,
        Level::Binary => BINARY,
        Level::Equality => EQUALITY,
        Level::Relation => RELATION,
        Level::Addition => ADDITION,
        Level::Multiplication => MULTIPLICATION,
        Level::Power => POWER,
        Level::Unary => UNARY,
        Level::Functional => FUNCTIONAL,
        Level::Statement | Level::Primary => &[],
    }
}
