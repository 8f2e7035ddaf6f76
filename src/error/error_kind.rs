#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Represents every way a script can fail.
pub enum ErrorKind {
    /// The input ended where an operand was required.
    UnexpectedEndOfInput,
    /// A closing character was expected but not found.
    ///
    /// Raised for unterminated string and date literals and for unbalanced
    /// brackets.
    MissingCharacter {
        /// The character that was expected.
        expected: char,
    },
    /// A name could not be resolved in a context that does not auto-create
    /// variables (member lookup on a class instance).
    UnknownVariable {
        /// The unresolved name.
        name: String,
    },
    /// Malformed literal or token sequence.
    #[default]
    SyntaxError,
    /// An operator or coercion was applied to an incompatible kind of value.
    TypeMismatch,
    /// A function was called with the wrong number of arguments.
    BadParameterCount,
    /// A value does not fit the integer range.
    OutOfRange,
    /// An argument has the right kind but an unusable value, such as a
    /// non-integer or out-of-bounds index.
    InvalidArgument,
    /// Division or remainder by zero.
    DivisionByZero,
    /// Nesting of groups, blocks and calls exceeded the configured depth.
    RecursionLimit,
    /// A loop exceeded the configured iteration ceiling.
    IterationLimit,
    /// The `assert` built-in received a false condition.
    AssertionFailed,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedEndOfInput => write!(f, "Unexpected end of input."),
            Self::MissingCharacter { expected } => {
                write!(f, "Missing '{expected}' character.")
            },
            Self::UnknownVariable { name } => write!(f, "Unknown variable '{name}'."),
            Self::SyntaxError => write!(f, "Syntax error."),
            Self::TypeMismatch => write!(f, "Type mismatch."),
            Self::BadParameterCount => write!(f, "Bad parameter count."),
            Self::OutOfRange => write!(f, "Value out of range."),
            Self::InvalidArgument => write!(f, "Invalid argument."),
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::RecursionLimit => write!(f, "Nesting depth limit exceeded."),
            Self::IterationLimit => write!(f, "Loop iteration limit exceeded."),
            Self::AssertionFailed => write!(f, "Assertion failed."),
        }
    }
}

impl std::error::Error for ErrorKind {}
