/// Postfix operators.
///
/// Calls, indexing, member access and postfix increment/decrement.
pub mod access;

/// Binary operator actions.
///
/// Arithmetic, assignment, comparison and bitwise operators.
pub mod binary;

/// Control flow.
///
/// `if`/`else`, the `?:` conditional, short-circuit `&&`/`||` and `for`
/// loops, all evaluated by skipping the parts that do not run.
pub mod control;

/// Core evaluation logic.
///
/// Contains the public `Engine`, resource limits, and the precedence-climbing
/// parser-evaluator that computes values while it reads tokens.
pub mod core;

/// Built-in functions.
///
/// The global table of native functions and their implementations.
pub mod function;

/// Function, object and bracket literals.
pub mod literal;

/// The operator table.
///
/// Precedence levels and, per level, the operators recognised there with
/// their associativity, dereferencing rules and actions.
pub mod operators;

/// Unary operator actions.
///
/// Negation, bitwise and logical NOT, prefix increment/decrement and `new`.
pub mod unary;
