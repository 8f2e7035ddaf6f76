/// Arithmetic operators.
///
/// `+ - * / % ^` over integers and doubles, string concatenation, and date
/// shifting.
pub mod arithmetic;
/// Assignment operators.
///
/// `=` and the compound forms `+= -= *= /=`, which write through a variable,
/// an array element or a host object.
pub mod assign;
/// Comparison operators.
pub mod comparison;
/// Bitwise operators and the statement separator.
pub mod logic;
