/// The closed set of failure kinds.
///
/// Every failure detected while lexing, parsing or evaluating a script maps
/// onto exactly one [`ErrorKind`]. The kind is what propagates through the
/// evaluator; it carries no source position.
pub mod error_kind;
/// Errors reported at the `eval` boundary.
///
/// A [`ScriptError`] pairs an [`ErrorKind`] with the position of the token the
/// evaluator stopped at, so hosts can point at the offending text.
pub mod script_error;

pub use error_kind::ErrorKind;
pub use script_error::ScriptError;
