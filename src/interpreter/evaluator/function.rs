/// Mathematical built-ins.
///
/// Trigonometry, exponentials, rounding helpers, random numbers and
/// `assert`.
pub mod builtin;
/// Conversion built-ins: `int`, `dbl`, `str` and `date`.
pub mod convert;
/// The built-in function table.
pub mod core;
/// Date component built-ins and `now`.
pub mod date;
/// List built-ins, including the `fold`, `map` and `filter` combinators.
pub mod list;
/// String built-ins.
///
/// All positions and lengths count characters, not bytes.
pub mod string;
