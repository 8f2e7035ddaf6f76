/// Runtime values.
///
/// Defines the `Value` enum (scalars plus object handles), the conversions
/// between value kinds, ordering and equality, and the textual form used when
/// printing results.
pub mod core;
/// Date literals and date arithmetic.
///
/// Parses the `#dd.mm.yyyy hh:mm:ss#` grammar, prints dates back in the same
/// form, and shifts dates by fractional days.
pub mod date;
