use crate::interpreter::{
    evaluator::function::{builtin, convert, date, list, string},
    object::function::{Arity, BuiltinFunction, FunctionalKind},
};

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[BuiltinFunction] = &[
            $(
                BuiltinFunction { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of all built-in functions.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "int"       => { arity: Arity::Exact(1), func: convert::int },
    "dbl"       => { arity: Arity::Exact(1), func: convert::dbl },
    "str"       => { arity: Arity::Exact(1), func: convert::text },
    "date"      => { arity: Arity::Exact(1), func: convert::date },
    "now"       => { arity: Arity::Exact(0), func: date::now },
    "day"       => { arity: Arity::Exact(1), func: date::day },
    "month"     => { arity: Arity::Exact(1), func: date::month },
    "year"      => { arity: Arity::Exact(1), func: date::year },
    "hour"      => { arity: Arity::Exact(1), func: date::hour },
    "minute"    => { arity: Arity::Exact(1), func: date::minute },
    "second"    => { arity: Arity::Exact(1), func: date::second },
    "dayofweek" => { arity: Arity::Exact(1), func: date::day_of_week },
    "dayofyear" => { arity: Arity::Exact(1), func: date::day_of_year },
    "pi"        => { arity: Arity::Exact(0), func: builtin::pi },
    "rnd"       => { arity: Arity::Exact(0), func: builtin::rnd },
    "sin"       => { arity: Arity::Exact(1), func: builtin::sin },
    "cos"       => { arity: Arity::Exact(1), func: builtin::cos },
    "tan"       => { arity: Arity::Exact(1), func: builtin::tan },
    "atan"      => { arity: Arity::Exact(1), func: builtin::atan },
    "exp"       => { arity: Arity::Exact(1), func: builtin::exp },
    "log"       => { arity: Arity::Exact(1), func: builtin::log },
    "sqr"       => { arity: Arity::Exact(1), func: builtin::sqrt },
    "sqrt"      => { arity: Arity::Exact(1), func: builtin::sqrt },
    "abs"       => { arity: Arity::Exact(1), func: builtin::abs },
    "sgn"       => { arity: Arity::Exact(1), func: builtin::sgn },
    "fract"     => { arity: Arity::Exact(1), func: builtin::fract },
    "atan2"     => { arity: Arity::Exact(2), func: builtin::atan2 },
    "assert"    => { arity: Arity::Exact(1), func: builtin::assert_fn },
    "chr"       => { arity: Arity::Exact(1), func: string::chr },
    "asc"       => { arity: Arity::Exact(1), func: string::asc },
    "len"       => { arity: Arity::Exact(1), func: string::len },
    "left"      => { arity: Arity::Exact(2), func: string::left },
    "right"     => { arity: Arity::Exact(2), func: string::right },
    "mid"       => { arity: Arity::Exact(3), func: string::mid },
    "upper"     => { arity: Arity::Exact(1), func: string::upper },
    "lower"     => { arity: Arity::Exact(1), func: string::lower },
    "string"    => { arity: Arity::Exact(2), func: string::repeat },
    "replace"   => { arity: Arity::Exact(3), func: string::replace },
    "instr"     => { arity: Arity::Exact(2), func: string::instr },
    "hex"       => { arity: Arity::Exact(1), func: string::hex },
    "rgb"       => { arity: Arity::Exact(3), func: string::rgb },
    "size"      => { arity: Arity::Variadic, func: list::size },
    "add"       => { arity: Arity::Exact(2), func: list::add },
    "remove"    => { arity: Arity::Exact(2), func: list::remove },
    "head"      => { arity: Arity::Variadic, func: list::head },
    "tail"      => { arity: Arity::Variadic, func: list::tail },
    "min"       => { arity: Arity::Variadic, func: list::min },
    "max"       => { arity: Arity::Variadic, func: list::max },
    "fold"      => { arity: Arity::Exact(1), func: |args| list::functional(FunctionalKind::Fold, args) },
    "map"       => { arity: Arity::Exact(1), func: |args| list::functional(FunctionalKind::Map, args) },
    "filter"    => { arity: Arity::Exact(1), func: |args| list::functional(FunctionalKind::Filter, args) },
}

/// Finds a built-in function by name.
///
/// # Example
/// ```
/// use cinder::interpreter::evaluator::function::core::lookup_builtin;
///
/// assert_eq!(lookup_builtin("sqrt").unwrap().name, "sqrt");
/// assert!(lookup_builtin("nope").is_none());
/// ```
#[must_use]
pub fn lookup_builtin(name: &str) -> Option<&'static BuiltinFunction> {
    BUILTIN_TABLE.iter().find(|builtin| builtin.name == name)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn every_listed_name_resolves() {
        for name in BUILTIN_FUNCTIONS {
            assert_eq!(lookup_builtin(name).map(|builtin| builtin.name), Some(*name));
        }
    }

    #[test]
    fn names_are_unique() {
        let unique: HashSet<_> = BUILTIN_FUNCTIONS.iter().collect();
        assert_eq!(unique.len(), BUILTIN_FUNCTIONS.len());
    }
}
