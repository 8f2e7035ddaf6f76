//! # cinder
//!
//! cinder is a small embeddable scripting language written in Rust.
//! Scripts are read and executed in a single pass, without building a syntax
//! tree: the evaluator computes values while it reads tokens, and skips the
//! parts of a script that must not run.
//!
//! The language has integers, doubles, strings and dates, first-class
//! functions with captured variables, lightweight objects, arrays, and a
//! library of built-in functions. Host programs register their own values and
//! objects through [`Engine::add`](interpreter::evaluator::core::Engine::add).

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::ScriptError,
    interpreter::{
        evaluator::core::{Engine, Limits},
        value::core::Value,
    },
};

/// Provides unified error types for lexing and evaluation.
///
/// This module defines the closed set of error kinds a script can fail with,
/// and the positioned error returned to hosts.
///
/// # Responsibilities
/// - Defines the error kind enum for all failure modes.
/// - Attaches byte offsets and line numbers for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, evaluation, value and object
/// representations and scopes to provide a complete runtime for scripts. It
/// exposes the public API for embedding the language.
///
/// # Responsibilities
/// - Coordinates the lexer, the evaluator, values and objects.
/// - Provides the `Engine` entry point for evaluating scripts.
/// - Manages the flow of values and errors between components.
pub mod interpreter;
/// General utilities for safe numeric conversion and formatting.
///
/// # Responsibilities
/// - Safely convert between `i64`, `usize`, and `f64` without silent data
///   loss.
/// - Format doubles the way results are printed.
pub mod util;

/// Evaluates a script in a fresh engine and returns its final value.
///
/// With `auto_print` set, a non-empty result is printed to standard output.
///
/// # Errors
/// Returns the [`ScriptError`] of the first failure, with its position.
///
/// # Examples
/// ```
/// use cinder::{get_result, interpreter::value::core::Value};
///
/// let value = get_result("x = 2 + 2; x * 10", false).unwrap();
/// assert_eq!(value, Value::Int(40));
///
/// // Division by zero is an error.
/// assert!(get_result("1 / 0", false).is_err());
/// ```
pub fn get_result(source: &str, auto_print: bool) -> Result<Value, ScriptError> {
    get_result_with_limits(source, auto_print, Limits::default())
}

/// Like [`get_result`], applying the given resource limits.
///
/// # Errors
/// Returns the [`ScriptError`] of the first failure, with its position.
pub fn get_result_with_limits(source: &str,
                              auto_print: bool,
                              limits: Limits)
                              -> Result<Value, ScriptError> {
    let value = Engine::with_limits(limits).eval(source)?;

    if auto_print && !value.is_empty() {
        println!("{value}");
    }

    Ok(value)
}
