/// The context module manages variable scopes.
///
/// A context is a stack of frames mapping names to values. Names are resolved
/// innermost first, then against the read-only globals; unknown names are
/// created on first use.
pub mod context;
/// The evaluator module reads and executes scripts in a single pass.
///
/// There is no syntax tree. The evaluator pulls tokens from the lexer and
/// computes values as it recognises constructs; parts that must not run are
/// consumed in skip mode, and loop clauses are re-read by rewinding the
/// lexer.
///
/// # Responsibilities
/// - Implements operator precedence, associativity and short-circuiting.
/// - Handles variables, functions, objects and control flow.
/// - Reports runtime errors such as division by zero or type mismatches.
pub mod evaluator;
/// The lexer module tokenizes source code on demand.
///
/// The lexer reads the raw source text and produces one token at a time:
/// literals, names, member accesses, keywords and operators. Its position
/// can be saved and restored.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with their offsets.
/// - Scans numeric, string and date literals.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The object module defines reference-typed runtime entities.
///
/// Variables, arrays, array element references, functions, classes,
/// instances and host objects all answer a common protocol of
/// create/get/set/call/item/index.
pub mod object;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum: empty, integers, doubles, strings, dates and
///   object handles.
/// - Implements conversions, ordering, equality and printing.
pub mod value;
