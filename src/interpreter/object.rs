/// Arrays and element references.
///
/// An `Array` is a shared, growable list. Indexing it yields an `Indexer`,
/// a reference to one slot that can be read or assigned through.
pub mod array;
/// User-defined classes and their instances.
pub mod class;
/// The `Object` handle and the protocol every object kind answers.
pub mod core;
/// Built-in functions, user functions and the `fold`/`map`/`filter`
/// wrappers.
pub mod function;
/// The extension point for objects supplied by an embedding host.
pub mod host;
/// Mutable variable cells.
pub mod variable;
