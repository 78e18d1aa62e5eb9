//! Function definition query.
//!
//! `f() { }`, `function f() { }` and `function f { }` all produce the same
//! `function_definition` node, so one pattern covers every syntax.

/// Captures:
///
/// - `@function.name`: the function identifier
/// - `@function.params` / `@function.body`: the `compound_statement` body;
///   shell parameters are implicit, so the body doubles as the parameter
///   source
/// - `@function`: the whole definition, for location
pub const FUNCTIONS_QUERY: &str = r"
(function_definition
  name: (word) @function.name
  body: (compound_statement) @function.params @function.body) @function
";
