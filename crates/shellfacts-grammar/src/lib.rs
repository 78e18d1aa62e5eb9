//! Bash grammar definition: extraction queries and transform functions.
//!
//! This crate is the semantic core of shell-script fact extraction. It
//! declares which syntax-tree shapes are interesting ([`queries`]) and turns
//! the captures of each match into typed records ([`transforms`]):
//!
//! - **Parameter inference**: positional `$N` / `${N:-default}` usage and
//!   `$@` / `$*` become an ordered parameter list
//! - **Export detection**: `export -f name` anywhere in the file marks a
//!   function exported
//! - **Import resolution**: `source` / `.` paths are unquoted, and dynamic
//!   paths are kept unresolved
//! - **Body normalisation**: line endings and outer padding only
//! - **Doc comment parsing**: one `#` comment at a time
//!
//! Everything is bundled in the process-wide [`BASH`] definition. Nothing
//! here parses source code; the queries run on Tree-sitter in the
//! `shellfacts-syntax` crate, and the transforms only need capture data and
//! strings, so they can be tested without a syntax tree.
//!
//! # Example
//!
//! ```
//! use shellfacts_grammar::transforms::{is_function_exported, parse_params};
//!
//! let source = "build() {\n  local target=\"${1:-release}\"\n}\nexport -f build\n";
//! let params = parse_params("{\n  local target=\"${1:-release}\"\n}");
//! assert_eq!(params.len(), 1);
//! assert!(params.first().is_some_and(|param| param.is_optional()));
//! assert!(is_function_exported("build", source));
//! ```

mod definition;
pub mod queries;
pub mod transforms;

pub use definition::{BASH, GrammarDefinition};
pub use queries::{ExtractionQueries, labels};
pub use transforms::{BashTransforms, GrammarTransforms};

#[cfg(test)]
mod tests;
