//! Tree-sitter adapter for shell-script fact extraction.
//!
//! This crate owns everything that touches a syntax tree:
//!
//! - **Parsing** via [`Parser`], an error-tolerant wrapper around the
//!   `tree-sitter-bash` grammar
//! - **Query execution** via [`CompiledQuery`], which runs an extraction
//!   pattern and reports each match as a
//!   [`CaptureSet`](shellfacts_core::CaptureSet)
//!
//! # Example
//!
//! ```
//! use shellfacts_core::QueryKind;
//! use shellfacts_syntax::{CompiledQuery, Parser};
//!
//! let mut parser = Parser::new()?;
//! let parsed = parser.parse("greet() { echo \"$1\"; }\n")?;
//!
//! let query = CompiledQuery::new(
//!     QueryKind::Functions,
//!     "(function_definition name: (word) @function.name) @function",
//! )?;
//! let matches = query.captures(&parsed, 100);
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].text("function.name"), Some("greet"));
//! # Ok::<(), shellfacts_syntax::SyntaxError>(())
//! ```

mod error;
mod parser;
mod position;
mod query;

pub use error::SyntaxError;
pub use parser::{ParseResult, Parser, SyntaxErrorInfo, bash_language};
pub use position::node_span;
pub use query::{CompiledQuery, CompiledQuerySet};

#[cfg(test)]
mod tests;
