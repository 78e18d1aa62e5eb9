//! Error types for parsing and query execution.

use shellfacts_core::QueryKind;
use thiserror::Error;

/// Errors from parsing shell scripts and compiling extraction queries.
///
/// Syntax errors inside a script are not reported here: Tree-sitter
/// recovers from them and [`ParseResult::has_errors`] reports them.
///
/// [`ParseResult::has_errors`]: crate::ParseResult::has_errors
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SyntaxError {
    /// Failed to initialise the Tree-sitter parser with the Bash grammar.
    #[error("failed to initialise bash parser: {message}")]
    ParserInitError {
        /// Description of the failure.
        message: String,
    },

    /// Tree-sitter produced no syntax tree.
    #[error("failed to parse bash: {message}")]
    ParseError {
        /// Description of the failure.
        message: String,
    },

    /// An extraction query did not compile against the Bash grammar.
    #[error("invalid {kind} query: {message}")]
    QueryCompileError {
        /// The category of the query that failed.
        kind: QueryKind,
        /// Description of the compilation failure.
        message: String,
    },

    /// The source exceeds the configured size limit.
    #[error("source is {size} bytes, exceeding the limit of {limit} bytes")]
    SourceTooLarge {
        /// Size of the rejected source in bytes.
        size: usize,
        /// Configured limit in bytes.
        limit: usize,
    },
}

impl SyntaxError {
    /// Creates a parser initialisation error.
    #[must_use]
    pub fn parser_init(message: impl Into<String>) -> Self {
        Self::ParserInitError {
            message: message.into(),
        }
    }

    /// Creates a parse error.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::ParseError {
            message: message.into(),
        }
    }

    /// Creates a query compilation error.
    #[must_use]
    pub fn query_compile(kind: QueryKind, message: impl Into<String>) -> Self {
        Self::QueryCompileError {
            kind,
            message: message.into(),
        }
    }

    /// Creates a source size error.
    #[must_use]
    pub const fn source_too_large(size: usize, limit: usize) -> Self {
        Self::SourceTooLarge { size, limit }
    }
}
