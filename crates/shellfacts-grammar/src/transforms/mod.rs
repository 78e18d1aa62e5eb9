//! Transform functions turning captures and source text into semantic
//! records.
//!
//! Every transform is pure and total: it reads only its arguments, performs
//! no I/O, and answers malformed or missing input with a neutral value (an
//! empty list or string, `false`, or an unresolved import) instead of an
//! error. Each one is callable as a free function and through the
//! [`GrammarTransforms`] trait that a [`GrammarDefinition`] carries.
//!
//! [`GrammarDefinition`]: crate::GrammarDefinition

mod docs;
mod exports;
mod imports;
mod normalize;
mod params;

use std::fmt;

use shellfacts_core::{CaptureSet, FunctionParameter, ImportRecord};

pub use docs::parse_doc_comment;
pub use exports::{is_exported, is_function_exported};
pub use imports::{parse_import, resolve_import_path};
pub use normalize::{normalize_body, normalize_heredoc};
pub use params::{MAX_POSITIONAL_INDEX, parse_params};

/// The transform set of a grammar.
///
/// Implementations must be stateless so one instance can serve every
/// extraction call in the process.
pub trait GrammarTransforms: fmt::Debug + Send + Sync {
    /// Infers the parameters of a function from its body text.
    fn parse_params(&self, body: &str) -> Vec<FunctionParameter>;

    /// Normalises a function body for storage and comparison.
    fn normalize_body(&self, body: &str) -> String;

    /// Decides whether the function named in `captures` is exported from
    /// `source`, the full text of the enclosing file.
    fn is_exported(&self, captures: &CaptureSet, source: &str) -> bool;

    /// Builds an import record from one import match.
    fn parse_import(&self, captures: &CaptureSet) -> ImportRecord;

    /// Returns the readable text of one comment.
    fn parse_doc_comment(&self, comment: &str) -> String;
}

/// Transforms for Bash and POSIX shell scripts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BashTransforms;

impl GrammarTransforms for BashTransforms {
    fn parse_params(&self, body: &str) -> Vec<FunctionParameter> {
        parse_params(body)
    }

    fn normalize_body(&self, body: &str) -> String {
        normalize_body(body)
    }

    fn is_exported(&self, captures: &CaptureSet, source: &str) -> bool {
        is_exported(captures, source)
    }

    fn parse_import(&self, captures: &CaptureSet) -> ImportRecord {
        parse_import(captures)
    }

    fn parse_doc_comment(&self, comment: &str) -> String {
        parse_doc_comment(comment)
    }
}
