//! Shellfacts: semantic fact extraction for shell scripts.
//!
//! This facade crate re-exports the stable types from [`shellfacts_core`]
//! and the Bash grammar from [`shellfacts_grammar`], and provides the
//! [`Extractor`] entrypoint that turns a script into [`FileFacts`].
//!
//! # What is extracted
//!
//! - [`FunctionFact`]: functions with inferred positional parameters, a
//!   normalised body, export status and the comment block above them
//! - [`StringFact`]: string literals and here-document bodies
//! - [`ImportRecord`]: `source` / `.` statements, resolved when the path is
//!   a literal
//! - [`ExportFact`]: names exported by `export`, `declare -x` and
//!   `typeset -x`
//! - [`DocComment`]: every comment, cleaned of its marker
//!
//! # Logging
//!
//! The crate emits [`tracing`] events (`debug` for compilation and per-file
//! counts, `warn` for scripts with syntax errors and exhausted match
//! limits). Installing a subscriber is left to the host.
//!
//! # Example
//!
//! ```
//! use shellfacts::{ExtractionConfig, Extractor};
//!
//! let source = r#"
//! build() {
//!   local target="${1:-release}"
//!   cargo build --profile "$target"
//! }
//!
//! deploy() {
//!   scp "$1" "$2"
//! }
//!
//! export -f build
//! "#;
//!
//! let extractor = Extractor::new(ExtractionConfig::default())?;
//! let facts = extractor.extract(source)?;
//!
//! let build = facts.function("build").expect("build");
//! assert!(build.is_exported);
//! assert_eq!(build.params.len(), 1);
//!
//! let deploy = facts.function("deploy").expect("deploy");
//! assert!(!deploy.is_exported);
//! assert_eq!(deploy.params.len(), 2);
//! # Ok::<(), shellfacts::SyntaxError>(())
//! ```

mod docblock;
mod extractor;
mod facts;

pub use shellfacts_core::{
    CaptureSet, CapturedNode, ExtractionConfig, FunctionParameter, GrammarMeta, GrammarSource,
    ImportPath, ImportRecord, LineCol, QueryKind, SourceLocation, Span,
};
pub use shellfacts_grammar::{
    BASH, BashTransforms, ExtractionQueries, GrammarDefinition, GrammarTransforms,
};
pub use shellfacts_syntax::SyntaxError;

pub use extractor::Extractor;
pub use facts::{DocComment, ExportFact, FileFacts, FunctionFact, StringFact, StringKind};

#[cfg(test)]
mod tests;
