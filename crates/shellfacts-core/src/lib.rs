//! Core data model for shell-script fact extraction.
//!
//! This crate holds the types shared by the query set, the transforms, and
//! the extraction driver: source spans, capture sets, the semantic records
//! produced by transforms, grammar metadata, and extraction configuration.
//! It has no Tree-sitter dependency, so transforms built on it can be tested
//! without parsing anything.
//!
//! # Core types
//!
//! - [`Span`], [`LineCol`] and [`SourceLocation`]: zero- and one-based
//!   source positions
//! - [`CaptureSet`] and [`CapturedNode`]: the captures of one query match
//! - [`FunctionParameter`]: a parameter inferred from positional usage
//! - [`ImportRecord`] and [`ImportPath`]: a `source` statement
//! - [`GrammarMeta`], [`GrammarSource`] and [`QueryKind`]: grammar bundle
//!   metadata
//! - [`ExtractionConfig`]: resource limits and optional passes
//!
//! # Example
//!
//! ```
//! use shellfacts_core::{LineCol, SourceLocation, Span};
//!
//! let span = Span::new(0, 10, LineCol::new(2, 4), LineCol::new(2, 14));
//! let location = SourceLocation::from_span(&span);
//! assert_eq!(location.line, 3);
//! assert_eq!(location.column, 5);
//! ```

mod capture;
mod config;
mod grammar;
mod import;
mod parameter;
mod span;

pub use capture::{CaptureSet, CapturedNode, INTERNAL_LABEL_PREFIX, is_internal_label};
pub use config::ExtractionConfig;
pub use grammar::{GrammarMeta, GrammarSource, QueryKind, QueryKindParseError};
pub use import::{ImportPath, ImportRecord};
pub use parameter::FunctionParameter;
pub use span::{LineCol, SourceLocation, Span};

#[cfg(test)]
mod tests;
