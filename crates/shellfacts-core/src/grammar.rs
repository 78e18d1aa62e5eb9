//! Grammar metadata, packaging descriptors, and extraction categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identification and file-matching metadata for a grammar.
///
/// The host engine keys its registry on [`GrammarMeta::id`] and maps files
/// to grammars with `extensions` and `globs`; this crate never interprets
/// either list itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GrammarMeta {
    /// Unique identifier within the host registry (e.g. `"bash"`).
    pub id: &'static str,
    /// Human-readable name.
    pub name: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// File extensions handled by the grammar, with leading dots.
    pub extensions: &'static [&'static str],
    /// Filename globs for files without a recognised extension.
    pub globs: &'static [&'static str],
}

/// Where the underlying Tree-sitter grammar comes from.
///
/// This is an opaque token passed to the host's grammar loader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "source", rename_all = "snake_case")]
#[non_exhaustive]
pub enum GrammarSource {
    /// The grammar is statically linked from a Rust crate.
    Bundled {
        /// Crate providing the grammar.
        package: &'static str,
    },
    /// The grammar is loaded from an npm package's WASM artefact.
    Npm {
        /// npm package name.
        package: &'static str,
        /// WASM file within the package.
        wasm: &'static str,
    },
    /// The grammar is downloaded from a URL.
    Url {
        /// Location of the grammar artefact.
        url: &'static str,
    },
}

/// The five extraction categories, one query each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryKind {
    /// Function definitions.
    Functions,
    /// String literals.
    Strings,
    /// `source` / `.` statements.
    Imports,
    /// `export`, `declare -x` and `typeset -x` declarations.
    Exports,
    /// Comments.
    DocComments,
}

impl QueryKind {
    /// Returns the snake-case identifier for this category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Functions => "functions",
            Self::Strings => "strings",
            Self::Imports => "imports",
            Self::Exports => "exports",
            Self::DocComments => "doc_comments",
        }
    }

    /// Returns every category in extraction order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Functions,
            Self::Strings,
            Self::Imports,
            Self::Exports,
            Self::DocComments,
        ]
    }
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error raised when parsing a query kind identifier fails.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown query kind: '{0}'")]
pub struct QueryKindParseError(String);

impl QueryKindParseError {
    /// Returns the input that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.0
    }
}

impl FromStr for QueryKind {
    type Err = QueryKindParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let normalised = input.trim().to_ascii_lowercase().replace('-', "_");
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.as_str() == normalised)
            .ok_or(QueryKindParseError(normalised))
    }
}
