//! Import records for `source` / `.` statements.

use serde::{Deserialize, Serialize};

use crate::span::SourceLocation;

/// Target of an import statement.
///
/// Paths that depend on runtime evaluation are kept as
/// [`ImportPath::Dynamic`] so consumers can tell "no import" apart from "an
/// import we cannot trace".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ImportPath {
    /// A literal path, with one layer of surrounding quotes removed.
    Static(String),
    /// A path containing variable expansion or command substitution.
    Dynamic {
        /// The captured text, unquoted but otherwise untouched.
        raw: String,
    },
}

impl ImportPath {
    /// Returns the resolved path, or `None` for a dynamic import.
    #[must_use]
    pub fn resolved(&self) -> Option<&str> {
        match self {
            Self::Static(path) => Some(path),
            Self::Dynamic { .. } => None,
        }
    }

    /// Returns `true` for a literal path.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        matches!(self, Self::Static(_))
    }
}

/// A resolved (or deliberately unresolved) import statement.
///
/// Sourcing a shell file brings every definition into scope, so imports are
/// always namespace imports and never type-only.
///
/// # Example
///
/// ```
/// use shellfacts_core::{ImportRecord, SourceLocation};
///
/// let record = ImportRecord::resolved("./lib/utils.sh", SourceLocation::UNKNOWN);
/// assert_eq!(record.name, "./lib/utils.sh");
/// assert_eq!(record.from.resolved(), Some("./lib/utils.sh"));
/// assert!(record.is_namespace);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportRecord {
    /// Display name; equal to the path for static imports, empty otherwise.
    pub name: String,
    /// Import target.
    pub from: ImportPath,
    /// One-based location of the statement.
    pub location: SourceLocation,
    /// Always `true`: sourcing imports the whole file.
    pub is_namespace: bool,
    /// Always `false`: shell has no type-only imports.
    pub is_type_only: bool,
}

impl ImportRecord {
    /// Creates a record for a literal path.
    #[must_use]
    pub fn resolved(path: impl Into<String>, location: SourceLocation) -> Self {
        let literal: String = path.into();
        Self {
            name: literal.clone(),
            from: ImportPath::Static(literal),
            location,
            is_namespace: true,
            is_type_only: false,
        }
    }

    /// Creates the unresolved marker for a dynamic path.
    #[must_use]
    pub fn unresolved(raw: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            name: String::new(),
            from: ImportPath::Dynamic { raw: raw.into() },
            location,
            is_namespace: true,
            is_type_only: false,
        }
    }

    /// Returns `true` when the import path was determined statically.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        self.from.is_resolved()
    }
}
