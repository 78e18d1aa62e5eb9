//! Semantic records produced for one shell script.

use serde::{Deserialize, Serialize};
use shellfacts_core::{FunctionParameter, ImportRecord, SourceLocation};

/// A function definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionFact {
    /// Function name.
    pub name: String,
    /// Parameters inferred from positional references in the body.
    pub params: Vec<FunctionParameter>,
    /// Normalised body text, braces included.
    pub body: String,
    /// Whether an `export -f` directive names the function.
    pub is_exported: bool,
    /// Text of the comment block directly above the definition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    /// Location of the whole definition.
    pub location: SourceLocation,
}

impl FunctionFact {
    /// Returns the number of parameters, the rest parameter included.
    #[must_use]
    pub const fn arity(&self) -> usize {
        self.params.len()
    }

    /// Returns `true` when the function reads `$@` or `$*`.
    #[must_use]
    pub fn is_variadic(&self) -> bool {
        self.params.iter().any(FunctionParameter::is_rest)
    }
}

/// Quoting style of a string literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StringKind {
    /// `"..."`, with expansion.
    Double,
    /// `'...'`, without expansion.
    Single,
    /// `$'...'`, with backslash escapes.
    AnsiC,
    /// The body of a here-document.
    Heredoc,
    /// A bare here-string operand (`<<< word`).
    HereString,
}

impl StringKind {
    /// Maps a Tree-sitter node kind to a string kind.
    ///
    /// The strings query only captures a bare `word` as a here-string
    /// operand, so `word` maps to [`StringKind::HereString`].
    #[must_use]
    pub fn from_node_kind(kind: &str) -> Option<Self> {
        match kind {
            "string" => Some(Self::Double),
            "raw_string" => Some(Self::Single),
            "ansi_c_string" => Some(Self::AnsiC),
            "heredoc_body" => Some(Self::Heredoc),
            "word" => Some(Self::HereString),
            _ => None,
        }
    }
}

/// A string literal or here-document body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StringFact {
    /// Literal text as written, quotes included. `<<-` here-document bodies
    /// have their leading tabs removed.
    pub value: String,
    /// Quoting style.
    pub kind: StringKind,
    /// Location of the literal.
    pub location: SourceLocation,
}

/// A name exported by `export`, `declare -x` or `typeset -x`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportFact {
    /// The exported variable or function name.
    pub name: String,
    /// Location of the whole declaration.
    pub location: SourceLocation,
}

/// A single comment, cleaned of its `#` marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocComment {
    /// Comment text.
    pub text: String,
    /// Location of the comment.
    pub location: SourceLocation,
}

/// Everything extracted from one shell script.
///
/// Every list is in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileFacts {
    /// Function definitions.
    pub functions: Vec<FunctionFact>,
    /// String literals and here-document bodies.
    pub strings: Vec<StringFact>,
    /// `source` / `.` statements.
    pub imports: Vec<ImportRecord>,
    /// Exported names, one entry per name per declaration.
    pub exports: Vec<ExportFact>,
    /// Every comment, including trailing and shebang comments.
    pub doc_comments: Vec<DocComment>,
    /// Whether Tree-sitter had to recover from syntax errors.
    pub has_syntax_errors: bool,
}

impl FileFacts {
    /// Returns the function named `name`, if defined.
    ///
    /// When a script defines the same name twice the first definition is
    /// returned.
    #[must_use]
    pub fn function(&self, name: &str) -> Option<&FunctionFact> {
        self.functions.iter().find(|function| function.name == name)
    }

    /// Iterates over the functions exported with `export -f`.
    pub fn exported_functions(&self) -> impl Iterator<Item = &FunctionFact> {
        self.functions.iter().filter(|function| function.is_exported)
    }

    /// Iterates over the statically resolved import paths.
    pub fn resolved_imports(&self) -> impl Iterator<Item = &str> {
        self.imports.iter().filter_map(|import| import.from.resolved())
    }
}
