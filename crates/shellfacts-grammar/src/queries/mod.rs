//! Tree-sitter queries for the Bash grammar.
//!
//! Each query is an S-expression pattern for the `tree-sitter-bash` grammar.
//! Capture labels are listed in [`labels`]; transforms read those labels, so
//! every label a transform uses must appear in its query.

mod docs;
mod exports;
mod functions;
mod imports;
mod strings;

pub use docs::DOC_COMMENTS_QUERY;
pub use exports::EXPORTS_QUERY;
pub use functions::FUNCTIONS_QUERY;
pub use imports::IMPORTS_QUERY;
pub use strings::STRINGS_QUERY;

use shellfacts_core::QueryKind;

/// Capture labels shared by the queries and transforms.
pub mod labels {
    /// The whole function definition.
    pub const FUNCTION: &str = "function";
    /// The function identifier.
    pub const FUNCTION_NAME: &str = "function.name";
    /// The function body, read for implicit parameters.
    pub const FUNCTION_PARAMS: &str = "function.params";
    /// The function body.
    pub const FUNCTION_BODY: &str = "function.body";
    /// A string literal.
    pub const STRING_VALUE: &str = "string.value";
    /// The whole import command.
    pub const IMPORT: &str = "import";
    /// The import path argument.
    pub const IMPORT_FROM: &str = "import.from";
    /// The whole export declaration.
    pub const EXPORT: &str = "export";
    /// The exported name.
    pub const EXPORT_NAME: &str = "export.name";
    /// A comment.
    pub const DOC_CONTENT: &str = "doc.content";
}

/// The query set of a grammar: one pattern per extraction category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionQueries {
    /// Function definitions.
    pub functions: &'static str,
    /// String literals.
    pub strings: &'static str,
    /// Import statements.
    pub imports: &'static str,
    /// Export declarations.
    pub exports: &'static str,
    /// Comments.
    pub doc_comments: &'static str,
}

impl ExtractionQueries {
    /// The Bash query set.
    pub const BASH: Self = Self {
        functions: FUNCTIONS_QUERY,
        strings: STRINGS_QUERY,
        imports: IMPORTS_QUERY,
        exports: EXPORTS_QUERY,
        doc_comments: DOC_COMMENTS_QUERY,
    };

    /// Returns the query for `kind`.
    #[must_use]
    pub const fn get(&self, kind: QueryKind) -> &'static str {
        match kind {
            QueryKind::Functions => self.functions,
            QueryKind::Strings => self.strings,
            QueryKind::Imports => self.imports,
            QueryKind::Exports => self.exports,
            QueryKind::DocComments => self.doc_comments,
        }
    }

    /// Iterates over every `(kind, query)` pair in extraction order.
    pub fn iter(&self) -> impl Iterator<Item = (QueryKind, &'static str)> + '_ {
        QueryKind::all()
            .iter()
            .map(move |kind| (*kind, self.get(*kind)))
    }
}

/// Returns the semantic capture labels a query declares, in order of first
/// appearance. Internal `@_` filter labels are skipped.
///
/// This is a plain scan of the query text and does not validate the
/// pattern; compile the query against the grammar for that.
#[must_use]
pub fn declared_labels(query: &str) -> Vec<&str> {
    let mut found: Vec<&str> = Vec::new();
    for line in query.lines() {
        let code = line.split(';').next().unwrap_or_default();
        for (at, _) in code.match_indices('@') {
            let rest = code.get(at.saturating_add(1)..).unwrap_or_default();
            let end = rest
                .find(|c: char| !(c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')))
                .unwrap_or(rest.len());
            let label = rest.get(..end).unwrap_or_default();
            if !label.is_empty()
                && !shellfacts_core::is_internal_label(label)
                && !found.contains(&label)
            {
                found.push(label);
            }
        }
    }
    found
}
