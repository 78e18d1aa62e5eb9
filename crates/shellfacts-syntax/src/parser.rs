//! Tree-sitter parsing wrapper with error recovery.
//!
//! This module wraps the raw Tree-sitter parser configured with the Bash
//! grammar and provides structured access to parse results and syntax
//! errors.

use std::ops::Range;

use crate::error::SyntaxError;
use crate::position::point_to_one_based;

/// Returns the Tree-sitter language for Bash.
#[must_use]
pub fn bash_language() -> tree_sitter::Language {
    tree_sitter_bash::LANGUAGE.into()
}

/// Result of parsing a shell script.
///
/// Contains the parsed syntax tree along with the source it was built from.
/// Tree-sitter is error-tolerant, so a parse result may contain both a
/// usable tree and error nodes.
#[derive(Debug)]
pub struct ParseResult {
    tree: tree_sitter::Tree,
    source: String,
}

impl ParseResult {
    /// Returns the parsed syntax tree.
    #[must_use]
    pub const fn tree(&self) -> &tree_sitter::Tree {
        &self.tree
    }

    /// Returns the source code that was parsed.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns whether the parse result contains any syntax errors.
    ///
    /// Tree-sitter produces ERROR nodes for portions of the source that
    /// could not be parsed according to the grammar, and MISSING nodes for
    /// tokens it had to invent.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.tree.root_node().has_error()
    }

    /// Collects all syntax errors found in the parse result.
    #[must_use]
    pub fn errors(&self) -> Vec<SyntaxErrorInfo> {
        let mut errors = Vec::new();
        collect_error_nodes(self.tree.root_node(), &self.source, &mut errors);
        errors
    }

    /// Returns the root node of the syntax tree.
    #[must_use]
    pub fn root_node(&self) -> tree_sitter::Node<'_> {
        self.tree.root_node()
    }
}

/// Information about a syntax error found during parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxErrorInfo {
    /// Byte range of the error in the source.
    pub byte_range: Range<usize>,
    /// Line number (one-based) where the error starts.
    pub line: u32,
    /// Column number (one-based) where the error starts.
    pub column: u32,
    /// A snippet of the problematic source text.
    pub context: String,
    /// Human-readable description of the error.
    pub message: String,
}

impl SyntaxErrorInfo {
    const MAX_CONTEXT_CHARS: usize = 50;

    fn from_node(node: tree_sitter::Node<'_>, source: &str) -> Self {
        let byte_range = node.byte_range();

        let context = source
            .get(byte_range.clone())
            .map(|text| {
                if text.chars().count() > Self::MAX_CONTEXT_CHARS {
                    let truncated: String = text
                        .chars()
                        .take(Self::MAX_CONTEXT_CHARS.saturating_sub(3))
                        .collect();
                    format!("{truncated}...")
                } else {
                    text.to_owned()
                }
            })
            .unwrap_or_default();

        let message = if node.is_missing() {
            format!("missing {}", node.kind())
        } else {
            "syntax error".to_owned()
        };

        let (line, column) = point_to_one_based(node.start_position());

        Self {
            byte_range,
            line,
            column,
            context,
            message,
        }
    }
}

/// Tree-sitter parser configured for Bash.
///
/// A parser holds mutable state, so each thread (or each extraction call)
/// needs its own instance.
pub struct Parser {
    inner: tree_sitter::Parser,
}

impl Parser {
    /// Creates a new Bash parser.
    ///
    /// # Errors
    ///
    /// Returns an error if the Tree-sitter parser rejects the grammar, which
    /// happens when the grammar's ABI version is incompatible.
    pub fn new() -> Result<Self, SyntaxError> {
        let mut inner = tree_sitter::Parser::new();
        inner
            .set_language(&bash_language())
            .map_err(|e| SyntaxError::parser_init(e.to_string()))?;

        Ok(Self { inner })
    }

    /// Parses source code and returns the result.
    ///
    /// Tree-sitter is error-tolerant, so this method returns a parse result
    /// even if the source contains syntax errors. Use
    /// [`ParseResult::has_errors`] to check for errors.
    ///
    /// # Errors
    ///
    /// Returns an error if the parser fails to produce a syntax tree.
    pub fn parse(&mut self, source: &str) -> Result<ParseResult, SyntaxError> {
        let tree = self
            .inner
            .parse(source, None)
            .ok_or_else(|| SyntaxError::parse("parsing failed"))?;

        Ok(ParseResult {
            tree,
            source: source.to_owned(),
        })
    }
}

/// Recursively collects all ERROR and MISSING nodes from a syntax tree.
fn collect_error_nodes(
    node: tree_sitter::Node<'_>,
    source: &str,
    errors: &mut Vec<SyntaxErrorInfo>,
) {
    if node.is_error() || node.is_missing() {
        errors.push(SyntaxErrorInfo::from_node(node, source));
    }

    if !node.has_error() {
        return;
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_error_nodes(child, source, errors);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("echo hello")]
    #[case("greet() {\n  echo \"Hello, $1\"\n}\n")]
    #[case("#!/bin/bash\nset -euo pipefail\n")]
    #[case("")]
    fn parser_parses_valid_source(#[case] source: &str) {
        let mut parser = Parser::new().expect("parser init");
        let result = parser.parse(source).expect("parse");

        assert!(!result.has_errors());
        assert!(result.errors().is_empty());
        assert_eq!(result.source(), source);
    }

    #[rstest]
    #[case("greet() {\n  echo hi\n")]
    #[case("if true; then\n  echo hi\n")]
    fn parser_detects_syntax_errors(#[case] source: &str) {
        let mut parser = Parser::new().expect("parser init");
        let result = parser.parse(source).expect("parse");

        assert!(result.has_errors());
        assert!(!result.errors().is_empty());
    }

    #[test]
    fn syntax_error_info_has_line_and_column() {
        let mut parser = Parser::new().expect("parser init");
        let result = parser.parse("echo ok\nf() {\n").expect("parse");

        let errors = result.errors();
        let first_error = errors.first().expect("has error");
        assert!(first_error.line >= 1);
        assert!(first_error.column >= 1);
    }

    #[test]
    fn parser_is_reusable() {
        let mut parser = Parser::new().expect("parser init");
        let first = parser.parse("echo one").expect("parse");
        let second = parser.parse("echo two").expect("parse");
        assert_eq!(first.source(), "echo one");
        assert_eq!(second.source(), "echo two");
    }
}
