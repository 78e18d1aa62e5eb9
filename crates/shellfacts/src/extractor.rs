//! The extraction driver.
//!
//! An [`Extractor`] compiles the queries of a [`GrammarDefinition`] once and
//! then runs them over any number of scripts. Each call to
//! [`Extractor::extract`] parses the script, executes the five queries and
//! passes every match through the grammar's transforms.

use std::collections::BTreeSet;

use shellfacts_core::{CaptureSet, CapturedNode, ExtractionConfig, QueryKind, SourceLocation};
use shellfacts_grammar::transforms::normalize_heredoc;
use shellfacts_grammar::{BASH, GrammarDefinition, GrammarTransforms, labels};
use shellfacts_syntax::{CompiledQuerySet, ParseResult, Parser, SyntaxError};
use tracing::{debug, warn};

use crate::docblock::DocBlocks;
use crate::facts::{DocComment, ExportFact, FileFacts, FunctionFact, StringFact, StringKind};

/// Extracts [`FileFacts`] from shell scripts.
///
/// Compiled queries are immutable, so one extractor can serve concurrent
/// callers; every [`extract`](Self::extract) call creates its own parser.
///
/// # Example
///
/// ```
/// use shellfacts::{ExtractionConfig, Extractor};
///
/// let extractor = Extractor::new(ExtractionConfig::default())?;
/// let facts = extractor.extract("greet() {\n  echo \"Hello, $1\"\n}\nexport -f greet\n")?;
///
/// let greet = facts.function("greet").expect("greet is defined");
/// assert!(greet.is_exported);
/// assert_eq!(greet.params.len(), 1);
/// # Ok::<(), shellfacts::SyntaxError>(())
/// ```
#[derive(Debug)]
pub struct Extractor {
    config: ExtractionConfig,
    definition: &'static GrammarDefinition,
    queries: CompiledQuerySet,
}

impl Extractor {
    /// Creates an extractor for the bundled Bash grammar.
    ///
    /// # Errors
    ///
    /// Returns [`SyntaxError::QueryCompileError`] if a query does not
    /// compile against `tree-sitter-bash`.
    pub fn new(config: ExtractionConfig) -> Result<Self, SyntaxError> {
        Self::with_definition(config, &BASH)
    }

    /// Creates an extractor using the queries and transforms of
    /// `definition`. Scripts are still parsed with the Bash grammar.
    ///
    /// # Errors
    ///
    /// Returns [`SyntaxError::QueryCompileError`] for the first query that
    /// does not compile.
    pub fn with_definition(
        config: ExtractionConfig,
        definition: &'static GrammarDefinition,
    ) -> Result<Self, SyntaxError> {
        let queries = CompiledQuerySet::compile(definition.queries.iter())?;
        debug!(
            grammar = definition.meta.id,
            queries = queries.len(),
            "compiled extraction queries"
        );
        Ok(Self {
            config,
            definition,
            queries,
        })
    }

    /// Returns the extraction configuration.
    #[must_use]
    pub const fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Returns the grammar definition in use.
    #[must_use]
    pub const fn definition(&self) -> &'static GrammarDefinition {
        self.definition
    }

    /// Extracts every fact from `source`.
    ///
    /// Syntax errors in the script do not fail extraction: Tree-sitter
    /// recovers, the facts it could still find are returned, and
    /// [`FileFacts::has_syntax_errors`] is set.
    ///
    /// # Errors
    ///
    /// Returns [`SyntaxError::SourceTooLarge`] when `source` exceeds the
    /// configured limit, or an error if the parser cannot be created or
    /// produces no tree.
    pub fn extract(&self, source: &str) -> Result<FileFacts, SyntaxError> {
        let limit = self.config.max_source_bytes();
        if source.len() > limit {
            return Err(SyntaxError::source_too_large(source.len(), limit));
        }

        let mut parser = Parser::new()?;
        let parsed = parser.parse(source)?;
        let has_syntax_errors = parsed.has_errors();
        if has_syntax_errors {
            warn!(
                errors = parsed.errors().len(),
                "script contains syntax errors; extracted facts may be incomplete"
            );
        }

        let transforms = self.definition.transforms();
        let comment_matches = self.run(QueryKind::DocComments, &parsed);
        let comment_nodes: Vec<&CapturedNode> = comment_matches
            .iter()
            .filter_map(|captures| captures.get(labels::DOC_CONTENT))
            .collect();

        let doc_blocks = if self.config.attach_doc_comments() {
            DocBlocks::assemble(comment_nodes.iter().copied(), source, transforms)
        } else {
            DocBlocks::default()
        };

        let facts = FileFacts {
            functions: self
                .run(QueryKind::Functions, &parsed)
                .iter()
                .filter_map(|captures| function_fact(captures, source, transforms, &doc_blocks))
                .collect(),
            strings: self
                .run(QueryKind::Strings, &parsed)
                .iter()
                .filter_map(|captures| string_fact(captures, source))
                .collect(),
            imports: self
                .run(QueryKind::Imports, &parsed)
                .iter()
                .map(|captures| transforms.parse_import(captures))
                .collect(),
            exports: export_facts(&self.run(QueryKind::Exports, &parsed)),
            doc_comments: comment_nodes
                .iter()
                .map(|node| DocComment {
                    text: transforms.parse_doc_comment(node.text()),
                    location: node.location(),
                })
                .collect(),
            has_syntax_errors,
        };

        debug!(
            functions = facts.functions.len(),
            strings = facts.strings.len(),
            imports = facts.imports.len(),
            exports = facts.exports.len(),
            comments = facts.doc_comments.len(),
            "extracted shell facts"
        );
        Ok(facts)
    }

    fn run(&self, kind: QueryKind, parsed: &ParseResult) -> Vec<CaptureSet> {
        self.queries
            .get(kind)
            .map(|query| query.captures(parsed, self.config.max_matches_per_query()))
            .unwrap_or_default()
    }
}

fn function_fact(
    captures: &CaptureSet,
    source: &str,
    transforms: &dyn GrammarTransforms,
    doc_blocks: &DocBlocks,
) -> Option<FunctionFact> {
    let name = captures.text(labels::FUNCTION_NAME)?;
    let body = captures.text(labels::FUNCTION_BODY).unwrap_or_default();
    let params_source = captures.text(labels::FUNCTION_PARAMS).unwrap_or(body);
    let node = captures.first_of(&[labels::FUNCTION, labels::FUNCTION_NAME]);

    Some(FunctionFact {
        name: name.to_owned(),
        params: transforms.parse_params(params_source),
        body: transforms.normalize_body(body),
        is_exported: transforms.is_exported(captures, source),
        doc: node
            .and_then(|found| doc_blocks.above(found.span().start().line()))
            .map(str::to_owned),
        location: node.map_or(SourceLocation::UNKNOWN, CapturedNode::location),
    })
}

fn string_fact(captures: &CaptureSet, source: &str) -> Option<StringFact> {
    let node = captures.get(labels::STRING_VALUE)?;
    let kind = StringKind::from_node_kind(node.kind())?;
    let value = if kind == StringKind::Heredoc {
        normalize_heredoc(node.text(), opens_tab_stripped_heredoc(node, source))
    } else {
        node.text().to_owned()
    };
    Some(StringFact {
        value,
        kind,
        location: node.location(),
    })
}

/// Checks whether the line before a here-document body holds a `<<-`
/// redirect.
fn opens_tab_stripped_heredoc(body: &CapturedNode, source: &str) -> bool {
    let Ok(start) = usize::try_from(body.span().start_byte()) else {
        return false;
    };
    let Some(prefix) = source.get(..start) else {
        return false;
    };
    let without_newline = prefix.strip_suffix('\n').unwrap_or(prefix);
    without_newline
        .strip_suffix('\r')
        .unwrap_or(without_newline)
        .rsplit('\n')
        .next()
        .is_some_and(|line| line.contains("<<-"))
}

/// Several export patterns can match one declaration, so entries are keyed
/// by the declaration and name spans.
fn export_facts(matches: &[CaptureSet]) -> Vec<ExportFact> {
    let mut seen = BTreeSet::new();
    matches
        .iter()
        .filter_map(|captures| {
            let name = captures.get(labels::EXPORT_NAME)?;
            let declaration = captures.get(labels::EXPORT).unwrap_or(name);
            let key = (declaration.span().start_byte(), name.span().start_byte());
            seen.insert(key).then(|| ExportFact {
                name: name.text().to_owned(),
                location: declaration.location(),
            })
        })
        .collect()
}
