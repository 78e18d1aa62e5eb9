//! Compiled extraction queries and capture reading.
//!
//! A [`CompiledQuery`] runs one pattern against a [`ParseResult`] and turns
//! each match into a [`CaptureSet`]. Predicates such as `#eq?` and `#match?`
//! are evaluated by Tree-sitter while matching; `_`-prefixed filter
//! captures are then dropped so transforms only see semantic labels.

use std::fmt;

use shellfacts_core::{CaptureSet, CapturedNode, QueryKind};
use tracing::warn;
use tree_sitter::{Query, QueryCursor, StreamingIterator};

use crate::error::SyntaxError;
use crate::parser::{ParseResult, bash_language};
use crate::position::node_span;

/// One extraction query compiled against the Bash grammar.
///
/// Compiled queries are immutable and can be shared between threads; every
/// call to [`CompiledQuery::captures`] uses its own cursor.
pub struct CompiledQuery {
    kind: QueryKind,
    query: Query,
}

impl fmt::Debug for CompiledQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledQuery")
            .field("kind", &self.kind)
            .field("patterns", &self.query.pattern_count())
            .field("captures", &self.query.capture_names())
            .finish()
    }
}

impl CompiledQuery {
    /// Compiles `source` as the query for `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`SyntaxError::QueryCompileError`] if the pattern is not
    /// valid for the Bash grammar (unknown node kinds or fields, malformed
    /// S-expressions, bad predicates).
    pub fn new(kind: QueryKind, source: &str) -> Result<Self, SyntaxError> {
        let query = Query::new(&bash_language(), source)
            .map_err(|e| SyntaxError::query_compile(kind, e.to_string()))?;
        Ok(Self { kind, query })
    }

    /// Returns the category this query extracts.
    #[must_use]
    pub const fn kind(&self) -> QueryKind {
        self.kind
    }

    /// Returns every capture name in the query, internal labels included.
    #[must_use]
    pub fn capture_names(&self) -> &[&str] {
        self.query.capture_names()
    }

    /// Runs the query and returns the captures of each match in document
    /// order.
    ///
    /// `match_limit` bounds the number of in-progress matches the cursor
    /// tracks; when it is exceeded Tree-sitter drops the oldest candidates
    /// and a warning is logged. Matches that bind only internal labels are
    /// skipped.
    #[must_use]
    pub fn captures(&self, parsed: &ParseResult, match_limit: u32) -> Vec<CaptureSet> {
        let source = parsed.source();
        let names = self.query.capture_names();
        let mut cursor = QueryCursor::new();
        cursor.set_match_limit(match_limit);

        let mut sets = Vec::new();
        {
            let mut matches = cursor.matches(&self.query, parsed.root_node(), source.as_bytes());
            while let Some(found) = matches.next() {
                let set: CaptureSet = found
                    .captures
                    .iter()
                    .filter_map(|capture| {
                        let index = usize::try_from(capture.index).ok()?;
                        let label = names.get(index)?;
                        let text = source.get(capture.node.byte_range()).unwrap_or_default();
                        let node = CapturedNode::new(node_span(capture.node), capture.node.kind(), text);
                        Some((*label, node))
                    })
                    .collect();
                if !set.is_empty() {
                    sets.push(set);
                }
            }
        }

        if cursor.did_exceed_match_limit() {
            warn!(
                kind = %self.kind,
                match_limit,
                "query exceeded its match limit; some matches may be missing"
            );
        }

        sets
    }
}

/// The compiled queries of a grammar, one per [`QueryKind`].
#[derive(Debug)]
pub struct CompiledQuerySet {
    queries: Vec<CompiledQuery>,
}

impl CompiledQuerySet {
    /// Compiles each `(kind, source)` pair.
    ///
    /// # Errors
    ///
    /// Returns the first compilation failure.
    pub fn compile<'a, I>(queries: I) -> Result<Self, SyntaxError>
    where
        I: IntoIterator<Item = (QueryKind, &'a str)>,
    {
        let compiled = queries
            .into_iter()
            .map(|(kind, source)| CompiledQuery::new(kind, source))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { queries: compiled })
    }

    /// Returns the query compiled for `kind`, if one was supplied.
    #[must_use]
    pub fn get(&self, kind: QueryKind) -> Option<&CompiledQuery> {
        self.queries.iter().find(|query| query.kind() == kind)
    }

    /// Iterates over the compiled queries in the order they were supplied.
    pub fn iter(&self) -> impl Iterator<Item = &CompiledQuery> {
        self.queries.iter()
    }

    /// Returns the number of compiled queries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.queries.len()
    }

    /// Returns `true` when no query was supplied.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }
}
