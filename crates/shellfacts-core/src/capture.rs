//! Capture types produced by query execution.
//!
//! A [`CaptureSet`] is built once per query match and maps each capture
//! label (for example `function.name`) to the [`CapturedNode`] it bound.
//! Transforms only ever read from it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::span::{SourceLocation, Span};

/// Prefix marking a capture label as an internal predicate filter.
///
/// Such labels (`@_cmd`, `@_flag`) exist only so query predicates can test
/// them and are never exposed to transforms.
pub const INTERNAL_LABEL_PREFIX: char = '_';

/// Returns `true` when `label` names an internal filter capture.
#[must_use]
pub fn is_internal_label(label: &str) -> bool {
    label.starts_with(INTERNAL_LABEL_PREFIX)
}

/// A single captured syntax node together with its source text.
///
/// # Example
///
/// ```
/// use shellfacts_core::{CapturedNode, LineCol, Span};
///
/// let node = CapturedNode::new(
///     Span::new(0, 5, LineCol::new(0, 0), LineCol::new(0, 5)),
///     "word",
///     "greet",
/// );
/// assert_eq!(node.kind(), "word");
/// assert_eq!(node.text(), "greet");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedNode {
    /// The span of the captured node in the source.
    pub span: Span,
    /// The Tree-sitter node kind (e.g. `"word"`, `"compound_statement"`).
    pub kind: String,
    /// The source text covered by the node.
    pub text: String,
}

impl CapturedNode {
    /// Creates a new captured node.
    #[must_use]
    pub fn new(span: Span, kind: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            span,
            kind: kind.into(),
            text: text.into(),
        }
    }

    /// Returns a reference to the captured span.
    #[must_use]
    pub const fn span(&self) -> &Span {
        &self.span
    }

    /// Returns the Tree-sitter node kind.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Returns the source text of the node.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the one-based location of the node.
    #[must_use]
    pub const fn location(&self) -> SourceLocation {
        SourceLocation::from_span(&self.span)
    }
}

/// The captures bound by one query match, keyed by label.
///
/// When a pattern binds the same label more than once, the first binding is
/// kept.
///
/// # Example
///
/// ```
/// use shellfacts_core::{CaptureSet, CapturedNode, Span};
///
/// let mut captures = CaptureSet::new();
/// captures.insert("function.name", CapturedNode::new(Span::default(), "word", "greet"));
/// assert_eq!(captures.text("function.name"), Some("greet"));
/// assert!(captures.get("function.body").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CaptureSet {
    inner: BTreeMap<String, CapturedNode>,
}

impl CaptureSet {
    /// Creates an empty capture set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            inner: BTreeMap::new(),
        }
    }

    /// Binds `label` to `node`.
    ///
    /// Returns `false` and leaves the set unchanged if the label was already
    /// bound or names an internal filter capture.
    pub fn insert(&mut self, label: impl Into<String>, node: CapturedNode) -> bool {
        let key: String = label.into();
        if is_internal_label(&key) || self.inner.contains_key(&key) {
            return false;
        }
        self.inner.insert(key, node);
        true
    }

    /// Returns the node bound to `label`, if any.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&CapturedNode> {
        self.inner.get(label)
    }

    /// Returns the source text bound to `label`, if any.
    #[must_use]
    pub fn text(&self, label: &str) -> Option<&str> {
        self.get(label).map(CapturedNode::text)
    }

    /// Returns the first bound node among `labels`, in the order given.
    #[must_use]
    pub fn first_of(&self, labels: &[&str]) -> Option<&CapturedNode> {
        labels.iter().find_map(|label| self.get(label))
    }

    /// Returns `true` when `label` is bound.
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.inner.contains_key(label)
    }

    /// Returns the bound labels in sorted order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.inner.keys().map(String::as_str)
    }

    /// Returns the number of bound labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` when no label is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl<L: Into<String>> FromIterator<(L, CapturedNode)> for CaptureSet {
    fn from_iter<I: IntoIterator<Item = (L, CapturedNode)>>(iter: I) -> Self {
        let mut captures = Self::new();
        for (label, node) in iter {
            captures.insert(label, node);
        }
        captures
    }
}
