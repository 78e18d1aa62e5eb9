//! The assembled Bash grammar definition.

use shellfacts_core::{GrammarMeta, GrammarSource};

use crate::queries::ExtractionQueries;
use crate::transforms::{BashTransforms, GrammarTransforms};

/// Metadata, grammar packaging, queries and transforms for one language.
///
/// A definition is built once and shared read-only by every extraction
/// call; see [`BASH`].
#[derive(Debug, Clone)]
pub struct GrammarDefinition {
    /// Identification and file-matching metadata.
    pub meta: GrammarMeta,
    /// Where the Tree-sitter grammar comes from.
    pub source: GrammarSource,
    /// One query per extraction category.
    pub queries: ExtractionQueries,
    transforms: &'static dyn GrammarTransforms,
}

impl GrammarDefinition {
    /// Creates a definition from its parts.
    #[must_use]
    pub const fn new(
        meta: GrammarMeta,
        source: GrammarSource,
        queries: ExtractionQueries,
        transforms: &'static dyn GrammarTransforms,
    ) -> Self {
        Self {
            meta,
            source,
            queries,
            transforms,
        }
    }

    /// Returns the transform set.
    #[must_use]
    pub const fn transforms(&self) -> &'static dyn GrammarTransforms {
        self.transforms
    }
}

/// The Bash and shell-script grammar.
///
/// # Example
///
/// ```
/// use shellfacts_grammar::BASH;
///
/// assert_eq!(BASH.meta.id, "bash");
/// assert!(BASH.meta.extensions.contains(&".sh"));
/// assert!(BASH.transforms().parse_params("{ echo $1; }").len() == 1);
/// ```
pub static BASH: GrammarDefinition = GrammarDefinition::new(
    GrammarMeta {
        id: "bash",
        name: "Bash",
        description: "Bash and shell script grammar",
        extensions: &[".sh", ".bash", ".zsh"],
        globs: &[
            ".bashrc",
            ".bash_profile",
            ".bash_aliases",
            ".profile",
            ".zshrc",
        ],
    },
    GrammarSource::Bundled {
        package: "tree-sitter-bash",
    },
    ExtractionQueries::BASH,
    &BashTransforms,
);
