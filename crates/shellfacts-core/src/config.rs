//! Extraction configuration for resource limits and optional passes.

use serde::{Deserialize, Serialize};

/// Extraction configuration controlling input size, match limits, and doc
/// comment attachment.
///
/// # Defaults
///
/// - `max_source_bytes`: 4 194 304 (4 MiB)
/// - `max_matches_per_query`: 10 000
/// - `attach_doc_comments`: `true`
///
/// Deserialising a partial document fills the missing fields from the
/// defaults, so a host can embed this in its own configuration file.
///
/// # Example
///
/// ```
/// use shellfacts_core::ExtractionConfig;
///
/// let config = ExtractionConfig::default();
/// assert_eq!(config.max_matches_per_query(), 10_000);
/// assert!(config.attach_doc_comments());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Largest source accepted for extraction, in bytes.
    max_source_bytes: usize,
    /// Maximum in-progress matches per query cursor.
    max_matches_per_query: u32,
    /// Whether comment blocks directly above a function become its doc.
    attach_doc_comments: bool,
}

impl ExtractionConfig {
    /// Creates a new configuration with explicit values.
    #[must_use]
    pub const fn new(
        max_source_bytes: usize,
        max_matches_per_query: u32,
        attach_doc_comments: bool,
    ) -> Self {
        Self {
            max_source_bytes,
            max_matches_per_query,
            attach_doc_comments,
        }
    }

    /// Returns the maximum accepted source size in bytes.
    #[must_use]
    pub const fn max_source_bytes(&self) -> usize {
        self.max_source_bytes
    }

    /// Returns the per-query match limit.
    #[must_use]
    pub const fn max_matches_per_query(&self) -> u32 {
        self.max_matches_per_query
    }

    /// Returns whether doc comments are attached to functions.
    #[must_use]
    pub const fn attach_doc_comments(&self) -> bool {
        self.attach_doc_comments
    }
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            max_source_bytes: 4_194_304,
            max_matches_per_query: 10_000,
            attach_doc_comments: true,
        }
    }
}
