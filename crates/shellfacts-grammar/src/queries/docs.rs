//! Comment query.

/// Captures every comment as `@doc.content`. Grouping consecutive lines
/// into blocks happens in the extraction driver.
pub const DOC_COMMENTS_QUERY: &str = r"
(comment) @doc.content
";
