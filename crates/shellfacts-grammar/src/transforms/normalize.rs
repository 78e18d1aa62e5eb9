//! Structural normalisation of function bodies and here-documents.
//!
//! Only line endings and outer padding change. Comments, string literals and
//! here-document content are left exactly as written.

/// Normalises a function body for storage and comparison.
///
/// `\r\n` and lone `\r` become `\n`, then leading and trailing whitespace of
/// the whole span is trimmed. Interior whitespace and blank lines are kept.
/// Normalising twice gives the same result as normalising once.
///
/// # Examples
///
/// ```
/// use shellfacts_grammar::transforms::normalize_body;
///
/// assert_eq!(normalize_body("\r\n{\r\n  echo hi\r\n\r\n}\r\n"), "{\n  echo hi\n\n}");
/// ```
#[must_use]
pub fn normalize_body(body: &str) -> String {
    let unified = body.replace("\r\n", "\n").replace('\r', "\n");
    unified.trim().to_owned()
}

/// Normalises here-document content.
///
/// `<<-` here-documents (`tab_stripped`) have leading tabs removed from
/// every line, as the shell does when running them. Other here-documents
/// are returned unchanged.
#[must_use]
pub fn normalize_heredoc(content: &str, tab_stripped: bool) -> String {
    if !tab_stripped {
        return content.to_owned();
    }
    content
        .split('\n')
        .map(|line| line.trim_start_matches('\t'))
        .collect::<Vec<_>>()
        .join("\n")
}
