//! Documentation comment cleanup.

/// Returns the readable text of one comment.
///
/// One leading `#` is removed, then surrounding whitespace is trimmed. A
/// bare `#` yields an empty string. Multi-line blocks are assembled by the
/// caller, one comment at a time.
///
/// # Examples
///
/// ```
/// use shellfacts_grammar::transforms::parse_doc_comment;
///
/// assert_eq!(parse_doc_comment("#   note   "), "note");
/// assert_eq!(parse_doc_comment("#"), "");
/// ```
#[must_use]
pub fn parse_doc_comment(comment: &str) -> String {
    comment
        .strip_prefix('#')
        .unwrap_or(comment)
        .trim()
        .to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# This is a comment", "This is a comment")]
    #[case("#This is a comment", "This is a comment")]
    #[case("#   This is a comment   ", "This is a comment")]
    #[case("#", "")]
    #[case("#   ", "")]
    #[case("## Section", "# Section")]
    #[case("#\tTabbed", "Tabbed")]
    fn strips_one_marker_and_trims(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(parse_doc_comment(input), expected);
    }
}
