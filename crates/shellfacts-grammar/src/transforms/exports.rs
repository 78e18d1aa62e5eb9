//! Export detection for shell functions.
//!
//! Bash exports a function with `export -f name`. The directive may come
//! before or after the definition and anywhere in the file, so detection is
//! a scan of the whole source text rather than a structural check.

use shellfacts_core::CaptureSet;

use crate::queries::labels;

const EXPORT_KEYWORD: &str = "export";

/// Checks whether the function bound to `function.name` is exported
/// anywhere in `source`.
///
/// Returns `false` when the capture is missing.
#[must_use]
pub fn is_exported(captures: &CaptureSet, source: &str) -> bool {
    captures
        .text(labels::FUNCTION_NAME)
        .is_some_and(|name| is_function_exported(name, source))
}

/// Checks whether `source` contains an `export -f` directive naming
/// `function_name` as a whole token.
///
/// Tokens are separated by spaces or tabs, and a directive may list several
/// names (`export -f a b c`).
///
/// # Examples
///
/// ```
/// use shellfacts_grammar::transforms::is_function_exported;
///
/// let source = "greet() { echo hi; }\nexport -f greet\n";
/// assert!(is_function_exported("greet", source));
/// assert!(!is_function_exported("gree", source));
/// assert!(!is_function_exported("greeting", source));
/// ```
#[must_use]
pub fn is_function_exported(function_name: &str, source: &str) -> bool {
    if function_name.is_empty() || function_name.bytes().any(is_token_boundary) {
        return false;
    }

    let mut pos = 0;
    while let Some(found) = source.get(pos..).and_then(|rest| rest.find(EXPORT_KEYWORD)) {
        let start = pos.saturating_add(found);
        let after_keyword = start.saturating_add(EXPORT_KEYWORD.len());
        let starts_command = start == 0
            || source
                .as_bytes()
                .get(start.saturating_sub(1))
                .is_some_and(|b| is_command_start_boundary(*b));

        if !starts_command {
            pos = after_keyword;
            continue;
        }

        match scan_directive(source, after_keyword, function_name) {
            DirectiveScan::Named => return true,
            DirectiveScan::Ended(end) => pos = end.max(after_keyword),
        }
    }

    false
}

/// Outcome of reading the arguments after an `export` keyword.
enum DirectiveScan {
    /// The directive is `export -f` and lists the function.
    Named,
    /// The directive ended (or was not `export -f`) at this position.
    Ended(usize),
}

/// Reads `-f` and the following names, starting right after `export`.
fn scan_directive(source: &str, from: usize, function_name: &str) -> DirectiveScan {
    let bytes = source.as_bytes();

    let flag_start = skip_blanks(bytes, from);
    if flag_start == from {
        return DirectiveScan::Ended(from);
    }
    let (flag, mut pos) = read_token(source, flag_start);
    if flag != "-f" {
        return DirectiveScan::Ended(pos);
    }

    loop {
        let token_start = skip_blanks(bytes, pos);
        if token_start == pos {
            return DirectiveScan::Ended(pos);
        }
        let (token, end) = read_token(source, token_start);
        if token.is_empty() || token.starts_with('#') {
            return DirectiveScan::Ended(end);
        }
        if token == function_name {
            return DirectiveScan::Named;
        }
        pos = end;
    }
}

/// Returns the position of the first non-blank byte at or after `from`.
fn skip_blanks(bytes: &[u8], from: usize) -> usize {
    let mut at = from;
    while bytes.get(at).is_some_and(|b| matches!(b, b' ' | b'\t')) {
        at = at.saturating_add(1);
    }
    at
}

/// Reads one shell token starting at `from`, returning it and its end.
fn read_token(source: &str, from: usize) -> (&str, usize) {
    let bytes = source.as_bytes();
    let mut end = from;
    while bytes.get(end).is_some_and(|b| !is_token_boundary(*b)) {
        end = end.saturating_add(1);
    }
    (source.get(from..end).unwrap_or_default(), end)
}

/// Bytes that end a shell word.
const fn is_token_boundary(byte: u8) -> bool {
    matches!(
        byte,
        b' ' | b'\t' | b'\n' | b'\r' | b';' | b'&' | b'|' | b'<' | b'>' | b'(' | b')' | b'`'
    )
}

/// Bytes after which a new command can begin.
const fn is_command_start_boundary(byte: u8) -> bool {
    is_token_boundary(byte) || matches!(byte, b'{' | b'!')
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("export -f greet", true)]
    #[case("export\t-f \t greet", true)]
    #[case("greet() { :; }; export -f greet;", true)]
    #[case("export -f other greet", true)]
    #[case("if true; then export -f greet; fi", true)]
    #[case("export -f greet-all", false)]
    #[case("export -f other # greet", false)]
    #[case("export greet", false)]
    #[case("export -fn greet", false)]
    #[case("reexport -f greet", false)]
    #[case("export -f\ngreet", false)]
    #[case("echo 'export -f greeter'", false)]
    fn directive_forms(#[case] source: &str, #[case] expected: bool) {
        assert_eq!(is_function_exported("greet", source), expected, "{source:?}");
    }

    #[test]
    fn empty_name_is_never_exported() {
        assert!(!is_function_exported("", "export -f "));
    }

    #[test]
    fn names_with_word_separators_are_never_exported() {
        assert!(!is_function_exported("a b", "export -f a b"));
    }
}
