//! String literal query.

/// Captures `@string.value` for single-quoted, double-quoted and ANSI-C
/// strings, here-document bodies and bare here-string operands.
///
/// A quoted here-string operand (`<<< "text"`) is already a `string` or
/// `raw_string`, so only the bare `word` form needs its own pattern.
pub const STRINGS_QUERY: &str = r"
; Single-quoted strings (no expansion)
(raw_string) @string.value

; Double-quoted strings (with expansion)
(string) @string.value

; ANSI-C quoted strings ($'...')
(ansi_c_string) @string.value

; Here-documents
(heredoc_body) @string.value

; Here-strings with a bare operand
(herestring_redirect
  (word) @string.value)
";
