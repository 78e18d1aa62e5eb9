//! `source` / `.` statement query.

/// Captures:
///
/// - `@import.from`: the first argument only (bare word, double- or
///   single-quoted string, a bare expansion such as `$DIR/x.sh`, or a
///   command substitution)
/// - `@import`: the whole command
/// - `@_cmd`: filter capture tested against `source` and `.`
///
/// The `.` anchor pins the path to the argument directly after the command
/// name, so arguments passed to the sourced script are not imports.
pub const IMPORTS_QUERY: &str = r#"
(command
  name: (command_name
    (word) @_cmd)
  .
  argument: [
    (word)
    (string)
    (raw_string)
    (concatenation)
    (simple_expansion)
    (expansion)
    (command_substitution)
  ] @import.from
  (#match? @_cmd "^(source|\\.)$")) @import
"#;
