//! Export declaration query.
//!
//! Tree-sitter-bash parses `export`, `declare` and `typeset` as
//! `declaration_command` nodes. The keyword is an anonymous child, flags are
//! `word` nodes, and names are `variable_name` or `variable_assignment`
//! nodes.

/// Captures:
///
/// - `@export.name`: the exported variable or function name
/// - `@export`: the whole declaration
/// - `@_flag`: filter capture for `-f` and `-x` style flags
///
/// `export -f name` also satisfies the plain `export name` pattern, so a
/// consumer sees it twice; the extraction driver deduplicates by span.
pub const EXPORTS_QUERY: &str = r#"
; export VAR="value"
(declaration_command
  "export"
  (variable_assignment
    name: (variable_name) @export.name)) @export

; export VAR
(declaration_command
  "export"
  (variable_name) @export.name) @export

; export -f function_name
(declaration_command
  "export"
  (word) @_flag
  (variable_name) @export.name
  (#eq? @_flag "-f")) @export

; declare -x VAR="value"
(declaration_command
  "declare"
  (word) @_flag
  (variable_assignment
    name: (variable_name) @export.name)
  (#match? @_flag "^-.*x")) @export

; declare -x VAR
(declaration_command
  "declare"
  (word) @_flag
  (variable_name) @export.name
  (#match? @_flag "^-.*x")) @export

; typeset -x VAR="value"
(declaration_command
  "typeset"
  (word) @_flag
  (variable_assignment
    name: (variable_name) @export.name)
  (#match? @_flag "^-.*x")) @export

; typeset -x VAR
(declaration_command
  "typeset"
  (word) @_flag
  (variable_name) @export.name
  (#match? @_flag "^-.*x")) @export
"#;
