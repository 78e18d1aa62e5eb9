//! Resolution of `source` / `.` statements.
//!
//! Shell has no named imports: sourcing a file brings all of its
//! definitions into scope. An import's name is therefore its path, and every
//! import is a namespace import.
//!
//! Paths that need runtime evaluation (`$VAR`, `$(cmd)`, `` `cmd` ``) are
//! not guessed at. They become [`ImportPath::Dynamic`] records.

use shellfacts_core::{CapturedNode, CaptureSet, ImportPath, ImportRecord, SourceLocation};

use crate::queries::labels;

/// Builds an [`ImportRecord`] from the captures of one import match.
///
/// The location prefers the whole-statement `import` capture over the bare
/// `import.from` path. A match without `import.from` yields an unresolved
/// record with an empty raw path.
#[must_use]
pub fn parse_import(captures: &CaptureSet) -> ImportRecord {
    let location = captures
        .first_of(&[labels::IMPORT, labels::IMPORT_FROM])
        .map_or(SourceLocation::UNKNOWN, CapturedNode::location);

    let Some(target) = captures.text(labels::IMPORT_FROM) else {
        return ImportRecord::unresolved("", location);
    };

    match resolve_import_path(target) {
        ImportPath::Static(path) => ImportRecord::resolved(path, location),
        ImportPath::Dynamic { raw } => ImportRecord::unresolved(raw, location),
    }
}

/// Resolves the captured path text of an import.
///
/// One layer of matching single or double quotes is removed. The result is
/// dynamic when it contains `$` (variable expansion or `$(…)`) or a pair of
/// backticks, and when it is empty.
///
/// # Examples
///
/// ```
/// use shellfacts_core::ImportPath;
/// use shellfacts_grammar::transforms::resolve_import_path;
///
/// assert_eq!(
///     resolve_import_path("\"./lib/helpers.sh\""),
///     ImportPath::Static(String::from("./lib/helpers.sh"))
/// );
/// assert!(!resolve_import_path("\"$LIB_DIR/x.sh\"").is_resolved());
/// ```
#[must_use]
pub fn resolve_import_path(text: &str) -> ImportPath {
    let unquoted = strip_matching_quotes(text);
    if unquoted.is_empty() || is_dynamic(unquoted) {
        ImportPath::Dynamic {
            raw: unquoted.to_owned(),
        }
    } else {
        ImportPath::Static(unquoted.to_owned())
    }
}

fn strip_matching_quotes(text: &str) -> &str {
    ['"', '\'']
        .into_iter()
        .find_map(|quote| text.strip_prefix(quote)?.strip_suffix(quote))
        .unwrap_or(text)
}

fn is_dynamic(path: &str) -> bool {
    path.contains('$') || path.matches('`').nth(1).is_some()
}
