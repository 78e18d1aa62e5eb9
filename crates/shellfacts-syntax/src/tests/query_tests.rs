//! Compiles the Bash extraction queries against `tree-sitter-bash` and
//! checks what each one captures.

use rstest::rstest;
use shellfacts_core::{CaptureSet, QueryKind};
use shellfacts_grammar::{BASH, labels};

use crate::{CompiledQuery, CompiledQuerySet, Parser, SyntaxError};

const LIMIT: u32 = 1_000;

fn run(kind: QueryKind, source: &str) -> Vec<CaptureSet> {
    let query = CompiledQuery::new(kind, BASH.queries.get(kind)).expect("query compiles");
    let mut parser = Parser::new().expect("parser init");
    let parsed = parser.parse(source).expect("parse");
    query.captures(&parsed, LIMIT)
}

fn texts<'a>(sets: &'a [CaptureSet], label: &str) -> Vec<&'a str> {
    sets.iter().filter_map(|set| set.text(label)).collect()
}

// =============================================================================
// Compilation
// =============================================================================

#[rstest]
#[case(QueryKind::Functions)]
#[case(QueryKind::Strings)]
#[case(QueryKind::Imports)]
#[case(QueryKind::Exports)]
#[case(QueryKind::DocComments)]
fn every_bash_query_compiles(#[case] kind: QueryKind) {
    let query = CompiledQuery::new(kind, BASH.queries.get(kind)).expect("query compiles");
    assert_eq!(query.kind(), kind);
    assert!(!query.capture_names().is_empty());
}

#[test]
fn query_set_compiles_all_kinds() {
    let set = CompiledQuerySet::compile(BASH.queries.iter()).expect("queries compile");
    assert_eq!(set.len(), QueryKind::all().len());
    for kind in QueryKind::all() {
        assert!(set.get(*kind).is_some(), "missing {kind}");
    }
}

#[test]
fn invalid_query_reports_kind() {
    let err = CompiledQuery::new(QueryKind::Strings, "(no_such_node) @string.value")
        .expect_err("unknown node kind");
    assert!(matches!(
        err,
        SyntaxError::QueryCompileError {
            kind: QueryKind::Strings,
            ..
        }
    ));
    assert!(err.to_string().starts_with("invalid strings query"));
}

// =============================================================================
// Functions
// =============================================================================

#[rstest]
#[case("greet() {\n  echo hi\n}\n")]
#[case("function greet() {\n  echo hi\n}\n")]
#[case("function greet {\n  echo hi\n}\n")]
fn function_syntaxes_capture_name_and_body(#[case] source: &str) {
    let sets = run(QueryKind::Functions, source);
    assert_eq!(texts(&sets, labels::FUNCTION_NAME), ["greet"]);

    let set = sets.first().expect("one match");
    let body = set.text(labels::FUNCTION_BODY).expect("body");
    assert!(body.starts_with('{') && body.ends_with('}'));
    assert_eq!(set.text(labels::FUNCTION_PARAMS), Some(body));
    assert_eq!(set.get(labels::FUNCTION).map(|node| node.kind()), Some("function_definition"));
}

#[test]
fn function_location_is_one_based() {
    let sets = run(QueryKind::Functions, "echo start\n\ndeploy() {\n  :\n}\n");
    let location = sets
        .first()
        .and_then(|set| set.get(labels::FUNCTION))
        .map(|node| node.location())
        .expect("function");
    assert_eq!((location.line, location.column), (3, 1));
    assert_eq!(location.end_line, 5);
}

// =============================================================================
// Strings
// =============================================================================

#[test]
fn string_kinds_are_captured() {
    let source = "echo \"double\" 'single'\ncat <<EOF\nhello\nEOF\n";
    let sets = run(QueryKind::Strings, source);
    let kinds: Vec<&str> = sets
        .iter()
        .filter_map(|set| set.get(labels::STRING_VALUE))
        .map(|node| node.kind())
        .collect();
    assert!(kinds.contains(&"string"));
    assert!(kinds.contains(&"raw_string"));
    assert!(kinds.contains(&"heredoc_body"));

    let values = texts(&sets, labels::STRING_VALUE);
    assert!(values.contains(&"\"double\""));
    assert!(values.contains(&"'single'"));
}

#[test]
fn bare_here_string_operand_is_captured() {
    let sets = run(QueryKind::Strings, "cat <<< hello\ngrep x <<< \"quoted\"\n");
    let captured: Vec<(&str, &str)> = sets
        .iter()
        .filter_map(|set| set.get(labels::STRING_VALUE))
        .map(|node| (node.kind(), node.text()))
        .collect();
    assert_eq!(captured, [("word", "hello"), ("string", "\"quoted\"")]);
}

// =============================================================================
// Imports
// =============================================================================

#[test]
fn source_and_dot_imports_are_captured() {
    let source = "source ./lib/utils.sh\n. \"./config.sh\"\nsource './helpers.sh'\n";
    let sets = run(QueryKind::Imports, source);
    assert_eq!(
        texts(&sets, labels::IMPORT_FROM),
        ["./lib/utils.sh", "\"./config.sh\"", "'./helpers.sh'"]
    );
}

#[test]
fn expansion_import_paths_are_captured() {
    let sets = run(QueryKind::Imports, "source \"$LIB_DIR/x.sh\"\nsource $HOME/.env\n");
    assert_eq!(
        texts(&sets, labels::IMPORT_FROM),
        ["\"$LIB_DIR/x.sh\"", "$HOME/.env"]
    );
}

#[rstest]
#[case("source $(get_lib_path)\n", "$(get_lib_path)")]
#[case(". `get_path`\n", "`get_path`")]
fn command_substitution_import_paths_are_captured(#[case] source: &str, #[case] expected: &str) {
    let sets = run(QueryKind::Imports, source);
    assert_eq!(texts(&sets, labels::IMPORT_FROM), [expected]);
}

#[rstest]
#[case(". ./lib.sh --quiet extra\n")]
#[case("source ./lib.sh \"$@\"\n")]
#[case("source ./lib.sh $HOME 'x'\n")]
fn only_the_first_argument_is_an_import_path(#[case] source: &str) {
    let sets = run(QueryKind::Imports, source);
    assert_eq!(texts(&sets, labels::IMPORT_FROM), ["./lib.sh"]);
}

#[test]
fn other_commands_are_not_imports() {
    let sets = run(QueryKind::Imports, "echo ./lib/utils.sh\ncat config.sh\n");
    assert!(sets.is_empty());
}

#[test]
fn filter_captures_are_hidden() {
    let sets = run(QueryKind::Imports, "source ./a.sh\n");
    let set = sets.first().expect("one import");
    assert!(set.labels().all(|label| !label.starts_with('_')));
    assert!(set.contains(labels::IMPORT));
}

// =============================================================================
// Exports
// =============================================================================

#[test]
fn export_forms_are_captured() {
    let source = "export FOO=bar\nexport BAZ\nexport -f greet\ndeclare -x QUX=1\ntypeset -x ZED\n";
    let sets = run(QueryKind::Exports, source);
    let names = texts(&sets, labels::EXPORT_NAME);
    for expected in ["FOO", "BAZ", "greet", "QUX", "ZED"] {
        assert!(names.contains(&expected), "missing {expected} in {names:?}");
    }
}

#[test]
fn declare_without_export_flag_is_ignored() {
    let sets = run(QueryKind::Exports, "declare -r CONST=1\nlocal name=x\n");
    assert!(sets.is_empty());
}

// =============================================================================
// Comments
// =============================================================================

#[test]
fn every_comment_is_captured() {
    let source = "#!/bin/bash\n# Build it\necho hi # trailing\n";
    let sets = run(QueryKind::DocComments, source);
    assert_eq!(
        texts(&sets, labels::DOC_CONTENT),
        ["#!/bin/bash", "# Build it", "# trailing"]
    );
}
