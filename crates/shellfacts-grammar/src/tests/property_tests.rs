//! Behavioural properties of the Bash transforms, checked on realistic
//! script fragments.

use rstest::rstest;
use shellfacts_core::{CaptureSet, CapturedNode, ImportPath, LineCol, Span};

use crate::labels;
use crate::transforms::{
    MAX_POSITIONAL_INDEX, is_exported, is_function_exported, normalize_body, parse_doc_comment,
    parse_import, parse_params,
};

fn node(text: &str) -> CapturedNode {
    CapturedNode::new(
        Span::new(0, 0, LineCol::new(3, 2), LineCol::new(3, 20)),
        "word",
        text,
    )
}

#[rstest]
#[case("{ echo \"$1\"; }", 1)]
#[case("{ echo \"$3\"; }", 3)]
#[case("{ echo \"$1\" \"$5\"; }", 5)]
#[case("{ echo hello; }", 0)]
fn highest_index_determines_count(#[case] body: &str, #[case] expected: usize) {
    assert_eq!(parse_params(body).len(), expected);
}

#[rstest]
#[case("{ echo \"$10\"; }", 10)]
#[case("{ echo \"${12}\"; }", 12)]
#[case("{ echo $1 $23; }", 23)]
fn multi_digit_index_is_read_whole(#[case] body: &str, #[case] expected: usize) {
    assert_eq!(parse_params(body).len(), expected);
}

#[rstest]
#[case("{ echo $2000; }")]
#[case("{ echo ${99999999999999999999}; }")]
fn index_above_cap_is_clamped(#[case] body: &str) {
    let params = parse_params(body);
    let cap = usize::try_from(MAX_POSITIONAL_INDEX).expect("cap fits usize");
    assert_eq!(params.len(), cap);
    let last = params.last().expect("last positional");
    assert_eq!(last.name(), format!("${MAX_POSITIONAL_INDEX}"));
}

#[test]
fn script_name_is_not_a_parameter() {
    assert!(parse_params("{ echo \"$0\"; }").is_empty());
}

#[test]
fn first_default_for_an_index_wins() {
    let params = parse_params("{ a=\"${1:-first}\"; b=\"${1:-second}\"; }");
    assert_eq!(params.len(), 1);
    assert_eq!(
        params.first().and_then(|param| param.default_value()),
        Some("first")
    );
}

#[test]
fn rest_marker_written_first_still_comes_last() {
    let names: Vec<String> = parse_params("{ for a in \"$@\"; do :; done; echo \"$2\"; }")
        .iter()
        .map(|param| param.name().to_owned())
        .collect();
    assert_eq!(names, ["$1", "$2", "$@"]);
}

#[test]
fn gaps_are_filled_with_required_parameters() {
    let names: Vec<String> = parse_params("{ echo \"$1\" \"$3\"; }")
        .iter()
        .map(|param| param.name().to_owned())
        .collect();
    assert_eq!(names, ["$1", "$2", "$3"]);
}

#[test]
fn defaulted_parameter_is_optional() {
    let params = parse_params(
        "{\n  local name=\"$1\"\n  local greeting=\"${2:-Hello}\"\n  echo \"$greeting, $name!\"\n}",
    );
    assert_eq!(params.len(), 2);
    let first = params.first().expect("first");
    let second = params.get(1).expect("second");
    assert!(!first.is_optional());
    assert!(second.is_optional());
    assert_eq!(second.default_value(), Some("Hello"));
}

#[test]
fn rest_marker_follows_positionals() {
    let params = parse_params("{ local cmd=\"$1\"; shift; for a in \"$@\"; do echo \"$a\"; done; }");
    assert_eq!(params.len(), 2);
    let rest = params.last().expect("rest");
    assert!(rest.is_rest());
    assert!(rest.is_optional());
    assert_eq!(rest.name(), "$@");
}

#[test]
fn star_rest_marker_is_detected() {
    let params = parse_params("{ echo $*; }");
    assert_eq!(params.len(), 1);
    assert_eq!(params.first().map(|param| param.name()), Some("$*"));
}

#[rstest]
#[case("greet", true)]
#[case("greeting", false)]
#[case("gree", false)]
fn export_requires_whole_token(#[case] name: &str, #[case] expected: bool) {
    let source = "greet() { echo hi; }\ngreeting() { echo hello; }\nexport -f greet\n";
    assert_eq!(is_function_exported(name, source), expected);
}

#[test]
fn export_may_precede_definition() {
    let source = "export -f later\nlater() { :; }\n";
    assert!(is_function_exported("later", source));
}

#[test]
fn capture_based_export_check_reads_function_name() {
    let source = "deploy() { :; }\nexport -f deploy\n";
    let captures: CaptureSet = [(labels::FUNCTION_NAME, node("deploy"))].into_iter().collect();
    assert!(is_exported(&captures, source));
    assert!(!is_exported(&CaptureSet::new(), source));
}

#[rstest]
#[case("./lib/utils.sh", "./lib/utils.sh")]
#[case("\"./config.sh\"", "./config.sh")]
#[case("'./helpers.sh'", "./helpers.sh")]
fn static_import_paths_are_unquoted(#[case] text: &str, #[case] expected: &str) {
    let captures: CaptureSet = [(labels::IMPORT_FROM, node(text))].into_iter().collect();
    let record = parse_import(&captures);
    assert_eq!(record.from, ImportPath::Static(expected.to_owned()));
    assert_eq!(record.name, expected);
    assert!(record.is_namespace);
    assert!(!record.is_type_only);
}

#[test]
fn dynamic_import_is_unresolved() {
    let captures: CaptureSet = [(labels::IMPORT_FROM, node("\"$LIB_DIR/x.sh\""))]
        .into_iter()
        .collect();
    let record = parse_import(&captures);
    assert!(!record.is_resolved());
    assert!(record.name.is_empty());
}

#[test]
fn import_location_is_one_based() {
    let captures: CaptureSet = [(labels::IMPORT_FROM, node("./a.sh"))].into_iter().collect();
    let record = parse_import(&captures);
    assert_eq!((record.location.line, record.location.column), (4, 3));
}

#[test]
fn normalisation_is_idempotent() {
    let once = normalize_body("\r\n  {\r\n  echo hi\r\n}  \r\n");
    assert_eq!(once, "{\n  echo hi\n}");
    assert_eq!(normalize_body(&once), once);
}

#[test]
fn whitespace_only_body_normalises_to_empty() {
    assert_eq!(normalize_body(" \r\n\t "), "");
}

#[rstest]
#[case("# Build the project", "Build the project")]
#[case("#", "")]
#[case("#!/bin/bash", "!/bin/bash")]
#[case("## Double", "# Double")]
fn doc_comment_strips_single_marker(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(parse_doc_comment(input), expected);
}
