// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use proptest::prelude::*;
use yare::parameterized;

const DEMO: &str = r#"
args: [input/a.txt]
input/a.txt: "hello\n"
stdout: "hello\n"
stderr: |
  warning: demo stderr line
"#;

#[test]
fn test_parse_demo_casefile() {
    let casefile = parse(DEMO).unwrap();

    assert_eq!(casefile.args(), ["input/a.txt"]);
    assert_eq!(
        casefile.files(),
        [FixtureFile::new("input/a.txt", "hello\n")]
    );
    assert_eq!(casefile.expected_stdout(), Some("hello\n"));
    assert_eq!(casefile.expected_stderr(), Some("warning: demo stderr line"));
}

#[test]
fn test_args_keep_positional_order() {
    let casefile = parse("args: [--flag, b, a, '']\nf.txt: x\nstdout: ''\n").unwrap();
    assert_eq!(casefile.args(), ["--flag", "b", "a", ""]);
}

#[test]
fn test_empty_args_are_allowed() {
    let casefile = parse("args: []\nf.txt: x\nstdout: ''\n").unwrap();
    assert!(casefile.args().is_empty());
}

#[test]
fn test_files_follow_document_order() {
    let source = "\
z.txt: last-alpha
args: []
a.txt: first-alpha
stdout: ''
m/n.txt: middle
";
    let casefile = parse(source).unwrap();
    let paths: Vec<&str> = casefile.files().iter().map(|f| f.path.as_str()).collect();
    assert_eq!(paths, ["z.txt", "a.txt", "m/n.txt"]);
}

#[test]
fn test_file_paths_are_not_trimmed() {
    let casefile = parse("args: []\n' padded.txt ': x\nstdout: ''\n").unwrap();
    assert_eq!(casefile.files()[0].path, " padded.txt ");
}

#[test]
fn test_stdout_only_leaves_stderr_absent() {
    let casefile = parse("args: []\nf.txt: x\nstdout: ''\n").unwrap();
    assert_eq!(casefile.expected_stdout(), Some(""));
    assert_eq!(casefile.expected_stderr(), None);
}

#[parameterized(
    single_newline = { "\"warn\\n\"", "warn" },
    no_newline = { "warn", "warn" },
    two_newlines = { "\"warn\\n\\n\"", "warn\n" },
    only_newline = { "\"\\n\"", "" },
)]
fn stderr_strips_one_trailing_newline(yaml_value: &str, expected: &str) {
    let source = format!("args: []\nf.txt: x\nstderr: {yaml_value}\n");
    let casefile = parse(&source).unwrap();
    assert_eq!(casefile.expected_stderr(), Some(expected));
}

#[test]
fn test_stdout_keeps_trailing_newline() {
    let casefile = parse("args: []\nf.txt: x\nstdout: |\n  out\n").unwrap();
    assert_eq!(casefile.expected_stdout(), Some("out\n"));
}

#[test]
fn test_crlf_source_matches_lf_source() {
    let crlf = DEMO.replace('\n', "\r\n");
    assert_eq!(parse(&crlf).unwrap(), parse(DEMO).unwrap());
}

#[test]
fn test_declared_channels_track_presence() {
    let (_, declared) = parse_with_channels("args: []\nf.txt: x\nstdout: ''\n").unwrap();
    assert_eq!(
        declared,
        DeclaredChannels {
            stdout: true,
            stderr: false
        }
    );

    let (_, declared) =
        parse_with_channels("args: []\nf.txt: x\nstdout: ''\nstderr: ''\n").unwrap();
    assert!(declared.stdout && declared.stderr);
}

#[parameterized(
    list_document = { "- a\n- b\n", "must be a YAML object" },
    scalar_document = { "just text\n", "must be a YAML object" },
    null_document = { "~\n", "must be a YAML object" },
    missing_args = { "f.txt: x\nstdout: ''\n", "`args`" },
    args_not_list = { "args: input.txt\nf.txt: x\nstdout: ''\n", "`args`" },
    arg_not_string = { "args: [a, 2]\nf.txt: x\nstdout: ''\n", "index 1" },
    no_channels = { "args: []\nf.txt: x\n", "at least one expected channel" },
    stdout_not_string = { "args: []\nf.txt: x\nstdout: 12\n", "`stdout` must be a string" },
    stdout_null = { "args: []\nf.txt: x\nstdout:\n", "`stdout` must be a string" },
    stderr_not_string = { "args: []\nf.txt: x\nstderr: [a]\n", "`stderr` must be a string" },
    empty_file_key = { "args: []\n'  ': x\nstdout: ''\n", "empty fixture file key" },
    file_not_string = { "args: []\nin.txt: 3\nstdout: ''\n", "`in.txt`" },
    no_files = { "args: []\nstdout: ''\n", "at least one fixture file key" },
    sequence_key = { "args: []\n? [a, b]\n: x\nstdout: ''\n", "must be a scalar" },
    invalid_yaml = { "args: [unclosed\n", "not valid YAML" },
)]
fn rejects_malformed_casefile(source: &str, needle: &str) {
    let err = parse(source).unwrap_err();
    let message = err.to_string();
    assert!(
        message.contains(needle),
        "expected {needle:?} in error message, got {message:?}"
    );
}

#[parameterized(
    number = { "7: x", "7" },
    boolean = { "true: x", "true" },
    null = { "~: x", "null" },
    float = { "1.5: x", "1.5" },
)]
fn scalar_keys_name_files(line: &str, path: &str) {
    let source = format!("args: ['7']\n{line}\nstdout: ''\n");
    let casefile = parse(&source).unwrap();
    assert_eq!(casefile.files(), [FixtureFile::new(path, "x")]);
}

#[test]
fn test_args_checked_before_channels() {
    let err = parse("f.txt: x\n").unwrap_err();
    assert!(matches!(err, SchemaError::MissingArgs));
}

#[test]
fn test_channels_checked_before_files() {
    let err = parse("args: []\n").unwrap_err();
    assert!(matches!(err, SchemaError::MissingExpectedOutput));
}

#[test]
fn test_stdout_checked_before_stderr() {
    let err = parse("args: []\nf.txt: x\nstdout: 1\nstderr: 2\n").unwrap_err();
    assert!(matches!(err, SchemaError::StdoutNotString));
}

#[test]
fn test_first_bad_arg_is_reported() {
    let err = parse("args: [ok, 1, 2]\nf.txt: x\nstdout: ''\n").unwrap_err();
    assert!(matches!(err, SchemaError::ArgNotString { index: 1 }));
}

#[test]
fn test_duplicate_file_keys_are_rejected() {
    let err = parse("args: []\nf.txt: one\nf.txt: two\nstdout: ''\n").unwrap_err();
    assert!(matches!(err, SchemaError::Yaml(_)));
}

proptest! {
    #[test]
    fn crlf_normalization_never_changes_parse(
        content in "[a-z ]{0,12}(\n[a-z]{1,12}){0,3}",
        arg in "[a-z0-9-]{1,8}",
    ) {
        let lf = format!(
            "args: [{arg}]\nin.txt: |\n  {}\nstdout: ok\n",
            content.replace('\n', "\n  ")
        );
        let crlf = lf.replace('\n', "\r\n");
        prop_assert_eq!(parse(&crlf).ok(), parse(&lf).ok());
    }
}
