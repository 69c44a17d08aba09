//! Malformed input fails with a located error and never yields a partial tree.

use esfront_diagnostics::messages;
use esfront_tests::parse_error;

fn error_code(source: &str) -> u32 {
    match parse_error(source) {
        Some(error) => error.code,
        None => panic!("expected {source:?} to fail"),
    }
}

const MALFORMED: &[&str] = &[
    "\"abc",
    "'abc\ndef'",
    "`abc",
    "a)",
    "]",
    "}",
    "* 2",
    "a +",
    "f(a",
    "[1, 2",
    "{ a;",
    "if (a",
    "if a",
    "class A {",
    "x = @",
    "a #b",
    "for (a b) {}",
    "()",
    "a.",
    "a.+",
    "let x = 1 +* 2",
    "import { a from 'm'",
    "x = { a: }",
];

#[test]
fn test_malformed_corpus_fails() {
    for source in MALFORMED {
        assert!(parse_error(source).is_some(), "expected {source:?} to fail");
    }
}

#[test]
fn test_unterminated_string_is_invalid_character() {
    assert_eq!(error_code("\"abc"), messages::INVALID_CHARACTER.code);
    assert_eq!(error_code("'abc\ndef'"), messages::INVALID_CHARACTER.code);
}

#[test]
fn test_unmatched_closing_bracket() {
    assert_eq!(error_code("a)"), messages::UNEXPECTED_TOKEN_0.code);
    assert_eq!(error_code("]"), messages::UNEXPECTED_TOKEN_0.code);
}

#[test]
fn test_bare_operator() {
    assert_eq!(error_code("* 2"), messages::MISSING_LEFT_OPERAND.code);
}

#[test]
fn test_end_of_input() {
    assert_eq!(error_code("a +"), messages::UNEXPECTED_END_OF_INPUT.code);
    assert_eq!(error_code("f(a"), messages::_0_EXPECTED_AT_END_OF_INPUT.code);
}

#[test]
fn test_error_reports_token_and_position() {
    let error = parse_error("let a = 1;\nlet b = );").unwrap();
    assert_eq!(error.code, messages::UNEXPECTED_TOKEN_0.code);
    assert_eq!(error.token, Some("CloseParenToken"));
    assert_eq!((error.line(), error.column()), (2, 9));
    assert_eq!(error.offset, 19);
    assert!(error.to_string().contains("')'"), "{error}");
}
