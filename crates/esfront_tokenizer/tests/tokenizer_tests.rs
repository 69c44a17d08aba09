//! Tokenizer integration tests.
//!
//! Verifies rule priority, mode handling and rewinding.

use esfront_ast::syntax_kind::SyntaxKind;
use esfront_tokenizer::{LexMode, Token, Tokenizer};

/// Helper: pull every token from source under one mode.
fn scan_all_with(source: &str, mode: LexMode) -> Vec<Token<'_>> {
    let mut tokenizer = Tokenizer::new(source);
    let mut tokens = Vec::new();
    while let Some(token) = tokenizer.next(mode) {
        tokens.push(token);
    }
    tokens
}

/// Helper: (kind, value) pairs under the default mode.
fn scan_all(source: &str) -> Vec<(SyntaxKind, &str)> {
    scan_all_with(source, LexMode::DEFAULT)
        .into_iter()
        .map(|t| (t.kind, t.value))
        .collect()
}

fn scan_kinds(source: &str) -> Vec<SyntaxKind> {
    scan_all(source).into_iter().map(|(k, _)| k).collect()
}

#[test]
fn test_empty_source() {
    assert!(scan_all("").is_empty());
    assert!(scan_all("   \n\t  ").is_empty());
}

#[test]
fn test_equality_before_assignment() {
    assert_eq!(
        scan_all("a === b"),
        vec![
            (SyntaxKind::IdentifierName, "a"),
            (SyntaxKind::Operator, "==="),
            (SyntaxKind::IdentifierName, "b"),
        ]
    );
    assert_eq!(scan_all("a != b")[1], (SyntaxKind::Operator, "!="));
    assert_eq!(scan_all("a = b")[1], (SyntaxKind::AssignmentOperator, "="));
    assert_eq!(scan_all("a >>>= b")[1], (SyntaxKind::AssignmentOperator, ">>>="));
}

#[test]
fn test_relational_operators() {
    assert_eq!(scan_all("a <= b")[1], (SyntaxKind::Operator, "<="));
    assert_eq!(scan_all("a >>> b")[1], (SyntaxKind::Operator, ">>>"));
    let tokens = scan_all_with("a instanceof B", LexMode::DEFAULT);
    assert_eq!(tokens[1].value, "instanceof");
    assert_eq!(tokens[1].precedence, Some(11));
}

#[test]
fn test_operator_precedence_values() {
    let tokens = scan_all_with("a ** b * c + d << e < f == g & h ^ i | j && k || l", LexMode::DEFAULT);
    let precedences: Vec<u8> = tokens.iter().filter_map(|t| t.precedence).collect();
    assert_eq!(precedences, vec![15, 14, 13, 12, 11, 10, 9, 8, 7, 6, 5]);
}

#[test]
fn test_keywords_need_boundary() {
    assert_eq!(scan_kinds("letter"), vec![SyntaxKind::IdentifierName]);
    assert_eq!(scan_kinds("iffy"), vec![SyntaxKind::IdentifierName]);
    assert_eq!(scan_kinds("format"), vec![SyntaxKind::IdentifierName]);
    assert_eq!(scan_kinds("let x"), vec![SyntaxKind::DeclarationKeyword, SyntaxKind::IdentifierName]);
}

#[test]
fn test_keywords_disabled() {
    let tokens = scan_all_with("get class", LexMode::NAMES);
    assert!(tokens.iter().all(|t| t.kind == SyntaxKind::IdentifierName));
}

#[test]
fn test_expected_kinds() {
    let mut tokenizer = Tokenizer::new("  (x");
    let token = tokenizer.next(LexMode::expecting(&[SyntaxKind::OpenParenToken]));
    assert_eq!(token.map(|t| t.kind), Some(SyntaxKind::OpenParenToken));

    let mut tokenizer = Tokenizer::new("x");
    assert!(tokenizer.next(LexMode::expecting(&[SyntaxKind::OpenParenToken])).is_none());
    assert!(!tokenizer.is_exhausted());
}

#[test]
fn test_regex_vs_division() {
    assert_eq!(
        scan_kinds("a / b / c"),
        vec![
            SyntaxKind::IdentifierName,
            SyntaxKind::Operator,
            SyntaxKind::IdentifierName,
            SyntaxKind::Operator,
            SyntaxKind::IdentifierName,
        ]
    );
    let tokens = scan_all("x = /ab+c/g");
    assert_eq!(tokens[2], (SyntaxKind::RegularExpressionLiteral, "/ab+c/g"));
    assert_eq!(scan_kinds("1 / 2")[1], SyntaxKind::Operator);
    assert_eq!(scan_kinds("(a) / 2")[3], SyntaxKind::Operator);
}

#[test]
fn test_division_after_postfix_update() {
    let tokens = scan_all("a++ / 2 / 3");
    assert_eq!(tokens.len(), 6);
    assert!(tokens.iter().all(|(kind, _)| *kind != SyntaxKind::RegularExpressionLiteral));
    assert_eq!(tokens[2], (SyntaxKind::Operator, "/"));

    // A prefix `++` does not end an operand.
    let tokens = scan_all("x = ++/a/.lastIndex");
    assert_eq!(tokens[3], (SyntaxKind::RegularExpressionLiteral, "/a/"));
}

#[test_log::test]
fn test_rescan_as_regex_after_operand() {
    let mut tokenizer = Tokenizer::new("if (x) /re/g.test(s)");
    let mut last = None;
    for _ in 0..5 {
        last = tokenizer.next(LexMode::DEFAULT);
    }
    assert_eq!(last.map(|t| (t.kind, t.value)), Some((SyntaxKind::Operator, "/")));
    let token = tokenizer.rescan(LexMode::REGEX).unwrap();
    assert_eq!((token.kind, token.value), (SyntaxKind::RegularExpressionLiteral, "/re/g"));
    assert_eq!(tokenizer.next(LexMode::DEFAULT).map(|t| t.kind), Some(SyntaxKind::DotToken));
}

#[test]
fn test_strings_and_numbers() {
    assert_eq!(scan_all(r#"'it\'s'"#), vec![(SyntaxKind::StringLiteral, r"it\'s")]);
    assert_eq!(scan_all("\"a\""), vec![(SyntaxKind::StringLiteral, "a")]);
    assert_eq!(scan_all("0x1F"), vec![(SyntaxKind::NumericLiteral, "0x1F")]);
    assert_eq!(scan_all("6.02e23"), vec![(SyntaxKind::NumericLiteral, "6.02e23")]);
    assert_eq!(
        scan_all("1..toString"),
        vec![
            (SyntaxKind::NumericLiteral, "1."),
            (SyntaxKind::DotToken, "."),
            (SyntaxKind::IdentifierName, "toString"),
        ]
    );
}

#[test]
fn test_unicode_identifier() {
    assert_eq!(scan_all("café"), vec![(SyntaxKind::IdentifierName, "café")]);
}

#[test]
fn test_comments_are_stripped() {
    assert_eq!(scan_kinds("a /* note */ b // tail"), vec![SyntaxKind::IdentifierName, SyntaxKind::IdentifierName]);
}

#[test]
fn test_multiline_comment_terminates_with_significant_newline() {
    let mut tokenizer = Tokenizer::new("/* a\n b */ x");
    let token = tokenizer.next(LexMode::NEWLINE);
    assert_eq!(token.map(|t| t.kind), Some(SyntaxKind::SemicolonToken));

    let mut tokenizer = Tokenizer::new("/* a\n b */ x");
    let token = tokenizer.next(LexMode::DEFAULT);
    assert_eq!(token.map(|t| t.kind), Some(SyntaxKind::IdentifierName));
}

#[test]
fn test_significant_newline() {
    let mut tokenizer = Tokenizer::new("   \n  x");
    let token = tokenizer.next(LexMode::NEWLINE).map(|t| t.kind);
    assert_eq!(token, Some(SyntaxKind::SemicolonToken));

    let mut tokenizer = Tokenizer::new("   \n  x");
    let token = tokenizer.next(LexMode::DEFAULT);
    assert_eq!(token.map(|t| t.kind), Some(SyntaxKind::IdentifierName));
    assert!(token.is_some_and(|t| t.preceded_by_newline));
}

#[test]
fn test_template_mode() {
    let mut tokenizer = Tokenizer::new("`a ${b} c`");
    assert_eq!(tokenizer.next(LexMode::DEFAULT).map(|t| t.kind), Some(SyntaxKind::Backtick));
    let head = tokenizer.next(LexMode::TEMPLATE).unwrap();
    assert_eq!((head.kind, head.value, head.raw), (SyntaxKind::TemplateChunk, "a ", "a ${"));
    assert_eq!(tokenizer.next(LexMode::DEFAULT).map(|t| t.value), Some("b"));
    assert_eq!(tokenizer.next(LexMode::DEFAULT).map(|t| t.kind), Some(SyntaxKind::CloseBraceToken));
    let tail = tokenizer.next(LexMode::TEMPLATE).unwrap();
    assert_eq!((tail.value, tail.raw), (" c", " c`"));
    assert!(tokenizer.next(LexMode::DEFAULT).is_none());
    assert!(tokenizer.is_exhausted());
}

#[test]
fn test_for_keyword() {
    let tokens = scan_all("for await (const x of xs)");
    assert_eq!(tokens[0], (SyntaxKind::ForKeyword, "for await"));
    assert_eq!(tokens[1], (SyntaxKind::DeclarationKeyword, "const"));
    assert_eq!(tokens[3], (SyntaxKind::Operator, "of"));
}

#[test_log::test]
fn test_previous_relexes_without_keywords() {
    let mut tokenizer = Tokenizer::new("get: 1");
    assert_eq!(tokenizer.next(LexMode::DEFAULT).map(|t| t.kind), Some(SyntaxKind::GetKeyword));
    assert_eq!(tokenizer.next(LexMode::DEFAULT).map(|t| t.kind), Some(SyntaxKind::ColonToken));
    let token = tokenizer.previous(LexMode::NAMES).unwrap();
    assert_eq!((token.kind, token.value), (SyntaxKind::IdentifierName, "get"));
    assert_eq!(tokenizer.next(LexMode::DEFAULT).map(|t| t.kind), Some(SyntaxKind::ColonToken));
}

#[test_log::test]
fn test_rescan_current() {
    let mut tokenizer = Tokenizer::new("class");
    assert_eq!(tokenizer.next(LexMode::DEFAULT).map(|t| t.kind), Some(SyntaxKind::ClassKeyword));
    let token = tokenizer.rescan(LexMode::NAMES).unwrap();
    assert_eq!(token.kind, SyntaxKind::IdentifierName);
    assert_eq!(token.range.pos, 0);
}

#[test]
fn test_position_marker() {
    let mut tokenizer = Tokenizer::new("a  bc");
    tokenizer.next(LexMode::DEFAULT);
    tokenizer.next(LexMode::DEFAULT);
    assert_eq!(tokenizer.position_marker(), 3);
    assert_eq!(tokenizer.offset(), 5);
}
