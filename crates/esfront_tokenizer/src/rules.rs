//! The lexical rule table.
//!
//! Rules are tried in table order at the current offset and the first match
//! wins, so longer spellings precede their prefixes (`===` before `==` before
//! `=`). Keyword rules come first and only match on an identifier boundary.

use crate::char_codes::*;
use crate::token::LexMode;
use esfront_ast::syntax_kind::SyntaxKind;
use std::ops::Range;

/// A successful match: `len` bytes were consumed and `value` is the captured
/// part, relative to the match start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme {
    pub len: usize,
    pub value: Range<usize>,
}

impl Lexeme {
    pub fn whole(len: usize) -> Self {
        Self { len, value: 0..len }
    }

    pub fn new(len: usize, value: Range<usize>) -> Self {
        Self { len, value }
    }
}

pub type Scanner = fn(&str) -> Option<Lexeme>;

#[derive(Clone, Copy)]
pub enum Matcher {
    /// Any of these words, followed by an identifier boundary.
    Words(&'static [&'static str]),
    /// Any of these exact spellings.
    Punctuators(&'static [&'static str]),
    Scan(Scanner),
}

impl std::fmt::Debug for Matcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Matcher::Words(words) => f.debug_tuple("Words").field(words).finish(),
            Matcher::Punctuators(spellings) => f.debug_tuple("Punctuators").field(spellings).finish(),
            Matcher::Scan(_) => f.write_str("Scan"),
        }
    }
}

impl Matcher {
    pub fn apply(&self, rest: &str) -> Option<Lexeme> {
        match self {
            Matcher::Words(words) => words
                .iter()
                .find(|word| rest.starts_with(**word) && at_word_boundary(rest, word.len()))
                .map(|word| Lexeme::whole(word.len())),
            Matcher::Punctuators(spellings) => spellings
                .iter()
                .find(|spelling| rest.starts_with(**spelling))
                .map(|spelling| Lexeme::whole(spelling.len())),
            Matcher::Scan(scan) => scan(rest),
        }
    }
}

/// How a rule relates to significant-newline mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewlineUse {
    Any,
    /// Only when newlines are significant.
    Significant,
    /// Only when newlines are plain whitespace.
    Insignificant,
}

#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub kind: SyntaxKind,
    pub matcher: Matcher,
    pub keyword: bool,
    pub precedence: Option<u8>,
    pub newline: NewlineUse,
    /// May match directly after a token that ends an operand.
    pub after_operand: bool,
}

impl Rule {
    const fn new(kind: SyntaxKind, matcher: Matcher) -> Rule {
        Rule {
            kind,
            matcher,
            keyword: false,
            precedence: None,
            newline: NewlineUse::Any,
            after_operand: true,
        }
    }

    const fn words(kind: SyntaxKind, words: &'static [&'static str]) -> Rule {
        Rule {
            keyword: true,
            ..Rule::new(kind, Matcher::Words(words))
        }
    }

    const fn keyword_scan(kind: SyntaxKind, scan: Scanner) -> Rule {
        Rule {
            keyword: true,
            ..Rule::new(kind, Matcher::Scan(scan))
        }
    }

    const fn punct(kind: SyntaxKind, spellings: &'static [&'static str]) -> Rule {
        Rule::new(kind, Matcher::Punctuators(spellings))
    }

    const fn scan(kind: SyntaxKind, scan: Scanner) -> Rule {
        Rule::new(kind, Matcher::Scan(scan))
    }

    const fn precedence(self, precedence: u8) -> Rule {
        Rule {
            precedence: Some(precedence),
            ..self
        }
    }

    const fn newline(self, newline: NewlineUse) -> Rule {
        Rule { newline, ..self }
    }

    const fn never_after_operand(self) -> Rule {
        Rule {
            after_operand: false,
            ..self
        }
    }

    /// Whether this rule may be tried under `mode`.
    pub fn eligible(&self, mode: &LexMode, after_operand: bool) -> bool {
        if self.keyword && !mode.keywords {
            return false;
        }
        if after_operand && !self.after_operand && !mode.regex {
            return false;
        }
        let newline_ok = match self.newline {
            NewlineUse::Any => true,
            NewlineUse::Significant => mode.significant_newline,
            NewlineUse::Insignificant => !mode.significant_newline,
        };
        newline_ok && mode.allows(self.kind)
    }
}

use SyntaxKind as K;

pub static RULES: &[Rule] = &[
    // Keywords
    Rule::words(K::ReservedWord, &["undefined", "null"]),
    Rule::words(K::BooleanLiteral, &["true", "false"]),
    Rule::words(K::DeclarationKeyword, &["let", "const", "var"]),
    Rule::keyword_scan(K::FunctionKeyword, scan_function),
    Rule::words(K::Operator, &["void", "typeof", "delete"]).precedence(16),
    Rule::words(K::ThisKeyword, &["this"]),
    Rule::words(K::NewKeyword, &["new"]).precedence(19),
    Rule::keyword_scan(K::YieldKeyword, scan_yield),
    Rule::keyword_scan(K::ForKeyword, scan_for),
    Rule::keyword_scan(K::Operator, scan_relational_word).precedence(11),
    Rule::words(K::DoKeyword, &["do"]),
    Rule::words(K::WhileKeyword, &["while"]),
    Rule::keyword_scan(K::ContinueKeyword, scan_continue),
    Rule::keyword_scan(K::BreakKeyword, scan_break),
    Rule::words(K::ClassKeyword, &["class"]),
    Rule::words(K::ExtendsKeyword, &["extends"]),
    Rule::words(K::StaticKeyword, &["static"]),
    Rule::words(K::GetKeyword, &["get"]),
    Rule::words(K::SetKeyword, &["set"]),
    Rule::words(K::ReturnKeyword, &["return"]),
    Rule::words(K::ImportKeyword, &["import"]),
    Rule::keyword_scan(K::ImportOperator, scan_import_operator),
    Rule::keyword_scan(K::ExportDefaultKeyword, scan_export_default),
    Rule::words(K::ExportKeyword, &["export"]),
    Rule::words(K::IfKeyword, &["if"]),
    Rule::words(K::ElseKeyword, &["else"]),
    Rule::words(K::SwitchKeyword, &["switch"]),
    Rule::words(K::CaseKeyword, &["case"]),
    Rule::words(K::DefaultKeyword, &["default"]),
    // Punctuation, literals and trivia
    Rule::punct(K::DotDotDotToken, &["..."]),
    Rule::scan(K::CommentTrivia, scan_block_comment),
    Rule::scan(K::CommentTrivia, scan_line_comment),
    Rule::scan(K::RegularExpressionLiteral, scan_regex).never_after_operand(),
    Rule::punct(K::ArrowToken, &["=>"]),
    Rule::punct(K::Operator, &["===", "!==", "==", "!="]).precedence(10),
    Rule::punct(
        K::AssignmentOperator,
        &[
            ">>>=", "**=", "<<=", ">>=", "&&=", "||=", "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=",
        ],
    ),
    Rule::punct(K::Operator, &["++", "--", "!", "~"]).precedence(16),
    Rule::punct(K::Operator, &["**"]).precedence(15),
    Rule::punct(K::Operator, &["*", "/", "%"]).precedence(14),
    Rule::punct(K::Operator, &["+", "-"]).precedence(13),
    Rule::punct(K::Operator, &[">>>", "<<", ">>"]).precedence(12),
    Rule::punct(K::Operator, &["<=", ">=", "<", ">"]).precedence(11),
    Rule::punct(K::Operator, &["&&"]).precedence(6),
    Rule::punct(K::Operator, &["||"]).precedence(5),
    Rule::punct(K::Operator, &["&"]).precedence(9),
    Rule::punct(K::Operator, &["^"]).precedence(8),
    Rule::punct(K::Operator, &["|"]).precedence(7),
    Rule::punct(K::AssignmentOperator, &["="]),
    Rule::scan(K::NumericLiteral, scan_number),
    Rule::scan(K::IdentifierName, scan_identifier),
    Rule::punct(K::DotToken, &["."]),
    Rule::scan(K::StringLiteral, scan_string),
    Rule::punct(K::Backtick, &["`"]),
    Rule::punct(K::QuestionToken, &["?"]),
    Rule::punct(K::OpenParenToken, &["("]),
    Rule::punct(K::CloseParenToken, &[")"]),
    Rule::punct(K::OpenBraceToken, &["{"]),
    Rule::punct(K::CloseBraceToken, &["}"]),
    Rule::punct(K::OpenBracketToken, &["["]),
    Rule::punct(K::CloseBracketToken, &["]"]),
    Rule::punct(K::SemicolonToken, &[";"]),
    Rule::scan(K::SemicolonToken, scan_newline).newline(NewlineUse::Significant),
    Rule::scan(K::WhitespaceTrivia, scan_inline_whitespace).newline(NewlineUse::Significant),
    Rule::scan(K::WhitespaceTrivia, scan_whitespace).newline(NewlineUse::Insignificant),
    Rule::punct(K::ColonToken, &[":"]),
    Rule::punct(K::CommaToken, &[","]),
];

/// The only rule tried in template mode.
pub static TEMPLATE_CHUNK: Rule = Rule::scan(K::TemplateChunk, scan_template_chunk);

// ============================================================================
// Scanners
// ============================================================================

fn at_word_boundary(rest: &str, at: usize) -> bool {
    rest.get(at..)
        .and_then(|tail| tail.chars().next())
        .map_or(true, |ch| !is_identifier_part(ch))
}

fn whitespace_len(text: &str) -> usize {
    text.char_indices()
        .find(|&(_, ch)| !is_white_space(ch))
        .map_or(text.len(), |(i, _)| i)
}

/// `word` followed by an identifier boundary; returns the length consumed.
fn word(rest: &str, word: &str) -> Option<usize> {
    (rest.starts_with(word) && at_word_boundary(rest, word.len())).then_some(word.len())
}

/// Consume `ws* '*'` after `at`, or require a word boundary there.
fn star_or_boundary(rest: &str, at: usize) -> Option<usize> {
    let ws = whitespace_len(&rest[at..]);
    if rest[at + ws..].starts_with('*') {
        Some(at + ws + 1)
    } else if at_word_boundary(rest, at) {
        Some(at)
    } else {
        None
    }
}

/// `(async\s+)?function(\s*\*)?`
fn scan_function(rest: &str) -> Option<Lexeme> {
    let mut at = 0;
    if let Some(after) = rest.strip_prefix("async") {
        let ws = whitespace_len(after);
        if ws == 0 {
            return None;
        }
        at = 5 + ws;
    }
    if !rest[at..].starts_with("function") {
        return None;
    }
    star_or_boundary(rest, at + "function".len()).map(Lexeme::whole)
}

/// `yield(\s*\*)?`
fn scan_yield(rest: &str) -> Option<Lexeme> {
    if !rest.starts_with("yield") {
        return None;
    }
    star_or_boundary(rest, "yield".len()).map(Lexeme::whole)
}

/// `for(\s+await)?\s*\(`. The value is the keyword part; the `(` is consumed.
fn scan_for(rest: &str) -> Option<Lexeme> {
    let mut end = word(rest, "for")?;
    let ws = whitespace_len(&rest[end..]);
    if ws > 0 {
        if let Some(len) = word(&rest[end + ws..], "await") {
            end += ws + len;
        }
    }
    let open = end + whitespace_len(&rest[end..]);
    rest[open..].starts_with('(').then(|| Lexeme::new(open + 1, 0..end))
}

/// `in`, `of` or `instanceof`, followed by whitespace.
fn scan_relational_word(rest: &str) -> Option<Lexeme> {
    ["instanceof", "in", "of"].iter().find_map(|w| {
        let len = word(rest, w)?;
        let next = rest[len..].chars().next()?;
        is_white_space(next).then(|| Lexeme::whole(len))
    })
}

/// `keyword( +label)?`. The value is the label, empty when absent.
fn scan_jump(rest: &str, keyword: &str) -> Option<Lexeme> {
    let end = word(rest, keyword)?;
    let spaces = rest[end..].bytes().take_while(|&b| b == b' ' || b == b'\t').count();
    if spaces > 0 {
        let label_start = end + spaces;
        if let Some(label) = scan_identifier(&rest[label_start..]) {
            let label_end = label_start + label.len;
            return Some(Lexeme::new(label_end, label_start..label_end));
        }
    }
    Some(Lexeme::new(end, end..end))
}

fn scan_continue(rest: &str) -> Option<Lexeme> {
    scan_jump(rest, "continue")
}

fn scan_break(rest: &str) -> Option<Lexeme> {
    scan_jump(rest, "break")
}

/// `as` or `from`, followed by whitespace.
fn scan_import_operator(rest: &str) -> Option<Lexeme> {
    ["as", "from"].iter().find_map(|w| {
        let len = word(rest, w)?;
        let next = rest[len..].chars().next()?;
        is_white_space(next).then(|| Lexeme::whole(len))
    })
}

/// `export\s+default`
fn scan_export_default(rest: &str) -> Option<Lexeme> {
    let end = word(rest, "export")?;
    let ws = whitespace_len(&rest[end..]);
    if ws == 0 {
        return None;
    }
    let len = word(&rest[end + ws..], "default")?;
    Some(Lexeme::whole(end + ws + len))
}

fn scan_block_comment(rest: &str) -> Option<Lexeme> {
    if !rest.starts_with("/*") {
        return None;
    }
    let close = memchr::memmem::find(&rest.as_bytes()[2..], b"*/")?;
    Some(Lexeme::whole(close + 4))
}

fn scan_line_comment(rest: &str) -> Option<Lexeme> {
    if !rest.starts_with("//") {
        return None;
    }
    let len = memchr::memchr(b'\n', rest.as_bytes()).unwrap_or(rest.len());
    Some(Lexeme::whole(len))
}

/// `/body/flags` on a single line, with `[...]` classes and escapes.
fn scan_regex(rest: &str) -> Option<Lexeme> {
    let bytes = rest.as_bytes();
    if bytes.first() != Some(&SLASH) {
        return None;
    }
    let mut i = 1;
    let mut in_class = false;
    loop {
        match *bytes.get(i)? {
            BACKSLASH => {
                i += 2;
                continue;
            }
            b'\n' | b'\r' => return None,
            OPEN_BRACKET => in_class = true,
            CLOSE_BRACKET => in_class = false,
            SLASH if !in_class => break,
            _ => {}
        }
        i += 1;
    }
    if i == 1 {
        return None;
    }
    i += 1;
    i += rest[i..].chars().take_while(|&ch| is_regex_flag(ch)).count();
    Some(Lexeme::whole(i))
}

fn count_while(text: &str, pred: fn(char) -> bool) -> usize {
    text.chars().take_while(|&ch| pred(ch)).count()
}

fn radix_digits(marker: Option<&u8>) -> Option<fn(char) -> bool> {
    let pred: fn(char) -> bool = match marker {
        Some(b'x' | b'X') => is_hex_digit,
        Some(b'o' | b'O') => is_octal_digit,
        Some(b'b' | b'B') => is_binary_digit,
        _ => return None,
    };
    Some(pred)
}

/// Decimal with optional fraction and exponent, or `0x`/`0o`/`0b` integers.
/// A number running straight into a name (`1.toString`, `3in`) fails.
fn scan_number(rest: &str) -> Option<Lexeme> {
    let len = scan_number_body(rest)?;
    let runs_into_name = rest[len..].chars().next().is_some_and(is_identifier_start);
    (!runs_into_name).then(|| Lexeme::whole(len))
}

fn scan_number_body(rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    if bytes.first() == Some(&b'0') {
        if let Some(pred) = radix_digits(bytes.get(1)) {
            let count = count_while(&rest[2..], pred);
            if count > 0 {
                return Some(2 + count);
            }
        }
    }

    // `1.`, `1.5` and `.5`, but never a lone `.`.
    let mut i = count_while(rest, is_digit);
    if bytes.get(i) == Some(&b'.') && (i > 0 || bytes.get(1).is_some_and(u8::is_ascii_digit)) {
        i += 1 + count_while(&rest[i + 1..], is_digit);
    }
    if i == 0 {
        return None;
    }
    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exponent = count_while(&rest[j..], is_digit);
        if exponent > 0 {
            i = j + exponent;
        }
    }
    Some(i)
}

fn scan_identifier(rest: &str) -> Option<Lexeme> {
    let mut chars = rest.char_indices();
    let (_, first) = chars.next()?;
    if !is_identifier_start(first) {
        return None;
    }
    let len = chars
        .find(|&(_, ch)| !is_identifier_part(ch))
        .map_or(rest.len(), |(i, _)| i);
    Some(Lexeme::whole(len))
}

/// A quoted string. The value is the contents with escapes as written; a raw
/// line break fails the match.
fn scan_string(rest: &str) -> Option<Lexeme> {
    let bytes = rest.as_bytes();
    let quote = *bytes.first()?;
    if quote != b'\'' && quote != b'"' {
        return None;
    }
    let mut i = 1;
    loop {
        match *bytes.get(i)? {
            BACKSLASH => {
                i += 2;
                continue;
            }
            b'\n' | b'\r' => return None,
            b if b == quote => return Some(Lexeme::new(i + 1, 1..i)),
            _ => i += 1,
        }
    }
}

/// Template text up to and including an unescaped backtick or `${`. The
/// value excludes the terminator.
fn scan_template_chunk(rest: &str) -> Option<Lexeme> {
    let bytes = rest.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            BACKSLASH => i += 2,
            BACKTICK => return Some(Lexeme::new(i + 1, 0..i)),
            DOLLAR_SIGN if bytes.get(i + 1) == Some(&OPEN_BRACE) => {
                return Some(Lexeme::new(i + 2, 0..i));
            }
            _ => i += 1,
        }
    }
    None
}

fn scan_newline(rest: &str) -> Option<Lexeme> {
    rest.starts_with(LINE_FEED).then(|| Lexeme::whole(1))
}

fn scan_inline_whitespace(rest: &str) -> Option<Lexeme> {
    let len = rest
        .char_indices()
        .find(|&(_, ch)| ch == LINE_FEED || !is_white_space(ch))
        .map_or(rest.len(), |(i, _)| i);
    (len > 0).then(|| Lexeme::whole(len))
}

fn scan_whitespace(rest: &str) -> Option<Lexeme> {
    let len = whitespace_len(rest);
    (len > 0).then(|| Lexeme::whole(len))
}
