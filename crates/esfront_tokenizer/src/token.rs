//! Tokens and the lexing modes that select which rules may produce them.

use esfront_ast::syntax_kind::SyntaxKind;
use esfront_core::text::{TextPos, TextRange};

/// A token produced by the tokenizer. Tokens borrow the source text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token<'s> {
    pub kind: SyntaxKind,
    /// The captured part of the match, e.g. string contents without quotes.
    pub value: &'s str,
    /// The full matched text.
    pub raw: &'s str,
    pub range: TextRange,
    /// Binding power, for operator tokens only.
    pub precedence: Option<u8>,
    /// Whether a line break was skipped before this token.
    pub preceded_by_newline: bool,
}

impl<'s> Token<'s> {
    #[inline]
    pub fn start(&self) -> TextPos {
        self.range.pos
    }

    /// Whether this token is the punctuator or operator spelled `text`.
    #[inline]
    pub fn is_text(&self, kind: SyntaxKind, text: &str) -> bool {
        self.kind == kind && self.value == text
    }
}

/// Which lexical rules are eligible for the next token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexMode {
    /// Keyword rules are tried. When off, keywords lex as identifiers.
    pub keywords: bool,
    /// When set, only these kinds (and trivia) may match.
    pub expected: Option<&'static [SyntaxKind]>,
    /// Scan raw template text up to an unescaped backtick or `${`.
    pub template: bool,
    /// A line break is itself a terminator token.
    pub significant_newline: bool,
    /// A regex literal may start even right after a token that ends an
    /// operand, e.g. after the `)` of an `if` head.
    pub regex: bool,
}

impl LexMode {
    pub const DEFAULT: LexMode = LexMode {
        keywords: true,
        expected: None,
        template: false,
        significant_newline: false,
        regex: false,
    };

    /// Keywords lex as plain identifiers.
    pub const NAMES: LexMode = LexMode {
        keywords: false,
        ..LexMode::DEFAULT
    };

    pub const TEMPLATE: LexMode = LexMode {
        template: true,
        ..LexMode::DEFAULT
    };

    pub const NEWLINE: LexMode = LexMode {
        significant_newline: true,
        ..LexMode::DEFAULT
    };

    pub const REGEX: LexMode = LexMode {
        regex: true,
        ..LexMode::DEFAULT
    };

    pub const fn expecting(kinds: &'static [SyntaxKind]) -> LexMode {
        LexMode {
            expected: Some(kinds),
            ..LexMode::DEFAULT
        }
    }

    pub(crate) fn allows(&self, kind: SyntaxKind) -> bool {
        match self.expected {
            Some(kinds) => kind.is_trivia() || kinds.contains(&kind),
            None => true,
        }
    }
}

impl Default for LexMode {
    fn default() -> Self {
        LexMode::DEFAULT
    }
}
