//! The pull-based tokenizer.

use crate::rules::{Lexeme, Rule, RULES, TEMPLATE_CHUNK};
use crate::token::{LexMode, Token};
use esfront_ast::syntax_kind::SyntaxKind;
use esfront_core::text::{TextPos, TextRange};
use tracing::trace;

/// A token that was handed out, as recorded for rewinding.
#[derive(Debug, Clone, Copy)]
struct Emitted {
    start: usize,
    ends_operand: bool,
}

/// Saved tokenizer state. See [`Tokenizer::checkpoint`].
#[derive(Debug, Clone, Copy)]
pub struct Checkpoint<'s> {
    pos: usize,
    current: Option<Token<'s>>,
    emitted: usize,
    exhausted: bool,
}

/// Converts source text into tokens, one request at a time.
///
/// Every token handed out is recorded by its start offset, so [`previous`]
/// and [`rescan`] can re-lex from a recorded offset under a different mode.
///
/// [`previous`]: Tokenizer::previous
/// [`rescan`]: Tokenizer::rescan
pub struct Tokenizer<'s> {
    source: &'s str,
    pos: usize,
    current: Option<Token<'s>>,
    history: Vec<Emitted>,
    exhausted: bool,
}

impl<'s> Tokenizer<'s> {
    pub fn new(source: &'s str) -> Self {
        Self {
            source,
            pos: 0,
            current: None,
            history: Vec::new(),
            exhausted: false,
        }
    }

    pub fn source(&self) -> &'s str {
        self.source
    }

    /// Advance to the next token. Returns `None` at the end of input or when
    /// no eligible rule matches; [`is_exhausted`](Self::is_exhausted) tells
    /// the two apart.
    pub fn next(&mut self, mode: LexMode) -> Option<Token<'s>> {
        let after_operand = self.history.last().is_some_and(|e| e.ends_operand);
        let mut newline = false;
        let source = self.source;

        while self.pos < source.len() {
            let rest = &source[self.pos..];
            let Some((rule, lexeme)) = Self::match_rule(rest, &mode, after_operand) else {
                trace!(offset = self.pos, "no rule matches");
                return self.stop(false);
            };
            let raw = &rest[..lexeme.len];

            if rule.kind.is_trivia() {
                let spans_line = raw.contains('\n');
                if rule.kind == SyntaxKind::CommentTrivia && raw.starts_with("/*") && spans_line && mode.significant_newline {
                    return Some(self.emit(SyntaxKind::SemicolonToken, raw, raw, None, newline));
                }
                newline |= spans_line;
                self.pos += lexeme.len;
                continue;
            }

            let value = &rest[lexeme.value];
            return Some(self.emit(rule.kind, value, raw, rule.precedence, newline));
        }

        self.stop(true)
    }

    fn match_rule(rest: &str, mode: &LexMode, after_operand: bool) -> Option<(&'static Rule, Lexeme)> {
        if mode.template {
            return TEMPLATE_CHUNK.matcher.apply(rest).map(|lexeme| (&TEMPLATE_CHUNK, lexeme));
        }
        RULES
            .iter()
            .filter(|rule| rule.eligible(mode, after_operand))
            .find_map(|rule| {
                rule.matcher
                    .apply(rest)
                    .filter(|lexeme| lexeme.len > 0)
                    .map(|lexeme| (rule, lexeme))
            })
    }

    fn emit(
        &mut self,
        kind: SyntaxKind,
        value: &'s str,
        raw: &'s str,
        precedence: Option<u8>,
        preceded_by_newline: bool,
    ) -> Token<'s> {
        let start = self.pos;
        self.pos += raw.len();
        let token = Token {
            kind,
            value,
            raw,
            range: TextRange::new(start as TextPos, self.pos as TextPos),
            precedence,
            preceded_by_newline,
        };
        let after_operand = self.history.last().is_some_and(|e| e.ends_operand);
        // `a++` is itself an operand; a `++` after an operator is a prefix.
        let postfix = after_operand && !preceded_by_newline && matches!(value, "++" | "--");
        let ends_operand =
            kind.ends_operand() || postfix || (kind == SyntaxKind::TemplateChunk && raw.ends_with('`'));
        self.history.push(Emitted { start, ends_operand });
        self.current = Some(token);
        self.exhausted = false;
        trace!(kind = %kind, value, offset = start, "token");
        token
    }

    fn stop(&mut self, exhausted: bool) -> Option<Token<'s>> {
        self.current = None;
        self.exhausted = exhausted;
        None
    }

    /// The token returned by the last request, if any.
    #[inline]
    pub fn current(&self) -> Option<Token<'s>> {
        self.current
    }

    /// Rewind to the token before the current one and re-lex it under `mode`.
    pub fn previous(&mut self, mode: LexMode) -> Option<Token<'s>> {
        let index = self.history.len().checked_sub(2)?;
        self.pos = self.history[index].start;
        self.history.truncate(index);
        self.next(mode)
    }

    /// Re-lex the current token under `mode`, from its recorded start.
    pub fn rescan(&mut self, mode: LexMode) -> Option<Token<'s>> {
        if self.current.is_some() {
            if let Some(last) = self.history.pop() {
                self.pos = last.start;
            }
        }
        self.next(mode)
    }

    /// Save the cursor. Only [`next`](Self::next) may be called before the
    /// matching [`rewind`](Self::rewind).
    pub fn checkpoint(&self) -> Checkpoint<'s> {
        Checkpoint {
            pos: self.pos,
            current: self.current,
            emitted: self.history.len(),
            exhausted: self.exhausted,
        }
    }

    pub fn rewind(&mut self, checkpoint: Checkpoint<'s>) {
        debug_assert!(self.history.len() >= checkpoint.emitted);
        self.pos = checkpoint.pos;
        self.current = checkpoint.current;
        self.history.truncate(checkpoint.emitted);
        self.exhausted = checkpoint.exhausted;
    }

    /// Offset to report in errors: the start of the current token, or the
    /// cursor when there is none.
    pub fn position_marker(&self) -> TextPos {
        self.current.map_or(self.pos as TextPos, |token| token.start())
    }

    /// The cursor offset, just past the current token.
    #[inline]
    pub fn offset(&self) -> TextPos {
        self.pos as TextPos
    }

    /// Whether the last request ran out of input, as opposed to meeting text
    /// that no eligible rule matches.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// The character at the cursor after skipping whitespace.
    pub fn char_at_cursor(&self) -> Option<char> {
        self.source[self.pos..].chars().find(|ch| !ch.is_whitespace())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exhausted_vs_unlexable() {
        let mut tokenizer = Tokenizer::new("a #");
        assert!(tokenizer.next(LexMode::DEFAULT).is_some());
        assert!(tokenizer.next(LexMode::DEFAULT).is_none());
        assert!(!tokenizer.is_exhausted());
        assert_eq!(tokenizer.char_at_cursor(), Some('#'));

        let mut tokenizer = Tokenizer::new("a  ");
        tokenizer.next(LexMode::DEFAULT);
        assert!(tokenizer.next(LexMode::DEFAULT).is_none());
        assert!(tokenizer.is_exhausted());
    }

    #[test]
    fn test_checkpoint_rewind() {
        let mut tokenizer = Tokenizer::new("(a, b) => a");
        tokenizer.next(LexMode::DEFAULT);
        let saved = tokenizer.checkpoint();
        while tokenizer.next(LexMode::DEFAULT).is_some() {}
        tokenizer.rewind(saved);
        assert_eq!(tokenizer.current().map(|t| t.kind), Some(SyntaxKind::OpenParenToken));
        assert_eq!(tokenizer.next(LexMode::DEFAULT).map(|t| t.value), Some("a"));
    }
}
