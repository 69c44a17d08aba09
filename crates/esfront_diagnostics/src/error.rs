//! The fatal error type returned by tokenizer and parser entry points.

use crate::{format_message, messages, DiagnosticMessage};
use esfront_core::text::{LineAndColumn, TextPos};
use thiserror::Error;

/// A syntax error that aborted a parse.
///
/// `token` names the kind of the offending token when there is one; it is
/// `None` for end-of-input and for failures not tied to a single token.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message} ({location})")]
pub struct SyntaxError {
    pub message: String,
    pub code: u32,
    pub token: Option<&'static str>,
    pub offset: TextPos,
    pub location: LineAndColumn,
}

impl SyntaxError {
    pub fn new(
        message: &DiagnosticMessage,
        args: &[&str],
        token: Option<&'static str>,
        offset: TextPos,
        location: LineAndColumn,
    ) -> Self {
        Self {
            message: format_message(message.message, args),
            code: message.code,
            token,
            offset,
            location,
        }
    }

    pub fn unexpected_token(
        text: &str,
        token: &'static str,
        offset: TextPos,
        location: LineAndColumn,
    ) -> Self {
        Self::new(&messages::UNEXPECTED_TOKEN_0, &[text], Some(token), offset, location)
    }

    pub fn unexpected_end(offset: TextPos, location: LineAndColumn) -> Self {
        Self::new(&messages::UNEXPECTED_END_OF_INPUT, &[], None, offset, location)
    }

    /// `expected` was required; `found` is the text and kind of what was there instead.
    pub fn expected(
        expected: &str,
        found: Option<(&str, &'static str)>,
        offset: TextPos,
        location: LineAndColumn,
    ) -> Self {
        match found {
            Some((text, token)) => Self::new(
                &messages::_0_EXPECTED_BUT_FOUND_1,
                &[expected, text],
                Some(token),
                offset,
                location,
            ),
            None => Self::new(
                &messages::_0_EXPECTED_AT_END_OF_INPUT,
                &[expected],
                None,
                offset,
                location,
            ),
        }
    }

    pub fn unconsumed_operands(count: usize, offset: TextPos, location: LineAndColumn) -> Self {
        let count = count.to_string();
        Self::new(&messages::UNCONSUMED_OPERANDS, &[&count], None, offset, location)
    }

    pub fn nesting_too_deep(limit: usize, offset: TextPos, location: LineAndColumn) -> Self {
        let limit = limit.to_string();
        Self::new(
            &messages::MAXIMUM_NESTING_DEPTH_EXCEEDED,
            &[&limit],
            None,
            offset,
            location,
        )
    }

    pub fn invalid_character(ch: char, offset: TextPos, location: LineAndColumn) -> Self {
        let text = ch.to_string();
        Self::new(&messages::INVALID_CHARACTER, &[&text], None, offset, location)
    }

    pub fn line(&self) -> u32 {
        self.location.line
    }

    pub fn column(&self) -> u32 {
        self.location.column
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(line: u32, column: u32) -> LineAndColumn {
        LineAndColumn { line, column }
    }

    #[test]
    fn test_unexpected_token_display() {
        let err = SyntaxError::unexpected_token(")", "CloseParenToken", 4, at(1, 5));
        assert_eq!(err.to_string(), "Unexpected token ')'. (1:5)");
        assert_eq!(err.token, Some("CloseParenToken"));
        assert_eq!(err.code, messages::UNEXPECTED_TOKEN_0.code);
    }

    #[test]
    fn test_expected_at_end() {
        let err = SyntaxError::expected(")", None, 7, at(2, 1));
        assert_eq!(err.token, None);
        assert!(err.message.contains("end of input"));
        assert_eq!(err.line(), 2);
        assert_eq!(err.column(), 1);
    }

    #[test]
    fn test_expected_but_found() {
        let err = SyntaxError::expected("}", Some((";", "SemicolonToken")), 3, at(1, 4));
        assert_eq!(err.message, "'}' expected but found ';'.");
    }
}
