//! esfront_diagnostics: Diagnostic messages and error reporting.
//!
//! Every message the front end can report is listed in [`messages`] with a
//! stable code. Fatal problems surface as [`SyntaxError`]; anomalies that the
//! parser is configured to tolerate are collected as [`Diagnostic`] values.

mod error;

pub use error::SyntaxError;

use esfront_core::text::TextSpan;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCategory {
    Warning,
    Error,
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticCategory::Warning => write!(f, "warning"),
            DiagnosticCategory::Error => write!(f, "error"),
        }
    }
}

/// A diagnostic message template with a code and category.
#[derive(Debug, Clone)]
pub struct DiagnosticMessage {
    pub code: u32,
    pub category: DiagnosticCategory,
    /// The message template. May contain `{0}`, `{1}`, etc. placeholders.
    pub message: &'static str,
}

/// A realized diagnostic with resolved message text.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// The source span the diagnostic points at, if any.
    pub span: Option<TextSpan>,
    pub message_text: String,
    pub code: u32,
    pub category: DiagnosticCategory,
}

impl Diagnostic {
    /// Create a diagnostic that is not tied to a source location.
    pub fn new(message: &DiagnosticMessage, args: &[&str]) -> Self {
        Self {
            span: None,
            message_text: format_message(message.message, args),
            code: message.code,
            category: message.category,
        }
    }

    /// Create a diagnostic pointing at `span`.
    pub fn with_span(span: TextSpan, message: &DiagnosticMessage, args: &[&str]) -> Self {
        Self {
            span: Some(span),
            ..Self::new(message, args)
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(span) = self.span {
            write!(f, "({}): ", span.start)?;
        }
        write!(f, "{} ES{}: {}", self.category, self.code, self.message_text)
    }
}

/// Format a message template by replacing `{0}`, `{1}`, etc. with arguments.
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{}}}", i), arg);
    }
    result
}

/// Diagnostics accumulated during one parse.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticCollection {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollection {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }
}

// ============================================================================
// Diagnostic Messages
// ============================================================================

pub mod messages {
    use super::*;

    macro_rules! diag {
        ($code:expr, Error, $msg:expr) => {
            DiagnosticMessage { code: $code, category: DiagnosticCategory::Error, message: $msg }
        };
        ($code:expr, Warning, $msg:expr) => {
            DiagnosticMessage { code: $code, category: DiagnosticCategory::Warning, message: $msg }
        };
    }

    // Lexical errors (1000-1099)
    pub const INVALID_CHARACTER: DiagnosticMessage = diag!(1001, Error, "Invalid or unexpected token '{0}'.");
    pub const INVALID_NUMERIC_LITERAL: DiagnosticMessage = diag!(1002, Error, "Invalid numeric literal '{0}'.");

    // Syntax errors (1100-1199)
    pub const UNEXPECTED_TOKEN_0: DiagnosticMessage = diag!(1100, Error, "Unexpected token '{0}'.");
    pub const UNEXPECTED_END_OF_INPUT: DiagnosticMessage = diag!(1101, Error, "Unexpected end of input.");
    pub const _0_EXPECTED_BUT_FOUND_1: DiagnosticMessage = diag!(1102, Error, "'{0}' expected but found '{1}'.");
    pub const _0_EXPECTED_AT_END_OF_INPUT: DiagnosticMessage = diag!(1103, Error, "'{0}' expected but reached end of input.");
    pub const IN_OR_OF_EXPECTED: DiagnosticMessage = diag!(1104, Error, "';', 'in' or 'of' expected after the first clause of a for statement.");
    pub const MISSING_LEFT_OPERAND: DiagnosticMessage = diag!(1105, Error, "Operator '{0}' has no left operand.");
    pub const IDENTIFIER_EXPECTED: DiagnosticMessage = diag!(1106, Error, "Identifier expected but found '{0}'.");
    pub const EMPTY_PARENTHESES: DiagnosticMessage = diag!(1107, Error, "Empty parentheses must be followed by '=>'.");

    // Parser state (1200-1299)
    pub const UNCONSUMED_OPERANDS: DiagnosticMessage = diag!(1200, Error, "{0} operand(s) left unconsumed after statement.");
    pub const UNCONSUMED_OPERANDS_WARNING: DiagnosticMessage = diag!(1201, Warning, "{0} operand(s) left unconsumed after statement.");
    pub const MAXIMUM_NESTING_DEPTH_EXCEEDED: DiagnosticMessage = diag!(1202, Error, "Maximum nesting depth of {0} exceeded.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_message() {
        let msg = format_message("'{0}' expected but found '{1}'.", &[")", "}"]);
        assert_eq!(msg, "')' expected but found '}'.");
    }

    #[test]
    fn test_format_message_no_args() {
        assert_eq!(format_message("Unexpected end of input.", &[]), "Unexpected end of input.");
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::with_span(TextSpan::new(10, 1), &messages::UNEXPECTED_TOKEN_0, &[")"]);
        let display = diag.to_string();
        assert!(display.starts_with("(10): "));
        assert!(display.contains("ES1100"));
        assert!(display.contains("')'"));
    }

    #[test]
    fn test_diagnostic_without_span() {
        let diag = Diagnostic::new(&messages::UNEXPECTED_END_OF_INPUT, &[]);
        assert!(diag.span.is_none());
        assert_eq!(diag.code, 1101);
        assert_eq!(diag.category, DiagnosticCategory::Error);
    }

    #[test]
    fn test_diagnostic_collection() {
        let mut collection = DiagnosticCollection::new();
        assert!(collection.is_empty());

        collection.add(Diagnostic::new(&messages::UNCONSUMED_OPERANDS_WARNING, &["1"]));
        collection.add(Diagnostic::new(&messages::UNEXPECTED_END_OF_INPUT, &[]));
        assert_eq!(collection.len(), 2);
        let categories: Vec<_> = collection.diagnostics().iter().map(|d| d.category).collect();
        assert_eq!(categories, vec![DiagnosticCategory::Warning, DiagnosticCategory::Error]);
    }
}
