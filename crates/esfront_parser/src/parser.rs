//! The parser: turns the token stream into a tree of arena-allocated nodes.
//!
//! Parsing is dispatch-driven. The current token's kind selects a handler;
//! a handler builds one node and leaves the token after it current. Once an
//! operand is built, [`Parser::continue_operand`] keeps extending it while
//! the next token can continue it (member access, calls, operators, ...).
//! Which continuations apply is decided from the ancestor-context stack,
//! see `predicates.rs`.

use crate::context::{ContextStack, Position};
use crate::options::ParserOptions;
use esfront_ast::node::*;
use esfront_ast::syntax_kind::SyntaxKind;
use esfront_core::{Arena, LineAndColumn, LineMap, TextPos, TextSpan};
use esfront_diagnostics::{messages, Diagnostic, DiagnosticCollection, SyntaxError};
use esfront_tokenizer::{LexMode, Token, Tokenizer};
use rustc_hash::FxHashMap;
use tracing::{debug, trace, warn};

pub type ParseResult<T> = Result<T, SyntaxError>;

use SyntaxKind as K;

/// A parser for one source text. Nodes are allocated in `arena` and borrow
/// identifier and literal text from the source.
pub struct Parser<'a> {
    arena: &'a Arena,
    pub(crate) tokenizer: Tokenizer<'a>,
    line_map: LineMap<'a>,
    pub(crate) context: ContextStack,
    /// Completed operands waiting for a continuation handler to take them.
    operands: Vec<Node<'a>>,
    /// Arrow parameters collected so far. Nested arrows share the buffer and
    /// drain only what they pushed.
    pub(crate) arrow_params: Vec<Node<'a>>,
    /// Whether `=>` follows the `)` matching the `(` at each offset.
    pub(crate) arrow_heads: FxHashMap<TextPos, bool>,
    options: ParserOptions,
    diagnostics: DiagnosticCollection,
}

/// Parse `source` as a program with default options.
pub fn parse_program<'a>(arena: &'a Arena, source: &'a str) -> ParseResult<&'a Node<'a>> {
    Parser::new(arena, source).parse_program()
}

impl<'a> Parser<'a> {
    pub fn new(arena: &'a Arena, source: &'a str) -> Self {
        Self::with_options(arena, source, ParserOptions::default())
    }

    pub fn with_options(arena: &'a Arena, source: &'a str, options: ParserOptions) -> Self {
        Self {
            arena,
            tokenizer: Tokenizer::new(source),
            line_map: LineMap::new(source),
            context: ContextStack::new(),
            operands: Vec::new(),
            arrow_params: Vec::new(),
            arrow_heads: FxHashMap::default(),
            options,
            diagnostics: DiagnosticCollection::new(),
        }
    }

    /// Parse the whole source into a `Program` node.
    pub fn parse_program(&mut self) -> ParseResult<&'a Node<'a>> {
        self.advance();
        let mut body = Vec::new();
        while self.current().is_some() {
            let statement = self.with_frame(K::Program, Position::Body, Self::parse_statement)?;
            self.check_operands()?;
            debug!(kind = %statement.kind(), "statement");
            body.push(statement);
        }
        if !self.tokenizer.is_exhausted() {
            return Err(self.invalid_character());
        }
        let program = Program {
            body: self.alloc_list(body),
        };
        Ok(self.alloc(Node::Program(program)))
    }

    /// Warnings recorded so far, such as dropped operands in lenient mode.
    pub fn take_diagnostics(&mut self) -> DiagnosticCollection {
        std::mem::take(&mut self.diagnostics)
    }

    // ========================================================================
    // Token management
    // ========================================================================

    #[inline]
    pub(crate) fn current(&self) -> Option<Token<'a>> {
        self.tokenizer.current()
    }

    /// The current token, or an error when there is none.
    pub(crate) fn token(&self) -> ParseResult<Token<'a>> {
        self.current().ok_or_else(|| self.unexpected())
    }

    #[inline]
    pub(crate) fn advance(&mut self) -> Option<Token<'a>> {
        self.tokenizer.next(LexMode::DEFAULT)
    }

    #[inline]
    pub(crate) fn advance_in(&mut self, mode: LexMode) -> Option<Token<'a>> {
        self.tokenizer.next(mode)
    }

    #[inline]
    pub(crate) fn at(&self, kind: SyntaxKind) -> bool {
        self.current().is_some_and(|token| token.kind == kind)
    }

    #[inline]
    pub(crate) fn at_text(&self, kind: SyntaxKind, text: &str) -> bool {
        self.current().is_some_and(|token| token.is_text(kind, text))
    }

    pub(crate) fn eat(&mut self, kind: SyntaxKind) -> bool {
        let found = self.at(kind);
        if found {
            self.advance();
        }
        found
    }

    pub(crate) fn eat_text(&mut self, kind: SyntaxKind, text: &str) -> bool {
        let found = self.at_text(kind, text);
        if found {
            self.advance();
        }
        found
    }

    /// Require the current token to be `kind` and step past it.
    pub(crate) fn expect(&mut self, kind: SyntaxKind) -> ParseResult<Token<'a>> {
        match self.current() {
            Some(token) if token.kind == kind => {
                self.advance();
                Ok(token)
            }
            found => Err(self.expected_error(kind.punctuation_text().unwrap_or(kind.as_str()), found)),
        }
    }

    /// Require the word `text` of kind `kind` and step past it.
    pub(crate) fn expect_text(&mut self, kind: SyntaxKind, text: &str) -> ParseResult<Token<'a>> {
        match self.current() {
            Some(token) if token.is_text(kind, text) => {
                self.advance();
                Ok(token)
            }
            found => Err(self.expected_error(text, found)),
        }
    }

    // ========================================================================
    // Node helpers
    // ========================================================================

    #[inline]
    pub(crate) fn alloc(&self, node: Node<'a>) -> &'a Node<'a> {
        self.arena.alloc(node)
    }

    #[inline]
    pub(crate) fn alloc_list(&self, nodes: Vec<Node<'a>>) -> NodeList<'a> {
        self.arena.alloc_vec(nodes)
    }

    /// Take the operand a continuation handler extends.
    pub(crate) fn pop_operand(&mut self) -> ParseResult<Node<'a>> {
        match self.operands.pop() {
            Some(operand) => Ok(operand),
            None => Err(self.missing_left_operand()),
        }
    }

    /// Run `f` with `(kind, position)` pushed on the context stack.
    pub(crate) fn with_frame<T>(
        &mut self,
        kind: SyntaxKind,
        position: Position,
        f: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<T> {
        if self.context.len() >= self.options.max_depth {
            let offset = self.tokenizer.position_marker();
            return Err(SyntaxError::nesting_too_deep(
                self.options.max_depth,
                offset,
                self.location(offset),
            ));
        }
        self.context.push(kind, position);
        let result = f(self);
        self.context.pop();
        result
    }

    /// Parse one operand with its continuations as the `position` child of
    /// an in-progress `kind` node.
    #[inline]
    pub(crate) fn fragment(&mut self, kind: SyntaxKind, position: Position) -> ParseResult<Node<'a>> {
        self.with_frame(kind, position, Self::parse_operand)
    }

    fn check_operands(&mut self) -> ParseResult<()> {
        if self.operands.is_empty() {
            return Ok(());
        }
        let count = self.operands.len();
        let offset = self.tokenizer.position_marker();
        if self.options.strict_operand_stack {
            return Err(SyntaxError::unconsumed_operands(count, offset, self.location(offset)));
        }
        warn!(count, offset, "dropping unconsumed operands");
        let count = count.to_string();
        self.diagnostics.add(Diagnostic::with_span(
            TextSpan::new(offset, 0),
            &messages::UNCONSUMED_OPERANDS_WARNING,
            &[&count],
        ));
        self.operands.clear();
        Ok(())
    }

    // ========================================================================
    // Dispatch
    // ========================================================================

    /// Statement-level dispatch. Tokens without a statement handler start an
    /// expression statement.
    pub(crate) fn parse_statement(&mut self) -> ParseResult<Node<'a>> {
        let token = self.token()?;
        match token.kind {
            K::OpenBraceToken => self.parse_block(),
            K::SemicolonToken => {
                self.advance();
                Ok(Node::EmptyStatement)
            }
            K::DeclarationKeyword => {
                let declaration = self.parse_variable_declaration()?;
                self.eat(K::SemicolonToken);
                Ok(declaration)
            }
            K::FunctionKeyword => self.parse_function(),
            K::ClassKeyword => self.parse_class(),
            K::IfKeyword => self.parse_if(),
            K::ForKeyword => self.parse_for(),
            K::WhileKeyword => self.parse_while(),
            K::DoKeyword => self.parse_do_while(),
            K::SwitchKeyword => self.parse_switch(),
            K::ReturnKeyword => self.parse_return(),
            K::ContinueKeyword | K::BreakKeyword => self.parse_jump(),
            K::ImportKeyword => self.parse_import(),
            K::ExportKeyword => self.parse_export(),
            K::ExportDefaultKeyword => self.parse_export_default(),
            _ => self.parse_expression_statement(),
        }
    }

    /// One operand followed by every continuation the context permits.
    pub(crate) fn parse_operand(&mut self) -> ParseResult<Node<'a>> {
        let operand = self.walk()?;
        self.continue_operand(operand)
    }

    /// Extend `operand` while the current token continues it, unless it is
    /// already closed.
    fn continue_operand(&mut self, mut operand: Node<'a>) -> ParseResult<Node<'a>> {
        while let Some(token) = self.current() {
            if self.is_closed(&operand) || !self.continues(&operand, &token) {
                break;
            }
            let kind = operand.kind();
            trace!(operand = %kind, token = %token.kind, "continue");
            self.operands.push(operand);
            operand = self.with_frame(kind, Position::End, Self::walk)?;
        }
        Ok(operand)
    }

    /// Build one node from the current token. Under an `End` frame the
    /// handler continues the operand on top of the operand stack.
    pub(crate) fn walk(&mut self) -> ParseResult<Node<'a>> {
        let token = self.token()?;
        let continuing = self.in_continuation();
        trace!(token = %token.kind, continuing, "dispatch");
        match token.kind {
            K::IdentifierName | K::GetKeyword | K::SetKeyword | K::StaticKeyword | K::ImportOperator => {
                self.parse_identifier()
            }
            K::ReservedWord => self.parse_reserved_word(),
            K::NumericLiteral | K::StringLiteral | K::BooleanLiteral | K::RegularExpressionLiteral => {
                self.parse_literal()
            }
            K::Backtick => self.parse_template(),
            K::ThisKeyword => {
                self.advance();
                Ok(Node::ThisExpression)
            }
            K::FunctionKeyword => self.parse_function(),
            K::ClassKeyword => self.parse_class(),
            K::NewKeyword => self.parse_new(),
            K::YieldKeyword => self.parse_yield(),
            K::DotDotDotToken => self.parse_spread(),
            K::OpenParenToken if continuing => self.parse_call(),
            K::OpenParenToken => self.parse_parenthesized(),
            K::OpenBracketToken if continuing => self.parse_computed_member(),
            K::OpenBracketToken => self.parse_array(),
            K::OpenBraceToken if self.is_block_position() => self.parse_block(),
            K::OpenBraceToken => self.parse_object(),
            K::Operator if continuing => self.parse_infix(),
            K::Operator | K::AssignmentOperator if token.value.starts_with('/') && !continuing => {
                self.parse_regex_operand()
            }
            K::Operator => self.parse_prefix(),
            K::DotToken if continuing => self.parse_member(),
            K::AssignmentOperator if continuing => self.parse_assignment(),
            K::QuestionToken if continuing => self.parse_conditional(),
            K::CommaToken if continuing => self.parse_sequence(),
            K::ArrowToken if continuing => self.parse_arrow_from_identifier(),
            K::ColonToken if continuing => self.parse_labeled(),
            K::DotToken
            | K::AssignmentOperator
            | K::QuestionToken
            | K::CommaToken
            | K::ArrowToken
            | K::ColonToken
            | K::DeclarationKeyword
            | K::ForKeyword
            | K::DoKeyword
            | K::WhileKeyword
            | K::ContinueKeyword
            | K::BreakKeyword
            | K::ExtendsKeyword
            | K::ReturnKeyword
            | K::ImportKeyword
            | K::ExportDefaultKeyword
            | K::ExportKeyword
            | K::IfKeyword
            | K::ElseKeyword
            | K::SwitchKeyword
            | K::CaseKeyword
            | K::DefaultKeyword
            | K::TemplateChunk
            | K::CloseParenToken
            | K::CloseBraceToken
            | K::CloseBracketToken
            | K::SemicolonToken
            | K::WhitespaceTrivia
            | K::CommentTrivia => Err(self.unexpected()),
            // Node kinds never come out of the tokenizer.
            _ => Err(self.unexpected()),
        }
    }

    // ========================================================================
    // Errors
    // ========================================================================

    pub(crate) fn location(&self, offset: TextPos) -> LineAndColumn {
        self.line_map.line_and_column_of(offset)
    }

    /// The error for the current token: unexpected token, unexpected end of
    /// input, or text no rule could lex.
    pub(crate) fn unexpected(&self) -> SyntaxError {
        let offset = self.tokenizer.position_marker();
        let location = self.location(offset);
        match self.current() {
            Some(token) => SyntaxError::unexpected_token(token.raw, token.kind.as_str(), offset, location),
            None if self.tokenizer.is_exhausted() => SyntaxError::unexpected_end(offset, location),
            None => self.invalid_character(),
        }
    }

    pub(crate) fn expected_error(&self, expected: &str, found: Option<Token<'a>>) -> SyntaxError {
        if found.is_none() && !self.tokenizer.is_exhausted() {
            return self.invalid_character();
        }
        let offset = self.tokenizer.position_marker();
        SyntaxError::expected(
            expected,
            found.map(|token| (token.raw, token.kind.as_str())),
            offset,
            self.location(offset),
        )
    }

    /// An error raised at the current token with a specific message.
    pub(crate) fn error_at_current(&self, message: &esfront_diagnostics::DiagnosticMessage) -> SyntaxError {
        let Some(token) = self.current() else {
            return self.unexpected();
        };
        SyntaxError::new(
            message,
            &[token.raw],
            Some(token.kind.as_str()),
            token.start(),
            self.location(token.start()),
        )
    }

    pub(crate) fn missing_left_operand(&self) -> SyntaxError {
        self.error_at_current(&messages::MISSING_LEFT_OPERAND)
    }

    pub(crate) fn identifier_expected(&self) -> SyntaxError {
        self.error_at_current(&messages::IDENTIFIER_EXPECTED)
    }

    pub(crate) fn invalid_character(&self) -> SyntaxError {
        let source = self.tokenizer.source();
        let cursor = self.tokenizer.offset() as usize;
        let rest = source.get(cursor..).unwrap_or_default();
        let offset = (cursor + rest.len() - rest.trim_start().len()) as TextPos;
        match self.tokenizer.char_at_cursor() {
            Some(ch) => SyntaxError::invalid_character(ch, offset, self.location(offset)),
            None => SyntaxError::unexpected_end(offset, self.location(offset)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_statement<'a>(arena: &'a Arena, source: &'a str) -> &'a Node<'a> {
        let Node::Program(program) = parse_program(arena, source).unwrap() else {
            panic!("expected a program");
        };
        &program.body[0]
    }

    #[test]
    fn test_empty_program() {
        let arena = Arena::new();
        let program = parse_program(&arena, "").unwrap();
        assert_eq!(program, &Node::Program(Program { body: &[] }));
    }

    #[test]
    fn test_whitespace_and_comments_only() {
        let arena = Arena::new();
        let Node::Program(program) = parse_program(&arena, "  // c\n/* d */\n").unwrap() else {
            panic!();
        };
        assert!(program.body.is_empty());
    }

    #[test]
    fn test_expression_statement_wraps_operand() {
        let arena = Arena::new();
        let statement = first_statement(&arena, "a;");
        let Node::ExpressionStatement(statement) = statement else {
            panic!("expected an expression statement, got {statement:?}");
        };
        assert_eq!(statement.expression.identifier_name(), Some("a"));
    }

    #[test]
    fn test_context_stack_is_balanced_after_parse() {
        let arena = Arena::new();
        let mut parser = Parser::new(&arena, "if (a) { b = c ? d : e; } else f(g, h);");
        parser.parse_program().unwrap();
        assert_eq!(parser.context.len(), 0);
        assert!(parser.operands.is_empty());
        assert!(parser.arrow_params.is_empty());
    }

    #[test]
    fn test_nesting_limit() {
        let arena = Arena::new();
        let options = ParserOptions {
            max_depth: 10,
            ..ParserOptions::default()
        };
        let source = "((((((((((((a))))))))))))";
        let error = Parser::with_options(&arena, source, options).parse_program().unwrap_err();
        assert_eq!(error.code, messages::MAXIMUM_NESTING_DEPTH_EXCEEDED.code);
    }

    #[test]
    fn test_arrow_lookahead_answers_nested_parens_once() {
        let arena = Arena::new();
        let source = "((a, (b) => b), ((c)));";
        let mut parser = Parser::new(&arena, source);
        parser.parse_program().unwrap();
        let heads: Vec<(TextPos, bool)> = {
            let mut heads: Vec<_> = parser.arrow_heads.iter().map(|(&k, &v)| (k, v)).collect();
            heads.sort_unstable();
            heads
        };
        assert_eq!(heads, vec![(0, false), (1, false), (5, true), (16, false), (17, false)]);
    }

    #[test]
    fn test_take_diagnostics_starts_empty() {
        let arena = Arena::new();
        let mut parser = Parser::new(&arena, "a");
        parser.parse_program().unwrap();
        assert!(parser.take_diagnostics().is_empty());
    }
}
