//! Expression handlers: primaries, prefix operators and the continuation
//! handlers that extend a completed operand.

use crate::context::Position as P;
use crate::parser::{ParseResult, Parser};
use crate::precedence::{binary_precedence, is_logical, is_prefix, is_right_associative, is_update, LOWEST_BINARY};
use esfront_ast::node::*;
use esfront_ast::syntax_kind::SyntaxKind as K;
use esfront_core::TextPos;
use esfront_diagnostics::messages;
use esfront_tokenizer::LexMode;

/// The numeric value of a numeric literal's source text.
pub(crate) fn numeric_value(raw: &str) -> Option<f64> {
    let radix = match raw.get(..2).map(str::to_ascii_lowercase).as_deref() {
        Some("0x") => 16,
        Some("0o") => 8,
        Some("0b") => 2,
        _ => return raw.parse().ok(),
    };
    u64::from_str_radix(&raw[2..], radix).ok().map(|value| value as f64)
}

impl<'a> Parser<'a> {
    // ========================================================================
    // Primaries
    // ========================================================================

    pub(crate) fn parse_identifier(&mut self) -> ParseResult<Node<'a>> {
        let token = self.token()?;
        self.advance();
        Ok(Node::Identifier(Identifier { name: token.value }))
    }

    /// `undefined` reads as an identifier, `null` as a literal.
    pub(crate) fn parse_reserved_word(&mut self) -> ParseResult<Node<'a>> {
        let token = self.token()?;
        self.advance();
        if token.value == "null" {
            return Ok(Node::Literal(Literal {
                value: LiteralValue::Null,
                raw: token.raw,
            }));
        }
        Ok(Node::Identifier(Identifier { name: token.value }))
    }

    pub(crate) fn parse_literal(&mut self) -> ParseResult<Node<'a>> {
        let token = self.token()?;
        let value = match token.kind {
            K::NumericLiteral => match numeric_value(token.raw) {
                Some(number) => LiteralValue::Number(number),
                None => return Err(self.error_at_current(&messages::INVALID_NUMERIC_LITERAL)),
            },
            K::StringLiteral => LiteralValue::String(token.value),
            K::BooleanLiteral => LiteralValue::Boolean(token.value == "true"),
            K::RegularExpressionLiteral => LiteralValue::RegExp(token.raw),
            _ => return Err(self.unexpected()),
        };
        self.advance();
        Ok(Node::Literal(Literal { value, raw: token.raw }))
    }

    /// A `/` or `/=` where an operand must start. It was lexed as division
    /// because the token before it ends an operand, as the `)` of an `if`
    /// head does; re-read it as a regex literal.
    pub(crate) fn parse_regex_operand(&mut self) -> ParseResult<Node<'a>> {
        match self.tokenizer.rescan(LexMode::REGEX) {
            Some(token) if token.kind == K::RegularExpressionLiteral => self.parse_literal(),
            _ => Err(self.missing_left_operand()),
        }
    }

    /// A template literal. The current token is the opening backtick; each
    /// chunk ending in `${` is followed by an expression and a `}`.
    pub(crate) fn parse_template(&mut self) -> ParseResult<Node<'a>> {
        let mut quasis = Vec::new();
        let mut expressions = Vec::new();
        loop {
            let chunk = match self.advance_in(LexMode::TEMPLATE) {
                Some(chunk) => chunk,
                None => return Err(self.expected_error("`", None)),
            };
            quasis.push(Node::TemplateElement(TemplateElement { value: chunk.value }));
            if !chunk.raw.ends_with("${") {
                break;
            }
            self.advance();
            expressions.push(self.fragment(K::TemplateLiteral, P::Expressions)?);
            if !self.at(K::CloseBraceToken) {
                return Err(self.expected_error("}", self.current()));
            }
        }
        self.advance();
        Ok(Node::TemplateLiteral(TemplateLiteral {
            quasis: self.alloc_list(quasis),
            expressions: self.alloc_list(expressions),
        }))
    }

    pub(crate) fn parse_spread(&mut self) -> ParseResult<Node<'a>> {
        self.advance();
        let argument = self.fragment(K::SpreadElement, P::Argument)?;
        Ok(Node::SpreadElement(SpreadElement {
            argument: self.alloc(argument),
        }))
    }

    /// An array literal, built as an `ArrayPattern`.
    pub(crate) fn parse_array(&mut self) -> ParseResult<Node<'a>> {
        self.advance();
        let mut elements = Vec::new();
        while !self.at(K::CloseBracketToken) {
            elements.push(self.fragment(K::ArrayPattern, P::Elements)?);
            if !self.eat(K::CommaToken) {
                break;
            }
        }
        self.expect(K::CloseBracketToken)?;
        Ok(Node::ArrayPattern(ArrayPattern {
            elements: self.alloc_list(elements),
        }))
    }

    /// `(` not continuing an operand: an arrow function's parameter list
    /// when `=>` follows the matching `)`, otherwise a parenthesized
    /// expression or sequence.
    pub(crate) fn parse_parenthesized(&mut self) -> ParseResult<Node<'a>> {
        if self.arrow_follows() {
            return self.parse_arrow_function();
        }
        self.advance();
        if self.at(K::CloseParenToken) {
            return Err(self.error_at_current(&messages::EMPTY_PARENTHESES));
        }
        let mut expressions = Vec::new();
        while !self.at(K::CloseParenToken) {
            expressions.push(self.fragment(K::OpenParenToken, P::Parenthesis)?);
            if !self.eat(K::CommaToken) {
                break;
            }
        }
        self.expect(K::CloseParenToken)?;
        if expressions.len() == 1 {
            if let Some(expression) = expressions.pop() {
                return Ok(expression);
            }
        }
        Ok(Node::SequenceExpression(SequenceExpression {
            expressions: self.alloc_list(expressions),
        }))
    }

    /// Scan ahead from the current `(` to its matching `)` and report
    /// whether `=>` comes next. The scan records the answer for every `(`
    /// it passes, so the nested ones are never scanned again. The tokenizer
    /// is restored afterwards.
    fn arrow_follows(&mut self) -> bool {
        let Some(open) = self.current() else {
            return false;
        };
        let start = open.start();
        if let Some(&found) = self.arrow_heads.get(&start) {
            return found;
        }
        let saved = self.tokenizer.checkpoint();
        // Offsets of the `(` still open, innermost last.
        let mut open_parens: Vec<TextPos> = vec![start];
        // The `(` whose `)` was just read; the next token decides it.
        let mut closed: Option<TextPos> = None;
        let mut braces = 0usize;
        // Brace depth at each open `${`.
        let mut substitutions: Vec<usize> = Vec::new();
        let mut mode = LexMode::DEFAULT;
        while let Some(token) = self.tokenizer.next(mode) {
            mode = LexMode::DEFAULT;
            if let Some(offset) = closed.take() {
                self.arrow_heads.insert(offset, token.kind == K::ArrowToken);
            }
            if open_parens.is_empty() {
                break;
            }
            match token.kind {
                K::OpenParenToken => open_parens.push(token.start()),
                K::CloseParenToken => closed = open_parens.pop(),
                K::OpenBraceToken => braces += 1,
                K::CloseBraceToken if substitutions.last() == Some(&braces) => {
                    substitutions.pop();
                    mode = LexMode::TEMPLATE;
                }
                K::CloseBraceToken => braces = braces.saturating_sub(1),
                K::Backtick => mode = LexMode::TEMPLATE,
                K::TemplateChunk if token.raw.ends_with("${") => substitutions.push(braces),
                _ => {}
            }
        }
        // Input ended first: nothing left open is an arrow head.
        for offset in closed.into_iter().chain(open_parens) {
            self.arrow_heads.insert(offset, false);
        }
        self.tokenizer.rewind(saved);
        self.arrow_heads.get(&start).copied().unwrap_or(false)
    }

    fn parse_arrow_function(&mut self) -> ParseResult<Node<'a>> {
        self.advance();
        let mark = self.arrow_params.len();
        while !self.at(K::CloseParenToken) {
            let param = self.fragment(K::ArrowFunctionExpression, P::Params)?;
            self.arrow_params.push(param);
            if !self.eat(K::CommaToken) {
                break;
            }
        }
        self.expect(K::CloseParenToken)?;
        self.expect(K::ArrowToken)?;
        let params = self.arrow_params.split_off(mark);
        self.finish_arrow(params)
    }

    /// `a => body`, continuing the identifier `a`.
    pub(crate) fn parse_arrow_from_identifier(&mut self) -> ParseResult<Node<'a>> {
        let param = self.pop_operand()?;
        self.advance();
        self.finish_arrow(vec![param])
    }

    /// The body after `=>`: a block when it starts with `{`, otherwise an
    /// expression.
    fn finish_arrow(&mut self, params: Vec<Node<'a>>) -> ParseResult<Node<'a>> {
        let body = if self.at(K::OpenBraceToken) {
            self.with_frame(K::ArrowFunctionExpression, P::Body, Self::parse_block)?
        } else {
            self.fragment(K::ArrowFunctionExpression, P::Body)?
        };
        Ok(Node::ArrowFunctionExpression(ArrowFunctionExpression {
            params: self.alloc_list(params),
            body: self.alloc(body),
        }))
    }

    pub(crate) fn parse_new(&mut self) -> ParseResult<Node<'a>> {
        self.advance();
        let callee = self.fragment(K::NewExpression, P::Callee)?;
        let arguments: NodeList<'a> = if self.at(K::OpenParenToken) {
            self.parse_arguments(K::NewExpression)?
        } else {
            &[]
        };
        Ok(Node::NewExpression(CallExpression {
            callee: self.alloc(callee),
            arguments,
        }))
    }

    /// `yield` and `yield*`. A line break right after the keyword ends the
    /// expression with no argument.
    pub(crate) fn parse_yield(&mut self) -> ParseResult<Node<'a>> {
        let token = self.token()?;
        let delegate = token.raw.ends_with('*');
        let next = self.advance_in(LexMode::NEWLINE);
        let ends_here = next.map_or(true, |next| {
            matches!(
                next.kind,
                K::SemicolonToken
                    | K::CloseParenToken
                    | K::CloseBracketToken
                    | K::CloseBraceToken
                    | K::CommaToken
                    | K::ColonToken
            )
        });
        let argument = if ends_here {
            None
        } else {
            let argument = self.fragment(K::YieldExpression, P::Argument)?;
            Some(self.alloc(argument))
        };
        Ok(Node::YieldExpression(YieldExpression { delegate, argument }))
    }

    pub(crate) fn parse_prefix(&mut self) -> ParseResult<Node<'a>> {
        let token = self.token()?;
        if !is_prefix(token.value) {
            return Err(self.missing_left_operand());
        }
        self.advance();
        if is_update(token.value) {
            let argument = self.fragment(K::UpdateExpression, P::Argument)?;
            return Ok(Node::UpdateExpression(UnaryExpression {
                operator: token.value,
                argument: self.alloc(argument),
                prefix: true,
            }));
        }
        let argument = self.fragment(K::UnaryExpression, P::Argument)?;
        Ok(Node::UnaryExpression(UnaryExpression {
            operator: token.value,
            argument: self.alloc(argument),
            prefix: true,
        }))
    }

    // ========================================================================
    // Continuations
    // ========================================================================

    pub(crate) fn parse_member(&mut self) -> ParseResult<Node<'a>> {
        let object = self.pop_operand()?;
        let name = self.advance_in(LexMode::NAMES);
        let property = match name {
            Some(token) if token.kind == K::IdentifierName => Identifier { name: token.value },
            _ => return Err(self.identifier_expected()),
        };
        self.advance();
        Ok(Node::MemberExpression(MemberExpression {
            object: self.alloc(object),
            property: self.alloc(Node::Identifier(property)),
            computed: false,
        }))
    }

    pub(crate) fn parse_computed_member(&mut self) -> ParseResult<Node<'a>> {
        let object = self.pop_operand()?;
        self.advance();
        let property = self.fragment(K::MemberExpression, P::Computed)?;
        self.expect(K::CloseBracketToken)?;
        Ok(Node::MemberExpression(MemberExpression {
            object: self.alloc(object),
            property: self.alloc(property),
            computed: true,
        }))
    }

    pub(crate) fn parse_call(&mut self) -> ParseResult<Node<'a>> {
        let callee = self.pop_operand()?;
        let arguments = self.parse_arguments(K::CallExpression)?;
        Ok(Node::CallExpression(CallExpression {
            callee: self.alloc(callee),
            arguments,
        }))
    }

    /// A parenthesized argument list of a call or `new`.
    fn parse_arguments(&mut self, owner: K) -> ParseResult<NodeList<'a>> {
        self.expect(K::OpenParenToken)?;
        let mut arguments = Vec::new();
        while !self.at(K::CloseParenToken) {
            arguments.push(self.fragment(owner, P::Arguments)?);
            if !self.eat(K::CommaToken) {
                break;
            }
        }
        self.expect(K::CloseParenToken)?;
        Ok(self.alloc_list(arguments))
    }

    /// An operator after an operand: postfix `++`/`--` or a binary operator.
    pub(crate) fn parse_infix(&mut self) -> ParseResult<Node<'a>> {
        let left = self.pop_operand()?;
        let token = self.token()?;
        if is_update(token.value) {
            self.advance();
            return Ok(Node::UpdateExpression(UnaryExpression {
                operator: token.value,
                argument: self.alloc(left),
                prefix: false,
            }));
        }
        self.climb(left, LOWEST_BINARY)
    }

    /// Precedence climbing over binary operators binding at least `min`.
    fn climb(&mut self, mut left: Node<'a>, min: u8) -> ParseResult<Node<'a>> {
        while let Some((operator, precedence)) = self.binary_operator() {
            if precedence < min {
                break;
            }
            self.advance();
            let mut right = self.fragment(K::BinaryExpression, P::Rhs)?;
            while let Some((next, next_precedence)) = self.binary_operator() {
                if next_precedence > precedence {
                    right = self.climb(right, precedence + 1)?;
                } else if next_precedence == precedence && is_right_associative(next) {
                    right = self.climb(right, precedence)?;
                } else {
                    break;
                }
            }
            let binary = BinaryExpression {
                operator,
                left: self.alloc(left),
                right: self.alloc(right),
            };
            left = if is_logical(operator) {
                Node::LogicalExpression(binary)
            } else {
                Node::BinaryExpression(binary)
            };
        }
        Ok(left)
    }

    fn binary_operator(&self) -> Option<(&'a str, u8)> {
        let token = self.current()?;
        binary_precedence(&token).map(|precedence| (token.value, precedence))
    }

    pub(crate) fn parse_assignment(&mut self) -> ParseResult<Node<'a>> {
        let left = self.pop_operand()?;
        let token = self.token()?;
        self.advance();
        let right = self.fragment(K::AssignmentExpression, P::Right)?;
        Ok(Node::AssignmentExpression(AssignmentExpression {
            operator: token.value,
            left: self.alloc(left),
            right: self.alloc(right),
        }))
    }

    pub(crate) fn parse_conditional(&mut self) -> ParseResult<Node<'a>> {
        let test = self.pop_operand()?;
        self.advance();
        let consequent = self.fragment(K::ConditionalExpression, P::Consequent)?;
        self.expect(K::ColonToken)?;
        let alternate = self.fragment(K::ConditionalExpression, P::Alternate)?;
        Ok(Node::ConditionalExpression(ConditionalExpression {
            test: self.alloc(test),
            consequent: self.alloc(consequent),
            alternate: Some(self.alloc(alternate)),
        }))
    }

    pub(crate) fn parse_sequence(&mut self) -> ParseResult<Node<'a>> {
        let first = self.pop_operand()?;
        let mut expressions = vec![first];
        while self.eat(K::CommaToken) {
            expressions.push(self.fragment(K::SequenceExpression, P::Expressions)?);
        }
        Ok(Node::SequenceExpression(SequenceExpression {
            expressions: self.alloc_list(expressions),
        }))
    }

    /// `label: statement`, continuing the identifier `label`.
    pub(crate) fn parse_labeled(&mut self) -> ParseResult<Node<'a>> {
        let label = self.pop_operand()?;
        self.advance();
        let body = self.with_frame(K::LabeledStatement, P::Body, Self::parse_statement)?;
        Ok(Node::LabeledStatement(LabeledStatement {
            label: self.alloc(label),
            body: self.alloc(body),
        }))
    }
}
