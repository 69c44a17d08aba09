//! Statement handlers, including module `import` and `export`.

use crate::context::Position as P;
use crate::parser::{ParseResult, Parser};
use esfront_ast::node::*;
use esfront_ast::syntax_kind::SyntaxKind as K;
use esfront_diagnostics::messages;
use esfront_tokenizer::{LexMode, Token};

const OPEN_PAREN: &[K] = &[K::OpenParenToken];

/// Tokens that may be read as a plain name in a name-only position.
pub(crate) fn is_name_like(token: &Token<'_>) -> bool {
    token.kind == K::IdentifierName
        || token.kind.is_keyword()
        || token.kind == K::ImportOperator
        || (token.kind == K::Operator && token.value.chars().all(char::is_alphabetic))
}

impl<'a> Parser<'a> {
    pub(crate) fn parse_block(&mut self) -> ParseResult<Node<'a>> {
        self.expect(K::OpenBraceToken)?;
        let mut body = Vec::new();
        while !self.at(K::CloseBraceToken) {
            body.push(self.with_frame(K::BlockStatement, P::Body, Self::parse_statement)?);
        }
        self.expect(K::CloseBraceToken)?;
        Ok(Node::BlockStatement(BlockStatement {
            body: self.alloc_list(body),
        }))
    }

    pub(crate) fn parse_expression_statement(&mut self) -> ParseResult<Node<'a>> {
        let expression = self.fragment(K::ExpressionStatement, P::Expression)?;
        if expression.is_statement() {
            return Ok(expression);
        }
        self.eat(K::SemicolonToken);
        Ok(Node::ExpressionStatement(ExpressionStatement {
            expression: self.alloc(expression),
        }))
    }

    /// `var`, `let` or `const` with one or more declarators. A trailing `;`
    /// is left to the caller.
    pub(crate) fn parse_variable_declaration(&mut self) -> ParseResult<Node<'a>> {
        let token = self.token()?;
        let Some(kind) = VariableKind::from_keyword(token.value) else {
            return Err(self.unexpected());
        };
        // Binding names may be contextual words such as `of` or `get`.
        self.advance_in(LexMode::NAMES);
        let mut declarations = Vec::new();
        loop {
            let id = self.fragment(K::VariableDeclarator, P::Id)?;
            let init = if self.eat_text(K::AssignmentOperator, "=") {
                let init = self.fragment(K::VariableDeclarator, P::Init)?;
                Some(self.alloc(init))
            } else {
                None
            };
            declarations.push(Node::VariableDeclarator(VariableDeclarator {
                id: self.alloc(id),
                init,
            }));
            if !self.at(K::CommaToken) {
                break;
            }
            self.advance_in(LexMode::NAMES);
        }
        Ok(Node::VariableDeclaration(VariableDeclaration {
            kind,
            declarations: self.alloc_list(declarations),
        }))
    }

    /// Step from a keyword to the first token inside the `(` that must
    /// follow it.
    fn open_condition(&mut self) -> ParseResult<()> {
        if self.advance_in(LexMode::expecting(OPEN_PAREN)).is_none() {
            // Re-read without the restriction so the error names what is there.
            let found = self.tokenizer.rescan(LexMode::DEFAULT);
            return Err(self.expected_error("(", found));
        }
        self.advance();
        Ok(())
    }

    fn statement_in(&mut self, kind: K, position: P) -> ParseResult<&'a Node<'a>> {
        let statement = self.with_frame(kind, position, Self::parse_statement)?;
        Ok(self.alloc(statement))
    }

    pub(crate) fn parse_if(&mut self) -> ParseResult<Node<'a>> {
        self.open_condition()?;
        let test = self.fragment(K::IfStatement, P::Test)?;
        self.expect(K::CloseParenToken)?;
        let consequent = self.statement_in(K::IfStatement, P::Consequent)?;
        let alternate = if self.eat(K::ElseKeyword) {
            Some(self.statement_in(K::IfStatement, P::Alternate)?)
        } else {
            None
        };
        Ok(Node::IfStatement(IfStatement {
            test: self.alloc(test),
            consequent,
            alternate,
        }))
    }

    pub(crate) fn parse_while(&mut self) -> ParseResult<Node<'a>> {
        self.open_condition()?;
        let test = self.fragment(K::WhileStatement, P::Test)?;
        self.expect(K::CloseParenToken)?;
        let body = self.statement_in(K::WhileStatement, P::Body)?;
        Ok(Node::WhileStatement(WhileStatement {
            test: self.alloc(test),
            body,
        }))
    }

    pub(crate) fn parse_do_while(&mut self) -> ParseResult<Node<'a>> {
        self.advance();
        let body = self.statement_in(K::DoWhileStatement, P::Body)?;
        if !self.at(K::WhileKeyword) {
            return Err(self.expected_error("while", self.current()));
        }
        self.open_condition()?;
        let test = self.fragment(K::DoWhileStatement, P::Test)?;
        self.expect(K::CloseParenToken)?;
        self.eat(K::SemicolonToken);
        Ok(Node::DoWhileStatement(DoWhileStatement {
            body,
            test: self.alloc(test),
        }))
    }

    /// `for (init; test; update)`, `for (left in right)` and
    /// `for (left of right)`. The `for` token already includes the `(`.
    pub(crate) fn parse_for(&mut self) -> ParseResult<Node<'a>> {
        let token = self.token()?;
        let is_await = token.value.ends_with("await");
        self.advance();
        let init = match self.token()?.kind {
            K::SemicolonToken => None,
            K::DeclarationKeyword => {
                Some(self.with_frame(K::ForStatement, P::Init, Self::parse_variable_declaration)?)
            }
            _ => Some(self.fragment(K::ForStatement, P::Init)?),
        };

        if self.eat(K::SemicolonToken) {
            let test = if self.at(K::SemicolonToken) {
                None
            } else {
                let test = self.fragment(K::ForStatement, P::Test)?;
                Some(self.alloc(test))
            };
            self.expect(K::SemicolonToken)?;
            let update = if self.at(K::CloseParenToken) {
                None
            } else {
                let update = self.fragment(K::ForStatement, P::Update)?;
                Some(self.alloc(update))
            };
            self.expect(K::CloseParenToken)?;
            let body = self.statement_in(K::ForStatement, P::Body)?;
            return Ok(Node::ForStatement(ForStatement {
                init: init.map(|init| self.alloc(init)),
                test,
                update,
                body,
            }));
        }

        let (Some(left), Some(token)) = (init, self.current()) else {
            return Err(self.unexpected());
        };
        let kind = match (token.kind, token.value) {
            (K::Operator, "in") => K::ForInStatement,
            (K::Operator, "of") => K::ForOfStatement,
            _ => return Err(self.error_at_current(&messages::IN_OR_OF_EXPECTED)),
        };
        self.advance();
        let right = self.fragment(kind, P::Right)?;
        self.expect(K::CloseParenToken)?;
        let body = self.statement_in(kind, P::Body)?;
        let statement = ForEachStatement {
            left: self.alloc(left),
            right: self.alloc(right),
            body,
            is_await,
        };
        Ok(if kind == K::ForInStatement {
            Node::ForInStatement(statement)
        } else {
            Node::ForOfStatement(statement)
        })
    }

    pub(crate) fn parse_switch(&mut self) -> ParseResult<Node<'a>> {
        self.open_condition()?;
        let discriminant = self.fragment(K::SwitchStatement, P::Discriminant)?;
        self.expect(K::CloseParenToken)?;
        self.expect(K::OpenBraceToken)?;
        let mut cases = Vec::new();
        while !self.at(K::CloseBraceToken) {
            cases.push(self.parse_switch_case()?);
        }
        self.expect(K::CloseBraceToken)?;
        Ok(Node::SwitchStatement(SwitchStatement {
            discriminant: self.alloc(discriminant),
            cases: self.alloc_list(cases),
        }))
    }

    fn parse_switch_case(&mut self) -> ParseResult<Node<'a>> {
        let test = match self.token()?.kind {
            K::CaseKeyword => {
                self.advance();
                let test = self.fragment(K::SwitchCase, P::Test)?;
                Some(self.alloc(test))
            }
            K::DefaultKeyword => {
                self.advance();
                None
            }
            _ => return Err(self.unexpected()),
        };
        self.expect(K::ColonToken)?;
        let mut consequent = Vec::new();
        while !matches!(
            self.current().map(|token| token.kind),
            None | Some(K::CaseKeyword | K::DefaultKeyword | K::CloseBraceToken)
        ) {
            consequent.push(self.with_frame(K::SwitchCase, P::Consequent, Self::parse_statement)?);
        }
        Ok(Node::SwitchCase(SwitchCase {
            test,
            consequent: self.alloc_list(consequent),
        }))
    }

    /// `return`. A line break right after the keyword ends the statement.
    pub(crate) fn parse_return(&mut self) -> ParseResult<Node<'a>> {
        let argument = match self.advance_in(LexMode::NEWLINE) {
            Some(token) if token.kind == K::SemicolonToken => {
                self.advance();
                None
            }
            Some(token) if token.kind == K::CloseBraceToken => None,
            None => None,
            Some(_) => {
                let argument = self.fragment(K::ReturnStatement, P::Argument)?;
                self.eat(K::SemicolonToken);
                Some(self.alloc(argument))
            }
        };
        Ok(Node::ReturnStatement(ReturnStatement { argument }))
    }

    /// `break` and `continue`; the label, if any, is part of the token.
    pub(crate) fn parse_jump(&mut self) -> ParseResult<Node<'a>> {
        let token = self.token()?;
        self.advance();
        self.eat(K::SemicolonToken);
        let label = if token.value.is_empty() {
            None
        } else {
            Some(self.alloc(Node::Identifier(Identifier { name: token.value })))
        };
        let jump = JumpStatement { label };
        Ok(if token.kind == K::BreakKeyword {
            Node::BreakStatement(jump)
        } else {
            Node::ContinueStatement(jump)
        })
    }

    // ========================================================================
    // Modules
    // ========================================================================

    /// The current token read as a plain name; keywords re-lex as
    /// identifiers.
    pub(crate) fn parse_name(&mut self) -> ParseResult<Node<'a>> {
        let token = self.token()?;
        if !is_name_like(&token) {
            return Err(self.identifier_expected());
        }
        let token = self.tokenizer.rescan(LexMode::NAMES).unwrap_or(token);
        self.advance();
        Ok(Node::Identifier(Identifier { name: token.value }))
    }

    fn parse_module_source(&mut self) -> ParseResult<&'a Node<'a>> {
        if !self.at(K::StringLiteral) {
            return Err(self.expected_error("module specifier", self.current()));
        }
        let source = self.parse_literal()?;
        Ok(self.alloc(source))
    }

    pub(crate) fn parse_import(&mut self) -> ParseResult<Node<'a>> {
        self.advance();
        let mut specifiers = Vec::new();
        if !self.at(K::StringLiteral) {
            self.with_frame(K::ImportDeclaration, P::Specifiers, |p| {
                p.parse_import_specifiers(&mut specifiers)
            })?;
            self.expect_text(K::ImportOperator, "from")?;
        }
        let source = self.parse_module_source()?;
        self.eat(K::SemicolonToken);
        Ok(Node::ImportDeclaration(ImportDeclaration {
            specifiers: self.alloc_list(specifiers),
            source,
        }))
    }

    /// `name`, `* as name`, `{ a, b as c }`, or a default name followed by
    /// one of the other two.
    fn parse_import_specifiers(&mut self, specifiers: &mut Vec<Node<'a>>) -> ParseResult<()> {
        if self.current().is_some_and(|token| is_name_like(&token)) {
            let local = self.parse_name()?;
            specifiers.push(Node::ImportDefaultSpecifier(ImportLocalSpecifier {
                local: self.alloc(local),
            }));
            if !self.eat(K::CommaToken) {
                return Ok(());
            }
        }
        if self.eat_text(K::Operator, "*") {
            self.expect_text(K::ImportOperator, "as")?;
            let local = self.parse_name()?;
            specifiers.push(Node::ImportNamespaceSpecifier(ImportLocalSpecifier {
                local: self.alloc(local),
            }));
            return Ok(());
        }
        self.expect(K::OpenBraceToken)?;
        while !self.at(K::CloseBraceToken) {
            let imported = self.parse_name()?;
            let local = if self.eat_text(K::ImportOperator, "as") {
                self.parse_name()?
            } else {
                imported.clone()
            };
            specifiers.push(Node::ImportSpecifier(ImportSpecifier {
                imported: self.alloc(imported),
                local: self.alloc(local),
            }));
            if !self.eat(K::CommaToken) {
                break;
            }
        }
        self.expect(K::CloseBraceToken)?;
        Ok(())
    }

    /// `export` followed by a declaration or a `{ ... }` specifier list.
    pub(crate) fn parse_export(&mut self) -> ParseResult<Node<'a>> {
        self.advance();
        if self.at(K::OpenBraceToken) {
            return self.parse_export_named();
        }
        let declaration = self.statement_in(K::ExportStatement, P::Declaration)?;
        Ok(Node::ExportStatement(ExportStatement { declaration }))
    }

    fn parse_export_named(&mut self) -> ParseResult<Node<'a>> {
        self.advance();
        let mut specifiers = Vec::new();
        self.with_frame(K::ExportNamedDeclaration, P::Specifiers, |p| {
            while !p.at(K::CloseBraceToken) {
                let local = p.parse_name()?;
                let exported = if p.eat_text(K::ImportOperator, "as") {
                    p.parse_name()?
                } else {
                    local.clone()
                };
                specifiers.push(Node::ExportSpecifier(ExportSpecifier {
                    local: p.alloc(local),
                    exported: p.alloc(exported),
                }));
                if !p.eat(K::CommaToken) {
                    break;
                }
            }
            Ok(())
        })?;
        self.expect(K::CloseBraceToken)?;
        let source = if self.eat_text(K::ImportOperator, "from") {
            Some(self.parse_module_source()?)
        } else {
            None
        };
        self.eat(K::SemicolonToken);
        Ok(Node::ExportNamedDeclaration(ExportNamedDeclaration {
            specifiers: self.alloc_list(specifiers),
            source,
        }))
    }

    /// `export default` followed by a function, a class or an expression.
    pub(crate) fn parse_export_default(&mut self) -> ParseResult<Node<'a>> {
        self.advance();
        let declaration = match self.token()?.kind {
            K::FunctionKeyword | K::ClassKeyword => {
                self.statement_in(K::ExportDefaultStatement, P::Declaration)?
            }
            _ => {
                let expression = self.fragment(K::ExportDefaultStatement, P::Declaration)?;
                self.eat(K::SemicolonToken);
                self.alloc(expression)
            }
        };
        Ok(Node::ExportDefaultStatement(ExportStatement { declaration }))
    }
}
