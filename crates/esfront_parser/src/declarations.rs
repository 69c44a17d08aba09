//! Functions, classes and object literals: the constructs with member
//! lists, parameter lists and property keys.

use crate::context::Position as P;
use crate::parser::{ParseResult, Parser};
use crate::statements::is_name_like;
use esfront_ast::node::*;
use esfront_ast::syntax_kind::SyntaxKind as K;
use esfront_tokenizer::{LexMode, Token};

/// Whether `next`, the token after `get`, `set`, `static` or `async`, makes
/// that word a modifier rather than the member's own name.
fn starts_member_name(next: Option<Token<'_>>) -> bool {
    next.is_some_and(|token| {
        !matches!(
            token.kind,
            K::OpenParenToken
                | K::AssignmentOperator
                | K::SemicolonToken
                | K::CloseBraceToken
                | K::ColonToken
                | K::CommaToken
        )
    })
}

impl<'a> Parser<'a> {
    /// `function`, `async function` or a generator. A declaration in
    /// statement position, an expression anywhere else.
    pub(crate) fn parse_function(&mut self) -> ParseResult<Node<'a>> {
        let token = self.token()?;
        let declaration = self.is_statement_position();
        let kind = if declaration {
            K::FunctionDeclaration
        } else {
            K::FunctionExpression
        };
        let id = match self.advance_in(LexMode::NAMES) {
            Some(name) if name.kind == K::IdentifierName => {
                self.advance();
                Some(Node::Identifier(Identifier { name: name.value }))
            }
            _ => None,
        };
        let function = self.parse_function_rest(
            kind,
            token.raw.starts_with("async"),
            token.raw.ends_with('*'),
            id,
        )?;
        Ok(if declaration {
            Node::FunctionDeclaration(function)
        } else {
            Node::FunctionExpression(function)
        })
    }

    /// Parameters and body, starting at the `(`.
    fn parse_function_rest(
        &mut self,
        kind: K,
        is_async: bool,
        generator: bool,
        id: Option<Node<'a>>,
    ) -> ParseResult<Function<'a>> {
        self.expect(K::OpenParenToken)?;
        let mut params = Vec::new();
        while !self.at(K::CloseParenToken) {
            params.push(self.fragment(kind, P::Params)?);
            if !self.eat(K::CommaToken) {
                break;
            }
        }
        self.expect(K::CloseParenToken)?;
        let body = self.with_frame(kind, P::Body, Self::parse_block)?;
        Ok(Function {
            is_async,
            generator,
            id: id.map(|id| self.alloc(id)),
            params: self.alloc_list(params),
            body: Some(self.alloc(body)),
        })
    }

    /// A method's value: an anonymous function expression.
    fn parse_method_value(&mut self, is_async: bool, generator: bool) -> ParseResult<Node<'a>> {
        let function = self.parse_function_rest(K::FunctionExpression, is_async, generator, None)?;
        Ok(Node::FunctionExpression(function))
    }

    /// Consume a `get`, `set` or `static` prefix of kind `kind`. When the
    /// word is the member's name instead, it is re-read as an identifier.
    fn eat_modifier(&mut self, kind: K) -> bool {
        self.at(kind) && self.modifier_applies(false)
    }

    /// Consume an `async` prefix on the same line as the member name.
    fn eat_async(&mut self) -> bool {
        self.at_text(K::IdentifierName, "async") && self.modifier_applies(true)
    }

    fn modifier_applies(&mut self, same_line: bool) -> bool {
        let saved = self.tokenizer.checkpoint();
        let next = self.advance();
        if starts_member_name(next) && !(same_line && next.is_some_and(|token| token.preceded_by_newline)) {
            return true;
        }
        self.tokenizer.rewind(saved);
        self.tokenizer.rescan(LexMode::NAMES);
        false
    }

    /// A property or member key. Returns the key and whether it is computed.
    fn parse_property_key(&mut self, owner: K) -> ParseResult<(Node<'a>, bool)> {
        let token = self.token()?;
        match token.kind {
            K::OpenBracketToken => {
                self.advance();
                let key = self.fragment(owner, P::Key)?;
                self.expect(K::CloseBracketToken)?;
                Ok((key, true))
            }
            K::StringLiteral | K::NumericLiteral => Ok((self.parse_literal()?, false)),
            _ if is_name_like(&token) => Ok((self.parse_name()?, false)),
            _ => Err(self.unexpected()),
        }
    }

    // ========================================================================
    // Classes
    // ========================================================================

    /// `class Name extends Base { ... }`. Classes in expression position are
    /// built the same way.
    pub(crate) fn parse_class(&mut self) -> ParseResult<Node<'a>> {
        self.advance();
        let id = if self.at(K::IdentifierName) {
            let id = self.parse_identifier()?;
            Some(self.alloc(id))
        } else {
            None
        };
        let super_class = if self.eat(K::ExtendsKeyword) {
            let super_class = self.fragment(K::ClassDeclaration, P::SuperClass)?;
            Some(self.alloc(super_class))
        } else {
            None
        };
        self.expect(K::OpenBraceToken)?;
        let mut members = Vec::new();
        while !self.at(K::CloseBraceToken) {
            if self.eat(K::SemicolonToken) {
                continue;
            }
            members.push(self.with_frame(K::ClassBody, P::Body, Self::parse_class_member)?);
        }
        self.expect(K::CloseBraceToken)?;
        let body = Node::ClassBody(ClassBody {
            body: self.alloc_list(members),
        });
        Ok(Node::ClassDeclaration(ClassDeclaration {
            id,
            super_class,
            body: self.alloc(body),
        }))
    }

    fn parse_class_member(&mut self) -> ParseResult<Node<'a>> {
        let is_static = self.eat_modifier(K::StaticKeyword);
        let is_async = self.eat_async();
        let generator = self.eat_text(K::Operator, "*");
        let kind = if self.eat_modifier(K::GetKeyword) {
            MethodKind::Get
        } else if self.eat_modifier(K::SetKeyword) {
            MethodKind::Set
        } else {
            MethodKind::Method
        };
        let (key, computed) = self.parse_property_key(K::ClassBody)?;

        if self.at(K::OpenParenToken) {
            let value = self.parse_method_value(is_async, generator)?;
            return Ok(Node::MethodDefinition(MethodDefinition {
                is_static,
                kind,
                key: self.alloc(key),
                computed,
                value: self.alloc(value),
            }));
        }

        let value = if self.eat_text(K::AssignmentOperator, "=") {
            let value = self.fragment(K::PropertyDefinition, P::Value)?;
            Some(self.alloc(value))
        } else {
            None
        };
        self.eat(K::SemicolonToken);
        Ok(Node::PropertyDefinition(PropertyDefinition {
            is_static,
            key: self.alloc(key),
            computed,
            value,
        }))
    }

    // ========================================================================
    // Object literals
    // ========================================================================

    /// `{ ... }` in expression position: an object pattern where the
    /// context calls for one, otherwise an object expression.
    pub(crate) fn parse_object(&mut self) -> ParseResult<Node<'a>> {
        let kind = if self.is_pattern_position() {
            K::ObjectPattern
        } else {
            K::ObjectExpression
        };
        self.advance();
        let mut properties = Vec::new();
        while !self.at(K::CloseBraceToken) {
            properties.push(self.with_frame(kind, P::Properties, |p| p.parse_object_member(kind))?);
            if !self.eat(K::CommaToken) {
                break;
            }
        }
        self.expect(K::CloseBraceToken)?;
        let object = ObjectLiteral {
            properties: self.alloc_list(properties),
        };
        Ok(if kind == K::ObjectPattern {
            Node::ObjectPattern(object)
        } else {
            Node::ObjectExpression(object)
        })
    }

    fn parse_object_member(&mut self, owner: K) -> ParseResult<Node<'a>> {
        if self.at(K::DotDotDotToken) {
            return self.parse_spread();
        }
        let is_async = self.eat_async();
        let generator = self.eat_text(K::Operator, "*");
        let kind = if self.eat_modifier(K::GetKeyword) {
            PropertyKind::Get
        } else if self.eat_modifier(K::SetKeyword) {
            PropertyKind::Set
        } else {
            PropertyKind::Init
        };
        let (key, computed) = self.parse_property_key(owner)?;

        let (value, shorthand, method) = if self.at(K::OpenParenToken) {
            let value = self.parse_method_value(is_async, generator)?;
            (value, false, kind == PropertyKind::Init)
        } else if self.eat(K::ColonToken) {
            (self.fragment(owner, P::Value)?, false, false)
        } else if matches!(key, Node::Identifier(_)) && !computed {
            // Shorthand `{ a }`, with an optional default `{ a = 1 }`.
            let value = if self.eat_text(K::AssignmentOperator, "=") {
                let default = self.fragment(K::AssignmentExpression, P::Right)?;
                Node::AssignmentExpression(AssignmentExpression {
                    operator: "=",
                    left: self.alloc(key.clone()),
                    right: self.alloc(default),
                })
            } else {
                key.clone()
            };
            (value, true, false)
        } else {
            return Err(self.expected_error(":", self.current()));
        };

        Ok(Node::Property(Property {
            key: self.alloc(key),
            value: self.alloc(value),
            kind,
            computed,
            shorthand,
            method,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use esfront_tokenizer::Tokenizer;

    fn first_token(source: &str) -> Option<Token<'_>> {
        Tokenizer::new(source).next(LexMode::DEFAULT)
    }

    #[test]
    fn test_modifier_lookahead() {
        assert!(starts_member_name(first_token("x() {}")));
        assert!(starts_member_name(first_token("[key]() {}")));
        assert!(!starts_member_name(first_token("() {}")));
        assert!(!starts_member_name(first_token("= 1")));
        assert!(!starts_member_name(first_token(": 1")));
        assert!(!starts_member_name(first_token("}")));
        assert!(!starts_member_name(None));
    }
}
