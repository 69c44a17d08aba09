//! Context predicates.
//!
//! Each predicate answers one disambiguation question from the innermost
//! frames of the ancestor-context stack: may this token continue the
//! operand before it, is this `{` a block, an object or a pattern, is this
//! `function` a declaration.

use crate::context::{Frame, Position};
use crate::parser::Parser;
use crate::precedence::{binary_precedence, is_update};
use esfront_ast::node::Node;
use esfront_ast::syntax_kind::SyntaxKind;
use esfront_tokenizer::Token;

use Position as P;
use SyntaxKind as K;

/// Frames whose child is a statement.
fn is_statement_frame(frame: Frame) -> bool {
    match frame.kind {
        K::Program | K::BlockStatement => frame.position == P::Body,
        K::SwitchCase => frame.position == P::Consequent,
        K::IfStatement => matches!(frame.position, P::Consequent | P::Alternate),
        K::ForStatement
        | K::ForInStatement
        | K::ForOfStatement
        | K::WhileStatement
        | K::DoWhileStatement
        | K::LabeledStatement => frame.position == P::Body,
        _ => false,
    }
}

fn is_unary_operand(frame: Frame) -> bool {
    matches!(frame.kind, K::UnaryExpression | K::UpdateExpression) && frame.position == P::Argument
}

fn is_binary_operand(frame: Frame) -> bool {
    frame.is(K::BinaryExpression, P::Rhs)
}

fn is_member_property(frame: Frame) -> bool {
    frame.is(K::MemberExpression, P::Property)
}

fn is_params(frame: Frame) -> bool {
    matches!(
        frame.kind,
        K::FunctionDeclaration | K::FunctionExpression | K::ArrowFunctionExpression
    ) && frame.position == P::Params
}

/// Frames in which a comma belongs to the enclosing construct rather than
/// to a sequence expression.
fn denies_sequence(frame: Frame) -> bool {
    match frame.kind {
        K::ArrayPattern
        | K::ObjectExpression
        | K::ObjectPattern
        | K::SequenceExpression
        | K::ConditionalExpression
        | K::ImportDeclaration
        | K::ImportSpecifier
        | K::ExportNamedDeclaration
        | K::ExportSpecifier
        | K::ExportDefaultStatement
        | K::SpreadElement
        | K::YieldExpression
        | K::ClassBody
        | K::PropertyDefinition
        | K::VariableDeclarator
        | K::CallExpression
        | K::NewExpression
        | K::UnaryExpression
        | K::UpdateExpression => true,
        K::OpenParenToken => frame.position == P::Parenthesis,
        K::ArrowFunctionExpression => matches!(frame.position, P::Params | P::Body),
        K::AssignmentExpression => frame.position == P::Right,
        _ => is_params(frame) || is_binary_operand(frame) || is_member_property(frame),
    }
}

/// Frames that open a fresh operand chain: statements and bracketed
/// positions.
fn starts_chain(frame: Frame) -> bool {
    frame.kind.is_statement()
        || matches!(
            frame.position,
            P::Parenthesis | P::Computed | P::Elements | P::Expressions | P::Properties | P::Value | P::Key
        )
}

impl<'a> Parser<'a> {
    /// Whether a continuation handler is running.
    #[inline]
    pub(crate) fn in_continuation(&self) -> bool {
        self.context.top().is_some_and(|frame| frame.position == P::End)
    }

    /// Whether `operand` is finished as built. Statement nodes never continue,
    /// except a class, which is a declaration only in statement position.
    pub(crate) fn is_closed(&self, operand: &Node<'a>) -> bool {
        match operand {
            Node::ClassDeclaration(_) => self.is_statement_position(),
            _ => operand.is_statement(),
        }
    }

    /// Whether `token` continues `operand` in the current context.
    pub(crate) fn continues(&self, operand: &Node<'a>, token: &Token<'a>) -> bool {
        let Some(top) = self.context.top() else {
            return false;
        };
        // A `new` callee takes member accesses only; its argument list
        // belongs to the `new`.
        if top.is(K::NewExpression, P::Callee) {
            return matches!(token.kind, K::DotToken | K::OpenBracketToken);
        }
        match token.kind {
            K::DotToken | K::OpenBracketToken => !is_member_property(top),
            K::OpenParenToken => self.allows_call(top, operand),
            K::Operator if is_update(token.value) => allows_postfix(operand, token),
            K::Operator => binary_precedence(token).is_some() && allows_binary(top, token),
            K::AssignmentOperator => allows_assignment(top, operand),
            K::QuestionToken => allows_conditional(top),
            K::CommaToken => self.allows_sequence(),
            K::ArrowToken => {
                matches!(operand, Node::Identifier(_)) && !top.is(K::VariableDeclarator, P::Id)
            }
            K::ColonToken => {
                matches!(operand, Node::Identifier(_)) && top.is(K::ExpressionStatement, P::Expression)
            }
            _ => false,
        }
    }

    fn allows_call(&self, top: Frame, operand: &Node<'a>) -> bool {
        let callable = matches!(
            operand,
            Node::Identifier(_)
                | Node::MemberExpression(_)
                | Node::FunctionExpression(_)
                | Node::CallExpression(_)
                | Node::SequenceExpression(_)
                | Node::ArrowFunctionExpression(_)
        );
        callable
            && !is_member_property(top)
            && !top.is(K::FunctionExpression, P::Id)
            && top.kind != K::ClassBody
            && !(matches!(top.kind, K::ObjectExpression | K::ObjectPattern) && top.position == P::Key)
    }

    /// A comma makes a sequence unless the innermost frame or the current
    /// operand chain already gives commas a meaning.
    fn allows_sequence(&self) -> bool {
        let Some(top) = self.context.top() else {
            return false;
        };
        if denies_sequence(top) {
            return false;
        }
        for &frame in self.context.innermost_first() {
            if matches!(frame.kind, K::CallExpression | K::NewExpression) && frame.position == P::Arguments {
                return false;
            }
            if is_unary_operand(frame) {
                return false;
            }
            if starts_chain(frame) {
                break;
            }
        }
        true
    }

    /// Whether `{` here opens a block.
    pub(crate) fn is_block_position(&self) -> bool {
        self.context.top().is_some_and(|frame| {
            is_statement_frame(frame)
                || (matches!(
                    frame.kind,
                    K::ArrowFunctionExpression | K::FunctionDeclaration | K::FunctionExpression
                ) && frame.position == P::Body)
        })
    }

    /// Whether a `function` here is a declaration.
    pub(crate) fn is_statement_position(&self) -> bool {
        self.context.top().is_some_and(|frame| {
            is_statement_frame(frame)
                || (matches!(frame.kind, K::ExportStatement | K::ExportDefaultStatement)
                    && frame.position == P::Declaration)
        })
    }

    /// Whether `{` here opens an object pattern rather than an object
    /// expression: inside another pattern, as an array element, as a
    /// declarator target or as a parameter.
    pub(crate) fn is_pattern_position(&self) -> bool {
        self.context.top().is_some_and(|frame| {
            frame.kind == K::ObjectPattern
                || frame.is(K::ArrayPattern, P::Elements)
                || frame.is(K::VariableDeclarator, P::Id)
                || is_params(frame)
        })
    }
}

fn allows_postfix(operand: &Node<'_>, token: &Token<'_>) -> bool {
    matches!(operand, Node::Identifier(_) | Node::MemberExpression(_)) && !token.preceded_by_newline
}

fn allows_binary(top: Frame, token: &Token<'_>) -> bool {
    if is_binary_operand(top) || is_unary_operand(top) || is_member_property(top) {
        return false;
    }
    if top.is(K::VariableDeclarator, P::Id) {
        return false;
    }
    // `in` and `of` after the first clause of a `for` belong to the loop.
    !(matches!(token.value, "in" | "of") && top.is(K::ForStatement, P::Init))
}

fn allows_assignment(top: Frame, operand: &Node<'_>) -> bool {
    operand.is_assignable()
        && !top.is(K::VariableDeclarator, P::Id)
        && top.kind != K::ClassBody
        && !is_member_property(top)
        && !is_binary_operand(top)
        && !is_unary_operand(top)
}

fn allows_conditional(top: Frame) -> bool {
    !is_member_property(top)
        && !is_binary_operand(top)
        && !is_unary_operand(top)
        && !top.is(K::VariableDeclarator, P::Id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(kind: SyntaxKind, position: Position) -> Frame {
        Frame { kind, position }
    }

    #[test]
    fn test_sequence_denied_in_list_positions() {
        assert!(denies_sequence(frame(K::CallExpression, P::Arguments)));
        assert!(denies_sequence(frame(K::ArrayPattern, P::Elements)));
        assert!(denies_sequence(frame(K::VariableDeclarator, P::Init)));
        assert!(denies_sequence(frame(K::OpenParenToken, P::Parenthesis)));
        assert!(denies_sequence(frame(K::FunctionExpression, P::Params)));
        assert!(!denies_sequence(frame(K::ExpressionStatement, P::Expression)));
        assert!(!denies_sequence(frame(K::ForStatement, P::Init)));
        assert!(!denies_sequence(frame(K::MemberExpression, P::Computed)));
    }

    #[test]
    fn test_statement_frames() {
        assert!(is_statement_frame(frame(K::Program, P::Body)));
        assert!(is_statement_frame(frame(K::IfStatement, P::Alternate)));
        assert!(!is_statement_frame(frame(K::IfStatement, P::Test)));
        assert!(!is_statement_frame(frame(K::ArrowFunctionExpression, P::Body)));
    }

    #[test]
    fn test_chain_boundaries() {
        assert!(starts_chain(frame(K::ExpressionStatement, P::Expression)));
        assert!(starts_chain(frame(K::MemberExpression, P::Computed)));
        assert!(!starts_chain(frame(K::BinaryExpression, P::Rhs)));
    }
}
