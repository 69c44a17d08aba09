//! The ancestor-context stack.
//!
//! While a node is being built the parser records which node kind is in
//! progress and which of its fields is being filled. Disambiguation
//! predicates read this stack; nothing from it is stored in the tree.

use esfront_ast::syntax_kind::SyntaxKind;

/// The field of an in-progress node that is currently being filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    Body,
    Expression,
    Test,
    Consequent,
    Alternate,
    Init,
    Update,
    Left,
    Right,
    /// Right operand of a binary operator.
    Rhs,
    Argument,
    Arguments,
    Callee,
    Property,
    /// The bracketed property of a computed member access.
    Computed,
    Elements,
    Properties,
    Key,
    Value,
    Params,
    Id,
    Label,
    Discriminant,
    Specifiers,
    Source,
    Declaration,
    SuperClass,
    Expressions,
    /// Inside an explicit pair of parentheses.
    Parenthesis,
    /// The node is complete and a postfix or infix continuation is being
    /// parsed; its handler takes the node from the operand stack.
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub kind: SyntaxKind,
    pub position: Position,
}

impl Frame {
    #[inline]
    pub fn is(&self, kind: SyntaxKind, position: Position) -> bool {
        self.kind == kind && self.position == position
    }
}

/// A scoped stack of frames, innermost last.
#[derive(Debug, Default)]
pub struct ContextStack {
    frames: Vec<Frame>,
}

impl ContextStack {
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    #[inline]
    pub fn push(&mut self, kind: SyntaxKind, position: Position) {
        self.frames.push(Frame { kind, position });
    }

    #[inline]
    pub fn pop(&mut self) -> Option<Frame> {
        self.frames.pop()
    }

    #[inline]
    pub fn top(&self) -> Option<Frame> {
        self.frames.last().copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Frames from innermost to outermost.
    pub fn innermost_first(&self) -> impl Iterator<Item = &Frame> {
        self.frames.iter().rev()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_top() {
        let mut stack = ContextStack::new();
        assert!(stack.top().is_none());
        stack.push(SyntaxKind::Program, Position::Body);
        stack.push(SyntaxKind::IfStatement, Position::Test);
        assert!(stack.top().is_some_and(|f| f.is(SyntaxKind::IfStatement, Position::Test)));
        assert_eq!(stack.len(), 2);
        let kinds: Vec<_> = stack.innermost_first().map(|f| f.kind).collect();
        assert_eq!(kinds, vec![SyntaxKind::IfStatement, SyntaxKind::Program]);
        stack.pop();
        assert!(stack.top().is_some_and(|f| f.is(SyntaxKind::Program, Position::Body)));
    }
}
