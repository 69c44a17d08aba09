//! Generic tree traversal.
//!
//! [`for_each_child`] enumerates a node's children in field order, tagging each
//! with the name of the field that holds it. [`walk`] builds a depth-first,
//! pre-order traversal on top of it that tracks the ancestor path, and
//! [`Walker`] adapts that traversal to per-kind closures.

use crate::node::*;
use crate::syntax_kind::SyntaxKind;
use rustc_hash::FxHashMap;

/// Call `f(field, child)` for every direct child of `node`, in field order.
pub fn for_each_child<'a>(node: &'a Node<'a>, mut f: impl FnMut(&'static str, &'a Node<'a>)) {
    fn list<'a>(field: &'static str, nodes: NodeList<'a>, f: &mut dyn FnMut(&'static str, &'a Node<'a>)) {
        for child in nodes.iter() {
            f(field, child);
        }
    }
    fn opt<'a>(field: &'static str, child: OptionalNode<'a>, f: &mut dyn FnMut(&'static str, &'a Node<'a>)) {
        if let Some(child) = child {
            f(field, child);
        }
    }

    match node {
        Node::Program(n) => list("body", n.body, &mut f),
        Node::ExpressionStatement(n) => f("expression", n.expression),
        Node::BlockStatement(n) => list("body", n.body, &mut f),
        Node::ReturnStatement(n) => opt("argument", n.argument, &mut f),
        Node::IfStatement(n) => {
            f("test", n.test);
            f("consequent", n.consequent);
            opt("alternate", n.alternate, &mut f);
        }
        Node::SwitchStatement(n) => {
            f("discriminant", n.discriminant);
            list("cases", n.cases, &mut f);
        }
        Node::SwitchCase(n) => {
            opt("test", n.test, &mut f);
            list("consequent", n.consequent, &mut f);
        }
        Node::ForStatement(n) => {
            opt("init", n.init, &mut f);
            opt("test", n.test, &mut f);
            opt("update", n.update, &mut f);
            f("body", n.body);
        }
        Node::ForInStatement(n) | Node::ForOfStatement(n) => {
            f("left", n.left);
            f("right", n.right);
            f("body", n.body);
        }
        Node::DoWhileStatement(n) => {
            f("body", n.body);
            f("test", n.test);
        }
        Node::WhileStatement(n) => {
            f("test", n.test);
            f("body", n.body);
        }
        Node::ContinueStatement(n) | Node::BreakStatement(n) => opt("label", n.label, &mut f),
        Node::LabeledStatement(n) => {
            f("label", n.label);
            f("body", n.body);
        }
        Node::VariableDeclaration(n) => list("declarations", n.declarations, &mut f),
        Node::VariableDeclarator(n) => {
            f("id", n.id);
            opt("init", n.init, &mut f);
        }
        Node::FunctionDeclaration(n) | Node::FunctionExpression(n) => {
            opt("id", n.id, &mut f);
            list("params", n.params, &mut f);
            opt("body", n.body, &mut f);
        }
        Node::ClassDeclaration(n) => {
            opt("id", n.id, &mut f);
            opt("superClass", n.super_class, &mut f);
            f("body", n.body);
        }
        Node::ClassBody(n) => list("body", n.body, &mut f),
        Node::PropertyDefinition(n) => {
            f("key", n.key);
            opt("value", n.value, &mut f);
        }
        Node::MethodDefinition(n) => {
            f("key", n.key);
            f("value", n.value);
        }
        Node::ImportDeclaration(n) => {
            list("specifiers", n.specifiers, &mut f);
            f("source", n.source);
        }
        Node::ImportDefaultSpecifier(n) | Node::ImportNamespaceSpecifier(n) => f("local", n.local),
        Node::ImportSpecifier(n) => {
            f("imported", n.imported);
            f("local", n.local);
        }
        Node::ExportStatement(n) | Node::ExportDefaultStatement(n) => f("declaration", n.declaration),
        Node::ExportNamedDeclaration(n) => {
            list("specifiers", n.specifiers, &mut f);
            opt("source", n.source, &mut f);
        }
        Node::ExportSpecifier(n) => {
            f("local", n.local);
            f("exported", n.exported);
        }
        Node::TemplateLiteral(n) => {
            list("quasis", n.quasis, &mut f);
            list("expressions", n.expressions, &mut f);
        }
        Node::SpreadElement(n) => f("argument", n.argument),
        Node::ArrayPattern(n) => list("elements", n.elements, &mut f),
        Node::ObjectExpression(n) | Node::ObjectPattern(n) => list("properties", n.properties, &mut f),
        Node::Property(n) => {
            f("key", n.key);
            f("value", n.value);
        }
        Node::ArrowFunctionExpression(n) => {
            list("params", n.params, &mut f);
            f("body", n.body);
        }
        Node::YieldExpression(n) => opt("argument", n.argument, &mut f),
        Node::UnaryExpression(n) | Node::UpdateExpression(n) => f("argument", n.argument),
        Node::BinaryExpression(n) | Node::LogicalExpression(n) => {
            f("left", n.left);
            f("right", n.right);
        }
        Node::AssignmentExpression(n) => {
            f("left", n.left);
            f("right", n.right);
        }
        Node::ConditionalExpression(n) => {
            f("test", n.test);
            f("consequent", n.consequent);
            opt("alternate", n.alternate, &mut f);
        }
        Node::MemberExpression(n) => {
            f("object", n.object);
            f("property", n.property);
        }
        Node::CallExpression(n) | Node::NewExpression(n) => {
            f("callee", n.callee);
            list("arguments", n.arguments, &mut f);
        }
        Node::SequenceExpression(n) => list("expressions", n.expressions, &mut f),
        Node::Identifier(_)
        | Node::Literal(_)
        | Node::TemplateElement(_)
        | Node::ThisExpression
        | Node::EmptyStatement => {}
    }
}

/// One step of the path from the root to a visited node: `node` holds the
/// next node down in its `property` field.
#[derive(Debug, Clone, Copy)]
pub struct Ancestor<'a> {
    pub node: &'a Node<'a>,
    pub property: &'static str,
}

/// A tree visitor. Returning `false` from `enter` skips the node's children.
pub trait Visitor<'a> {
    fn enter(&mut self, node: &'a Node<'a>, ancestors: &[Ancestor<'a>]) -> bool;

    fn leave(&mut self, _node: &'a Node<'a>, _ancestors: &[Ancestor<'a>]) {}
}

/// Depth-first, pre-order traversal of `root`.
pub fn walk<'a, V: Visitor<'a> + ?Sized>(root: &'a Node<'a>, visitor: &mut V) {
    let mut ancestors = Vec::new();
    walk_node(root, visitor, &mut ancestors);
}

fn walk_node<'a, V: Visitor<'a> + ?Sized>(
    node: &'a Node<'a>,
    visitor: &mut V,
    ancestors: &mut Vec<Ancestor<'a>>,
) {
    if !visitor.enter(node, ancestors) {
        return;
    }
    for_each_child(node, |property, child| {
        ancestors.push(Ancestor { node, property });
        walk_node(child, visitor, ancestors);
        ancestors.pop();
    });
    visitor.leave(node, ancestors);
}

type Callback<'a, 'f> = Box<dyn FnMut(&'a Node<'a>, &[Ancestor<'a>]) -> bool + 'f>;

/// A closure-driven visitor keyed by node kind.
///
/// Nodes without a registered callback go to the default callback; with no
/// default either, the walker simply descends.
pub struct Walker<'a, 'f> {
    callbacks: FxHashMap<SyntaxKind, Callback<'a, 'f>>,
    default: Option<Callback<'a, 'f>>,
}

impl<'a, 'f> Walker<'a, 'f> {
    pub fn new() -> Self {
        Self {
            callbacks: FxHashMap::default(),
            default: None,
        }
    }

    /// Register the callback for nodes of `kind`.
    pub fn on(
        mut self,
        kind: SyntaxKind,
        callback: impl FnMut(&'a Node<'a>, &[Ancestor<'a>]) -> bool + 'f,
    ) -> Self {
        self.callbacks.insert(kind, Box::new(callback));
        self
    }

    pub fn on_default(
        mut self,
        callback: impl FnMut(&'a Node<'a>, &[Ancestor<'a>]) -> bool + 'f,
    ) -> Self {
        self.default = Some(Box::new(callback));
        self
    }

    pub fn run(&mut self, root: &'a Node<'a>) {
        walk(root, self);
    }
}

impl Default for Walker<'_, '_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Visitor<'a> for Walker<'a, '_> {
    fn enter(&mut self, node: &'a Node<'a>, ancestors: &[Ancestor<'a>]) -> bool {
        if let Some(callback) = self.callbacks.get_mut(&node.kind()) {
            return callback(node, ancestors);
        }
        match self.default.as_mut() {
            Some(callback) => callback(node, ancestors),
            None => true,
        }
    }
}

/// The inner links of a member/call chain, outermost first.
///
/// Starting at `node`, follows `object` of each `MemberExpression` and
/// `callee` of each `CallExpression` for as long as the next link is itself a
/// member or call.
pub fn find_member_ancestors<'a>(node: &'a Node<'a>) -> Vec<&'a Node<'a>> {
    let mut chain = Vec::new();
    let mut cursor = node;
    loop {
        let next = match cursor {
            Node::MemberExpression(member) => member.object,
            Node::CallExpression(call) => call.callee,
            _ => break,
        };
        if !matches!(next, Node::MemberExpression(_) | Node::CallExpression(_)) {
            break;
        }
        chain.push(next);
        cursor = next;
    }
    chain
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(name: &str) -> Node<'_> {
        Node::Identifier(Identifier { name })
    }

    struct Recorder {
        seen: Vec<(SyntaxKind, Vec<&'static str>)>,
        skip: Option<SyntaxKind>,
    }

    impl<'a> Visitor<'a> for Recorder {
        fn enter(&mut self, node: &'a Node<'a>, ancestors: &[Ancestor<'a>]) -> bool {
            let path = ancestors.iter().map(|a| a.property).collect();
            self.seen.push((node.kind(), path));
            self.skip != Some(node.kind())
        }
    }

    #[test]
    fn test_walk_is_preorder_with_paths() {
        // a.b(c)
        let a = ident("a");
        let b = ident("b");
        let c = ident("c");
        let member = Node::MemberExpression(MemberExpression { object: &a, property: &b, computed: false });
        let args = [c];
        let call = Node::CallExpression(CallExpression { callee: &member, arguments: &args });

        let mut recorder = Recorder { seen: Vec::new(), skip: None };
        walk(&call, &mut recorder);

        let kinds: Vec<_> = recorder.seen.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            kinds,
            vec![
                SyntaxKind::CallExpression,
                SyntaxKind::MemberExpression,
                SyntaxKind::Identifier,
                SyntaxKind::Identifier,
                SyntaxKind::Identifier,
            ]
        );
        assert_eq!(recorder.seen[2].1, vec!["callee", "object"]);
        assert_eq!(recorder.seen[3].1, vec!["callee", "property"]);
        assert_eq!(recorder.seen[4].1, vec!["arguments"]);
    }

    #[test]
    fn test_enter_false_skips_children() {
        let a = ident("a");
        let b = ident("b");
        let member = Node::MemberExpression(MemberExpression { object: &a, property: &b, computed: false });
        let mut recorder = Recorder { seen: Vec::new(), skip: Some(SyntaxKind::MemberExpression) };
        walk(&member, &mut recorder);
        assert_eq!(recorder.seen.len(), 1);
    }

    #[test]
    fn test_walker_callbacks() {
        let a = ident("a");
        let b = ident("b");
        let binary = Node::BinaryExpression(BinaryExpression { operator: "+", left: &a, right: &b });

        let mut names = Vec::new();
        let mut others = 0;
        Walker::new()
            .on(SyntaxKind::Identifier, |node, _| {
                names.extend(node.identifier_name());
                true
            })
            .on_default(|_, _| {
                others += 1;
                true
            })
            .run(&binary);
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(others, 1);
    }

    #[test]
    fn test_find_member_ancestors() {
        // a.b().c
        let a = ident("a");
        let b = ident("b");
        let c = ident("c");
        let inner = Node::MemberExpression(MemberExpression { object: &a, property: &b, computed: false });
        let call = Node::CallExpression(CallExpression { callee: &inner, arguments: &[] });
        let outer = Node::MemberExpression(MemberExpression { object: &call, property: &c, computed: false });

        let chain = find_member_ancestors(&outer);
        let kinds: Vec<_> = chain.iter().map(|n| n.kind()).collect();
        assert_eq!(kinds, vec![SyntaxKind::CallExpression, SyntaxKind::MemberExpression]);
        assert!(find_member_ancestors(&a).is_empty());
    }
}
