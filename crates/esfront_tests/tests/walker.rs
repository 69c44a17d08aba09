//! Walking parsed trees.

use esfront_ast::{find_member_ancestors, walk, Ancestor, Node, SyntaxKind, Visitor, Walker};
use esfront_core::Arena;
use esfront_parser::parse_program;

#[test]
fn test_walker_collects_identifiers_in_order() {
    let arena = Arena::new();
    let program = parse_program(&arena, "let a = b + c; function f(d) { return e; }").unwrap();

    let mut names = Vec::new();
    Walker::new()
        .on(SyntaxKind::Identifier, |node, _| {
            names.extend(node.identifier_name());
            true
        })
        .run(program);
    assert_eq!(names, vec!["a", "b", "c", "f", "d", "e"]);
}

#[test]
fn test_walker_skips_function_bodies() {
    let arena = Arena::new();
    let program = parse_program(&arena, "a; function f() { b; } c;").unwrap();

    let mut names = Vec::new();
    let mut walker = Walker::new()
        .on(SyntaxKind::FunctionDeclaration, |_, _| false)
        .on(SyntaxKind::Identifier, |node, _| {
            names.extend(node.identifier_name());
            true
        });
    walker.run(program);
    drop(walker);
    assert_eq!(names, vec!["a", "c"]);
}

struct PropertyPaths {
    paths: Vec<String>,
}

impl<'a> Visitor<'a> for PropertyPaths {
    fn enter(&mut self, node: &'a Node<'a>, ancestors: &[Ancestor<'a>]) -> bool {
        if let Some(name) = node.identifier_name() {
            let path: Vec<_> = ancestors.iter().map(|a| a.property).collect();
            self.paths.push(format!("{name}: {}", path.join(".")));
        }
        true
    }
}

#[test]
fn test_ancestor_paths() {
    let arena = Arena::new();
    let program = parse_program(&arena, "x = obj.key").unwrap();
    let mut visitor = PropertyPaths { paths: Vec::new() };
    walk(program, &mut visitor);
    assert_eq!(
        visitor.paths,
        vec![
            "x: body.expression.left",
            "obj: body.expression.right.object",
            "key: body.expression.right.property",
        ]
    );
}

#[test]
fn test_member_ancestors_of_chain() {
    let arena = Arena::new();
    let program = parse_program(&arena, "a.b().c").unwrap();
    let Node::Program(program) = program else { panic!() };
    let Node::ExpressionStatement(statement) = &program.body[0] else { panic!() };
    let kinds: Vec<_> = find_member_ancestors(statement.expression)
        .iter()
        .map(|node| node.kind())
        .collect();
    assert_eq!(kinds, vec![SyntaxKind::CallExpression, SyntaxKind::MemberExpression]);
}
