use esfront_ast::*;
use serde_json::json;

#[test]
fn test_identifier_json() {
    let node = Node::Identifier(Identifier { name: "foo" });
    assert_eq!(to_estree_json(&node), json!({"type": "Identifier", "name": "foo"}));
}

#[test]
fn test_field_renames() {
    let body = Node::BlockStatement(BlockStatement { body: &[] });
    let func = Node::FunctionExpression(Function {
        is_async: true,
        generator: false,
        id: None,
        params: &[],
        body: Some(&body),
    });
    let value = to_estree_json(&func);
    assert_eq!(value["type"], "FunctionExpression");
    assert_eq!(value["async"], true);
    assert_eq!(value["id"], serde_json::Value::Null);
    assert_eq!(value["body"]["type"], "BlockStatement");

    let name = Node::Identifier(Identifier { name: "B" });
    let class_body = Node::ClassBody(ClassBody { body: &[] });
    let class = Node::ClassDeclaration(ClassDeclaration { id: None, super_class: Some(&name), body: &class_body });
    assert_eq!(to_estree_json(&class)["superClass"]["name"], "B");
}

#[test]
fn test_literal_values() {
    let string = Node::Literal(Literal { value: LiteralValue::String("hi"), raw: "'hi'" });
    assert_eq!(to_estree_json(&string), json!({"type": "Literal", "value": "hi", "raw": "'hi'"}));

    let null = Node::Literal(Literal { value: LiteralValue::Null, raw: "null" });
    assert_eq!(to_estree_json(&null)["value"], serde_json::Value::Null);

    let regex = Node::Literal(Literal { value: LiteralValue::RegExp("/ab+c/gi"), raw: "/ab+c/gi" });
    assert_eq!(to_estree_json(&regex)["value"], json!({"pattern": "ab+c", "flags": "gi"}));
}

#[test]
fn test_unit_variants_and_enums() {
    assert_eq!(to_estree_json(&Node::ThisExpression), json!({"type": "ThisExpression"}));

    let id = Node::Identifier(Identifier { name: "x" });
    let declarators = [Node::VariableDeclarator(VariableDeclarator { id: &id, init: None })];
    let decl = Node::VariableDeclaration(VariableDeclaration { kind: VariableKind::Const, declarations: &declarators });
    let value = to_estree_json(&decl);
    assert_eq!(value["kind"], "const");
    assert_eq!(value["declarations"][0]["type"], "VariableDeclarator");
}
