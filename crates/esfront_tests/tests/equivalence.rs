//! Surface forms that differ only in optional syntax parse to one tree.

use esfront_tests::{estree, same_tree};

fn assert_same(left: &str, right: &str) {
    match same_tree(left, right) {
        Ok(same) => assert!(same, "expected {left:?} and {right:?} to parse alike"),
        Err(error) => panic!("failed to parse {left:?} or {right:?}: {error}"),
    }
}

fn assert_different(left: &str, right: &str) {
    match same_tree(left, right) {
        Ok(same) => assert!(!same, "expected {left:?} and {right:?} to differ"),
        Err(error) => panic!("failed to parse {left:?} or {right:?}: {error}"),
    }
}

#[test]
fn test_object_shorthand() {
    assert_same("x = {a}", "x = {a: a}");
    assert_same("({a = 1} = b)", "({a: a = 1} = b)");
}

#[test]
fn test_module_aliases() {
    assert_same("import {a} from 'm'", "import {a as a} from 'm'");
    assert_same("export {a}", "export {a as a}");
    assert_different("import {a as b} from 'm'", "import {a} from 'm'");
}

#[test]
fn test_literal_spelling() {
    assert_same("x = 'a'", "x = \"a\"");
    assert_same("x = 0x10", "x = 16");
    assert_same("x = 1e3", "x = 1000");
}

#[test]
fn test_redundant_parentheses() {
    assert_same("a + b", "(a + b)");
    assert_same("a + b * c", "a + (b * c)");
    assert_same("a ? b : c ? d : e", "a ? b : (c ? d : e)");
    assert_same("x = (y)", "x = y");
    assert_different("a - b - c", "a - (b - c)");
    assert_different("(a + b) * c", "a + b * c");
}

#[test]
fn test_statement_terminators() {
    assert_same("a; b", "a\nb");
    assert_same("let x = 1", "let x = 1;");
    assert_same("function f() { return 1 }", "function f() { return 1; }");
}

#[test]
fn test_initializer_is_not_optional() {
    assert_different("let x", "let x = undefined");
}

#[test]
fn test_left_deep_member_call_chain() {
    // a.b().c[0]() : Call(Member(Member(Call(Member(a, b)), c), 0))
    let json = estree("a.b().c[0]()").unwrap();
    let outer = &json["body"][0]["expression"];
    assert_eq!(outer["type"], "CallExpression");
    let computed = &outer["callee"];
    assert_eq!(computed["type"], "MemberExpression");
    assert_eq!(computed["computed"], true);
    let member = &computed["object"];
    assert_eq!(member["type"], "MemberExpression");
    assert_eq!(member["property"]["name"], "c");
    let call = &member["object"];
    assert_eq!(call["type"], "CallExpression");
    assert_eq!(call["callee"]["object"]["name"], "a");
}

#[test]
fn test_estree_field_names() {
    let json = estree("class A extends B { static x = 1 }").unwrap();
    let class = &json["body"][0];
    assert_eq!(class["type"], "ClassDeclaration");
    assert_eq!(class["superClass"]["name"], "B");
    assert_eq!(class["body"]["type"], "ClassBody");
    assert_eq!(class["body"]["body"][0]["static"], true);

    let json = estree("x = /ab/g").unwrap();
    let regex = &json["body"][0]["expression"]["right"];
    assert_eq!(regex["raw"], "/ab/g");
}
