//! Print-and-reparse tests: every tree the parser builds must survive a trip
//! through the printer unchanged.

use esfront_tests::round_trip;

fn assert_round_trip(source: &str) {
    if let Err(message) = round_trip(source) {
        panic!("round trip failed for {source:?}\n{message}");
    }
}

fn assert_prints(source: &str, expected: &str) {
    match round_trip(source) {
        Ok(printed) => assert_eq!(printed, expected, "source: {source}"),
        Err(message) => panic!("round trip failed for {source:?}\n{message}"),
    }
}

// ============================================================================
// Corpus
// ============================================================================

const STATEMENTS: &[&str] = &[
    "let a = 1, b;",
    "const {c, d: [e, f]} = obj;",
    "var [x, {y}] = arr;",
    "if (a) { b(); } else if (c) d(); else e();",
    "if (a) ; else b();",
    "while (a) b();",
    "do x++; while (x < 5);",
    "switch (x) { case 1: a(); break; case 'b': default: b(); }",
    "outer: for (let i = 0; i < n; i++) { if (i % 2) continue outer; }",
    "label: { break label; }",
    "for (const x of xs) f(x);",
    "for (k in obj) {}",
    "for await (const y of ys) {}",
    "for (;;) break;",
    "for (i = 0, j = 1; ; ) {}",
    "function f() { return; }",
    "let of = 1, get;",
    "if (x) /re/.test(s);",
    "a\n++b",
];

const EXPRESSIONS: &[&str] = &[
    "x = a ? b : c ? d : e;",
    "x = a || b ? c : d;",
    "a.b.c(d)[e]();",
    "a.b().c[0]();",
    "new Foo(a).bar;",
    "new (f())();",
    "new a.b.C();",
    "f(a => a * 2, b);",
    "x = (a, b) => a + b;",
    "x = a => b => a + b;",
    "x = () => {};",
    "x = ({a}, [b], ...c) => a;",
    "x = (a = 1, ...rest) => a;",
    "x = y => ({a: 1});",
    "(a, b);",
    "a = b = c;",
    "a += b * 2;",
    "a = b / c / d;",
    "a++ / 2 / 3;",
    "x = /ab+c/gi.test(s);",
    "-a * b;",
    "!a.b();",
    "typeof a === 'x';",
    "x = typeof typeof a;",
    "x = -(-a);",
    "void 0;",
    "delete a.b;",
    "a++ + ++b;",
    "x = a.b++;",
    "x = (function () { return this; })();",
    "x = async function () {};",
    "(1).toString();",
    "1..toString();",
    "x = 0x1F + 1e3;",
    "x = \"it's\" + 'say \"hi\"';",
    "x = `a${b}c${d + 1}`;",
    "x = [1, a, ...b];",
    "[{a: 1}];",
    "({a = 1} = b);",
    "x = { a, b: 1, [c]: 2, 'd': 3, get e() { return 1; }, f() {}, ...g };",
    "x = { if: 1, class: 2, get: 3, static: 4 };",
    "a.default.for.class;",
    "x = null || undefined;",
    "a in b && c instanceof D;",
];

const DECLARATIONS: &[&str] = &[
    "async function f(a, {b}, ...c) { return a; }",
    "function* g() { yield 1; yield* other(); }",
    "class A extends B {
        static count = 0;
        name;
        constructor(name) { super(); this.name = name; }
        get label() { return this.name; }
        set label(value) { this.name = value; }
        static async *items() {}
        [key]() {}
        static() {}
    }",
    "x = class {};",
    "x = (class {}).name;",
    "(class A {}).name;",
];

const MODULES: &[&str] = &[
    "import a, { b as c, d } from 'm';",
    "import * as ns from 'n';",
    "import a, * as ns from 'n';",
    "import 'side-effect';",
    "export { a, b as c } from 'm';",
    "export { a };",
    "export const x = 1;",
    "export function f() {}",
    "export default a + b;",
    "export default (a, b);",
    "export default function () {}",
    "export default class {}",
];

#[test]
fn test_statements_round_trip() {
    STATEMENTS.iter().for_each(|source| assert_round_trip(source));
}

#[test]
fn test_expressions_round_trip() {
    EXPRESSIONS.iter().for_each(|source| assert_round_trip(source));
}

#[test]
fn test_declarations_round_trip() {
    DECLARATIONS.iter().for_each(|source| assert_round_trip(source));
}

#[test]
fn test_modules_round_trip() {
    MODULES.iter().for_each(|source| assert_round_trip(source));
}

#[test_log::test]
fn test_whole_module_round_trip() {
    let source = [STATEMENTS, EXPRESSIONS, DECLARATIONS, MODULES].concat().join("\n");
    assert_round_trip(&source);
}

// ============================================================================
// Printed form
// ============================================================================

#[test]
fn test_printed_form() {
    assert_prints("a + b * c", "(a + (b * c));\n");
    assert_prints("x = a ? b : c ? d : e", "x = a ? b : (c ? d : e);\n");
    assert_prints("f(a => a * 2)", "f((a) => (a * 2));\n");
    assert_prints("x = {a: a, 'b': b}", "x = { a, \"b\": b };\n");
    assert_prints("import { a as a } from 'm'", "import { a } from \"m\";\n");
}

#[test]
fn test_printed_block_layout() {
    assert_prints(
        "function f(a) { if (a) { return 1 } return 2 }",
        "function f(a) {\n    if (a) {\n        return 1;\n    }\n    return 2;\n}\n",
    );
    assert_prints(
        "switch (x) { case 1: a(); default: b() }",
        "switch (x) {\n    case 1:\n        a();\n    default:\n        b();\n}\n",
    );
    assert_prints("class A { x = 1; m() {} }", "class A {\n    x = 1;\n    m() {}\n}\n");
}
