//! esfront_printer: syntax tree to source text.
//!
//! Prints any node produced by `esfront_parser` back to JavaScript. The
//! output is normalized rather than faithful: binary operators are always
//! parenthesized, strings use the preferred quote, and every statement ends
//! up on its own line. Re-parsing the output yields a tree equal to the input.

use esfront_ast::node::*;
use serde::Deserialize;
use tracing::debug;

/// Preferred string delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quote {
    Single,
    #[default]
    Double,
}

impl Quote {
    fn as_char(self) -> char {
        match self {
            Quote::Single => '\'',
            Quote::Double => '"',
        }
    }

    fn other(self) -> Self {
        match self {
            Quote::Single => Quote::Double,
            Quote::Double => Quote::Single,
        }
    }
}

/// Options for the printer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PrinterOptions {
    /// Indentation string.
    pub indent: String,
    /// Newline string.
    pub new_line: String,
    /// Whether to emit a trailing newline after a program.
    pub trailing_newline: bool,
    pub quote: Quote,
}

impl Default for PrinterOptions {
    fn default() -> Self {
        Self {
            indent: "    ".to_string(),
            new_line: "\n".to_string(),
            trailing_newline: true,
            quote: Quote::Double,
        }
    }
}

impl PrinterOptions {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

/// How tightly the surrounding syntax binds an expression. Each slot wraps
/// everything the slots before it wrap, and more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Slot {
    /// Expression statements and `for` clauses.
    Any,
    /// Lists: arguments, elements, declarators, property values.
    NoSequence,
    /// Operands of binary and conditional operators.
    Operand,
    /// Argument of a prefix operator.
    Unary,
    /// Object of a member access, callee of a call.
    Callee,
    /// Callee of `new`, which must not contain a call.
    NewCallee,
}

/// Convert a tree to text with default options.
pub fn generate(node: &Node<'_>) -> String {
    Printer::new().print(node)
}

/// The printer converts tree nodes to text.
pub struct Printer {
    output: String,
    indent_level: u32,
    options: PrinterOptions,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    pub fn new() -> Self {
        Self::with_options(PrinterOptions::default())
    }

    pub fn with_options(options: PrinterOptions) -> Self {
        Self {
            output: String::with_capacity(4096),
            indent_level: 0,
            options,
        }
    }

    /// Print `node` and return the text. Any node kind is accepted; only a
    /// `Program` gets the trailing newline.
    pub fn print(&mut self, node: &Node<'_>) -> String {
        self.output.clear();
        self.indent_level = 0;
        self.print_node(node);
        if self.options.trailing_newline && matches!(node, Node::Program(_)) && !self.output.is_empty() {
            self.write_newline();
        }
        debug!(kind = node.kind().as_str(), bytes = self.output.len(), "printed tree");
        std::mem::take(&mut self.output)
    }

    fn print_node(&mut self, node: &Node<'_>) {
        match node {
            Node::Program(program) => {
                for (i, statement) in program.body.iter().enumerate() {
                    if i > 0 {
                        self.write_newline();
                    }
                    self.write_indent();
                    self.print_statement(statement);
                }
            }
            Node::SwitchCase(case) => self.print_switch_case(case),
            Node::VariableDeclarator(declarator) => self.print_declarator(declarator),
            Node::ClassBody(body) => self.print_class_body(body),
            Node::MethodDefinition(_) | Node::PropertyDefinition(_) => self.print_class_member(node),
            Node::ImportDefaultSpecifier(_)
            | Node::ImportNamespaceSpecifier(_)
            | Node::ImportSpecifier(_)
            | Node::ExportSpecifier(_) => self.print_specifier(node),
            _ if node.is_statement() => self.print_statement(node),
            _ => self.print_expression(node, Slot::Any),
        }
    }

    // ========================================================================
    // Statements
    // ========================================================================

    fn print_statement(&mut self, node: &Node<'_>) {
        match node {
            Node::EmptyStatement => self.write(";"),
            Node::ExpressionStatement(statement) => {
                self.print_statement_expression(statement.expression, Slot::Any);
                self.write(";");
            }
            Node::BlockStatement(block) => self.print_block(block.body),
            Node::ReturnStatement(ret) => {
                self.write("return");
                if let Some(argument) = ret.argument {
                    self.write(" ");
                    self.print_expression(argument, Slot::NoSequence);
                }
                self.write(";");
            }
            Node::IfStatement(n) => {
                self.write("if (");
                self.print_expression(n.test, Slot::Any);
                self.write(") ");
                self.print_statement(n.consequent);
                if let Some(alternate) = n.alternate {
                    self.write(" else ");
                    self.print_statement(alternate);
                }
            }
            Node::SwitchStatement(n) => {
                self.write("switch (");
                self.print_expression(n.discriminant, Slot::Any);
                self.write(") {");
                self.increase_indent();
                for case in n.cases.iter() {
                    self.write_newline();
                    self.write_indent();
                    self.print_node(case);
                }
                self.decrease_indent();
                self.write_newline();
                self.write_indent();
                self.write("}");
            }
            Node::ForStatement(n) => {
                self.write("for (");
                if let Some(init) = n.init {
                    self.print_for_head(init);
                }
                self.write(";");
                if let Some(test) = n.test {
                    self.write(" ");
                    self.print_expression(test, Slot::Any);
                }
                self.write(";");
                if let Some(update) = n.update {
                    self.write(" ");
                    self.print_expression(update, Slot::Any);
                }
                self.write(") ");
                self.print_statement(n.body);
            }
            Node::ForInStatement(n) => self.print_for_each(n, "in"),
            Node::ForOfStatement(n) => self.print_for_each(n, "of"),
            Node::DoWhileStatement(n) => {
                self.write("do ");
                self.print_statement(n.body);
                self.write(" while (");
                self.print_expression(n.test, Slot::Any);
                self.write(");");
            }
            Node::WhileStatement(n) => {
                self.write("while (");
                self.print_expression(n.test, Slot::Any);
                self.write(") ");
                self.print_statement(n.body);
            }
            Node::ContinueStatement(n) => self.print_jump("continue", n),
            Node::BreakStatement(n) => self.print_jump("break", n),
            Node::LabeledStatement(n) => {
                self.print_expression(n.label, Slot::Any);
                self.write(": ");
                self.print_statement(n.body);
            }
            Node::VariableDeclaration(n) => {
                self.print_variable_declaration(n);
                self.write(";");
            }
            Node::FunctionDeclaration(function) => self.print_function(function),
            Node::ClassDeclaration(class) => self.print_class(class),
            Node::ImportDeclaration(n) => self.print_import(n),
            Node::ExportStatement(n) => {
                self.write("export ");
                self.print_statement(n.declaration);
            }
            Node::ExportDefaultStatement(n) => {
                self.write("export default ");
                if n.declaration.is_statement() {
                    self.print_statement(n.declaration);
                } else {
                    self.print_statement_expression(n.declaration, Slot::NoSequence);
                    self.write(";");
                }
            }
            Node::ExportNamedDeclaration(n) => {
                self.write("export ");
                self.print_braced_specifiers(n.specifiers);
                if let Some(source) = n.source {
                    self.write(" from ");
                    self.print_expression(source, Slot::Any);
                }
                self.write(";");
            }
            _ => {
                self.print_statement_expression(node, Slot::Any);
                self.write(";");
            }
        }
    }

    /// An expression in statement position. Expressions whose first token
    /// would start a block or a declaration are parenthesized.
    fn print_statement_expression(&mut self, expression: &Node<'_>, slot: Slot) {
        if starts_ambiguously(expression) {
            self.write("(");
            self.print_expression(expression, Slot::Any);
            self.write(")");
        } else {
            self.print_expression(expression, slot);
        }
    }

    fn print_block(&mut self, body: &[Node<'_>]) {
        self.write("{");
        if !body.is_empty() {
            self.increase_indent();
            for statement in body.iter() {
                self.write_newline();
                self.write_indent();
                self.print_statement(statement);
            }
            self.decrease_indent();
            self.write_newline();
            self.write_indent();
        }
        self.write("}");
    }

    fn print_switch_case(&mut self, case: &SwitchCase<'_>) {
        match case.test {
            Some(test) => {
                self.write("case ");
                self.print_expression(test, Slot::NoSequence);
                self.write(":");
            }
            None => self.write("default:"),
        }
        self.increase_indent();
        for statement in case.consequent.iter() {
            self.write_newline();
            self.write_indent();
            self.print_statement(statement);
        }
        self.decrease_indent();
    }

    /// The `init` clause of a classic `for`, or the left side of `for-in/of`.
    fn print_for_head(&mut self, node: &Node<'_>) {
        match node {
            Node::VariableDeclaration(declaration) => self.print_variable_declaration(declaration),
            _ => self.print_expression(node, Slot::Any),
        }
    }

    fn print_for_each(&mut self, node: &ForEachStatement<'_>, keyword: &str) {
        self.write("for ");
        if node.is_await {
            self.write("await ");
        }
        self.write("(");
        self.print_for_head(node.left);
        self.write(" ");
        self.write(keyword);
        self.write(" ");
        self.print_expression(node.right, Slot::NoSequence);
        self.write(") ");
        self.print_statement(node.body);
    }

    fn print_jump(&mut self, keyword: &str, node: &JumpStatement<'_>) {
        self.write(keyword);
        if let Some(label) = node.label {
            self.write(" ");
            self.print_expression(label, Slot::Any);
        }
        self.write(";");
    }

    fn print_variable_declaration(&mut self, node: &VariableDeclaration<'_>) {
        self.write(node.kind.as_str());
        self.write(" ");
        for (i, declarator) in node.declarations.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.print_node(declarator);
        }
    }

    fn print_declarator(&mut self, node: &VariableDeclarator<'_>) {
        self.print_expression(node.id, Slot::Any);
        if let Some(init) = node.init {
            self.write(" = ");
            self.print_expression(init, Slot::NoSequence);
        }
    }

    // ========================================================================
    // Functions and classes
    // ========================================================================

    fn print_function(&mut self, function: &Function<'_>) {
        if function.is_async {
            self.write("async ");
        }
        self.write("function");
        if function.generator {
            self.write("*");
        }
        if let Some(id) = function.id {
            self.write(" ");
            self.print_expression(id, Slot::Any);
        }
        self.print_function_rest(function);
    }

    /// Parameter list and body.
    fn print_function_rest(&mut self, function: &Function<'_>) {
        self.write("(");
        self.print_list(function.params, Slot::NoSequence);
        self.write(") ");
        match function.body {
            Some(body) => self.print_statement(body),
            None => self.write("{}"),
        }
    }

    /// A method-style member: `async *get key(params) { ... }`, with the
    /// modifiers that apply.
    fn print_method(&mut self, accessor: &str, key: &Node<'_>, computed: bool, value: &Node<'_>) {
        let Node::FunctionExpression(function) = value else {
            self.write(accessor);
            self.print_key(key, computed);
            self.write(": ");
            self.print_expression(value, Slot::NoSequence);
            return;
        };
        if function.is_async {
            self.write("async ");
        }
        if function.generator {
            self.write("*");
        }
        self.write(accessor);
        self.print_key(key, computed);
        self.print_function_rest(function);
    }

    fn print_key(&mut self, key: &Node<'_>, computed: bool) {
        if computed {
            self.write("[");
            self.print_expression(key, Slot::NoSequence);
            self.write("]");
        } else {
            self.print_expression(key, Slot::Any);
        }
    }

    fn print_class(&mut self, class: &ClassDeclaration<'_>) {
        self.write("class");
        if let Some(id) = class.id {
            self.write(" ");
            self.print_expression(id, Slot::Any);
        }
        if let Some(super_class) = class.super_class {
            self.write(" extends ");
            self.print_expression(super_class, Slot::Callee);
        }
        self.write(" ");
        self.print_node(class.body);
    }

    fn print_class_body(&mut self, body: &ClassBody<'_>) {
        if body.body.is_empty() {
            self.write("{}");
            return;
        }
        self.write("{");
        self.increase_indent();
        for member in body.body.iter() {
            self.write_newline();
            self.write_indent();
            self.print_node(member);
        }
        self.decrease_indent();
        self.write_newline();
        self.write_indent();
        self.write("}");
    }

    fn print_class_member(&mut self, node: &Node<'_>) {
        match node {
            Node::MethodDefinition(method) => {
                if method.is_static {
                    self.write("static ");
                }
                let accessor = match method.kind {
                    MethodKind::Method => "",
                    MethodKind::Get => "get ",
                    MethodKind::Set => "set ",
                };
                self.print_method(accessor, method.key, method.computed, method.value);
            }
            Node::PropertyDefinition(field) => {
                if field.is_static {
                    self.write("static ");
                }
                self.print_key(field.key, field.computed);
                if let Some(value) = field.value {
                    self.write(" = ");
                    self.print_expression(value, Slot::NoSequence);
                }
                self.write(";");
            }
            _ => self.print_node(node),
        }
    }

    // ========================================================================
    // Modules
    // ========================================================================

    fn print_import(&mut self, node: &ImportDeclaration<'_>) {
        self.write("import ");
        if node.specifiers.is_empty() {
            self.print_expression(node.source, Slot::Any);
            self.write(";");
            return;
        }
        let named: Vec<_> = node
            .specifiers
            .iter()
            .filter(|s| matches!(s, Node::ImportSpecifier(_)))
            .cloned()
            .collect();
        let mut first = true;
        for specifier in node.specifiers.iter() {
            if matches!(specifier, Node::ImportSpecifier(_)) {
                continue;
            }
            if !first {
                self.write(", ");
            }
            first = false;
            self.print_specifier(specifier);
        }
        if !named.is_empty() {
            if !first {
                self.write(", ");
            }
            self.print_braced_specifiers(&named);
        }
        self.write(" from ");
        self.print_expression(node.source, Slot::Any);
        self.write(";");
    }

    fn print_braced_specifiers(&mut self, specifiers: &[Node<'_>]) {
        if specifiers.is_empty() {
            self.write("{}");
            return;
        }
        self.write("{ ");
        for (i, specifier) in specifiers.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.print_specifier(specifier);
        }
        self.write(" }");
    }

    fn print_specifier(&mut self, node: &Node<'_>) {
        match node {
            Node::ImportDefaultSpecifier(n) => self.print_expression(n.local, Slot::Any),
            Node::ImportNamespaceSpecifier(n) => {
                self.write("* as ");
                self.print_expression(n.local, Slot::Any);
            }
            Node::ImportSpecifier(n) => self.print_renamed(n.imported, n.local),
            Node::ExportSpecifier(n) => self.print_renamed(n.local, n.exported),
            _ => self.print_node(node),
        }
    }

    /// `name` or `name as alias`.
    fn print_renamed(&mut self, name: &Node<'_>, alias: &Node<'_>) {
        self.print_expression(name, Slot::Any);
        if name != alias {
            self.write(" as ");
            self.print_expression(alias, Slot::Any);
        }
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    fn print_expression(&mut self, node: &Node<'_>, slot: Slot) {
        if needs_parens(node, slot) {
            self.write("(");
            self.print_expression_inner(node);
            self.write(")");
        } else {
            self.print_expression_inner(node);
        }
    }

    fn print_expression_inner(&mut self, node: &Node<'_>) {
        match node {
            Node::Identifier(ident) => self.write(ident.name),
            Node::Literal(literal) => self.print_literal(literal),
            Node::ThisExpression => self.write("this"),
            Node::TemplateLiteral(template) => {
                self.write("`");
                for (i, quasi) in template.quasis.iter().enumerate() {
                    self.print_expression_inner(quasi);
                    if let Some(expression) = template.expressions.get(i) {
                        self.write("${");
                        self.print_expression(expression, Slot::NoSequence);
                        self.write("}");
                    }
                }
                self.write("`");
            }
            Node::TemplateElement(element) => self.write(element.value),
            Node::SpreadElement(spread) => {
                self.write("...");
                self.print_expression(spread.argument, Slot::Operand);
            }
            Node::ArrayPattern(array) => {
                self.write("[");
                self.print_list(array.elements, Slot::NoSequence);
                self.write("]");
            }
            Node::ObjectExpression(object) | Node::ObjectPattern(object) => {
                if object.properties.is_empty() {
                    self.write("{}");
                    return;
                }
                self.write("{ ");
                self.print_list(object.properties, Slot::NoSequence);
                self.write(" }");
            }
            Node::Property(property) => self.print_property(property),
            Node::FunctionExpression(function) | Node::FunctionDeclaration(function) => {
                self.print_function(function)
            }
            Node::ClassDeclaration(class) => self.print_class(class),
            Node::ArrowFunctionExpression(arrow) => {
                self.write("(");
                self.print_list(arrow.params, Slot::NoSequence);
                self.write(") => ");
                match arrow.body {
                    Node::BlockStatement(block) => self.print_block(block.body),
                    body if starts_ambiguously(body)
                        || matches!(body, Node::SequenceExpression(_) | Node::AssignmentExpression(_)) =>
                    {
                        self.write("(");
                        self.print_expression(body, Slot::Any);
                        self.write(")");
                    }
                    body => self.print_expression(body, Slot::NoSequence),
                }
            }
            Node::YieldExpression(y) => {
                self.write(if y.delegate { "yield*" } else { "yield" });
                if let Some(argument) = y.argument {
                    self.write(" ");
                    self.print_expression(argument, Slot::NoSequence);
                }
            }
            Node::UnaryExpression(unary) => {
                self.write(unary.operator);
                if unary.operator.starts_with(|c: char| c.is_ascii_alphabetic()) {
                    self.write(" ");
                }
                self.print_expression(unary.argument, Slot::Unary);
            }
            Node::UpdateExpression(update) => {
                if update.prefix {
                    self.write(update.operator);
                    self.print_expression(update.argument, Slot::Callee);
                } else {
                    self.print_expression(update.argument, Slot::Callee);
                    self.write(update.operator);
                }
            }
            Node::BinaryExpression(binary) | Node::LogicalExpression(binary) => {
                self.write("(");
                self.print_expression(binary.left, Slot::Operand);
                self.write(" ");
                self.write(binary.operator);
                self.write(" ");
                self.print_expression(binary.right, Slot::Operand);
                self.write(")");
            }
            Node::AssignmentExpression(assign) => {
                self.print_expression(assign.left, Slot::Operand);
                self.write(" ");
                self.write(assign.operator);
                self.write(" ");
                self.print_expression(assign.right, Slot::NoSequence);
            }
            Node::ConditionalExpression(cond) => {
                self.print_expression(cond.test, Slot::Operand);
                self.write(" ? ");
                self.print_expression(cond.consequent, Slot::Operand);
                self.write(" : ");
                match cond.alternate {
                    Some(alternate) => self.print_expression(alternate, Slot::Operand),
                    None => self.write("undefined"),
                }
            }
            Node::MemberExpression(member) => {
                self.print_expression(member.object, Slot::Callee);
                if member.computed {
                    self.write("[");
                    self.print_expression(member.property, Slot::NoSequence);
                    self.write("]");
                } else {
                    self.write(".");
                    self.print_expression(member.property, Slot::Any);
                }
            }
            Node::CallExpression(call) => {
                self.print_expression(call.callee, Slot::Callee);
                self.write("(");
                self.print_list(call.arguments, Slot::NoSequence);
                self.write(")");
            }
            Node::NewExpression(call) => {
                self.write("new ");
                self.print_expression(call.callee, Slot::NewCallee);
                self.write("(");
                self.print_list(call.arguments, Slot::NoSequence);
                self.write(")");
            }
            Node::SequenceExpression(sequence) => self.print_list(sequence.expressions, Slot::NoSequence),
            _ => self.print_node(node),
        }
    }

    fn print_property(&mut self, property: &Property<'_>) {
        match property.kind {
            PropertyKind::Get => return self.print_method("get ", property.key, property.computed, property.value),
            PropertyKind::Set => return self.print_method("set ", property.key, property.computed, property.value),
            PropertyKind::Init if property.method => {
                return self.print_method("", property.key, property.computed, property.value)
            }
            PropertyKind::Init => {}
        }
        if let Some(name) = property.key.identifier_name().filter(|_| !property.computed) {
            match property.value {
                Node::Identifier(value) if value.name == name => return self.write(name),
                Node::AssignmentExpression(assign)
                    if assign.operator == "=" && assign.left.identifier_name() == Some(name) =>
                {
                    self.write(name);
                    self.write(" = ");
                    return self.print_expression(assign.right, Slot::NoSequence);
                }
                _ => {}
            }
        }
        self.print_key(property.key, property.computed);
        self.write(": ");
        self.print_expression(property.value, Slot::NoSequence);
    }

    fn print_literal(&mut self, literal: &Literal<'_>) {
        match literal.value {
            LiteralValue::String(value) => {
                let mut quote = self.options.quote;
                if contains_unescaped(value, quote.as_char()) {
                    quote = quote.other();
                }
                let quote = quote.as_char();
                self.output.push(quote);
                self.output.push_str(value);
                self.output.push(quote);
            }
            LiteralValue::Number(number) if literal.raw.is_empty() => self.write_owned(number.to_string()),
            LiteralValue::Number(_) => self.write(literal.raw),
            LiteralValue::Boolean(value) => self.write(if value { "true" } else { "false" }),
            LiteralValue::Null => self.write("null"),
            LiteralValue::RegExp(raw) => self.write(raw),
        }
    }

    fn print_list(&mut self, nodes: &[Node<'_>], slot: Slot) {
        for (i, node) in nodes.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.print_expression(node, slot);
        }
    }

    // ========================================================================
    // Core write helpers
    // ========================================================================

    fn write(&mut self, s: &str) {
        self.output.push_str(s);
    }

    fn write_owned(&mut self, s: String) {
        self.output.push_str(&s);
    }

    fn write_newline(&mut self) {
        self.output.push_str(&self.options.new_line);
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.output.push_str(&self.options.indent);
        }
    }

    fn increase_indent(&mut self) {
        self.indent_level += 1;
    }

    fn decrease_indent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }
}

fn needs_parens(node: &Node<'_>, slot: Slot) -> bool {
    match node {
        Node::SequenceExpression(_) => slot > Slot::Any,
        Node::AssignmentExpression(_)
        | Node::ConditionalExpression(_)
        | Node::ArrowFunctionExpression(_)
        | Node::YieldExpression(_) => slot >= Slot::Operand,
        Node::UnaryExpression(_) | Node::UpdateExpression(_) => slot >= Slot::Unary,
        Node::FunctionExpression(_) | Node::ClassDeclaration(_) => slot >= Slot::Callee,
        // `1.x` would lex as a number.
        Node::Literal(Literal {
            value: LiteralValue::Number(_),
            ..
        }) => slot >= Slot::Callee,
        Node::CallExpression(_) | Node::MemberExpression(_) => slot == Slot::NewCallee && !is_plain_reference(node),
        _ => false,
    }
}

/// `a`, `this`, `a.b[c]`: a chain with no calls in it.
fn is_plain_reference(node: &Node<'_>) -> bool {
    match node {
        Node::Identifier(_) | Node::ThisExpression => true,
        Node::MemberExpression(member) => is_plain_reference(member.object),
        _ => false,
    }
}

/// Whether the printed expression would begin with `{`, `function` or
/// `class`, which open a block or a declaration at statement start.
fn starts_ambiguously(node: &Node<'_>) -> bool {
    match node {
        Node::ObjectExpression(_)
        | Node::ObjectPattern(_)
        | Node::FunctionExpression(_)
        | Node::FunctionDeclaration(_)
        | Node::ClassDeclaration(_) => true,
        Node::AssignmentExpression(assign) => leftmost(assign.left, Slot::Operand),
        Node::MemberExpression(member) => leftmost(member.object, Slot::Callee),
        Node::CallExpression(call) => leftmost(call.callee, Slot::Callee),
        Node::ConditionalExpression(cond) => leftmost(cond.test, Slot::Operand),
        Node::SequenceExpression(sequence) => sequence
            .expressions
            .first()
            .is_some_and(|first| leftmost(first, Slot::NoSequence)),
        Node::UpdateExpression(update) if !update.prefix => leftmost(update.argument, Slot::Callee),
        _ => false,
    }
}

/// The leftmost token of `child` is also the leftmost token of its parent
/// unless `child` is parenthesized in `slot`.
fn leftmost(child: &Node<'_>, slot: Slot) -> bool {
    !needs_parens(child, slot) && starts_ambiguously(child)
}

/// Whether `value` holds `quote` without a preceding backslash.
fn contains_unescaped(value: &str, quote: char) -> bool {
    let mut escaped = false;
    for ch in value.chars() {
        if escaped {
            escaped = false;
        } else if ch == '\\' {
            escaped = true;
        } else if ch == quote {
            return true;
        }
    }
    false
}
