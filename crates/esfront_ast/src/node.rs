//! Tree node definitions.
//!
//! Every node is a variant of [`Node`], tagged by its ESTree `type`. Children
//! are arena references and lists are arena slices, so a whole tree lives as
//! long as the arena that built it. Identifier names and literal text borrow
//! the source string.

use crate::syntax_kind::SyntaxKind;
use serde::Serialize;

/// A list of nodes, allocated in the arena.
pub type NodeList<'a> = &'a [Node<'a>];

/// An optional arena-allocated node.
pub type OptionalNode<'a> = Option<&'a Node<'a>>;

// ============================================================================
// Node
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Node<'a> {
    // -- Program and statements --
    Program(Program<'a>),
    EmptyStatement,
    ExpressionStatement(ExpressionStatement<'a>),
    BlockStatement(BlockStatement<'a>),
    ReturnStatement(ReturnStatement<'a>),
    IfStatement(IfStatement<'a>),
    SwitchStatement(SwitchStatement<'a>),
    SwitchCase(SwitchCase<'a>),
    ForStatement(ForStatement<'a>),
    ForInStatement(ForEachStatement<'a>),
    ForOfStatement(ForEachStatement<'a>),
    DoWhileStatement(DoWhileStatement<'a>),
    WhileStatement(WhileStatement<'a>),
    ContinueStatement(JumpStatement<'a>),
    BreakStatement(JumpStatement<'a>),
    LabeledStatement(LabeledStatement<'a>),

    // -- Declarations --
    VariableDeclaration(VariableDeclaration<'a>),
    VariableDeclarator(VariableDeclarator<'a>),
    FunctionDeclaration(Function<'a>),
    ClassDeclaration(ClassDeclaration<'a>),
    ClassBody(ClassBody<'a>),
    PropertyDefinition(PropertyDefinition<'a>),
    MethodDefinition(MethodDefinition<'a>),

    // -- Modules --
    ImportDeclaration(ImportDeclaration<'a>),
    ImportDefaultSpecifier(ImportLocalSpecifier<'a>),
    ImportNamespaceSpecifier(ImportLocalSpecifier<'a>),
    ImportSpecifier(ImportSpecifier<'a>),
    ExportStatement(ExportStatement<'a>),
    ExportDefaultStatement(ExportStatement<'a>),
    ExportNamedDeclaration(ExportNamedDeclaration<'a>),
    ExportSpecifier(ExportSpecifier<'a>),

    // -- Expressions --
    Identifier(Identifier<'a>),
    Literal(Literal<'a>),
    TemplateLiteral(TemplateLiteral<'a>),
    TemplateElement(TemplateElement<'a>),
    SpreadElement(SpreadElement<'a>),
    ThisExpression,
    ArrayPattern(ArrayPattern<'a>),
    ObjectExpression(ObjectLiteral<'a>),
    ObjectPattern(ObjectLiteral<'a>),
    Property(Property<'a>),
    FunctionExpression(Function<'a>),
    ArrowFunctionExpression(ArrowFunctionExpression<'a>),
    YieldExpression(YieldExpression<'a>),
    UnaryExpression(UnaryExpression<'a>),
    UpdateExpression(UnaryExpression<'a>),
    BinaryExpression(BinaryExpression<'a>),
    LogicalExpression(BinaryExpression<'a>),
    AssignmentExpression(AssignmentExpression<'a>),
    ConditionalExpression(ConditionalExpression<'a>),
    MemberExpression(MemberExpression<'a>),
    CallExpression(CallExpression<'a>),
    NewExpression(CallExpression<'a>),
    SequenceExpression(SequenceExpression<'a>),
}

impl<'a> Node<'a> {
    pub fn kind(&self) -> SyntaxKind {
        match self {
            Node::Program(_) => SyntaxKind::Program,
            Node::EmptyStatement => SyntaxKind::EmptyStatement,
            Node::ExpressionStatement(_) => SyntaxKind::ExpressionStatement,
            Node::BlockStatement(_) => SyntaxKind::BlockStatement,
            Node::ReturnStatement(_) => SyntaxKind::ReturnStatement,
            Node::IfStatement(_) => SyntaxKind::IfStatement,
            Node::SwitchStatement(_) => SyntaxKind::SwitchStatement,
            Node::SwitchCase(_) => SyntaxKind::SwitchCase,
            Node::ForStatement(_) => SyntaxKind::ForStatement,
            Node::ForInStatement(_) => SyntaxKind::ForInStatement,
            Node::ForOfStatement(_) => SyntaxKind::ForOfStatement,
            Node::DoWhileStatement(_) => SyntaxKind::DoWhileStatement,
            Node::WhileStatement(_) => SyntaxKind::WhileStatement,
            Node::ContinueStatement(_) => SyntaxKind::ContinueStatement,
            Node::BreakStatement(_) => SyntaxKind::BreakStatement,
            Node::LabeledStatement(_) => SyntaxKind::LabeledStatement,
            Node::VariableDeclaration(_) => SyntaxKind::VariableDeclaration,
            Node::VariableDeclarator(_) => SyntaxKind::VariableDeclarator,
            Node::FunctionDeclaration(_) => SyntaxKind::FunctionDeclaration,
            Node::ClassDeclaration(_) => SyntaxKind::ClassDeclaration,
            Node::ClassBody(_) => SyntaxKind::ClassBody,
            Node::PropertyDefinition(_) => SyntaxKind::PropertyDefinition,
            Node::MethodDefinition(_) => SyntaxKind::MethodDefinition,
            Node::ImportDeclaration(_) => SyntaxKind::ImportDeclaration,
            Node::ImportDefaultSpecifier(_) => SyntaxKind::ImportDefaultSpecifier,
            Node::ImportNamespaceSpecifier(_) => SyntaxKind::ImportNamespaceSpecifier,
            Node::ImportSpecifier(_) => SyntaxKind::ImportSpecifier,
            Node::ExportStatement(_) => SyntaxKind::ExportStatement,
            Node::ExportDefaultStatement(_) => SyntaxKind::ExportDefaultStatement,
            Node::ExportNamedDeclaration(_) => SyntaxKind::ExportNamedDeclaration,
            Node::ExportSpecifier(_) => SyntaxKind::ExportSpecifier,
            Node::Identifier(_) => SyntaxKind::Identifier,
            Node::Literal(_) => SyntaxKind::Literal,
            Node::TemplateLiteral(_) => SyntaxKind::TemplateLiteral,
            Node::TemplateElement(_) => SyntaxKind::TemplateElement,
            Node::SpreadElement(_) => SyntaxKind::SpreadElement,
            Node::ThisExpression => SyntaxKind::ThisExpression,
            Node::ArrayPattern(_) => SyntaxKind::ArrayPattern,
            Node::ObjectExpression(_) => SyntaxKind::ObjectExpression,
            Node::ObjectPattern(_) => SyntaxKind::ObjectPattern,
            Node::Property(_) => SyntaxKind::Property,
            Node::FunctionExpression(_) => SyntaxKind::FunctionExpression,
            Node::ArrowFunctionExpression(_) => SyntaxKind::ArrowFunctionExpression,
            Node::YieldExpression(_) => SyntaxKind::YieldExpression,
            Node::UnaryExpression(_) => SyntaxKind::UnaryExpression,
            Node::UpdateExpression(_) => SyntaxKind::UpdateExpression,
            Node::BinaryExpression(_) => SyntaxKind::BinaryExpression,
            Node::LogicalExpression(_) => SyntaxKind::LogicalExpression,
            Node::AssignmentExpression(_) => SyntaxKind::AssignmentExpression,
            Node::ConditionalExpression(_) => SyntaxKind::ConditionalExpression,
            Node::MemberExpression(_) => SyntaxKind::MemberExpression,
            Node::CallExpression(_) => SyntaxKind::CallExpression,
            Node::NewExpression(_) => SyntaxKind::NewExpression,
            Node::SequenceExpression(_) => SyntaxKind::SequenceExpression,
        }
    }

    #[inline]
    pub fn is_statement(&self) -> bool {
        self.kind().is_statement()
    }

    /// The name of an `Identifier` node.
    pub fn identifier_name(&self) -> Option<&'a str> {
        match self {
            Node::Identifier(ident) => Some(ident.name),
            _ => None,
        }
    }

    /// Whether this node may appear on the left of an assignment.
    pub fn is_assignable(&self) -> bool {
        matches!(
            self,
            Node::Identifier(_)
                | Node::MemberExpression(_)
                | Node::ObjectPattern(_)
                | Node::ObjectExpression(_)
                | Node::ArrayPattern(_)
        )
    }
}

// ============================================================================
// Program and Statements
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Program<'a> {
    pub body: NodeList<'a>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpressionStatement<'a> {
    pub expression: &'a Node<'a>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockStatement<'a> {
    pub body: NodeList<'a>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReturnStatement<'a> {
    pub argument: OptionalNode<'a>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IfStatement<'a> {
    pub test: &'a Node<'a>,
    pub consequent: &'a Node<'a>,
    pub alternate: OptionalNode<'a>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwitchStatement<'a> {
    pub discriminant: &'a Node<'a>,
    pub cases: NodeList<'a>,
}

/// A `case test:` clause, or `default:` when `test` is absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwitchCase<'a> {
    pub test: OptionalNode<'a>,
    pub consequent: NodeList<'a>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForStatement<'a> {
    pub init: OptionalNode<'a>,
    pub test: OptionalNode<'a>,
    pub update: OptionalNode<'a>,
    pub body: &'a Node<'a>,
}

/// Shared by `ForInStatement` and `ForOfStatement`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForEachStatement<'a> {
    pub left: &'a Node<'a>,
    pub right: &'a Node<'a>,
    pub body: &'a Node<'a>,
    #[serde(rename = "await")]
    pub is_await: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DoWhileStatement<'a> {
    pub body: &'a Node<'a>,
    pub test: &'a Node<'a>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WhileStatement<'a> {
    pub test: &'a Node<'a>,
    pub body: &'a Node<'a>,
}

/// Shared by `ContinueStatement` and `BreakStatement`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JumpStatement<'a> {
    pub label: OptionalNode<'a>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabeledStatement<'a> {
    pub label: &'a Node<'a>,
    pub body: &'a Node<'a>,
}

// ============================================================================
// Declarations
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableKind {
    Var,
    Let,
    Const,
}

impl VariableKind {
    pub fn from_keyword(text: &str) -> Option<Self> {
        match text {
            "var" => Some(VariableKind::Var),
            "let" => Some(VariableKind::Let),
            "const" => Some(VariableKind::Const),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            VariableKind::Var => "var",
            VariableKind::Let => "let",
            VariableKind::Const => "const",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariableDeclaration<'a> {
    pub kind: VariableKind,
    pub declarations: NodeList<'a>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariableDeclarator<'a> {
    pub id: &'a Node<'a>,
    pub init: OptionalNode<'a>,
}

/// Shared by `FunctionDeclaration` and `FunctionExpression`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Function<'a> {
    #[serde(rename = "async")]
    pub is_async: bool,
    pub generator: bool,
    pub id: OptionalNode<'a>,
    pub params: NodeList<'a>,
    pub body: OptionalNode<'a>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassDeclaration<'a> {
    pub id: OptionalNode<'a>,
    pub super_class: OptionalNode<'a>,
    pub body: &'a Node<'a>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassBody<'a> {
    pub body: NodeList<'a>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyDefinition<'a> {
    #[serde(rename = "static")]
    pub is_static: bool,
    pub key: &'a Node<'a>,
    pub computed: bool,
    pub value: OptionalNode<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MethodKind {
    Method,
    Get,
    Set,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodDefinition<'a> {
    #[serde(rename = "static")]
    pub is_static: bool,
    pub kind: MethodKind,
    pub key: &'a Node<'a>,
    pub computed: bool,
    pub value: &'a Node<'a>,
}

// ============================================================================
// Modules
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportDeclaration<'a> {
    pub specifiers: NodeList<'a>,
    pub source: &'a Node<'a>,
}

/// Shared by `ImportDefaultSpecifier` and `ImportNamespaceSpecifier`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportLocalSpecifier<'a> {
    pub local: &'a Node<'a>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportSpecifier<'a> {
    pub imported: &'a Node<'a>,
    pub local: &'a Node<'a>,
}

/// Shared by `ExportStatement` and `ExportDefaultStatement`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportStatement<'a> {
    pub declaration: &'a Node<'a>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportNamedDeclaration<'a> {
    pub specifiers: NodeList<'a>,
    pub source: OptionalNode<'a>,
}

/// `local as exported`; both are the same name without `as`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportSpecifier<'a> {
    pub local: &'a Node<'a>,
    pub exported: &'a Node<'a>,
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Identifier<'a> {
    pub name: &'a str,
}

/// The value of a `Literal`. Strings keep their escapes as written; regular
/// expressions keep the whole `/pattern/flags` text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LiteralValue<'a> {
    String(&'a str),
    Number(f64),
    Boolean(bool),
    Null,
    #[serde(serialize_with = "serialize_regex")]
    RegExp(&'a str),
}

fn serialize_regex<S: serde::Serializer>(raw: &&str, serializer: S) -> Result<S::Ok, S::Error> {
    use serde::ser::SerializeMap;
    let (pattern, flags) = match raw.rfind('/') {
        Some(end) if end > 0 => (&raw[1..end], &raw[end + 1..]),
        _ => (*raw, ""),
    };
    let mut map = serializer.serialize_map(Some(2))?;
    map.serialize_entry("pattern", pattern)?;
    map.serialize_entry("flags", flags)?;
    map.end()
}

/// A literal. Equality compares `value` only, so quoting style and numeric
/// spelling do not distinguish otherwise identical trees.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Literal<'a> {
    pub value: LiteralValue<'a>,
    pub raw: &'a str,
}

impl PartialEq for Literal<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateLiteral<'a> {
    pub quasis: NodeList<'a>,
    pub expressions: NodeList<'a>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateElement<'a> {
    pub value: &'a str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpreadElement<'a> {
    pub argument: &'a Node<'a>,
}

/// Array literals and array destructuring targets.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArrayPattern<'a> {
    pub elements: NodeList<'a>,
}

/// Shared by `ObjectExpression` and `ObjectPattern`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectLiteral<'a> {
    pub properties: NodeList<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
    Init,
    Get,
    Set,
}

/// An object member. `shorthand` records the surface form only and is
/// ignored by equality.
#[derive(Debug, Clone, Serialize)]
pub struct Property<'a> {
    pub key: &'a Node<'a>,
    pub value: &'a Node<'a>,
    pub kind: PropertyKind,
    pub computed: bool,
    pub shorthand: bool,
    pub method: bool,
}

impl PartialEq for Property<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
            && self.value == other.value
            && self.kind == other.kind
            && self.computed == other.computed
            && self.method == other.method
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArrowFunctionExpression<'a> {
    pub params: NodeList<'a>,
    pub body: &'a Node<'a>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YieldExpression<'a> {
    pub delegate: bool,
    pub argument: OptionalNode<'a>,
}

/// Shared by `UnaryExpression` and `UpdateExpression`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnaryExpression<'a> {
    pub operator: &'a str,
    pub argument: &'a Node<'a>,
    pub prefix: bool,
}

/// Shared by `BinaryExpression` and `LogicalExpression`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BinaryExpression<'a> {
    pub operator: &'a str,
    pub left: &'a Node<'a>,
    pub right: &'a Node<'a>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignmentExpression<'a> {
    pub operator: &'a str,
    pub left: &'a Node<'a>,
    pub right: &'a Node<'a>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConditionalExpression<'a> {
    pub test: &'a Node<'a>,
    pub consequent: &'a Node<'a>,
    pub alternate: OptionalNode<'a>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberExpression<'a> {
    pub object: &'a Node<'a>,
    pub property: &'a Node<'a>,
    pub computed: bool,
}

/// Shared by `CallExpression` and `NewExpression`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CallExpression<'a> {
    pub callee: &'a Node<'a>,
    pub arguments: NodeList<'a>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SequenceExpression<'a> {
    pub expressions: NodeList<'a>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(name: &str) -> Node<'_> {
        Node::Identifier(Identifier { name })
    }

    #[test]
    fn test_kind_matches_tag() {
        let a = ident("a");
        assert_eq!(a.kind(), SyntaxKind::Identifier);
        assert_eq!(Node::ThisExpression.kind(), SyntaxKind::ThisExpression);
        let call = Node::NewExpression(CallExpression { callee: &a, arguments: &[] });
        assert_eq!(call.kind(), SyntaxKind::NewExpression);
    }

    #[test]
    fn test_property_equality_ignores_shorthand() {
        let key = ident("a");
        let value = ident("a");
        let short = Property {
            key: &key,
            value: &value,
            kind: PropertyKind::Init,
            computed: false,
            shorthand: true,
            method: false,
        };
        let long = Property { shorthand: false, ..short.clone() };
        assert_eq!(short, long);
    }

    #[test]
    fn test_literal_equality_ignores_raw() {
        let single = Literal { value: LiteralValue::String("x"), raw: "'x'" };
        let double = Literal { value: LiteralValue::String("x"), raw: "\"x\"" };
        assert_eq!(single, double);
        let hex = Literal { value: LiteralValue::Number(16.0), raw: "0x10" };
        let dec = Literal { value: LiteralValue::Number(16.0), raw: "16" };
        assert_eq!(hex, dec);
    }

    #[test]
    fn test_assignable() {
        assert!(ident("x").is_assignable());
        assert!(!Node::ThisExpression.is_assignable());
    }
}
