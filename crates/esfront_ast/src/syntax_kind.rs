//! SyntaxKind enum - every token kind and node tag in the tree.

/// The kind of a token or a tree node.
///
/// Token kinds come first. Node kinds use the ESTree tag names so that
/// [`SyntaxKind::as_str`] yields the `type` string of the JSON form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum SyntaxKind {
    // ========================================================================
    // Tokens
    // ========================================================================

    // Trivia
    WhitespaceTrivia,
    CommentTrivia,

    // Keywords
    ReservedWord,
    BooleanLiteral,
    DeclarationKeyword,
    FunctionKeyword,
    ThisKeyword,
    NewKeyword,
    YieldKeyword,
    ForKeyword,
    DoKeyword,
    WhileKeyword,
    ContinueKeyword,
    BreakKeyword,
    ClassKeyword,
    ExtendsKeyword,
    StaticKeyword,
    GetKeyword,
    SetKeyword,
    ReturnKeyword,
    ImportKeyword,
    ImportOperator,
    ExportDefaultKeyword,
    ExportKeyword,
    IfKeyword,
    ElseKeyword,
    SwitchKeyword,
    CaseKeyword,
    DefaultKeyword,

    // Operators
    Operator,
    AssignmentOperator,
    ArrowToken,
    DotDotDotToken,

    // Literals
    NumericLiteral,
    StringLiteral,
    RegularExpressionLiteral,
    TemplateChunk,
    IdentifierName,

    // Punctuation
    DotToken,
    Backtick,
    QuestionToken,
    OpenParenToken,
    CloseParenToken,
    OpenBraceToken,
    CloseBraceToken,
    OpenBracketToken,
    CloseBracketToken,
    SemicolonToken,
    ColonToken,
    CommaToken,

    // ========================================================================
    // Nodes
    // ========================================================================
    Program,
    EmptyStatement,
    ExpressionStatement,
    BlockStatement,
    ReturnStatement,
    IfStatement,
    SwitchStatement,
    SwitchCase,
    ForStatement,
    ForInStatement,
    ForOfStatement,
    DoWhileStatement,
    WhileStatement,
    ContinueStatement,
    BreakStatement,
    LabeledStatement,
    VariableDeclaration,
    VariableDeclarator,
    FunctionDeclaration,
    ClassDeclaration,
    ClassBody,
    PropertyDefinition,
    MethodDefinition,
    ImportDeclaration,
    ImportDefaultSpecifier,
    ImportNamespaceSpecifier,
    ImportSpecifier,
    ExportStatement,
    ExportDefaultStatement,
    ExportNamedDeclaration,
    ExportSpecifier,
    Identifier,
    Literal,
    TemplateLiteral,
    TemplateElement,
    SpreadElement,
    ThisExpression,
    ArrayPattern,
    ObjectExpression,
    ObjectPattern,
    Property,
    FunctionExpression,
    ArrowFunctionExpression,
    YieldExpression,
    UnaryExpression,
    UpdateExpression,
    BinaryExpression,
    LogicalExpression,
    AssignmentExpression,
    ConditionalExpression,
    MemberExpression,
    CallExpression,
    NewExpression,
    SequenceExpression,
}

impl SyntaxKind {
    pub const FIRST_KEYWORD: SyntaxKind = SyntaxKind::ReservedWord;
    pub const LAST_KEYWORD: SyntaxKind = SyntaxKind::DefaultKeyword;
    pub const FIRST_NODE: SyntaxKind = SyntaxKind::Program;
}

impl SyntaxKind {
    #[inline]
    pub fn is_keyword(self) -> bool {
        self >= Self::FIRST_KEYWORD && self <= Self::LAST_KEYWORD
    }

    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, SyntaxKind::WhitespaceTrivia | SyntaxKind::CommentTrivia)
    }

    #[inline]
    pub fn is_token(self) -> bool {
        self < Self::FIRST_NODE
    }

    #[inline]
    pub fn is_node(self) -> bool {
        self >= Self::FIRST_NODE
    }

    /// Node kinds that occupy statement position and never continue into a
    /// larger expression.
    pub fn is_statement(self) -> bool {
        matches!(
            self,
            SyntaxKind::EmptyStatement
                | SyntaxKind::ExpressionStatement
                | SyntaxKind::BlockStatement
                | SyntaxKind::ReturnStatement
                | SyntaxKind::IfStatement
                | SyntaxKind::SwitchStatement
                | SyntaxKind::ForStatement
                | SyntaxKind::ForInStatement
                | SyntaxKind::ForOfStatement
                | SyntaxKind::DoWhileStatement
                | SyntaxKind::WhileStatement
                | SyntaxKind::ContinueStatement
                | SyntaxKind::BreakStatement
                | SyntaxKind::LabeledStatement
                | SyntaxKind::VariableDeclaration
                | SyntaxKind::FunctionDeclaration
                | SyntaxKind::ClassDeclaration
                | SyntaxKind::ImportDeclaration
                | SyntaxKind::ExportStatement
                | SyntaxKind::ExportDefaultStatement
                | SyntaxKind::ExportNamedDeclaration
        )
    }

    /// Token kinds after which an operand has just ended. A `/` that follows
    /// one of these is division, never the start of a regex.
    pub fn ends_operand(self) -> bool {
        matches!(
            self,
            SyntaxKind::IdentifierName
                | SyntaxKind::NumericLiteral
                | SyntaxKind::StringLiteral
                | SyntaxKind::RegularExpressionLiteral
                | SyntaxKind::BooleanLiteral
                | SyntaxKind::ReservedWord
                | SyntaxKind::ThisKeyword
                | SyntaxKind::GetKeyword
                | SyntaxKind::SetKeyword
                | SyntaxKind::StaticKeyword
                | SyntaxKind::CloseParenToken
                | SyntaxKind::CloseBracketToken
                | SyntaxKind::Backtick
        )
    }

    /// The punctuation spelling of a fixed token kind.
    pub fn punctuation_text(self) -> Option<&'static str> {
        match self {
            SyntaxKind::ArrowToken => Some("=>"),
            SyntaxKind::DotDotDotToken => Some("..."),
            SyntaxKind::DotToken => Some("."),
            SyntaxKind::Backtick => Some("`"),
            SyntaxKind::QuestionToken => Some("?"),
            SyntaxKind::OpenParenToken => Some("("),
            SyntaxKind::CloseParenToken => Some(")"),
            SyntaxKind::OpenBraceToken => Some("{"),
            SyntaxKind::CloseBraceToken => Some("}"),
            SyntaxKind::OpenBracketToken => Some("["),
            SyntaxKind::CloseBracketToken => Some("]"),
            SyntaxKind::SemicolonToken => Some(";"),
            SyntaxKind::ColonToken => Some(":"),
            SyntaxKind::CommaToken => Some(","),
            _ => None,
        }
    }

    /// The name of this kind. For node kinds this is the ESTree `type` tag.
    pub fn as_str(self) -> &'static str {
        match self {
            SyntaxKind::WhitespaceTrivia => "WhitespaceTrivia",
            SyntaxKind::CommentTrivia => "CommentTrivia",
            SyntaxKind::ReservedWord => "ReservedWord",
            SyntaxKind::BooleanLiteral => "BooleanLiteral",
            SyntaxKind::DeclarationKeyword => "DeclarationKeyword",
            SyntaxKind::FunctionKeyword => "FunctionKeyword",
            SyntaxKind::ThisKeyword => "ThisKeyword",
            SyntaxKind::NewKeyword => "NewKeyword",
            SyntaxKind::YieldKeyword => "YieldKeyword",
            SyntaxKind::ForKeyword => "ForKeyword",
            SyntaxKind::DoKeyword => "DoKeyword",
            SyntaxKind::WhileKeyword => "WhileKeyword",
            SyntaxKind::ContinueKeyword => "ContinueKeyword",
            SyntaxKind::BreakKeyword => "BreakKeyword",
            SyntaxKind::ClassKeyword => "ClassKeyword",
            SyntaxKind::ExtendsKeyword => "ExtendsKeyword",
            SyntaxKind::StaticKeyword => "StaticKeyword",
            SyntaxKind::GetKeyword => "GetKeyword",
            SyntaxKind::SetKeyword => "SetKeyword",
            SyntaxKind::ReturnKeyword => "ReturnKeyword",
            SyntaxKind::ImportKeyword => "ImportKeyword",
            SyntaxKind::ImportOperator => "ImportOperator",
            SyntaxKind::ExportDefaultKeyword => "ExportDefaultKeyword",
            SyntaxKind::ExportKeyword => "ExportKeyword",
            SyntaxKind::IfKeyword => "IfKeyword",
            SyntaxKind::ElseKeyword => "ElseKeyword",
            SyntaxKind::SwitchKeyword => "SwitchKeyword",
            SyntaxKind::CaseKeyword => "CaseKeyword",
            SyntaxKind::DefaultKeyword => "DefaultKeyword",
            SyntaxKind::Operator => "Operator",
            SyntaxKind::AssignmentOperator => "AssignmentOperator",
            SyntaxKind::ArrowToken => "ArrowToken",
            SyntaxKind::DotDotDotToken => "DotDotDotToken",
            SyntaxKind::NumericLiteral => "NumericLiteral",
            SyntaxKind::StringLiteral => "StringLiteral",
            SyntaxKind::RegularExpressionLiteral => "RegularExpressionLiteral",
            SyntaxKind::TemplateChunk => "TemplateChunk",
            SyntaxKind::IdentifierName => "IdentifierName",
            SyntaxKind::DotToken => "DotToken",
            SyntaxKind::Backtick => "Backtick",
            SyntaxKind::QuestionToken => "QuestionToken",
            SyntaxKind::OpenParenToken => "OpenParenToken",
            SyntaxKind::CloseParenToken => "CloseParenToken",
            SyntaxKind::OpenBraceToken => "OpenBraceToken",
            SyntaxKind::CloseBraceToken => "CloseBraceToken",
            SyntaxKind::OpenBracketToken => "OpenBracketToken",
            SyntaxKind::CloseBracketToken => "CloseBracketToken",
            SyntaxKind::SemicolonToken => "SemicolonToken",
            SyntaxKind::ColonToken => "ColonToken",
            SyntaxKind::CommaToken => "CommaToken",
            SyntaxKind::Program => "Program",
            SyntaxKind::EmptyStatement => "EmptyStatement",
            SyntaxKind::ExpressionStatement => "ExpressionStatement",
            SyntaxKind::BlockStatement => "BlockStatement",
            SyntaxKind::ReturnStatement => "ReturnStatement",
            SyntaxKind::IfStatement => "IfStatement",
            SyntaxKind::SwitchStatement => "SwitchStatement",
            SyntaxKind::SwitchCase => "SwitchCase",
            SyntaxKind::ForStatement => "ForStatement",
            SyntaxKind::ForInStatement => "ForInStatement",
            SyntaxKind::ForOfStatement => "ForOfStatement",
            SyntaxKind::DoWhileStatement => "DoWhileStatement",
            SyntaxKind::WhileStatement => "WhileStatement",
            SyntaxKind::ContinueStatement => "ContinueStatement",
            SyntaxKind::BreakStatement => "BreakStatement",
            SyntaxKind::LabeledStatement => "LabeledStatement",
            SyntaxKind::VariableDeclaration => "VariableDeclaration",
            SyntaxKind::VariableDeclarator => "VariableDeclarator",
            SyntaxKind::FunctionDeclaration => "FunctionDeclaration",
            SyntaxKind::ClassDeclaration => "ClassDeclaration",
            SyntaxKind::ClassBody => "ClassBody",
            SyntaxKind::PropertyDefinition => "PropertyDefinition",
            SyntaxKind::MethodDefinition => "MethodDefinition",
            SyntaxKind::ImportDeclaration => "ImportDeclaration",
            SyntaxKind::ImportDefaultSpecifier => "ImportDefaultSpecifier",
            SyntaxKind::ImportNamespaceSpecifier => "ImportNamespaceSpecifier",
            SyntaxKind::ImportSpecifier => "ImportSpecifier",
            SyntaxKind::ExportStatement => "ExportStatement",
            SyntaxKind::ExportDefaultStatement => "ExportDefaultStatement",
            SyntaxKind::ExportNamedDeclaration => "ExportNamedDeclaration",
            SyntaxKind::ExportSpecifier => "ExportSpecifier",
            SyntaxKind::Identifier => "Identifier",
            SyntaxKind::Literal => "Literal",
            SyntaxKind::TemplateLiteral => "TemplateLiteral",
            SyntaxKind::TemplateElement => "TemplateElement",
            SyntaxKind::SpreadElement => "SpreadElement",
            SyntaxKind::ThisExpression => "ThisExpression",
            SyntaxKind::ArrayPattern => "ArrayPattern",
            SyntaxKind::ObjectExpression => "ObjectExpression",
            SyntaxKind::ObjectPattern => "ObjectPattern",
            SyntaxKind::Property => "Property",
            SyntaxKind::FunctionExpression => "FunctionExpression",
            SyntaxKind::ArrowFunctionExpression => "ArrowFunctionExpression",
            SyntaxKind::YieldExpression => "YieldExpression",
            SyntaxKind::UnaryExpression => "UnaryExpression",
            SyntaxKind::UpdateExpression => "UpdateExpression",
            SyntaxKind::BinaryExpression => "BinaryExpression",
            SyntaxKind::LogicalExpression => "LogicalExpression",
            SyntaxKind::AssignmentExpression => "AssignmentExpression",
            SyntaxKind::ConditionalExpression => "ConditionalExpression",
            SyntaxKind::MemberExpression => "MemberExpression",
            SyntaxKind::CallExpression => "CallExpression",
            SyntaxKind::NewExpression => "NewExpression",
            SyntaxKind::SequenceExpression => "SequenceExpression",
        }
    }
}

impl std::fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_range() {
        assert!(SyntaxKind::ReservedWord.is_keyword());
        assert!(SyntaxKind::DefaultKeyword.is_keyword());
        assert!(SyntaxKind::ForKeyword.is_keyword());
        assert!(!SyntaxKind::Operator.is_keyword());
        assert!(!SyntaxKind::IdentifierName.is_keyword());
    }

    #[test]
    fn test_token_and_node_split() {
        assert!(SyntaxKind::CommaToken.is_token());
        assert!(SyntaxKind::Program.is_node());
        assert!(!SyntaxKind::SequenceExpression.is_token());
    }

    #[test]
    fn test_statement_kinds() {
        assert!(SyntaxKind::LabeledStatement.is_statement());
        assert!(SyntaxKind::FunctionDeclaration.is_statement());
        assert!(!SyntaxKind::FunctionExpression.is_statement());
        assert!(!SyntaxKind::Identifier.is_statement());
    }

    #[test]
    fn test_display_uses_estree_names() {
        assert_eq!(SyntaxKind::MemberExpression.to_string(), "MemberExpression");
        assert_eq!(SyntaxKind::OpenParenToken.punctuation_text(), Some("("));
        assert_eq!(SyntaxKind::Operator.punctuation_text(), None);
    }
}
