//! esfront_ast: Syntax tree definitions for the esfront JavaScript front end.
//!
//! Tokens and tree nodes share one [`SyntaxKind`] enum. Nodes follow the
//! ESTree shapes and are allocated in an [`esfront_core::Arena`].

pub mod node;
pub mod syntax_kind;
pub mod visitor;

pub use node::*;
pub use syntax_kind::SyntaxKind;
pub use visitor::{find_member_ancestors, for_each_child, walk, Ancestor, Visitor, Walker};

/// Serialize a tree to ESTree-shaped JSON.
pub fn to_estree_json(node: &Node<'_>) -> serde_json::Value {
    // Nodes contain only strings, numbers, bools and nested nodes, which
    // always serialize. Non-finite numbers become null.
    serde_json::to_value(node).unwrap_or(serde_json::Value::Null)
}
