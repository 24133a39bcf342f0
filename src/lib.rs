//! # javelin-base
//!
//! Role-indexed concrete syntax trees for a Java subset.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! tree      → Child roles, guarded mutation, visitors, scope scanning
//!   ↓
//! parser    → Logos lexer, recursive-descent parser, typed AST wrappers
//! ```
//!
//! ## Example
//!
//! ```
//! use javelin::tree::{HasRoles, Role, SyntaxTree};
//! use javelin::parser::SyntaxKind;
//!
//! let tree = SyntaxTree::parse("class A { void m() { while (ok) { step(); } } }");
//! let loop_node = tree
//!     .root()
//!     .descendants()
//!     .find(|n| n.kind() == SyntaxKind::WHILE_STATEMENT)
//!     .unwrap();
//! let body = loop_node.find_child_by_role(Role::LoopBody).unwrap().unwrap();
//! tree.delete_child(&loop_node, &body).unwrap();
//! assert_eq!(tree.text(), "class A { void m() { while (ok) {} } }");
//! ```

// ============================================================================
// MODULES (dependency order: parser → tree)
// ============================================================================

/// Parser: Logos lexer, recursive-descent parser, typed AST wrappers
pub mod parser;

/// Role-indexed CST: roles, mutation guard, visitors, scope bridge
pub mod tree;

// Re-export commonly needed items
pub use parser::{
    AstNode, JavaFile, Parse, SyntaxElement, SyntaxError, SyntaxKind, SyntaxNode, SyntaxToken,
    parse, parse_fragment,
};
pub use tree::{
    Accept, HasRoles, MutationError, MutationResult, Role, SyntaxTree, TreeOptions, Visitor,
};

// Re-export rowan text primitives
pub use rowan::{TextRange, TextSize};
