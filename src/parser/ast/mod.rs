//! Typed AST wrappers over the untyped rowan CST.
//!
//! Each struct wraps a SyntaxNode of one kind. Accessors go through child
//! roles ([`crate::tree::HasRoles`]) rather than child positions, so they
//! stay correct while the tree is edited.
//!
//! Absent optional children are `None`. A broken structural assumption
//! (two children in a unique role, a child the grammar guarantees is
//! missing) is a consistency fault: it is logged and the accessor panics.

use super::syntax_kind::SyntaxKind;
use super::{SyntaxNode, SyntaxToken};
use crate::tree::{ConsistencyFault, HasRoles, Role};

// ============================================================================
// Helper utilities
// ============================================================================

/// Unwrap the result of a role query, raising consistency faults
#[track_caller]
fn consistent<T>(result: Result<T, ConsistencyFault>) -> T {
    match result {
        Ok(value) => value,
        Err(fault) => {
            tracing::error!("consistency fault in typed accessor: {fault}");
            panic!("{fault}")
        }
    }
}

#[inline]
fn role_node<T: AstNode>(node: &SyntaxNode, role: Role) -> Option<T> {
    consistent(node.child_node_by_role(role)).and_then(T::cast)
}

#[inline]
fn role_nodes<T: AstNode>(node: &SyntaxNode, role: Role) -> Vec<T> {
    node.child_nodes_by_role(role)
        .into_iter()
        .filter_map(T::cast)
        .collect()
}

#[inline]
fn role_token(node: &SyntaxNode, role: Role) -> Option<SyntaxToken> {
    consistent(node.child_token_by_role(role))
}

#[track_caller]
fn required_node<T: AstNode>(node: &SyntaxNode, role: Role) -> T {
    let child = consistent(node.required_child_by_role(role));
    match child.into_node().and_then(T::cast) {
        Some(typed) => typed,
        None => {
            let fault = ConsistencyFault::MissingRequiredChild {
                parent: node.kind(),
                role,
                range: node.text_range(),
            };
            tracing::error!("consistency fault in typed accessor: {fault}");
            panic!("{fault}")
        }
    }
}

/// Macro to generate a method returning the child node in a role.
///
/// Usage:
/// ```ignore
/// impl WhileStatement {
///     role_node_method!(body, Statement, LoopBody);
/// }
/// ```
macro_rules! role_node_method {
    ($name:ident, $type:ident, $role:ident) => {
        #[doc = concat!("The `", stringify!($type), "` in the `", stringify!($role), "` role.")]
        pub fn $name(&self) -> Option<$type> {
            role_node(&self.0, crate::tree::Role::$role)
        }
    };
}

/// Macro to generate a method returning every child node in a repeating role
macro_rules! role_nodes_method {
    ($name:ident, $type:ident, $role:ident) => {
        #[doc = concat!("All `", stringify!($type), "` children in the `", stringify!($role), "` role.")]
        pub fn $name(&self) -> Vec<$type> {
            role_nodes(&self.0, crate::tree::Role::$role)
        }
    };
}

/// Macro to generate a method returning the token in a role
macro_rules! role_token_method {
    ($name:ident, $role:ident) => {
        #[doc = concat!("The token in the `", stringify!($role), "` role.")]
        pub fn $name(&self) -> Option<SyntaxToken> {
            role_token(&self.0, crate::tree::Role::$role)
        }
    };
}

/// Macro to generate a method for a child the grammar always provides.
/// Its absence is a consistency fault.
macro_rules! required_node_method {
    ($name:ident, $type:ident, $role:ident) => {
        #[doc = concat!("The `", stringify!($type), "` in the `", stringify!($role), "` role; always present.")]
        #[track_caller]
        pub fn $name(&self) -> $type {
            required_node(&self.0, crate::tree::Role::$role)
        }
    };
}

/// Macro to generate `name()` and `name_text()` for declarations
macro_rules! name_method {
    () => {
        /// The name token, absent while the declaration is incomplete
        pub fn name(&self) -> Option<SyntaxToken> {
            role_token(&self.0, crate::tree::Role::Name)
        }

        pub fn name_text(&self) -> Option<String> {
            self.name().map(|t| t.text().to_string())
        }
    };
}

/// Trait for AST nodes that wrap a SyntaxNode
pub trait AstNode: Sized {
    fn can_cast(kind: SyntaxKind) -> bool;
    fn cast(node: SyntaxNode) -> Option<Self>;
    fn syntax(&self) -> &SyntaxNode;

    /// Find all descendant nodes of a specific AST type
    fn descendants<T: AstNode>(&self) -> impl Iterator<Item = T> {
        self.syntax().descendants().filter_map(T::cast)
    }

    /// Javadoc or line comments directly before this node
    fn doc_comment(&self) -> Option<String> {
        extract_doc_comment(self.syntax())
    }
}

/// Extract the comment preceding a node.
///
/// A declaration's leading comments usually end up inside its parent
/// before the node itself, separated only by whitespace. A block comment
/// (`/** ... */` or `/* ... */`) wins; otherwise consecutive line comments
/// are joined.
pub fn extract_doc_comment(node: &SyntaxNode) -> Option<String> {
    let mut comments = Vec::new();
    let mut current = node.prev_sibling_or_token();

    while let Some(element) = current {
        let Some(token) = element.as_token() else {
            break;
        };
        match token.kind() {
            SyntaxKind::WHITESPACE => {}
            SyntaxKind::BLOCK_COMMENT => {
                let text = token.text();
                let content = text
                    .strip_prefix("/**")
                    .or_else(|| text.strip_prefix("/*"))
                    .and_then(|s| s.strip_suffix("*/"))
                    .map(clean_doc_comment)
                    .unwrap_or_default();
                if !content.is_empty() {
                    comments.push(content);
                }
                break;
            }
            SyntaxKind::LINE_COMMENT => {
                let text = token.text();
                let content = text.strip_prefix("//").unwrap_or(text).trim();
                if !content.is_empty() {
                    comments.push(content.to_string());
                }
            }
            _ => break,
        }
        current = element.prev_sibling_or_token();
    }

    if comments.is_empty() {
        return None;
    }

    // Collected bottom-up
    comments.reverse();
    Some(comments.join("\n"))
}

/// Remove leading asterisks and blank lines from comment content
fn clean_doc_comment(s: &str) -> String {
    s.lines()
        .map(|line| {
            let trimmed = line.trim();
            match trimmed.strip_prefix('*') {
                Some(rest) => rest.trim_start().to_string(),
                None => trimmed.to_string(),
            }
        })
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

// ============================================================================
// Helper macros
// ============================================================================

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(pub(crate) SyntaxNode);

        impl AstNode for $name {
            fn can_cast(kind: SyntaxKind) -> bool {
                kind == SyntaxKind::$kind
            }

            fn cast(node: SyntaxNode) -> Option<Self> {
                if Self::can_cast(node.kind()) {
                    Some(Self(node))
                } else {
                    None
                }
            }

            fn syntax(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

/// Sum type over several node wrappers, one variant per kind
macro_rules! ast_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident($type:ident) = $kind:ident),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant($type),)+
        }

        impl AstNode for $name {
            fn can_cast(kind: SyntaxKind) -> bool {
                matches!(kind, $(SyntaxKind::$kind)|+)
            }

            fn cast(node: SyntaxNode) -> Option<Self> {
                match node.kind() {
                    $(SyntaxKind::$kind => Some(Self::$variant($type(node))),)+
                    _ => None,
                }
            }

            fn syntax(&self) -> &SyntaxNode {
                match self {
                    $(Self::$variant(inner) => &inner.0,)+
                }
            }
        }
    };
}

// Submodules come after the macros so `macro_rules!` are in scope
mod declarations;
mod expressions;
mod patterns;
mod statements;

// Re-export all public types so external code sees a flat namespace
pub use self::declarations::*;
pub use self::expressions::*;
pub use self::patterns::*;
pub use self::statements::*;
