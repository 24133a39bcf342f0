//! Rowan-based parser for the Java subset
//!
//! This module provides a lossless parser using:
//! - **logos** for fast lexing
//! - **rowan** for the CST (Concrete Syntax Tree)
//!
//! This is the rust-analyzer approach: we build a lossless CST that preserves
//! all whitespace and comments, then extract a typed AST layer on top.
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → Tokens with SyntaxKind
//!     ↓
//! Parser → GreenNode tree (immutable, cheap to clone)
//!     ↓
//! SyntaxNode (rowan) → CST with parent pointers
//!     ↓
//! AST layer → Typed wrappers over SyntaxNode, backed by child roles
//! ```

#[allow(clippy::module_inception)]
mod parser;

pub mod ast;
pub mod grammar;
pub mod kind_set;
mod lexer;
mod syntax_kind;

pub use ast::*;
pub use kind_set::{KindGroup, KindSet, group, is_member};
pub use lexer::{Lexer, Token, tokenize};
pub use parser::{FragmentKind, Parse, SyntaxError, parse, parse_fragment};
pub use syntax_kind::{
    JavaLanguage, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxNodeChildren, SyntaxToken,
};

/// Re-export rowan types for convenience
pub use rowan::{GreenNode, TextRange, TextSize};
