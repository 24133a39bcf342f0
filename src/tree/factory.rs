//! Node construction
//!
//! Nodes are built either empty (`construct` + `attach_child`, the way a
//! parser assembles a tree) or from text through a fragment parse. Every
//! node and token returned here is mutable and detached, so it can be
//! spliced into an edit session directly.

use rowan::{GreenNode, GreenToken, NodeOrToken};

use super::error::FactoryError;
use crate::parser::{
    FragmentKind, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken, kind_set, parse_fragment,
};

/// An empty composite node of `kind`
pub fn construct(kind: SyntaxKind) -> Result<SyntaxNode, FactoryError> {
    if !kind.is_node() || kind == SyntaxKind::ERROR {
        return Err(FactoryError::UnsupportedKind(kind));
    }
    let green = GreenNode::new(kind.into(), std::iter::empty());
    Ok(SyntaxNode::new_root_mut(green))
}

/// Append `child` as the last child of `parent`
pub fn attach_child(parent: &SyntaxNode, child: impl Into<SyntaxElement>) {
    let child = detached(child.into());
    let end = parent.children_with_tokens().count();
    tracing::trace!("attach {:?} to {:?}", child.kind(), parent.kind());
    parent.splice_children(end..end, vec![child]);
}

/// A standalone mutable token
pub fn token(kind: SyntaxKind, text: &str) -> SyntaxToken {
    let green = GreenNode::new(
        SyntaxKind::DUMMY_HOLDER.into(),
        [NodeOrToken::Token(GreenToken::new(kind.into(), text))],
    );
    let holder = SyntaxNode::new_root_mut(green);
    let token = holder
        .first_token()
        .unwrap_or_else(|| unreachable!("holder was built with one token"));
    token.detach();
    token
}

pub fn whitespace(text: &str) -> SyntaxToken {
    token(SyntaxKind::WHITESPACE, text)
}

/// Make an element insertable: mutable and without a parent.
///
/// Elements that already are stay as they are, so callers keep their
/// identity. Anything else is copied.
pub fn detached(element: SyntaxElement) -> SyntaxElement {
    match element {
        NodeOrToken::Node(node) => NodeOrToken::Node(detached_node(node)),
        NodeOrToken::Token(t) => {
            if t.parent().is_some_and(|p| p.is_mutable()) {
                t.detach();
                NodeOrToken::Token(t)
            } else {
                NodeOrToken::Token(token(t.kind(), t.text()))
            }
        }
    }
}

pub fn detached_node(node: SyntaxNode) -> SyntaxNode {
    if node.is_mutable() {
        node.detach();
        node
    } else {
        SyntaxNode::new_root_mut(node.green().into_owned())
    }
}

fn fragment(
    text: &str,
    kind: FragmentKind,
    expected: &'static str,
    accepts: impl Fn(SyntaxKind) -> bool,
) -> Result<SyntaxNode, FactoryError> {
    let parse = parse_fragment(text, kind);
    if let Some(error) = parse.errors.first() {
        return Err(FactoryError::Parse {
            text: text.to_string(),
            message: error.message.clone(),
        });
    }
    let holder = SyntaxNode::new_root_mut(parse.green);
    let nodes: Vec<_> = holder.children().collect();
    match nodes.as_slice() {
        [node] if accepts(node.kind()) => {
            node.detach();
            Ok(node.clone())
        }
        _ => Err(FactoryError::UnexpectedShape {
            text: text.to_string(),
            expected,
        }),
    }
}

pub fn expression(text: &str) -> Result<SyntaxNode, FactoryError> {
    fragment(text, FragmentKind::Expression, "expression", |k| {
        kind_set::EXPRESSIONS.contains(k)
    })
}

pub fn statement(text: &str) -> Result<SyntaxNode, FactoryError> {
    fragment(text, FragmentKind::Statement, "statement", |k| {
        kind_set::STATEMENTS.contains(k)
    })
}

pub fn code_block(text: &str) -> Result<SyntaxNode, FactoryError> {
    fragment(text, FragmentKind::CodeBlock, "code block", |k| {
        k == SyntaxKind::CODE_BLOCK
    })
}

pub fn type_element(text: &str) -> Result<SyntaxNode, FactoryError> {
    fragment(text, FragmentKind::Type, "type", |k| k == SyntaxKind::TYPE)
}

pub fn pattern(text: &str) -> Result<SyntaxNode, FactoryError> {
    fragment(text, FragmentKind::Pattern, "pattern", |k| {
        kind_set::PATTERNS.contains(k) || k == SyntaxKind::GUARDED_PATTERN
    })
}

pub fn member(text: &str) -> Result<SyntaxNode, FactoryError> {
    fragment(text, FragmentKind::Member, "member", |k| {
        kind_set::MEMBERS.contains(k)
    })
}

/// `{}` as a statement
pub fn empty_block_statement() -> SyntaxNode {
    let statement = construct_unchecked(SyntaxKind::BLOCK_STATEMENT);
    let block = construct_unchecked(SyntaxKind::CODE_BLOCK);
    attach_child(&block, token(SyntaxKind::L_BRACE, "{"));
    attach_child(&block, token(SyntaxKind::R_BRACE, "}"));
    attach_child(&statement, block);
    statement
}

pub fn empty_statement() -> SyntaxNode {
    let statement = construct_unchecked(SyntaxKind::EMPTY_STATEMENT);
    attach_child(&statement, token(SyntaxKind::SEMICOLON, ";"));
    statement
}

/// Wrap an expression in a `PARENTH_EXPRESSION`, keeping its identity
pub fn parenthesize(expr: SyntaxNode) -> SyntaxNode {
    let parens = construct_unchecked(SyntaxKind::PARENTH_EXPRESSION);
    attach_child(&parens, token(SyntaxKind::L_PAREN, "("));
    attach_child(&parens, expr);
    attach_child(&parens, token(SyntaxKind::R_PAREN, ")"));
    parens
}

fn construct_unchecked(kind: SyntaxKind) -> SyntaxNode {
    SyntaxNode::new_root_mut(GreenNode::new(kind.into(), std::iter::empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::composite::HasRoles;
    use crate::tree::role::Role;

    #[test]
    fn test_construct_then_attach_round_trips_roles() {
        let binary = construct(SyntaxKind::BINARY_EXPRESSION).unwrap();
        let right = expression("b").unwrap();
        let left = expression("a").unwrap();
        attach_child(&binary, left.clone());
        attach_child(&binary, token(SyntaxKind::STAR, "*"));
        attach_child(&binary, right.clone());
        assert_eq!(binary.text().to_string(), "a*b");
        assert_eq!(binary.child_node_by_role(Role::LOperand).unwrap(), Some(left));
        assert_eq!(binary.child_node_by_role(Role::ROperand).unwrap(), Some(right));
    }

    #[test]
    fn test_construct_rejects_tokens() {
        assert_eq!(
            construct(SyntaxKind::IDENT),
            Err(FactoryError::UnsupportedKind(SyntaxKind::IDENT))
        );
    }

    #[test]
    fn test_fragments_have_expected_shape() {
        assert_eq!(expression("a + b").unwrap().kind(), SyntaxKind::BINARY_EXPRESSION);
        assert_eq!(statement("return;").unwrap().kind(), SyntaxKind::RETURN_STATEMENT);
        assert_eq!(type_element("int[]").unwrap().kind(), SyntaxKind::TYPE);
        assert_eq!(pattern("Point(int x, _)").unwrap().kind(), SyntaxKind::RECORD_PATTERN);
        assert_eq!(member("int x;").unwrap().kind(), SyntaxKind::FIELD);
        assert!(matches!(expression("a +"), Err(FactoryError::Parse { .. })));
        assert!(matches!(
            statement("{}").map(|s| s.kind()),
            Ok(SyntaxKind::BLOCK_STATEMENT)
        ));
    }

    #[test]
    fn test_parenthesize_keeps_identity() {
        let inner = expression("c + d").unwrap();
        let wrapped = parenthesize(inner.clone());
        assert_eq!(wrapped.text().to_string(), "(c + d)");
        assert_eq!(inner.parent(), Some(wrapped));
    }

    #[test]
    fn test_empty_block_statement_text() {
        assert_eq!(empty_block_statement().text().to_string(), "{}");
    }

    #[test]
    fn test_empty_statement_is_a_lone_semicolon() {
        let statement = empty_statement();
        assert_eq!(statement.kind(), SyntaxKind::EMPTY_STATEMENT);
        assert_eq!(statement.text().to_string(), ";");
        assert!(statement.child_token_by_role(Role::Semicolon).unwrap().is_some());
    }
}
