//! Tree test helpers for locating nodes by kind, text and role.

use javelin::parser::{SyntaxElement, SyntaxKind, SyntaxNode, parse};
use javelin::tree::{HasRoles, Role, SyntaxTree};

/// Parse into an edit session, failing the test on parse errors.
pub fn tree_from(source: &str) -> SyntaxTree {
    let tree = SyntaxTree::parse(source);
    assert!(
        tree.errors().is_empty(),
        "Parse errors in {:?}: {:?}",
        source,
        tree.errors()
    );
    tree
}

/// First node of `kind` in preorder.
pub fn first_of_kind(root: &SyntaxNode, kind: SyntaxKind) -> SyntaxNode {
    root.descendants()
        .find(|n| n.kind() == kind)
        .unwrap_or_else(|| panic!("no {kind:?} in {:?}", root.text().to_string()))
}

/// Every node of `kind` in preorder.
pub fn all_of_kind(root: &SyntaxNode, kind: SyntaxKind) -> Vec<SyntaxNode> {
    root.descendants().filter(|n| n.kind() == kind).collect()
}

/// The node of `kind` whose text is exactly `text`.
pub fn node_with_text(root: &SyntaxNode, kind: SyntaxKind, text: &str) -> SyntaxNode {
    root.descendants()
        .find(|n| n.kind() == kind && n.text() == text)
        .unwrap_or_else(|| panic!("no {kind:?} with text {text:?}"))
}

/// The single child of `node` in `role`.
pub fn child_in_role(node: &SyntaxNode, role: Role) -> SyntaxElement {
    node.find_child_by_role(role)
        .expect("consistent tree")
        .unwrap_or_else(|| panic!("{:?} has no {role:?} child", node.kind()))
}

/// Texts of all children of `node` in `role`.
pub fn role_texts(node: &SyntaxNode, role: Role) -> Vec<String> {
    node.find_children_by_role(role)
        .iter()
        .map(|element| match element {
            SyntaxElement::Node(n) => n.text().to_string(),
            SyntaxElement::Token(t) => t.text().to_string(),
        })
        .collect()
}

/// The edited text parses again without errors.
pub fn assert_reparses(tree: &SyntaxTree) {
    let text = tree.text();
    let parsed = parse(&text);
    assert!(
        parsed.ok(),
        "Edited text {:?} no longer parses: {:?}",
        text,
        parsed.errors
    );
}
