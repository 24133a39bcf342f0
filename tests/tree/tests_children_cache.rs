//! Cached group lookups match uncached ones and follow edits.

use javelin::parser::{SyntaxElement, SyntaxKind, group};
use javelin::tree::{HasRoles, Role, SyntaxTree, TreeOptions};
use rstest::rstest;

use crate::helpers::source_fixtures::KITCHEN_SINK;
use crate::helpers::tree_helpers::*;

fn big_class(fields: usize) -> String {
    let body: String = (0..fields).map(|i| format!("int f{i}; ")).collect();
    format!("class Big {{ {body}void m() {{}} }}")
}

fn texts(elements: &[SyntaxElement]) -> Vec<String> {
    elements
        .iter()
        .map(|element| match element {
            SyntaxElement::Node(node) => node.text().to_string(),
            SyntaxElement::Token(token) => token.text().to_string(),
        })
        .collect()
}

#[rstest]
#[case::members("members")]
#[case::trivia("trivia")]
#[case::nodes("nodes")]
fn test_cached_and_uncached_results_agree(#[case] group_name: &str) {
    let source = big_class(20);
    let cached = SyntaxTree::parse(&source);
    let uncached = SyntaxTree::parse_with_options(&source, TreeOptions::uncached());
    let set = group(group_name);

    for (a, b) in cached.root().descendants().zip(uncached.root().descendants()) {
        let first = cached.find_children_by_group(&a, set);
        let second = cached.find_children_by_group(&a, set);
        let plain = uncached.find_children_by_group(&b, set);
        assert_eq!(first, second, "{:?}", a.kind());
        assert_eq!(texts(&first), texts(&plain), "{:?}", a.kind());
        assert_eq!(first, a.find_children_by_group(set));
    }
    assert_eq!(uncached.cached_entries(), 0);
}

#[test]
fn test_only_results_above_threshold_are_cached() {
    let tree = SyntaxTree::parse(&big_class(20));
    let class = first_of_kind(tree.root(), SyntaxKind::CLASS);
    let method = first_of_kind(tree.root(), SyntaxKind::METHOD);

    assert_eq!(tree.find_children_by_group(&class, group("members")).len(), 21);
    assert_eq!(tree.cached_entries(), 1);
    tree.find_children_by_group(&method, group("nodes"));
    assert_eq!(tree.cached_entries(), 1);
}

#[test]
fn test_threshold_is_configurable() {
    let options = TreeOptions {
        children_cache_threshold: 0,
        ..TreeOptions::default()
    };
    let tree = SyntaxTree::parse_with_options("class A { int a; }", options);
    let class = first_of_kind(tree.root(), SyntaxKind::CLASS);

    tree.find_children_by_group(&class, group("members"));

    assert_eq!(tree.cached_entries(), 1);
}

#[test]
fn test_edit_invalidates_cached_children() {
    let tree = SyntaxTree::parse(&big_class(12));
    let class = first_of_kind(tree.root(), SyntaxKind::CLASS);
    let members = group("members");
    let before = tree.find_children_by_group(&class, members);
    assert_eq!(before.len(), 13);
    let generation = tree.generation();

    tree.delete_child(&class, &before[0]).unwrap();

    assert_eq!(tree.generation(), generation + 1);
    assert_eq!(tree.cached_entries(), 0);
    let after = tree.find_children_by_group(&class, members);
    assert_eq!(after.len(), 12);
    assert_eq!(after, class.find_children_by_group(members));
    assert!(!after.contains(&before[0]));
}

#[test]
fn test_rejected_edit_keeps_cache() {
    let tree = tree_from(KITCHEN_SINK);
    let class = first_of_kind(tree.root(), SyntaxKind::CLASS);
    let options = TreeOptions {
        children_cache_threshold: 1,
        ..TreeOptions::default()
    };
    let cached = SyntaxTree::parse_with_options(KITCHEN_SINK, options);
    let cached_class = first_of_kind(cached.root(), SyntaxKind::CLASS);
    cached.find_children_by_group(&cached_class, group("members"));
    assert_eq!(cached.cached_entries(), 1);

    let modifiers = child_in_role(&cached_class, Role::ModifierList);
    let result = cached.add_list_element(modifiers.as_node().unwrap(), class.clone(), None);

    assert!(result.is_err());
    assert_eq!(cached.cached_entries(), 1);
    assert_eq!(cached.generation(), 0);
}
