//! Role lookup over parsed and constructed trees.

use javelin::parser::{SyntaxElement, SyntaxKind, SyntaxNode};
use javelin::tree::factory::{attach_child, construct, expression, token, type_element, whitespace};
use javelin::tree::{ConsistencyFault, HasRoles, Role, schema_of};
use rstest::rstest;

use crate::helpers::source_fixtures::*;
use crate::helpers::tree_helpers::*;

fn assert_roles_round_trip(root: &SyntaxNode) {
    for node in root.descendants() {
        if schema_of(node.kind()).is_none() {
            continue;
        }
        for child in node.children_with_tokens() {
            let Some(role) = node.role_of(&child).expect("child of its parent") else {
                continue;
            };
            if role.is_unique() {
                let found = node.find_child_by_role(role).expect("unique role holds once");
                assert_eq!(found.as_ref(), Some(&child), "{:?} {:?}", node.kind(), role);
            } else {
                assert!(node.find_children_by_role(role).contains(&child));
            }
        }
    }
}

#[rstest]
#[case::loops(WHILE_WITH_BODY)]
#[case::branches(IF_ELSE)]
#[case::foreach(FOREACH_OVER_ITEMS)]
#[case::patterns(PATTERNS_IN_SWITCH)]
#[case::kitchen_sink(KITCHEN_SINK)]
fn test_unique_roles_round_trip(#[case] source: &str) {
    let tree = tree_from(source);
    assert_roles_round_trip(tree.root());
}

#[test]
fn test_sections_separate_same_kind_children() {
    let tree = tree_from("class A { int m(boolean c) { return c ? 1 : 2; } }");
    let conditional = first_of_kind(tree.root(), SyntaxKind::CONDITIONAL_EXPRESSION);
    assert_eq!(role_texts(&conditional, Role::Condition), vec!["c"]);
    assert_eq!(role_texts(&conditional, Role::ThenExpression), vec!["1"]);
    assert_eq!(role_texts(&conditional, Role::ElseExpression), vec!["2"]);
}

#[test]
fn test_foreach_roles() {
    let tree = tree_from(FOREACH_OVER_ITEMS);
    let foreach = first_of_kind(tree.root(), SyntaxKind::FOREACH_STATEMENT);
    assert_eq!(role_texts(&foreach, Role::IterationParameter), vec!["String x"]);
    assert_eq!(role_texts(&foreach, Role::IteratedValue), vec!["items"]);
    assert_eq!(
        child_in_role(&foreach, Role::LoopBody).kind(),
        SyntaxKind::BLOCK_STATEMENT
    );
}

#[test]
fn test_role_of_a_grandchild_is_a_fault() {
    let tree = tree_from(PRODUCT_FIELD);
    let field = first_of_kind(tree.root(), SyntaxKind::FIELD);
    let operand = node_with_text(tree.root(), SyntaxKind::REFERENCE_EXPRESSION, "a");
    let result = field.role_of(&operand.into());
    assert!(matches!(result, Err(ConsistencyFault::NotAChild { .. })));
}

/// Attach `children` to a fresh `kind` node in the order given by `order`
fn build(kind: SyntaxKind, children: &[SyntaxElement], order: &[usize]) -> SyntaxNode {
    let node = construct(kind).unwrap();
    for &index in order {
        attach_child(&node, children[index].clone());
    }
    node
}

#[rstest]
#[case(&[0, 1, 2])]
#[case(&[0, 2, 1])]
#[case(&[1, 0, 2])]
#[case(&[1, 2, 0])]
#[case(&[2, 0, 1])]
#[case(&[2, 1, 0])]
fn test_construct_and_attach_in_any_order(#[case] order: &[usize]) {
    let modifiers = construct(SyntaxKind::MODIFIER_LIST).unwrap();
    attach_child(&modifiers, token(SyntaxKind::FINAL_KW, "final"));
    let declared_type = type_element("int").unwrap();
    let name = token(SyntaxKind::IDENT, "count");
    let children: Vec<SyntaxElement> = vec![
        modifiers.clone().into(),
        declared_type.clone().into(),
        name.clone().into(),
    ];

    let parameter = build(SyntaxKind::PARAMETER, &children, order);

    assert_eq!(
        parameter.child_node_by_role(Role::ModifierList).unwrap(),
        Some(modifiers)
    );
    assert_eq!(
        parameter.child_node_by_role(Role::Type).unwrap(),
        Some(declared_type)
    );
    let attached_name = parameter.child_token_by_role(Role::Name).unwrap().unwrap();
    assert_eq!(attached_name.text(), name.text());
    let words = ["final", "int", "count"];
    let expected: String = order.iter().map(|&i| words[i]).collect();
    assert_eq!(parameter.text().to_string(), expected);
}

#[test]
fn test_constructed_statement_matches_parsed_roles() {
    let statement = construct(SyntaxKind::RETURN_STATEMENT).unwrap();
    let value = expression("a + b").unwrap();
    attach_child(&statement, token(SyntaxKind::RETURN_KW, "return"));
    attach_child(&statement, whitespace(" "));
    attach_child(&statement, value.clone());
    attach_child(&statement, token(SyntaxKind::SEMICOLON, ";"));

    assert_eq!(statement.text().to_string(), "return a + b;");
    assert_eq!(
        statement.child_node_by_role(Role::ReturnValue).unwrap(),
        Some(value)
    );
    assert_eq!(
        statement.child_token_by_role(Role::Semicolon).unwrap().map(|t| t.kind()),
        Some(SyntaxKind::SEMICOLON)
    );
    assert_roles_round_trip(&statement);
}

#[test]
fn test_duplicate_unique_role_is_a_fault() {
    let statement = construct(SyntaxKind::RETURN_STATEMENT).unwrap();
    attach_child(&statement, token(SyntaxKind::RETURN_KW, "return"));
    attach_child(&statement, expression("a").unwrap());
    attach_child(&statement, expression("b").unwrap());

    let result = statement.find_child_by_role(Role::ReturnValue);
    assert!(matches!(
        result,
        Err(ConsistencyFault::DuplicateRole { count: 2, .. })
    ));
}

#[test]
fn test_missing_required_child_is_a_fault() {
    let binary = construct(SyntaxKind::BINARY_EXPRESSION).unwrap();
    let result = binary.required_child_by_role(Role::LOperand);
    assert!(matches!(
        result,
        Err(ConsistencyFault::MissingRequiredChild { .. })
    ));
}
