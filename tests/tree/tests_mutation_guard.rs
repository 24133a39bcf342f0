//! Edits through an edit session keep the tree grammatical.

use javelin::parser::{SyntaxElement, SyntaxKind};
use javelin::tree::factory::{expression, statement};
use javelin::tree::{ConsistencyFault, HasRoles, MutationError, Role};
use rstest::rstest;

use crate::helpers::source_fixtures::*;
use crate::helpers::tree_helpers::*;

#[rstest]
#[case::looser_operand_is_wrapped("c + d", "class A { int v = a * (c + d); }")]
#[case::tighter_operand_is_not("c.d", "class A { int v = a * c.d; }")]
#[case::same_associative_operator("c * d", "class A { int v = a * c * d; }")]
#[case::literal("1", "class A { int v = a * 1; }")]
fn test_replace_right_operand(#[case] replacement: &str, #[case] expected: &str) {
    let tree = tree_from(PRODUCT_FIELD);
    let product = first_of_kind(tree.root(), SyntaxKind::BINARY_EXPRESSION);
    let rhs = child_in_role(&product, Role::ROperand);

    tree.replace_child(&product, &rhs, expression(replacement).unwrap())
        .unwrap();

    assert_eq!(tree.text(), expected);
}

#[test]
fn test_same_precedence_left_operand_needs_no_parentheses() {
    let tree = tree_from(PRODUCT_FIELD);
    let product = first_of_kind(tree.root(), SyntaxKind::BINARY_EXPRESSION);
    let lhs = child_in_role(&product, Role::LOperand);

    let inserted = tree
        .replace_child(&product, &lhs, expression("c * d").unwrap())
        .unwrap();

    assert_eq!(inserted.kind(), SyntaxKind::BINARY_EXPRESSION);
    assert_eq!(tree.text(), "class A { int v = c * d * b; }");
}

#[test]
fn test_replaced_operand_keeps_its_role() {
    let tree = tree_from(PRODUCT_FIELD);
    let product = first_of_kind(tree.root(), SyntaxKind::BINARY_EXPRESSION);
    let rhs = child_in_role(&product, Role::ROperand);

    let inserted = tree
        .replace_child(&product, &rhs, expression("c + d").unwrap())
        .unwrap();

    assert_eq!(inserted.kind(), SyntaxKind::PARENTH_EXPRESSION);
    assert_eq!(product.role_of(&inserted).unwrap(), Some(Role::ROperand));
}

#[rstest]
#[case::first("x", "f(y, z)")]
#[case::middle("y", "f(x, z)")]
#[case::last("z", "f(x, y)")]
fn test_delete_call_argument(#[case] argument: &str, #[case] expected_call: &str) {
    let tree = tree_from(CALL_WITH_THREE_ARGUMENTS);
    let call = first_of_kind(tree.root(), SyntaxKind::METHOD_CALL_EXPRESSION);
    let list = first_of_kind(&call, SyntaxKind::EXPRESSION_LIST);
    let target = node_with_text(&list, SyntaxKind::REFERENCE_EXPRESSION, argument);

    tree.delete_child(&list, &target.into()).unwrap();

    assert_eq!(call.text().to_string(), expected_call);
    assert_eq!(list.find_children_by_role(Role::ListElement).len(), 2);
}

#[test]
fn test_delete_every_argument_leaves_empty_parentheses() {
    let tree = tree_from(CALL_WITH_THREE_ARGUMENTS);
    let list = first_of_kind(tree.root(), SyntaxKind::EXPRESSION_LIST);

    for _ in 0..3 {
        let first = list.find_children_by_role(Role::ListElement)[0].clone();
        tree.delete_child(&list, &first).unwrap();
    }

    assert_eq!(list.text().to_string(), "()");
}

#[test]
fn test_delete_record_component() {
    let tree = tree_from(RECORD_POINT);
    let header = first_of_kind(tree.root(), SyntaxKind::RECORD_HEADER);
    let y = header.child_nodes_by_role(Role::RecordComponent)[1].clone();

    tree.delete_child(&header, &y.into()).unwrap();

    assert_eq!(tree.text(), "record Point(int x, int z) {}");
}

#[rstest]
#[case::while_loop(WHILE_WITH_BODY, SyntaxKind::WHILE_STATEMENT, "while (cond) {}")]
#[case::do_while(
    "class A { void m() { do step(); while (c); } }",
    SyntaxKind::DO_WHILE_STATEMENT,
    "do {} while (c);"
)]
#[case::for_loop(
    "class A { void m() { for (;;) step(); } }",
    SyntaxKind::FOR_STATEMENT,
    "for (;;) {}"
)]
#[case::foreach(
    "class A { void m(int[] xs) { for (int x : xs) use(x); } }",
    SyntaxKind::FOREACH_STATEMENT,
    "for (int x : xs) {}"
)]
fn test_delete_loop_body_substitutes_empty_block(
    #[case] source: &str,
    #[case] loop_kind: SyntaxKind,
    #[case] expected_loop: &str,
) {
    let tree = tree_from(source);
    let loop_statement = first_of_kind(tree.root(), loop_kind);
    let body = child_in_role(&loop_statement, Role::LoopBody);

    tree.delete_child(&loop_statement, &body).unwrap();

    assert_eq!(loop_statement.text().to_string(), expected_loop);
    let substitute = child_in_role(&loop_statement, Role::LoopBody);
    assert_eq!(substitute.kind(), SyntaxKind::BLOCK_STATEMENT);
    assert_reparses(&tree);
}

#[test]
fn test_delete_then_branch_substitutes_empty_block() {
    let tree = tree_from(IF_ELSE);
    let branch_statement = first_of_kind(tree.root(), SyntaxKind::IF_STATEMENT);
    let then_branch = child_in_role(&branch_statement, Role::ThenBranch);

    tree.delete_child(&branch_statement, &then_branch).unwrap();

    assert_eq!(
        branch_statement.text().to_string(),
        "if (ok) {} else { stop(); }"
    );
}

#[test]
fn test_delete_else_branch_takes_keyword_along() {
    let tree = tree_from(IF_ELSE);
    let branch_statement = first_of_kind(tree.root(), SyntaxKind::IF_STATEMENT);
    let else_branch = child_in_role(&branch_statement, Role::ElseBranch);

    tree.delete_child(&branch_statement, &else_branch).unwrap();

    assert_eq!(branch_statement.text().to_string(), "if (ok) { run(); }");
    assert!(
        branch_statement
            .find_child_by_role(Role::ElseKeyword)
            .unwrap()
            .is_none()
    );
}

#[rstest]
#[case::after_first(Some(0), "f(x, w, y, z)")]
#[case::after_last(Some(2), "f(x, y, z, w)")]
#[case::at_front(None, "f(w, x, y, z)")]
fn test_add_argument(#[case] anchor: Option<usize>, #[case] expected_call: &str) {
    let tree = tree_from(CALL_WITH_THREE_ARGUMENTS);
    let call = first_of_kind(tree.root(), SyntaxKind::METHOD_CALL_EXPRESSION);
    let list = first_of_kind(&call, SyntaxKind::EXPRESSION_LIST);
    let arguments = list.find_children_by_role(Role::ListElement);
    let anchor: Option<SyntaxElement> = anchor.map(|i| arguments[i].clone());

    tree.add_list_element(&list, expression("w").unwrap(), anchor.as_ref())
        .unwrap();

    assert_eq!(call.text().to_string(), expected_call);
    assert_eq!(list.find_children_by_role(Role::ListElement).len(), 4);
}

#[test]
fn test_add_argument_to_empty_list() {
    let tree = tree_from("class A { void m() { g(); } }");
    let list = first_of_kind(tree.root(), SyntaxKind::EXPRESSION_LIST);

    tree.add_list_element(&list, expression("w").unwrap(), None)
        .unwrap();

    assert_eq!(list.text().to_string(), "(w)");
}

#[test]
fn test_replace_with_wrong_kind_is_rejected() {
    let tree = tree_from(WHILE_WITH_BODY);
    let while_loop = first_of_kind(tree.root(), SyntaxKind::WHILE_STATEMENT);
    let body = child_in_role(&while_loop, Role::LoopBody);
    let before = tree.text();

    let result = tree.replace_child(&while_loop, &body, expression("x").unwrap());

    assert!(matches!(
        result,
        Err(MutationError::RoleMismatch {
            role: Role::LoopBody,
            found: SyntaxKind::REFERENCE_EXPRESSION,
            ..
        })
    ));
    assert_eq!(tree.text(), before);
}

#[test]
fn test_replace_statement_keeps_role() {
    let tree = tree_from(WHILE_WITH_BODY);
    let while_loop = first_of_kind(tree.root(), SyntaxKind::WHILE_STATEMENT);
    let body = child_in_role(&while_loop, Role::LoopBody);

    tree.replace_child(&while_loop, &body, statement("step();").unwrap())
        .unwrap();

    assert_eq!(while_loop.text().to_string(), "while (cond) step();");
    assert_eq!(
        child_in_role(&while_loop, Role::LoopBody).kind(),
        SyntaxKind::EXPRESSION_STATEMENT
    );
}

#[test]
fn test_insert_into_non_list_is_rejected() {
    let tree = tree_from(WHILE_WITH_BODY);
    let while_loop = first_of_kind(tree.root(), SyntaxKind::WHILE_STATEMENT);

    let result = tree.add_list_element(&while_loop, expression("x").unwrap(), None);

    assert!(matches!(
        result,
        Err(MutationError::NotAList(SyntaxKind::WHILE_STATEMENT))
    ));
}

#[test]
fn test_edits_from_another_tree_are_rejected() {
    let tree = tree_from(WHILE_WITH_BODY);
    let other = tree_from(WHILE_WITH_BODY);
    let foreign_loop = first_of_kind(other.root(), SyntaxKind::WHILE_STATEMENT);
    let body = child_in_role(&foreign_loop, Role::LoopBody);

    let result = tree.delete_child(&foreign_loop, &body);

    assert!(matches!(result, Err(MutationError::Fault(_))));
    assert_eq!(other.text(), WHILE_WITH_BODY);
}

#[rstest]
#[case::signed_operand_of_reference_cast("class A { Object v = (Integer) a; }", "-b", "(Integer) (-b)")]
#[case::incremented_operand_of_reference_cast("class A { Object v = (Integer) a; }", "++b", "(Integer) (++b)")]
#[case::negated_operand_of_reference_cast("class A { Object v = (Integer) a; }", "!b", "(Integer) !b")]
#[case::signed_operand_of_primitive_cast("class A { int v = (int) a; }", "-b", "(int) -b")]
#[case::binary_operand_of_cast("class A { int v = (int) a; }", "b * c", "(int) (b * c)")]
#[case::cast_operand_of_cast("class A { int v = (int) a; }", "(long) b", "(int) (long) b")]
fn test_replace_cast_operand(
    #[case] source: &str,
    #[case] replacement: &str,
    #[case] expected_cast: &str,
) {
    let tree = tree_from(source);
    let cast = first_of_kind(tree.root(), SyntaxKind::TYPE_CAST_EXPRESSION);
    let operand = child_in_role(&cast, Role::Operand);

    tree.replace_child(&cast, &operand, expression(replacement).unwrap())
        .unwrap();

    assert_eq!(cast.text().to_string(), expected_cast);
    let reparsed = tree_from(&tree.text());
    let field = first_of_kind(reparsed.root(), SyntaxKind::FIELD);
    assert_eq!(
        child_in_role(&field, Role::Initializer).kind(),
        SyntaxKind::TYPE_CAST_EXPRESSION
    );
}

#[rstest]
#[case::cast_needs_no_parentheses("(int) x", "-(int) x")]
#[case::postfix_needs_no_parentheses("x++", "-x++")]
#[case::same_sign_would_fuse("-x", "-(-x)")]
#[case::binary_is_wrapped("x - y", "-(x - y)")]
fn test_replace_prefix_operand(#[case] replacement: &str, #[case] expected_prefix: &str) {
    let tree = tree_from("class A { int v = -a; }");
    let prefix = first_of_kind(tree.root(), SyntaxKind::PREFIX_EXPRESSION);
    let operand = child_in_role(&prefix, Role::Operand);

    tree.replace_child(&prefix, &operand, expression(replacement).unwrap())
        .unwrap();

    assert_eq!(prefix.text().to_string(), expected_prefix);
    assert_reparses(&tree);
}

#[test]
fn test_delete_first_case_label_element() {
    let tree = tree_from(SWITCH_WITH_CASE_LIST);
    let list = first_of_kind(tree.root(), SyntaxKind::CASE_LABEL_ELEMENT_LIST);
    let first = list.find_children_by_role(Role::CaseLabelElement)[0].clone();

    tree.delete_child(&list, &first).unwrap();

    let label = first_of_kind(tree.root(), SyntaxKind::SWITCH_LABEL_STATEMENT);
    assert_eq!(label.text().to_string(), "case 2, 3:");
    assert_eq!(role_texts(&list, Role::CaseLabelElement), vec!["2", "3"]);
    assert_reparses(&tree);
}

#[rstest]
#[case::first(0, "final int b = 2;")]
#[case::last(1, "final int a = 1;")]
fn test_delete_one_of_two_declared_variables(
    #[case] index: usize,
    #[case] expected_declaration: &str,
) {
    let tree = tree_from("class A { void m() { final int a = 1, b = 2; use(b); } }");
    let declaration = first_of_kind(tree.root(), SyntaxKind::DECLARATION_STATEMENT);
    let variable = declaration.child_nodes_by_role(Role::Variable)[index].clone();

    tree.delete_child(&declaration, &variable.into()).unwrap();

    assert_eq!(declaration.text().to_string(), expected_declaration);
    let remaining = declaration.child_nodes_by_role(Role::Variable);
    assert_eq!(remaining.len(), 1);
    assert_eq!(role_texts(&remaining[0], Role::Type), vec!["int"]);
    assert_eq!(role_texts(&remaining[0], Role::ModifierList), vec!["final"]);
    assert_reparses(&tree);
}

#[test]
fn test_delete_only_declared_variable_removes_statement() {
    let tree = tree_from("class A { void m() { int a = 1; use(x); } }");
    let declaration = first_of_kind(tree.root(), SyntaxKind::DECLARATION_STATEMENT);
    let variable = child_in_role(&declaration, Role::Variable);

    tree.delete_child(&declaration, &variable).unwrap();

    assert!(all_of_kind(tree.root(), SyntaxKind::DECLARATION_STATEMENT).is_empty());
    assert!(!tree.text().contains("int a"), "{}", tree.text());
    assert_reparses(&tree);
}

#[rstest]
#[case::declaration("class A { void m(int n) { for (int i = 0; i < n; i++) step(); } }")]
#[case::expressions("class A { void m(int n) { for (i = 0, j = 1; i < n; i++) step(); } }")]
fn test_delete_for_initialization_leaves_empty_statement(#[case] source: &str) {
    let tree = tree_from(source);
    let for_loop = first_of_kind(tree.root(), SyntaxKind::FOR_STATEMENT);
    let init = child_in_role(&for_loop, Role::ForInitialization);

    tree.delete_child(&for_loop, &init).unwrap();

    assert_eq!(for_loop.text().to_string(), "for (; i < n; i++) step();");
    assert_eq!(
        child_in_role(&for_loop, Role::ForInitialization).kind(),
        SyntaxKind::EMPTY_STATEMENT
    );
    assert_reparses(&tree);
}

#[test]
fn test_delete_only_variable_of_for_initialization() {
    let tree = tree_from("class A { void m(int n) { for (int i = 0; i < n; i++) step(); } }");
    let declaration = first_of_kind(tree.root(), SyntaxKind::DECLARATION_STATEMENT);
    let variable = child_in_role(&declaration, Role::Variable);

    tree.delete_child(&declaration, &variable).unwrap();

    let for_loop = first_of_kind(tree.root(), SyntaxKind::FOR_STATEMENT);
    assert_eq!(for_loop.text().to_string(), "for (; i < n; i++) step();");
    assert_reparses(&tree);
}

#[rstest]
#[case::the_parent_itself(SyntaxKind::BINARY_EXPRESSION)]
#[case::an_outer_ancestor(SyntaxKind::FIELD)]
fn test_replace_with_own_ancestor_is_rejected(#[case] ancestor_kind: SyntaxKind) {
    let tree = tree_from(PRODUCT_FIELD);
    let product = first_of_kind(tree.root(), SyntaxKind::BINARY_EXPRESSION);
    let rhs = child_in_role(&product, Role::ROperand);
    let ancestor = first_of_kind(tree.root(), ancestor_kind);
    let generation = tree.generation();

    let result = tree.replace_child(&product, &rhs, ancestor);

    assert!(matches!(
        result,
        Err(MutationError::Fault(ConsistencyFault::SelfContainment { .. }))
    ));
    assert_eq!(tree.text(), PRODUCT_FIELD);
    assert_eq!(tree.generation(), generation);
}
