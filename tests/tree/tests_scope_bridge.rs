//! Declarations visible from a reference, walking up the tree.

use javelin::parser::{SyntaxKind, SyntaxNode};
use javelin::tree::{
    Binding, BindingKind, ResolveState, ScopeEvent, ScopeProcessor, resolve_name,
    visible_bindings, walk_up,
};

use crate::helpers::source_fixtures::*;
use crate::helpers::tree_helpers::*;

fn names(place: &SyntaxNode) -> Vec<String> {
    visible_bindings(place)
        .into_iter()
        .map(|b| b.name.to_string())
        .collect()
}

#[test]
fn test_foreach_variable_is_not_visible_in_iterated_value() {
    let tree = tree_from(FOREACH_OVER_ITEMS);
    let iterated = node_with_text(tree.root(), SyntaxKind::REFERENCE_EXPRESSION, "items");

    let visible = names(&iterated);

    assert!(!visible.contains(&"x".to_string()), "{visible:?}");
    assert!(visible.contains(&"items".to_string()), "{visible:?}");
}

#[test]
fn test_foreach_variable_is_visible_in_body() {
    let tree = tree_from(FOREACH_OVER_ITEMS);
    let use_of_x = node_with_text(tree.root(), SyntaxKind::REFERENCE_EXPRESSION, "x");

    let binding = resolve_name(&use_of_x, "x").expect("x is bound by the loop");

    assert_eq!(binding.kind, BindingKind::Parameter);
    assert_eq!(binding.declaration.kind(), SyntaxKind::PARAMETER);
    assert_eq!(binding.declaration.text().to_string(), "String x");
}

#[test]
fn test_locals_are_visible_only_after_their_declaration() {
    let tree = tree_from("class A { void m() { use(before); int late = 1; use(after); } }");
    let before = node_with_text(tree.root(), SyntaxKind::REFERENCE_EXPRESSION, "before");
    let after = node_with_text(tree.root(), SyntaxKind::REFERENCE_EXPRESSION, "after");

    assert!(resolve_name(&before, "late").is_none());
    let late = resolve_name(&after, "late").expect("declared earlier in the block");
    assert_eq!(late.kind, BindingKind::LocalVariable);
}

#[test]
fn test_inner_declaration_shadows_outer() {
    let tree = tree_from("class A { int v; void m(int v) { use(v); } }");
    let use_of_v = node_with_text(tree.root(), SyntaxKind::REFERENCE_EXPRESSION, "v");

    let binding = resolve_name(&use_of_v, "v").unwrap();

    assert_eq!(binding.kind, BindingKind::Parameter);
    let kinds: Vec<_> = visible_bindings(&use_of_v)
        .into_iter()
        .filter(|b| b.name == "v")
        .map(|b| b.kind)
        .collect();
    assert_eq!(kinds, vec![BindingKind::Parameter, BindingKind::Field]);
}

#[test]
fn test_unnamed_binders_bind_nothing() {
    let tree = tree_from(
        "class A { int m(Object o) { return switch (o) { case Box(_, Integer _) -> use(o); default -> 0; }; } }",
    );
    let rule = first_of_kind(tree.root(), SyntaxKind::SWITCH_LABELED_RULE);
    let use_of_o = node_with_text(&rule, SyntaxKind::REFERENCE_EXPRESSION, "o");

    let pattern_bindings = visible_bindings(&use_of_o)
        .into_iter()
        .filter(|b| b.kind == BindingKind::PatternVariable)
        .count();

    assert_eq!(pattern_bindings, 0);
    assert!(resolve_name(&use_of_o, "_").is_none());
}

#[test]
fn test_switch_rule_pattern_bindings_reach_the_body() {
    let tree = tree_from(PATTERNS_IN_SWITCH);
    let rule = first_of_kind(tree.root(), SyntaxKind::SWITCH_LABELED_RULE);
    let body_use = rule
        .children()
        .find(|n| n.kind() == SyntaxKind::EXPRESSION_STATEMENT)
        .and_then(|statement| statement.first_child())
        .expect("rule body expression");

    let binding = resolve_name(&body_use, "a").expect("a is bound by the record pattern");

    assert_eq!(binding.kind, BindingKind::PatternVariable);
    assert_eq!(binding.declaration.kind(), SyntaxKind::PATTERN_VARIABLE);
    assert_eq!(binding.declaration.text().to_string(), "Integer a");
}

#[test]
fn test_guard_sees_its_pattern_bindings() {
    let tree = tree_from(PATTERNS_IN_SWITCH);
    let guard = first_of_kind(tree.root(), SyntaxKind::GUARDED_PATTERN);
    let guard_use = node_with_text(&guard, SyntaxKind::REFERENCE_EXPRESSION, "a");

    let binding = resolve_name(&guard_use, "a").unwrap();

    assert_eq!(binding.kind, BindingKind::PatternVariable);
}

#[test]
fn test_pattern_bindings_do_not_leak_into_other_rules() {
    let tree = tree_from(PATTERNS_IN_SWITCH);
    let rules = all_of_kind(tree.root(), SyntaxKind::SWITCH_LABELED_RULE);
    let zero = first_of_kind(&rules[1], SyntaxKind::LITERAL_EXPRESSION);

    assert!(resolve_name(&zero, "a").is_none());
}

#[test]
fn test_instanceof_binding_flows_into_then_branch_and_right_operand() {
    let tree = tree_from(
        "class A { void m(Object o) { if (o instanceof String s && s.isEmpty()) { use(s); } else { use(o); } } }",
    );
    let branch_statement = first_of_kind(tree.root(), SyntaxKind::IF_STATEMENT);
    let in_condition = first_of_kind(&branch_statement, SyntaxKind::METHOD_CALL_EXPRESSION);
    let qualifier = node_with_text(&in_condition, SyntaxKind::REFERENCE_EXPRESSION, "s");
    let in_then = node_with_text(tree.root(), SyntaxKind::EXPRESSION_LIST, "(s)");
    let in_else = node_with_text(tree.root(), SyntaxKind::EXPRESSION_LIST, "(o)");

    assert!(resolve_name(&qualifier, "s").is_some());
    assert!(resolve_name(&in_then, "s").is_some());
    assert!(resolve_name(&in_else, "s").is_none());
}

#[test]
fn test_record_components_and_type_parameters_are_visible_in_members() {
    let tree = tree_from("record Box<T>(T value) { T get() { return value; } }");
    let value = node_with_text(tree.root(), SyntaxKind::REFERENCE_EXPRESSION, "value");

    let visible = visible_bindings(&value);

    assert!(visible
        .iter()
        .any(|b| b.name == "value" && b.kind == BindingKind::RecordComponent));
    assert!(visible
        .iter()
        .any(|b| b.name == "T" && b.kind == BindingKind::TypeParameter));
    assert!(visible
        .iter()
        .any(|b| b.name == "Box" && b.kind == BindingKind::Class));
}

/// Stops after a fixed number of bindings and records holder events
#[derive(Default)]
struct Limited {
    limit: usize,
    seen: Vec<Binding>,
    holders: Vec<SyntaxKind>,
}

impl ScopeProcessor for Limited {
    fn execute(&mut self, binding: &Binding, _state: &ResolveState) -> bool {
        self.seen.push(binding.clone());
        self.seen.len() < self.limit
    }

    fn handle_event(&mut self, event: ScopeEvent) {
        let ScopeEvent::DeclarationHolder(node) = event;
        self.holders.push(node.kind());
    }
}

#[test]
fn test_processor_can_stop_the_scan() {
    let tree = tree_from("class A { int f; void m(int p, int q) { use(p); } }");
    let use_of_p = node_with_text(tree.root(), SyntaxKind::REFERENCE_EXPRESSION, "p");
    let mut processor = Limited {
        limit: 1,
        ..Limited::default()
    };

    let completed = walk_up(&mut processor, &use_of_p, &ResolveState::default());

    assert!(!completed);
    assert_eq!(processor.seen.len(), 1);
    assert_eq!(processor.seen[0].name, "p");
}

#[test]
fn test_holders_are_reported_innermost_first() {
    let tree = tree_from("class A { void m(int p) { use(p); } }");
    let use_of_p = node_with_text(tree.root(), SyntaxKind::REFERENCE_EXPRESSION, "p");
    let mut processor = Limited {
        limit: usize::MAX,
        ..Limited::default()
    };

    assert!(walk_up(&mut processor, &use_of_p, &ResolveState::named("p")));

    assert_eq!(
        processor.holders,
        vec![
            SyntaxKind::CODE_BLOCK,
            SyntaxKind::METHOD,
            SyntaxKind::CLASS,
            SyntaxKind::JAVA_FILE
        ]
    );
    assert_eq!(processor.seen.len(), 1);
}
