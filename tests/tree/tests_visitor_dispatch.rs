//! Every node kind reaches exactly one handler.

use javelin::parser::{GreenNode, SyntaxElement, SyntaxKind, SyntaxNode, kind_set};
use javelin::tree::visitor::handler_name;
use javelin::tree::{Accept, Visitor, walk};
use rowan::{GreenToken, NodeOrToken};

use crate::helpers::source_fixtures::KITCHEN_SINK;
use crate::helpers::tree_helpers::tree_from;

fn empty_node(kind: SyntaxKind) -> SyntaxNode {
    let children: Vec<NodeOrToken<GreenNode, GreenToken>> = Vec::new();
    SyntaxNode::new_root(GreenNode::new(kind.into(), children))
}

#[derive(Default)]
struct FallbackOnly {
    fallback: usize,
}

impl Visitor for FallbackOnly {
    fn visit_element(&mut self, _element: &SyntaxElement) {
        self.fallback += 1;
    }
}

#[test]
fn test_fallback_fires_once_per_node_kind() {
    for kind in kind_set::NODES.iter() {
        let mut visitor = FallbackOnly::default();
        empty_node(kind).accept(&mut visitor);
        assert_eq!(visitor.fallback, 1, "{kind:?}");
    }
}

#[test]
fn test_node_with_unhandled_kind_falls_back_to_element() {
    let stray = empty_node(SyntaxKind::IDENT);
    assert_eq!(handler_name(SyntaxKind::IDENT), None);

    let mut visitor = FallbackOnly::default();
    stray.accept(&mut visitor);

    assert_eq!(visitor.fallback, 1);
}

#[test]
fn test_every_node_kind_has_a_handler() {
    for kind in kind_set::NODES.iter() {
        assert!(handler_name(kind).is_some(), "{kind:?}");
    }
    assert_eq!(handler_name(SyntaxKind::IDENT), None);
}

macro_rules! recording_visitor {
    ($($method:ident),* $(,)?) => {
        #[derive(Default)]
        struct Recorder {
            calls: Vec<&'static str>,
            fallback: usize,
        }

        impl Visitor for Recorder {
            fn visit_element(&mut self, _element: &SyntaxElement) {
                self.fallback += 1;
            }
            $(
                fn $method(&mut self, _node: &SyntaxNode) {
                    self.calls.push(stringify!($method));
                }
            )*
        }
    };
}

recording_visitor!(
    visit_java_file,
    visit_dummy_holder,
    visit_package_statement,
    visit_import_list,
    visit_import_statement,
    visit_import_static_statement,
    visit_code_reference,
    visit_modifier_list,
    visit_annotation,
    visit_annotation_parameter_list,
    visit_name_value_pair,
    visit_class,
    visit_class_initializer,
    visit_extends_list,
    visit_implements_list,
    visit_throws_list,
    visit_type_parameter_list,
    visit_type_parameter,
    visit_extends_bound_list,
    visit_reference_parameter_list,
    visit_type_element,
    visit_field,
    visit_method,
    visit_annotation_method,
    visit_parameter_list,
    visit_parameter,
    visit_record_header,
    visit_record_component,
    visit_local_variable,
    visit_code_block,
    visit_block_statement,
    visit_empty_statement,
    visit_expression_statement,
    visit_declaration_statement,
    visit_if_statement,
    visit_while_statement,
    visit_do_while_statement,
    visit_for_statement,
    visit_foreach_statement,
    visit_return_statement,
    visit_yield_statement,
    visit_break_statement,
    visit_continue_statement,
    visit_throw_statement,
    visit_switch_statement,
    visit_switch_label_statement,
    visit_switch_labeled_rule,
    visit_case_label_element_list,
    visit_default_case_label_element,
    visit_expression_list,
    visit_reference_expression,
    visit_literal_expression,
    visit_this_expression,
    visit_parenthesized_expression,
    visit_binary_expression,
    visit_prefix_expression,
    visit_postfix_expression,
    visit_type_cast_expression,
    visit_conditional_expression,
    visit_assignment_expression,
    visit_method_call_expression,
    visit_new_expression,
    visit_array_access_expression,
    visit_instance_of_expression,
    visit_switch_expression,
    visit_type_test_pattern,
    visit_pattern_variable,
    visit_record_pattern,
    visit_deconstruction_list,
    visit_parenthesized_pattern,
    visit_unnamed_pattern,
    visit_guarded_pattern,
    visit_error_element,
);

#[test]
fn test_specific_handler_wins_over_fallback() {
    for kind in kind_set::NODES.iter() {
        let mut visitor = Recorder::default();
        empty_node(kind).accept(&mut visitor);
        assert_eq!(visitor.calls, vec![handler_name(kind).unwrap()], "{kind:?}");
        assert_eq!(visitor.fallback, 0, "{kind:?}");
    }
}

#[test]
fn test_walk_visits_nodes_in_preorder() {
    let tree = tree_from(KITCHEN_SINK);
    let mut visitor = Recorder::default();
    walk(tree.root(), &mut visitor);

    let expected: Vec<&str> = tree
        .root()
        .descendants()
        .filter_map(|node| handler_name(node.kind()))
        .collect();
    assert_eq!(visitor.calls, expected);
    assert_eq!(visitor.calls[0], "visit_java_file");
    // every token falls through to the fallback
    let tokens = tree.root().descendants_with_tokens().filter(|e| e.as_token().is_some()).count();
    assert_eq!(visitor.fallback, tokens);
}

#[derive(Default)]
struct LoopCounter {
    loops: usize,
    statements: usize,
}

impl Visitor for LoopCounter {
    fn visit_loop_statement(&mut self, node: &SyntaxNode) {
        self.loops += 1;
        self.visit_statement(node);
    }

    fn visit_statement(&mut self, _node: &SyntaxNode) {
        self.statements += 1;
    }
}

#[test]
fn test_category_fallbacks_chain() {
    let tree = tree_from(KITCHEN_SINK);
    let mut visitor = LoopCounter::default();
    walk(tree.root(), &mut visitor);

    let loops = tree
        .root()
        .descendants()
        .filter(|n| kind_set::LOOPS.contains(n.kind()))
        .count();
    let statements = tree
        .root()
        .descendants()
        .filter(|n| kind_set::STATEMENTS.contains(n.kind()))
        .count();
    assert_eq!(visitor.loops, loops);
    assert_eq!(loops, 4);
    assert_eq!(visitor.statements, statements);
}
