//! Double-dispatch visitors over the CST
//!
//! Every node kind has one `visit_*` method on [`Visitor`]. Each defaults
//! to its category (`visit_statement`, `visit_expression`, ...) and every
//! category ends in [`Visitor::visit_element`], so a visitor only
//! overrides what it cares about. [`Accept::accept`] picks the method with
//! an exhaustive match on the kind.

use rowan::NodeOrToken;

use crate::parser::{SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken, kind_set};

macro_rules! node_visitor {
    ($( $kind:ident => $method:ident => $category:ident ),* $(,)?) => {
        /// Kind-specific handlers with category fallbacks
        pub trait Visitor {
            /// Fallback for everything not handled more specifically
            fn visit_element(&mut self, _element: &SyntaxElement) {}

            // Node categories
            fn visit_file(&mut self, node: &SyntaxNode) {
                self.visit_element(&node.clone().into())
            }
            fn visit_statement(&mut self, node: &SyntaxNode) {
                self.visit_element(&node.clone().into())
            }
            fn visit_loop_statement(&mut self, node: &SyntaxNode) {
                self.visit_statement(node)
            }
            fn visit_expression(&mut self, node: &SyntaxNode) {
                self.visit_element(&node.clone().into())
            }
            fn visit_pattern(&mut self, node: &SyntaxNode) {
                self.visit_element(&node.clone().into())
            }
            fn visit_member(&mut self, node: &SyntaxNode) {
                self.visit_element(&node.clone().into())
            }
            fn visit_variable(&mut self, node: &SyntaxNode) {
                self.visit_element(&node.clone().into())
            }
            fn visit_reference_list(&mut self, node: &SyntaxNode) {
                self.visit_element(&node.clone().into())
            }
            fn visit_node(&mut self, node: &SyntaxNode) {
                self.visit_element(&node.clone().into())
            }

            // Token categories
            fn visit_identifier(&mut self, token: &SyntaxToken) {
                self.visit_element(&token.clone().into())
            }
            fn visit_keyword(&mut self, token: &SyntaxToken) {
                self.visit_element(&token.clone().into())
            }
            fn visit_literal_token(&mut self, token: &SyntaxToken) {
                self.visit_element(&token.clone().into())
            }
            fn visit_java_token(&mut self, token: &SyntaxToken) {
                self.visit_element(&token.clone().into())
            }
            fn visit_comment(&mut self, token: &SyntaxToken) {
                self.visit_element(&token.clone().into())
            }
            fn visit_whitespace(&mut self, token: &SyntaxToken) {
                self.visit_element(&token.clone().into())
            }
            fn visit_bad_character(&mut self, token: &SyntaxToken) {
                self.visit_element(&token.clone().into())
            }

            // Node kinds
            $(
                fn $method(&mut self, node: &SyntaxNode) {
                    self.$category(node)
                }
            )*
        }

        fn dispatch_node<V: Visitor + ?Sized>(node: &SyntaxNode, visitor: &mut V) {
            match node.kind() {
                $( SyntaxKind::$kind => visitor.$method(node), )*
                kind => {
                    tracing::trace!("no handler for node kind {:?}, visiting as element", kind);
                    visitor.visit_element(&node.clone().into())
                }
            }
        }

        /// Name of the kind-specific handler `accept` calls for a node kind
        pub fn handler_name(kind: SyntaxKind) -> Option<&'static str> {
            match kind {
                $( SyntaxKind::$kind => Some(stringify!($method)), )*
                _ => None,
            }
        }
    };
}

node_visitor! {
    JAVA_FILE => visit_java_file => visit_file,
    DUMMY_HOLDER => visit_dummy_holder => visit_node,
    PACKAGE_STATEMENT => visit_package_statement => visit_node,
    IMPORT_LIST => visit_import_list => visit_node,
    IMPORT_STATEMENT => visit_import_statement => visit_node,
    IMPORT_STATIC_STATEMENT => visit_import_static_statement => visit_node,
    JAVA_CODE_REFERENCE => visit_code_reference => visit_node,
    MODIFIER_LIST => visit_modifier_list => visit_node,
    ANNOTATION => visit_annotation => visit_node,
    ANNOTATION_PARAMETER_LIST => visit_annotation_parameter_list => visit_node,
    NAME_VALUE_PAIR => visit_name_value_pair => visit_node,
    CLASS => visit_class => visit_member,
    CLASS_INITIALIZER => visit_class_initializer => visit_member,
    EXTENDS_LIST => visit_extends_list => visit_reference_list,
    IMPLEMENTS_LIST => visit_implements_list => visit_reference_list,
    THROWS_LIST => visit_throws_list => visit_reference_list,
    TYPE_PARAMETER_LIST => visit_type_parameter_list => visit_node,
    TYPE_PARAMETER => visit_type_parameter => visit_node,
    EXTENDS_BOUND_LIST => visit_extends_bound_list => visit_reference_list,
    REFERENCE_PARAMETER_LIST => visit_reference_parameter_list => visit_node,
    TYPE => visit_type_element => visit_node,
    FIELD => visit_field => visit_member,
    METHOD => visit_method => visit_member,
    ANNOTATION_METHOD => visit_annotation_method => visit_method,
    PARAMETER_LIST => visit_parameter_list => visit_node,
    PARAMETER => visit_parameter => visit_variable,
    RECORD_HEADER => visit_record_header => visit_node,
    RECORD_COMPONENT => visit_record_component => visit_variable,
    LOCAL_VARIABLE => visit_local_variable => visit_variable,
    CODE_BLOCK => visit_code_block => visit_node,
    BLOCK_STATEMENT => visit_block_statement => visit_statement,
    EMPTY_STATEMENT => visit_empty_statement => visit_statement,
    EXPRESSION_STATEMENT => visit_expression_statement => visit_statement,
    DECLARATION_STATEMENT => visit_declaration_statement => visit_statement,
    IF_STATEMENT => visit_if_statement => visit_statement,
    WHILE_STATEMENT => visit_while_statement => visit_loop_statement,
    DO_WHILE_STATEMENT => visit_do_while_statement => visit_loop_statement,
    FOR_STATEMENT => visit_for_statement => visit_loop_statement,
    FOREACH_STATEMENT => visit_foreach_statement => visit_loop_statement,
    RETURN_STATEMENT => visit_return_statement => visit_statement,
    YIELD_STATEMENT => visit_yield_statement => visit_statement,
    BREAK_STATEMENT => visit_break_statement => visit_statement,
    CONTINUE_STATEMENT => visit_continue_statement => visit_statement,
    THROW_STATEMENT => visit_throw_statement => visit_statement,
    SWITCH_STATEMENT => visit_switch_statement => visit_statement,
    SWITCH_LABEL_STATEMENT => visit_switch_label_statement => visit_statement,
    SWITCH_LABELED_RULE => visit_switch_labeled_rule => visit_statement,
    CASE_LABEL_ELEMENT_LIST => visit_case_label_element_list => visit_node,
    DEFAULT_CASE_LABEL_ELEMENT => visit_default_case_label_element => visit_node,
    EXPRESSION_LIST => visit_expression_list => visit_node,
    REFERENCE_EXPRESSION => visit_reference_expression => visit_expression,
    LITERAL_EXPRESSION => visit_literal_expression => visit_expression,
    THIS_EXPRESSION => visit_this_expression => visit_expression,
    PARENTH_EXPRESSION => visit_parenthesized_expression => visit_expression,
    BINARY_EXPRESSION => visit_binary_expression => visit_expression,
    PREFIX_EXPRESSION => visit_prefix_expression => visit_expression,
    POSTFIX_EXPRESSION => visit_postfix_expression => visit_expression,
    TYPE_CAST_EXPRESSION => visit_type_cast_expression => visit_expression,
    CONDITIONAL_EXPRESSION => visit_conditional_expression => visit_expression,
    ASSIGNMENT_EXPRESSION => visit_assignment_expression => visit_expression,
    METHOD_CALL_EXPRESSION => visit_method_call_expression => visit_expression,
    NEW_EXPRESSION => visit_new_expression => visit_expression,
    ARRAY_ACCESS_EXPRESSION => visit_array_access_expression => visit_expression,
    INSTANCE_OF_EXPRESSION => visit_instance_of_expression => visit_expression,
    SWITCH_EXPRESSION => visit_switch_expression => visit_expression,
    TYPE_TEST_PATTERN => visit_type_test_pattern => visit_pattern,
    PATTERN_VARIABLE => visit_pattern_variable => visit_variable,
    RECORD_PATTERN => visit_record_pattern => visit_pattern,
    DECONSTRUCTION_LIST => visit_deconstruction_list => visit_node,
    PARENTHESIZED_PATTERN => visit_parenthesized_pattern => visit_pattern,
    UNNAMED_PATTERN => visit_unnamed_pattern => visit_pattern,
    GUARDED_PATTERN => visit_guarded_pattern => visit_pattern,
    ERROR => visit_error_element => visit_node,
}

fn dispatch_token<V: Visitor + ?Sized>(token: &SyntaxToken, visitor: &mut V) {
    let kind = token.kind();
    match kind {
        SyntaxKind::WHITESPACE => visitor.visit_whitespace(token),
        SyntaxKind::LINE_COMMENT | SyntaxKind::BLOCK_COMMENT => visitor.visit_comment(token),
        SyntaxKind::IDENT => visitor.visit_identifier(token),
        SyntaxKind::ERROR => visitor.visit_bad_character(token),
        _ if kind_set::LITERALS.contains(kind) => visitor.visit_literal_token(token),
        _ if kind.is_keyword() => visitor.visit_keyword(token),
        _ if kind.is_punct() => visitor.visit_java_token(token),
        _ => visitor.visit_element(&token.clone().into()),
    }
}

/// Entry point of double dispatch
pub trait Accept {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V);
}

impl Accept for SyntaxNode {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        dispatch_node(self, visitor)
    }
}

impl Accept for SyntaxToken {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        dispatch_token(self, visitor)
    }
}

impl Accept for SyntaxElement {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        match self {
            NodeOrToken::Node(node) => node.accept(visitor),
            NodeOrToken::Token(token) => token.accept(visitor),
        }
    }
}

/// Accept every node and token under `root` in preorder, `root` included
pub fn walk<V: Visitor + ?Sized>(root: &SyntaxNode, visitor: &mut V) {
    for element in root.descendants_with_tokens() {
        element.accept(visitor);
    }
}
