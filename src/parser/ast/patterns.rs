//! Pattern wrappers for `instanceof` and `case` labels

use super::{
    AstNode, SyntaxKind, SyntaxNode, SyntaxToken, required_node, role_node, role_nodes,
    role_token,
};
use super::{Expression, ModifierList, TypeElement};
use crate::tree::Role;

ast_node!(TypeTestPattern, TYPE_TEST_PATTERN);

impl TypeTestPattern {
    required_node_method!(variable, PatternVariable, PatternVariable);
}

ast_node!(PatternVariable, PATTERN_VARIABLE);

impl PatternVariable {
    role_node_method!(modifier_list, ModifierList, ModifierList);
    role_node_method!(declared_type, TypeElement, Type);

    /// The binder token, which may be `_`
    pub fn name(&self) -> Option<SyntaxToken> {
        role_token(&self.0, Role::Name)
    }

    /// `None` for unnamed binders
    pub fn name_text(&self) -> Option<String> {
        self.name()
            .filter(|t| t.kind() != SyntaxKind::UNDERSCORE)
            .map(|t| t.text().to_string())
    }

    pub fn is_unnamed(&self) -> bool {
        self.name()
            .is_some_and(|t| t.kind() == SyntaxKind::UNDERSCORE)
    }
}

ast_node!(RecordPattern, RECORD_PATTERN);

impl RecordPattern {
    required_node_method!(record_type, TypeElement, Type);
    role_node_method!(deconstruction_list, DeconstructionList, DeconstructionList);

    pub fn components(&self) -> Vec<Pattern> {
        self.deconstruction_list()
            .map(|list| list.components())
            .unwrap_or_default()
    }
}

ast_node!(DeconstructionList, DECONSTRUCTION_LIST);

impl DeconstructionList {
    role_nodes_method!(components, Pattern, DeconstructionComponent);
}

ast_node!(ParenthesizedPattern, PARENTHESIZED_PATTERN);

impl ParenthesizedPattern {
    role_node_method!(pattern, Pattern, Pattern);
}

ast_node!(UnnamedPattern, UNNAMED_PATTERN);

ast_node!(GuardedPattern, GUARDED_PATTERN);

impl GuardedPattern {
    role_node_method!(pattern, Pattern, Pattern);
    role_node_method!(guard, Expression, GuardingExpression);
}

ast_enum! {
    /// Any pattern, guarded ones included
    Pattern {
        TypeTest(TypeTestPattern) = TYPE_TEST_PATTERN,
        Record(RecordPattern) = RECORD_PATTERN,
        Parenthesized(ParenthesizedPattern) = PARENTHESIZED_PATTERN,
        Unnamed(UnnamedPattern) = UNNAMED_PATTERN,
        Guarded(GuardedPattern) = GUARDED_PATTERN,
    }
}

impl Pattern {
    /// Pattern variables this pattern binds, in source order, unnamed
    /// binders excluded
    pub fn binders(&self) -> Vec<PatternVariable> {
        self.syntax()
            .descendants()
            .filter(|n| n.kind() == SyntaxKind::PATTERN_VARIABLE)
            .filter(|n| !is_inside_guard(n, self.syntax()))
            .filter_map(PatternVariable::cast)
            .filter(|v| !v.is_unnamed())
            .collect()
    }
}

/// Whether `node` sits in a `when` guard below `top`
fn is_inside_guard(node: &SyntaxNode, top: &SyntaxNode) -> bool {
    node.ancestors().take_while(|a| a != top).any(|a| {
        a.parent()
            .filter(|p| p.kind() == SyntaxKind::GUARDED_PATTERN)
            .and_then(|p| role_node::<Expression>(&p, Role::GuardingExpression))
            .is_some_and(|guard| guard.syntax() == &a)
    })
}
