//! Expression wrappers

use super::{
    AstNode, SyntaxKind, SyntaxNode, SyntaxToken, consistent, required_node, role_node,
    role_nodes, role_token,
};
use super::{CodeBlock, CodeReference, Pattern, TypeElement};
use crate::tree::{HasRoles, Precedence, Role};

ast_node!(ExpressionList, EXPRESSION_LIST);

impl ExpressionList {
    role_nodes_method!(expressions, Expression, ListElement);

    pub fn len(&self) -> usize {
        self.0.find_children_by_role(Role::ListElement).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

ast_node!(ReferenceExpression, REFERENCE_EXPRESSION);

impl ReferenceExpression {
    role_node_method!(qualifier, Expression, Qualifier);
    role_token_method!(reference_name, ReferenceName);

    pub fn name_text(&self) -> Option<String> {
        self.reference_name().map(|t| t.text().to_string())
    }

    /// `a` rather than `x.a`
    pub fn is_qualified(&self) -> bool {
        self.qualifier().is_some()
    }
}

ast_node!(LiteralExpression, LITERAL_EXPRESSION);

impl LiteralExpression {
    role_token_method!(token, Literal);

    pub fn literal_kind(&self) -> Option<SyntaxKind> {
        self.token().map(|t| t.kind())
    }

    /// String or char literal
    pub fn is_textual(&self) -> bool {
        matches!(
            self.literal_kind(),
            Some(SyntaxKind::STRING_LITERAL | SyntaxKind::CHAR_LITERAL)
        )
    }
}

ast_node!(ThisExpression, THIS_EXPRESSION);

ast_node!(ParenthesizedExpression, PARENTH_EXPRESSION);

impl ParenthesizedExpression {
    role_node_method!(expression, Expression, Expression);
}

ast_node!(BinaryExpression, BINARY_EXPRESSION);

impl BinaryExpression {
    required_node_method!(lhs, Expression, LOperand);
    role_node_method!(rhs, Expression, ROperand);

    pub fn operator(&self) -> Option<SyntaxKind> {
        role_token(&self.0, Role::OperationSign).map(|t| t.kind())
    }

    pub fn precedence(&self) -> Option<Precedence> {
        self.operator().and_then(Precedence::of_operator)
    }
}

ast_node!(PrefixExpression, PREFIX_EXPRESSION);

impl PrefixExpression {
    role_node_method!(operand, Expression, Operand);

    pub fn operator(&self) -> Option<SyntaxKind> {
        role_token(&self.0, Role::OperationSign).map(|t| t.kind())
    }
}

ast_node!(PostfixExpression, POSTFIX_EXPRESSION);

impl PostfixExpression {
    required_node_method!(operand, Expression, Operand);

    pub fn operator(&self) -> Option<SyntaxKind> {
        role_token(&self.0, Role::OperationSign).map(|t| t.kind())
    }
}

ast_node!(TypeCastExpression, TYPE_CAST_EXPRESSION);

impl TypeCastExpression {
    role_node_method!(cast_type, TypeElement, CastType);
    role_node_method!(operand, Expression, Operand);
}

ast_node!(ConditionalExpression, CONDITIONAL_EXPRESSION);

impl ConditionalExpression {
    required_node_method!(condition, Expression, Condition);
    role_node_method!(then_expression, Expression, ThenExpression);
    role_node_method!(else_expression, Expression, ElseExpression);
}

ast_node!(AssignmentExpression, ASSIGNMENT_EXPRESSION);

impl AssignmentExpression {
    required_node_method!(lhs, Expression, LOperand);
    role_node_method!(rhs, Expression, ROperand);

    pub fn operator(&self) -> Option<SyntaxKind> {
        role_token(&self.0, Role::OperationSign).map(|t| t.kind())
    }

    /// `+=`, `<<=` and the other operator-assignments
    pub fn is_compound(&self) -> bool {
        self.operator().is_some_and(|op| op != SyntaxKind::EQ)
    }
}

ast_node!(MethodCallExpression, METHOD_CALL_EXPRESSION);

impl MethodCallExpression {
    required_node_method!(method_expression, ReferenceExpression, MethodExpression);
    role_node_method!(argument_list, ExpressionList, ArgumentList);

    pub fn method_name(&self) -> Option<String> {
        self.method_expression().name_text()
    }

    pub fn arguments(&self) -> Vec<Expression> {
        self.argument_list()
            .map(|list| list.expressions())
            .unwrap_or_default()
    }
}

ast_node!(NewExpression, NEW_EXPRESSION);

impl NewExpression {
    role_node_method!(class_reference, CodeReference, ClassReference);
    role_token_method!(primitive, PrimitiveType);
    role_node_method!(argument_list, ExpressionList, ArgumentList);
    role_nodes_method!(dimensions, Expression, ArrayDimension);

    /// `new int[n]` or `new T[n][]`
    pub fn is_array_creation(&self) -> bool {
        self.argument_list().is_none()
    }
}

ast_node!(ArrayAccessExpression, ARRAY_ACCESS_EXPRESSION);

impl ArrayAccessExpression {
    required_node_method!(array, Expression, ArrayExpression);
    role_node_method!(index, Expression, IndexExpression);
}

ast_node!(InstanceOfExpression, INSTANCE_OF_EXPRESSION);

impl InstanceOfExpression {
    required_node_method!(operand, Expression, Operand);
    role_node_method!(check_type, TypeElement, CheckType);
    role_node_method!(pattern, Pattern, Pattern);
}

ast_node!(SwitchExpression, SWITCH_EXPRESSION);

impl SwitchExpression {
    role_node_method!(selector, Expression, Selector);
    role_node_method!(body, CodeBlock, SwitchBody);
}

ast_enum! {
    /// Any expression
    Expression {
        Reference(ReferenceExpression) = REFERENCE_EXPRESSION,
        Literal(LiteralExpression) = LITERAL_EXPRESSION,
        This(ThisExpression) = THIS_EXPRESSION,
        Parenthesized(ParenthesizedExpression) = PARENTH_EXPRESSION,
        Binary(BinaryExpression) = BINARY_EXPRESSION,
        Prefix(PrefixExpression) = PREFIX_EXPRESSION,
        Postfix(PostfixExpression) = POSTFIX_EXPRESSION,
        TypeCast(TypeCastExpression) = TYPE_CAST_EXPRESSION,
        Conditional(ConditionalExpression) = CONDITIONAL_EXPRESSION,
        Assignment(AssignmentExpression) = ASSIGNMENT_EXPRESSION,
        MethodCall(MethodCallExpression) = METHOD_CALL_EXPRESSION,
        New(NewExpression) = NEW_EXPRESSION,
        ArrayAccess(ArrayAccessExpression) = ARRAY_ACCESS_EXPRESSION,
        InstanceOf(InstanceOfExpression) = INSTANCE_OF_EXPRESSION,
        Switch(SwitchExpression) = SWITCH_EXPRESSION,
    }
}

impl Expression {
    /// Binding strength of the outermost operator
    pub fn precedence(&self) -> Precedence {
        crate::tree::precedence_of(self.syntax())
    }

    /// Strip any number of enclosing parentheses
    pub fn skip_parentheses(self) -> Option<Expression> {
        let mut current = self;
        while let Expression::Parenthesized(inner) = current {
            current = inner.expression()?;
        }
        Some(current)
    }

    /// First token of the expression, used to detect fused signs
    pub fn first_token(&self) -> Option<SyntaxToken> {
        self.syntax().first_token()
    }

    /// The node holding this expression, skipping enclosing parentheses
    pub fn parent_skipping_parentheses(&self) -> Option<SyntaxNode> {
        let mut parent = self.syntax().parent();
        while let Some(node) = parent {
            if node.kind() != SyntaxKind::PARENTH_EXPRESSION {
                return Some(node);
            }
            parent = node.parent();
        }
        None
    }

    /// Role this expression holds in its parent
    pub fn role(&self) -> Option<Role> {
        let parent = self.syntax().parent()?;
        consistent(parent.role_of(&self.syntax().clone().into()))
    }
}
